// Export modules for library usage
pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod server;
pub mod storage;
pub mod thresholds;

// Re-export commonly used types
pub use crate::core::{
    AnalysisReport, Condition, ConditionCategory, Gender, MlOutcome, MlPrediction, PatientRecord,
    RiskLevel, RuleReport, VizData, VizRange,
};

pub use crate::analysis::{
    analyze_patient, recommendations::generate_recommendations, rules::evaluate_record,
    screening::{screen, FieldStatus, ScreeningInput, ScreeningReport},
};

pub use crate::classifier::{synthetic::generate_cohort, TrainedClassifier};

pub use crate::errors::VitalmapError;

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::thresholds::{classify, normal_range, BandLevel, Metric};

pub use crate::storage::{NewPatient, PatientStore, StoredPatient};
