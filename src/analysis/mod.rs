pub mod recommendations;
pub mod risk;
pub mod rules;
pub mod screening;
pub mod viz;

use crate::classifier::TrainedClassifier;
use crate::core::{AnalysisReport, MlOutcome, PatientRecord, RuleReport};

/// Run the full per-request pipeline: rule evaluation, optional classifier
/// inference, and chart data. Pure apart from reading the injected
/// classifier handle; the same record always yields the same report.
pub fn analyze_patient(
    record: &PatientRecord,
    classifier: Option<&TrainedClassifier>,
) -> AnalysisReport {
    AnalysisReport {
        rule_results: rule_based_analysis(record),
        ml_results: match classifier {
            Some(model) => MlOutcome::Predicted(model.predict(record)),
            None => MlOutcome::Unavailable {
                error: "Model not trained".to_string(),
            },
        },
        visualization: viz::prepare_visualization(record),
    }
}

fn rule_based_analysis(record: &PatientRecord) -> RuleReport {
    let conditions = rules::evaluate_record(record);
    let risk_level = risk::aggregate_conditions(&conditions);

    RuleReport {
        conditions: conditions.iter().map(|c| c.label().to_string()).collect(),
        risk_factors: conditions
            .iter()
            .map(|c| c.risk_factor().to_string())
            .collect(),
        risk_level,
        risk_emoji: risk_level.emoji().to_string(),
        recommendations: recommendations::generate_recommendations(&conditions),
    }
}
