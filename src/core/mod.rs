use serde::{Deserialize, Serialize};

/// One set of vital-sign measurements for a single patient. Immutable once
/// received from a request; carries no identity beyond its values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub age: u32,
    pub gender: Gender,
    pub glucose: f64,
    pub systolic_bp: f64,
    pub diastolic_bp: f64,
    pub cholesterol: f64,
    pub bmi: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(alias = "female", alias = "FEMALE")]
    Female,
    #[serde(alias = "male", alias = "MALE")]
    Male,
}

impl Gender {
    /// Numeric encoding for the classifier feature vector. Alphabetical
    /// order, the way a label encoder assigns codes.
    pub fn encoded(&self) -> f64 {
        match self {
            Gender::Female => 0.0,
            Gender::Male => 1.0,
        }
    }
}

/// A named clinical flag derived from one or more threshold bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    Diabetes,
    PrediabetesRisk,
    Hypertension,
    ElevatedBloodPressure,
    HighCholesterol,
    BorderlineHighCholesterol,
    Obesity,
    Overweight,
    Underweight,
}

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Diabetes => "Diabetes",
            Condition::PrediabetesRisk => "Prediabetes Risk",
            Condition::Hypertension => "Hypertension",
            Condition::ElevatedBloodPressure => "Elevated Blood Pressure",
            Condition::HighCholesterol => "High Cholesterol",
            Condition::BorderlineHighCholesterol => "Borderline High Cholesterol",
            Condition::Obesity => "Obesity",
            Condition::Overweight => "Overweight",
            Condition::Underweight => "Underweight",
        }
    }

    /// One-line risk-factor description paired with the condition.
    pub fn risk_factor(&self) -> &'static str {
        match self {
            Condition::Diabetes => "High glucose level",
            Condition::PrediabetesRisk => "Elevated glucose level",
            Condition::Hypertension => "High blood pressure",
            Condition::ElevatedBloodPressure => "Elevated blood pressure",
            Condition::HighCholesterol => "High cholesterol level",
            Condition::BorderlineHighCholesterol => "Borderline cholesterol level",
            Condition::Obesity => "High BMI",
            Condition::Overweight => "Elevated BMI",
            Condition::Underweight => "Low BMI",
        }
    }

    /// Recommendation blocks are keyed by category, not by raw condition,
    /// so two conditions in the same category share one advice block.
    pub fn category(&self) -> ConditionCategory {
        match self {
            Condition::Diabetes | Condition::PrediabetesRisk => ConditionCategory::Glycemic,
            Condition::Hypertension | Condition::ElevatedBloodPressure => {
                ConditionCategory::BloodPressure
            }
            Condition::HighCholesterol | Condition::BorderlineHighCholesterol => {
                ConditionCategory::Cholesterol
            }
            Condition::Obesity | Condition::Overweight => ConditionCategory::ExcessWeight,
            Condition::Underweight => ConditionCategory::Underweight,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionCategory {
    Glycemic,
    BloodPressure,
    Cholesterol,
    ExcessWeight,
    Underweight,
}

/// Aggregate severity label summarizing all conditions for one record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Normal,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Normal => "Normal",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            RiskLevel::Normal => "\u{1F7E2}",
            RiskLevel::Moderate => "\u{1F7E1}",
            RiskLevel::High => "\u{1F534}",
        }
    }
}

/// Output of the rule evaluator plus aggregation and recommendations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RuleReport {
    pub conditions: Vec<String>,
    pub risk_factors: Vec<String>,
    pub risk_level: RiskLevel,
    pub risk_emoji: String,
    pub recommendations: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MlPrediction {
    pub predicted_risk: RiskLevel,
    pub confidence: f64,
}

/// A classifier invoked before training yields a soft error object in the
/// response body, never an HTTP failure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MlOutcome {
    Predicted(MlPrediction),
    Unavailable { error: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VizRange {
    pub min: f64,
    pub max: f64,
}

/// Chart-ready parallel arrays: one entry per displayed metric.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VizData {
    pub metrics: Vec<String>,
    pub values: Vec<f64>,
    pub normal_ranges: Vec<VizRange>,
    pub colors: Vec<String>,
}

/// Full per-request analysis result. Created fresh per request; no
/// persistence or identity.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub rule_results: RuleReport,
    pub ml_results: MlOutcome,
    pub visualization: VizData,
}
