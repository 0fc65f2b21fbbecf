//! Rule evaluator: measurement record to ordered condition list.

use crate::core::{Condition, PatientRecord};
use crate::thresholds::{classify, BandLevel, Metric};

/// Evaluate every metric independently against the threshold table and
/// collect flagged conditions in metric-declaration order: glucose, blood
/// pressure (combined), cholesterol, BMI.
pub fn evaluate_record(record: &PatientRecord) -> Vec<Condition> {
    let mut conditions = Vec::new();

    match classify(Metric::Glucose, record.glucose).level {
        BandLevel::High => conditions.push(Condition::Diabetes),
        BandLevel::Borderline => conditions.push(Condition::PrediabetesRisk),
        _ => {}
    }

    if let Some(condition) = blood_pressure_condition(record.systolic_bp, record.diastolic_bp) {
        conditions.push(condition);
    }

    match classify(Metric::Cholesterol, record.cholesterol).level {
        BandLevel::High => conditions.push(Condition::HighCholesterol),
        BandLevel::Borderline => conditions.push(Condition::BorderlineHighCholesterol),
        _ => {}
    }

    match classify(Metric::Bmi, record.bmi).level {
        BandLevel::High => conditions.push(Condition::Obesity),
        BandLevel::Borderline => conditions.push(Condition::Overweight),
        BandLevel::Low => conditions.push(Condition::Underweight),
        _ => {}
    }

    conditions
}

/// Either reading exceeding its band triggers the combined condition; the
/// worse of the two readings decides.
fn blood_pressure_condition(systolic: f64, diastolic: f64) -> Option<Condition> {
    let worst = classify(Metric::SystolicBp, systolic)
        .level
        .max(classify(Metric::DiastolicBp, diastolic).level);

    match worst {
        BandLevel::Severe => Some(Condition::Hypertension),
        BandLevel::High => Some(Condition::ElevatedBloodPressure),
        _ => None,
    }
}
