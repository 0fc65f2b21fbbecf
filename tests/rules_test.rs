use proptest::prelude::*;

use vitalmap::analysis::risk::aggregate_conditions;
use vitalmap::analysis::rules::evaluate_record;
use vitalmap::core::{Condition, Gender, PatientRecord, RiskLevel};
use vitalmap::thresholds::{classify, Metric};

fn record(glucose: f64, systolic: f64, diastolic: f64, cholesterol: f64, bmi: f64) -> PatientRecord {
    PatientRecord {
        age: 45,
        gender: Gender::Female,
        glucose,
        systolic_bp: systolic,
        diastolic_bp: diastolic,
        cholesterol,
        bmi,
    }
}

fn baseline_with_glucose(glucose: f64) -> PatientRecord {
    record(glucose, 110.0, 70.0, 180.0, 22.0)
}

fn baseline_with_bmi(bmi: f64) -> PatientRecord {
    record(90.0, 110.0, 70.0, 180.0, bmi)
}

proptest! {
    #[test]
    fn glucose_at_or_above_126_always_flags_diabetes(glucose in 126.0..500.0f64) {
        let conditions = evaluate_record(&baseline_with_glucose(glucose));
        prop_assert!(conditions.contains(&Condition::Diabetes));
        prop_assert!(!conditions.contains(&Condition::PrediabetesRisk));
    }

    #[test]
    fn glucose_in_the_prediabetes_window_flags_prediabetes(glucose in 100.0..126.0f64) {
        let conditions = evaluate_record(&baseline_with_glucose(glucose));
        prop_assert!(conditions.contains(&Condition::PrediabetesRisk));
        prop_assert!(!conditions.contains(&Condition::Diabetes));
    }

    #[test]
    fn glucose_below_100_flags_nothing_glycemic(glucose in 0.0..100.0f64) {
        let conditions = evaluate_record(&baseline_with_glucose(glucose));
        prop_assert!(!conditions.contains(&Condition::Diabetes));
        prop_assert!(!conditions.contains(&Condition::PrediabetesRisk));
    }

    #[test]
    fn hypertension_wins_over_elevated_bp(
        systolic in 140.0..250.0f64,
        diastolic in 40.0..130.0f64,
    ) {
        let conditions = evaluate_record(&record(90.0, systolic, diastolic, 180.0, 22.0));
        prop_assert!(conditions.contains(&Condition::Hypertension));
        prop_assert!(!conditions.contains(&Condition::ElevatedBloodPressure));
    }

    #[test]
    fn band_classification_is_total(value in -1000.0..2000.0f64) {
        for metric in [
            Metric::Glucose,
            Metric::SystolicBp,
            Metric::DiastolicBp,
            Metric::Cholesterol,
            Metric::Bmi,
        ] {
            // Every finite value lands in exactly one band.
            let band = classify(metric, value);
            prop_assert!(value >= band.lower || band.lower == f64::NEG_INFINITY);
        }
    }

    #[test]
    fn same_record_always_yields_the_same_conditions(
        glucose in 0.0..400.0f64,
        systolic in 60.0..220.0f64,
        diastolic in 30.0..140.0f64,
        cholesterol in 80.0..400.0f64,
        bmi in 10.0..55.0f64,
    ) {
        let input = record(glucose, systolic, diastolic, cholesterol, bmi);
        let first = evaluate_record(&input);
        let second = evaluate_record(&input);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            aggregate_conditions(&first),
            aggregate_conditions(&second)
        );
    }
}

#[test]
fn bmi_bands_follow_the_documented_cutoffs() {
    assert!(evaluate_record(&baseline_with_bmi(30.0)).contains(&Condition::Obesity));
    assert!(evaluate_record(&baseline_with_bmi(29.9)).contains(&Condition::Overweight));
    assert!(evaluate_record(&baseline_with_bmi(25.0)).contains(&Condition::Overweight));
    assert!(evaluate_record(&baseline_with_bmi(18.4)).contains(&Condition::Underweight));
    assert!(evaluate_record(&baseline_with_bmi(22.0)).is_empty());
}

#[test]
fn elevated_bp_window_sits_below_hypertension() {
    let conditions = evaluate_record(&record(90.0, 135.0, 70.0, 180.0, 22.0));
    assert_eq!(conditions, vec![Condition::ElevatedBloodPressure]);

    let conditions = evaluate_record(&record(90.0, 120.0, 87.0, 180.0, 22.0));
    assert_eq!(conditions, vec![Condition::ElevatedBloodPressure]);

    let conditions = evaluate_record(&record(90.0, 129.0, 84.0, 180.0, 22.0));
    assert!(conditions.is_empty());
}

#[test]
fn three_flagged_metrics_aggregate_to_high_risk() {
    let conditions = evaluate_record(&record(130.0, 125.0, 80.0, 210.0, 27.0));
    assert_eq!(conditions.len(), 3);
    assert_eq!(aggregate_conditions(&conditions), RiskLevel::High);
}

#[test]
fn borderline_everything_matches_the_expected_condition_list() {
    let conditions = evaluate_record(&record(110.0, 125.0, 80.0, 210.0, 27.0));
    let labels: Vec<&str> = conditions.iter().map(|c| c.label()).collect();
    assert_eq!(
        labels,
        vec!["Prediabetes Risk", "Borderline High Cholesterol", "Overweight"]
    );
    assert_eq!(aggregate_conditions(&conditions), RiskLevel::High);
}

#[test]
fn healthy_record_has_no_conditions_and_normal_risk() {
    let conditions = evaluate_record(&record(90.0, 110.0, 70.0, 180.0, 22.0));
    assert!(conditions.is_empty());
    assert_eq!(aggregate_conditions(&conditions), RiskLevel::Normal);
}

#[test]
fn one_or_two_conditions_are_moderate() {
    let one = evaluate_record(&record(110.0, 110.0, 70.0, 180.0, 22.0));
    assert_eq!(one.len(), 1);
    assert_eq!(aggregate_conditions(&one), RiskLevel::Moderate);

    let two = evaluate_record(&record(110.0, 145.0, 70.0, 180.0, 22.0));
    assert_eq!(two.len(), 2);
    assert_eq!(aggregate_conditions(&two), RiskLevel::Moderate);
}
