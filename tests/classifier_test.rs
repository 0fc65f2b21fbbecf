use vitalmap::classifier::{synthetic, TrainedClassifier};
use vitalmap::config::ClassifierConfig;
use vitalmap::core::{Gender, PatientRecord, RiskLevel};

fn default_config() -> ClassifierConfig {
    ClassifierConfig::default()
}

fn flagrant_record() -> PatientRecord {
    PatientRecord {
        age: 60,
        gender: Gender::Male,
        glucose: 300.0,
        systolic_bp: 185.0,
        diastolic_bp: 115.0,
        cholesterol: 350.0,
        bmi: 44.0,
    }
}

#[test]
fn training_is_deterministic_for_a_fixed_seed() {
    let first = TrainedClassifier::train(&default_config()).unwrap();
    let second = TrainedClassifier::train(&default_config()).unwrap();

    for (record, _) in synthetic::generate_cohort(25, 99) {
        assert_eq!(first.predict(&record), second.predict(&record));
    }
}

#[test]
fn confidence_is_a_percentage_with_one_decimal() {
    let model = TrainedClassifier::train(&default_config()).unwrap();

    for (record, _) in synthetic::generate_cohort(50, 7) {
        let prediction = model.predict(&record);
        assert!(prediction.confidence > 0.0 && prediction.confidence <= 100.0);
        let scaled = prediction.confidence * 10.0;
        assert!((scaled - scaled.round()).abs() < 1e-9);
    }
}

#[test]
fn extreme_vitals_predict_high_risk() {
    let model = TrainedClassifier::train(&default_config()).unwrap();
    let prediction = model.predict(&flagrant_record());
    assert_eq!(prediction.predicted_risk, RiskLevel::High);
}

#[test]
fn tree_tracks_its_training_labels_reasonably_well() {
    let config = default_config();
    let model = TrainedClassifier::train(&config).unwrap();

    let cohort = synthetic::generate_cohort(config.samples, config.seed);
    let agreeing = cohort
        .iter()
        .filter(|(record, label)| model.predict(record).predicted_risk == *label)
        .count();

    // A depth-5 tree cannot express the full rule union, but it should do
    // far better than the majority class on its own training data.
    assert!(agreeing as f64 / cohort.len() as f64 > 0.6);
}

#[test]
fn zero_sample_config_is_rejected() {
    let config = ClassifierConfig {
        samples: 0,
        ..default_config()
    };
    assert!(TrainedClassifier::train(&config).is_err());
}

#[test]
fn shallow_trees_still_predict_every_class_argument() {
    let config = ClassifierConfig {
        max_depth: 1,
        ..default_config()
    };
    let model = TrainedClassifier::train(&config).unwrap();
    let prediction = model.predict(&flagrant_record());
    assert!(matches!(
        prediction.predicted_risk,
        RiskLevel::Normal | RiskLevel::Moderate | RiskLevel::High
    ));
}
