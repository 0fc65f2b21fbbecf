//! Deterministic synthetic cohort for training the demo classifier.
//!
//! Records are drawn from fixed distributions under a fixed seed and
//! labeled by re-applying the shared threshold table. The training label
//! is severity-based: any metric in its worst band makes the record
//! High, unlike the serving path's count heuristic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::core::{Gender, PatientRecord, RiskLevel};
use crate::thresholds::{classify, BandLevel, Metric};

/// Seed shared by cohort generation and the sample endpoint.
pub const DEFAULT_SEED: u64 = 42;

pub fn generate_cohort(samples: usize, seed: u64) -> Vec<(PatientRecord, RiskLevel)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let glucose = normal(100.0, 30.0);
    let systolic = normal(120.0, 15.0);
    let diastolic = normal(80.0, 10.0);
    let cholesterol = normal(190.0, 30.0);
    let bmi = normal(25.0, 5.0);

    (0..samples)
        .map(|_| {
            let record = PatientRecord {
                age: rng.gen_range(18..80),
                gender: if rng.gen_bool(0.5) {
                    Gender::Male
                } else {
                    Gender::Female
                },
                glucose: glucose.sample(&mut rng),
                systolic_bp: systolic.sample(&mut rng),
                diastolic_bp: diastolic.sample(&mut rng),
                cholesterol: cholesterol.sample(&mut rng),
                bmi: bmi.sample(&mut rng),
            };
            let label = training_label(&record);
            (record, label)
        })
        .collect()
}

/// Severity-max labeling: the worst per-metric code decides the class.
pub fn training_label(record: &PatientRecord) -> RiskLevel {
    let codes = [
        glucose_code(record.glucose),
        blood_pressure_code(record.systolic_bp, record.diastolic_bp),
        cholesterol_code(record.cholesterol),
        bmi_code(record.bmi),
    ];

    match codes.iter().max() {
        Some(2) => RiskLevel::High,
        Some(1) => RiskLevel::Moderate,
        _ => RiskLevel::Normal,
    }
}

fn glucose_code(value: f64) -> u8 {
    match classify(Metric::Glucose, value).level {
        BandLevel::High => 2,
        BandLevel::Borderline => 1,
        _ => 0,
    }
}

fn blood_pressure_code(systolic: f64, diastolic: f64) -> u8 {
    let worst = classify(Metric::SystolicBp, systolic)
        .level
        .max(classify(Metric::DiastolicBp, diastolic).level);
    match worst {
        BandLevel::Severe => 2,
        BandLevel::High => 1,
        _ => 0,
    }
}

fn cholesterol_code(value: f64) -> u8 {
    match classify(Metric::Cholesterol, value).level {
        BandLevel::High => 2,
        BandLevel::Borderline => 1,
        _ => 0,
    }
}

/// Underweight counts as a moderate code, same as overweight.
fn bmi_code(value: f64) -> u8 {
    match classify(Metric::Bmi, value).level {
        BandLevel::High => 2,
        BandLevel::Borderline | BandLevel::Low => 1,
        _ => 0,
    }
}

/// Demo patient surfaced by the sample endpoint. Fixed seed, so every
/// call returns the same record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SamplePatient {
    pub patient_id: String,
    #[serde(flatten)]
    pub record: PatientRecord,
}

pub fn sample_patient() -> SamplePatient {
    let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
    SamplePatient {
        patient_id: format!("SAMPLE_{}", rng.gen_range(1000..10000)),
        record: PatientRecord {
            age: rng.gen_range(25..75),
            gender: if rng.gen_bool(0.5) {
                Gender::Male
            } else {
                Gender::Female
            },
            glucose: rng.gen_range(70..180) as f64,
            systolic_bp: rng.gen_range(90..160) as f64,
            diastolic_bp: rng.gen_range(60..100) as f64,
            cholesterol: rng.gen_range(150..280) as f64,
            bmi: (rng.gen_range(18.0..35.0) * 10.0_f64).round() / 10.0,
        },
    }
}

fn normal(mean: f64, std_dev: f64) -> Normal<f64> {
    Normal::new(mean, std_dev).expect("standard deviation is positive")
}
