//! Single source of truth for clinical threshold bands.
//!
//! Both the rule evaluator and the visualization builder classify through
//! this table, so a value can never be flagged by one and colored as
//! normal by the other. Bounds are fixed constants, never configured at
//! runtime. Band lower edges are inclusive; classification selects the
//! highest band whose lower bound the value meets or exceeds (glucose 126
//! is Diabetes, not Prediabetes).

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Glucose,
    SystolicBp,
    DiastolicBp,
    Cholesterol,
    Bmi,
}

impl Metric {
    pub fn display_name(&self) -> &'static str {
        match self {
            Metric::Glucose => "Glucose",
            Metric::SystolicBp => "Systolic BP",
            Metric::DiastolicBp => "Diastolic BP",
            Metric::Cholesterol => "Cholesterol",
            Metric::Bmi => "BMI",
        }
    }
}

/// Severity grade of a band, ascending. Display color follows the grade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BandLevel {
    Low,
    Normal,
    Borderline,
    High,
    Severe,
}

impl BandLevel {
    /// Chart color for a measurement falling in this band.
    pub fn color(&self) -> &'static str {
        match self {
            BandLevel::Low => "#3498db",
            BandLevel::Normal => "#2ecc71",
            BandLevel::Borderline => "#f39c12",
            BandLevel::High | BandLevel::Severe => "#e74c3c",
        }
    }
}

/// A labeled interval; `lower` is inclusive, the upper edge is the next
/// band's lower bound.
#[derive(Clone, Copy, Debug)]
pub struct Band {
    pub level: BandLevel,
    pub label: &'static str,
    pub lower: f64,
}

const GLUCOSE_BANDS: &[Band] = &[
    Band { level: BandLevel::Low, label: "Low", lower: f64::NEG_INFINITY },
    Band { level: BandLevel::Normal, label: "Normal", lower: 70.0 },
    Band { level: BandLevel::Borderline, label: "Prediabetes", lower: 100.0 },
    Band { level: BandLevel::High, label: "Diabetes", lower: 126.0 },
];

const SYSTOLIC_BANDS: &[Band] = &[
    Band { level: BandLevel::Low, label: "Low", lower: f64::NEG_INFINITY },
    Band { level: BandLevel::Normal, label: "Normal", lower: 90.0 },
    Band { level: BandLevel::Borderline, label: "Elevated", lower: 120.0 },
    Band { level: BandLevel::High, label: "Hypertension Stage 1", lower: 130.0 },
    Band { level: BandLevel::Severe, label: "Hypertension Stage 2", lower: 140.0 },
];

const DIASTOLIC_BANDS: &[Band] = &[
    Band { level: BandLevel::Low, label: "Low", lower: f64::NEG_INFINITY },
    Band { level: BandLevel::Normal, label: "Normal", lower: 60.0 },
    Band { level: BandLevel::Borderline, label: "Elevated", lower: 80.0 },
    Band { level: BandLevel::High, label: "Hypertension Stage 1", lower: 85.0 },
    Band { level: BandLevel::Severe, label: "Hypertension Stage 2", lower: 90.0 },
];

const CHOLESTEROL_BANDS: &[Band] = &[
    Band { level: BandLevel::Normal, label: "Normal", lower: f64::NEG_INFINITY },
    Band { level: BandLevel::Borderline, label: "Borderline High", lower: 200.0 },
    Band { level: BandLevel::High, label: "High", lower: 240.0 },
];

const BMI_BANDS: &[Band] = &[
    Band { level: BandLevel::Low, label: "Underweight", lower: f64::NEG_INFINITY },
    Band { level: BandLevel::Normal, label: "Normal", lower: 18.5 },
    Band { level: BandLevel::Borderline, label: "Overweight", lower: 25.0 },
    Band { level: BandLevel::High, label: "Obese", lower: 30.0 },
];

pub fn bands(metric: Metric) -> &'static [Band] {
    match metric {
        Metric::Glucose => GLUCOSE_BANDS,
        Metric::SystolicBp => SYSTOLIC_BANDS,
        Metric::DiastolicBp => DIASTOLIC_BANDS,
        Metric::Cholesterol => CHOLESTEROL_BANDS,
        Metric::Bmi => BMI_BANDS,
    }
}

/// Classify a measurement into its band. Total over finite values; a NaN
/// falls back to the lowest band rather than panicking.
pub fn classify(metric: Metric, value: f64) -> &'static Band {
    let table = bands(metric);
    table
        .iter()
        .rev()
        .find(|band| value >= band.lower)
        .unwrap_or(&table[0])
}

/// The display reference range for a metric: the Normal band's bounds.
pub fn normal_range(metric: Metric) -> (f64, f64) {
    let table = bands(metric);
    let normal = table
        .iter()
        .position(|band| band.level == BandLevel::Normal)
        .unwrap_or(0);
    let lower = if table[normal].lower.is_finite() {
        table[normal].lower
    } else {
        0.0
    };
    let upper = table
        .get(normal + 1)
        .map(|band| band.lower)
        .unwrap_or(f64::INFINITY);
    (lower, upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glucose_boundary_is_inclusive_at_the_higher_band() {
        assert_eq!(classify(Metric::Glucose, 126.0).label, "Diabetes");
        assert_eq!(classify(Metric::Glucose, 125.9).label, "Prediabetes");
        assert_eq!(classify(Metric::Glucose, 100.0).label, "Prediabetes");
        assert_eq!(classify(Metric::Glucose, 99.9).label, "Normal");
        assert_eq!(classify(Metric::Glucose, 69.0).level, BandLevel::Low);
    }

    #[test]
    fn blood_pressure_bands_match_stage_cutoffs() {
        assert_eq!(classify(Metric::SystolicBp, 140.0).level, BandLevel::Severe);
        assert_eq!(classify(Metric::SystolicBp, 139.0).level, BandLevel::High);
        assert_eq!(classify(Metric::SystolicBp, 125.0).level, BandLevel::Borderline);
        assert_eq!(classify(Metric::DiastolicBp, 90.0).level, BandLevel::Severe);
        assert_eq!(classify(Metric::DiastolicBp, 85.0).level, BandLevel::High);
        assert_eq!(classify(Metric::DiastolicBp, 70.0).level, BandLevel::Normal);
    }

    #[test]
    fn cholesterol_has_no_low_band() {
        assert_eq!(classify(Metric::Cholesterol, -5.0).level, BandLevel::Normal);
        assert_eq!(classify(Metric::Cholesterol, 200.0).level, BandLevel::Borderline);
        assert_eq!(classify(Metric::Cholesterol, 240.0).level, BandLevel::High);
    }

    #[test]
    fn bmi_low_side_band_is_underweight() {
        assert_eq!(classify(Metric::Bmi, 18.4).label, "Underweight");
        assert_eq!(classify(Metric::Bmi, 18.5).label, "Normal");
        assert_eq!(classify(Metric::Bmi, 25.0).label, "Overweight");
        assert_eq!(classify(Metric::Bmi, 30.0).label, "Obese");
    }

    #[test]
    fn normal_ranges_follow_the_normal_band() {
        assert_eq!(normal_range(Metric::Glucose), (70.0, 100.0));
        assert_eq!(normal_range(Metric::SystolicBp), (90.0, 120.0));
        assert_eq!(normal_range(Metric::DiastolicBp), (60.0, 80.0));
        assert_eq!(normal_range(Metric::Cholesterol), (0.0, 200.0));
        assert_eq!(normal_range(Metric::Bmi), (18.5, 25.0));
    }

    #[test]
    fn nan_falls_back_to_the_lowest_band() {
        assert_eq!(classify(Metric::Glucose, f64::NAN).level, BandLevel::Low);
    }
}
