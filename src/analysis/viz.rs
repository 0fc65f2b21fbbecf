//! Chart data derived from the shared threshold table.

use crate::core::{PatientRecord, VizData, VizRange};
use crate::thresholds::{classify, normal_range, Metric};

const DISPLAY_METRICS: &[Metric] = &[
    Metric::Glucose,
    Metric::SystolicBp,
    Metric::DiastolicBp,
    Metric::Cholesterol,
    Metric::Bmi,
];

/// Build parallel arrays of names, raw values, reference ranges and band
/// colors. Purely derived; no side effects.
pub fn prepare_visualization(record: &PatientRecord) -> VizData {
    let values = [
        record.glucose,
        record.systolic_bp,
        record.diastolic_bp,
        record.cholesterol,
        record.bmi,
    ];

    let mut data = VizData {
        metrics: Vec::with_capacity(DISPLAY_METRICS.len()),
        values: Vec::with_capacity(DISPLAY_METRICS.len()),
        normal_ranges: Vec::with_capacity(DISPLAY_METRICS.len()),
        colors: Vec::with_capacity(DISPLAY_METRICS.len()),
    };

    for (&metric, &value) in DISPLAY_METRICS.iter().zip(values.iter()) {
        let (min, max) = normal_range(metric);
        data.metrics.push(metric.display_name().to_string());
        data.values.push(value);
        data.normal_ranges.push(VizRange { min, max });
        data.colors
            .push(classify(metric, value).level.color().to_string());
    }

    data
}
