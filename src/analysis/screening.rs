//! Portal-variant screening: form fields in, per-field verdicts out.
//!
//! Inputs arrive as raw strings. A field that fails numeric conversion
//! becomes an `error` row with value "N/A" and never aborts the request.
//! A missing field defaults to zero.

use serde::{Deserialize, Serialize};

use super::risk::screening_summary;

/// Screening cutoffs are strict comparisons, distinct from the banded
/// API-variant thresholds on purpose.
const GLUCOSE_RISK_ABOVE: f64 = 140.0;
const SYSTOLIC_RISK_ABOVE: f64 = 140.0;
const DIASTOLIC_RISK_ABOVE: f64 = 90.0;
const CHOLESTEROL_RISK_ABOVE: f64 = 200.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldStatus {
    Normal,
    Risk,
    Error,
}

#[derive(Clone, Debug, Serialize)]
pub struct FieldResult {
    pub parameter: &'static str,
    pub value: String,
    pub status: FieldStatus,
    pub message: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct ScreeningReport {
    pub results: Vec<FieldResult>,
    pub overall_status: FieldStatus,
    pub overall_message: String,
}

/// Raw form fields relevant to screening. `None` means the field was
/// absent from the submission.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScreeningInput<'a> {
    pub glucose: Option<&'a str>,
    pub systolic_bp: Option<&'a str>,
    pub diastolic_bp: Option<&'a str>,
    pub cholesterol: Option<&'a str>,
}

pub fn screen(input: &ScreeningInput<'_>) -> ScreeningReport {
    let results = vec![
        glucose_result(input.glucose),
        blood_pressure_result(input.systolic_bp, input.diastolic_bp),
        cholesterol_result(input.cholesterol),
    ];

    let risk_count = results
        .iter()
        .filter(|r| r.status == FieldStatus::Risk)
        .count();
    let overall_status = if risk_count > 0 {
        FieldStatus::Risk
    } else {
        FieldStatus::Normal
    };

    ScreeningReport {
        results,
        overall_status,
        overall_message: screening_summary(risk_count),
    }
}

/// Missing fields default to zero; present-but-unparsable fields are a
/// conversion error.
fn parse_field(raw: Option<&str>) -> Result<f64, ()> {
    match raw {
        None => Ok(0.0),
        Some(text) => text.trim().parse::<f64>().map_err(|_| ()),
    }
}

fn glucose_result(raw: Option<&str>) -> FieldResult {
    match parse_field(raw) {
        Ok(glucose) if glucose > GLUCOSE_RISK_ABOVE => FieldResult {
            parameter: "Glucose",
            value: format_value(glucose),
            status: FieldStatus::Risk,
            message: "Possible diabetes risk",
        },
        Ok(glucose) => FieldResult {
            parameter: "Glucose",
            value: format_value(glucose),
            status: FieldStatus::Normal,
            message: "Normal glucose level",
        },
        Err(()) => invalid_field("Glucose"),
    }
}

fn blood_pressure_result(systolic_raw: Option<&str>, diastolic_raw: Option<&str>) -> FieldResult {
    match (parse_field(systolic_raw), parse_field(diastolic_raw)) {
        (Ok(systolic), Ok(diastolic)) => {
            let at_risk = systolic > SYSTOLIC_RISK_ABOVE || diastolic > DIASTOLIC_RISK_ABOVE;
            FieldResult {
                parameter: "Blood Pressure",
                value: format!("{}/{}", format_value(systolic), format_value(diastolic)),
                status: if at_risk {
                    FieldStatus::Risk
                } else {
                    FieldStatus::Normal
                },
                message: if at_risk {
                    "Possible hypertension"
                } else {
                    "Normal blood pressure"
                },
            }
        }
        _ => invalid_field("Blood Pressure"),
    }
}

fn cholesterol_result(raw: Option<&str>) -> FieldResult {
    match parse_field(raw) {
        Ok(cholesterol) if cholesterol > CHOLESTEROL_RISK_ABOVE => FieldResult {
            parameter: "Cholesterol",
            value: format_value(cholesterol),
            status: FieldStatus::Risk,
            message: "High cholesterol risk",
        },
        Ok(cholesterol) => FieldResult {
            parameter: "Cholesterol",
            value: format_value(cholesterol),
            status: FieldStatus::Normal,
            message: "Normal cholesterol level",
        },
        Err(()) => invalid_field("Cholesterol"),
    }
}

fn invalid_field(parameter: &'static str) -> FieldResult {
    FieldResult {
        parameter,
        value: "N/A".to_string(),
        status: FieldStatus::Error,
        message: "Invalid input",
    }
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
