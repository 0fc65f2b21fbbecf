//! Variant 2: form-driven HTML portal.
//!
//! Pages are static templates with `{{{PLACEHOLDER}}}` slots; dynamic
//! rows are built up as strings with every interpolated value escaped.

use actix_web::{http::header::ContentType, web, HttpResponse};
use chrono::Local;
use html_escape::encode_text;
use serde::Deserialize;

use super::PortalState;
use crate::analysis::screening::{screen, FieldStatus, ScreeningInput, ScreeningReport};
use crate::errors::VitalmapError;
use crate::storage::{NewPatient, StoredPatient};

const INDEX_TEMPLATE: &str = include_str!("templates/index.html");
const RESULT_TEMPLATE: &str = include_str!("templates/result.html");
const HISTORY_TEMPLATE: &str = include_str!("templates/history.html");

const HISTORY_LIMIT: u32 = 20;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/analyze", web::post().to(analyze))
        .route("/history", web::get().to(history));
}

/// Raw form fields; every one is optional so a missing input degrades in
/// the screening step instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientForm {
    pub name: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub glucose: Option<String>,
    pub systolic_bp: Option<String>,
    pub diastolic_bp: Option<String>,
    pub cholesterol: Option<String>,
}

async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_TEMPLATE)
}

async fn analyze(
    state: web::Data<PortalState>,
    form: web::Form<PatientForm>,
) -> Result<HttpResponse, VitalmapError> {
    let report = screen(&ScreeningInput {
        glucose: form.glucose.as_deref(),
        systolic_bp: form.systolic_bp.as_deref(),
        diastolic_bp: form.diastolic_bp.as_deref(),
        cholesterol: form.cholesterol.as_deref(),
    });

    state.store.insert(&to_new_patient(&form, &report)).await?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_result(&form, &report)))
}

async fn history(state: web::Data<PortalState>) -> Result<HttpResponse, VitalmapError> {
    let patients = state.store.recent(HISTORY_LIMIT).await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_history(&patients)))
}

/// Numeric fields that fail conversion persist as NULL; the submission
/// itself is never rejected.
fn to_new_patient(form: &PatientForm, report: &ScreeningReport) -> NewPatient {
    NewPatient {
        name: form.name.clone().unwrap_or_default(),
        age: parse_integer(form.age.as_deref()),
        gender: form.gender.clone().unwrap_or_default(),
        glucose: parse_numeric(form.glucose.as_deref()),
        systolic_bp: parse_numeric(form.systolic_bp.as_deref()),
        diastolic_bp: parse_numeric(form.diastolic_bp.as_deref()),
        cholesterol: parse_numeric(form.cholesterol.as_deref()),
        diagnosis: report.overall_message.clone(),
    }
}

fn parse_numeric(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|text| text.trim().parse().ok())
}

fn parse_integer(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|text| text.trim().parse().ok())
}

fn status_class(status: FieldStatus) -> &'static str {
    match status {
        FieldStatus::Normal => "normal",
        FieldStatus::Risk => "risk",
        FieldStatus::Error => "error",
    }
}

fn render_result(form: &PatientForm, report: &ScreeningReport) -> String {
    let mut rows = String::new();
    for result in &report.results {
        rows.push_str(&format!(
            "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            status_class(result.status),
            result.parameter,
            encode_text(&result.value),
            result.message,
        ));
    }

    let name = form.name.as_deref().unwrap_or("Anonymous");
    let age = form.age.as_deref().unwrap_or("-");
    let gender = form.gender.as_deref().unwrap_or("-");

    RESULT_TEMPLATE
        .replace("{{{PATIENT_NAME}}}", &encode_text(name))
        .replace("{{{PATIENT_AGE}}}", &encode_text(age))
        .replace("{{{PATIENT_GENDER}}}", &encode_text(gender))
        .replace("{{{RESULT_ROWS}}}", &rows)
        .replace("{{{OVERALL_CLASS}}}", status_class(report.overall_status))
        .replace(
            "{{{OVERALL_MESSAGE}}}",
            &encode_text(&report.overall_message),
        )
        .replace(
            "{{{CURRENT_DATE}}}",
            &Local::now().format("%B %d, %Y at %I:%M %p").to_string(),
        )
}

fn render_history(patients: &[StoredPatient]) -> String {
    let mut rows = String::new();
    for patient in patients {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            patient.id,
            encode_text(&patient.name),
            display_integer(patient.age),
            encode_text(patient.gender.as_deref().unwrap_or("-")),
            display_numeric(patient.glucose),
            display_numeric(patient.systolic_bp),
            display_numeric(patient.diastolic_bp),
            display_numeric(patient.cholesterol),
            encode_text(patient.diagnosis.as_deref().unwrap_or("-")),
            patient.created_at.format("%Y-%m-%d %H:%M"),
        ));
    }

    if rows.is_empty() {
        rows.push_str("<tr><td colspan=\"10\" class=\"empty\">No records yet</td></tr>\n");
    }

    HISTORY_TEMPLATE
        .replace("{{{HISTORY_ROWS}}}", &rows)
        .replace("{{{RECORD_COUNT}}}", &patients.len().to_string())
}

fn display_numeric(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format!("{}", v as i64),
        Some(v) => format!("{:.1}", v),
        None => "N/A".to_string(),
    }
}

fn display_integer(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "N/A".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::screening::screen;

    fn form_with(glucose: &str) -> PatientForm {
        PatientForm {
            name: Some("Jordan Reyes".to_string()),
            age: Some("44".to_string()),
            gender: Some("Female".to_string()),
            glucose: Some(glucose.to_string()),
            systolic_bp: Some("120".to_string()),
            diastolic_bp: Some("80".to_string()),
            cholesterol: Some("185".to_string()),
        }
    }

    #[test]
    fn result_page_fills_every_placeholder() {
        let form = form_with("150");
        let report = screen(&ScreeningInput {
            glucose: form.glucose.as_deref(),
            systolic_bp: form.systolic_bp.as_deref(),
            diastolic_bp: form.diastolic_bp.as_deref(),
            cholesterol: form.cholesterol.as_deref(),
        });

        let html = render_result(&form, &report);
        assert!(!html.contains("{{{"));
        assert!(html.contains("Jordan Reyes"));
        assert!(html.contains("1 potential health risk(s) detected"));
        assert!(html.contains("class=\"risk\""));
    }

    #[test]
    fn invalid_field_stores_null_and_renders_na() {
        let form = form_with("not-a-number");
        let report = screen(&ScreeningInput {
            glucose: form.glucose.as_deref(),
            systolic_bp: form.systolic_bp.as_deref(),
            diastolic_bp: form.diastolic_bp.as_deref(),
            cholesterol: form.cholesterol.as_deref(),
        });

        let patient = to_new_patient(&form, &report);
        assert_eq!(patient.glucose, None);
        assert_eq!(patient.cholesterol, Some(185.0));
        assert_eq!(patient.diagnosis, "All parameters normal \u{2705}");

        let html = render_result(&form, &report);
        assert!(html.contains("N/A"));
        assert!(html.contains("Invalid input"));
    }

    #[test]
    fn form_values_are_escaped_into_the_page() {
        let mut form = form_with("90");
        form.name = Some("<script>alert('x')</script>".to_string());
        let report = screen(&ScreeningInput::default());

        let html = render_result(&form, &report);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn empty_history_renders_a_placeholder_row() {
        let html = render_history(&[]);
        assert!(html.contains("No records yet"));
        assert!(!html.contains("{{{"));
    }
}
