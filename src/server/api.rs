//! Variant 1: JSON API handlers.

use actix_web::{error, web, HttpRequest, HttpResponse};
use chrono::Utc;
use serde_json::json;

use super::ApiState;
use crate::analysis::analyze_patient;
use crate::classifier::synthetic;
use crate::core::PatientRecord;
use crate::errors::VitalmapError;
use crate::io::csv::parse_patient_csv;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/analyze", web::post().to(analyze))
        .route("/api/upload_csv", web::post().to(upload_csv))
        .route("/api/generate_sample", web::get().to(generate_sample))
        .route("/health", web::get().to(health));
}

/// Malformed or missing JSON bodies become a 400 with the same
/// `{"error": ...}` shape the other endpoints use.
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    let body = json!({ "error": err.to_string() });
    error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

async fn analyze(state: web::Data<ApiState>, record: web::Json<PatientRecord>) -> HttpResponse {
    let report = analyze_patient(&record, state.classifier.as_ref());
    HttpResponse::Ok().json(report)
}

/// Accepts the CSV file content as the request body, stores a copy under
/// the upload directory, and echoes the first record plus the row count.
async fn upload_csv(
    state: web::Data<ApiState>,
    body: web::Bytes,
) -> Result<HttpResponse, VitalmapError> {
    let content = std::str::from_utf8(&body).map_err(|_| {
        VitalmapError::validation("Invalid file format. Please upload a CSV file.")
    })?;
    if content.trim().is_empty() {
        return Err(VitalmapError::validation("No file provided"));
    }

    let summary = parse_patient_csv(content)?;

    let upload_dir = &state.config.uploads.dir;
    std::fs::create_dir_all(upload_dir)?;
    let filename = format!("upload_{}.csv", Utc::now().format("%Y%m%d_%H%M%S_%3f"));
    std::fs::write(upload_dir.join(filename), content)?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "patient_data": summary.first_record,
        "total_records": summary.total_records,
    })))
}

async fn generate_sample() -> HttpResponse {
    HttpResponse::Ok().json(synthetic::sample_patient())
}

async fn health(state: web::Data<ApiState>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "model_trained": state.classifier.is_some(),
        "upload_folder": &state.config.uploads.dir,
    }))
}
