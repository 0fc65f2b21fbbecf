//! Minimal CSV intake for uploaded patient files.
//!
//! Line-oriented, comma-separated, header row required. Values that look
//! numeric become JSON numbers, everything else stays a string. Quoted
//! fields are not supported; vitals exports don't use them.

use serde_json::{Map, Value};

use crate::errors::VitalmapError;

#[derive(Clone, Debug)]
pub struct CsvSummary {
    pub headers: Vec<String>,
    /// The first data row, keyed by header.
    pub first_record: Map<String, Value>,
    pub total_records: usize,
}

pub fn parse_patient_csv(content: &str) -> Result<CsvSummary, VitalmapError> {
    let mut lines = content.lines().filter(|line| !line.trim().is_empty());

    let header_line = lines
        .next()
        .ok_or_else(|| VitalmapError::validation("CSV file is empty"))?;
    let headers = split_row(header_line);
    if headers.len() < 2 {
        return Err(VitalmapError::validation(
            "Invalid file format. Please upload a CSV file.",
        ));
    }

    let mut first_record = Map::new();
    let mut total_records = 0usize;

    for line in lines {
        total_records += 1;
        if total_records == 1 {
            for (header, field) in headers.iter().zip(split_row(line)) {
                first_record.insert(header.clone(), parse_value(&field));
            }
        }
    }

    if total_records == 0 {
        return Err(VitalmapError::validation("CSV file contains no records"));
    }

    Ok(CsvSummary {
        headers,
        first_record,
        total_records,
    })
}

fn split_row(line: &str) -> Vec<String> {
    line.split(',').map(|field| field.trim().to_string()).collect()
}

/// Prefer integers, then floats, then raw text.
fn parse_value(field: &str) -> Value {
    if let Ok(int) = field.parse::<i64>() {
        return Value::from(int);
    }
    if let Ok(float) = field.parse::<f64>() {
        if float.is_finite() {
            return Value::from(float);
        }
    }
    Value::from(field)
}
