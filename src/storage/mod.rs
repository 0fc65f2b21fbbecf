//! Append-only patient store for the portal variant.
//!
//! One SQLite table, created at startup. Rows are inserted on submit and
//! read back newest-first; nothing is ever updated or deleted. Numeric
//! fields that failed form validation are stored as NULL and render as
//! "N/A" downstream.

use chrono::NaiveDateTime;
use sqlx::sqlite::SqlitePool;
use std::path::Path;

use crate::errors::VitalmapError;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS patients (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    age INTEGER,
    gender TEXT,
    glucose REAL,
    systolic_bp REAL,
    diastolic_bp REAL,
    cholesterol REAL,
    diagnosis TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A record as submitted, after per-field numeric conversion.
#[derive(Clone, Debug, Default)]
pub struct NewPatient {
    pub name: String,
    pub age: Option<i64>,
    pub gender: String,
    pub glucose: Option<f64>,
    pub systolic_bp: Option<f64>,
    pub diastolic_bp: Option<f64>,
    pub cholesterol: Option<f64>,
    pub diagnosis: String,
}

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct StoredPatient {
    pub id: i64,
    pub name: String,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub glucose: Option<f64>,
    pub systolic_bp: Option<f64>,
    pub diastolic_bp: Option<f64>,
    pub cholesterol: Option<f64>,
    pub diagnosis: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct PatientStore {
    pool: SqlitePool,
}

impl PatientStore {
    /// Connect and create the schema. The parent directory of a file-backed
    /// database is created first; `mode=rwc` only creates the file itself.
    pub async fn connect(url: &str) -> Result<Self, VitalmapError> {
        if let Some(dir) = database_parent_dir(url) {
            std::fs::create_dir_all(dir)?;
        }

        let pool = SqlitePool::connect(url).await?;
        sqlx::query(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }

    pub async fn insert(&self, patient: &NewPatient) -> Result<i64, VitalmapError> {
        let result = sqlx::query(
            "INSERT INTO patients \
             (name, age, gender, glucose, systolic_bp, diastolic_bp, cholesterol, diagnosis) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&patient.name)
        .bind(patient.age)
        .bind(&patient.gender)
        .bind(patient.glucose)
        .bind(patient.systolic_bp)
        .bind(patient.diastolic_bp)
        .bind(patient.cholesterol)
        .bind(&patient.diagnosis)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Most recent records, newest first. The id tiebreak keeps ordering
    /// strict when several rows share a one-second timestamp.
    pub async fn recent(&self, limit: u32) -> Result<Vec<StoredPatient>, VitalmapError> {
        let rows = sqlx::query_as::<_, StoredPatient>(
            "SELECT id, name, age, gender, glucose, systolic_bp, diastolic_bp, \
             cholesterol, diagnosis, created_at \
             FROM patients ORDER BY created_at DESC, id DESC LIMIT ?",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

/// Parent directory of a `sqlite://path[?params]` url, if file-backed.
fn database_parent_dir(url: &str) -> Option<&Path> {
    let path = url.strip_prefix("sqlite://").unwrap_or(url);
    if path.starts_with(':') || path.contains(":memory:") {
        return None;
    }
    let path = path.split('?').next().unwrap_or(path);
    Path::new(path).parent().filter(|dir| !dir.as_os_str().is_empty())
}
