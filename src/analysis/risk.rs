//! Risk aggregation policies.
//!
//! Two deliberately distinct policies live here. The API variant counts
//! all flagged conditions; the portal variant counts only `risk`-status
//! screening fields. They use different cutoffs and vocabularies and are
//! kept as named policies rather than merged.

use crate::core::{Condition, RiskLevel};

/// API-variant policy: a coarse count heuristic over flagged conditions.
/// Zero conditions is Normal, one or two is Moderate, three or more is
/// High. Condition severity is intentionally not weighted.
pub fn aggregate_conditions(conditions: &[Condition]) -> RiskLevel {
    match conditions.len() {
        0 => RiskLevel::Normal,
        1 | 2 => RiskLevel::Moderate,
        _ => RiskLevel::High,
    }
}

/// Portal-variant policy: summary line over the count of risk-flagged
/// screening fields. Fields that failed to parse are not counted.
pub fn screening_summary(risk_count: usize) -> String {
    if risk_count == 0 {
        "All parameters normal \u{2705}".to_string()
    } else {
        format!("{} potential health risk(s) detected", risk_count)
    }
}
