//! Small value-level coercions shared by the builders.

/// Canonical business-key form used by every cross-table join: trimmed and
/// uppercased. Both the dimension side and the fact side must go through
/// this, otherwise FK resolution silently produces orphans.
pub fn normalize_business_key(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Trims a descriptive value, substituting `"Unknown"` for blanks. Also the
/// default for columns missing from the source entirely.
pub fn clean_or_unknown(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        "Unknown".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Coerces a metric cell to f64, zero-filling blanks and malformed values.
/// Malformed numeric input never aborts the run.
pub fn parse_f64_or_zero(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(0.0)
}

/// Coerces a count cell to i64, accepting float spellings ("3.0"), zero-
/// filling everything else.
pub fn parse_i64_or_zero(value: &str) -> i64 {
    let trimmed = value.trim();
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().map(|v| v as i64))
        .unwrap_or(0)
}
