//! Required-field checks run before any request. Business rules (unique
//! barcodes, non-negative stock) stay with the server.

use crate::errors::PosError;

/// Trimmed value of a required text field.
pub fn required(field: &str, value: &str) -> Result<String, PosError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(PosError::validation(format!("{field} is required")));
    }
    Ok(value.to_string())
}

pub fn required_value<T>(field: &str, value: Option<T>) -> Result<T, PosError> {
    value.ok_or_else(|| PosError::validation(format!("{field} is required")))
}

/// Checks every text field and reports all missing ones in one message.
pub fn all_required<const N: usize>(fields: [(&str, &str); N]) -> Result<[String; N], PosError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();
    if !missing.is_empty() {
        return Err(PosError::validation(format!(
            "all fields are required, missing: {}",
            missing.join(", ")
        )));
    }
    Ok(fields.map(|(_, v)| v.trim().to_string()))
}
