//! Form model plumbing shared by every create/edit modal.
//!
//! A modal keeps one form model in a signal, mutates it through setters and,
//! on submit, sends only what [`FormModel::prepare`] returns.

use super::errors::ValidationError;
use serde::Serialize;

pub trait FormModel {
    type Payload: Serialize;

    /// Synchronous checks: required fields, non-negative numbers, caps.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Wire body. Only meaningful after `validate` succeeded.
    fn to_payload(&self) -> Self::Payload;

    fn prepare(&self) -> Result<Self::Payload, ValidationError> {
        self.validate()?;
        Ok(self.to_payload())
    }
}

/// Runs `send` with the prepared payload. `send` is never invoked for an invalid form.
pub fn submit_with<F, R>(form: &F, send: impl FnOnce(F::Payload) -> R) -> Result<R, ValidationError>
where
    F: FormModel,
{
    let payload = form.prepare()?;
    Ok(send(payload))
}

/// Parses an integer input. Blank input is `None`; negatives are kept so
/// validation can report them.
pub fn parse_count(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<i64>().ok()
}

/// Parses a price input, accepting a decimal comma.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.replace(',', ".").parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Renders an optional number back into an input value.
pub fn display_opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn require_text(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

pub fn require_id(value: Option<i64>, field: &'static str) -> Result<i64, ValidationError> {
    match value {
        Some(id) if id > 0 => Ok(id),
        _ => Err(ValidationError::Required(field)),
    }
}

pub fn require_count(value: Option<i64>, field: &'static str) -> Result<i64, ValidationError> {
    match value {
        None => Err(ValidationError::Required(field)),
        Some(v) if v < 0 => Err(ValidationError::Negative(field)),
        Some(v) => Ok(v),
    }
}

pub fn require_amount(value: Option<f64>, field: &'static str) -> Result<f64, ValidationError> {
    match value {
        None => Err(ValidationError::Required(field)),
        Some(v) if v < 0.0 => Err(ValidationError::Negative(field)),
        Some(v) => Ok(v),
    }
}

pub fn within_limit(value: i64, limit: i64, field: &'static str) -> Result<(), ValidationError> {
    if value > limit {
        return Err(ValidationError::ExceedsLimit { field, limit });
    }
    Ok(())
}

/// `count * unit_price`, present only when both inputs are.
pub fn total_price(count: Option<i64>, unit_price: Option<f64>) -> Option<f64> {
    Some(count? as f64 * unit_price?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_count_keeps_negatives_and_rejects_garbage() {
        assert_eq!(parse_count(" 12 "), Some(12));
        assert_eq!(parse_count("-3"), Some(-3));
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("1.5"), None);
    }

    #[test]
    fn parse_amount_accepts_decimal_comma() {
        assert_eq!(parse_amount("12,50"), Some(12.5));
        assert_eq!(parse_amount("7"), Some(7.0));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn require_count_distinguishes_missing_and_negative() {
        assert_eq!(require_count(None, "Count"), Err(ValidationError::Required("Count")));
        assert_eq!(require_count(Some(-1), "Count"), Err(ValidationError::Negative("Count")));
        assert_eq!(require_count(Some(0), "Count"), Ok(0));
    }

    #[test]
    fn require_id_rejects_zero() {
        assert!(require_id(Some(0), "Project").is_err());
        assert_eq!(require_id(Some(9), "Project"), Ok(9));
    }

    #[test]
    fn total_price_is_product_of_inputs() {
        for count in [0_i64, 1, 3, 17, 250] {
            for price in [0.0, 0.5, 2.25, 19.75] {
                assert_eq!(total_price(Some(count), Some(price)), Some(count as f64 * price));
            }
        }
        assert_eq!(total_price(None, Some(2.0)), None);
        assert_eq!(total_price(Some(2), None), None);
    }
}
