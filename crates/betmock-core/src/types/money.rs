//! Lenient number extraction for request fields.
//!
//! Mobile clients send amounts and ids either as JSON numbers or as strings
//! (form-encoded bodies are always strings), so both are accepted.

use serde_json::Value;

/// Monetary amount in the user's currency.
pub type Amount = f64;

/// Read a finite amount from a request field.
pub fn parse_amount(value: Option<&Value>) -> Option<Amount> {
    let amount = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    amount.is_finite().then_some(amount)
}

/// Read a non-negative integer id from a request field or path segment.
pub fn parse_id(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(100), Some(100.0))]
    #[case(json!(12.5), Some(12.5))]
    #[case(json!(-3), Some(-3.0))]
    #[case(json!("250"), Some(250.0))]
    #[case(json!(" 7.25 "), Some(7.25))]
    #[case(json!("NaN"), None)]
    #[case(json!("inf"), None)]
    #[case(json!("ten"), None)]
    #[case(json!(null), None)]
    #[case(json!(true), None)]
    #[case(json!({"amount": 1}), None)]
    fn test_parse_amount(#[case] input: Value, #[case] expected: Option<f64>) {
        assert_eq!(parse_amount(Some(&input)), expected);
    }

    #[rstest]
    fn test_parse_amount_missing() {
        assert_eq!(parse_amount(None), None);
    }

    #[rstest]
    #[case(json!(3), Some(3))]
    #[case(json!("42"), Some(42))]
    #[case(json!(-1), None)]
    #[case(json!(1.5), None)]
    #[case(json!("abc"), None)]
    #[case(json!([1]), None)]
    fn test_parse_id(#[case] input: Value, #[case] expected: Option<u64>) {
        assert_eq!(parse_id(Some(&input)), expected);
    }
}
