//! Transfer request validation
//!
//! Transport-decoupled: takes a raw JSON value and returns either a
//! well-typed [`TransferRequest`] or a map of field-level errors with
//! stable message strings. Errors are collected across all fields in one
//! pass so a bad request reports everything wrong with it at once.

use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;

use super::types::TransferRequest;

/// Field name -> list of violated constraint messages
pub type FieldErrors = BTreeMap<String, Vec<String>>;

pub const ERR_REQUIRED: &str = "This field is required.";
pub const ERR_INTEGER: &str = "A valid integer is required.";
pub const ERR_NUMBER: &str = "A valid number is required.";
pub const ERR_EMPTY_LIST: &str = "This list may not be empty.";
pub const ERR_MIN_VALUE: &str = "Ensure this value is greater than or equal to 0.01.";
pub const ERR_DECIMAL_PLACES: &str = "Ensure that there are no more than 2 decimal places.";
pub const ERR_MAX_DIGITS: &str = "Ensure that there are no more than 10 digits in total.";
pub const ERR_MAX_WHOLE_DIGITS: &str =
    "Ensure that there are no more than 8 digits before the decimal point.";

/// Maximum total digits accepted for `debit_amount`
const MAX_DIGITS: usize = 10;
/// Maximum decimal places accepted for `debit_amount`
const MAX_DECIMAL_PLACES: usize = 2;
/// Maximum digits before the decimal point (total minus decimal places)
const MAX_WHOLE_DIGITS: usize = 8;

/// Parse and validate a raw JSON body into a [`TransferRequest`]
///
/// Rules:
/// - `from_user_id`: required integer (JSON int or integral string)
/// - `to_users_inn`: required non-empty list of integers/integral strings;
///   each element is canonicalized to its digit-string form
/// - `debit_amount`: required decimal (string or number), >= 0.01, at most
///   10 digits in total, 2 decimal places, and 8 digits before the point
pub fn parse_transfer_request(body: &Value) -> Result<TransferRequest, FieldErrors> {
    let mut errors = FieldErrors::new();

    let from_user_id = validate_from_user_id(body, &mut errors);
    let to_users_inn = validate_to_users_inn(body, &mut errors);
    let debit_amount = validate_debit_amount(body, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(TransferRequest {
        // Unwraps are safe: a field is None only if its error was recorded
        from_user_id: from_user_id.unwrap(),
        to_users_inn: to_users_inn.unwrap(),
        debit_amount: debit_amount.unwrap(),
    })
}

fn validate_from_user_id(body: &Value, errors: &mut FieldErrors) -> Option<i64> {
    let Some(value) = body.get("from_user_id") else {
        fail(errors, "from_user_id", ERR_REQUIRED);
        return None;
    };

    match coerce_integer(value) {
        Some(id) => Some(id),
        None => {
            fail(errors, "from_user_id", ERR_INTEGER);
            None
        }
    }
}

fn validate_to_users_inn(body: &Value, errors: &mut FieldErrors) -> Option<Vec<String>> {
    let Some(value) = body.get("to_users_inn") else {
        fail(errors, "to_users_inn", ERR_REQUIRED);
        return None;
    };

    let Some(items) = value.as_array() else {
        fail(
            errors,
            "to_users_inn",
            &format!(
                "Expected a list of items but got type \"{}\".",
                json_type_name(value)
            ),
        );
        return None;
    };

    if items.is_empty() {
        fail(errors, "to_users_inn", ERR_EMPTY_LIST);
        return None;
    }

    let mut inns = Vec::with_capacity(items.len());
    for item in items {
        match coerce_integer(item) {
            Some(inn) => inns.push(inn.to_string()),
            None => {
                fail(errors, "to_users_inn", ERR_INTEGER);
                return None;
            }
        }
    }

    Some(inns)
}

fn validate_debit_amount(body: &Value, errors: &mut FieldErrors) -> Option<Decimal> {
    let Some(value) = body.get("debit_amount") else {
        fail(errors, "debit_amount", ERR_REQUIRED);
        return None;
    };

    let Some(amount) = coerce_decimal(value) else {
        fail(errors, "debit_amount", ERR_NUMBER);
        return None;
    };

    // Precision is judged on the value exactly as written: "10.1000" has 4
    // decimal places even though it equals 10.1. Precision checks are
    // ordered: total digits, then decimal places, then whole digits.
    let decimal_places = amount.scale() as usize;
    let mantissa_len = digit_count(&amount);
    let (total_digits, whole_digits) = if mantissa_len > decimal_places {
        (mantissa_len, mantissa_len - decimal_places)
    } else {
        // Leading fractional zeros are not stored in the mantissa ("0.01")
        (decimal_places, 0)
    };

    if total_digits > MAX_DIGITS {
        fail(errors, "debit_amount", ERR_MAX_DIGITS);
        return None;
    }

    if decimal_places > MAX_DECIMAL_PLACES {
        fail(errors, "debit_amount", ERR_DECIMAL_PLACES);
        return None;
    }

    if whole_digits > MAX_WHOLE_DIGITS {
        fail(errors, "debit_amount", ERR_MAX_WHOLE_DIGITS);
        return None;
    }

    if amount < Decimal::new(1, 2) {
        fail(errors, "debit_amount", ERR_MIN_VALUE);
        return None;
    }

    Some(amount)
}

fn fail(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}

/// Coerce a JSON value to an integer: accepts JSON ints and integral strings
fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Coerce a JSON value to a decimal: accepts numbers and decimal strings
fn coerce_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

/// Digits in the mantissa, sign excluded
fn digit_count(d: &Decimal) -> usize {
    d.mantissa().unsigned_abs().to_string().len()
}

/// JSON type name used in list-type error messages
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "NoneType",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "from_user_id": 1,
            "to_users_inn": [1234567890_i64, "9876543210"],
            "debit_amount": "10.00"
        })
    }

    #[test]
    fn test_valid_request_parses() {
        let req = parse_transfer_request(&valid_body()).unwrap();
        assert_eq!(req.from_user_id, 1);
        assert_eq!(req.to_users_inn, vec!["1234567890", "9876543210"]);
        assert_eq!(req.debit_amount, Decimal::new(10, 0));
    }

    #[test]
    fn test_missing_fields_all_reported() {
        let errors = parse_transfer_request(&json!({})).unwrap_err();
        assert_eq!(errors["from_user_id"], vec![ERR_REQUIRED]);
        assert_eq!(errors["to_users_inn"], vec![ERR_REQUIRED]);
        assert_eq!(errors["debit_amount"], vec![ERR_REQUIRED]);
    }

    #[test]
    fn test_from_user_id_must_be_integer() {
        let mut body = valid_body();
        body["from_user_id"] = json!("abc");
        let errors = parse_transfer_request(&body).unwrap_err();
        assert_eq!(errors["from_user_id"], vec![ERR_INTEGER]);

        let mut body = valid_body();
        body["from_user_id"] = json!(1.5);
        let errors = parse_transfer_request(&body).unwrap_err();
        assert_eq!(errors["from_user_id"], vec![ERR_INTEGER]);
    }

    #[test]
    fn test_from_user_id_accepts_integral_string() {
        let mut body = valid_body();
        body["from_user_id"] = json!("42");
        let req = parse_transfer_request(&body).unwrap();
        assert_eq!(req.from_user_id, 42);
    }

    #[test]
    fn test_to_users_inn_rejects_non_list() {
        let mut body = valid_body();
        body["to_users_inn"] = json!("1234567890");
        let errors = parse_transfer_request(&body).unwrap_err();
        assert_eq!(
            errors["to_users_inn"],
            vec!["Expected a list of items but got type \"str\"."]
        );
    }

    #[test]
    fn test_to_users_inn_rejects_empty_list() {
        let mut body = valid_body();
        body["to_users_inn"] = json!([]);
        let errors = parse_transfer_request(&body).unwrap_err();
        assert_eq!(errors["to_users_inn"], vec![ERR_EMPTY_LIST]);
    }

    #[test]
    fn test_to_users_inn_rejects_non_integer_element() {
        let mut body = valid_body();
        body["to_users_inn"] = json!([1234567890_i64, "not-an-inn"]);
        let errors = parse_transfer_request(&body).unwrap_err();
        assert_eq!(errors["to_users_inn"], vec![ERR_INTEGER]);
    }

    #[test]
    fn test_debit_amount_minimum() {
        for amount in ["0", "0.00", "-5.00", "0.001"] {
            let mut body = valid_body();
            body["debit_amount"] = json!(amount);
            let errors = parse_transfer_request(&body).unwrap_err();
            assert!(
                errors.contains_key("debit_amount"),
                "amount {:?} should fail",
                amount
            );
        }

        let mut body = valid_body();
        body["debit_amount"] = json!("0.01");
        assert!(parse_transfer_request(&body).is_ok());
    }

    #[test]
    fn test_debit_amount_decimal_places() {
        let mut body = valid_body();
        body["debit_amount"] = json!("10.123");
        let errors = parse_transfer_request(&body).unwrap_err();
        assert_eq!(errors["debit_amount"], vec![ERR_DECIMAL_PLACES]);

        // Trailing zeros count as written: 4 decimal places, not 1
        let mut body = valid_body();
        body["debit_amount"] = json!("10.1000");
        let errors = parse_transfer_request(&body).unwrap_err();
        assert_eq!(errors["debit_amount"], vec![ERR_DECIMAL_PLACES]);

        let mut body = valid_body();
        body["debit_amount"] = json!("10.10");
        assert!(parse_transfer_request(&body).is_ok());
    }

    #[test]
    fn test_debit_amount_max_digits() {
        // 11 digits total (9 integer + 2 decimal)
        let mut body = valid_body();
        body["debit_amount"] = json!("123456789.01");
        let errors = parse_transfer_request(&body).unwrap_err();
        assert_eq!(errors["debit_amount"], vec![ERR_MAX_DIGITS]);

        // 10 digits total, 8 before the point: fine
        let mut body = valid_body();
        body["debit_amount"] = json!("12345678.90");
        assert!(parse_transfer_request(&body).is_ok());
    }

    #[test]
    fn test_debit_amount_whole_digits() {
        // 9 digits before the point, within the 10-digit total
        for amount in ["123456789", "123456789.0"] {
            let mut body = valid_body();
            body["debit_amount"] = json!(amount);
            let errors = parse_transfer_request(&body).unwrap_err();
            assert_eq!(
                errors["debit_amount"],
                vec![ERR_MAX_WHOLE_DIGITS],
                "amount {:?}",
                amount
            );
        }

        let mut body = valid_body();
        body["debit_amount"] = json!("12345678");
        assert!(parse_transfer_request(&body).is_ok());
    }

    #[test]
    fn test_debit_amount_rejects_garbage() {
        for bad in [json!("ten"), json!(true), json!(null), json!({})] {
            let mut body = valid_body();
            body["debit_amount"] = bad.clone();
            let errors = parse_transfer_request(&body).unwrap_err();
            assert_eq!(errors["debit_amount"], vec![ERR_NUMBER], "value: {}", bad);
        }
    }

    #[test]
    fn test_debit_amount_accepts_json_number() {
        let mut body = valid_body();
        body["debit_amount"] = json!(15.4);
        let req = parse_transfer_request(&body).unwrap();
        assert_eq!(req.debit_amount, Decimal::new(154, 1));
    }

    #[test]
    fn test_duplicate_inns_pass_validation() {
        // Duplicates are a transfer-executor concern, not a shape concern
        let mut body = valid_body();
        body["to_users_inn"] = json!(["1234567890", "1234567890"]);
        let req = parse_transfer_request(&body).unwrap();
        assert_eq!(req.to_users_inn.len(), 2);
    }
}
