use serde_json::Value;

use crate::domain::{Homework, PollError};

/// A top-level `code` or `error` field marks a server-reported failure
/// regardless of the HTTP status.
pub fn reported_error(payload: &Value) -> Option<String> {
    let object = payload.as_object()?;
    for key in ["code", "error"] {
        if let Some(info) = object.get(key) {
            return Some(format!("{key}: {info}"));
        }
    }
    None
}

pub fn extract_homeworks(payload: &Value) -> Result<Vec<Homework>, PollError> {
    let object = payload.as_object().ok_or_else(|| {
        PollError::Shape(format!(
            "Ответ API должен быть словарем, получен {}",
            json_type_name(payload)
        ))
    })?;
    let homeworks = object
        .get("homeworks")
        .ok_or(PollError::MissingField("homeworks"))?;
    let items = homeworks.as_array().ok_or_else(|| {
        PollError::Shape(format!(
            "Значение ключа \"homeworks\" должно быть списком, получен {}",
            json_type_name(homeworks)
        ))
    })?;

    items
        .iter()
        .map(|item| {
            serde_json::from_value(item.clone()).map_err(|err| {
                PollError::Shape(format!(
                    "Элемент списка \"homeworks\" имеет неверную форму: {err}"
                ))
            })
        })
        .collect()
}

/// The server clock, if present and integral. A non-integer value is treated
/// as absent.
pub fn extract_current_date(payload: &Value) -> Option<i64> {
    payload.get("current_date")?.as_i64()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_records_and_server_clock() {
        let payload = json!({
            "homeworks": [
                {"homework_name": "lab1", "status": "approved", "reviewer_comment": "ok"},
                {"homework_name": "lab2", "status": "reviewing"}
            ],
            "current_date": 1700000000
        });

        let homeworks = extract_homeworks(&payload).expect("valid payload");
        assert_eq!(homeworks.len(), 2);
        assert_eq!(homeworks[0].homework_name.as_deref(), Some("lab1"));
        assert_eq!(homeworks[1].status.as_deref(), Some("reviewing"));
        assert_eq!(extract_current_date(&payload), Some(1700000000));
    }

    #[test]
    fn non_object_payload_is_a_shape_error() {
        let err = extract_homeworks(&json!(["lab1"])).expect_err("must be an object");
        match err {
            PollError::Shape(text) => assert!(text.contains("словарем")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_homeworks_key_is_reported() {
        let err = extract_homeworks(&json!({"current_date": 1})).expect_err("key is required");
        assert!(matches!(err, PollError::MissingField("homeworks")));
    }

    #[test]
    fn non_list_homeworks_is_a_shape_error() {
        let err = extract_homeworks(&json!({"homeworks": "lab1"})).expect_err("must be a list");
        match err {
            PollError::Shape(text) => assert!(text.contains("списком")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_integer_current_date_is_absent() {
        assert_eq!(
            extract_current_date(&json!({"homeworks": [], "current_date": "soon"})),
            None
        );
        assert_eq!(extract_current_date(&json!({"homeworks": []})), None);
    }

    #[test]
    fn server_reported_errors_are_detected() {
        assert_eq!(
            reported_error(&json!({"code": "not_authenticated"})),
            Some("code: \"not_authenticated\"".to_string())
        );
        assert!(reported_error(&json!({"error": {"error": "oops"}})).is_some());
        assert_eq!(reported_error(&json!({"homeworks": []})), None);
    }
}
