//! Shape validation of decoded API payloads

use serde_json::Value;

use crate::homework::Homework;

/// Validated contents of one API response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub homeworks: Vec<Homework>,
    pub current_date: Option<u64>,
}

/// Check the payload shape and extract the homework list and cursor.
///
/// An empty `homeworks` array is valid steady state and comes back as an
/// empty `Vec`; only a malformed shape is an error. A missing or
/// non-integer `current_date` yields `None`.
pub fn validate(payload: &Value) -> crate::Result<Batch> {
    let record = payload
        .as_object()
        .ok_or_else(|| crate::WatchError::Schema("payload is not a JSON object".to_string()))?;

    let field = record
        .get("homeworks")
        .ok_or_else(|| crate::WatchError::Schema("missing 'homeworks' field".to_string()))?;

    let entries = field.as_array().ok_or_else(|| {
        crate::WatchError::Schema(format!("'homeworks' is not an array: {field}"))
    })?;

    let homeworks = entries
        .iter()
        .map(|entry| {
            serde_json::from_value(entry.clone())
                .map_err(|e| crate::WatchError::Schema(format!("homework entry {entry}: {e}")))
        })
        .collect::<crate::Result<Vec<Homework>>>()?;

    let current_date = record.get("current_date").and_then(Value::as_u64);

    Ok(Batch {
        homeworks,
        current_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_well_formed_payload() {
        let payload = json!({
            "homeworks": [
                {"homework_name": "hw1", "status": "approved"},
                {"homework_name": "hw2", "status": "reviewing"}
            ],
            "current_date": 1000
        });

        let batch = validate(&payload).unwrap();
        assert_eq!(batch.homeworks.len(), 2);
        assert_eq!(batch.homeworks[0].homework_name, "hw1");
        assert_eq!(batch.homeworks[0].status, "approved");
        assert_eq!(batch.current_date, Some(1000));
    }

    #[test]
    fn empty_homework_list_is_valid() {
        let batch = validate(&json!({"homeworks": []})).unwrap();
        assert!(batch.homeworks.is_empty());
        assert_eq!(batch.current_date, None);
    }

    #[test]
    fn extra_item_fields_are_ignored() {
        let payload = json!({
            "homeworks": [
                {"homework_name": "hw1", "status": "approved", "reviewer_comment": "nice"}
            ]
        });

        let batch = validate(&payload).unwrap();
        assert_eq!(batch.homeworks.len(), 1);
    }

    #[test]
    fn non_object_payload_is_a_schema_violation() {
        for payload in [json!([1, 2, 3]), json!("text"), json!(42), json!(null)] {
            let err = validate(&payload).unwrap_err();
            assert!(
                matches!(err, crate::WatchError::Schema(_)),
                "expected Schema for {payload}, got {err:?}"
            );
        }
    }

    #[test]
    fn missing_homeworks_field_is_a_schema_violation() {
        let err = validate(&json!({"current_date": 1000})).unwrap_err();
        match err {
            crate::WatchError::Schema(detail) => assert!(detail.contains("homeworks"), "{detail}"),
            other => panic!("expected Schema, got {other:?}"),
        }
    }

    #[test]
    fn non_array_homeworks_is_a_schema_violation() {
        let err = validate(&json!({"homeworks": {"hw1": "approved"}})).unwrap_err();
        assert!(matches!(err, crate::WatchError::Schema(_)), "{err:?}");
    }

    #[test]
    fn entry_without_required_fields_is_a_schema_violation() {
        let err = validate(&json!({"homeworks": [{"homework_name": "hw1"}]})).unwrap_err();
        assert!(matches!(err, crate::WatchError::Schema(_)), "{err:?}");
    }

    #[test]
    fn non_integer_cursor_is_treated_as_absent() {
        let batch = validate(&json!({"homeworks": [], "current_date": "soon"})).unwrap();
        assert_eq!(batch.current_date, None);
    }
}
