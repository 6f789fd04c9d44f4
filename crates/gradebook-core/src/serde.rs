use serde::{Deserialize, Deserializer};

/// Distinguishes an absent field from an explicit `null` in partial updates.
///
/// Use together with `#[serde(default)]`:
///
/// - field absent: `None` (leave unchanged)
/// - `null`: `Some(None)` (clear)
/// - value: `Some(Some(v))` (set)
pub fn deserialize_nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "deserialize_nullable")]
        course_id: Option<Option<i64>>,
    }

    #[test]
    fn test_absent_null_and_value() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.course_id, None);

        let cleared: Patch = serde_json::from_str(r#"{"course_id":null}"#).unwrap();
        assert_eq!(cleared.course_id, Some(None));

        let set: Patch = serde_json::from_str(r#"{"course_id":7}"#).unwrap();
        assert_eq!(set.course_id, Some(Some(7)));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(serde_json::from_str::<Patch>(r#"{"course_id":"seven"}"#).is_err());
    }
}
