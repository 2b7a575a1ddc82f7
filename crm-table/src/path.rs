//! Dotted-path lookup into serialized records.
//!
//! Lookups never fail: a path that does not exist in the record resolves to
//! `None`, which displays as an empty string.

use serde_json::Value;

/// Walk `path` (segments separated by `.`) through objects by key and
/// through arrays by numeric index.
pub fn resolve_path<'v>(root: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.').try_fold(root, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Display text for a resolved value. Missing and `null` values are empty.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| display_value(Some(item)))
            .collect::<Vec<_>>()
            .join(", "),
        Some(object @ Value::Object(_)) => object.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn resolves_nested_object_path() {
        let record = json!({ "address": { "city": "Pune" } });
        assert_eq!(resolve_path(&record, "address.city"), Some(&json!("Pune")));
    }

    #[test]
    fn missing_segment_is_none() {
        let record = json!({});
        assert_eq!(resolve_path(&record, "address.city"), None);
        assert_eq!(display_value(resolve_path(&record, "address.city")), "");
    }

    #[test]
    fn walking_through_a_scalar_is_none() {
        let record = json!({ "name": "Innovatech" });
        assert_eq!(resolve_path(&record, "name.first"), None);
    }

    #[test]
    fn array_segments_index_by_position() {
        let record = json!({ "tags": ["vip", "north"] });
        assert_eq!(resolve_path(&record, "tags.1"), Some(&json!("north")));
        assert_eq!(resolve_path(&record, "tags.9"), None);
        assert_eq!(resolve_path(&record, "tags.first"), None);
    }

    #[test]
    fn empty_path_is_none() {
        let record = json!({ "name": "x" });
        assert_eq!(resolve_path(&record, ""), None);
    }

    #[test]
    fn display_of_scalars() {
        assert_eq!(display_value(Some(&json!(null))), "");
        assert_eq!(display_value(Some(&json!(150))), "150");
        assert_eq!(display_value(Some(&json!(0))), "0");
        assert_eq!(display_value(Some(&json!(2.5))), "2.5");
        assert_eq!(display_value(Some(&json!(false))), "false");
        assert_eq!(display_value(Some(&json!(""))), "");
    }

    #[test]
    fn display_of_collections() {
        assert_eq!(display_value(Some(&json!(["a", 1, null]))), "a, 1, ");
        assert_eq!(display_value(Some(&json!({ "k": 1 }))), r#"{"k":1}"#);
    }
}
