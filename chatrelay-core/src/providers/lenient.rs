//! Lenient serde decoders for provider payloads
//!
//! Provider bodies are decoded into structs whose fields are all optional.
//! A field holding an unexpected JSON type decodes to `None` (or an empty
//! list) instead of failing the whole document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Keep a field only when it is a JSON string
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Keep a field only when it decodes as `T`
pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Decode an array element by element, dropping elements that do not decode
/// as `T`. Anything other than an array yields an empty list.
pub fn seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Keep only the first element of an array, if it decodes as `T`
pub fn first<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .next()
            .and_then(|item| serde_json::from_value(item).ok()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Inner {
        #[serde(default, deserialize_with = "text")]
        name: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    struct Outer {
        #[serde(default, deserialize_with = "text")]
        label: Option<String>,
        #[serde(default, deserialize_with = "object")]
        inner: Option<Inner>,
        #[serde(default, deserialize_with = "seq")]
        items: Vec<Inner>,
    }

    #[test]
    fn test_wrong_types_become_absent() {
        let outer: Outer =
            serde_json::from_value(json!({"label": 3, "inner": "x", "items": {"a": 1}})).unwrap();
        assert!(outer.label.is_none());
        assert!(outer.inner.is_none());
        assert!(outer.items.is_empty());
    }

    #[test]
    fn test_seq_drops_only_bad_elements() {
        let outer: Outer = serde_json::from_value(json!({
            "items": [{"name": "a"}, 5, null, {"name": 9}, {"name": "b"}]
        }))
        .unwrap();
        let names: Vec<_> = outer.items.iter().map(|i| i.name.clone()).collect();
        assert_eq!(
            names,
            vec![Some("a".to_string()), None, Some("b".to_string())]
        );
    }

    #[derive(Debug, Deserialize)]
    struct Head {
        #[serde(default, deserialize_with = "first")]
        head: Option<Inner>,
    }

    #[test]
    fn test_first_does_not_skip_ahead() {
        let head: Head = serde_json::from_value(json!({"head": [7, {"name": "b"}]})).unwrap();
        assert!(head.head.is_none());

        let head: Head = serde_json::from_value(json!({"head": [{"name": "a"}, 7]})).unwrap();
        assert_eq!(head.head.unwrap().name.as_deref(), Some("a"));
    }

    #[test]
    fn test_missing_fields_default() {
        let outer: Outer = serde_json::from_value(json!({})).unwrap();
        assert!(outer.label.is_none());
        assert!(outer.inner.is_none());
        assert!(outer.items.is_empty());
    }
}
