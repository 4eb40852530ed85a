//! Props: attribute values plus the reserved `key` and `children` entries

use std::collections::BTreeMap;

use crate::{Child, ElementKey};

/// Names never turned into attributes
pub const RESERVED_PROPS: [&str; 2] = ["children", "key"];

/// A prop value as handed to a factory.
///
/// Only `Bool`, finite `Number`, `String` and `Undefined` are serializable;
/// the rest exist so that callers feeding untyped data get a construction
/// error instead of a silent drop.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PropValue {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<PropValue>),
    Map(BTreeMap<String, PropValue>),
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

macro_rules! number_from {
    ($($ty:ty),*) => {
        $(impl From<$ty> for PropValue {
            fn from(value: $ty) -> Self {
                Self::Number(value as f64)
            }
        })*
    };
}

number_from!(f32, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

impl<T: Into<PropValue>> From<Vec<T>> for PropValue {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for PropValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            // Numbers that don't fit an f64 surface as NaN and get rejected later
            Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect()),
        }
    }
}

/// Arguments of one construction call
#[derive(Debug, Clone, Default)]
pub struct Props {
    attributes: Vec<(String, PropValue)>,
    key: Option<ElementKey>,
    children: Child,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Props::set`]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Set an attribute entry, replacing an earlier one of the same name in place
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<PropValue>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.attributes.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn with_key(mut self, key: &ElementKey) -> Self {
        self.key = Some(key.clone());
        self
    }

    pub fn set_key(&mut self, key: Option<ElementKey>) {
        self.key = key;
    }

    pub fn with_children(mut self, children: impl Into<Child>) -> Self {
        self.children = children.into();
        self
    }

    pub fn set_children(&mut self, children: impl Into<Child>) {
        self.children = children.into();
    }

    pub fn key(&self) -> Option<&ElementKey> {
        self.key.as_ref()
    }

    pub fn children(&self) -> &Child {
        &self.children
    }

    /// Attribute entries in insertion order (may include reserved names)
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.attributes.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Build props from a JSON object; non-objects yield empty props
    pub fn from_json(value: serde_json::Value) -> Self {
        let mut props = Self::new();
        if let serde_json::Value::Object(map) = value {
            for (name, value) in map {
                props.set(name, PropValue::from(value));
            }
        }
        props
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let props = Props::new().attr("a", 1).attr("b", "x").attr("a", true);
        let names: Vec<_> = props.attributes().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(props.get("a"), Some(&PropValue::Bool(true)));
    }

    #[test]
    fn test_option_maps_to_undefined() {
        assert_eq!(PropValue::from(None::<&str>), PropValue::Undefined);
        assert_eq!(PropValue::from(Some(3)), PropValue::Number(3.0));
    }

    #[test]
    fn test_from_json() {
        let props = Props::from_json(serde_json::json!({
            "href": "example.com",
            "tabindex": 2,
            "hidden": true,
            "data": null,
            "list": [1, 2]
        }));
        assert_eq!(props.get("href"), Some(&PropValue::String("example.com".into())));
        assert_eq!(props.get("tabindex"), Some(&PropValue::Number(2.0)));
        assert_eq!(props.get("hidden"), Some(&PropValue::Bool(true)));
        assert_eq!(props.get("data"), Some(&PropValue::Null));
        assert!(matches!(props.get("list"), Some(PropValue::List(items)) if items.len() == 2));
        assert!(Props::from_json(serde_json::json!([1])).attributes().next().is_none());
    }

    #[test]
    fn test_key_and_children_are_separate() {
        let key = ElementKey::new();
        let props = Props::new().with_key(&key).with_children("x");
        assert_eq!(props.key(), Some(&key));
        assert_eq!(props.children(), &Child::Text("x".into()));
        assert_eq!(props.attributes().count(), 0);
    }
}
