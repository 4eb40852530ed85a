//! Attribute replacement
//!
//! Every construction call wipes the node's attributes and writes the new
//! set; there is no diffing against the previous call.

use serde::Deserialize;
use weft_dom::{HostTree, NodeId};

use crate::props::RESERVED_PROPS;
use crate::{BuildError, BuildResult, PropValue, Props};

/// How prop values are rendered as attribute text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Boolean attributes are present or absent, strings are raw
    #[default]
    Html,
    /// Booleans and strings are written as JSON literals
    Json,
}

impl Format {
    /// Attribute text for one prop, `None` if the attribute is omitted
    pub fn encode(self, name: &str, value: &PropValue) -> BuildResult<Option<String>> {
        match (self, value) {
            (_, PropValue::Undefined) => Ok(None),
            (Format::Html, PropValue::Bool(true)) => Ok(Some(name.to_string())),
            (Format::Html, PropValue::Bool(false)) => Ok(None),
            (Format::Json, PropValue::Bool(b)) => Ok(Some(b.to_string())),
            (_, PropValue::Number(n)) if !n.is_finite() => Err(BuildError::NonFiniteValue {
                name: name.to_string(),
            }),
            (_, PropValue::Number(n)) => Ok(Some(format_number(*n))),
            (Format::Html, PropValue::String(s)) => Ok(Some(s.clone())),
            (Format::Json, PropValue::String(s)) => serde_json::to_string(s)
                .map(Some)
                .map_err(|_| BuildError::IllegalValue { name: name.to_string() }),
            (_, PropValue::Null | PropValue::List(_) | PropValue::Map(_)) => {
                Err(BuildError::IllegalValue { name: name.to_string() })
            }
        }
    }
}

/// Remove every attribute of `node`, then write `props` encoded with `format`.
///
/// Entries named `children` or `key` are skipped. Fails on the first value
/// that cannot be encoded; attributes written before it stay written.
pub fn replace_attributes<H: HostTree>(
    host: &mut H,
    node: NodeId,
    format: Format,
    props: &Props,
) -> BuildResult<()> {
    for name in host.attribute_names(node) {
        host.remove_attribute(node, &name)?;
    }

    for (name, value) in props.attributes() {
        if RESERVED_PROPS.contains(&name) {
            continue;
        }
        if let Some(text) = format.encode(name, value)? {
            host.set_attribute(node, name, &text)?;
        }
    }
    Ok(())
}

/// Number to text the way JavaScript's `String(n)` does it
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // Covers -0
        return "0".to_string();
    }

    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return n.to_string();
    }

    // Exponent form; JS spells positive exponents with a sign
    let text = format!("{n:e}");
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => text,
    }
}
