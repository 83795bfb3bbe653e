//! Zipper support for `serde_json::Value` documents.
//!
//! Arrays and objects are branches, scalars are leaves. An object's children
//! are its entries as two-element `[key, value]` arrays, so object members
//! can be navigated, removed and inserted like array elements:
//!
//! ```text
//! {"a": 1, "b": [2]}  children:  ["a", 1]  ["b", [2]]
//! ```
//!
//! Objects keep their members in document order (serde_json's
//! `preserve_order`), so sibling positions survive a rebuild on `up`.

use std::io::Read;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::Result;
use crate::tree::ZipTree;

/// Parse a JSON document.
pub fn parse_document(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Read a JSON document to the end of `reader`.
pub fn read_document(mut reader: impl Read) -> Result<Value> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_document(&text)
}

/// Read the JSON document at `path`.
pub fn load_document(path: &Path) -> Result<Value> {
    let file = std::fs::File::open(path)?;
    let doc = read_document(file)?;
    tracing::debug!(path = %path.display(), "loaded json document");
    Ok(doc)
}

fn entry(key: &str, value: &Value) -> Value {
    Value::Array(vec![Value::String(key.to_owned()), value.clone()])
}

fn as_entry(child: Value) -> Option<(String, Value)> {
    let Value::Array(pair) = child else {
        return None;
    };
    let [key, value] = <[Value; 2]>::try_from(pair).ok()?;
    match key {
        Value::String(key) => Some((key, value)),
        _ => None,
    }
}

/// Rebuild an object from entry pairs, or `None` if any child is not one
/// or two entries share a key.
fn object_from_entries(children: &[Value]) -> Option<Map<String, Value>> {
    let mut map = Map::with_capacity(children.len());
    for child in children {
        let (key, value) = as_entry(child.clone())?;
        if map.insert(key, value).is_some() {
            return None;
        }
    }
    Some(map)
}

/// `make_node` fallbacks:
/// - an object whose new children are not all `[string, value]` pairs, or
///   that repeat a key, becomes an array of those children;
/// - a scalar given children (via child insertion) becomes an array holding
///   the scalar followed by the children.
impl ZipTree for Value {
    fn is_branch(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Object(_))
    }

    fn children(&self) -> Vec<Self> {
        match self {
            Self::Array(items) => items.clone(),
            Self::Object(map) => map.iter().map(|(key, value)| entry(key, value)).collect(),
            _ => Vec::new(),
        }
    }

    fn make_node(&self, children: Vec<Self>) -> Self {
        match self {
            Self::Object(_) => match object_from_entries(&children) {
                Some(map) => Self::Object(map),
                None => Self::Array(children),
            },
            Self::Array(_) => Self::Array(children),
            scalar => Self::Array(std::iter::once(scalar.clone()).chain(children).collect()),
        }
    }
}
