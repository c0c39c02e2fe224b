//! Classification of parsed YAML into [`Node`] trees

use robot_core::{DecodeError, DecodeResult, Mapping, Node};
use serde_yaml::Value;

/// Classify a parsed YAML value.
///
/// Strings, numbers and booleans become scalars in their string form;
/// sequences and mappings are classified recursively. Nulls, tagged values
/// and mappings with non-scalar keys are not classifiable.
pub fn classify(value: &Value) -> DecodeResult<Node> {
    classify_at(value, "")
}

fn classify_at(value: &Value, path: &str) -> DecodeResult<Node> {
    match value {
        Value::Sequence(seq) => seq
            .iter()
            .enumerate()
            .map(|(i, item)| classify_at(item, &format!("{}[{}]", path, i)))
            .collect::<DecodeResult<Vec<_>>>()
            .map(Node::List),
        Value::Mapping(map) => {
            let mut result = Mapping::with_capacity(map.len());
            for (k, v) in map {
                let key = scalar_string(k)
                    .ok_or_else(|| DecodeError::not_classifiable(display_path(path), render(k)))?;
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", path, key)
                };
                let child = classify_at(v, &child_path)?;
                if result.insert(key, child).is_some() {
                    return Err(DecodeError::not_classifiable(
                        child_path,
                        "duplicate mapping key",
                    ));
                }
            }
            Ok(Node::Map(result))
        }
        other => scalar_string(other)
            .map(Node::Scalar)
            .ok_or_else(|| DecodeError::not_classifiable(display_path(path), render(other))),
    }
}

/// String form of a scalar YAML value
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, render(&tagged.value)),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{:?}", other)),
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "<root>"
    } else {
        path
    }
}
