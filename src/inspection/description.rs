//! Inspection description flattening.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Rich-text findings of an inspection report.
///
/// Reports written over the years carry one of several shapes: an
/// EditorJS block document, a plain string, or one of a few legacy
/// single-field objects. `to_plain_text` folds all of them into one
/// displayable string and never fails, whatever the stored shape.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Description(Value);

impl Description {
    /// Wraps a raw JSON value.
    pub fn new(value: Value) -> Self {
        Description(value)
    }

    /// Flattens the document into plain text with a blank line between
    /// parts.
    pub fn to_plain_text(&self) -> String {
        match &self.0 {
            Value::String(text) => text.clone(),
            Value::Object(fields) => flatten_object(fields),
            _ => String::new(),
        }
    }
}

fn flatten_object(fields: &Map<String, Value>) -> String {
    if let Some(Value::Array(blocks)) = fields.get("blocks") {
        return flatten_blocks(blocks);
    }
    for key in ["text", "en", "description", "summary"] {
        if let Some(value) = fields.get(key) {
            return scalar_text(value);
        }
    }
    first_string_field(fields)
}

/// Flattens EditorJS blocks in order.
fn flatten_blocks(blocks: &[Value]) -> String {
    let mut parts = Vec::new();
    for block in blocks {
        let block_type = block.get("type").and_then(Value::as_str).unwrap_or_default();
        let Some(data) = block.get("data") else {
            continue;
        };
        match block_type {
            "paragraph" | "header" => {
                if let Some(text) = block_text(data) {
                    parts.push(text);
                }
            }
            "quote" => {
                if let Some(text) = block_text(data) {
                    parts.push(format!("\"{text}\""));
                }
            }
            "list" => {
                if let Some(Value::Array(items)) = data.get("items") {
                    for item in items {
                        if let Some(text) = item_text(item) {
                            parts.push(format!("• {text}"));
                        }
                    }
                }
            }
            // Unrecognized block types still contribute their text.
            _ => {
                if let Some(text) = block_text(data) {
                    parts.push(text);
                }
            }
        }
    }
    parts.join("\n\n")
}

/// Non-empty `text` field of a block's data payload.
fn block_text(data: &Value) -> Option<String> {
    match data.get("text") {
        Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    }
}

/// Display form of one list item; containers and null make no bullet.
fn item_text(item: &Value) -> Option<String> {
    match item {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// String form of a scalar value; containers and null yield empty.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    }
}

/// Last resort for unrecognized shapes: the first string field, then
/// the first string one level inside object fields. The first field in
/// key order wins, even when a later field would be a better pick.
fn first_string_field(fields: &Map<String, Value>) -> String {
    for value in fields.values() {
        if let Value::String(text) = value {
            return text.clone();
        }
    }
    for value in fields.values() {
        if let Value::Object(nested) = value {
            for inner in nested.values() {
                if let Value::String(text) = inner {
                    return text.clone();
                }
            }
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn doc(value: Value) -> Description {
        Description::new(value)
    }

    #[test]
    fn plain_strings_pass_through_untouched() {
        assert_eq!(doc(json!("plain")).to_plain_text(), "plain");
        assert_eq!(doc(json!("  spaced  ")).to_plain_text(), "  spaced  ");
    }

    #[test]
    fn empty_blocks_yield_an_empty_string() {
        assert_eq!(doc(json!({"blocks": []})).to_plain_text(), "");
    }

    #[test]
    fn paragraph_and_list_flatten_with_blank_lines() {
        let flattened = doc(json!({"blocks": [
            {"type": "paragraph", "data": {"text": "A"}},
            {"type": "list", "data": {"items": ["x", "y"]}}
        ]}))
        .to_plain_text();
        assert_eq!(flattened, "A\n\n• x\n\n• y");
    }

    #[test]
    fn every_block_type_contributes_its_text() {
        let flattened = doc(json!({"blocks": [
            {"type": "header", "data": {"text": "Exterior"}},
            {"type": "paragraph", "data": {"text": "Minor stone chips."}},
            {"type": "quote", "data": {"text": "Engine runs clean."}},
            {"type": "checklist", "data": {"text": "Fallback text"}},
            {"type": "image", "data": {"file": {"url": "x.jpg"}}}
        ]}))
        .to_plain_text();
        assert_eq!(
            flattened,
            "Exterior\n\nMinor stone chips.\n\n\"Engine runs clean.\"\n\nFallback text"
        );
    }

    #[test]
    fn malformed_blocks_are_skipped() {
        let flattened = doc(json!({"blocks": [
            {"type": "paragraph"},
            {"type": "paragraph", "data": {"text": ""}},
            {"type": "list", "data": {"items": "not a list"}},
            {"type": "list", "data": {"items": [{"content": "nested"}, "kept"]}},
            "not even a block",
            {"type": "paragraph", "data": {"text": "still here"}}
        ]}))
        .to_plain_text();
        assert_eq!(flattened, "• kept\n\nstill here");
    }

    #[test]
    fn legacy_shapes_resolve_in_order() {
        assert_eq!(doc(json!({"text": "from text"})).to_plain_text(), "from text");
        assert_eq!(doc(json!({"en": "from en"})).to_plain_text(), "from en");
        assert_eq!(doc(json!({"description": "from description"})).to_plain_text(), "from description");
        assert_eq!(doc(json!({"summary": "from summary"})).to_plain_text(), "from summary");
        assert_eq!(
            doc(json!({"summary": "ignored", "text": "wins"})).to_plain_text(),
            "wins"
        );
    }

    #[test]
    fn legacy_fields_coerce_scalars_and_drop_containers() {
        assert_eq!(doc(json!({"text": 42})).to_plain_text(), "42");
        assert_eq!(doc(json!({"text": null})).to_plain_text(), "");
        assert_eq!(doc(json!({"text": {"blocks": []}})).to_plain_text(), "");
    }

    #[test]
    fn unknown_shapes_use_the_first_string_field() {
        assert_eq!(
            doc(json!({"count": 3, "note": "first", "extra": "second"})).to_plain_text(),
            "first"
        );
    }

    #[test]
    fn nested_objects_are_probed_one_level_deep() {
        let flattened = doc(json!({
            "meta": {"count": 3},
            "body": {"note": "nested text"},
            "tail": {"other": "ignored"}
        }))
        .to_plain_text();
        assert_eq!(flattened, "nested text");
    }

    #[test]
    fn arrays_are_not_probed() {
        assert_eq!(doc(json!({"list": ["in array"]})).to_plain_text(), "");
    }

    #[test]
    fn non_object_documents_yield_empty() {
        assert_eq!(doc(Value::Null).to_plain_text(), "");
        assert_eq!(doc(json!(42)).to_plain_text(), "");
        assert_eq!(doc(json!(["a"])).to_plain_text(), "");
    }

    #[test]
    fn blocks_key_must_be_an_array_to_count() {
        let flattened = doc(json!({"blocks": "nope", "text": "legacy"})).to_plain_text();
        assert_eq!(flattened, "legacy");
    }
}
