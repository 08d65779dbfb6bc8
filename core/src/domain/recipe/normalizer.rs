use serde_json::{Map, Value};

use crate::domain::recipe::entities::{CompletionContent, errors::RecipeError};

const FENCE: &str = "```";

/// A decoded but not yet validated recipe object.
pub type RawRecipe = Map<String, Value>;

/// Turns a completion payload into a list of JSON objects.
///
/// Text payloads lose an optional markdown fence before decoding. A lone
/// object is treated as a one-element list.
pub fn normalize_completion(content: CompletionContent) -> Result<Vec<RawRecipe>, RecipeError> {
    let value = match content {
        CompletionContent::Text(text) => {
            let body = strip_code_fence(&text);
            serde_json::from_str::<Value>(&body).map_err(RecipeError::MalformedJson)?
        }
        CompletionContent::Structured(value) => value,
    };

    let items = match value {
        Value::Object(record) => return Ok(vec![record]),
        Value::Array(items) => items,
        other => {
            return Err(RecipeError::UnexpectedShape(format!(
                "expected a JSON array of recipes, got {}",
                json_kind(&other)
            )));
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => Ok(record),
            other => Err(RecipeError::UnexpectedShape(format!(
                "expected recipe {index} to be a JSON object, got {}",
                json_kind(&other)
            ))),
        })
        .collect()
}

/// Removes a leading fence line (with any language tag) and a trailing
/// fence line. Text that does not start with a fence is only trimmed.
pub fn strip_code_fence(text: &str) -> String {
    let trimmed = text.trim();
    if !trimmed.starts_with(FENCE) {
        return trimmed.to_string();
    }

    let mut lines: Vec<&str> = trimmed.lines().skip(1).collect();
    if lines.last().is_some_and(|line| line.trim() == FENCE) {
        lines.pop();
    }

    lines.join("\n").trim().to_string()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
