use serde_json::{Number, Value};

use crate::domain::recipe::{
    entities::{RecipeRecord, errors::RecipeError},
    normalizer::RawRecipe,
    schema::{
        COOK_TIME, DESCRIPTION, ID, INGREDIENTS, INSTRUCTIONS, REQUIRED_FIELDS, SERVINGS, TITLE,
    },
};

/// Checks every record against the recipe schema.
///
/// The batch is all-or-nothing: the first failing record aborts the call.
/// Missing keys are reported together, type errors stop at the first field.
pub fn validate_recipes(records: Vec<RawRecipe>) -> Result<Vec<RecipeRecord>, RecipeError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| validate_recipe(index, record))
        .collect()
}

fn validate_recipe(index: usize, record: RawRecipe) -> Result<RecipeRecord, RecipeError> {
    let missing: Vec<&'static str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !record.contains_key(*field))
        .collect();

    if !missing.is_empty() {
        return Err(RecipeError::MissingFields {
            index,
            fields: missing,
        });
    }

    let mut fields = FieldReader { index, record };

    // Struct fields are evaluated top to bottom, so checks follow schema order.
    Ok(RecipeRecord {
        id: fields.integer(ID)?,
        title: fields.string(TITLE, "a string")?,
        description: fields.string(DESCRIPTION, "a string")?,
        cook_time: fields.string(COOK_TIME, "a string (e.g., '30 minutes')")?,
        servings: fields.number(SERVINGS)?,
        ingredients: fields.string_list(INGREDIENTS)?,
        instructions: fields.string_list(INSTRUCTIONS)?,
    })
}

struct FieldReader {
    index: usize,
    record: RawRecipe,
}

impl FieldReader {
    fn take(&mut self, field: &str) -> Value {
        self.record.remove(field).unwrap_or(Value::Null)
    }

    fn mismatch(&self, field: &'static str, expected: &'static str) -> RecipeError {
        RecipeError::InvalidFieldType {
            index: self.index,
            field,
            expected,
        }
    }

    fn integer(&mut self, field: &'static str) -> Result<i64, RecipeError> {
        self.take(field)
            .as_i64()
            .ok_or_else(|| self.mismatch(field, "a signed 64-bit integer"))
    }

    fn string(
        &mut self,
        field: &'static str,
        expected: &'static str,
    ) -> Result<String, RecipeError> {
        match self.take(field) {
            Value::String(value) => Ok(value),
            _ => Err(self.mismatch(field, expected)),
        }
    }

    fn number(&mut self, field: &'static str) -> Result<Number, RecipeError> {
        match self.take(field) {
            Value::Number(value) => Ok(value),
            _ => Err(self.mismatch(field, "a numeric type (int or float)")),
        }
    }

    fn string_list(&mut self, field: &'static str) -> Result<Vec<String>, RecipeError> {
        let items = match self.take(field) {
            Value::Array(items) => items,
            _ => return Err(self.mismatch(field, "a list of strings")),
        };

        items
            .into_iter()
            .map(|item| match item {
                Value::String(value) => Some(value),
                _ => None,
            })
            .collect::<Option<Vec<String>>>()
            .ok_or_else(|| self.mismatch(field, "a list of strings"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::{entities::CompletionContent, normalizer::normalize_completion};
    use serde_json::json;

    fn raw(value: Value) -> RawRecipe {
        match value {
            Value::Object(record) => record,
            other => panic!("expected an object, got {other}"),
        }
    }

    fn valid_recipe(id: i64) -> RawRecipe {
        raw(json!({
            "Id": id,
            "title": format!("Recipe {id}"),
            "description": "A quick weeknight dish.",
            "cookTime": "30 minutes",
            "servings": 4,
            "ingredients": ["2 carrots", "1 onion"],
            "instructions": ["Chop the vegetables.", "Simmer for 20 minutes."]
        }))
    }

    #[test]
    fn test_valid_batch_keeps_order_and_values() {
        let recipes = validate_recipes((1..=5).map(valid_recipe).collect()).unwrap();
        assert_eq!(recipes.len(), 5);
        assert_eq!(
            recipes.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
        assert_eq!(recipes[0].title, "Recipe 1");
        assert_eq!(recipes[0].cook_time, "30 minutes");
        assert_eq!(recipes[0].ingredients, vec!["2 carrots", "1 onion"]);
    }

    #[test]
    fn test_empty_batch_is_valid() {
        assert!(validate_recipes(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_one_bad_record_fails_the_whole_batch() {
        let mut records: Vec<RawRecipe> = (1..=5).map(valid_recipe).collect();
        records[3].remove("title");

        let err = validate_recipes(records).unwrap_err();
        match err {
            RecipeError::MissingFields { index, fields } => {
                assert_eq!(index, 3);
                assert_eq!(fields, vec!["title"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_all_missing_fields_are_reported() {
        let mut record = valid_recipe(1);
        record.remove("cookTime");
        record.remove("Id");

        let err = validate_recipes(vec![record]).unwrap_err();
        match &err {
            RecipeError::MissingFields { fields, .. } => {
                assert_eq!(fields, &vec!["Id", "cookTime"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("Id, cookTime"));
        assert!(err.is_schema_violation());
    }

    #[test]
    fn test_missing_fields_win_over_type_errors() {
        let mut record = valid_recipe(1);
        record.insert("Id".to_string(), json!("one"));
        record.remove("instructions");

        let err = validate_recipes(vec![record]).unwrap_err();
        assert!(matches!(err, RecipeError::MissingFields { .. }));
    }

    #[test]
    fn test_servings_accepts_integer_and_real() {
        let mut whole = valid_recipe(1);
        whole.insert("servings".to_string(), json!(4));
        let mut fractional = valid_recipe(2);
        fractional.insert("servings".to_string(), json!(4.5));

        let recipes = validate_recipes(vec![whole, fractional]).unwrap();
        assert_eq!(recipes[0].servings, Number::from(4));
        assert_eq!(recipes[1].servings.as_f64(), Some(4.5));
        assert_eq!(serde_json::to_value(&recipes[0]).unwrap()["servings"], json!(4));
    }

    #[test]
    fn test_servings_rejects_string() {
        let mut record = valid_recipe(1);
        record.insert("servings".to_string(), json!("4"));

        let err = validate_recipes(vec![record]).unwrap_err();
        match err {
            RecipeError::InvalidFieldType { field, .. } => assert_eq!(field, "servings"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_ingredients_reject_non_string_element() {
        let mut record = valid_recipe(1);
        record.insert("ingredients".to_string(), json!(["salt", 2]));

        let err = validate_recipes(vec![record]).unwrap_err();
        match err {
            RecipeError::InvalidFieldType {
                index,
                field,
                expected,
            } => {
                assert_eq!(index, 0);
                assert_eq!(field, "ingredients");
                assert_eq!(expected, "a list of strings");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_instructions_must_be_a_list() {
        let mut record = valid_recipe(1);
        record.insert("instructions".to_string(), json!("Cook it."));

        let err = validate_recipes(vec![record]).unwrap_err();
        assert!(matches!(
            err,
            RecipeError::InvalidFieldType {
                field: "instructions",
                ..
            }
        ));
    }

    #[test]
    fn test_id_must_be_an_integer() {
        for bad in [json!(1.5), json!("1"), json!(true)] {
            let mut record = valid_recipe(1);
            record.insert("Id".to_string(), bad);

            let err = validate_recipes(vec![record]).unwrap_err();
            assert!(matches!(
                err,
                RecipeError::InvalidFieldType { field: "Id", .. }
            ));
        }
    }

    #[test]
    fn test_id_outside_i64_range_is_rejected_with_its_bound() {
        let mut record = valid_recipe(1);
        record.insert("Id".to_string(), json!(u64::MAX));

        let err = validate_recipes(vec![record]).unwrap_err();
        assert!(matches!(
            err,
            RecipeError::InvalidFieldType {
                field: "Id",
                expected: "a signed 64-bit integer",
                ..
            }
        ));
        assert!(err.to_string().contains("64-bit"));
    }

    #[test]
    fn test_bare_object_validates_like_single_element_array() {
        let recipe = Value::Object(valid_recipe(7));
        let bare = CompletionContent::Text(recipe.to_string());
        let wrapped = CompletionContent::Text(Value::Array(vec![recipe]).to_string());

        let from_bare = validate_recipes(normalize_completion(bare).unwrap()).unwrap();
        let from_wrapped = validate_recipes(normalize_completion(wrapped).unwrap()).unwrap();

        assert_eq!(from_bare.len(), 1);
        assert_eq!(from_bare, from_wrapped);
    }

    #[test]
    fn test_first_type_error_short_circuits() {
        let mut record = valid_recipe(1);
        record.insert("title".to_string(), json!(42));
        record.insert("servings".to_string(), json!("four"));

        let err = validate_recipes(vec![record]).unwrap_err();
        assert!(matches!(
            err,
            RecipeError::InvalidFieldType { field: "title", .. }
        ));
    }

    #[test]
    fn test_empty_strings_and_extra_keys_are_allowed() {
        let mut record = valid_recipe(1);
        record.insert("title".to_string(), json!(""));
        record.insert("calories".to_string(), json!(420));

        let recipes = validate_recipes(vec![record]).unwrap();
        assert_eq!(recipes[0].title, "");
    }
}
