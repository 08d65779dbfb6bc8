//! Field names of the recipe record the completion must produce.

pub const ID: &str = "Id";
pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";
pub const COOK_TIME: &str = "cookTime";
pub const SERVINGS: &str = "servings";
pub const INGREDIENTS: &str = "ingredients";
pub const INSTRUCTIONS: &str = "instructions";

/// Every key a recipe must carry, in the order fields are type-checked.
pub const REQUIRED_FIELDS: [&str; 7] = [
    ID,
    TITLE,
    DESCRIPTION,
    COOK_TIME,
    SERVINGS,
    INGREDIENTS,
    INSTRUCTIONS,
];
