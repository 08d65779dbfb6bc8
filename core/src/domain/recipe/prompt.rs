use crate::domain::recipe::value_objects::PreferenceRequest;

pub const SYSTEM_PROMPT: &str = "You are an expert chef who designs detailed, gourmet-level recipes \
that strictly adhere to any specified dietary restrictions and nutritional preferences. Each recipe \
you provide has a clear ingredient list, precise cooking instructions, timing and suggested \
substitutions. Your goal is to create delicious, health-conscious meals without compromising on \
taste or presentation.";

/// Builds the user message asking for `recipe_count` recipes as a bare JSON array.
pub fn build_recipe_prompt(preferences: &PreferenceRequest, recipe_count: usize) -> String {
    format!(
        r#"Create {recipe_count} distinct recipes in strict compliance with the following user preferences:

- Available vegetables: {vegetables}
- Cuisine preferences: {cuisines}
- Dietary restrictions: {restrictions}
- Nutritional requirements: {nutrition}

Return only a JSON array of exactly {recipe_count} objects, with no commentary or formatting outside the JSON.
Each object must have exactly this structure:
{{
    "Id": 1,
    "title": "Example Recipe Title",
    "description": "A brief description of the dish.",
    "cookTime": "30 minutes",
    "servings": 4,
    "ingredients": ["Ingredient 1", "Ingredient 2"],
    "instructions": ["Step 1", "Step 2"]
}}

Requirements:
1. Provide exactly {recipe_count} recipes, no more and no fewer.
2. Give every recipe a unique Id from 1 to {recipe_count}.
3. Strictly follow all dietary restrictions and nutritional preferences.
4. Use the listed vegetables whenever possible and follow the requested cuisine style.
5. Write cookTime in the format "X minutes".
6. List every ingredient, in the order it is used, and suggest substitutions for hard-to-find ones.
7. Write detailed, numbered-in-order instructions with precise cooking times.
8. Where a preference category says "no preference", assume no restriction in that category."#,
        vegetables = describe(&preferences.vegetables),
        cuisines = describe(&preferences.cuisines),
        restrictions = describe(&preferences.dietary_restrictions),
        nutrition = describe(&preferences.nutritional_preferences),
    )
}

fn describe(values: &[String]) -> String {
    if values.is_empty() {
        "no preference".to_string()
    } else {
        values.join(", ")
    }
}
