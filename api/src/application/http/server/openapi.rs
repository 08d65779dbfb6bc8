use crate::application::{
    auth::API_KEY_HEADER,
    http::{health::HealthApiDoc, recipe::router::RecipeApiDoc},
};
use utoipa::{
    Modify, OpenApi,
    openapi::{
        Components,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
    },
};

struct ApiKeySecurity;

impl Modify for ApiKeySecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi
            .components
            .get_or_insert_with(Components::new)
            .add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(API_KEY_HEADER))),
            );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SmartChef API"
    ),
    modifiers(&ApiKeySecurity),
    nest(
        (path = "/generate-recipe", api = RecipeApiDoc),
        (path = "/", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
