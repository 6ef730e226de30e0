pub mod create;
pub mod facets;
pub mod get;
pub mod import;
pub mod list;
pub mod toggle_cooked;
pub mod update;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route("/facets", get(facets::get_facets))
        .route("/import", post(import::import_recipe))
        .route("/{id}", get(get::get_recipe).put(update::update_recipe))
        .route("/{id}/cooked", post(toggle_cooked::toggle_cooked))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_recipes,
        create::create_recipe,
        get::get_recipe,
        update::update_recipe,
        toggle_cooked::toggle_cooked,
        facets::get_facets,
        import::import_recipe,
    ),
    components(schemas(
        list::ListRecipesResponse,
        get::RecipeResponse,
        get::VideoSourceResponse,
        create::RecipeDraftBody,
        create::VideoSourceBody,
        facets::FacetsResponse,
        import::ImportRecipeRequest,
    ))
)]
pub struct ApiDoc;
