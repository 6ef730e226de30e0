use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::store;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use recetario_core::{distinct_cuisines, ranked_ingredients};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FacetsResponse {
    /// Distinct cuisines across the whole catalog, sorted case-insensitively
    pub cuisines: Vec<String>,
    /// Every ingredient in the catalog, most frequent first
    pub ingredients: Vec<String>,
}

/// Facets always describe the full catalog, not a filtered view, so the
/// filter pickers keep offering every option.
#[utoipa::path(
    get,
    path = "/api/recipes/facets",
    tag = "recipes",
    responses(
        (status = 200, description = "Filter facets for the catalog", body = FacetsResponse)
    )
)]
pub async fn get_facets(State(pool): State<Arc<DbPool>>) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let all = match store::get_all(&mut conn) {
        Ok(recipes) => recipes,
        Err(e) => {
            tracing::error!("Failed to fetch recipes for facets: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipes".to_string(),
                }),
            )
                .into_response();
        }
    };

    let response = FacetsResponse {
        cuisines: distinct_cuisines(&all),
        ingredients: ranked_ingredients(&all),
    };

    (StatusCode::OK, Json(response)).into_response()
}
