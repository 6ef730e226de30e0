use crate::api::recipes::get::RecipeResponse;
use crate::api::ErrorResponse;
use crate::auth::AuthPrincipal;
use crate::db::DbPool;
use crate::get_conn;
use crate::store;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

/// Flips the cooked flag in the database rather than accepting a value from
/// the client, so two racing toggles end up as two flips instead of one
/// writer silently overwriting the other.
#[utoipa::path(
    post,
    path = "/api/recipes/{id}/cooked",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Cooked flag flipped", body = RecipeResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn toggle_cooked(
    _principal: AuthPrincipal,
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    match store::toggle_cooked(&mut conn, id) {
        Ok(recipe) => (StatusCode::OK, Json(RecipeResponse::from(recipe))).into_response(),
        Err(diesel::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Recipe not found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to toggle cooked for recipe {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
