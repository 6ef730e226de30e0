use crate::api::recipes::create::RecipeDraftBody;
use crate::api::recipes::get::RecipeResponse;
use crate::api::{ErrorResponse, ValidationErrorResponse};
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

#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    request_body = RecipeDraftBody,
    responses(
        (status = 200, description = "Recipe updated successfully", body = RecipeResponse),
        (status = 400, description = "Validation failed", body = ValidationErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_recipe(
    _principal: AuthPrincipal,
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
    Json(body): Json<RecipeDraftBody>,
) -> impl IntoResponse {
    let draft = match body.into_draft() {
        Ok(d) => d,
        Err(message) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
                .into_response()
        }
    };

    if let Err(errors) = draft.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorResponse::from(errors)),
        )
            .into_response();
    }

    let payload = draft.into_payload();
    let mut conn = get_conn!(pool);

    match store::update(&mut conn, id, &payload) {
        Ok(recipe) => (StatusCode::OK, Json(RecipeResponse::from(recipe))).into_response(),
        Err(diesel::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Recipe not found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to update recipe {}: {}", id, e);
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
