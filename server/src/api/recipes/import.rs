use crate::api::recipes::create::RecipeDraftBody;
use crate::api::ErrorResponse;
use crate::auth::AuthPrincipal;
use axum::{http::StatusCode, response::IntoResponse, Json};
use recetario_core::import_draft;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ImportRecipeRequest {
    /// Raw JSON text as pasted by the user
    pub raw: String,
}

/// Parses pasted recipe JSON into a draft without storing anything. The
/// caller reviews the draft in the form and submits it via POST
/// /api/recipes; nothing imported here is validated yet.
#[utoipa::path(
    post,
    path = "/api/recipes/import",
    tag = "recipes",
    request_body = ImportRecipeRequest,
    responses(
        (status = 200, description = "Parsed recipe draft", body = RecipeDraftBody),
        (status = 400, description = "Unparseable JSON", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn import_recipe(
    _principal: AuthPrincipal,
    Json(request): Json<ImportRecipeRequest>,
) -> impl IntoResponse {
    match import_draft(&request.raw) {
        Ok(draft) => (StatusCode::OK, Json(RecipeDraftBody::from(draft))).into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}
