use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::store;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use recetario_core::{Recipe, VideoSource};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

/// Video attached to a recipe (mirrors recetario_core::VideoSource)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VideoSourceResponse {
    /// "YouTube", "Instagram" or "TikTok"
    pub platform: String,
    pub url: String,
}

impl From<VideoSource> for VideoSourceResponse {
    fn from(video: VideoSource) -> Self {
        VideoSourceResponse {
            platform: video.platform.as_str().to_string(),
            url: video.url,
        }
    }
}

/// A stored recipe as returned by every read and write endpoint
/// (mirrors recetario_core::Recipe)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub cuisine: String,
    /// "Easy", "Medium" or "Hard"
    pub difficulty: String,
    /// Minutes
    pub cook_time: i32,
    /// Minutes
    pub prep_time: i32,
    pub servings: i32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub image: String,
    pub tags: Vec<String>,
    pub cooked: bool,
    pub created_at: DateTime<Utc>,
    pub video_source: Option<VideoSourceResponse>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        RecipeResponse {
            id: recipe.id,
            title: recipe.title,
            description: recipe.description,
            cuisine: recipe.cuisine,
            difficulty: recipe.difficulty.as_str().to_string(),
            cook_time: recipe.cook_time,
            prep_time: recipe.prep_time,
            servings: recipe.servings,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            image: recipe.image,
            tags: recipe.tags,
            cooked: recipe.cooked,
            created_at: recipe.created_at,
            video_source: recipe.video_source.map(VideoSourceResponse::from),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe details", body = RecipeResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn get_recipe(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    match store::get_by_id(&mut conn, id) {
        Ok(recipe) => (StatusCode::OK, Json(RecipeResponse::from(recipe))).into_response(),
        Err(diesel::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Recipe not found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch recipe {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
