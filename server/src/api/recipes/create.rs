use crate::api::recipes::get::RecipeResponse;
use crate::api::{ErrorResponse, ValidationErrorResponse};
use crate::auth::AuthPrincipal;
use crate::db::DbPool;
use crate::get_conn;
use crate::store;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use recetario_core::{
    Difficulty, ListField, RecipeDraft, VideoPlatform, VideoSource, VideoSourceField,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// Video source as submitted by the form (mirrors recetario_core::VideoSource)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VideoSourceBody {
    /// "YouTube", "Instagram" or "TikTok"
    pub platform: String,
    pub url: String,
}

impl From<VideoSource> for VideoSourceBody {
    fn from(video: VideoSource) -> Self {
        VideoSourceBody {
            platform: video.platform.as_str().to_string(),
            url: video.url,
        }
    }
}

/// A recipe form submission (mirrors recetario_core::RecipeDraft). Missing
/// fields take the blank-form defaults so validation can report them
/// field by field instead of the deserializer rejecting the body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct RecipeDraftBody {
    pub title: String,
    pub description: String,
    pub cuisine: String,
    /// "Easy", "Medium" or "Hard"
    pub difficulty: String,
    pub cook_time: i32,
    pub prep_time: i32,
    pub servings: i32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub image: String,
    pub tags: Vec<String>,
    pub video_source: Option<VideoSourceBody>,
}

impl Default for RecipeDraftBody {
    fn default() -> Self {
        RecipeDraftBody::from(RecipeDraft::default())
    }
}

impl RecipeDraftBody {
    /// Rebuild the core draft. Fails on difficulty or platform strings the
    /// domain does not know; everything else is left for validation.
    pub fn into_draft(self) -> Result<RecipeDraft, String> {
        let difficulty = Difficulty::from_str(&self.difficulty)
            .ok_or_else(|| format!("Unknown difficulty: {}", self.difficulty))?;

        let video_source = match self.video_source {
            Some(video) => {
                let platform = VideoPlatform::from_str(&video.platform)
                    .ok_or_else(|| format!("Unknown video platform: {}", video.platform))?;
                VideoSourceField::Present(VideoSource {
                    platform,
                    url: video.url,
                })
            }
            None => VideoSourceField::Absent,
        };

        Ok(RecipeDraft {
            title: self.title,
            description: self.description,
            cuisine: self.cuisine,
            difficulty,
            cook_time: self.cook_time,
            prep_time: self.prep_time,
            servings: self.servings,
            ingredients: ListField::from(self.ingredients),
            instructions: ListField::from(self.instructions),
            image: self.image,
            tags: ListField::from(self.tags),
            video_source,
        })
    }
}

impl From<RecipeDraft> for RecipeDraftBody {
    fn from(draft: RecipeDraft) -> Self {
        RecipeDraftBody {
            title: draft.title,
            description: draft.description,
            cuisine: draft.cuisine,
            difficulty: draft.difficulty.as_str().to_string(),
            cook_time: draft.cook_time,
            prep_time: draft.prep_time,
            servings: draft.servings,
            ingredients: draft.ingredients.entries().to_vec(),
            instructions: draft.instructions.entries().to_vec(),
            image: draft.image,
            tags: draft.tags.entries().to_vec(),
            video_source: Option::<VideoSource>::from(draft.video_source).map(VideoSourceBody::from),
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body = RecipeDraftBody,
    responses(
        (status = 201, description = "Recipe created successfully", body = RecipeResponse),
        (status = 400, description = "Validation failed", body = ValidationErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_recipe(
    _principal: AuthPrincipal,
    State(pool): State<Arc<DbPool>>,
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

    match store::create(&mut conn, &payload) {
        Ok(recipe) => (StatusCode::CREATED, Json(RecipeResponse::from(recipe))).into_response(),
        Err(e) => {
            tracing::error!("Failed to create recipe: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_body() -> RecipeDraftBody {
        RecipeDraftBody {
            title: "Lentil Dal".to_string(),
            description: "Slow-simmered red lentils with spices".to_string(),
            cuisine: "Indian".to_string(),
            difficulty: "Easy".to_string(),
            cook_time: 35,
            prep_time: 10,
            servings: 4,
            ingredients: vec!["red lentils".to_string(), "turmeric".to_string()],
            instructions: vec!["Simmer lentils".to_string()],
            image: "https://example.com/dal.jpg".to_string(),
            tags: vec!["vegan".to_string()],
            video_source: None,
        }
    }

    #[test]
    fn body_round_trips_through_the_core_draft() {
        let body = valid_body();
        let draft = body.clone().into_draft().unwrap();
        let back = RecipeDraftBody::from(draft);
        assert_eq!(back.title, body.title);
        assert_eq!(back.difficulty, "Easy");
        assert_eq!(back.ingredients, body.ingredients);
        assert!(back.video_source.is_none());
    }

    #[test]
    fn unknown_difficulty_is_rejected_before_validation() {
        let mut body = valid_body();
        body.difficulty = "Impossible".to_string();
        let err = body.into_draft().unwrap_err();
        assert_eq!(err, "Unknown difficulty: Impossible");
    }

    #[test]
    fn unknown_platform_is_rejected_before_validation() {
        let mut body = valid_body();
        body.video_source = Some(VideoSourceBody {
            platform: "Vimeo".to_string(),
            url: "https://vimeo.com/123".to_string(),
        });
        let err = body.into_draft().unwrap_err();
        assert_eq!(err, "Unknown video platform: Vimeo");
    }

    #[test]
    fn partial_body_deserializes_with_blank_form_defaults() {
        let body: RecipeDraftBody =
            serde_json::from_str("{\"title\": \"Just a title\"}").unwrap();
        assert_eq!(body.title, "Just a title");
        assert_eq!(body.difficulty, "Medium");
        assert_eq!(body.servings, 1);
        // The blank form starts with one empty row per list.
        assert_eq!(body.ingredients, vec![String::new()]);
    }
}
