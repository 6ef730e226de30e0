use crate::api::recipes::get::RecipeResponse;
use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::store;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use recetario_core::{filter_recipes, CookingStatus, Difficulty, FilterCriteria};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListRecipesParams {
    /// Case-insensitive substring match against recipe titles
    pub search: Option<String>,
    /// Comma-separated cuisines (exact match); a recipe passes on any one.
    /// Example: "Italian,Thai"
    pub cuisines: Option<String>,
    /// Comma-separated difficulties ("Easy,Hard"); a recipe passes on any one
    pub difficulties: Option<String>,
    /// Comma-separated ingredient terms; a recipe must match every one
    pub ingredients: Option<String>,
    /// Keep only recipes whose cook time is at most this many minutes
    pub max_cook_time: Option<i32>,
    /// Comma-separated dietary labels matched against tags; all must match
    pub dietary_restrictions: Option<String>,
    /// "all" (default), "cooked" or "wantToTry"
    pub status: Option<String>,
}

/// Splits a comma-separated parameter, dropping empty pieces so trailing
/// commas and "" behave like an absent filter.
fn csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_criteria(params: &ListRecipesParams) -> Result<FilterCriteria, String> {
    let mut criteria = FilterCriteria::default();

    if let Some(ref search) = params.search {
        criteria.search_query = search.clone();
    }
    if let Some(ref cuisines) = params.cuisines {
        criteria.cuisines = csv(cuisines);
    }
    if let Some(ref difficulties) = params.difficulties {
        for part in csv(difficulties) {
            let difficulty = Difficulty::from_str(&part)
                .ok_or_else(|| format!("Unknown difficulty: {}", part))?;
            criteria.difficulties.push(difficulty);
        }
    }
    if let Some(ref ingredients) = params.ingredients {
        criteria.ingredients = csv(ingredients);
    }
    criteria.max_cook_time = params.max_cook_time;
    if let Some(ref dietary) = params.dietary_restrictions {
        criteria.dietary_restrictions = csv(dietary);
    }
    if let Some(ref status) = params.status {
        criteria.cooking_status = CookingStatus::from_str(status)
            .ok_or_else(|| format!("Unknown cooking status: {}", status))?;
    }

    Ok(criteria)
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListRecipesResponse {
    /// Matching recipes, newest first
    pub recipes: Vec<RecipeResponse>,
    /// Number of recipes after filtering
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    params(ListRecipesParams),
    responses(
        (status = 200, description = "Recipes matching the filter, newest first", body = ListRecipesResponse),
        (status = 400, description = "Invalid filter parameters", body = ErrorResponse)
    )
)]
pub async fn list_recipes(
    State(pool): State<Arc<DbPool>>,
    Query(params): Query<ListRecipesParams>,
) -> impl IntoResponse {
    let criteria = match parse_criteria(&params) {
        Ok(c) => c,
        Err(message) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
                .into_response()
        }
    };

    let mut conn = get_conn!(pool);

    let all = match store::get_all(&mut conn) {
        Ok(recipes) => recipes,
        Err(e) => {
            tracing::error!("Failed to fetch recipes: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipes".to_string(),
                }),
            )
                .into_response();
        }
    };

    // The filter runs over the full collection in memory. The catalog is
    // small and the matching rules (substring terms, conjunctions over
    // array columns) stay in one place instead of being re-expressed in SQL.
    let matching = filter_recipes(all, &criteria);

    let response = ListRecipesResponse {
        count: matching.len(),
        recipes: matching.into_iter().map(RecipeResponse::from).collect(),
    };

    (StatusCode::OK, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_parse_to_the_identity_criteria() {
        let criteria = parse_criteria(&ListRecipesParams::default()).unwrap();
        assert!(criteria.is_empty());
    }

    #[test]
    fn csv_params_split_and_trim() {
        let params = ListRecipesParams {
            cuisines: Some("Italian, Thai,,".to_string()),
            ingredients: Some(" garlic , chicken".to_string()),
            ..Default::default()
        };
        let criteria = parse_criteria(&params).unwrap();
        assert_eq!(criteria.cuisines, ["Italian", "Thai"]);
        assert_eq!(criteria.ingredients, ["garlic", "chicken"]);
    }

    #[test]
    fn difficulties_parse_to_the_closed_set() {
        let params = ListRecipesParams {
            difficulties: Some("Easy,Hard".to_string()),
            ..Default::default()
        };
        let criteria = parse_criteria(&params).unwrap();
        assert_eq!(criteria.difficulties, [Difficulty::Easy, Difficulty::Hard]);
    }

    #[test]
    fn unknown_difficulty_is_an_error() {
        let params = ListRecipesParams {
            difficulties: Some("Easy,Brutal".to_string()),
            ..Default::default()
        };
        let err = parse_criteria(&params).unwrap_err();
        assert_eq!(err, "Unknown difficulty: Brutal");
    }

    #[test]
    fn status_accepts_the_wire_spellings() {
        let params = ListRecipesParams {
            status: Some("wantToTry".to_string()),
            ..Default::default()
        };
        let criteria = parse_criteria(&params).unwrap();
        assert_eq!(criteria.cooking_status, CookingStatus::WantToTry);

        let params = ListRecipesParams {
            status: Some("finished".to_string()),
            ..Default::default()
        };
        assert_eq!(
            parse_criteria(&params).unwrap_err(),
            "Unknown cooking status: finished"
        );
    }

    #[test]
    fn max_cook_time_and_search_carry_over() {
        let params = ListRecipesParams {
            search: Some("soup".to_string()),
            max_cook_time: Some(30),
            ..Default::default()
        };
        let criteria = parse_criteria(&params).unwrap();
        assert_eq!(criteria.search_query, "soup");
        assert_eq!(criteria.max_cook_time, Some(30));
    }
}
