use chrono::{DateTime, Utc};
use diesel::prelude::*;
use recetario_core::{Difficulty, Recipe, VideoPlatform, VideoSource};
use uuid::Uuid;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct RecipeRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub cuisine: String,
    pub difficulty: String,
    pub cook_time: i32,
    pub prep_time: i32,
    pub servings: i32,
    pub ingredients: Vec<Option<String>>,
    pub instructions: Vec<Option<String>>,
    pub image: String,
    pub tags: Vec<Option<String>>,
    pub cooked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecipeRow {
    /// Assembles the domain recipe from its row plus the joined video
    /// source, if any. The difficulty column is CHECK-constrained to the
    /// three known values; anything else falls back to the default.
    pub fn into_recipe(self, video: Option<VideoSourceRow>) -> Recipe {
        Recipe {
            id: self.id,
            title: self.title,
            description: self.description,
            cuisine: self.cuisine,
            difficulty: Difficulty::from_str(&self.difficulty).unwrap_or_default(),
            cook_time: self.cook_time,
            prep_time: self.prep_time,
            servings: self.servings,
            ingredients: self.ingredients.into_iter().flatten().collect(),
            instructions: self.instructions.into_iter().flatten().collect(),
            image: self.image,
            tags: self.tags.into_iter().flatten().collect(),
            cooked: self.cooked,
            created_at: self.created_at,
            video_source: video.and_then(VideoSourceRow::into_video_source),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub cuisine: &'a str,
    pub difficulty: &'a str,
    pub cook_time: i32,
    pub prep_time: i32,
    pub servings: i32,
    pub ingredients: &'a [Option<String>],
    pub instructions: &'a [Option<String>],
    pub image: &'a str,
    pub tags: &'a [Option<String>],
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::video_sources)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct VideoSourceRow {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub platform: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl VideoSourceRow {
    /// `None` if the stored platform is not one of the known values, which
    /// the CHECK constraint rules out for rows this server wrote.
    pub fn into_video_source(self) -> Option<VideoSource> {
        let platform = VideoPlatform::from_str(&self.platform)?;
        Some(VideoSource {
            platform,
            url: self.url,
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::video_sources)]
pub struct NewVideoSource<'a> {
    pub recipe_id: Uuid,
    pub platform: &'a str,
    pub url: &'a str,
}
