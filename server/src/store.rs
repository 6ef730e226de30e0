//! The recipe store: every persisted operation the API exposes. Each
//! function runs on a checked-out connection inside a `db.query` span, and
//! each returns domain recipes with their video source resolved.

use diesel::prelude::*;
use recetario_core::{Recipe, RecipePayload, VideoSource};
use uuid::Uuid;

use crate::models::{NewRecipe, NewVideoSource, RecipeRow, VideoSourceRow};
use crate::schema::{recipes, video_sources};

/// The full collection, newest first.
pub fn get_all(conn: &mut PgConnection) -> QueryResult<Vec<Recipe>> {
    let _span = tracing::debug_span!("db.query", query = "recipes.get_all").entered();

    let rows: Vec<(RecipeRow, Option<VideoSourceRow>)> = recipes::table
        .left_join(video_sources::table)
        .order(recipes::created_at.desc())
        .select((RecipeRow::as_select(), Option::<VideoSourceRow>::as_select()))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(recipe, video)| recipe.into_recipe(video))
        .collect())
}

/// One recipe; `Err(diesel::NotFound)` when the id is unknown.
pub fn get_by_id(conn: &mut PgConnection, id: Uuid) -> QueryResult<Recipe> {
    let _span = tracing::debug_span!("db.query", query = "recipes.get_by_id").entered();

    let (recipe, video): (RecipeRow, Option<VideoSourceRow>) = recipes::table
        .left_join(video_sources::table)
        .filter(recipes::id.eq(id))
        .select((RecipeRow::as_select(), Option::<VideoSourceRow>::as_select()))
        .first(conn)?;

    Ok(recipe.into_recipe(video))
}

/// Inserts the recipe and, when present, its video source atomically, and
/// returns the stored result.
pub fn create(conn: &mut PgConnection, payload: &RecipePayload) -> QueryResult<Recipe> {
    let _span = tracing::debug_span!("db.query", query = "recipes.create").entered();

    let ingredients = to_array(&payload.ingredients);
    let instructions = to_array(&payload.instructions);
    let tags = to_array(&payload.tags);

    let recipe_id = conn.transaction(|conn| {
        let new_recipe = NewRecipe {
            title: &payload.title,
            description: &payload.description,
            cuisine: &payload.cuisine,
            difficulty: payload.difficulty.as_str(),
            cook_time: payload.cook_time,
            prep_time: payload.prep_time,
            servings: payload.servings,
            ingredients: &ingredients,
            instructions: &instructions,
            image: &payload.image,
            tags: &tags,
        };

        let recipe_id: Uuid = diesel::insert_into(recipes::table)
            .values(&new_recipe)
            .returning(recipes::id)
            .get_result(conn)?;

        if let Some(video) = &payload.video_source {
            diesel::insert_into(video_sources::table)
                .values(NewVideoSource {
                    recipe_id,
                    platform: video.platform.as_str(),
                    url: &video.url,
                })
                .execute(conn)?;
        }

        Ok::<_, diesel::result::Error>(recipe_id)
    })?;

    get_by_id(conn, recipe_id)
}

/// What an update has to do to the stored video source row, given whether
/// the payload carries one and whether a row already exists. The payload
/// always replaces wholesale; there is no field-by-field merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VideoSourceWrite<'a> {
    Replace(Uuid, &'a VideoSource),
    Insert(&'a VideoSource),
    Delete(Uuid),
    Nothing,
}

fn resolve_video_source_write(
    payload: Option<&VideoSource>,
    existing: Option<Uuid>,
) -> VideoSourceWrite<'_> {
    match (payload, existing) {
        (Some(video), Some(row_id)) => VideoSourceWrite::Replace(row_id, video),
        (Some(video), None) => VideoSourceWrite::Insert(video),
        (None, Some(row_id)) => VideoSourceWrite::Delete(row_id),
        (None, None) => VideoSourceWrite::Nothing,
    }
}

/// Overwrites every caller-controlled field and resolves the video source
/// against its current persisted state. That state is read before the write
/// transaction, not inside it; a concurrent update between the read and the
/// write can act on a stale snapshot.
pub fn update(conn: &mut PgConnection, id: Uuid, payload: &RecipePayload) -> QueryResult<Recipe> {
    let _span = tracing::debug_span!("db.query", query = "recipes.update").entered();

    let existing_video: Option<Uuid> = video_sources::table
        .filter(video_sources::recipe_id.eq(id))
        .select(video_sources::id)
        .first(conn)
        .optional()?;

    let ingredients = to_array(&payload.ingredients);
    let instructions = to_array(&payload.instructions);
    let tags = to_array(&payload.tags);

    conn.transaction(|conn| {
        let updated = diesel::update(recipes::table.find(id))
            .set((
                recipes::title.eq(&payload.title),
                recipes::description.eq(&payload.description),
                recipes::cuisine.eq(&payload.cuisine),
                recipes::difficulty.eq(payload.difficulty.as_str()),
                recipes::cook_time.eq(payload.cook_time),
                recipes::prep_time.eq(payload.prep_time),
                recipes::servings.eq(payload.servings),
                recipes::ingredients.eq(&ingredients),
                recipes::instructions.eq(&instructions),
                recipes::image.eq(&payload.image),
                recipes::tags.eq(&tags),
                recipes::updated_at.eq(diesel::dsl::now),
            ))
            .execute(conn)?;
        if updated == 0 {
            return Err(diesel::result::Error::NotFound);
        }

        match resolve_video_source_write(payload.video_source.as_ref(), existing_video) {
            VideoSourceWrite::Replace(row_id, video) => {
                diesel::update(video_sources::table.find(row_id))
                    .set((
                        video_sources::platform.eq(video.platform.as_str()),
                        video_sources::url.eq(&video.url),
                    ))
                    .execute(conn)?;
            }
            VideoSourceWrite::Insert(video) => {
                diesel::insert_into(video_sources::table)
                    .values(NewVideoSource {
                        recipe_id: id,
                        platform: video.platform.as_str(),
                        url: &video.url,
                    })
                    .execute(conn)?;
            }
            VideoSourceWrite::Delete(row_id) => {
                diesel::delete(video_sources::table.find(row_id)).execute(conn)?;
            }
            VideoSourceWrite::Nothing => {}
        }

        Ok(())
    })?;

    get_by_id(conn, id)
}

/// Flips the cooked flag in place and returns the refreshed recipe;
/// `Err(diesel::NotFound)` when the id is unknown.
pub fn toggle_cooked(conn: &mut PgConnection, id: Uuid) -> QueryResult<Recipe> {
    let _span = tracing::debug_span!("db.query", query = "recipes.toggle_cooked").entered();

    let row: RecipeRow = diesel::update(recipes::table.find(id))
        .set((
            recipes::cooked.eq(diesel::dsl::not(recipes::cooked)),
            recipes::updated_at.eq(diesel::dsl::now),
        ))
        .returning(RecipeRow::as_returning())
        .get_result(conn)?;

    let video: Option<VideoSourceRow> = video_sources::table
        .filter(video_sources::recipe_id.eq(id))
        .select(VideoSourceRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.into_recipe(video))
}

/// Postgres arrays come back with nullable elements, so they go in that way
/// too.
fn to_array(values: &[String]) -> Vec<Option<String>> {
    values.iter().cloned().map(Some).collect()
}
