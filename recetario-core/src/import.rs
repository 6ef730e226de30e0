//! Lenient JSON import: best-effort mapping of an arbitrary blob into a
//! draft. Absent or wrong-typed fields fall back to the blank-form defaults
//! and nothing here validates; a blob that fails to parse rejects the whole
//! import and the caller's draft stays untouched.

use serde_json::{Map, Value};

use crate::draft::{ListField, RecipeDraft, VideoSourceField};
use crate::error::ImportError;
use crate::types::{Difficulty, VideoPlatform, VideoSource};

/// Builds a fresh draft from a JSON blob. All-or-nothing: a malformed blob
/// yields an error and no draft at all.
///
/// Blobs exported by other tools tend to use camelCase keys, so the
/// multi-word fields accept both spellings.
pub fn import_draft(raw: &str) -> Result<RecipeDraft, ImportError> {
    let value: Value = serde_json::from_str(raw)?;
    let obj = value.as_object().ok_or(ImportError::NotAnObject)?;

    let mut draft = RecipeDraft::default();
    if let Some(title) = str_field(obj, &["title"]) {
        draft.title = title.to_string();
    }
    if let Some(description) = str_field(obj, &["description"]) {
        draft.description = description.to_string();
    }
    if let Some(cuisine) = str_field(obj, &["cuisine"]) {
        draft.cuisine = cuisine.to_string();
    }
    if let Some(difficulty) = str_field(obj, &["difficulty"]).and_then(Difficulty::from_str) {
        draft.difficulty = difficulty;
    }
    if let Some(cook_time) = int_field(obj, &["cook_time", "cookTime"]) {
        draft.cook_time = cook_time;
    }
    if let Some(prep_time) = int_field(obj, &["prep_time", "prepTime"]) {
        draft.prep_time = prep_time;
    }
    if let Some(servings) = int_field(obj, &["servings"]) {
        draft.servings = servings;
    }
    if let Some(ingredients) = list_field(obj, &["ingredients"]) {
        draft.ingredients = ListField::new(ingredients);
    }
    if let Some(instructions) = list_field(obj, &["instructions"]) {
        draft.instructions = ListField::new(instructions);
    }
    if let Some(image) = str_field(obj, &["image"]) {
        draft.image = image.to_string();
    }
    if let Some(tags) = list_field(obj, &["tags"]) {
        draft.tags = ListField::new(tags);
    }
    draft.video_source = match video_source(obj) {
        Some(source) => VideoSourceField::Present(source),
        None => VideoSourceField::Absent,
    };

    Ok(draft)
}

impl RecipeDraft {
    /// Replaces `self` with the imported draft. On error `self` is left
    /// exactly as it was.
    pub fn apply_import(&mut self, raw: &str) -> Result<(), ImportError> {
        *self = import_draft(raw)?;
        Ok(())
    }
}

fn get<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| obj.get(*key))
}

fn str_field<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    get(obj, keys).and_then(Value::as_str)
}

fn int_field(obj: &Map<String, Value>, keys: &[&str]) -> Option<i32> {
    get(obj, keys)
        .and_then(Value::as_i64)
        .and_then(|n| i32::try_from(n).ok())
}

/// A list keeps only its string items; a non-list counts as absent.
fn list_field(obj: &Map<String, Value>, keys: &[&str]) -> Option<Vec<String>> {
    get(obj, keys).and_then(Value::as_array).map(|items| {
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    })
}

/// A recognizable video source is an object holding a known platform string
/// and a string url, either bare or one level inside a persistence-style
/// "create" envelope. Anything else counts as no video source.
fn video_source(obj: &Map<String, Value>) -> Option<VideoSource> {
    let raw = get(obj, &["video_source", "videoSource"])?;
    let fields = match raw.get("create") {
        Some(inner) if inner.is_object() => inner,
        _ => raw,
    };
    let platform = fields
        .get("platform")
        .and_then(Value::as_str)
        .and_then(VideoPlatform::from_str)?;
    let url = fields.get("url").and_then(Value::as_str)?;
    Some(VideoSource {
        platform,
        url: url.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_full_blob_populates_every_field() {
        let raw = r#"{
            "title": "Tacos al Pastor",
            "description": "Marinated pork with pineapple",
            "cuisine": "Mexican",
            "difficulty": "Hard",
            "cookTime": 45,
            "prepTime": 120,
            "servings": 4,
            "ingredients": ["1kg pork shoulder", "1 pineapple"],
            "instructions": ["Marinate overnight", "Grill and slice"],
            "image": "/images/tacos.jpg",
            "tags": ["Street Food"],
            "videoSource": {"create": {"platform": "YouTube", "url": "https://youtu.be/tacos"}}
        }"#;

        let draft = import_draft(raw).unwrap();
        assert_eq!(draft.title, "Tacos al Pastor");
        assert_eq!(draft.description, "Marinated pork with pineapple");
        assert_eq!(draft.cuisine, "Mexican");
        assert_eq!(draft.difficulty, Difficulty::Hard);
        assert_eq!(draft.cook_time, 45);
        assert_eq!(draft.prep_time, 120);
        assert_eq!(draft.servings, 4);
        assert_eq!(draft.ingredients.entries(), ["1kg pork shoulder", "1 pineapple"]);
        assert_eq!(
            draft.instructions.entries(),
            ["Marinate overnight", "Grill and slice"]
        );
        assert_eq!(draft.image, "/images/tacos.jpg");
        assert_eq!(draft.tags.entries(), ["Street Food"]);
        assert_eq!(
            draft.video_source.as_option(),
            Some(&VideoSource {
                platform: VideoPlatform::YouTube,
                url: "https://youtu.be/tacos".to_string(),
            })
        );
    }

    #[test]
    fn bare_and_wrapped_video_sources_import_identically() {
        let wrapped = r#"{"videoSource": {"create": {"platform": "TikTok", "url": "https://tiktok.com/@x/video/1"}}}"#;
        let bare = r#"{"videoSource": {"platform": "TikTok", "url": "https://tiktok.com/@x/video/1"}}"#;
        assert_eq!(
            import_draft(wrapped).unwrap().video_source,
            import_draft(bare).unwrap().video_source
        );
        assert!(import_draft(bare).unwrap().video_source.is_present());
    }

    #[test]
    fn malformed_json_leaves_an_existing_draft_untouched() {
        let mut draft = import_draft(r#"{"title": "Kept Exactly"}"#).unwrap();
        let before = draft.clone();

        let err = draft.apply_import("this is not json").unwrap_err();
        assert!(matches!(err, ImportError::InvalidJson(_)));
        assert_eq!(err.to_string(), "Invalid JSON format");
        assert_eq!(draft, before);
    }

    #[test]
    fn a_non_object_root_is_rejected() {
        assert!(matches!(
            import_draft("[1, 2, 3]").unwrap_err(),
            ImportError::NotAnObject
        ));
        assert!(matches!(
            import_draft("\"just a string\"").unwrap_err(),
            ImportError::NotAnObject
        ));
    }

    #[test]
    fn absent_fields_fall_back_to_blank_form_defaults() {
        let draft = import_draft(r#"{"title": "Arroz con Pollo"}"#).unwrap();
        assert_eq!(draft.title, "Arroz con Pollo");
        assert_eq!(draft.description, "");
        assert_eq!(draft.cuisine, "");
        assert_eq!(draft.difficulty, Difficulty::Medium);
        assert_eq!(draft.cook_time, 0);
        assert_eq!(draft.prep_time, 0);
        assert_eq!(draft.servings, 1);
        assert_eq!(draft.ingredients.entries(), [""]);
        assert_eq!(draft.instructions.entries(), [""]);
        assert_eq!(draft.image, "");
        assert!(draft.tags.is_empty());
        assert_eq!(draft.video_source, VideoSourceField::Absent);
    }

    #[test]
    fn unknown_difficulty_falls_back_to_medium() {
        let draft = import_draft(r#"{"difficulty": "Impossible"}"#).unwrap();
        assert_eq!(draft.difficulty, Difficulty::Medium);

        let draft = import_draft(r#"{"difficulty": 3}"#).unwrap();
        assert_eq!(draft.difficulty, Difficulty::Medium);
    }

    #[test]
    fn wrong_typed_scalars_fall_back() {
        let draft = import_draft(r#"{"cookTime": "25", "servings": "lots", "title": 9}"#).unwrap();
        assert_eq!(draft.cook_time, 0);
        assert_eq!(draft.servings, 1);
        assert_eq!(draft.title, "");
    }

    #[test]
    fn snake_case_keys_are_accepted_too() {
        let draft = import_draft(r#"{"cook_time": 25, "prep_time": 10}"#).unwrap();
        assert_eq!(draft.cook_time, 25);
        assert_eq!(draft.prep_time, 10);
    }

    #[test]
    fn list_items_are_kept_verbatim_blanks_included() {
        let draft = import_draft(r#"{"ingredients": ["", " 2 eggs "]}"#).unwrap();
        assert_eq!(draft.ingredients.entries(), ["", " 2 eggs "]);
    }

    #[test]
    fn non_string_list_items_are_skipped() {
        let draft = import_draft(r#"{"ingredients": [1, "flour", null]}"#).unwrap();
        assert_eq!(draft.ingredients.entries(), ["flour"]);
    }

    #[test]
    fn a_non_list_where_a_list_belongs_counts_as_absent() {
        let draft = import_draft(r#"{"ingredients": "flour", "tags": "spicy"}"#).unwrap();
        assert_eq!(draft.ingredients.entries(), [""]);
        assert!(draft.tags.is_empty());
    }

    #[test]
    fn an_unrecognizable_video_source_imports_as_absent() {
        for raw in [
            r#"{"videoSource": {"platform": "Vimeo", "url": "https://vimeo.com/1"}}"#,
            r#"{"videoSource": {"platform": "YouTube"}}"#,
            r#"{"videoSource": "https://youtu.be/abc"}"#,
            r#"{"videoSource": null}"#,
        ] {
            let draft = import_draft(raw).unwrap();
            assert_eq!(draft.video_source, VideoSourceField::Absent, "for {raw}");
        }
    }

    #[test]
    fn import_does_not_validate() {
        // A one-character title imports fine; validation happens at submit.
        let draft = import_draft(r#"{"title": "X"}"#).unwrap();
        assert!(draft.validate().is_err());
    }
}
