//! The editable recipe form state: a draft the caller mutates field by
//! field, validates, and finally normalizes into a store payload.

use serde::{Deserialize, Serialize};

use crate::types::{Difficulty, RecipePayload, VideoPlatform, VideoSource};

/// An ordered list field (ingredients, instructions, tags) addressed by
/// position, the way a dynamic row list behaves. Knows nothing about
/// rendering; out-of-range operations are no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListField(Vec<String>);

impl ListField {
    pub fn new(entries: Vec<String>) -> Self {
        ListField(entries)
    }

    /// One blank entry, the way an empty form row list starts.
    pub fn single_blank() -> Self {
        ListField(vec![String::new()])
    }

    pub fn push(&mut self, entry: impl Into<String>) {
        self.0.push(entry.into());
    }

    /// Removes and returns the entry at `index`. Out of range: `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        if index < self.0.len() {
            Some(self.0.remove(index))
        } else {
            None
        }
    }

    /// Overwrites the entry at `index`. Out of range: no-op.
    pub fn replace_at(&mut self, index: usize, entry: impl Into<String>) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = entry.into();
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.0
    }

    /// The entries that survive submission: blank (trim-empty) ones are
    /// dropped, kept ones are not trimmed.
    pub fn non_blank(&self) -> Vec<String> {
        self.0
            .iter()
            .filter(|entry| !entry.trim().is_empty())
            .cloned()
            .collect()
    }
}

impl From<Vec<String>> for ListField {
    fn from(entries: Vec<String>) -> Self {
        ListField(entries)
    }
}

/// Video-source form state: either no video source at all, or a complete
/// platform/url pair. A half-initialized pair is unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<VideoSource>", into = "Option<VideoSource>")]
pub enum VideoSourceField {
    #[default]
    Absent,
    Present(VideoSource),
}

impl VideoSourceField {
    /// Picking a platform first materializes the pair with an empty url.
    pub fn set_platform(&mut self, platform: VideoPlatform) {
        match self {
            VideoSourceField::Present(source) => source.platform = platform,
            VideoSourceField::Absent => {
                *self = VideoSourceField::Present(VideoSource {
                    platform,
                    url: String::new(),
                });
            }
        }
    }

    /// Typing a url first materializes the pair with `fallback_platform`.
    pub fn set_url(&mut self, url: impl Into<String>, fallback_platform: VideoPlatform) {
        match self {
            VideoSourceField::Present(source) => source.url = url.into(),
            VideoSourceField::Absent => {
                *self = VideoSourceField::Present(VideoSource {
                    platform: fallback_platform,
                    url: url.into(),
                });
            }
        }
    }

    pub fn clear(&mut self) {
        *self = VideoSourceField::Absent;
    }

    pub fn as_option(&self) -> Option<&VideoSource> {
        match self {
            VideoSourceField::Present(source) => Some(source),
            VideoSourceField::Absent => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, VideoSourceField::Present(_))
    }
}

impl From<Option<VideoSource>> for VideoSourceField {
    fn from(value: Option<VideoSource>) -> Self {
        match value {
            Some(source) => VideoSourceField::Present(source),
            None => VideoSourceField::Absent,
        }
    }
}

impl From<VideoSourceField> for Option<VideoSource> {
    fn from(value: VideoSourceField) -> Self {
        match value {
            VideoSourceField::Present(source) => Some(source),
            VideoSourceField::Absent => None,
        }
    }
}

/// The whole form: every caller-controlled recipe field in its editable
/// shape. `Default` is the blank form. Missing fields deserialize to their
/// blank-form defaults, so a partial body still yields field-level
/// validation errors instead of a parse failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub cuisine: String,
    pub difficulty: Difficulty,
    pub cook_time: i32,
    pub prep_time: i32,
    pub servings: i32,
    pub ingredients: ListField,
    pub instructions: ListField,
    pub image: String,
    pub tags: ListField,
    pub video_source: VideoSourceField,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        RecipeDraft {
            title: String::new(),
            description: String::new(),
            cuisine: String::new(),
            difficulty: Difficulty::Medium,
            cook_time: 0,
            prep_time: 0,
            servings: 1,
            ingredients: ListField::single_blank(),
            instructions: ListField::single_blank(),
            image: String::new(),
            tags: ListField::default(),
            video_source: VideoSourceField::Absent,
        }
    }
}

impl RecipeDraft {
    /// The submission transform, applied silently after validation: blank
    /// list entries are dropped, kept entries stay byte-for-byte untrimmed.
    pub fn into_payload(self) -> RecipePayload {
        RecipePayload {
            title: self.title,
            description: self.description,
            cuisine: self.cuisine,
            difficulty: self.difficulty,
            cook_time: self.cook_time,
            prep_time: self.prep_time,
            servings: self.servings,
            ingredients: self.ingredients.non_blank(),
            instructions: self.instructions.non_blank(),
            image: self.image,
            tags: self.tags.non_blank(),
            video_source: self.video_source.into(),
        }
    }
}
