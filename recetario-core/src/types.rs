use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How hard a recipe is to pull off. Closed set: no other value is ever
/// stored or filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Easy" => Some(Difficulty::Easy),
            "Medium" => Some(Difficulty::Medium),
            "Hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Where an attached short-form video lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoPlatform {
    YouTube,
    Instagram,
    TikTok,
}

impl VideoPlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoPlatform::YouTube => "YouTube",
            VideoPlatform::Instagram => "Instagram",
            VideoPlatform::TikTok => "TikTok",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "YouTube" => Some(VideoPlatform::YouTube),
            "Instagram" => Some(VideoPlatform::Instagram),
            "TikTok" => Some(VideoPlatform::TikTok),
            _ => None,
        }
    }
}

/// The cooked/want-to-try axis of the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CookingStatus {
    #[default]
    All,
    Cooked,
    WantToTry,
}

impl CookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CookingStatus::All => "all",
            CookingStatus::Cooked => "cooked",
            CookingStatus::WantToTry => "wantToTry",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "all" => Some(CookingStatus::All),
            "cooked" => Some(CookingStatus::Cooked),
            "wantToTry" => Some(CookingStatus::WantToTry),
            _ => None,
        }
    }
}

/// A video attached to a recipe. At most one per recipe; on update it is
/// replaced wholesale, never merged field by field, and it goes away with
/// its recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSource {
    pub platform: VideoPlatform,
    pub url: String,
}

/// A stored recipe, as the catalog hands it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Free-form label ("Italian", "italian-fusion", ...). Facets and the
    /// cuisine filter treat distinct spellings as distinct cuisines.
    pub cuisine: String,
    pub difficulty: Difficulty,
    /// Active cooking minutes. The only field the max-cook-time filter reads.
    pub cook_time: i32,
    /// Preparation minutes.
    pub prep_time: i32,
    pub servings: i32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// Image URL or path. Opaque to this crate.
    pub image: String,
    /// Free-form labels; dietary restrictions filter against these.
    pub tags: Vec<String>,
    /// Cooked already, as opposed to still on the want-to-try list.
    pub cooked: bool,
    /// Store-assigned. The collection is ordered newest-first by this.
    pub created_at: DateTime<Utc>,
    pub video_source: Option<VideoSource>,
}

/// What a validated, normalized draft submits to the store: every field the
/// caller controls. Ids, timestamps and the cooked flag are the store's
/// business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipePayload {
    pub title: String,
    pub description: String,
    pub cuisine: String,
    pub difficulty: Difficulty,
    pub cook_time: i32,
    pub prep_time: i32,
    pub servings: i32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub image: String,
    pub tags: Vec<String>,
    pub video_source: Option<VideoSource>,
}
