//! Core domain logic for the recetario recipe catalog: the data model, the
//! in-memory filter engine, facet extraction for the filter pickers, and the
//! recipe form model (draft, validation, normalization, JSON import).
//!
//! Everything in this crate is synchronous and pure. Persistence and HTTP
//! live in the server crate.

pub mod draft;
pub mod error;
pub mod facets;
pub mod filter;
pub mod import;
pub mod types;
mod validate;

pub use draft::{ListField, RecipeDraft, VideoSourceField};
pub use error::{FieldError, ImportError, ValidationErrors};
pub use facets::{distinct_cuisines, ranked_ingredients};
pub use filter::{filter_recipes, FilterCriteria};
pub use import::import_draft;
pub use types::{
    CookingStatus, Difficulty, Recipe, RecipePayload, VideoPlatform, VideoSource,
};
