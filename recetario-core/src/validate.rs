//! Submission-time validation. Collects every field failure rather than
//! stopping at the first, so a form can surface them all at once.

use url::Url;

use crate::draft::{RecipeDraft, VideoSourceField};
use crate::error::{FieldError, ValidationErrors};

impl RecipeDraft {
    /// Checks the draft as submitted. The list rules count what
    /// normalization will keep, so blank entries are already ignored here;
    /// difficulty and platform are closed enums and need no rule.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        if self.title.chars().count() < 5 {
            errors.push(FieldError::new(
                "title",
                "Title must be at least 5 characters",
            ));
        }
        if self.description.chars().count() < 10 {
            errors.push(FieldError::new(
                "description",
                "Description must be at least 10 characters",
            ));
        }
        if self.cuisine.is_empty() {
            errors.push(FieldError::new("cuisine", "Cuisine is required"));
        }
        if self.cook_time < 0 {
            errors.push(FieldError::new("cook_time", "Cook time must be 0 or more"));
        }
        if self.prep_time < 0 {
            errors.push(FieldError::new("prep_time", "Prep time must be 0 or more"));
        }
        if self.servings < 1 {
            errors.push(FieldError::new("servings", "Servings must be at least 1"));
        }
        if self.ingredients.non_blank().is_empty() {
            errors.push(FieldError::new(
                "ingredients",
                "At least one ingredient is required",
            ));
        }
        if self.instructions.non_blank().is_empty() {
            errors.push(FieldError::new(
                "instructions",
                "At least one instruction is required",
            ));
        }
        if self.image.is_empty() {
            errors.push(FieldError::new("image", "Image URL or path is required"));
        }
        if let VideoSourceField::Present(source) = &self.video_source {
            if Url::parse(&source.url).is_err() {
                errors.push(FieldError::new("video_source.url", "Must be a valid URL"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { errors })
        }
    }
}
