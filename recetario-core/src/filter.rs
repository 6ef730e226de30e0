//! The catalog's filter engine: a conjunction of independently inactive
//! criteria, applied in memory over the full recipe collection.

use serde::{Deserialize, Serialize};

use crate::types::{CookingStatus, Difficulty, Recipe};

/// One browsing session's worth of filter state. Transient; never persisted.
///
/// Every field has an inactive zero value (empty string, empty list, `None`,
/// [`CookingStatus::All`]), so `FilterCriteria::default()` matches every
/// recipe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against the title only.
    pub search_query: String,
    /// Exact-match cuisines, OR'd together.
    pub cuisines: Vec<String>,
    /// Difficulties, OR'd together.
    pub difficulties: Vec<Difficulty>,
    /// Ingredient terms. Every term must case-insensitively substring-match
    /// at least one ingredient of the recipe.
    pub ingredients: Vec<String>,
    /// Inclusive cutoff on `cook_time`. Prep time is never consulted.
    pub max_cook_time: Option<i32>,
    /// Dietary labels. Every one must case-insensitively substring-match at
    /// least one tag of the recipe.
    pub dietary_restrictions: Vec<String>,
    pub cooking_status: CookingStatus,
}

impl FilterCriteria {
    /// True when no criterion is active and filtering is the identity.
    pub fn is_empty(&self) -> bool {
        self.search_query.is_empty()
            && self.cuisines.is_empty()
            && self.difficulties.is_empty()
            && self.ingredients.is_empty()
            && self.max_cook_time.is_none()
            && self.dietary_restrictions.is_empty()
            && self.cooking_status == CookingStatus::All
    }

    /// The conjunctive predicate: a recipe passes only if it passes every
    /// active criterion. Inactive criteria pass everything.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if !self.search_query.is_empty()
            && !recipe
                .title
                .to_lowercase()
                .contains(&self.search_query.to_lowercase())
        {
            return false;
        }

        if !self.cuisines.is_empty() && !self.cuisines.contains(&recipe.cuisine) {
            return false;
        }

        if !self.difficulties.is_empty() && !self.difficulties.contains(&recipe.difficulty) {
            return false;
        }

        if !self.ingredients.is_empty() {
            let have: Vec<String> = recipe
                .ingredients
                .iter()
                .map(|i| i.to_lowercase())
                .collect();
            let all_present = self.ingredients.iter().all(|wanted| {
                let wanted = wanted.to_lowercase();
                have.iter().any(|i| i.contains(&wanted))
            });
            if !all_present {
                return false;
            }
        }

        if let Some(max) = self.max_cook_time {
            if recipe.cook_time > max {
                return false;
            }
        }

        if !self.dietary_restrictions.is_empty() {
            let tags: Vec<String> = recipe.tags.iter().map(|t| t.to_lowercase()).collect();
            let all_present = self.dietary_restrictions.iter().all(|wanted| {
                let wanted = wanted.to_lowercase();
                tags.iter().any(|t| t.contains(&wanted))
            });
            if !all_present {
                return false;
            }
        }

        match self.cooking_status {
            CookingStatus::All => true,
            CookingStatus::Cooked => recipe.cooked,
            CookingStatus::WantToTry => !recipe.cooked,
        }
    }
}

/// Filters a collection, preserving the input order. Pure and idempotent:
/// filtering a result again with the same criteria returns it unchanged.
pub fn filter_recipes(recipes: Vec<Recipe>, criteria: &FilterCriteria) -> Vec<Recipe> {
    recipes
        .into_iter()
        .filter(|recipe| criteria.matches(recipe))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn recipe(title: &str) -> Recipe {
        Recipe {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: "Something worth cooking".to_string(),
            cuisine: "Italian".to_string(),
            difficulty: Difficulty::Medium,
            cook_time: 30,
            prep_time: 10,
            servings: 2,
            ingredients: vec!["flour".to_string()],
            instructions: vec!["Mix everything".to_string()],
            image: "/images/test.jpg".to_string(),
            tags: vec![],
            cooked: false,
            created_at: Utc::now(),
            video_source: None,
        }
    }

    fn titles(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn default_criteria_is_the_identity() {
        let collection = vec![recipe("Paella"), recipe("Pho"), recipe("Pierogi")];
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());

        let filtered = filter_recipes(collection.clone(), &criteria);
        assert_eq!(filtered, collection);
    }

    #[test]
    fn search_matches_title_case_insensitively() {
        let mut soup = recipe("Tomato Soup");
        soup.description = "Great with paella on the side".to_string();
        let collection = vec![soup, recipe("Paella")];

        let criteria = FilterCriteria {
            search_query: "TOMATO".to_string(),
            ..Default::default()
        };
        assert_eq!(titles(&filter_recipes(collection.clone(), &criteria)), ["Tomato Soup"]);

        // Only the title is searched; a description mention does not count.
        let criteria = FilterCriteria {
            search_query: "paella".to_string(),
            ..Default::default()
        };
        assert_eq!(titles(&filter_recipes(collection, &criteria)), ["Paella"]);
    }

    #[test]
    fn cuisine_is_exact_match_or_across_selections() {
        let mut thai = recipe("Pad Thai");
        thai.cuisine = "Thai".to_string();
        let mut fusion = recipe("Fusion Bowl");
        fusion.cuisine = "italian-fusion".to_string();
        let collection = vec![recipe("Carbonara"), thai, fusion];

        let criteria = FilterCriteria {
            cuisines: vec!["Italian".to_string(), "Thai".to_string()],
            ..Default::default()
        };
        assert_eq!(
            titles(&filter_recipes(collection.clone(), &criteria)),
            ["Carbonara", "Pad Thai"]
        );

        // Exact match: neither a substring nor a case variant qualifies.
        let criteria = FilterCriteria {
            cuisines: vec!["italian".to_string()],
            ..Default::default()
        };
        assert!(filter_recipes(collection, &criteria).is_empty());
    }

    #[test]
    fn difficulty_is_or_across_selections() {
        let mut easy = recipe("Toast");
        easy.difficulty = Difficulty::Easy;
        let mut hard = recipe("Croissants");
        hard.difficulty = Difficulty::Hard;
        let collection = vec![easy, recipe("Risotto"), hard];

        let criteria = FilterCriteria {
            difficulties: vec![Difficulty::Easy, Difficulty::Hard],
            ..Default::default()
        };
        assert_eq!(
            titles(&filter_recipes(collection, &criteria)),
            ["Toast", "Croissants"]
        );
    }

    #[test]
    fn ingredient_terms_all_have_to_match() {
        let mut curry = recipe("Green Curry");
        curry.ingredients = vec![
            "chicken breast".to_string(),
            "garlic cloves".to_string(),
            "coconut milk".to_string(),
        ];
        let collection = vec![curry, recipe("Plain Bread")];

        let criteria = FilterCriteria {
            ingredients: vec!["GARLIC".to_string(), "chicken".to_string()],
            ..Default::default()
        };
        assert_eq!(titles(&filter_recipes(collection.clone(), &criteria)), ["Green Curry"]);

        // One unmatched term sinks the recipe: terms are AND'd.
        let criteria = FilterCriteria {
            ingredients: vec!["garlic".to_string(), "egg".to_string()],
            ..Default::default()
        };
        assert!(filter_recipes(collection, &criteria).is_empty());
    }

    #[test]
    fn max_cook_time_is_inclusive_and_ignores_prep_time() {
        let mut quick = recipe("Stir Fry");
        quick.cook_time = 15;
        quick.prep_time = 40;
        let mut boundary = recipe("Frittata");
        boundary.cook_time = 20;
        let mut slow = recipe("Brisket");
        slow.cook_time = 25;
        slow.prep_time = 0;
        let collection = vec![quick, boundary, slow];

        let criteria = FilterCriteria {
            max_cook_time: Some(20),
            ..Default::default()
        };
        assert_eq!(
            titles(&filter_recipes(collection, &criteria)),
            ["Stir Fry", "Frittata"]
        );
    }

    #[test]
    fn dietary_restrictions_all_have_to_match_tags() {
        let mut veggie = recipe("Lentil Stew");
        veggie.tags = vec!["Vegetarian".to_string(), "Quick".to_string()];
        let collection = vec![veggie, recipe("Carbonara")];

        let criteria = FilterCriteria {
            dietary_restrictions: vec!["vegetarian".to_string()],
            ..Default::default()
        };
        assert_eq!(titles(&filter_recipes(collection.clone(), &criteria)), ["Lentil Stew"]);

        let criteria = FilterCriteria {
            dietary_restrictions: vec!["vegetarian".to_string(), "vegan".to_string()],
            ..Default::default()
        };
        assert!(filter_recipes(collection, &criteria).is_empty());
    }

    #[test]
    fn cooking_status_splits_the_collection() {
        let mut done = recipe("Gyudon");
        done.cooked = true;
        let collection = vec![done, recipe("Mole")];

        let cooked = FilterCriteria {
            cooking_status: CookingStatus::Cooked,
            ..Default::default()
        };
        assert_eq!(titles(&filter_recipes(collection.clone(), &cooked)), ["Gyudon"]);

        let want = FilterCriteria {
            cooking_status: CookingStatus::WantToTry,
            ..Default::default()
        };
        assert_eq!(titles(&filter_recipes(collection.clone(), &want)), ["Mole"]);

        let all = FilterCriteria::default();
        assert_eq!(filter_recipes(collection.clone(), &all).len(), collection.len());
    }

    #[test]
    fn criteria_conjoin_across_fields() {
        let mut cooked_italian = recipe("Lasagna");
        cooked_italian.cooked = true;
        let mut cooked_thai = recipe("Khao Soi");
        cooked_thai.cuisine = "Thai".to_string();
        cooked_thai.cooked = true;
        let collection = vec![cooked_italian, cooked_thai, recipe("Minestrone")];

        let criteria = FilterCriteria {
            cuisines: vec!["Italian".to_string()],
            cooking_status: CookingStatus::Cooked,
            ..Default::default()
        };
        assert_eq!(titles(&filter_recipes(collection, &criteria)), ["Lasagna"]);
    }

    #[test]
    fn unsatisfiable_criteria_yield_an_empty_result() {
        let collection = vec![recipe("Paella"), recipe("Pho")];
        let criteria = FilterCriteria {
            cuisines: vec!["Martian".to_string()],
            ..Default::default()
        };
        assert!(filter_recipes(collection, &criteria).is_empty());
    }

    #[test]
    fn empty_collection_is_fine() {
        let criteria = FilterCriteria {
            search_query: "anything".to_string(),
            ..Default::default()
        };
        assert!(filter_recipes(Vec::new(), &criteria).is_empty());
    }

    #[test]
    fn filtering_preserves_order_and_is_idempotent() {
        let mut first = recipe("Arepas");
        first.cook_time = 10;
        let mut second = recipe("Bibimbap");
        second.cook_time = 45;
        let mut third = recipe("Ceviche");
        third.cook_time = 5;
        let collection = vec![first, second, third];

        let criteria = FilterCriteria {
            max_cook_time: Some(15),
            ..Default::default()
        };
        let once = filter_recipes(collection, &criteria);
        assert_eq!(titles(&once), ["Arepas", "Ceviche"]);

        let twice = filter_recipes(once.clone(), &criteria);
        assert_eq!(twice, once);
    }
}
