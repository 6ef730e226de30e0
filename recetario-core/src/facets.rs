//! Facet extraction for the filter pickers: which cuisines exist, which
//! ingredients come up most. Both run over the full collection, never the
//! filtered subset, so picking a filter doesn't shrink the pickers.

use std::collections::HashMap;

use crate::types::Recipe;

/// Distinct cuisines, ordered case-insensitively with an exact tiebreak.
/// Values that differ only in case stay distinct entries.
pub fn distinct_cuisines(recipes: &[Recipe]) -> Vec<String> {
    let mut cuisines: Vec<String> = Vec::new();
    for recipe in recipes {
        if !cuisines.contains(&recipe.cuisine) {
            cuisines.push(recipe.cuisine.clone());
        }
    }
    cuisines.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    cuisines
}

/// Every ingredient string seen across the collection, most frequent first.
/// Ties keep first-encountered order; matching is exact, not normalized, so
/// "egg" and "eggs" rank separately.
pub fn ranked_ingredients(recipes: &[Recipe]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for ingredient in recipes.iter().flat_map(|r| r.ingredients.iter()) {
        let count = counts.entry(ingredient.as_str()).or_insert(0);
        if *count == 0 {
            order.push(ingredient.as_str());
        }
        *count += 1;
    }
    // Stable sort on the count alone keeps first-encountered order for ties.
    order.sort_by_key(|ingredient| std::cmp::Reverse(counts[*ingredient]));
    order.into_iter().map(str::to_string).collect()
}
