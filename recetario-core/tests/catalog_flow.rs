//! End-to-end exercise of the crate's public surface: import a blob into a
//! draft, touch it up with form operations, validate, normalize into a
//! payload, then browse the resulting collection with filters and facets.

use chrono::{Duration, Utc};
use recetario_core::{
    distinct_cuisines, filter_recipes, import_draft, ranked_ingredients, CookingStatus,
    Difficulty, FilterCriteria, Recipe, RecipePayload, VideoPlatform,
};
use uuid::Uuid;

const IMPORTED_BLOB: &str = r#"{
    "title": "Thai Basil Chicken",
    "description": "Fifteen-minute stir fry over jasmine rice",
    "cuisine": "Thai",
    "difficulty": "Easy",
    "cookTime": 15,
    "prepTime": 10,
    "servings": 2,
    "ingredients": ["chicken breast", "thai basil", "garlic", ""],
    "instructions": ["Smash the garlic", "Stir fry on high heat"],
    "image": "/images/thai-basil-chicken.jpg",
    "tags": ["Quick", "Spicy"],
    "videoSource": {"create": {"platform": "YouTube", "url": "https://youtu.be/basil"}}
}"#;

/// What the store does at create time: assigns id/created_at, starts uncooked.
fn stored(payload: RecipePayload, minutes_ago: i64, cooked: bool) -> Recipe {
    Recipe {
        id: Uuid::new_v4(),
        title: payload.title,
        description: payload.description,
        cuisine: payload.cuisine,
        difficulty: payload.difficulty,
        cook_time: payload.cook_time,
        prep_time: payload.prep_time,
        servings: payload.servings,
        ingredients: payload.ingredients,
        instructions: payload.instructions,
        image: payload.image,
        tags: payload.tags,
        cooked,
        created_at: Utc::now() - Duration::minutes(minutes_ago),
        video_source: payload.video_source,
    }
}

fn catalog() -> Vec<Recipe> {
    let mut imported = import_draft(IMPORTED_BLOB).unwrap();
    imported.ingredients.push("fish sauce");
    imported.validate().unwrap();

    let mut pizza = import_draft(
        r#"{
            "title": "Margherita Pizza",
            "description": "Wood-fired classic with fresh mozzarella",
            "cuisine": "Italian",
            "difficulty": "Medium",
            "cookTime": 20,
            "prepTime": 90,
            "servings": 4,
            "ingredients": ["pizza dough", "mozzarella", "basil", "garlic"],
            "instructions": ["Stretch the dough", "Bake at full heat"],
            "image": "/images/margherita.jpg",
            "tags": ["Vegetarian"]
        }"#,
    )
    .unwrap();
    pizza.validate().unwrap();

    let mut stew = import_draft(
        r#"{
            "title": "Lentil Stew",
            "description": "Slow-simmered and deeply savory",
            "cuisine": "italian-fusion",
            "difficulty": "Hard",
            "cookTime": 60,
            "prepTime": 15,
            "servings": 6,
            "ingredients": ["lentils", "garlic", "carrots"],
            "instructions": ["Simmer until tender"],
            "image": "/images/lentil-stew.jpg",
            "tags": ["Vegetarian", "Vegan"]
        }"#,
    )
    .unwrap();
    stew.validate().unwrap();

    // Newest first, the way the store returns the collection.
    vec![
        stored(imported.into_payload(), 5, true),
        stored(pizza.into_payload(), 60, false),
        stored(stew.into_payload(), 600, false),
    ]
}

fn titles(recipes: &[Recipe]) -> Vec<&str> {
    recipes.iter().map(|r| r.title.as_str()).collect()
}

#[test]
fn imported_draft_survives_the_whole_flow() {
    let collection = catalog();
    let thai = &collection[0];

    // The blank entry was normalized away; the appended one kept.
    assert_eq!(
        thai.ingredients,
        ["chicken breast", "thai basil", "garlic", "fish sauce"]
    );
    let video = thai.video_source.as_ref().unwrap();
    assert_eq!(video.platform, VideoPlatform::YouTube);
    assert_eq!(video.url, "https://youtu.be/basil");
}

#[test]
fn browsing_composes_filters_over_the_collection() {
    let collection = catalog();

    let identity = filter_recipes(collection.clone(), &FilterCriteria::default());
    assert_eq!(titles(&identity), titles(&collection));

    let quick_uncooked = FilterCriteria {
        max_cook_time: Some(20),
        cooking_status: CookingStatus::WantToTry,
        ..Default::default()
    };
    assert_eq!(
        titles(&filter_recipes(collection.clone(), &quick_uncooked)),
        ["Margherita Pizza"]
    );

    let garlic_vegetarian = FilterCriteria {
        ingredients: vec!["garlic".to_string()],
        dietary_restrictions: vec!["vegetarian".to_string()],
        ..Default::default()
    };
    assert_eq!(
        titles(&filter_recipes(collection.clone(), &garlic_vegetarian)),
        ["Margherita Pizza", "Lentil Stew"]
    );

    let hard_and_easy = FilterCriteria {
        difficulties: vec![Difficulty::Easy, Difficulty::Hard],
        ..Default::default()
    };
    assert_eq!(
        titles(&filter_recipes(collection, &hard_and_easy)),
        ["Thai Basil Chicken", "Lentil Stew"]
    );
}

#[test]
fn facets_describe_the_full_collection() {
    let collection = catalog();

    assert_eq!(
        distinct_cuisines(&collection),
        ["Italian", "italian-fusion", "Thai"]
    );

    // garlic appears in all three recipes; everything else once, in
    // first-encountered order.
    let ranked = ranked_ingredients(&collection);
    assert_eq!(ranked[0], "garlic");
    assert_eq!(
        ranked[1..4],
        ["chicken breast".to_string(), "thai basil".to_string(), "fish sauce".to_string()]
    );
}

#[test]
fn facets_ignore_any_active_filtering() {
    let collection = catalog();
    let filtered = filter_recipes(
        collection.clone(),
        &FilterCriteria {
            cuisines: vec!["Thai".to_string()],
            ..Default::default()
        },
    );
    assert_eq!(filtered.len(), 1);

    // Pickers are fed the full collection, not the filtered one.
    assert_eq!(distinct_cuisines(&collection).len(), 3);
}
