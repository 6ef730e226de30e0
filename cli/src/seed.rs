use anyhow::{Context, Result};
use recetario_core::{
    Difficulty, ListField, RecipeDraft, VideoPlatform, VideoSource, VideoSourceField,
};

use crate::client;

struct SeedRecipe {
    title: &'static str,
    description: &'static str,
    cuisine: &'static str,
    difficulty: Difficulty,
    cook_time: i32,
    prep_time: i32,
    servings: i32,
    ingredients: &'static [&'static str],
    instructions: &'static [&'static str],
    image: &'static str,
    tags: &'static [&'static str],
    video: Option<(VideoPlatform, &'static str)>,
}

const SAMPLE_RECIPES: &[SeedRecipe] = &[
    SeedRecipe {
        title: "Classic Margherita Pizza",
        description: "A timeless Italian classic with fresh mozzarella, San Marzano tomatoes, and fragrant basil on a perfectly crispy crust.",
        cuisine: "Italian",
        difficulty: Difficulty::Medium,
        cook_time: 25,
        prep_time: 90,
        servings: 4,
        ingredients: &[
            "pizza dough",
            "mozzarella",
            "tomatoes",
            "basil",
            "olive oil",
            "garlic",
        ],
        instructions: &[
            "Prepare the dough and let it rise for 1 hour",
            "Preheat oven to 475°F (245°C)",
            "Stretch dough into a circle",
            "Add crushed tomatoes, mozzarella, and drizzle with olive oil",
            "Bake for 12-15 minutes until crust is golden",
            "Top with fresh basil before serving",
        ],
        image: "/recipes/margherita-pizza.jpg",
        tags: &["vegetarian", "comfort food", "party"],
        video: Some((VideoPlatform::YouTube, "https://youtube.com/watch?v=example1")),
    },
    SeedRecipe {
        title: "Spicy Thai Basil Chicken",
        description: "A quick and fiery stir-fry featuring tender chicken, Thai basil, and a perfect balance of savory and spicy flavors.",
        cuisine: "Thai",
        difficulty: Difficulty::Easy,
        cook_time: 15,
        prep_time: 10,
        servings: 2,
        ingredients: &[
            "chicken breast",
            "thai basil",
            "garlic",
            "chili",
            "soy sauce",
            "fish sauce",
            "oyster sauce",
        ],
        instructions: &[
            "Mince chicken into small pieces",
            "Heat wok over high heat with oil",
            "Stir-fry garlic and chilies until fragrant",
            "Add chicken and cook until golden",
            "Add sauces and stir to combine",
            "Toss in Thai basil and serve over rice",
        ],
        image: "/recipes/thai-basil-chicken.jpg",
        tags: &["spicy", "quick meal", "protein"],
        video: Some((VideoPlatform::TikTok, "https://tiktok.com/@example/video/123")),
    },
    SeedRecipe {
        title: "Creamy Tuscan Salmon",
        description: "Pan-seared salmon in a rich, garlicky cream sauce with sun-dried tomatoes and spinach.",
        cuisine: "Italian",
        difficulty: Difficulty::Medium,
        cook_time: 20,
        prep_time: 10,
        servings: 2,
        ingredients: &[
            "salmon fillet",
            "spinach",
            "sun-dried tomatoes",
            "cream",
            "garlic",
            "parmesan",
        ],
        instructions: &[
            "Season salmon with salt and pepper",
            "Sear salmon skin-side up for 4 minutes, flip and cook 3 more",
            "Remove salmon and sauté garlic",
            "Add sun-dried tomatoes and cream",
            "Stir in spinach until wilted",
            "Return salmon to pan and serve",
        ],
        image: "/recipes/tuscan-salmon.jpg",
        tags: &["seafood", "keto", "date night"],
        video: Some((VideoPlatform::Instagram, "https://instagram.com/reel/example")),
    },
    SeedRecipe {
        title: "Japanese Beef Gyudon",
        description: "Tender sliced beef simmered in a sweet soy broth, served over steaming rice with a soft-cooked egg.",
        cuisine: "Japanese",
        difficulty: Difficulty::Easy,
        cook_time: 20,
        prep_time: 10,
        servings: 2,
        ingredients: &[
            "beef sirloin",
            "onion",
            "soy sauce",
            "mirin",
            "sake",
            "dashi",
            "egg",
            "rice",
        ],
        instructions: &[
            "Slice beef thinly against the grain",
            "Simmer sliced onions in dashi, soy sauce, mirin, and sake",
            "Add beef slices and cook until just done",
            "Serve over hot rice",
            "Top with a soft-cooked egg and pickled ginger",
        ],
        image: "/recipes/beef-gyudon.jpg",
        tags: &["comfort food", "quick meal", "protein"],
        video: Some((VideoPlatform::YouTube, "https://youtube.com/watch?v=example2")),
    },
    SeedRecipe {
        title: "Classic French Onion Soup",
        description: "Deeply caramelized onions in rich beef broth, topped with crusty bread and melted Gruyère cheese.",
        cuisine: "French",
        difficulty: Difficulty::Hard,
        cook_time: 90,
        prep_time: 20,
        servings: 4,
        ingredients: &[
            "onions",
            "beef broth",
            "butter",
            "white wine",
            "gruyère",
            "baguette",
            "thyme",
        ],
        instructions: &[
            "Slice onions thinly and caramelize in butter for 45 minutes",
            "Deglaze with white wine",
            "Add beef broth and thyme, simmer 20 minutes",
            "Ladle into oven-safe bowls",
            "Top with bread and cheese",
            "Broil until cheese is bubbly and golden",
        ],
        image: "/recipes/french-onion-soup.jpg",
        tags: &["comfort food", "winter", "vegetarian option"],
        video: Some((VideoPlatform::YouTube, "https://youtube.com/watch?v=example3")),
    },
    SeedRecipe {
        title: "Korean Bibimbap",
        description: "A colorful bowl of rice topped with seasoned vegetables, gochujang, and a perfectly fried egg.",
        cuisine: "Korean",
        difficulty: Difficulty::Medium,
        cook_time: 30,
        prep_time: 30,
        servings: 2,
        ingredients: &[
            "rice",
            "spinach",
            "carrots",
            "zucchini",
            "mushrooms",
            "bean sprouts",
            "egg",
            "gochujang",
            "sesame oil",
        ],
        instructions: &[
            "Cook rice and keep warm",
            "Blanch and season each vegetable separately",
            "Fry egg sunny-side up",
            "Arrange vegetables and egg over rice",
            "Serve with gochujang and sesame oil",
            "Mix everything together before eating",
        ],
        image: "/recipes/bibimbap.jpg",
        tags: &["healthy", "colorful", "vegetarian option"],
        video: Some((VideoPlatform::TikTok, "https://tiktok.com/@example/video/456")),
    },
    SeedRecipe {
        title: "Mexican Street Tacos",
        description: "Authentic corn tortillas loaded with seasoned carne asada, fresh cilantro, onion, and zesty lime.",
        cuisine: "Mexican",
        difficulty: Difficulty::Easy,
        cook_time: 15,
        prep_time: 20,
        servings: 4,
        ingredients: &[
            "flank steak",
            "corn tortillas",
            "cilantro",
            "onion",
            "lime",
            "cumin",
            "garlic",
        ],
        instructions: &[
            "Marinate steak with cumin, garlic, and lime juice",
            "Grill steak over high heat to medium-rare",
            "Rest and slice against the grain",
            "Warm tortillas on the grill",
            "Top with steak, onion, and cilantro",
            "Squeeze fresh lime over tacos",
        ],
        image: "/recipes/street-tacos.jpg",
        tags: &["street food", "grilling", "party"],
        video: Some((VideoPlatform::Instagram, "https://instagram.com/reel/example2")),
    },
    SeedRecipe {
        title: "Indian Butter Chicken",
        description: "Tender chicken in a velvety tomato-cream sauce with aromatic spices and a touch of sweetness.",
        cuisine: "Indian",
        difficulty: Difficulty::Medium,
        cook_time: 40,
        prep_time: 30,
        servings: 4,
        ingredients: &[
            "chicken thighs",
            "yogurt",
            "tomatoes",
            "cream",
            "butter",
            "garam masala",
            "ginger",
            "garlic",
            "kashmiri chili",
        ],
        instructions: &[
            "Marinate chicken in yogurt and spices for 2 hours",
            "Grill or pan-fry chicken until charred",
            "Make sauce with butter, tomatoes, and cream",
            "Add spices and simmer until thickened",
            "Add chicken and simmer 10 more minutes",
            "Serve with basmati rice or naan",
        ],
        image: "/recipes/butter-chicken.jpg",
        tags: &["curry", "comfort food", "crowd pleaser"],
        video: Some((VideoPlatform::YouTube, "https://youtube.com/watch?v=example4")),
    },
    SeedRecipe {
        title: "Mediterranean Falafel Bowl",
        description: "Crispy homemade falafel served over fluffy couscous with fresh vegetables, hummus, and tahini drizzle.",
        cuisine: "Mediterranean",
        difficulty: Difficulty::Medium,
        cook_time: 25,
        prep_time: 40,
        servings: 4,
        ingredients: &[
            "chickpeas",
            "parsley",
            "cilantro",
            "cumin",
            "couscous",
            "cucumber",
            "tomatoes",
            "hummus",
            "tahini",
        ],
        instructions: &[
            "Soak dried chickpeas overnight",
            "Blend with herbs and spices",
            "Form into balls and fry until golden",
            "Prepare couscous according to package",
            "Assemble bowl with all toppings",
            "Drizzle with tahini sauce",
        ],
        image: "/recipes/falafel-bowl.jpg",
        tags: &["vegan", "healthy", "meal prep"],
        video: Some((VideoPlatform::TikTok, "https://tiktok.com/@example/video/789")),
    },
    SeedRecipe {
        title: "Vietnamese Pho",
        description: "A soul-warming bowl of aromatic beef broth with rice noodles, tender beef, and fresh herbs.",
        cuisine: "Vietnamese",
        difficulty: Difficulty::Hard,
        cook_time: 180,
        prep_time: 30,
        servings: 6,
        ingredients: &[
            "beef bones",
            "rice noodles",
            "beef sirloin",
            "star anise",
            "cinnamon",
            "ginger",
            "onion",
            "bean sprouts",
            "thai basil",
            "lime",
        ],
        instructions: &[
            "Roast bones, ginger, and onion",
            "Simmer with spices for 3 hours",
            "Strain broth and season",
            "Cook rice noodles separately",
            "Slice beef paper-thin",
            "Assemble bowls and pour hot broth over beef",
        ],
        image: "/recipes/pho.jpg",
        tags: &["soup", "comfort food", "winter"],
        video: Some((VideoPlatform::YouTube, "https://youtube.com/watch?v=example5")),
    },
    SeedRecipe {
        title: "Greek Moussaka",
        description: "Layers of eggplant, spiced lamb, and creamy béchamel sauce baked to golden perfection.",
        cuisine: "Greek",
        difficulty: Difficulty::Hard,
        cook_time: 75,
        prep_time: 45,
        servings: 8,
        ingredients: &[
            "eggplant",
            "ground lamb",
            "tomatoes",
            "onion",
            "cinnamon",
            "allspice",
            "milk",
            "flour",
            "butter",
            "nutmeg",
        ],
        instructions: &[
            "Slice and salt eggplant, let drain 30 minutes",
            "Brown lamb with onions and spices",
            "Add tomatoes and simmer",
            "Fry eggplant slices until golden",
            "Make béchamel sauce",
            "Layer and bake at 350°F for 45 minutes",
        ],
        image: "/recipes/moussaka.jpg",
        tags: &["casserole", "comfort food", "make ahead"],
        video: Some((VideoPlatform::Instagram, "https://instagram.com/reel/example3")),
    },
    SeedRecipe {
        title: "Simple Avocado Toast",
        description: "Creamy mashed avocado on crispy sourdough with everything bagel seasoning and a poached egg.",
        cuisine: "American",
        difficulty: Difficulty::Easy,
        cook_time: 10,
        prep_time: 5,
        servings: 1,
        ingredients: &[
            "sourdough bread",
            "avocado",
            "egg",
            "everything bagel seasoning",
            "lemon",
            "red pepper flakes",
        ],
        instructions: &[
            "Toast sourdough until golden and crispy",
            "Mash avocado with lemon juice and salt",
            "Poach egg in simmering water",
            "Spread avocado on toast",
            "Top with poached egg",
            "Sprinkle with seasonings",
        ],
        image: "/recipes/avocado-toast.jpg",
        tags: &["breakfast", "healthy", "quick meal"],
        video: Some((VideoPlatform::TikTok, "https://tiktok.com/@example/video/101")),
    },
];

fn to_draft(seed: &SeedRecipe) -> RecipeDraft {
    let owned = |items: &[&str]| items.iter().map(|i| i.to_string()).collect::<Vec<_>>();

    RecipeDraft {
        title: seed.title.to_string(),
        description: seed.description.to_string(),
        cuisine: seed.cuisine.to_string(),
        difficulty: seed.difficulty,
        cook_time: seed.cook_time,
        prep_time: seed.prep_time,
        servings: seed.servings,
        ingredients: ListField::from(owned(seed.ingredients)),
        instructions: ListField::from(owned(seed.instructions)),
        image: seed.image.to_string(),
        tags: ListField::from(owned(seed.tags)),
        video_source: match seed.video {
            Some((platform, url)) => VideoSourceField::Present(VideoSource {
                platform,
                url: url.to_string(),
            }),
            None => VideoSourceField::Absent,
        },
    }
}

pub async fn seed(server: &str, token: &str) -> Result<()> {
    client::verify_token(server, token)
        .await
        .context("Token rejected; check --token")?;

    // Seeding twice would duplicate everything, so a non-empty catalog is
    // left alone.
    let existing = client::count_recipes(server).await?;
    if existing > 0 {
        println!("Catalog already has {} recipes, skipping seed", existing);
        return Ok(());
    }

    println!("Creating {} sample recipes...", SAMPLE_RECIPES.len());

    for recipe in SAMPLE_RECIPES {
        let draft = to_draft(recipe);
        client::create_recipe(server, token, &draft)
            .await
            .with_context(|| format!("Failed to create recipe: {}", recipe.title))?;

        println!("  Created: {}", recipe.title);
    }

    println!();
    println!("{}", "=".repeat(50));
    println!("SEED DATA COMPLETE");
    println!("{}", "=".repeat(50));
    println!("Recipes:  {}", SAMPLE_RECIPES.len());
    println!("Base URL: {}", server);
    println!("{}", "=".repeat(50));

    Ok(())
}
