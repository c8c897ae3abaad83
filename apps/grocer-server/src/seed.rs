//! Demo data for local development.
//!
//! Fixture slices reference each other by index (`product: 2` is the third product)
//! and are written through the module services in dependency order.

use anyhow::{Context, Result};
use catalog::domain::models::{
    BundleItem, NewBundle, NewCategory, NewInventory, NewProduct, NewProductCategory, NewVendor,
};
use nutrition::MealSlot;
use nutrition::domain::models::{MealPlanItem, NewMealPlan, NewRecipe, RecipeItem};
use time::{Date, Duration, OffsetDateTime};
use tracing::info;

use crate::server::Modules;

struct VendorFixture {
    name: &'static str,
    email: &'static str,
}

struct ProductFixture {
    vendor: usize,
    name: &'static str,
    sku: &'static str,
    price: f64,
    unit: &'static str,
}

struct RecipeFixture {
    name: &'static str,
    instructions: &'static str,
    calories: i32,
    /// (product index, amount, unit)
    items: &'static [(usize, f64, &'static str)],
}

const VENDORS: &[VendorFixture] = &[
    VendorFixture {
        name: "Green Valley Farm",
        email: "orders@greenvalley.example",
    },
    VendorFixture {
        name: "Harbor Fish Market",
        email: "sales@harborfish.example",
    },
    VendorFixture {
        name: "Mill Street Bakery",
        email: "hello@millstreet.example",
    },
];

const CATEGORIES: &[(&str, &str)] = &[
    ("Produce", "Fresh fruit and vegetables"),
    ("Seafood", "Fish and shellfish"),
    ("Bakery", "Bread and grains"),
    ("Dairy", "Milk, cheese and eggs"),
];

const PRODUCTS: &[ProductFixture] = &[
    ProductFixture {
        vendor: 0,
        name: "Spinach",
        sku: "GV-SPIN-250",
        price: 2.49,
        unit: "bag",
    },
    ProductFixture {
        vendor: 0,
        name: "Cherry Tomatoes",
        sku: "GV-TOM-500",
        price: 3.19,
        unit: "box",
    },
    ProductFixture {
        vendor: 0,
        name: "Free Range Eggs",
        sku: "GV-EGG-12",
        price: 4.5,
        unit: "dozen",
    },
    ProductFixture {
        vendor: 1,
        name: "Salmon Fillet",
        sku: "HF-SAL-300",
        price: 9.99,
        unit: "piece",
    },
    ProductFixture {
        vendor: 2,
        name: "Sourdough Loaf",
        sku: "MS-SOUR-1",
        price: 5.25,
        unit: "loaf",
    },
    ProductFixture {
        vendor: 2,
        name: "Rolled Oats",
        sku: "MS-OAT-1K",
        price: 3.75,
        unit: "kg",
    },
];

/// (product index, category index)
const PRODUCT_CATEGORIES: &[(usize, usize)] = &[(0, 0), (1, 0), (2, 3), (3, 1), (4, 2), (5, 2)];

/// (product index, quantity, restock threshold)
const INVENTORIES: &[(usize, i32, i32)] = &[
    (0, 40, 10),
    (1, 25, 10),
    (2, 60, 12),
    (3, 15, 5),
    (4, 20, 6),
    (5, 80, 20),
];

const RECIPES: &[RecipeFixture] = &[
    RecipeFixture {
        name: "Overnight Oats",
        instructions: "Soak oats overnight and serve cold.",
        calories: 350,
        items: &[(5, 80.0, "g")],
    },
    RecipeFixture {
        name: "Spinach Omelette",
        instructions: "Whisk eggs, wilt spinach, fold together.",
        calories: 420,
        items: &[(2, 3.0, "piece"), (0, 60.0, "g")],
    },
    RecipeFixture {
        name: "Salmon with Tomatoes",
        instructions: "Roast salmon and tomatoes for 15 minutes.",
        calories: 610,
        items: &[(3, 1.0, "piece"), (1, 150.0, "g")],
    },
];

/// (day, slot, recipe index)
const MEAL_PLAN: &[(i32, MealSlot, usize)] = &[
    (0, MealSlot::Breakfast, 0),
    (0, MealSlot::Lunch, 1),
    (0, MealSlot::Dinner, 2),
    (1, MealSlot::Breakfast, 0),
    (1, MealSlot::Dinner, 2),
];

/// (name, price, [(product index, quantity)])
const BUNDLES: &[(&str, f64, &[(usize, i32)])] = &[
    ("Breakfast Box", 11.5, &[(2, 1), (4, 1), (5, 1)]),
    ("Fish Night", 14.0, &[(3, 2), (1, 1)]),
];

fn monday_of(date: Date) -> Date {
    date - Duration::days(i64::from(date.weekday().number_days_from_monday()))
}

/// Write every fixture. An already seeded database is left untouched.
pub async fn seed(modules: &Modules) -> Result<()> {
    let catalog = modules.catalog.services();
    if !catalog.vendors.list().await?.is_empty() {
        info!("vendors already present, skipping seed");
        return Ok(());
    }

    let mut vendor_ids = Vec::with_capacity(VENDORS.len());
    for v in VENDORS {
        let vendor = catalog
            .vendors
            .create(NewVendor {
                id: None,
                name: v.name.to_owned(),
                email: Some(v.email.to_owned()),
                phone: None,
                is_active: true,
            })
            .await
            .with_context(|| format!("seeding vendor {}", v.name))?;
        vendor_ids.push(vendor.id);
    }

    let mut category_ids = Vec::with_capacity(CATEGORIES.len());
    for (name, description) in CATEGORIES {
        let category = catalog
            .categories
            .create(NewCategory {
                id: None,
                name: (*name).to_owned(),
                description: Some((*description).to_owned()),
            })
            .await
            .with_context(|| format!("seeding category {name}"))?;
        category_ids.push(category.id);
    }

    let mut product_ids = Vec::with_capacity(PRODUCTS.len());
    for p in PRODUCTS {
        let view = catalog
            .products
            .create(
                NewProduct {
                    id: None,
                    vendor_id: vendor_ids[p.vendor],
                    name: p.name.to_owned(),
                    sku: p.sku.to_owned(),
                    price: p.price,
                    description: None,
                    unit: p.unit.to_owned(),
                    is_active: true,
                    category_ids: Vec::new(),
                },
                None,
            )
            .await
            .with_context(|| format!("seeding product {}", p.sku))?;
        product_ids.push(view.product.id);
    }

    for &(product, category) in PRODUCT_CATEGORIES {
        catalog
            .product_categories
            .create(NewProductCategory {
                id: None,
                product_id: product_ids[product],
                category_id: category_ids[category],
            })
            .await
            .context("seeding product category")?;
    }

    for &(product, quantity, restock_threshold) in INVENTORIES {
        catalog
            .inventories
            .create(NewInventory {
                id: None,
                product_id: product_ids[product],
                vendor_id: vendor_ids[PRODUCTS[product].vendor],
                quantity,
                restock_threshold,
            })
            .await
            .context("seeding inventory")?;
    }

    let recipes = modules.nutrition.recipes();
    let mut recipe_ids = Vec::with_capacity(RECIPES.len());
    for r in RECIPES {
        let recipe = recipes
            .create(NewRecipe {
                id: None,
                name: r.name.to_owned(),
                instructions: r.instructions.to_owned(),
                calories: r.calories,
                items: r
                    .items
                    .iter()
                    .map(|&(product, amount, unit)| RecipeItem {
                        product_id: product_ids[product],
                        amount,
                        unit: unit.to_owned(),
                    })
                    .collect(),
            })
            .await
            .with_context(|| format!("seeding recipe {}", r.name))?;
        recipe_ids.push(recipe.id);
    }

    let user = modules
        .accounts
        .users()
        .create(accounts::domain::models::NewUser {
            id: None,
            email: "demo@grocer.example".to_owned(),
            name: "Demo Shopper".to_owned(),
            password: "demo-password".to_owned(),
            gender: Some("female".to_owned()),
            age: Some(34),
            height_cm: Some(168.0),
            weight_kg: Some(64.0),
            goal: Some("maintain weight".to_owned()),
        })
        .await
        .context("seeding demo user")?;

    modules
        .nutrition
        .meal_plans()
        .create(NewMealPlan {
            id: None,
            user_id: user.id,
            week_start: monday_of(OffsetDateTime::now_utc().date()),
            items: MEAL_PLAN
                .iter()
                .map(|&(day, slot, recipe)| MealPlanItem {
                    day,
                    slot,
                    recipe_id: recipe_ids[recipe],
                })
                .collect(),
        })
        .await
        .context("seeding meal plan")?;

    for &(name, price, items) in BUNDLES {
        catalog
            .bundles
            .create(NewBundle {
                id: None,
                name: name.to_owned(),
                description: None,
                price,
                is_active: true,
                items: items
                    .iter()
                    .map(|&(product, quantity)| BundleItem {
                        product_id: product_ids[product],
                        quantity,
                    })
                    .collect(),
            })
            .await
            .with_context(|| format!("seeding bundle {name}"))?;
    }

    info!(
        vendors = vendor_ids.len(),
        products = product_ids.len(),
        recipes = recipe_ids.len(),
        user_id = %user.id,
        "seed complete"
    );
    Ok(())
}
