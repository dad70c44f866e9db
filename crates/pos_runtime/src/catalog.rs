//! Menu categories, the built-in menu, and unit price lookup.

use std::{collections::HashMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Money;

/// Default flat unit price applied to every menu item.
pub const DEFAULT_UNIT_PRICE: Money = Money::from_cents(1_000);

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
/// Fixed set of menu groupings, declared in display order.
pub enum Category {
    #[default]
    Appetizers,
    #[serde(rename = "Main Courses")]
    MainCourses,
    Desserts,
    Beverages,
    Sides,
    Breakfast,
    Lunch,
    Dinner,
    Salads,
    Soups,
    Vegan,
    #[serde(rename = "Gluten-Free")]
    GlutenFree,
    Specials,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Category; 13] = [
        Self::Appetizers,
        Self::MainCourses,
        Self::Desserts,
        Self::Beverages,
        Self::Sides,
        Self::Breakfast,
        Self::Lunch,
        Self::Dinner,
        Self::Salads,
        Self::Soups,
        Self::Vegan,
        Self::GlutenFree,
        Self::Specials,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Appetizers => "Appetizers",
            Self::MainCourses => "Main Courses",
            Self::Desserts => "Desserts",
            Self::Beverages => "Beverages",
            Self::Sides => "Sides",
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Salads => "Salads",
            Self::Soups => "Soups",
            Self::Vegan => "Vegan",
            Self::GlutenFree => "Gluten-Free",
            Self::Specials => "Specials",
        }
    }

    /// Icon name drawn on this category's selector chip.
    pub fn icon_id(self) -> &'static str {
        match self {
            Self::Appetizers => "restaurant",
            Self::MainCourses => "fast-food",
            Self::Desserts => "ice-cream",
            Self::Beverages => "cafe",
            Self::Sides => "pizza",
            Self::Breakfast => "sunny",
            Self::Lunch => "nutrition",
            Self::Dinner => "restaurant-outline",
            Self::Salads => "leaf",
            Self::Soups => "water",
            Self::Vegan => "leaf-outline",
            Self::GlutenFree => "fitness",
            Self::Specials => "star",
        }
    }

    /// Tile background used by catalog buttons in this category.
    pub fn accent_color(self) -> &'static str {
        match self {
            Self::Appetizers => "#FFD580",
            Self::MainCourses => "#B5EAD7",
            Self::Desserts => "#FF9AA2",
            Self::Beverages => "#C7CEEA",
            Self::Specials => "#FFC8DD",
            _ => "#E2E2E2",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown menu category `{0}`")]
/// Returned when a label does not name one of the [`Category`] values.
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label() == label)
            .ok_or_else(|| UnknownCategory(label.to_string()))
    }
}

/// Read-only source of item names per category.
pub trait MenuCatalog {
    /// Item names offered in `category`, in display order.
    fn items(&self, category: Category) -> &[&str];

    /// First category (in display order) listing `item_name`.
    fn category_of(&self, item_name: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| self.items(*category).contains(&item_name))
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// The restaurant's standard menu.
pub struct BuiltinMenu;

impl MenuCatalog for BuiltinMenu {
    fn items(&self, category: Category) -> &[&str] {
        match category {
            Category::Appetizers => APPETIZERS,
            Category::MainCourses => MAIN_COURSES,
            Category::Desserts => DESSERTS,
            Category::Beverages => BEVERAGES,
            Category::Sides => SIDES,
            Category::Breakfast => BREAKFAST,
            Category::Lunch => LUNCH,
            Category::Dinner => DINNER,
            Category::Salads => SALADS,
            Category::Soups => SOUPS,
            Category::Vegan => VEGAN,
            Category::GlutenFree => GLUTEN_FREE,
            Category::Specials => SPECIALS,
        }
    }
}

/// Items surfaced as recommendations.
pub const POPULAR_ITEMS: [&str; 10] = [
    "Burger",
    "Pizza",
    "Nachos",
    "Cheesecake",
    "Coffee",
    "Chocolate Cake",
    "Chicken Wings",
    "Pancakes",
    "Caesar Salad",
    "Steak",
];

const APPETIZERS: &[&str] = &[
    "Mozzarella Sticks",
    "Nachos",
    "Chicken Wings",
    "Garlic Bread",
    "Calamari",
    "Spinach Dip",
    "Bruschetta",
    "Potato Skins",
    "Stuffed Mushrooms",
    "Spring Rolls",
    "Onion Rings",
    "Shrimp Cocktail",
    "Buffalo Wings",
    "Jalapeno Poppers",
    "Fried Pickles",
    "Hummus Platter",
    "Cheese Platter",
    "Truffle Fries",
    "Deviled Eggs",
    "Crab Cakes",
    "Crispy Calamari",
    "Chicken Satay",
    "Coconut Shrimp",
    "Artichoke Dip",
    "Edamame",
];

const MAIN_COURSES: &[&str] = &[
    "Burger",
    "Pizza",
    "Steak",
    "Pasta",
    "Fish & Chips",
    "Grilled Chicken",
    "Lasagna",
    "Chicken Parmesan",
    "Salmon",
    "Beef Wellington",
    "Lobster Tail",
    "Lamb Chops",
    "Beef Stroganoff",
    "Pork Chops",
    "Duck Confit",
    "Rib Eye Steak",
    "Chicken Alfredo",
    "Vegetable Curry",
    "Seafood Paella",
    "Beef Tacos",
    "Chicken Tikka Masala",
    "Eggplant Parmesan",
    "Mushroom Risotto",
    "Beef Tenderloin",
    "Shrimp Scampi",
];

const DESSERTS: &[&str] = &[
    "Cheesecake",
    "Ice Cream",
    "Chocolate Cake",
    "Apple Pie",
    "Tiramisu",
    "Crème Brûlée",
    "Chocolate Mousse",
    "Strawberry Shortcake",
    "Carrot Cake",
    "Panna Cotta",
    "Baklava",
    "Banana Split",
    "Bread Pudding",
    "Fruit Tart",
    "Red Velvet Cake",
    "Peach Cobbler",
    "Macarons",
    "Brownies",
    "Key Lime Pie",
    "Lemon Bars",
];

const BEVERAGES: &[&str] = &[
    "Soda",
    "Coffee",
    "Tea",
    "Lemonade",
    "Water",
    "Juice",
    "Beer",
    "Wine",
    "Espresso",
    "Cappuccino",
    "Latte",
    "Mocha",
    "Hot Chocolate",
    "Smoothie",
    "Milkshake",
    "Iced Tea",
    "Green Tea",
    "Kombucha",
    "Sparkling Water",
    "Mojito",
    "Margarita",
    "Whiskey",
    "Gin & Tonic",
    "Vodka Soda",
    "Cocktail Special",
];

const SIDES: &[&str] = &[
    "French Fries",
    "Mashed Potatoes",
    "Rice Pilaf",
    "Coleslaw",
    "Mac & Cheese",
    "Steamed Vegetables",
    "Sweet Potato Fries",
    "Onion Rings",
    "Garlic Bread",
    "Corn on the Cob",
    "Baked Beans",
    "Potato Salad",
    "Caesar Salad",
    "House Salad",
    "Quinoa",
    "Wild Rice",
    "Roasted Potatoes",
    "Creamed Spinach",
    "Brussels Sprouts",
];

const BREAKFAST: &[&str] = &[
    "Pancakes",
    "Waffles",
    "French Toast",
    "Eggs Benedict",
    "Omelette",
    "Breakfast Burrito",
    "Avocado Toast",
    "Croissant",
    "Bagel & Lox",
    "Fruit Bowl",
    "Yogurt Parfait",
    "Cinnamon Roll",
    "Breakfast Sandwich",
    "Hash Browns",
    "Breakfast Platter",
    "Steak & Eggs",
    "Huevos Rancheros",
    "Frittata",
    "Breakfast Potatoes",
    "Bacon & Eggs",
];

const LUNCH: &[&str] = &[
    "Club Sandwich",
    "Caesar Wrap",
    "Chicken Quesadilla",
    "Tuna Melt",
    "BLT",
    "Grilled Cheese",
    "Turkey Sandwich",
    "Veggie Wrap",
    "Quiche",
    "Gyro",
    "Panini",
    "Falafel Wrap",
    "Cobb Salad",
    "Soup & Sandwich",
    "Chicken Salad",
    "Buffalo Chicken Wrap",
    "Reuben Sandwich",
    "Fish Tacos",
    "Beef Burrito",
    "Poke Bowl",
];

const DINNER: &[&str] = &[
    "Prime Rib",
    "Roasted Chicken",
    "Filet Mignon",
    "Surf & Turf",
    "Sea Bass",
    "Rack of Lamb",
    "Pork Tenderloin",
    "Osso Buco",
    "Beef Bourguignon",
    "Stuffed Peppers",
    "Beef Short Ribs",
    "Chicken Marsala",
    "Grilled Swordfish",
    "Veal Parmesan",
    "Ribeye Steak",
    "Lamb Ragu",
    "Duck Breast",
    "Seafood Linguine",
    "Baked Ziti",
    "Shepherd's Pie",
];

const SALADS: &[&str] = &[
    "Caesar Salad",
    "Greek Salad",
    "Cobb Salad",
    "House Salad",
    "Spinach Salad",
    "Caprese Salad",
    "Waldorf Salad",
    "Asian Chicken Salad",
    "Tuna Niçoise",
    "Kale Salad",
    "Quinoa Salad",
    "Pasta Salad",
    "Fruit Salad",
    "Wedge Salad",
    "Arugula Salad",
    "Southwest Salad",
    "Chopped Salad",
    "Beet Salad",
    "Chicken Caesar",
    "Steak Salad",
];

const SOUPS: &[&str] = &[
    "Tomato Soup",
    "Chicken Noodle",
    "French Onion",
    "Clam Chowder",
    "Minestrone",
    "Lentil Soup",
    "Potato Leek",
    "Butternut Squash",
    "Beef Stew",
    "Gazpacho",
    "Split Pea",
    "Miso Soup",
    "Chili",
    "Lobster Bisque",
    "Corn Chowder",
    "Mushroom Soup",
    "Broccoli Cheddar",
    "Tortilla Soup",
    "Pho",
    "Ramen",
];

const VEGAN: &[&str] = &[
    "Beyond Burger",
    "Impossible Meatballs",
    "Vegan Pizza",
    "Tofu Stir-Fry",
    "Falafel Plate",
    "Vegan Curry",
    "Cauliflower Steak",
    "Veggie Pad Thai",
    "Mushroom Risotto",
    "Jackfruit Tacos",
    "Seitan Wings",
    "Buddha Bowl",
    "Vegan Lasagna",
    "Tempeh Sandwich",
    "Vegan Mac & Cheese",
    "Stuffed Bell Peppers",
    "Zucchini Noodles",
    "Eggplant Rollatini",
    "Chickpea Burger",
    "Acai Bowl",
];

const GLUTEN_FREE: &[&str] = &[
    "Grilled Salmon",
    "Steak & Vegetables",
    "Stuffed Portobello",
    "Rice Bowl",
    "Quinoa Salad",
    "Grilled Chicken",
    "Shrimp Skewers",
    "Zoodles",
    "Stuffed Peppers",
    "Poke Bowl",
    "GF Pizza",
    "Açaí Bowl",
    "Cobb Salad",
    "Risotto",
    "Lettuce Wraps",
    "GF Pasta",
    "Roasted Vegetables",
    "Sushi Rolls",
    "Taco Salad",
    "Baked Potato",
];

const SPECIALS: &[&str] = &[
    "Daily Special",
    "Chef's Choice",
    "Seasonal Item",
    "Thanksgiving Dinner",
    "Valentine's Special",
    "Weekend Brunch",
    "Holiday Feast",
    "Seasonal Catch",
    "Harvest Special",
    "Summer BBQ",
    "Winter Comfort Food",
    "Spring Vegetable Plate",
    "Autumn Harvest",
    "Anniversary Dinner",
    "Local Farm Special",
    "Fusion Special",
    "International Dish",
    "Sous Vide Feature",
    "Smoked Meat Special",
    "Seafood Platter",
];

/// Unit price lookup used when a new order line is created.
///
/// Implemented by [`FlatPrice`], [`PriceTable`], and any `Fn(&str, Category) -> Money`, so the
/// ledger accepts a constant or a lookup without changing.
pub trait PriceBook {
    fn unit_price(&self, item_name: &str, category: Category) -> Money;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Same price for every item.
pub struct FlatPrice(pub Money);

impl Default for FlatPrice {
    fn default() -> Self {
        Self(DEFAULT_UNIT_PRICE)
    }
}

impl PriceBook for FlatPrice {
    fn unit_price(&self, _item_name: &str, _category: Category) -> Money {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Per-item prices with a fallback for unlisted names.
pub struct PriceTable {
    prices: HashMap<String, Money>,
    fallback: Money,
}

impl PriceTable {
    pub fn new(fallback: Money) -> Self {
        Self {
            prices: HashMap::new(),
            fallback,
        }
    }

    pub fn with_price(mut self, item_name: impl Into<String>, price: Money) -> Self {
        self.prices.insert(item_name.into(), price);
        self
    }

    pub fn set_price(&mut self, item_name: impl Into<String>, price: Money) {
        self.prices.insert(item_name.into(), price);
    }
}

impl PriceBook for PriceTable {
    fn unit_price(&self, item_name: &str, _category: Category) -> Money {
        self.prices.get(item_name).copied().unwrap_or(self.fallback)
    }
}

impl<F> PriceBook for F
where
    F: Fn(&str, Category) -> Money,
{
    fn unit_price(&self, item_name: &str, category: Category) -> Money {
        self(item_name, category)
    }
}
