//! Impostor Word bank
//!
//! Word pairs are grouped by category. The majority is dealt the safe word
//! and impostors a related but different one.

use derive_more::Display;
use enum_map::Enum;
use serde::{Deserialize, Serialize};

/// Category a word pair belongs to, or the full bank
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Enum, Serialize, Deserialize,
)]
pub enum Category {
    /// Every pair in the bank
    #[default]
    #[display("Random Mix")]
    RandomMix,
    /// Dishes and ingredients
    Food,
    /// Locations and buildings
    Places,
    /// Creatures
    Animals,
    /// Hobbies and sports
    Activities,
    /// Everyday things
    Objects,
    /// Occupations
    Jobs,
    /// Landscapes and weather
    Nature,
}

impl Category {
    /// Every category in display order
    pub const ALL: [Category; 8] = [
        Category::RandomMix,
        Category::Food,
        Category::Places,
        Category::Animals,
        Category::Activities,
        Category::Objects,
        Category::Jobs,
        Category::Nature,
    ];
}

/// A safe/impostor word pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WordPair {
    /// Word dealt to everyone who is not an impostor
    pub safe: &'static str,
    /// Word dealt to impostors
    pub impostor: &'static str,
    /// Category the pair belongs to
    pub category: Category,
}

impl WordPair {
    const fn new(category: Category, safe: &'static str, impostor: &'static str) -> Self {
        Self {
            safe,
            impostor,
            category,
        }
    }

    /// The word a player with the given role is dealt
    pub fn word(&self, impostor: bool) -> &'static str {
        if impostor { self.impostor } else { self.safe }
    }
}

/// Built-in word pairs
pub static WORD_PAIRS: &[WordPair] = &[
    WordPair::new(Category::Food, "Pizza", "Burger"),
    WordPair::new(Category::Food, "Sushi", "Tacos"),
    WordPair::new(Category::Food, "Pancakes", "Waffles"),
    WordPair::new(Category::Food, "Ice Cream", "Frozen Yogurt"),
    WordPair::new(Category::Food, "Coffee", "Tea"),
    WordPair::new(Category::Places, "Beach", "Pool"),
    WordPair::new(Category::Places, "Library", "Bookstore"),
    WordPair::new(Category::Places, "Airport", "Train Station"),
    WordPair::new(Category::Places, "Hospital", "Pharmacy"),
    WordPair::new(Category::Places, "Cinema", "Theater"),
    WordPair::new(Category::Animals, "Dog", "Wolf"),
    WordPair::new(Category::Animals, "Cat", "Tiger"),
    WordPair::new(Category::Animals, "Dolphin", "Shark"),
    WordPair::new(Category::Animals, "Eagle", "Hawk"),
    WordPair::new(Category::Animals, "Horse", "Zebra"),
    WordPair::new(Category::Activities, "Swimming", "Surfing"),
    WordPair::new(Category::Activities, "Skiing", "Snowboarding"),
    WordPair::new(Category::Activities, "Chess", "Checkers"),
    WordPair::new(Category::Activities, "Yoga", "Pilates"),
    WordPair::new(Category::Activities, "Karaoke", "Dancing"),
    WordPair::new(Category::Objects, "Pillow", "Blanket"),
    WordPair::new(Category::Objects, "Laptop", "Tablet"),
    WordPair::new(Category::Objects, "Umbrella", "Raincoat"),
    WordPair::new(Category::Objects, "Guitar", "Violin"),
    WordPair::new(Category::Objects, "Candle", "Lamp"),
    WordPair::new(Category::Jobs, "Doctor", "Nurse"),
    WordPair::new(Category::Jobs, "Chef", "Baker"),
    WordPair::new(Category::Jobs, "Pilot", "Astronaut"),
    WordPair::new(Category::Jobs, "Teacher", "Professor"),
    WordPair::new(Category::Jobs, "Firefighter", "Police Officer"),
    WordPair::new(Category::Nature, "Mountain", "Hill"),
    WordPair::new(Category::Nature, "River", "Lake"),
    WordPair::new(Category::Nature, "Forest", "Jungle"),
    WordPair::new(Category::Nature, "Rain", "Snow"),
    WordPair::new(Category::Nature, "Volcano", "Geyser"),
];
