//! Typed domain model for the feedback analytics engine.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Sentinel identity for records submitted without a name.
pub const ANONYMOUS: &str = "Anonymous";

/// The closed set of rated categories. [`Category::ALL`] fixes the
/// iteration order used everywhere a tie-break depends on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Cleanliness,
    Music,
    Service,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Food,
        Category::Cleanliness,
        Category::Music,
        Category::Service,
    ];

    /// Capitalized name for messages and export headers.
    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Cleanliness => "Cleanliness",
            Category::Music => "Music",
            Category::Service => "Service",
        }
    }
}

/// Qualitative rating scale: four ordered levels scoring 1 (lowest) to 4.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rating {
    Angry,
    Neutral,
    Happy,
    Loved,
}

impl Rating {
    /// Map a wire symbol onto the scale. Total over all strings:
    /// anything outside the four known symbols is `None`.
    pub fn from_symbol(symbol: &str) -> Option<Rating> {
        match symbol {
            "😍" => Some(Rating::Loved),
            "🙂" => Some(Rating::Happy),
            "😐" => Some(Rating::Neutral),
            "😡" => Some(Rating::Angry),
            _ => None,
        }
    }

    pub fn score(self) -> u32 {
        match self {
            Rating::Angry => 1,
            Rating::Neutral => 2,
            Rating::Happy => 3,
            Rating::Loved => 4,
        }
    }
}

/// Score contributed by a raw symbol field. Absent and unrecognized both
/// count 0 and stay in the denominator of every average.
pub fn symbol_score(symbol: Option<&str>) -> u32 {
    symbol
        .and_then(Rating::from_symbol)
        .map(Rating::score)
        .unwrap_or(0)
}

/// A feedback record after ingestion. Immutable; the only mutation in the
/// surrounding system is whole-record deletion in the store, which
/// invalidates the snapshot this record belongs to.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeedbackRecord {
    pub id: String,
    /// Submitter identity, already Anonymous-coerced.
    pub submitter: String,
    /// `None` when the wire timestamp was absent or unparsable.
    pub submitted_at: Option<DateTime<Utc>>,
    pub food: Option<String>,
    pub cleanliness: Option<String>,
    pub music: Option<String>,
    pub service: Option<String>,
    pub comment: Option<String>,
}

impl FeedbackRecord {
    /// Raw rating symbol for a category, exactly as submitted.
    pub fn symbol(&self, category: Category) -> Option<&str> {
        match category {
            Category::Food => self.food.as_deref(),
            Category::Cleanliness => self.cleanliness.as_deref(),
            Category::Music => self.music.as_deref(),
            Category::Service => self.service.as_deref(),
        }
    }

    pub fn score(&self, category: Category) -> u32 {
        symbol_score(self.symbol(category))
    }
}

/// Per-category averages on the 0..=4 scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct CategoryAverages {
    pub food: f64,
    pub cleanliness: f64,
    pub music: f64,
    pub service: f64,
}

impl CategoryAverages {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Food => self.food,
            Category::Cleanliness => self.cleanliness,
            Category::Music => self.music,
            Category::Service => self.service,
        }
    }

    pub fn set(&mut self, category: Category, value: f64) {
        match category {
            Category::Food => self.food = value,
            Category::Cleanliness => self.cleanliness = value,
            Category::Music => self.music = value,
            Category::Service => self.service = value,
        }
    }

    /// Iterate in the fixed category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.iter().map(move |&category| (category, self.get(category)))
    }
}
