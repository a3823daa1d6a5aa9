use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Fixed classification of a point of interest
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Bins,
    Toilets,
    Feeding,
    Food,
    Rest,
    Streetlights,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category '{0}'")]
pub struct CategoryParseError(pub String);

impl Category {
    /// Every category, in filter-pill display order
    pub const ALL: [Category; 6] = [
        Category::Bins,
        Category::Toilets,
        Category::Feeding,
        Category::Food,
        Category::Rest,
        Category::Streetlights,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Category::Bins => "bins",
            Category::Toilets => "toilets",
            Category::Feeding => "feeding",
            Category::Food => "food",
            Category::Rest => "rest",
            Category::Streetlights => "streetlights",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Bins => "Bins",
            Category::Toilets => "Toilets",
            Category::Feeding => "Feeding Spots",
            Category::Food => "Food Stalls",
            Category::Rest => "Rest Areas",
            Category::Streetlights => "Streetlights",
        }
    }

    /// Marker color as a hex string
    pub fn color(&self) -> &'static str {
        match self {
            Category::Bins => "#10B981",
            Category::Toilets => "#3B82F6",
            Category::Feeding => "#F59E0B",
            Category::Food => "#EF4444",
            Category::Rest => "#8B5CF6",
            Category::Streetlights => "#06B6D4",
        }
    }

    /// Legacy free-text type names that map onto this category
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Category::Bins => &["Bin", "Waste Bin"],
            Category::Toilets => &["Toilet", "Restroom"],
            Category::Feeding => &["Pet Area"],
            Category::Food => &["Food Stall", "Dining"],
            Category::Rest => &["Rest Area"],
            Category::Streetlights => &["Streetlight"],
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Bins => "🗑️",
            Category::Toilets => "🚻",
            Category::Feeding => "🐕",
            Category::Food => "🍽️",
            Category::Rest => "🪑",
            Category::Streetlights => "💡",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Accepts the slug, the display label or a legacy alias, case-insensitively
impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| {
                c.slug().eq_ignore_ascii_case(needle)
                    || c.label().eq_ignore_ascii_case(needle)
                    || c.aliases().iter().any(|a| a.eq_ignore_ascii_case(needle))
            })
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}
