//! Static points of interest.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategory {
    Park,
    Lake,
    Museum,
    Cafe,
    Library,
    Restaurant,
}

impl PlaceCategory {
    pub const ALL: [PlaceCategory; 6] = [
        Self::Park,
        Self::Lake,
        Self::Museum,
        Self::Cafe,
        Self::Library,
        Self::Restaurant,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Park => "park",
            Self::Lake => "lake",
            Self::Museum => "museum",
            Self::Cafe => "cafe",
            Self::Library => "library",
            Self::Restaurant => "restaurant",
        }
    }

    /// Plural label used in filter chips and narration.
    pub fn label(self) -> &'static str {
        match self {
            Self::Park => "Parks",
            Self::Lake => "Lakes",
            Self::Museum => "Museums",
            Self::Cafe => "Cafés",
            Self::Library => "Libraries",
            Self::Restaurant => "Restaurants",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value.trim())
    }
}

/// Icon reference resolved by the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceIcon {
    Water,
    Tree,
    University,
    Coffee,
    Book,
    Utensils,
}

impl PlaceIcon {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Tree => "tree",
            Self::University => "university",
            Self::Coffee => "coffee",
            Self::Book => "book",
            Self::Utensils => "utensils",
        }
    }
}

/// Catalogue entry. Never persisted or mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: u32,
    pub name: &'static str,
    pub category: PlaceCategory,
    pub description: &'static str,
    pub distance: &'static str,
    pub wheelchair_accessible: bool,
    pub rating: f32,
    pub icon: PlaceIcon,
}
