//! Nearby-place filters.

use crate::model::place::{Place, PlaceCategory};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(PlaceCategory),
}

impl CategoryFilter {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "all" | "" => Some(Self::All),
            other => PlaceCategory::parse(other).map(Self::Only),
        }
    }

    /// Label announced when the filter is selected.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Places",
            Self::Only(category) => category.label(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaceFilter {
    pub category: CategoryFilter,
    pub accessible_only: bool,
}

/// Catalogue entries passing both filters, in catalogue order.
pub fn filter_places<'a>(places: &'a [Place], filter: &PlaceFilter) -> Vec<&'a Place> {
    places
        .iter()
        .filter(|place| match filter.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => place.category == category,
        })
        .filter(|place| !filter.accessible_only || place.wheelchair_accessible)
        .collect()
}
