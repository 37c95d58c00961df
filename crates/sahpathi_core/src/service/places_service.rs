//! Nearby accessible places browser.
//!
//! Read-only over the static catalogue; only the filter state changes.

use crate::catalog::places::nearby_places;
use crate::context::AppContext;
use crate::model::place::Place;
use crate::view::places::{filter_places, CategoryFilter, PlaceFilter};
use log::debug;

const MODULE: &str = "places";

#[derive(Debug, Default)]
pub struct PlacesService {
    filter: PlaceFilter,
}

impl PlacesService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> PlaceFilter {
        self.filter
    }

    /// Places passing the current filter, in catalogue order.
    pub fn visible(&self) -> Vec<&'static Place> {
        filter_places(nearby_places(), &self.filter)
    }

    pub fn select_category(&mut self, ctx: &AppContext, category: CategoryFilter) {
        self.filter.category = category;
        debug!(
            "event=places_filter module={MODULE} status=ok category={} visible={}",
            category.label(),
            self.visible().len()
        );
        ctx.announce(&format!("Showing {}", category.label()));
    }

    /// Flips the wheelchair-accessible filter and returns its new state.
    pub fn toggle_accessible_only(&mut self, ctx: &AppContext) -> bool {
        self.filter.accessible_only = !self.filter.accessible_only;
        debug!(
            "event=places_filter module={MODULE} status=ok accessible_only={}",
            self.filter.accessible_only
        );
        ctx.announce(if self.filter.accessible_only {
            "Showing wheelchair accessible places only"
        } else {
            "Showing all places"
        });
        self.filter.accessible_only
    }

    /// Announces one place card, e.g. on focus.
    pub fn describe(&self, ctx: &AppContext, place: &Place) {
        let access = if place.wheelchair_accessible {
            "Wheelchair accessible"
        } else {
            "Not wheelchair accessible"
        };
        ctx.announce(&format!(
            "{}. {}. {} away. {access}",
            place.name, place.description, place.distance
        ));
    }
}
