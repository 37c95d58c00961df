//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `sahpathi_core` linkage without the Flutter host.
//! - Print a short overview of the built-in catalogues and an ephemeral session.

use sahpathi_core::catalog::holidays::regional_holidays;
use sahpathi_core::catalog::places::nearby_places;
use sahpathi_core::view::places::{CategoryFilter, PlaceFilter};
use sahpathi_core::{AppContext, CalendarService, ChatService, MemoryKeyValueStore};

fn main() {
    println!("sahpathi_core ping={}", sahpathi_core::ping());
    println!("sahpathi_core version={}", sahpathi_core::core_version());

    let ctx = AppContext::default();
    let store = MemoryKeyValueStore::new();

    let calendar = CalendarService::hydrate(&store, ctx.today());
    println!(
        "calendar seeded_events={} upcoming={}",
        calendar.events().len(),
        calendar.upcoming(ctx.today()).len()
    );

    let accessible = PlaceFilter {
        category: CategoryFilter::All,
        accessible_only: true,
    };
    println!(
        "places total={} accessible={}",
        nearby_places().len(),
        sahpathi_core::view::places::filter_places(nearby_places(), &accessible).len()
    );

    let chat = ChatService::hydrate(&ctx, &store);
    println!(
        "chat greeting_shown={} holidays_known={}",
        chat.messages().len(),
        regional_holidays().len()
    );
}
