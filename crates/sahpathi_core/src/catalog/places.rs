//! Nearby points of interest.

use crate::model::place::{Place, PlaceCategory, PlaceIcon};

const fn place(
    id: u32,
    name: &'static str,
    category: PlaceCategory,
    description: &'static str,
    distance: &'static str,
    wheelchair_accessible: bool,
    rating: f32,
    icon: PlaceIcon,
) -> Place {
    Place {
        id,
        name,
        category,
        description,
        distance,
        wheelchair_accessible,
        rating,
        icon,
    }
}

static PLACES: [Place; 12] = [
    place(
        1,
        "Sabarmati Riverfront",
        PlaceCategory::Park,
        "Beautiful riverside promenade with gardens and open spaces. Perfect for morning walks and evening relaxation.",
        "2.5 km",
        true,
        4.5,
        PlaceIcon::Water,
    ),
    place(
        2,
        "Kankaria Lake",
        PlaceCategory::Lake,
        "Historic lake with walking path, children's park, and boat rides. Great for family outings.",
        "3.8 km",
        true,
        4.6,
        PlaceIcon::Water,
    ),
    place(
        3,
        "Law Garden",
        PlaceCategory::Park,
        "Popular garden with food stalls and handicraft market in evenings. Peaceful during day.",
        "1.5 km",
        true,
        4.3,
        PlaceIcon::Tree,
    ),
    place(
        4,
        "Calico Museum",
        PlaceCategory::Museum,
        "Renowned textile museum showcasing Indian fabrics. Educational and culturally enriching.",
        "4.2 km",
        false,
        4.7,
        PlaceIcon::University,
    ),
    place(
        5,
        "Gujarat Science City",
        PlaceCategory::Museum,
        "Interactive science museum with planetarium and exhibitions. Great for students!",
        "8.5 km",
        true,
        4.8,
        PlaceIcon::University,
    ),
    place(
        6,
        "Vastrapur Lake",
        PlaceCategory::Lake,
        "Serene lake with walking track and garden. Popular spot for morning exercise.",
        "5.1 km",
        true,
        4.4,
        PlaceIcon::Water,
    ),
    place(
        7,
        "Parimal Garden",
        PlaceCategory::Park,
        "Well-maintained garden with play area. Ideal for families and morning walks.",
        "2.8 km",
        true,
        4.2,
        PlaceIcon::Tree,
    ),
    place(
        8,
        "Shreyas Folk Museum",
        PlaceCategory::Museum,
        "Cultural museum displaying traditional Gujarati arts and crafts.",
        "6.3 km",
        false,
        4.5,
        PlaceIcon::University,
    ),
    place(
        9,
        "Victoria Garden",
        PlaceCategory::Park,
        "Historic garden with lush greenery. Peaceful retreat in the city.",
        "3.2 km",
        true,
        4.1,
        PlaceIcon::Tree,
    ),
    place(
        10,
        "Café Coffee Day - CG Road",
        PlaceCategory::Cafe,
        "Popular café for students. Good for study sessions and group meetings.",
        "1.8 km",
        true,
        4.0,
        PlaceIcon::Coffee,
    ),
    place(
        11,
        "LD Institute Library",
        PlaceCategory::Library,
        "Extensive collection of books and quiet study spaces.",
        "3.5 km",
        true,
        4.4,
        PlaceIcon::Book,
    ),
    place(
        12,
        "Manek Chowk",
        PlaceCategory::Restaurant,
        "Famous food market with variety of Gujarati street food. Open late night.",
        "4.0 km",
        false,
        4.6,
        PlaceIcon::Utensils,
    ),
];

/// Full catalogue in display order.
pub fn nearby_places() -> &'static [Place] {
    &PLACES
}
