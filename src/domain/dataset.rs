//! The fixed listing catalog bundled with the application.

use super::models::{Coordinates, Restaurant};

/// Energy available at the start of a session.
pub const STARTING_ENERGY: u32 = 15;

#[allow(clippy::too_many_arguments)]
const fn listing(
    id: &'static str,
    name: &'static str,
    cuisine: &'static str,
    price: u32,
    tags: &'static [&'static str],
    popularity: u32,
    lat: f64,
    lng: f64,
) -> Restaurant {
    Restaurant {
        id,
        name,
        cuisine,
        price,
        tags,
        popularity,
        hidden: false,
        position: Coordinates::new(lat, lng),
    }
}

/// All listings, in deck order.
pub const DATASET: &[Restaurant] = &[
    listing("1", "Spice Route", "Indian", 200, &["spicy", "veg"], 50, 12.9716, 77.5946),
    listing("2", "Sweet Tooth", "Desserts", 150, &["dessert"], 40, 12.975, 77.59),
    listing("3", "Fire Bowl", "Asian", 320, &["spicy"], 65, 12.969, 77.6),
    listing("4", "Burger Barn", "Fast Food", 180, &["budget"], 55, 12.968, 77.592),
    listing("5", "Green Leaf", "Healthy", 220, &["veg"], 45, 12.974, 77.598),
    listing("6", "Pizza Hub", "Italian", 350, &["cheese"], 70, 12.972, 77.602),
    listing("7", "Chaat Junction", "Street Food", 120, &["spicy"], 60, 12.976, 77.596),
    listing("8", "Noodle House", "Chinese", 250, &["noodles"], 58, 12.967, 77.599),
    listing("9", "Cafe Mocha", "Cafe", 300, &["coffee"], 52, 12.973, 77.591),
    listing("10", "Ice Cream Lab", "Desserts", 170, &["dessert"], 48, 12.977, 77.593),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_dataset_ids_unique() {
        let ids: HashSet<_> = DATASET.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), DATASET.len());
        assert_eq!(DATASET.len(), 10);
    }

    #[test]
    fn test_dataset_visible() {
        assert!(DATASET.iter().all(|r| !r.hidden));
    }
}
