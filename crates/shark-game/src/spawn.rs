//! Food spawn algorithm.
//!
//! New food always appears in the rightmost column and drifts left from
//! there. The kind is drawn from a weighted pool favoring common creatures;
//! bottom dwellers are pinned to the bottom row.

use rand::seq::IndexedRandom;
use rand::RngCore;

use crate::state::{Food, FoodKind, GRID_MAX};

/// Weighted candidate pool. Weights are fixed counts, so the draw is uniform
/// over the pool but non-uniform over kinds.
const WEIGHTED_POOL: [FoodKind; 15] = [
    FoodKind::Fish,
    FoodKind::Fish,
    FoodKind::Fish,
    FoodKind::Fish,
    FoodKind::Fish,
    FoodKind::TropicalFish,
    FoodKind::TropicalFish,
    FoodKind::TropicalFish,
    FoodKind::Crab,
    FoodKind::Crab,
    FoodKind::Shrimp,
    FoodKind::Shrimp,
    FoodKind::Octopus,
    FoodKind::Blowfish,
    FoodKind::Squid,
];

/// Spawns one food item at the right edge, or `None` when nothing fits.
///
/// `free_rows` are the rows of the rightmost column not occupied by the shark
/// or another food item. Bottom dwellers require the bottom row to be free;
/// every other kind requires a free row above it. Kinds whose row requirement
/// cannot be met are dropped from the pool before the draw, so an unlucky
/// draw never fails after the fact.
pub fn spawn_food(free_rows: &[u8], seq: u64, rng: &mut dyn RngCore) -> Option<Food> {
    let bottom_free = free_rows.contains(&GRID_MAX);
    let open_rows: Vec<u8> = free_rows
        .iter()
        .copied()
        .filter(|&row| row != GRID_MAX)
        .collect();

    let pool: Vec<FoodKind> = WEIGHTED_POOL
        .iter()
        .copied()
        .filter(|kind| {
            if kind.is_bottom_dweller() {
                bottom_free
            } else {
                !open_rows.is_empty()
            }
        })
        .collect();

    let kind = *pool.choose(rng)?;
    let y = if kind.is_bottom_dweller() {
        GRID_MAX
    } else {
        *open_rows.choose(rng)?
    };

    Some(Food {
        id: format!("{kind}-{seq}"),
        x: GRID_MAX,
        y,
        kind,
    })
}
