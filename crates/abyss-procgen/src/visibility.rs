//! Depth-window visibility query over the catalog.

use abyss_core::catalog::{SeaEntity, SEA_ENTITIES};

/// Catalog entities within `range` meters of `depth` that live in `ocean_id`.
///
/// The window is open: an entity exactly `range` away is excluded.
/// Catalog order is preserved.
pub fn visible_entities(depth: f64, range: f64, ocean_id: &str) -> Vec<&'static SeaEntity> {
    visible_in(SEA_ENTITIES, depth, range, ocean_id)
}

/// Same filter over an arbitrary entity list.
pub fn visible_in<'a>(
    entities: &'a [SeaEntity],
    depth: f64,
    range: f64,
    ocean_id: &str,
) -> Vec<&'a SeaEntity> {
    entities
        .iter()
        .filter(|e| (e.depth - depth).abs() < range && e.in_ocean(ocean_id))
        .collect()
}
