use std::future::Future;
use std::pin::Pin;

use abyss_core::catalog::{find_entity, zone_at};
use abyss_core::enums::EntityCategory;

use crate::error::FactError;

/// What the player inspected.
#[derive(Debug, Clone, PartialEq)]
pub struct FactRequest {
    pub entity_id: String,
    pub name: String,
    pub depth: f64,
}

pub type FactFuture<'a> = Pin<Box<dyn Future<Output = Result<String, FactError>> + Send + 'a>>;

/// A source of one-sentence facts.
pub trait FactProvider: Send + Sync {
    fn describe<'a>(&'a self, request: &'a FactRequest) -> FactFuture<'a>;
}

/// Offline provider that composes a line from catalog data.
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogProvider;

impl CatalogProvider {
    fn compose(request: &FactRequest) -> Result<String, FactError> {
        let entity = find_entity(&request.entity_id)
            .ok_or_else(|| FactError::UnknownEntity(request.entity_id.clone()))?;
        let zone = zone_at(entity.depth).name;

        let text = match entity.category {
            EntityCategory::Treasure => format!(
                "The {} has rested {} m down in the {} zone, waiting for someone like you.",
                entity.name, entity.depth, zone
            ),
            EntityCategory::Landmark => format!(
                "The {} marks {} m below the surface, deep in the {} zone.",
                entity.name, entity.depth, zone
            ),
            EntityCategory::Plant => format!(
                "The {} grows at {} m in the {} zone, where little light remains.",
                entity.name, entity.depth, zone
            ),
            EntityCategory::Creature if entity.hostile => format!(
                "The {} hunts at {} m in the {} zone. Keep your distance.",
                entity.name, entity.depth, zone
            ),
            EntityCategory::Creature => format!(
                "The {} makes its home {} m down in the {} zone.",
                entity.name, entity.depth, zone
            ),
        };
        Ok(text)
    }
}

impl FactProvider for CatalogProvider {
    fn describe<'a>(&'a self, request: &'a FactRequest) -> FactFuture<'a> {
        Box::pin(async move { Self::compose(request) })
    }
}
