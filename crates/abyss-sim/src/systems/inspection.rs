//! Exploration inspection: cataloguing, treasure pickup and the fact card.

use abyss_core::catalog::SeaEntity;
use abyss_core::constants::TREASURE_REWARD;
use abyss_core::enums::EntityCategory;
use abyss_core::events::GameEvent;

use crate::session::{Selection, Session};

/// Inspect a rendered entity.
///
/// Treasure is collected on first inspection and never opens a fact card.
/// Anything else is catalogued if new, then selected with a fact lookup
/// requested, unless it is already the selection.
pub fn inspect(session: &mut Session, entity: &SeaEntity, events: &mut Vec<GameEvent>) {
    let newly_catalogued = session.catalogued.insert(entity.id.to_string());
    if newly_catalogued {
        events.push(GameEvent::Discovered {
            entity_id: entity.id.to_string(),
        });
    }

    if entity.category == EntityCategory::Treasure {
        if newly_catalogued {
            tracing::info!(entity = entity.id, reward = TREASURE_REWARD, "treasure recovered");
            events.push(GameEvent::TreasureCollected {
                entity_id: entity.id.to_string(),
                reward: TREASURE_REWARD,
            });
        }
        return;
    }

    if session
        .selection
        .as_ref()
        .is_some_and(|s| s.entity_id == entity.id)
    {
        return;
    }

    events.push(GameEvent::Inspected {
        entity_id: entity.id.to_string(),
    });
    session.selection = Some(Selection {
        entity_id: entity.id.to_string(),
        name: entity.name.to_string(),
        fact: None,
    });
    events.push(GameEvent::FactRequested {
        entity_id: entity.id.to_string(),
        name: entity.name.to_string(),
        depth: entity.depth,
    });
}

/// Fill the fact card. Text for anything but the current selection is
/// dropped. Returns whether it was applied.
pub fn apply_fact(session: &mut Session, entity_id: &str, text: String) -> bool {
    match session.selection.as_mut() {
        Some(selection) if selection.entity_id == entity_id => {
            selection.fact = Some(text);
            true
        }
        _ => {
            tracing::debug!(entity = entity_id, "discarding stale fact");
            false
        }
    }
}
