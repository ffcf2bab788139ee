//! The static world catalog: sea entities, vessels, oceans, depth zones and
//! mission templates.
//!
//! Everything here is defined at compile time and never mutated. Other crates
//! refer to entries by their string identifier.

use serde::Serialize;

use crate::enums::EntityCategory;
use crate::enums::EntityCategory::{Creature, Landmark, Plant, Treasure};

/// An immutable catalog record for something that can appear in the water.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeaEntity {
    pub id: &'static str,
    pub name: &'static str,
    /// Depth in meters.
    pub depth: f64,
    /// Lateral scale factor (also sizes the screen-space probe).
    pub scale: f32,
    pub category: EntityCategory,
    pub hostile: bool,
    /// Oceans this entity appears in. `None` means every ocean.
    pub oceans: Option<&'static [&'static str]>,
}

impl SeaEntity {
    /// Whether this entity can be found in the given ocean.
    pub fn in_ocean(&self, ocean_id: &str) -> bool {
        match self.oceans {
            None => true,
            Some(oceans) => oceans.contains(&ocean_id),
        }
    }
}

/// A purchasable submarine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vessel {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub max_health: f64,
    pub ammo_capacity: u32,
    /// Cost in coins (0 = starter vessel).
    pub price: u64,
}

/// A playable ocean map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ocean {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// A named depth band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Zone {
    pub name: &'static str,
    /// Depth at which this zone begins.
    pub depth: f64,
}

/// A mission blueprint. Daily missions are rolled from these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MissionTemplate {
    pub description: &'static str,
    pub target_id: &'static str,
    pub reward: u64,
}

pub const STARTER_VESSEL_ID: &str = "classic";

pub const DEFAULT_OCEAN_ID: &str = "pacific";

pub const VESSELS: &[Vessel] = &[
    Vessel {
        id: "classic",
        name: "The Canary",
        description: "The classic yellow submersible. Reliable, highly visible, and perfect for tourism.",
        max_health: 100.0,
        ammo_capacity: 20,
        price: 0,
    },
    Vessel {
        id: "stealth",
        name: "Shadow Ray",
        description: "A military-grade stealth vessel designed for deep reconnaissance missions.",
        max_health: 80.0,
        ammo_capacity: 50,
        price: 500,
    },
    Vessel {
        id: "research",
        name: "Deep Science",
        description: "High-tech research vessel equipped with advanced sensors and white plating.",
        max_health: 120.0,
        ammo_capacity: 10,
        price: 1000,
    },
];

pub const OCEANS: &[Ocean] = &[
    Ocean {
        id: "pacific",
        name: "Pacific Ocean",
        description: "The deepest ocean. Home to the Ring of Fire and the Mariana Trench.",
    },
    Ocean {
        id: "atlantic",
        name: "Atlantic Ocean",
        description: "Famous for historical shipwrecks like the Titanic and turbulent waters.",
    },
    Ocean {
        id: "indian",
        name: "Indian Ocean",
        description: "Warm, tropical waters teeming with vibrant coral reefs.",
    },
];

pub const ZONES: &[Zone] = &[
    Zone { name: "Epipelagic Zone (Sunlight)", depth: 0.0 },
    Zone { name: "Mesopelagic Zone (Twilight)", depth: 200.0 },
    Zone { name: "Bathypelagic Zone (Midnight)", depth: 1000.0 },
    Zone { name: "Abyssopelagic Zone (Abyss)", depth: 4000.0 },
    Zone { name: "Hadalpelagic Zone (The Trenches)", depth: 6000.0 },
];

pub const MISSION_TEMPLATES: &[MissionTemplate] = &[
    MissionTemplate { description: "Locate a Giant Squid", target_id: "squid", reward: 100 },
    MissionTemplate { description: "Scan the RMS Titanic", target_id: "titanic", reward: 500 },
    MissionTemplate { description: "Find a Clownfish", target_id: "clownfish", reward: 20 },
    MissionTemplate { description: "Analyze a Goblin Shark", target_id: "goblin", reward: 150 },
    MissionTemplate { description: "Discover the Mariana Snailfish", target_id: "snailfish", reward: 300 },
    MissionTemplate { description: "Find a Plastic Bag (Clean it up!)", target_id: "plastic", reward: 50 },
    MissionTemplate { description: "Spot an Anglerfish", target_id: "angler", reward: 120 },
    MissionTemplate { description: "Scan a Sperm Whale", target_id: "sperm-whale", reward: 200 },
    MissionTemplate { description: "Find the Trieste Bathyscaphe", target_id: "trieste", reward: 1000 },
    MissionTemplate { description: "Analyze Giant Tube Worms", target_id: "tube-worms", reward: 150 },
    MissionTemplate { description: "Recover Pirate Gold", target_id: "treasure", reward: 500 },
];

const fn entity(
    id: &'static str,
    name: &'static str,
    depth: f64,
    scale: f32,
    category: EntityCategory,
    hostile: bool,
    oceans: Option<&'static [&'static str]>,
) -> SeaEntity {
    SeaEntity { id, name, depth, scale, category, hostile, oceans }
}

const ATL: &[&str] = &["atlantic"];
const PAC: &[&str] = &["pacific"];
const IND: &[&str] = &["indian"];
const ATL_PAC: &[&str] = &["atlantic", "pacific"];
const ATL_IND: &[&str] = &["atlantic", "indian"];
const IND_PAC: &[&str] = &["indian", "pacific"];
const PAC_IND: &[&str] = &["pacific", "indian"];

/// Every placeable entity, ordered roughly by depth.
pub const SEA_ENTITIES: &[SeaEntity] = &[
    // --- 0m to 200m (Sunlight Zone) ---
    entity("salmon", "Atlantic Salmon", 3.0, 1.0, Creature, false, Some(ATL_PAC)),
    entity("kelp", "Giant Kelp", 5.0, 4.0, Plant, false, Some(PAC)),
    entity("polar-bear", "Polar Bear", 10.0, 3.0, Creature, true, Some(ATL)),
    entity("clownfish", "Clownfish", 15.0, 0.8, Creature, false, Some(IND_PAC)),
    entity("pirate-ship", "Sunken Pirate Ship", 25.0, 10.0, Landmark, false, Some(ATL_IND)),
    entity("brain-coral", "Brain Coral", 18.0, 1.5, Plant, false, Some(IND)),
    entity("manatee", "Manatee", 20.0, 3.5, Creature, false, Some(ATL)),
    entity("striped-bass", "Striped Bass", 30.0, 1.2, Creature, false, Some(ATL)),
    entity("treasure-1", "Lost Gold Chest", 45.0, 1.5, Treasure, false, None),
    entity("sea-anemone", "Sea Anemone", 40.0, 1.0, Plant, false, None),
    entity("penguin", "Emperor Penguin", 50.0, 1.5, Creature, false, Some(ATL)),
    entity("shark-reef", "Reef Shark", 70.0, 2.5, Creature, true, Some(PAC_IND)),
    entity("orca", "Killer Whale", 100.0, 6.0, Creature, true, None),
    entity("turtle", "Green Sea Turtle", 120.0, 2.0, Creature, false, None),
    entity("lionfish", "Lionfish", 140.0, 1.0, Creature, true, Some(IND_PAC)),
    entity("sunfish", "Ocean Sunfish", 180.0, 4.0, Creature, false, None),
    // --- 200m to 1000m (Twilight Zone) ---
    entity("wolf-eel", "Wolf Eel", 210.0, 2.0, Creature, true, Some(PAC)),
    entity("oarfish", "Giant Oarfish", 250.0, 7.0, Creature, false, Some(PAC_IND)),
    entity("great-white", "Great White Shark", 300.0, 5.0, Creature, true, None),
    entity("temple", "Ancient Temple", 320.0, 8.0, Landmark, false, Some(IND)),
    entity("angel-shark", "Angel Shark", 350.0, 3.0, Creature, true, None),
    entity("tuna", "Bigeye Tuna", 400.0, 2.5, Creature, false, None),
    entity("crab", "Japanese Spider Crab", 450.0, 3.5, Creature, false, Some(PAC)),
    entity("treasure-2", "Ancient Vase", 480.0, 1.2, Treasure, false, None),
    entity("swordfish", "Swordfish", 550.0, 3.5, Creature, true, None),
    entity("nautilus", "Chambered Nautilus", 600.0, 1.0, Creature, false, Some(IND_PAC)),
    entity("squid", "Giant Squid", 700.0, 9.0, Creature, true, None),
    entity("viperfish", "Pacific Viperfish", 900.0, 1.0, Creature, true, Some(PAC)),
    // --- 1000m to 4000m (Midnight Zone) ---
    entity("angler", "Anglerfish", 1000.0, 1.5, Creature, true, None),
    entity("gulper", "Gulper Eel", 1100.0, 1.5, Creature, true, None),
    entity("blobfish", "Blobfish", 1200.0, 1.0, Creature, false, Some(PAC)),
    entity("goblin", "Goblin Shark", 1300.0, 3.5, Creature, true, Some(PAC_IND)),
    entity("vampire", "Vampire Squid", 1500.0, 2.0, Creature, true, None),
    entity("lost-city", "Lost City Ruins", 1800.0, 15.0, Landmark, false, Some(ATL)),
    entity("colossal", "Colossal Squid", 2200.0, 12.0, Creature, true, Some(ATL)),
    entity("sperm-whale", "Sperm Whale", 2250.0, 14.0, Creature, false, None),
    entity("tube-worms", "Giant Tube Worms", 2500.0, 2.5, Plant, false, Some(PAC)),
    entity("dumbo", "Dumbo Octopus", 3000.0, 1.5, Creature, false, None),
    entity("treasure-3", "Gemstone Cluster", 3500.0, 1.5, Treasure, false, None),
    entity("titanic", "RMS Titanic", 3800.0, 20.0, Landmark, false, Some(ATL)),
    // --- 4000m+ (Abyss & Hadal) ---
    entity("fangtooth", "Fangtooth", 4200.0, 0.8, Creature, true, None),
    entity("comb-jelly", "Comb Jelly", 5500.0, 1.0, Creature, false, None),
    entity("treasure-4", "Alien Artifact", 7000.0, 2.0, Treasure, false, Some(PAC)),
    entity("snailfish", "Mariana Snailfish", 8000.0, 0.8, Creature, false, Some(PAC)),
    entity("plastic", "Plastic Bag", 10_898.0, 1.0, Landmark, false, None),
    entity("trieste", "Trieste Bathyscaphe", 10_911.0, 5.0, Landmark, false, Some(PAC)),
];

/// Look up a catalog entity by identifier.
pub fn find_entity(id: &str) -> Option<&'static SeaEntity> {
    SEA_ENTITIES.iter().find(|e| e.id == id)
}

/// Look up a vessel by identifier.
pub fn find_vessel(id: &str) -> Option<&'static Vessel> {
    VESSELS.iter().find(|v| v.id == id)
}

/// Look up an ocean by identifier.
pub fn find_ocean(id: &str) -> Option<&'static Ocean> {
    OCEANS.iter().find(|o| o.id == id)
}

/// The depth zone containing `depth`.
pub fn zone_at(depth: f64) -> &'static Zone {
    ZONES
        .iter()
        .rev()
        .find(|z| depth >= z.depth)
        .unwrap_or(&ZONES[0])
}
