//! Arena entity model
//!
//! Entities are owned by the simulation; the view only ever reads them.
//! Everything placed in the arena is a rotated rectangular sprite with a
//! kind tag that decides its fill color.

pub mod weapon;

pub use weapon::Weapon;

use crate::core::types::EntityId;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Fighter class tag. Decides sprite color and which stock loadout the
/// factory hands out. Warrior is the arena's default class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FighterKind {
    #[default]
    Warrior,
    Mage,
    Sniper,
}

impl FighterKind {
    /// Parse a kind tag from player selection. Unknown or empty tags fall
    /// back to Warrior; the arena always fields a fighter.
    pub fn parse_or_default(tag: &str) -> Self {
        match tag {
            "Warrior" => FighterKind::Warrior,
            "Mage" => FighterKind::Mage,
            "Sniper" => FighterKind::Sniper,
            _ => FighterKind::Warrior,
        }
    }
}

impl std::fmt::Display for FighterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FighterKind::Warrior => "Warrior",
            FighterKind::Mage => "Mage",
            FighterKind::Sniper => "Sniper",
        };
        write!(f, "{}", name)
    }
}

/// Combat participant state carried by a fighter entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fighter {
    pub class: FighterKind,
    /// Current health. The simulation may push this below zero or, with
    /// over-heal effects, above max_health.
    pub health: f32,
    /// Fixed at creation.
    pub max_health: f32,
    pub weapon: Option<Weapon>,
}

impl Fighter {
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }
}

/// Entity variant tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EntityKind {
    Fighter(Fighter),
    Projectile,
}

/// Anything placed in the arena: a rotated rectangular sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    /// Top-left corner of the bounding box.
    pub pos: Vec2,
    /// Width/height. Non-positive sizes are degenerate but legal; they
    /// render as invisible rectangles rather than erroring.
    pub size: Vec2,
    /// Degrees, clockwise from facing right.
    pub rotation: f32,
    pub kind: EntityKind,
}

impl Entity {
    /// Spawn a projectile sprite. Projectiles carry no combat state the
    /// view cares about beyond placement.
    pub fn projectile(pos: Vec2, size: Vec2, rotation: f32) -> Self {
        Self {
            id: EntityId::new(),
            pos,
            size,
            rotation,
            kind: EntityKind::Projectile,
        }
    }

    /// Center of the bounding box. Rotation is applied about this point.
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn fighter(&self) -> Option<&Fighter> {
        match &self.kind {
            EntityKind::Fighter(fighter) => Some(fighter),
            EntityKind::Projectile => None,
        }
    }

    pub fn fighter_mut(&mut self) -> Option<&mut Fighter> {
        match &mut self.kind {
            EntityKind::Fighter(fighter) => Some(fighter),
            EntityKind::Projectile => None,
        }
    }
}

/// Builds a fighter entity of a given class at a position.
///
/// The layout planner decides placement only; stats and loadout come from
/// this collaborator keyed by class.
pub trait FighterFactory {
    fn create(&self, class: FighterKind, pos: Vec2) -> Entity;
}

/// Stock loadouts for the three playable classes
pub struct StockFighters;

impl FighterFactory for StockFighters {
    fn create(&self, class: FighterKind, pos: Vec2) -> Entity {
        let (max_health, size, weapon) = match class {
            FighterKind::Warrior => (120.0, Vec2::new(60.0, 40.0), Weapon::crossbow()),
            FighterKind::Mage => (90.0, Vec2::new(50.0, 36.0), Weapon::fire_staff()),
            FighterKind::Sniper => (80.0, Vec2::new(55.0, 30.0), Weapon::long_rifle()),
        };

        Entity {
            id: EntityId::new(),
            pos,
            size,
            rotation: 0.0,
            kind: EntityKind::Fighter(Fighter {
                class,
                health: max_health,
                max_health,
                weapon: Some(weapon),
            }),
        }
    }
}
