//! Color definitions for entity kinds and HUD states

use crate::entity::{EntityKind, FighterKind};
use serde::{Deserialize, Serialize};

/// RGBA color (0.0 to 1.0 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Pack color into u32 (RGBA8 format).
    pub fn to_u32(&self) -> u32 {
        let r = (self.r.clamp(0.0, 1.0) * 255.0) as u32;
        let g = (self.g.clamp(0.0, 1.0) * 255.0) as u32;
        let b = (self.b.clamp(0.0, 1.0) * 255.0) as u32;
        let a = (self.a.clamp(0.0, 1.0) * 255.0) as u32;
        (r << 24) | (g << 16) | (b << 8) | a
    }

    /// Unpack color from u32 (RGBA8 format).
    pub fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 24) & 0xFF) as f32 / 255.0,
            g: ((packed >> 16) & 0xFF) as f32 / 255.0,
            b: ((packed >> 8) & 0xFF) as f32 / 255.0,
            a: (packed & 0xFF) as f32 / 255.0,
        }
    }

    // Common colors
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
}

/// Center divider line
pub const DIVIDER: Color = Color::RED;

/// Sprite outline stroke
pub const OUTLINE: Color = Color::BLACK;

/// Ammo label at rest (gold)
pub const AMMO_NORMAL: Color = Color::rgb(0.882, 0.694, 0.173);

/// Ammo label on an empty magazine
pub const AMMO_EMPTY: Color = Color::GRAY;

/// Ammo label mid-reload
pub const AMMO_RELOADING: Color = Color::RED;

/// Fill color for a fighter class
pub fn fighter_color(class: FighterKind) -> Color {
    match class {
        FighterKind::Warrior => Color::rgb(0.0, 0.0, 1.0), // Blue
        FighterKind::Mage => Color::rgb(0.5, 0.0, 0.5),    // Purple
        FighterKind::Sniper => Color::rgb(0.0, 0.5, 0.0),  // Green
    }
}

/// Fill color for any entity. Total over the kind enum; unrecognized
/// class strings were already defaulted at parse time.
pub fn entity_color(kind: &EntityKind) -> Color {
    match kind {
        EntityKind::Fighter(fighter) => fighter_color(fighter.class),
        EntityKind::Projectile => Color::rgb(1.0, 1.0, 0.0), // Yellow
    }
}
