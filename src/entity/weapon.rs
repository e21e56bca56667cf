//! Ranged weapon state
//!
//! The view only reads weapons; the fire/reload operations exist for
//! hosts driving a match (see `src/main.rs`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    /// Display name. The HUD upper-cases it.
    pub name: String,
    pub ammo: u32,
    /// Always > 0 for constructed weapons.
    pub max_ammo: u32,
    pub reloading: bool,
    /// Fraction complete in [0, 1]. Only meaningful while reloading.
    pub reload_progress: f32,
}

impl Weapon {
    pub fn new(name: impl Into<String>, max_ammo: u32) -> Self {
        Self {
            name: name.into(),
            ammo: max_ammo,
            max_ammo,
            reloading: false,
            reload_progress: 0.0,
        }
    }

    /// Stock weapon: Crossbow (Warrior)
    pub fn crossbow() -> Self {
        Self::new("Crossbow", 8)
    }

    /// Stock weapon: Fire Staff (Mage)
    pub fn fire_staff() -> Self {
        Self::new("Fire Staff", 5)
    }

    /// Stock weapon: Long Rifle (Sniper)
    pub fn long_rifle() -> Self {
        Self::new("Long Rifle", 3)
    }

    /// Stock weapon: Pistol (sidearm)
    pub fn pistol() -> Self {
        Self::new("Pistol", 6)
    }

    pub fn is_empty(&self) -> bool {
        self.ammo == 0
    }

    /// Spend one round. Returns false while empty or mid-reload.
    pub fn fire(&mut self) -> bool {
        if self.reloading || self.ammo == 0 {
            return false;
        }
        self.ammo -= 1;
        true
    }

    /// Start a reload. No-op while one is already running.
    pub fn begin_reload(&mut self) {
        if self.reloading {
            return;
        }
        self.reloading = true;
        self.reload_progress = 0.0;
    }

    /// Advance an active reload by a fraction of total progress.
    /// Refills the magazine when progress reaches 1.
    pub fn advance_reload(&mut self, amount: f32) {
        if !self.reloading {
            return;
        }
        self.reload_progress = (self.reload_progress + amount).min(1.0);
        if self.reload_progress >= 1.0 {
            self.reloading = false;
            self.reload_progress = 0.0;
            self.ammo = self.max_ammo;
        }
    }
}
