//! HUD widget model for a live match
//!
//! Plain data mirrored into whatever widget toolkit hosts the arena.
//! Applying a readout follows the original view's update rules: absent
//! pieces leave the previous display in place.

use crate::core::types::PlayerSlot;
use crate::entity::FighterKind;
use crate::ui::summary::{AmmoColorClass, FighterReadout};

/// One fighter's HUD corner: name label, health bar, ammo label.
#[derive(Debug, Clone)]
pub struct PlayerHud {
    pub slot: PlayerSlot,
    /// "P1: Warrior" until the first health update, then "P1: 84".
    pub label: String,
    /// Progress bar fill. Starts full; may exceed 1 on over-heal.
    pub bar: f32,
    pub ammo_text: String,
    pub ammo_class: AmmoColorClass,
}

impl PlayerHud {
    fn new(slot: PlayerSlot, class: FighterKind) -> Self {
        Self {
            slot,
            label: format!("{}: {}", slot.label(), class),
            bar: 1.0,
            ammo_text: "AMMO: --".to_string(),
            ammo_class: AmmoColorClass::Normal,
        }
    }

    /// Apply one frame's readout. `None` pieces keep the stale display,
    /// matching the degenerate-max-health and missing-weapon contracts.
    fn apply(&mut self, readout: &FighterReadout) {
        if let Some(health) = &readout.health {
            self.bar = health.ratio;
            self.label = format!("{}: {}", self.slot.label(), health.health as i32);
        }
        if let Some(ammo) = &readout.ammo {
            self.ammo_text = ammo.text.clone();
            self.ammo_class = ammo.class;
        }
    }
}

/// Full-screen end-of-match overlay
#[derive(Debug, Clone, PartialEq)]
pub struct WinnerOverlay {
    pub title: String,
    pub winner_line: String,
    /// Caption of the single terminating action offered.
    pub exit_label: String,
}

impl WinnerOverlay {
    pub fn for_winner(name: &str) -> Self {
        Self {
            title: "WE HAVE A WINNER!".to_string(),
            winner_line: format!("{} WINS", name),
            exit_label: "EXIT TO DESKTOP".to_string(),
        }
    }
}

/// HUD state for the whole arena
#[derive(Debug, Clone)]
pub struct HudState {
    pub players: [PlayerHud; 2],
    /// Set once when the winner is announced; never replaced.
    pub overlay: Option<WinnerOverlay>,
}

impl HudState {
    pub fn new(p1_class: FighterKind, p2_class: FighterKind) -> Self {
        Self {
            players: [
                PlayerHud::new(PlayerSlot::P1, p1_class),
                PlayerHud::new(PlayerSlot::P2, p2_class),
            ],
            overlay: None,
        }
    }

    /// Apply per-slot readouts from one frame. A missing readout (tracked
    /// entity gone or not a fighter) is a no-op for that corner.
    pub fn apply(&mut self, readouts: &[Option<FighterReadout>]) {
        for (hud, readout) in self.players.iter_mut().zip(readouts) {
            if let Some(readout) = readout {
                hud.apply(readout);
            }
        }
    }

    /// Show the winner overlay. The first announcement wins.
    pub fn set_winner(&mut self, name: &str) {
        if self.overlay.is_none() {
            self.overlay = Some(WinnerOverlay::for_winner(name));
        }
    }
}
