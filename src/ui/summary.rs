//! Derived HUD data for one fighter - recomputed every frame, never cached.

use crate::entity::{Fighter, Weapon};
use crate::render::colors::{self, Color};
use serde::{Deserialize, Serialize};

/// Color class for the ammo label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmmoColorClass {
    /// Rounds in the magazine (gold)
    Normal,
    /// Magazine empty (gray)
    Empty,
    /// Reload in progress (red)
    Reloading,
}

impl AmmoColorClass {
    pub fn color(self) -> Color {
        match self {
            AmmoColorClass::Normal => colors::AMMO_NORMAL,
            AmmoColorClass::Empty => colors::AMMO_EMPTY,
            AmmoColorClass::Reloading => colors::AMMO_RELOADING,
        }
    }
}

/// Health indicator data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthSummary {
    /// Raw health, for the numeric label.
    pub health: f32,
    /// health / max_health, floored at 0. Deliberately not capped at 1:
    /// an over-healed fighter reports a ratio above 1.
    pub ratio: f32,
}

/// Ammo label data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmmoSummary {
    pub text: String,
    pub class: AmmoColorClass,
}

/// Everything the HUD needs for one tracked fighter this frame.
/// A `None` field means "no update" - the widget keeps its last value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FighterReadout {
    pub health: Option<HealthSummary>,
    pub ammo: Option<AmmoSummary>,
}

/// Derive the per-frame readout for a tracked fighter.
pub fn summarize(fighter: &Fighter) -> FighterReadout {
    FighterReadout {
        health: health_summary(fighter),
        ammo: fighter.weapon.as_ref().map(ammo_summary),
    }
}

/// Health ratio for the progress bar. A fighter with a degenerate
/// max_health gets no update at all, leaving the display stale.
fn health_summary(fighter: &Fighter) -> Option<HealthSummary> {
    if fighter.max_health <= 0.0 {
        return None;
    }
    Some(HealthSummary {
        health: fighter.health,
        ratio: (fighter.health / fighter.max_health).max(0.0),
    })
}

/// Ammo label text and color class.
pub fn ammo_summary(weapon: &Weapon) -> AmmoSummary {
    let name = weapon.name.to_uppercase();

    if weapon.reloading {
        let percent = (weapon.reload_progress * 100.0).round() as u32;
        return AmmoSummary {
            text: format!("{}: RELOADING... {}%", name, percent),
            class: AmmoColorClass::Reloading,
        };
    }

    AmmoSummary {
        text: format!("{}: {} / {}", name, weapon.ammo, weapon.max_ammo),
        class: if weapon.ammo == 0 {
            AmmoColorClass::Empty
        } else {
            AmmoColorClass::Normal
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::FighterKind;

    fn fighter(health: f32, max_health: f32) -> Fighter {
        Fighter {
            class: FighterKind::Warrior,
            health,
            max_health,
            weapon: None,
        }
    }

    #[test]
    fn test_health_ratio() {
        let summary = summarize(&fighter(80.0, 100.0)).health.unwrap();
        assert!((summary.ratio - 0.8).abs() < 1e-6);
        assert_eq!(summary.health, 80.0);
    }

    #[test]
    fn test_negative_health_floors_at_zero() {
        let summary = summarize(&fighter(-25.0, 100.0)).health.unwrap();
        assert_eq!(summary.ratio, 0.0);
    }

    #[test]
    fn test_overheal_ratio_not_capped() {
        let summary = summarize(&fighter(150.0, 100.0)).health.unwrap();
        assert!(summary.ratio > 1.0);
    }

    #[test]
    fn test_degenerate_max_health_gives_no_update() {
        assert!(summarize(&fighter(50.0, 0.0)).health.is_none());
        assert!(summarize(&fighter(50.0, -10.0)).health.is_none());
    }

    #[test]
    fn test_missing_weapon_gives_no_ammo_update() {
        assert!(summarize(&fighter(50.0, 100.0)).ammo.is_none());
    }

    #[test]
    fn test_empty_pistol_display() {
        let mut weapon = Weapon::pistol();
        weapon.ammo = 0;
        let summary = ammo_summary(&weapon);
        assert_eq!(summary.text, "PISTOL: 0 / 6");
        assert_eq!(summary.class, AmmoColorClass::Empty);
    }

    #[test]
    fn test_loaded_weapon_is_gold() {
        let summary = ammo_summary(&Weapon::new("Fire Staff", 5));
        assert_eq!(summary.text, "FIRE STAFF: 5 / 5");
        assert_eq!(summary.class, AmmoColorClass::Normal);
    }

    #[test]
    fn test_reloading_display() {
        let mut weapon = Weapon::pistol();
        weapon.begin_reload();
        weapon.advance_reload(0.37);
        let summary = ammo_summary(&weapon);
        assert_eq!(summary.text, "PISTOL: RELOADING... 37%");
        assert_eq!(summary.class, AmmoColorClass::Reloading);
    }
}
