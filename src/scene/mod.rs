//! Scene layout: one-time placement of the two combatants.
//!
//! Placement happens once at match start. Window resizes later do not
//! move fighters; only the divider follows the viewport.

use crate::core::config::config;
use crate::entity::{Entity, FighterFactory, FighterKind};
use glam::Vec2;

/// Place the two fighters for a fresh match: player 1 near the left edge
/// facing right, player 2 mirrored on the right facing left, both at half
/// height.
///
/// Kind tags are parsed with the Warrior fallback; stats and loadout come
/// from the factory. There are no failure modes - every input is
/// defaulted rather than rejected.
pub fn layout(
    viewport_w: f32,
    viewport_h: f32,
    p1_kind: &str,
    p2_kind: &str,
    factory: &dyn FighterFactory,
) -> (Entity, Entity) {
    let cfg = config();
    let mid_height = viewport_h / 2.0;

    let mut p1 = factory.create(
        FighterKind::parse_or_default(p1_kind),
        Vec2::new(cfg.p1_x, mid_height),
    );
    let mut p2 = factory.create(
        FighterKind::parse_or_default(p2_kind),
        Vec2::new(viewport_w - cfg.p2_right_margin, mid_height),
    );

    // Initial facing, regardless of what the factory returned.
    p1.rotation = 0.0;
    p2.rotation = 180.0;

    (p1, p2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::StockFighters;

    #[test]
    fn test_layout_positions_and_facing() {
        let (p1, p2) = layout(1920.0, 1080.0, "Mage", "Sniper", &StockFighters);

        assert_eq!(p1.pos, Vec2::new(100.0, 540.0));
        assert_eq!(p1.rotation, 0.0);
        assert_eq!(p2.pos, Vec2::new(1720.0, 540.0));
        assert_eq!(p2.rotation, 180.0);

        assert_eq!(p1.fighter().unwrap().class, FighterKind::Mage);
        assert_eq!(p2.fighter().unwrap().class, FighterKind::Sniper);
    }

    #[test]
    fn test_unknown_kinds_field_warriors() {
        let (p1, p2) = layout(800.0, 600.0, "Ninja", "", &StockFighters);
        assert_eq!(p1.fighter().unwrap().class, FighterKind::Warrior);
        assert_eq!(p2.fighter().unwrap().class, FighterKind::Warrior);
    }
}
