//! Frame pipeline integration tests
//!
//! These drive the full view end-to-end: layout, per-frame draw command
//! generation, HUD readout derivation, and the winner announcement path.

use arena_duel::core::types::PlayerSlot;
use arena_duel::entity::{Entity, FighterKind, Weapon};
use arena_duel::render::{geometry, DrawCommand};
use arena_duel::ui::AmmoColorClass;
use arena_duel::view::ArenaView;
use glam::Vec2;

#[test]
fn test_layout_positions_for_any_viewport() {
    for (w, h) in [(800.0, 600.0), (1920.0, 1080.0), (333.0, 77.0)] {
        let view = ArenaView::new(w, h, "Warrior", "Sniper");

        let p1 = view.player(PlayerSlot::P1).unwrap();
        let p2 = view.player(PlayerSlot::P2).unwrap();

        assert_eq!(p1.pos, Vec2::new(100.0, h / 2.0));
        assert_eq!(p1.rotation, 0.0);
        assert_eq!(p2.pos, Vec2::new(w - 200.0, h / 2.0));
        assert_eq!(p2.rotation, 180.0);
    }
}

#[test]
fn test_unknown_kind_yields_warrior_equivalent() {
    let view = ArenaView::new(800.0, 600.0, "Ninja", "Mage");
    let p1 = view.player(PlayerSlot::P1).unwrap().fighter().unwrap();
    assert_eq!(p1.class, FighterKind::Warrior);
}

#[test]
fn test_unrotated_sprite_bounds_match_entity_box() {
    let mut view = ArenaView::new(800.0, 600.0, "Warrior", "Mage");
    view.spawn_projectile(Vec2::new(50.0, 60.0), Vec2::new(30.0, 10.0), 0.0);

    let output = view.frame();
    let DrawCommand::Rect {
        center,
        size,
        rotation,
        ..
    } = output.commands.last().unwrap()
    else {
        panic!("projectile should be the topmost command");
    };

    let (min, max) = geometry::rect_aabb(*center, *size, *rotation);
    assert!((min - Vec2::new(50.0, 60.0)).length() < 1e-4);
    assert!((max - Vec2::new(80.0, 70.0)).length() < 1e-4);
}

#[test]
fn test_rotation_preserves_sprite_center() {
    let mut view = ArenaView::new(800.0, 600.0, "Warrior", "Mage");
    let id = view.spawn_projectile(Vec2::new(50.0, 60.0), Vec2::new(30.0, 10.0), 0.0);

    let mut centers = Vec::new();
    for rotation in [0.0, 37.0, 90.0, 212.5, 359.0] {
        view.entities_mut()
            .iter_mut()
            .find(|e| e.id == id)
            .unwrap()
            .rotation = rotation;
        let output = view.frame();
        let DrawCommand::Rect { center, .. } = output.commands.last().unwrap() else {
            panic!("expected rect");
        };
        centers.push(*center);
    }
    for center in &centers {
        assert_eq!(*center, centers[0]);
    }
}

#[test]
fn test_z_order_divider_then_entities() {
    let mut view = ArenaView::new(800.0, 600.0, "Warrior", "Mage");
    view.spawn_projectile(Vec2::new(100.0, 100.0), Vec2::new(10.0, 4.0), 0.0);

    let output = view.frame();
    assert_eq!(output.commands.len(), 4);
    assert!(matches!(output.commands[0], DrawCommand::Line { .. }));
    for command in &output.commands[1..] {
        assert!(matches!(command, DrawCommand::Rect { .. }));
    }
}

#[test]
fn test_identical_state_renders_bit_identical_frames() {
    let mut view = ArenaView::new(1024.0, 768.0, "Sniper", "Mage");
    view.spawn_projectile(Vec2::new(200.0, 300.0), Vec2::new(12.0, 4.0), 45.0);

    let first = view.frame();
    let second = view.frame();

    assert_eq!(first, second);
    // Serialized forms are byte-identical too - no hidden render state
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_health_readout_updates_hud() {
    let mut view = ArenaView::new(800.0, 600.0, "Warrior", "Mage");
    view.player_mut(PlayerSlot::P1)
        .unwrap()
        .fighter_mut()
        .unwrap()
        .health = 80.0;

    let output = view.frame();
    let readout = output.readouts[0].as_ref().unwrap();
    assert!((readout.health.unwrap().ratio - 80.0 / 120.0).abs() < 1e-6);
    assert_eq!(view.hud.players[0].label, "P1: 80");
}

#[test]
fn test_degenerate_max_health_leaves_hud_stale() {
    let mut view = ArenaView::new(800.0, 600.0, "Warrior", "Mage");
    view.frame();
    let label_before = view.hud.players[0].label.clone();
    let bar_before = view.hud.players[0].bar;

    let fighter = view
        .player_mut(PlayerSlot::P1)
        .unwrap()
        .fighter_mut()
        .unwrap();
    fighter.max_health = 0.0;
    fighter.health = 5.0;

    let output = view.frame();
    assert!(output.readouts[0].as_ref().unwrap().health.is_none());
    assert_eq!(view.hud.players[0].label, label_before);
    assert_eq!(view.hud.players[0].bar, bar_before);
}

#[test]
fn test_ammo_states_flow_to_hud() {
    let mut view = ArenaView::new(800.0, 600.0, "Warrior", "Mage");

    // Swap in a sidearm and run it empty
    {
        let fighter = view
            .player_mut(PlayerSlot::P1)
            .unwrap()
            .fighter_mut()
            .unwrap();
        let mut pistol = Weapon::pistol();
        pistol.ammo = 0;
        fighter.weapon = Some(pistol);
    }
    view.frame();
    assert_eq!(view.hud.players[0].ammo_text, "PISTOL: 0 / 6");
    assert_eq!(view.hud.players[0].ammo_class, AmmoColorClass::Empty);

    // Mid-reload the label goes red with a percentage
    {
        let weapon = view
            .player_mut(PlayerSlot::P1)
            .unwrap()
            .fighter_mut()
            .unwrap()
            .weapon
            .as_mut()
            .unwrap();
        weapon.begin_reload();
        weapon.advance_reload(0.37);
    }
    view.frame();
    assert_eq!(view.hud.players[0].ammo_text, "PISTOL: RELOADING... 37%");
    assert_eq!(view.hud.players[0].ammo_class, AmmoColorClass::Reloading);
}

#[test]
fn test_weaponless_fighter_keeps_placeholder_ammo_text() {
    let mut view = ArenaView::new(800.0, 600.0, "Warrior", "Mage");
    view.player_mut(PlayerSlot::P2)
        .unwrap()
        .fighter_mut()
        .unwrap()
        .weapon = None;

    view.frame();
    assert_eq!(view.hud.players[1].ammo_text, "AMMO: --");
}

#[test]
fn test_winner_announced_from_worker_thread() {
    let mut view = ArenaView::new(800.0, 600.0, "Warrior", "Mage");
    let mailbox = view.mailbox();

    let worker = std::thread::spawn(move || {
        mailbox.announce_winner("Warrior");
        mailbox.announce_winner("Mage");
    });
    worker.join().unwrap();

    view.frame();
    let overlay = view.hud.overlay.as_ref().expect("overlay after announcement");
    assert_eq!(overlay.winner_line, "Warrior WINS");

    // Still only one overlay after more frames
    view.frame();
    assert_eq!(view.hud.overlay.as_ref().unwrap().winner_line, "Warrior WINS");
}

#[test]
fn test_renderer_never_mutates_entities() {
    let mut view = ArenaView::new(800.0, 600.0, "Sniper", "Sniper");
    view.spawn_projectile(Vec2::new(10.0, 10.0), Vec2::new(8.0, 3.0), 12.0);
    let before: Vec<Entity> = view.entities().to_vec();

    view.frame();
    view.frame();

    let after = view.entities();
    assert_eq!(before.len(), after.len());
    for (a, b) in before.iter().zip(after) {
        assert_eq!(a.pos, b.pos);
        assert_eq!(a.size, b.size);
        assert_eq!(a.rotation, b.rotation);
    }
}
