//! Arena Duel - Entry Point
//!
//! Runs a headless scripted match: two stock fighters trade projectiles
//! until one drops, while the view produces draw commands and HUD state
//! every frame. Useful for exercising the full pipeline without a
//! windowing toolkit attached.

use arena_duel::assets;
use arena_duel::core::config::{self, set_config, ViewConfig};
use arena_duel::core::types::PlayerSlot;
use arena_duel::core::{ArenaError, Result};
use arena_duel::entity::Entity;
use arena_duel::render::RectInstance;
use arena_duel::view::ArenaView;

use clap::Parser;
use glam::Vec2;
use rand::Rng;

#[derive(Parser)]
#[command(name = "arena-duel", about = "Headless arena match demo")]
struct Args {
    /// Player 1 fighter class (Warrior, Mage or Sniper)
    #[arg(long, default_value = "Warrior")]
    p1: String,

    /// Player 2 fighter class
    #[arg(long, default_value = "Mage")]
    p2: String,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 720.0)]
    height: f32,

    /// Frames to simulate before calling the match a draw
    #[arg(long, default_value_t = 3600)]
    max_frames: u64,

    /// Optional view config (TOML)
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

/// A projectile in flight, tracked by the demo driver
struct Shot {
    id: arena_duel::core::types::EntityId,
    vx: f32,
    target: PlayerSlot,
}

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("arena_duel=debug")
        .init();

    let args = Args::parse();

    if let Some(path) = &args.config {
        let config = ViewConfig::load(path)?;
        config.validate().map_err(ArenaError::InvalidConfig)?;
        let _ = set_config(config);
    }

    // Optional cosmetics; absence is logged and ignored
    let cfg = config::config();
    if let Some(path) = &cfg.background_path {
        assets::load_background(path);
    }
    if let Some(path) = &cfg.stylesheet_path {
        assets::load_stylesheet(path);
    }

    let mut view = ArenaView::new(args.width, args.height, &args.p1, &args.p2);
    let mailbox = view.mailbox();
    let mut rng = rand::thread_rng();
    let mut shots: Vec<Shot> = Vec::new();

    println!("=== ARENA DUEL ===");
    println!("{} vs {}", args.p1, args.p2);
    println!();

    for _ in 0..args.max_frames {
        // Each fighter occasionally fires; empty weapons reload over time
        for slot in [PlayerSlot::P1, PlayerSlot::P2] {
            let wants_to_fire = rng.gen_bool(0.08);
            let Some(origin) = view.player(slot).map(Entity::center) else {
                continue;
            };

            let mut fired = false;
            if let Some(weapon) = view
                .player_mut(slot)
                .and_then(Entity::fighter_mut)
                .and_then(|fighter| fighter.weapon.as_mut())
            {
                if weapon.reloading {
                    weapon.advance_reload(0.02);
                } else if weapon.is_empty() {
                    weapon.begin_reload();
                } else if wants_to_fire {
                    fired = weapon.fire();
                }
            }

            if fired {
                let (vx, rotation, target) = match slot {
                    PlayerSlot::P1 => (14.0, 0.0, PlayerSlot::P2),
                    PlayerSlot::P2 => (-14.0, 180.0, PlayerSlot::P1),
                };
                let id = view.spawn_projectile(origin, Vec2::new(16.0, 4.0), rotation);
                shots.push(Shot { id, vx, target });
            }
        }

        // Advance projectiles; ones reaching their target deal damage
        let p1_x = view.player(PlayerSlot::P1).map(|e| e.center().x);
        let p2_x = view.player(PlayerSlot::P2).map(|e| e.center().x);
        let mut hits = Vec::new();
        for shot in &shots {
            let Some(entity) = view.entities_mut().iter_mut().find(|e| e.id == shot.id) else {
                continue;
            };
            entity.pos.x += shot.vx;

            let target_x = match shot.target {
                PlayerSlot::P1 => p1_x,
                PlayerSlot::P2 => p2_x,
            };
            let arrived = target_x.is_some_and(|x| {
                if shot.vx > 0.0 {
                    entity.pos.x >= x
                } else {
                    entity.pos.x <= x
                }
            });
            if arrived {
                hits.push((shot.id, shot.target));
            }
        }
        for (id, target) in hits {
            let damage = rng.gen_range(8.0..16.0);
            if let Some(fighter) = view.player_mut(target).and_then(Entity::fighter_mut) {
                fighter.health -= damage;
            }
            view.remove_entity(id);
            shots.retain(|shot| shot.id != id);
        }

        let output = view.frame();
        tracing::debug!(
            "Frame {}: {} commands, {} rect instances",
            view.frame_count(),
            output.commands.len(),
            RectInstance::batch(&output.commands).len()
        );

        if view.frame_count() % 120 == 0 {
            print_hud(&view);
        }

        // Winner check: the surviving class takes the match
        let alive = [PlayerSlot::P1, PlayerSlot::P2].map(|slot| {
            view.player(slot)
                .and_then(Entity::fighter)
                .map(|fighter| (fighter.class, fighter.is_alive()))
        });
        let someone_down = alive.iter().flatten().any(|(_, is_alive)| !is_alive);
        if someone_down {
            let winner = alive
                .iter()
                .flatten()
                .find(|(_, is_alive)| *is_alive)
                .map(|(class, _)| class.to_string())
                .unwrap_or_else(|| "Nobody".to_string());
            mailbox.announce_winner(&winner);

            // One more frame to deliver the announcement to the HUD
            view.frame();
            break;
        }
    }

    println!();
    print_hud(&view);
    match &view.hud.overlay {
        Some(overlay) => {
            println!();
            println!("  {}", overlay.title);
            println!("  {}", overlay.winner_line);
            println!("  [{}]", overlay.exit_label);
        }
        None => println!("Match ended in a draw after {} frames.", view.frame_count()),
    }

    Ok(())
}

fn print_hud(view: &ArenaView) {
    println!("--- Frame {} ---", view.frame_count());
    for hud in &view.hud.players {
        println!(
            "  {:<12} | health bar {:>4.0}% | {}",
            hud.label,
            hud.bar * 100.0,
            hud.ammo_text
        );
    }
}
