//! Frame rendering pipeline
//!
//! Turns the current entity list into declarative draw commands plus
//! per-fighter HUD readouts. This module is READ-ONLY with respect to
//! simulation state and keeps no state of its own between frames: two
//! calls with identical input produce identical output.

pub mod colors;
pub mod commands;
pub mod geometry;
pub mod instance;

pub use colors::Color;
pub use commands::{DrawCommand, Stroke};
pub use instance::RectInstance;

use crate::core::config::config;
use crate::core::types::EntityId;
use crate::entity::Entity;
use crate::ui::summary::{summarize, FighterReadout};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One frame's worth of output, fully regenerated per call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameOutput {
    /// Draw commands in z-order: divider first, then entities in list
    /// order (later entries draw on top).
    pub commands: Vec<DrawCommand>,
    /// One slot per tracked id, in input order. None when that id is
    /// absent from the entity list or is not a fighter.
    pub readouts: Vec<Option<FighterReadout>>,
}

/// Render one frame.
///
/// Entities are drawn in list order with no sorting or culling; the
/// tracked ids (normally the two players) additionally produce HUD
/// readouts. Missing optional data degrades to omitted output, never an
/// error.
pub fn render_frame(
    viewport_w: f32,
    viewport_h: f32,
    entities: &[Entity],
    tracked: &[EntityId],
) -> FrameOutput {
    let cfg = config();

    let mut commands = Vec::with_capacity(entities.len() + 1);
    commands.push(divider(viewport_w, viewport_h, cfg.divider_width));
    for entity in entities {
        commands.push(entity_command(entity, cfg.outline_width));
    }

    let readouts = tracked
        .iter()
        .map(|id| {
            entities
                .iter()
                .find(|entity| entity.id == *id)
                .and_then(Entity::fighter)
                .map(summarize)
        })
        .collect();

    FrameOutput { commands, readouts }
}

/// The fixed mid-arena divider, independent of entity state.
fn divider(viewport_w: f32, viewport_h: f32, width: f32) -> DrawCommand {
    let mid = viewport_w / 2.0;
    DrawCommand::Line {
        from: Vec2::new(mid, 0.0),
        to: Vec2::new(mid, viewport_h),
        color: colors::DIVIDER,
        width,
    }
}

/// A filled, outlined sprite rectangle rotated about its own center.
fn entity_command(entity: &Entity, outline_width: f32) -> DrawCommand {
    DrawCommand::Rect {
        center: entity.center(),
        size: entity.size,
        rotation: entity.rotation,
        fill: colors::entity_color(&entity.kind),
        stroke: Stroke {
            color: colors::OUTLINE,
            width: outline_width,
        },
    }
}
