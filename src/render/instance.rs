//! Instance data for GPU instancing rasterizers.

use super::commands::DrawCommand;
use bytemuck::{Pod, Zeroable};

/// GPU instance data for one rectangle sprite. 28 bytes, tightly packed.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct RectInstance {
    /// Rectangle center in screen coordinates.
    pub center: [f32; 2], // 8 bytes
    /// Width/height.
    pub size: [f32; 2], // 8 bytes
    /// Rotation about the center, in radians.
    pub rotation: f32, // 4 bytes
    /// Packed fill RGBA (see Color::to_u32).
    pub fill: u32, // 4 bytes
    /// Packed stroke RGBA.
    pub stroke: u32, // 4 bytes
}

impl RectInstance {
    /// Build an instance from a rectangle command. Lines have no instance
    /// form and return None.
    pub fn from_command(command: &DrawCommand) -> Option<Self> {
        match command {
            DrawCommand::Rect {
                center,
                size,
                rotation,
                fill,
                stroke,
            } => Some(Self {
                center: [center.x, center.y],
                size: [size.x, size.y],
                rotation: rotation.to_radians(),
                fill: fill.to_u32(),
                stroke: stroke.color.to_u32(),
            }),
            DrawCommand::Line { .. } => None,
        }
    }

    /// Batch every rectangle in a command list, preserving z-order.
    pub fn batch(commands: &[DrawCommand]) -> Vec<Self> {
        commands.iter().filter_map(Self::from_command).collect()
    }
}
