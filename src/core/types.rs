//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for arena entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

/// Frame counter (one frame = one render call)
pub type Frame = u64;

/// Which HUD corner a tracked fighter reports to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    P1,
    P2,
}

impl PlayerSlot {
    /// Short display prefix used by the HUD labels ("P1: ...")
    pub fn label(self) -> &'static str {
        match self {
            PlayerSlot::P1 => "P1",
            PlayerSlot::P2 => "P2",
        }
    }
}
