//! HUD models and the sim-to-UI event queue

pub mod mailbox;
pub mod state;
pub mod summary;

pub use mailbox::{mailbox, UiEvent, UiInbox, UiMailbox};
pub use state::{HudState, PlayerHud, WinnerOverlay};
pub use summary::{AmmoColorClass, AmmoSummary, FighterReadout, HealthSummary};
