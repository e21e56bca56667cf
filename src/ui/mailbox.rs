//! Sim-to-UI message queue
//!
//! The simulation thread never touches widgets. It posts plain events
//! here; the UI thread drains them once per frame. The winner gate is a
//! one-shot: later announcements are dropped, not queued.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

/// Events crossing from the simulation thread to the UI thread
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// End of match; carries the winner's display name.
    Winner(String),
}

/// Sending half. Cheap to clone and hand to the simulation thread.
#[derive(Clone)]
pub struct UiMailbox {
    tx: Sender<UiEvent>,
    winner_fired: Arc<AtomicBool>,
}

/// Receiving half, owned by the UI thread.
pub struct UiInbox {
    rx: Receiver<UiEvent>,
}

/// Create a connected mailbox/inbox pair.
pub fn mailbox() -> (UiMailbox, UiInbox) {
    let (tx, rx) = channel();
    (
        UiMailbox {
            tx,
            winner_fired: Arc::new(AtomicBool::new(false)),
        },
        UiInbox { rx },
    )
}

impl UiMailbox {
    /// Announce the match winner. At most one announcement per match goes
    /// through; the call never blocks and is safe from any thread.
    pub fn announce_winner(&self, name: &str) {
        if self.winner_fired.swap(true, Ordering::SeqCst) {
            return;
        }
        // The inbox may already be gone during shutdown; nothing to do then.
        let _ = self.tx.send(UiEvent::Winner(name.to_string()));
        tracing::info!("Winner announced: {}", name);
    }
}

impl UiInbox {
    /// Drain pending events without blocking. Call once per UI frame.
    pub fn drain(&self) -> Vec<UiEvent> {
        self.rx.try_iter().collect()
    }
}
