//! Arena view orchestration
//!
//! Owns the render-order entity list and the HUD models, and turns the
//! current simulation state into one frame of output per call. The view
//! creates the two initial fighters and nothing else; projectiles are
//! appended and removed at the simulation's request.

use crate::core::types::{EntityId, Frame, PlayerSlot};
use crate::entity::{Entity, FighterFactory, StockFighters};
use crate::render::{render_frame, FrameOutput};
use crate::scene::layout;
use crate::ui::{mailbox, HudState, UiEvent, UiInbox, UiMailbox};
use glam::Vec2;

pub struct ArenaView {
    /// Render order = list order; later entries draw on top.
    entities: Vec<Entity>,
    players: [EntityId; 2],
    viewport: Vec2,
    pub hud: HudState,
    mailbox: UiMailbox,
    inbox: UiInbox,
    frame_count: Frame,
}

impl ArenaView {
    /// Set up a match with the stock fighter loadouts.
    pub fn new(viewport_w: f32, viewport_h: f32, p1_kind: &str, p2_kind: &str) -> Self {
        Self::with_factory(viewport_w, viewport_h, p1_kind, p2_kind, &StockFighters)
    }

    /// Set up a match with a custom fighter factory.
    pub fn with_factory(
        viewport_w: f32,
        viewport_h: f32,
        p1_kind: &str,
        p2_kind: &str,
        factory: &dyn FighterFactory,
    ) -> Self {
        let (p1, p2) = layout(viewport_w, viewport_h, p1_kind, p2_kind, factory);
        let players = [p1.id, p2.id];
        let hud = HudState::new(
            p1.fighter().map(|f| f.class).unwrap_or_default(),
            p2.fighter().map(|f| f.class).unwrap_or_default(),
        );
        let (mailbox, inbox) = mailbox();

        tracing::info!(
            "Arena ready: {} vs {} on {}x{}",
            hud.players[0].label,
            hud.players[1].label,
            viewport_w,
            viewport_h
        );

        Self {
            entities: vec![p1, p2],
            players,
            viewport: Vec2::new(viewport_w, viewport_h),
            hud,
            mailbox,
            inbox,
            frame_count: 0,
        }
    }

    /// Handle for the simulation thread to post UI events through.
    pub fn mailbox(&self) -> UiMailbox {
        self.mailbox.clone()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    pub fn player(&self, slot: PlayerSlot) -> Option<&Entity> {
        self.find(self.player_id(slot))
    }

    pub fn player_mut(&mut self, slot: PlayerSlot) -> Option<&mut Entity> {
        let id = self.player_id(slot);
        self.entities.iter_mut().find(|entity| entity.id == id)
    }

    pub fn player_id(&self, slot: PlayerSlot) -> EntityId {
        match slot {
            PlayerSlot::P1 => self.players[0],
            PlayerSlot::P2 => self.players[1],
        }
    }

    /// Append a projectile sprite. It draws on top of earlier entities.
    pub fn spawn_projectile(&mut self, pos: Vec2, size: Vec2, rotation: f32) -> EntityId {
        let projectile = Entity::projectile(pos, size, rotation);
        let id = projectile.id;
        self.entities.push(projectile);
        id
    }

    /// Remove an expired or consumed entity. The two tracked fighters are
    /// never removed this way.
    pub fn remove_entity(&mut self, id: EntityId) {
        if self.players.contains(&id) {
            return;
        }
        self.entities.retain(|entity| entity.id != id);
    }

    /// Track a window resize. Fighter positions are one-time layout and do
    /// not move; only viewport-derived drawing (the divider) follows.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    pub fn frame_count(&self) -> Frame {
        self.frame_count
    }

    /// Produce one frame: drain pending UI events, derive draw commands
    /// and readouts from current entity state, and fold the readouts into
    /// the HUD models.
    pub fn frame(&mut self) -> FrameOutput {
        for event in self.inbox.drain() {
            match event {
                UiEvent::Winner(name) => self.hud.set_winner(&name),
            }
        }

        let output = render_frame(
            self.viewport.x,
            self.viewport.y,
            &self.entities,
            &self.players,
        );
        self.hud.apply(&output.readouts);
        self.frame_count += 1;
        output
    }

    fn find(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id == id)
    }
}
