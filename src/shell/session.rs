//! Modal lifecycle for the game
//!
//! The host app opens and closes the modal; the session owns at most one live
//! `GameState`. Closing drops it, which cancels the keeper schedule, any flight
//! and any pending reset in one go.

use glam::Vec2;

use super::scene::Scene;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, Scoreboard, TickInput, tick};
use crate::tuning::Tuning;

/// The game modal
pub struct PenaltySession {
    viewport: Vec2,
    settings: Settings,
    tuning: Tuning,
    /// Live game while the modal is visible
    game: Option<GameState>,
    accumulator: f32,
    /// Pointer events waiting for the next tick
    input: TickInput,
    on_close: Box<dyn FnMut()>,
}

impl std::fmt::Debug for PenaltySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PenaltySession")
            .field("viewport", &self.viewport)
            .field("visible", &self.is_visible())
            .field("accumulator", &self.accumulator)
            .finish_non_exhaustive()
    }
}

impl PenaltySession {
    /// Create a closed session; `on_close` fires when the player closes the modal.
    /// Tuning that fails validation is replaced by the defaults.
    pub fn new(
        viewport: Vec2,
        settings: Settings,
        tuning: Tuning,
        on_close: impl FnMut() + 'static,
    ) -> Self {
        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(e) => {
                log::warn!("Rejecting tuning ({e}), using defaults");
                Tuning::default()
            }
        };
        Self {
            viewport,
            settings,
            tuning,
            game: None,
            accumulator: 0.0,
            input: TickInput::default(),
            on_close: Box::new(on_close),
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.game.is_some()
    }

    /// Host-controlled visibility; hiding does not fire `on_close`
    pub fn set_visible(&mut self, visible: bool) {
        match (visible, self.is_visible()) {
            (true, false) => self.open(),
            (false, true) => self.teardown(),
            _ => {}
        }
    }

    /// Player closed the modal: tear down and notify the host
    pub fn close(&mut self) {
        if self.is_visible() {
            self.teardown();
            (self.on_close)();
        }
    }

    /// New viewport applies from the next open
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Change preferences; a visible game picks them up immediately
    pub fn set_settings(&mut self, settings: Settings) {
        if let Some(game) = self.game.as_mut() {
            game.settings = settings.clone();
        }
        self.settings = settings;
    }

    fn open(&mut self) {
        let game = GameState::new(self.viewport, self.tuning.clone(), self.settings.clone());
        log::info!(
            "Penalty game opened ({}x{}, keeper range [{:.1}, {:.1}])",
            game.layout.viewport.x,
            game.layout.viewport.y,
            game.layout.keeper_left_bound,
            game.layout.keeper_right_bound
        );
        self.game = Some(game);
        self.accumulator = 0.0;
        self.input = TickInput::default();
    }

    fn teardown(&mut self) {
        if let Some(game) = self.game.take() {
            log::info!(
                "Penalty game closed in phase {} after {} ticks (goals={}, saves={}, missed={})",
                game.phase.name(),
                game.time_ticks,
                game.scoreboard.goals,
                game.scoreboard.saves,
                game.scoreboard.missed
            );
        }
        self.accumulator = 0.0;
        self.input = TickInput::default();
    }

    /// Pointer pressed on the field
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        if self.is_visible() {
            self.input.pointer_down = Some(Vec2::new(x, y));
        }
    }

    /// Pointer released
    pub fn pointer_up(&mut self, x: f32, y: f32) {
        if self.is_visible() {
            self.input.pointer_up = Some(Vec2::new(x, y));
        }
    }

    /// Run fixed ticks for a frame's worth of time; returns what happened
    pub fn advance(&mut self, frame_dt: f32) -> Vec<GameEvent> {
        let Some(game) = self.game.as_mut() else {
            return Vec::new();
        };
        let dt = if frame_dt.is_finite() { frame_dt.clamp(0.0, MAX_FRAME_DT) } else { 0.0 };
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = std::mem::take(&mut self.input);
            tick(game, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS && self.accumulator >= SIM_DT {
            log::debug!("Dropping {:.4}s of backlog", self.accumulator);
            self.accumulator = 0.0;
        }
        game.drain_events()
    }

    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    pub fn game_mut(&mut self) -> Option<&mut GameState> {
        self.game.as_mut()
    }

    pub fn scoreboard(&self) -> Option<Scoreboard> {
        self.game.as_ref().map(|g| g.scoreboard)
    }

    /// Current frame, if the modal is visible
    pub fn scene(&self) -> Option<Scene> {
        self.game.as_ref().map(Scene::build)
    }
}
