//! Game state and core simulation types
//!
//! One `GameState` lives for one open modal. Dropping it cancels everything it
//! owns: keeper schedule, flight, pending reset.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::gesture::{GestureCapture, ShotVector};
use super::keeper::{KeeperScheduler, KeeperSnapshot};
use super::layout::FieldLayout;
use super::shot::{BallPose, Flight, ShotPlan, ShotRejection};
use crate::settings::{Language, Settings};
use crate::tuning::Tuning;

/// How a resolved shot ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Goal,
    Save,
    Miss,
}

/// Session tallies, one counter per outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub goals: u32,
    pub saves: u32,
    pub missed: u32,
}

impl Scoreboard {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Goal => self.goals = self.goals.saturating_add(1),
            Outcome::Save => self.saves = self.saves.saturating_add(1),
            Outcome::Miss => self.missed = self.missed.saturating_add(1),
        }
    }

    /// Resolved shots so far
    pub fn total(&self) -> u32 {
        self.goals
            .saturating_add(self.saves)
            .saturating_add(self.missed)
    }
}

/// The single user-facing message slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMessage {
    /// Waiting for a swipe
    Prompt,
    /// Swipe rejected
    TooWeak,
    Missed,
    Saved,
    Scored,
}

impl GameMessage {
    pub fn for_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Goal => GameMessage::Scored,
            Outcome::Save => GameMessage::Saved,
            Outcome::Miss => GameMessage::Missed,
        }
    }

    pub fn text(&self, language: Language) -> &'static str {
        match (language, self) {
            (Language::English, GameMessage::Prompt) => "Swipe the ball up to shoot",
            (Language::English, GameMessage::TooWeak) => "Too weak! Swipe up harder",
            (Language::English, GameMessage::Missed) => "Off target!",
            (Language::English, GameMessage::Saved) => "Saved! 🧤",
            (Language::English, GameMessage::Scored) => "Goal! ⚽️",
            (Language::Hebrew, GameMessage::Prompt) => "החלק את הכדור כלפי מעלה כדי לבעוט",
            (Language::Hebrew, GameMessage::TooWeak) => "בעיטה חלשה מדי — גרור למעלה חזק יותר",
            (Language::Hebrew, GameMessage::Missed) => "מחוץ למסגרת!",
            (Language::Hebrew, GameMessage::Saved) => "הצלה! 🧤",
            (Language::Hebrew, GameMessage::Scored) => "גול! ⚽️",
        }
    }
}

/// Committed ball pose, written only at landing and at reset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    pub committed: BallPose,
}

impl BallState {
    pub fn at(start: Vec2) -> Self {
        Self {
            committed: BallPose::at_rest(start),
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.committed.pos
    }
}

/// Shot lifecycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ShotPhase {
    /// Ball at rest, gestures accepted
    Idle,
    /// Ball travelling toward the goal
    InFlight(Flight),
    /// Result on screen; ball resets when the timer runs out
    Resolved { outcome: Outcome, reset_in: f32 },
}

impl ShotPhase {
    pub fn name(&self) -> &'static str {
        match self {
            ShotPhase::Idle => "Idle",
            ShotPhase::InFlight(_) => "InFlight",
            ShotPhase::Resolved { .. } => "Resolved",
        }
    }
}

/// Things that happened during a tick, drained by the shell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotTaken(ShotPlan),
    ShotRejected(ShotRejection),
    /// Position tracks completed at this committed pose
    FlightLanded { pos: Vec2 },
    ShotResolved {
        outcome: Outcome,
        /// Ball center x at the goal line
        ball_center_x: f32,
        keeper: KeeperSnapshot,
    },
    BallReset,
}

/// Undrained events kept before the oldest are dropped
pub const MAX_PENDING_EVENTS: usize = 64;

/// Answer to a `shoot` call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShotResponse {
    Taken(ShotPlan),
    Rejected(ShotRejection),
    /// A shot is already underway
    Busy,
}

/// Complete state of one game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub layout: FieldLayout,
    pub tuning: Tuning,
    pub settings: Settings,
    pub ball: BallState,
    pub keeper: KeeperScheduler,
    pub gesture: GestureCapture,
    pub phase: ShotPhase,
    pub scoreboard: Scoreboard,
    pub message: GameMessage,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events since the last drain. Hosts that call `tick` directly should
    /// drain them; past `MAX_PENDING_EVENTS` the oldest are discarded.
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh session: ball on the spot, keeper at its left bound, empty scoreboard
    pub fn new(viewport: Vec2, tuning: Tuning, settings: Settings) -> Self {
        let layout = FieldLayout::new(viewport.x, viewport.y, &tuning);
        let keeper = KeeperScheduler::new(&layout, tuning.keeper.leg_duration);
        Self {
            ball: BallState::at(layout.ball_start),
            keeper,
            gesture: GestureCapture::new(),
            phase: ShotPhase::Idle,
            scoreboard: Scoreboard::default(),
            message: GameMessage::Prompt,
            time_ticks: 0,
            events: Vec::new(),
            layout,
            tuning,
            settings,
        }
    }

    /// Current message text in the player's language
    pub fn message_text(&self) -> &'static str {
        self.message.text(self.settings.language)
    }

    /// Pose to draw: live flight sample while in flight, committed otherwise
    pub fn ball_pose(&self) -> BallPose {
        match &self.phase {
            ShotPhase::InFlight(flight) => flight.pose(),
            _ => self.ball.committed,
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, ShotPhase::Idle)
    }

    /// Take a shot from a release displacement
    pub fn shoot(&mut self, dx: f32, dy: f32) -> ShotResponse {
        if !self.is_idle() {
            return ShotResponse::Busy;
        }
        let vector = ShotVector::new(dx, dy);
        match ShotPlan::from_swipe(vector, &self.layout, &self.tuning.shot) {
            Ok(plan) => {
                log::debug!(
                    "Shot ({:.1}, {:.1}) -> target=({:.1}, {:.1}) power={:.2} duration={:.3}s",
                    dx,
                    dy,
                    plan.target_x,
                    plan.target_y,
                    plan.power,
                    plan.duration
                );
                let flight = Flight::new(
                    plan,
                    self.ball.position(),
                    self.tuning.shot.scale_dip,
                    self.settings.effective_spin(),
                    self.settings.reduced_motion,
                );
                self.gesture.disarm();
                self.phase = ShotPhase::InFlight(flight);
                self.push_event(GameEvent::ShotTaken(plan));
                ShotResponse::Taken(plan)
            }
            Err(rejection) => {
                log::debug!("Shot ({:.1}, {:.1}) rejected: {:?}", dx, dy, rejection);
                self.message = GameMessage::TooWeak;
                self.push_event(GameEvent::ShotRejected(rejection));
                ShotResponse::Rejected(rejection)
            }
        }
    }

    /// Judge the committed ball position against the goal and a keeper snapshot
    pub fn resolve(&mut self, keeper: KeeperSnapshot) -> Outcome {
        let center = self.layout.ball_center(self.ball.position());
        let outcome = if !self.layout.is_inside_goal_mouth(center.x, self.ball.position().y) {
            Outcome::Miss
        } else if self.layout.is_saved_by_keeper(center.x, keeper.left) {
            Outcome::Save
        } else {
            Outcome::Goal
        };

        self.scoreboard.record(outcome);
        self.message = GameMessage::for_outcome(outcome);
        self.phase = ShotPhase::Resolved {
            outcome,
            reset_in: self.tuning.shot.reset_delay,
        };
        self.push_event(GameEvent::ShotResolved {
            outcome,
            ball_center_x: center.x,
            keeper,
        });
        log::info!(
            "Shot resolved: {:?} (ball x={:.1}, keeper left={:.1}) score={}/{}/{}",
            outcome,
            center.x,
            keeper.left,
            self.scoreboard.goals,
            self.scoreboard.saves,
            self.scoreboard.missed
        );
        outcome
    }

    /// Put the ball back on the spot and accept swipes again
    pub fn reset_ball(&mut self) {
        self.ball = BallState::at(self.layout.ball_start);
        self.phase = ShotPhase::Idle;
        self.message = GameMessage::Prompt;
        self.gesture.arm();
        self.push_event(GameEvent::BallReset);
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            let overflow = self.events.len() + 1 - MAX_PENDING_EVENTS;
            self.events.drain(..overflow);
        }
        self.events.push(event);
    }

    /// Take pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
