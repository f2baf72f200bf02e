//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Animated values are tweens sampled from owned clocks
//! - No rendering or platform dependencies

pub mod easing;
pub mod gesture;
pub mod keeper;
pub mod layout;
pub mod shot;
pub mod state;
pub mod tick;

pub use easing::{Easing, Tween, TweenPair};
pub use gesture::{GestureCapture, ShotVector, is_shot_attempt};
pub use keeper::{KeeperScheduler, KeeperSnapshot};
pub use layout::{FieldLayout, Rect};
pub use shot::{BallPose, Flight, FlightStatus, ShotPlan, ShotRejection};
pub use state::{
    BallState, GameEvent, GameMessage, GameState, MAX_PENDING_EVENTS, Outcome, Scoreboard,
    ShotPhase, ShotResponse,
};
pub use tick::{TickInput, tick};
