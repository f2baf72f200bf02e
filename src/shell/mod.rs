//! Presentation shell
//!
//! Modal lifecycle plus a scene description a front end can draw.

pub mod scene;
pub mod session;

pub use scene::{BallSprite, NET_COLS, NET_ROWS, Scene, Segment, StatPill, net_grid};
pub use session::PenaltySession;
