//! Penalty Shootout - swipe-to-shoot mini-game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (layout, keeper, gestures, shots, scoring)
//! - `shell`: Modal session lifecycle and render-agnostic scene description
//! - `settings`: Player preferences
//! - `tuning`: Data-driven game balance

pub mod settings;
pub mod shell;
pub mod sim;
pub mod tuning;

pub use settings::{Language, Settings};
pub use shell::{PenaltySession, Scene};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the session will integrate at once (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Clamp that tolerates an inverted range by collapsing it onto `lo`.
///
/// `f32::clamp` panics when `lo > hi`, which degenerate layouts can produce.
#[inline]
pub fn clamp_span(value: f32, lo: f32, hi: f32) -> f32 {
    let hi = hi.max(lo);
    if value.is_nan() {
        return lo;
    }
    value.max(lo).min(hi)
}

/// Replace NaN/infinite/negative lengths with zero
#[inline]
pub fn sanitize_len(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
