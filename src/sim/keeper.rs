//! Keeper oscillation
//!
//! The keeper sweeps between its bounds on a fixed schedule and never looks at
//! the ball. Where it happens to be when a shot lands decides saves.

use serde::{Deserialize, Serialize};

use super::easing::{Easing, lerp};
use super::layout::FieldLayout;

/// Copy of the keeper position at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeeperSnapshot {
    /// Left edge of the glove box
    pub left: f32,
    /// Scheduler clock when the snapshot was taken
    pub elapsed: f32,
}

/// Recurring ping-pong scheduler for the keeper's left edge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeeperScheduler {
    left_bound: f32,
    right_bound: f32,
    /// Seconds per sweep in one direction
    leg_duration: f32,
    /// Time within the current cycle, kept in [0, 2 * leg_duration)
    elapsed: f32,
}

impl KeeperScheduler {
    /// Fresh scheduler at the left bound, time zero
    pub fn new(layout: &FieldLayout, leg_duration: f32) -> Self {
        Self {
            left_bound: layout.keeper_left_bound,
            right_bound: layout.keeper_right_bound.max(layout.keeper_left_bound),
            leg_duration: if leg_duration.is_finite() { leg_duration.max(0.0) } else { 0.0 },
            elapsed: 0.0,
        }
    }

    /// Start the cycle at a given clock offset
    pub fn with_elapsed(mut self, elapsed: f32) -> Self {
        self.elapsed = 0.0;
        self.advance(elapsed);
        self
    }

    #[inline]
    pub fn left_bound(&self) -> f32 {
        self.left_bound
    }

    #[inline]
    pub fn right_bound(&self) -> f32 {
        self.right_bound
    }

    /// Full left-right-left cycle length
    #[inline]
    pub fn period(&self) -> f32 {
        self.leg_duration * 2.0
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Advance the clock by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        let period = self.period();
        if period <= 0.0 || !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.elapsed = (self.elapsed + dt).rem_euclid(period);
        // rem_euclid can round up to exactly `period`
        if self.elapsed >= period {
            self.elapsed = 0.0;
        }
    }

    /// Current left edge of the glove box
    pub fn offset(&self) -> f32 {
        let leg = self.leg_duration;
        if leg <= 0.0 {
            return self.left_bound;
        }
        let (from, to, t) = if self.elapsed < leg {
            (self.left_bound, self.right_bound, self.elapsed / leg)
        } else {
            (self.right_bound, self.left_bound, (self.elapsed - leg) / leg)
        };
        let value = lerp(from, to, Easing::InOutSine.apply(t));
        value.clamp(self.left_bound, self.right_bound)
    }

    /// Single read of the current position
    pub fn snapshot(&self) -> KeeperSnapshot {
        KeeperSnapshot {
            left: self.offset(),
            elapsed: self.elapsed,
        }
    }
}
