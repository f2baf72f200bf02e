//! Timing curves and tweens
//!
//! Every animated value in the game is a tween sampled at a normalized progress;
//! nothing integrates velocities.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Easing curve mapping progress `t` in [0, 1] to [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    OutCubic,
    InOutCubic,
    InOutSine,
}

impl Easing {
    /// Apply the curve; input is clamped to [0, 1]
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::InQuad => t * t,
            Easing::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::OutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::InOutSine => (1.0 - (PI * t).cos()) / 2.0,
        }
    }
}

/// Linear interpolation
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// One eased segment from `from` to `to`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, easing: Easing) -> Self {
        Self { from, to, easing }
    }

    /// Sample at progress `t` in [0, 1]
    pub fn sample(&self, t: f32) -> f32 {
        lerp(self.from, self.to, self.easing.apply(t))
    }
}

/// Two tweens back to back; `split` is the fraction of the whole spent on the first
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TweenPair {
    pub first: Tween,
    pub second: Tween,
    pub split: f32,
}

impl TweenPair {
    pub fn new(first: Tween, second: Tween, split: f32) -> Self {
        Self {
            first,
            second,
            split: split.clamp(0.0, 1.0),
        }
    }

    /// Sample at progress `t` in [0, 1]
    pub fn sample(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if self.split <= 0.0 {
            return self.second.sample(t);
        }
        if t < self.split {
            self.first.sample(t / self.split)
        } else if self.split >= 1.0 {
            self.first.sample(1.0)
        } else {
            self.second.sample((t - self.split) / (1.0 - self.split))
        }
    }
}
