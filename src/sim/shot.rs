//! Shot planning and flight animation
//!
//! A swipe becomes a `ShotPlan` once; the plan then drives four tracks (x, y,
//! rotation, scale) that share one clock and finish together.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::easing::{Easing, Tween, TweenPair};
use super::gesture::ShotVector;
use super::layout::FieldLayout;
use crate::clamp_span;
use crate::tuning::ShotTuning;

/// Why a swipe did not become a shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotRejection {
    /// Not far enough upward (or not upward at all)
    TooWeak,
}

/// Everything derived from one accepted swipe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotPlan {
    /// Landing top-left x of the ball
    pub target_x: f32,
    /// Landing top-left y of the ball
    pub target_y: f32,
    /// Flight time in seconds
    pub duration: f32,
    /// Height of the cosmetic arc bump
    pub arc_height: f32,
    /// Normalized swipe strength in [min_power, 1]
    pub power: f32,
    /// Total spin over the flight, degrees
    pub spin: f32,
}

impl ShotPlan {
    /// Turn a swipe into a plan, or reject it
    pub fn from_swipe(
        vector: ShotVector,
        layout: &FieldLayout,
        tuning: &ShotTuning,
    ) -> Result<Self, ShotRejection> {
        // dy must be strictly below the negative threshold; NaN fails too
        if !(vector.dy < -tuning.min_upward_swipe) || !vector.dx.is_finite() {
            return Err(ShotRejection::TooWeak);
        }

        let power = clamp_span(
            vector.dy.abs() / tuning.max_swipe_length,
            tuning.min_power,
            1.0,
        );
        let duration = tuning.base_duration - power * tuning.power_duration_cut;
        let arc_height = tuning.base_arc + power * tuning.power_arc;

        let target_x = clamp_span(
            layout.ball_start.x + vector.dx * tuning.aim_sensitivity,
            layout.goal.left + tuning.target_inset,
            layout.goal.right() - layout.ball_size - tuning.target_inset,
        );
        let target_y = layout.goal.top + tuning.target_depth;

        Ok(Self {
            target_x,
            target_y,
            duration,
            arc_height,
            power,
            spin: tuning.spin_rate * duration,
        })
    }
}

/// Where the ball is drawn on a given frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallPose {
    /// Sprite top-left
    pub pos: Vec2,
    /// Degrees
    pub rotation: f32,
    pub scale: f32,
}

impl BallPose {
    pub fn at_rest(pos: Vec2) -> Self {
        Self {
            pos,
            rotation: 0.0,
            scale: 1.0,
        }
    }
}

/// Result of advancing a flight
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightStatus {
    InFlight,
    /// Position tracks completed; carries the final pose
    Landed(BallPose),
}

/// Fraction of the flight spent rising into the arc bump
const ARC_RISE_SPLIT: f32 = 0.4;
/// Scale dips over the first half and recovers over the second
const SCALE_SPLIT: f32 = 0.5;

/// One-shot animation of the ball toward a plan's target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    pub plan: ShotPlan,
    x: Tween,
    y: Tween,
    /// Upward offset layered on y, zero at both ends
    arc: TweenPair,
    rotation: Tween,
    scale: TweenPair,
    elapsed: f32,
    landed: bool,
}

impl Flight {
    /// Start a flight from `from`; `reduced_motion` drops the arc and depth scale
    pub fn new(plan: ShotPlan, from: Vec2, scale_dip: f32, spin: bool, reduced_motion: bool) -> Self {
        let arc_height = if reduced_motion { 0.0 } else { plan.arc_height };
        let dip = if reduced_motion { 1.0 } else { scale_dip };
        let spin_to = if spin { plan.spin } else { 0.0 };
        Self {
            plan,
            x: Tween::new(from.x, plan.target_x, Easing::InOutCubic),
            y: Tween::new(from.y, plan.target_y, Easing::OutCubic),
            arc: TweenPair::new(
                Tween::new(0.0, arc_height, Easing::InOutQuad),
                Tween::new(arc_height, 0.0, Easing::OutQuad),
                ARC_RISE_SPLIT,
            ),
            rotation: Tween::new(0.0, spin_to, Easing::Linear),
            scale: TweenPair::new(
                Tween::new(1.0, dip, Easing::OutQuad),
                Tween::new(dip, 1.0, Easing::InQuad),
                SCALE_SPLIT,
            ),
            elapsed: 0.0,
            landed: false,
        }
    }

    /// Normalized progress in [0, 1]; a non-positive or NaN duration counts as done
    pub fn progress(&self) -> f32 {
        if !(self.plan.duration > 0.0) {
            1.0
        } else {
            (self.elapsed / self.plan.duration).clamp(0.0, 1.0)
        }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Interpolated pose at the current progress
    pub fn pose(&self) -> BallPose {
        let t = self.progress();
        BallPose {
            // Screen y grows downward, so the arc lifts by subtracting
            pos: Vec2::new(self.x.sample(t), self.y.sample(t) - self.arc.sample(t)),
            rotation: self.rotation.sample(t),
            scale: self.scale.sample(t),
        }
    }

    /// Advance the shared clock; reports `Landed` exactly once, on the completing tick
    pub fn advance(&mut self, dt: f32) -> FlightStatus {
        if self.landed {
            return FlightStatus::InFlight;
        }
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        // Tolerate accumulated float drift on the last tick
        if self.plan.duration - self.elapsed <= 1e-5 {
            self.elapsed = self.plan.duration;
        }
        if self.is_complete() {
            self.landed = true;
            FlightStatus::Landed(self.pose())
        } else {
            FlightStatus::InFlight
        }
    }
}
