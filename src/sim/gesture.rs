//! Swipe capture
//!
//! Only presses that begin on (or near) the ball are tracked. The release
//! displacement is passed on untouched: no smoothing, no velocity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::layout::FieldLayout;

/// Raw release displacement of one swipe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotVector {
    pub dx: f32,
    pub dy: f32,
}

impl ShotVector {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Displacement between press and release
    pub fn between(start: Vec2, end: Vec2) -> Self {
        let d = end - start;
        Self::new(d.x, d.y)
    }
}

/// Does a press starting at `start` count as grabbing the ball?
pub fn is_shot_attempt(layout: &FieldLayout, start: Vec2) -> bool {
    start.is_finite() && layout.grab_zone.contains_point_strict(start)
}

/// Press/release tracker, armed only while the ball is at rest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GestureCapture {
    armed: bool,
    /// Press position of the swipe being tracked
    start: Option<Vec2>,
}

impl GestureCapture {
    /// New capture, armed
    pub fn new() -> Self {
        Self {
            armed: true,
            start: None,
        }
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    #[inline]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Stop accepting presses and drop any swipe in progress
    pub fn disarm(&mut self) {
        self.armed = false;
        self.start = None;
    }

    /// Pointer pressed; returns true if this press is now tracked as a shot attempt
    pub fn press(&mut self, layout: &FieldLayout, point: Vec2) -> bool {
        if !self.armed || !is_shot_attempt(layout, point) {
            self.start = None;
            return false;
        }
        self.start = Some(point);
        true
    }

    /// Pointer released; yields the displacement if a shot attempt was tracked
    pub fn release(&mut self, point: Vec2) -> Option<ShotVector> {
        let start = self.start.take()?;
        if !self.armed || !point.is_finite() {
            return None;
        }
        Some(ShotVector::between(start, point))
    }
}
