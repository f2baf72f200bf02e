//! Field layout and goal geometry
//!
//! Built once per session from the viewport. Screen coordinates: x grows right,
//! y grows down, so "upward" toward the goal is negative y. Ball positions are
//! the top-left corner of the ball sprite; collision tests use its center.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;
use crate::{clamp_span, sanitize_len};

/// Axis-aligned rectangle in layout units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// True if `other` lies entirely within `self` (edges inclusive)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Strict interior test, edges excluded
    pub fn contains_point_strict(&self, p: Vec2) -> bool {
        p.x > self.left && p.x < self.right() && p.y > self.top && p.y < self.bottom()
    }
}

/// Immutable field geometry for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldLayout {
    /// Sanitized viewport size
    pub viewport: Vec2,
    /// Field container
    pub field: Rect,
    /// Goal frame (posts and crossbar)
    pub goal: Rect,
    /// Inset from posts/crossbar for the on-target test
    pub goal_margin: f32,
    pub ball_size: f32,
    /// Ball sprite top-left at rest
    pub ball_start: Vec2,
    pub glove_width: f32,
    pub glove_height: f32,
    pub glove_top: f32,
    /// Extra reach on each side of the glove box
    pub glove_pad: f32,
    /// Keeper left-edge travel range
    pub keeper_left_bound: f32,
    pub keeper_right_bound: f32,
    /// Penalty box line y
    pub penalty_line_y: f32,
    /// Penalty spot square
    pub penalty_spot: Rect,
    /// Press area that counts as grabbing the ball
    pub grab_zone: Rect,
}

impl FieldLayout {
    /// Compute the layout for a viewport; degenerate sizes are clamped, never rejected
    pub fn new(viewport_width: f32, viewport_height: f32, tuning: &Tuning) -> Self {
        let f = &tuning.field;
        let k = &tuning.keeper;
        let g = &tuning.gesture;

        let width = sanitize_len(viewport_width);
        let height = sanitize_len(viewport_height);

        let field_height = f.field_min_height.max(height * f.field_height_ratio);
        let field = Rect::new(0.0, 0.0, width, field_height);

        let goal_width = (width * f.goal_width_ratio).min(f.goal_max_width);
        let goal_height = f.goal_height.min(field_height);
        let goal_top = clamp_span(f.goal_top, 0.0, field_height - goal_height);
        let goal = Rect::new((width - goal_width) / 2.0, goal_top, goal_width, goal_height);

        let ball_size = f.ball_size;
        let ball_start_x = width / 2.0 - ball_size / 2.0;
        let ball_start_y = clamp_span(
            (height * f.ball_start_ratio).min(goal_top + f.ball_start_max_drop),
            goal.bottom(),
            field_height - ball_size,
        );

        let margin = k.margin.min(goal_width / 2.0);
        let glove_width = k.glove_width.min((goal_width - 2.0 * margin).max(0.0));
        let keeper_left_bound = goal.left + margin;
        let keeper_right_bound = (goal.right() - glove_width - margin).max(keeper_left_bound);

        let penalty_line_y = goal.bottom() + f.penalty_line_gap;
        let penalty_spot = Rect::new(
            width / 2.0 - f.spot_size / 2.0,
            ball_start_y - f.spot_offset,
            f.spot_size,
            f.spot_size,
        );

        let grab_zone = Rect::new(
            ball_start_x - g.grab_left,
            ball_start_y - g.grab_above,
            g.grab_left + g.grab_right,
            g.grab_above + g.grab_below,
        );

        let layout = Self {
            viewport: Vec2::new(width, height),
            field,
            goal,
            goal_margin: f.goal_margin,
            ball_size,
            ball_start: Vec2::new(ball_start_x, ball_start_y),
            glove_width,
            glove_height: k.glove_height,
            glove_top: goal_top + k.glove_top_offset,
            glove_pad: k.glove_pad,
            keeper_left_bound,
            keeper_right_bound,
            penalty_line_y,
            penalty_spot,
            grab_zone,
        };
        log::debug!(
            "Layout for {}x{}: goal={:?} ball_start={:?} keeper=[{}, {}]",
            width,
            height,
            layout.goal,
            layout.ball_start,
            layout.keeper_left_bound,
            layout.keeper_right_bound
        );
        layout
    }

    /// Ball center for a given sprite top-left
    #[inline]
    pub fn ball_center(&self, top_left: Vec2) -> Vec2 {
        top_left + Vec2::splat(self.ball_size / 2.0)
    }

    /// On-target test: inside the posts and below the crossbar, with a small inset
    pub fn is_inside_goal_mouth(&self, x_center: f32, y: f32) -> bool {
        let inside_x = x_center >= self.goal.left + self.goal_margin
            && x_center <= self.goal.right() - self.goal_margin;
        let inside_y = y <= self.goal.bottom() - self.goal_margin;
        inside_x && inside_y
    }

    /// Glove test at the goal line, widened by the pad on both sides
    pub fn is_saved_by_keeper(&self, x_center: f32, keeper_left: f32) -> bool {
        let k_left = keeper_left - self.glove_pad;
        let k_right = keeper_left + self.glove_width + self.glove_pad;
        x_center >= k_left && x_center <= k_right
    }

    /// Keeper glove box for a given left edge
    pub fn keeper_rect(&self, keeper_left: f32) -> Rect {
        Rect::new(keeper_left, self.glove_top, self.glove_width, self.glove_height)
    }
}
