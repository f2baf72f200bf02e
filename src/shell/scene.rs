//! Render-agnostic scene description
//!
//! Everything a front end needs to draw one frame of the game modal. Pure data;
//! no drawing happens here.

use glam::Vec2;
use serde::Serialize;

use crate::settings::Language;
use crate::sim::{GameState, Rect};

/// Net grid columns inside the goal frame
pub const NET_COLS: usize = 12;
/// Net grid rows inside the goal frame
pub const NET_ROWS: usize = 8;
/// Thickness of the penalty box line
pub const PENALTY_LINE_THICKNESS: f32 = 2.0;

/// A straight line segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

/// Ball sprite with its transform
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallSprite {
    pub rect: Rect,
    /// Degrees, clockwise
    pub rotation: f32,
    pub scale: f32,
}

/// One scoreboard pill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatPill {
    pub label: &'static str,
    pub value: u32,
}

/// One frame of the game modal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub field: Rect,
    pub penalty_line: Rect,
    pub penalty_spot: Rect,
    pub goal_frame: Rect,
    pub net: Vec<Segment>,
    pub keeper: Rect,
    pub ball: BallSprite,
    /// Goals, saves, missed, in that order
    pub stats: [StatPill; 3],
    /// Lay the stat row out right-to-left
    pub stats_rtl: bool,
    pub banner: &'static str,
    pub close_label: &'static str,
}

fn labels(language: Language) -> ([&'static str; 3], &'static str) {
    match language {
        Language::English => (["Goals", "Saves", "Missed"], "Close"),
        Language::Hebrew => (["גולים", "הצלות", "מחוץ"], "סגור"),
    }
}

/// Vertical and horizontal grid lines across the goal frame
pub fn net_grid(goal: &Rect) -> Vec<Segment> {
    let mut lines = Vec::with_capacity(NET_COLS + NET_ROWS + 2);
    for i in 0..=NET_COLS {
        let x = goal.left + goal.width / NET_COLS as f32 * i as f32;
        lines.push(Segment {
            from: Vec2::new(x, goal.top),
            to: Vec2::new(x, goal.bottom()),
        });
    }
    for i in 0..=NET_ROWS {
        let y = goal.top + goal.height / NET_ROWS as f32 * i as f32;
        lines.push(Segment {
            from: Vec2::new(goal.left, y),
            to: Vec2::new(goal.right(), y),
        });
    }
    lines
}

impl Scene {
    /// Describe the current frame of a game
    pub fn build(state: &GameState) -> Self {
        let layout = &state.layout;
        let language = state.settings.language;
        let ([goals, saves, missed], close_label) = labels(language);
        let pose = state.ball_pose();

        Self {
            field: layout.field,
            penalty_line: Rect::new(
                layout.goal.left,
                layout.penalty_line_y,
                layout.goal.width,
                PENALTY_LINE_THICKNESS,
            ),
            penalty_spot: layout.penalty_spot,
            goal_frame: layout.goal,
            net: net_grid(&layout.goal),
            keeper: layout.keeper_rect(state.keeper.offset()),
            ball: BallSprite {
                rect: Rect::new(pose.pos.x, pose.pos.y, layout.ball_size, layout.ball_size),
                rotation: pose.rotation,
                scale: pose.scale,
            },
            stats: [
                StatPill {
                    label: goals,
                    value: state.scoreboard.goals,
                },
                StatPill {
                    label: saves,
                    value: state.scoreboard.saves,
                },
                StatPill {
                    label: missed,
                    value: state.scoreboard.missed,
                },
            ],
            stats_rtl: language.is_rtl(),
            banner: state.message_text(),
            close_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::tuning::Tuning;

    fn state(language: Language) -> GameState {
        GameState::new(
            Vec2::new(390.0, 844.0),
            Tuning::default(),
            Settings::for_language(language),
        )
    }

    #[test]
    fn test_net_grid_spans_goal() {
        let scene = Scene::build(&state(Language::English));
        assert_eq!(scene.net.len(), (NET_COLS + 1) + (NET_ROWS + 1));
        let goal = scene.goal_frame;
        let first = scene.net[0];
        let last_vertical = scene.net[NET_COLS];
        assert_eq!(first.from.x, goal.left);
        assert!((last_vertical.from.x - goal.right()).abs() < 1e-3);
        let last = scene.net[scene.net.len() - 1];
        assert!((last.from.y - goal.bottom()).abs() < 1e-3);
    }

    #[test]
    fn test_scene_reflects_state() {
        let mut state = state(Language::English);
        state.scoreboard.goals = 3;
        state.scoreboard.missed = 1;
        let scene = Scene::build(&state);
        assert_eq!(scene.stats[0], StatPill { label: "Goals", value: 3 });
        assert_eq!(scene.stats[2].value, 1);
        assert_eq!(scene.banner, state.message_text());
        assert_eq!(scene.ball.rect.left, state.layout.ball_start.x);
        assert_eq!(scene.keeper.left, state.layout.keeper_left_bound);
        assert!(!scene.stats_rtl);
    }

    #[test]
    fn test_hebrew_labels() {
        let scene = Scene::build(&state(Language::Hebrew));
        assert_eq!(scene.close_label, "סגור");
        assert!(scene.stats_rtl);
    }
}
