//! Data-driven game balance
//!
//! Every layout constant, shot curve and timer lives here so balance can be
//! tweaked from JSON without touching the simulation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating tuning data
#[derive(Debug, Error)]
pub enum TuningError {
    /// JSON could not be parsed
    #[error("tuning parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is outside its allowed range
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Field and goal geometry (layout units)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldTuning {
    /// Goal width as a fraction of viewport width
    pub goal_width_ratio: f32,
    /// Goal width cap
    pub goal_max_width: f32,
    pub goal_height: f32,
    pub goal_top: f32,
    /// Inset from posts/crossbar that still counts as a miss
    pub goal_margin: f32,
    pub ball_size: f32,
    /// Ball start as a fraction of viewport height
    pub ball_start_ratio: f32,
    /// Ball start never further than this below the goal top
    pub ball_start_max_drop: f32,
    pub field_min_height: f32,
    pub field_height_ratio: f32,
    /// Gap between the goal bottom and the penalty box line
    pub penalty_line_gap: f32,
    pub spot_size: f32,
    /// Penalty spot sits this far above the ball start
    pub spot_offset: f32,
}

impl Default for FieldTuning {
    fn default() -> Self {
        Self {
            goal_width_ratio: 0.82,
            goal_max_width: 360.0,
            goal_height: 140.0,
            goal_top: 90.0,
            goal_margin: 8.0,
            ball_size: 46.0,
            ball_start_ratio: 0.78,
            ball_start_max_drop: 320.0,
            field_min_height: 420.0,
            field_height_ratio: 0.58,
            penalty_line_gap: 8.0,
            spot_size: 8.0,
            spot_offset: 12.0,
        }
    }
}

/// Keeper glove box and oscillation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeeperTuning {
    /// Width across both gloves
    pub glove_width: f32,
    pub glove_height: f32,
    /// Glove box top, below the crossbar
    pub glove_top_offset: f32,
    /// Extra reach on each side beyond the sprite
    pub glove_pad: f32,
    /// Gap kept between gloves and posts
    pub margin: f32,
    /// Seconds for one sweep across the goal
    pub leg_duration: f32,
}

impl Default for KeeperTuning {
    fn default() -> Self {
        Self {
            glove_width: 140.0,
            glove_height: 70.0,
            glove_top_offset: 10.0,
            glove_pad: 10.0,
            margin: 4.0,
            leg_duration: 1.4,
        }
    }
}

/// Swipe interpretation and flight curves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotTuning {
    /// Swipes must travel at least this far upward
    pub min_upward_swipe: f32,
    /// Upward travel that gives full power
    pub max_swipe_length: f32,
    pub min_power: f32,
    /// Flight time at zero power (seconds)
    pub base_duration: f32,
    /// Flight time removed at full power (seconds)
    pub power_duration_cut: f32,
    pub base_arc: f32,
    pub power_arc: f32,
    /// Horizontal swipe to horizontal travel
    pub aim_sensitivity: f32,
    /// Target inset from each post
    pub target_inset: f32,
    /// How far below the crossbar the ball lands
    pub target_depth: f32,
    /// Spin in degrees per second of flight
    pub spin_rate: f32,
    /// Smallest scale reached mid-flight
    pub scale_dip: f32,
    /// Pause on the result before the ball comes back (seconds)
    pub reset_delay: f32,
}

impl Default for ShotTuning {
    fn default() -> Self {
        Self {
            min_upward_swipe: 12.0,
            max_swipe_length: 280.0,
            min_power: 0.3,
            base_duration: 0.9,
            power_duration_cut: 0.35,
            base_arc: 48.0,
            power_arc: 24.0,
            aim_sensitivity: 1.1,
            target_inset: 10.0,
            target_depth: 28.0,
            spin_rate: 600.0,
            scale_dip: 0.92,
            reset_delay: 0.9,
        }
    }
}

/// Grab area around the ball start, as offsets from its top-left corner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureTuning {
    pub grab_left: f32,
    pub grab_right: f32,
    pub grab_above: f32,
    pub grab_below: f32,
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self {
            grab_left: 80.0,
            grab_right: 120.0,
            grab_above: 60.0,
            grab_below: 80.0,
        }
    }
}

/// Complete balance sheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub field: FieldTuning,
    pub keeper: KeeperTuning,
    pub shot: ShotTuning,
    pub gesture: GestureTuning,
}

fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            field,
            reason: "must be finite and greater than zero",
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            field,
            reason: "must be finite and not negative",
        })
    }
}

fn unit(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            field,
            reason: "must be in (0, 1]",
        })
    }
}

impl Tuning {
    /// Parse and validate tuning JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::debug!("Loaded tuning: {:?}", tuning);
        Ok(tuning)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every value the simulation divides by or clamps with
    pub fn validate(&self) -> Result<(), TuningError> {
        let f = &self.field;
        unit("field.goal_width_ratio", f.goal_width_ratio)?;
        positive("field.goal_max_width", f.goal_max_width)?;
        positive("field.goal_height", f.goal_height)?;
        non_negative("field.goal_top", f.goal_top)?;
        non_negative("field.goal_margin", f.goal_margin)?;
        positive("field.ball_size", f.ball_size)?;
        unit("field.ball_start_ratio", f.ball_start_ratio)?;
        positive("field.ball_start_max_drop", f.ball_start_max_drop)?;
        positive("field.field_min_height", f.field_min_height)?;
        unit("field.field_height_ratio", f.field_height_ratio)?;
        non_negative("field.penalty_line_gap", f.penalty_line_gap)?;
        non_negative("field.spot_size", f.spot_size)?;
        non_negative("field.spot_offset", f.spot_offset)?;

        let k = &self.keeper;
        positive("keeper.glove_width", k.glove_width)?;
        positive("keeper.glove_height", k.glove_height)?;
        non_negative("keeper.glove_top_offset", k.glove_top_offset)?;
        non_negative("keeper.glove_pad", k.glove_pad)?;
        non_negative("keeper.margin", k.margin)?;
        positive("keeper.leg_duration", k.leg_duration)?;

        let s = &self.shot;
        positive("shot.min_upward_swipe", s.min_upward_swipe)?;
        positive("shot.max_swipe_length", s.max_swipe_length)?;
        unit("shot.min_power", s.min_power)?;
        positive("shot.base_duration", s.base_duration)?;
        non_negative("shot.power_duration_cut", s.power_duration_cut)?;
        if s.power_duration_cut >= s.base_duration {
            return Err(TuningError::Invalid {
                field: "shot.power_duration_cut",
                reason: "must be shorter than shot.base_duration",
            });
        }
        non_negative("shot.base_arc", s.base_arc)?;
        non_negative("shot.power_arc", s.power_arc)?;
        positive("shot.aim_sensitivity", s.aim_sensitivity)?;
        non_negative("shot.target_inset", s.target_inset)?;
        non_negative("shot.target_depth", s.target_depth)?;
        non_negative("shot.spin_rate", s.spin_rate)?;
        unit("shot.scale_dip", s.scale_dip)?;
        non_negative("shot.reset_delay", s.reset_delay)?;

        let g = &self.gesture;
        non_negative("gesture.grab_left", g.grab_left)?;
        non_negative("gesture.grab_right", g.grab_right)?;
        non_negative("gesture.grab_above", g.grab_above)?;
        non_negative("gesture.grab_below", g.grab_below)?;

        Ok(())
    }
}
