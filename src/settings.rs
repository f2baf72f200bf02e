//! Player preferences
//!
//! Kept apart from tuning: tuning is balance, settings are taste.

use serde::{Deserialize, Serialize};

/// Language for on-screen text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    English,
    Hebrew,
}

impl Language {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "english" | "en" => Some(Language::English),
            "hebrew" | "he" | "iw" => Some(Language::Hebrew),
            _ => None,
        }
    }

    /// Right-to-left layout for the stat row
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Hebrew)
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Language for messages and labels
    pub language: Language,
    /// Reduced motion (no arc bump, no depth scale)
    pub reduced_motion: bool,
    /// Spin the ball in flight
    pub ball_spin: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::English,
            reduced_motion: false,
            ball_spin: true,
        }
    }
}

impl Settings {
    /// Create settings for a language, everything else default
    pub fn for_language(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    /// Effective spin (respects reduced_motion)
    pub fn effective_spin(&self) -> bool {
        self.ball_spin && !self.reduced_motion
    }

    /// Load settings from JSON, falling back to defaults on bad input
    pub fn from_json_or_default(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => {
                log::info!("Loaded settings");
                settings
            }
            Err(e) => {
                log::warn!("Ignoring unreadable settings ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Serialize settings to JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
