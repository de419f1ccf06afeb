//! Game tuning
//!
//! Defaults reproduce the reference layout in `consts`. Loaded from JSON so
//! alternate boards can be tried without rebuilding; missing fields fall back
//! to the defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;

/// Tunable parameters for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Playfield width
    pub screen_width: f32,
    /// Playfield height
    pub screen_height: f32,
    /// Height of the prompt strip at the top of the screen
    pub header_height: f32,
    /// Side length of every icon's square bounding region
    pub icon_size: f32,
    /// Required distance between icon centers at spawn
    pub min_distance: f32,
    /// Slowest per-axis speed (units per tick)
    pub min_speed: f32,
    /// Fastest per-axis speed (units per tick)
    pub max_speed: f32,
    /// Distinct icons drawn each round
    pub icons_per_round: usize,
    /// Simulation rate
    pub ticks_per_second: u32,
    /// Rejected draws tolerated before the spacing requirement is relaxed.
    /// `None` keeps searching forever.
    pub placement_max_attempts: Option<u32>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            header_height: HEADER_HEIGHT,
            icon_size: ICON_SIZE,
            min_distance: MIN_DISTANCE,
            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,
            icons_per_round: ICONS_PER_ROUND,
            ticks_per_second: TICKS_PER_SECOND,
            placement_max_attempts: None,
        }
    }
}

impl GameSettings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject settings the simulation cannot run with
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |msg: String| Err(GameError::InvalidConfig(msg));

        if !(self.icon_size > 0.0) {
            return invalid(format!("icon_size must be positive, got {}", self.icon_size));
        }
        if self.header_height < 0.0 {
            return invalid(format!(
                "header_height must not be negative, got {}",
                self.header_height
            ));
        }
        if self.screen_width < self.icon_size {
            return invalid(format!(
                "screen_width {} cannot fit an icon of size {}",
                self.screen_width, self.icon_size
            ));
        }
        if self.screen_height - self.header_height < self.icon_size {
            return invalid(format!(
                "play band {} below the header cannot fit an icon of size {}",
                self.screen_height - self.header_height,
                self.icon_size
            ));
        }
        // Spawn corners are drawn on the integer grid inside the band
        if (self.screen_width - self.icon_size).floor() < 0.0 {
            return invalid(format!(
                "no whole-unit x position fits an icon of size {} in width {}",
                self.icon_size, self.screen_width
            ));
        }
        if self.header_height.ceil() > (self.screen_height - self.icon_size).floor() {
            return invalid(format!(
                "no whole-unit y position fits an icon of size {} between header {} and height {}",
                self.icon_size, self.header_height, self.screen_height
            ));
        }
        if self.min_distance < 0.0 {
            return invalid(format!(
                "min_distance must not be negative, got {}",
                self.min_distance
            ));
        }
        if !(self.min_speed > 0.0) || self.max_speed < self.min_speed {
            return invalid(format!(
                "speed range {}..={} must be positive and non-empty",
                self.min_speed, self.max_speed
            ));
        }
        if self.icons_per_round == 0 {
            return invalid("icons_per_round must be at least 1".to_string());
        }
        if self.ticks_per_second == 0 {
            return invalid("ticks_per_second must be at least 1".to_string());
        }
        if self.placement_max_attempts == Some(0) {
            return invalid("placement_max_attempts must be at least 1".to_string());
        }
        Ok(())
    }

    /// Square icon extent
    pub fn icon_extent(&self) -> Vec2 {
        Vec2::splat(self.icon_size)
    }

    /// Seconds per simulation tick
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.ticks_per_second as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = GameSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.icons_per_round, 5);
        assert_eq!(settings.placement_max_attempts, None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = GameSettings::from_json(r#"{ "min_distance": 90.0 }"#).unwrap();
        assert_eq!(settings.min_distance, 90.0);
        assert_eq!(settings.screen_width, SCREEN_WIDTH);
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = GameSettings {
            placement_max_attempts: Some(500),
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(GameSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_rejects_band_too_small() {
        let settings = GameSettings {
            screen_height: 150.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_fractional_band_with_no_whole_position() {
        // 200.5 - 100.3 = 100.2 fits in f32, but ceil(100.3) = 101 > floor(100.5) = 100
        let settings = GameSettings {
            screen_height: 200.5,
            header_height: 100.3,
            icons_per_round: 1,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(GameError::InvalidConfig(_))
        ));

        let settings = GameSettings {
            screen_height: 201.0,
            header_height: 100.3,
            icons_per_round: 1,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_accepted_fractional_band_deals_a_round() {
        use crate::catalog::Catalog;
        use crate::sim::{GamePhase, GameState, TickInput, tick};

        let settings = GameSettings {
            screen_width: 100.7,
            screen_height: 201.0,
            header_height: 100.3,
            icons_per_round: 1,
            ..Default::default()
        };
        let mut state = GameState::new(Catalog::default(), settings, 3).unwrap();
        tick(&mut state, &TickInput::click(glam::Vec2::ZERO));
        assert_eq!(state.phase, GamePhase::Play);
        let icon = &state.session.as_ref().unwrap().instances[0];
        assert_eq!(icon.pos(), glam::Vec2::new(0.0, 101.0));
    }

    #[test]
    fn test_rejects_bad_speed_range() {
        let settings = GameSettings {
            min_speed: 2.0,
            max_speed: 1.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = GameSettings {
            min_speed: 0.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_attempt_cap() {
        let settings = GameSettings {
            placement_max_attempts: Some(0),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
