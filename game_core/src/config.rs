use serde::Deserialize;

use crate::paddle::{MouseRange, Side};
use crate::params::Params;
use crate::playfield::Playfield;

/// Game configuration
///
/// Every field has a default from [`Params`], so a partial TOML table is enough
/// to override a single value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window_width: f32,
    pub window_height: f32,
    pub rim_size: f32,
    pub shadow_offset: f32,
    /// Height of the screen the mouse moves on
    pub screen_height: f32,
    pub refresh_rate: u32,
    pub ball_size: f32,
    pub serve_speed: f32,
    pub paddle_width: f32,
    pub paddle_sectors: u32,
    pub player_side: Side,
    pub miss_pause_us: f32,
    pub hit_cooldown_us: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: Params::WINDOW_WIDTH,
            window_height: Params::WINDOW_HEIGHT,
            rim_size: Params::RIM_SIZE,
            shadow_offset: Params::SHADOW_OFFSET,
            screen_height: Params::SCREEN_HEIGHT,
            refresh_rate: Params::REFRESH_RATE,
            ball_size: Params::BALL_SIZE,
            serve_speed: Params::BALL_SERVE_SPEED,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_sectors: Params::PADDLE_SECTORS,
            player_side: Side::Right,
            miss_pause_us: Params::MISS_PAUSE_US,
            hit_cooldown_us: Params::HIT_COOLDOWN_US,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table box derived from the window and its rim
    pub fn playfield(&self) -> Playfield {
        Playfield::from_window(
            self.window_width,
            self.window_height,
            self.rim_size,
            self.shadow_offset,
        )
    }

    /// Duration of one tick in microseconds
    pub fn frame_duration_us(&self) -> f32 {
        assert!(self.refresh_rate > 0, "refresh rate must be positive");
        1_000_000.0 / self.refresh_rate as f32
    }

    /// Per-hit acceleration, scaled so the ball covers the same distance per
    /// second at any refresh rate
    pub fn speed_increment(&self) -> f32 {
        assert!(self.refresh_rate > 0, "refresh rate must be positive");
        Params::NOMINAL_RATE / self.refresh_rate as f32
    }

    pub fn mouse_range(&self) -> MouseRange {
        MouseRange::from_screen_height(self.screen_height)
    }

    pub fn computer_side(&self) -> Side {
        self.player_side.opposite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_frame_duration() {
        let mut config = Config::new();
        assert!((config.frame_duration_us() - 16_666.666).abs() < 0.01);
        config.refresh_rate = 120;
        assert!((config.frame_duration_us() - 8_333.333).abs() < 0.01);
    }

    #[test]
    fn test_config_speed_increment() {
        let mut config = Config::new();
        assert_eq!(config.speed_increment(), 1.0);
        config.refresh_rate = 144;
        assert!((config.speed_increment() - 60.0 / 144.0).abs() < 1e-6);
    }

    #[test]
    fn test_config_sides() {
        let config = Config::new();
        assert_eq!(config.player_side, Side::Right);
        assert_eq!(config.computer_side(), Side::Left);
    }

    #[test]
    fn test_config_playfield() {
        let table = Config::new().playfield();
        assert_eq!(table.left(), 95.0);
        assert_eq!(table.right(), 1095.0);
        assert_eq!(table.top(), 95.0);
        assert_eq!(table.bottom(), 795.0);
    }

    #[test]
    #[should_panic(expected = "refresh rate")]
    fn test_config_zero_refresh_rate_panics() {
        let config = Config {
            refresh_rate: 0,
            ..Config::new()
        };
        config.frame_duration_us();
    }
}
