use anyhow::{bail, Context, Result};
use game_core::Config;
use serde::Deserialize;
use std::path::Path;

/// Settings file contents.
/// Everything is optional: CLI flags override the file, the file overrides defaults.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Table geometry and timing
    pub table: Config,
    pub host: HostSettings,
}

/// How the host drives the table
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HostSettings {
    pub seed: Option<u64>,
    pub rounds: Option<u32>,
    /// Screen pixels the synthetic hand moves per tick
    pub hand_speed: Option<f32>,
    pub realtime: Option<bool>,
}

/// Load settings from `path`, or defaults when no path is given
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read settings {}", path.display()))?;
    let settings: Settings =
        toml::from_str(&contents).with_context(|| format!("parse settings {}", path.display()))?;
    validate(&settings.table).with_context(|| format!("invalid settings {}", path.display()))?;
    Ok(settings)
}

/// Reject values the table would panic on
pub fn validate(config: &Config) -> Result<()> {
    if config.refresh_rate == 0 {
        bail!("refresh_rate must be positive");
    }
    if config.paddle_sectors % 2 == 0 {
        bail!("paddle_sectors must be odd, got {}", config.paddle_sectors);
    }
    if config.window_width <= 2.0 * config.rim_size || config.window_height <= 2.0 * config.rim_size {
        bail!(
            "rim_size {} leaves no table in a {}x{} window",
            config.rim_size,
            config.window_width,
            config.window_height
        );
    }
    if config.ball_size <= 0.0 || config.paddle_width <= 0.0 {
        bail!("ball_size and paddle_width must be positive");
    }
    if config.screen_height <= 0.0 {
        bail!("screen_height must be positive");
    }
    Ok(())
}

/// A settings file spelling out every default
pub fn default_settings_string() -> String {
    r#"# pong-headless settings
# CLI flags override these settings.

[table]
window_width = 1200.0
window_height = 900.0
rim_size = 100.0
shadow_offset = -5.0
# Height of the screen the mouse moves on
screen_height = 1080.0
refresh_rate = 60
ball_size = 15.0
serve_speed = 10.0
paddle_width = 11.0
# Must be odd
paddle_sectors = 15
# left or right
player_side = "right"
miss_pause_us = 500000.0
hit_cooldown_us = 333333.3

[host]
# seed = 1
# rounds = 1
# hand_speed = 4.0
# realtime = false
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Side;

    #[test]
    fn test_default_string_matches_defaults() {
        let settings: Settings = toml::from_str(&default_settings_string()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_table_keeps_other_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [table]
            refresh_rate = 120
            player_side = "left"

            [host]
            seed = 7
            "#,
        )
        .unwrap();
        assert_eq!(settings.table.refresh_rate, 120);
        assert_eq!(settings.table.player_side, Side::Left);
        assert_eq!(settings.table.ball_size, Config::new().ball_size);
        assert_eq!(settings.host.seed, Some(7));
        assert_eq!(settings.host.rounds, None);
    }

    #[test]
    fn test_missing_path_gives_defaults() {
        assert_eq!(load_settings(None).unwrap(), Settings::default());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_settings(Some(Path::new("/nonexistent/pong.toml"))).unwrap_err();
        assert!(err.to_string().contains("read settings"));
    }

    #[test]
    fn test_validate_rejects_even_sectors() {
        let config = Config {
            paddle_sectors: 8,
            ..Config::new()
        };
        assert!(validate(&config).is_err());
        assert!(validate(&Config::new()).is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_refresh_rate() {
        let config = Config {
            refresh_rate: 0,
            ..Config::new()
        };
        assert!(validate(&config).is_err());
    }
}
