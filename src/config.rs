use std::path::{Path, PathBuf};

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::{ScrubError, ScrubResult};
use crate::logging::LoggingConfig;

/// Runtime configuration. Defaults in code, optionally overlaid by a TOML
/// file named in `LORASCRUB_CONFIG`, then by individual `LORASCRUB_*`
/// environment variables. There are no CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrubConfig {
    pub theme: Theme,
    pub logging: LoggingConfig,
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            logging: LoggingConfig::default(),
        }
    }
}

impl ScrubConfig {
    /// Resolve the effective configuration from defaults, the optional
    /// config file and the environment, in that order.
    pub fn load() -> ScrubResult<Self> {
        let mut config = match std::env::var("LORASCRUB_CONFIG") {
            Ok(path) => Self::load_from_file(path)?,
            Err(_) => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ScrubResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ScrubError::file_io(path.as_ref().to_string_lossy(), e))?;

        let config: ScrubConfig = toml::from_str(&content)
            .map_err(|e| ScrubError::configuration(format!("bad config file: {}", e)))?;

        Ok(config)
    }

    /// Override individual settings from environment variables. Unparseable
    /// values are ignored, keeping whatever was configured before.
    fn apply_env(&mut self) {
        if let Ok(theme) = std::env::var("LORASCRUB_THEME") {
            match theme.to_lowercase().as_str() {
                "dark" => self.theme = Theme::Dark,
                "light" => self.theme = Theme::Light,
                _ => {}
            }
        }

        if let Ok(level) = std::env::var("LORASCRUB_LOG_LEVEL") {
            if !level.is_empty() {
                self.logging.level = level;
            }
        }

        if let Ok(dir) = std::env::var("LORASCRUB_LOG_DIR") {
            if !dir.is_empty() {
                self.logging.log_dir = PathBuf::from(dir);
            }
        }

        if let Ok(enabled) = std::env::var("LORASCRUB_FILE_LOG") {
            self.logging.enable_file_logging = enabled.to_lowercase() == "true";
        }
    }
}

/// Color scheme selection. Resolved into concrete colors once and handed to
/// the render layer at construction; the core modules never see a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

pub struct ThemeColors {
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub cursor: Color,
    pub cursor_line_bg: Color,
    pub cursor_line_fg: Color,
    pub placeholder: Color,
    pub placeholder_focused: Color,
    pub line_number: Color,
    pub border: Color,
    pub border_focused: Color,
    pub error: Color,
}

impl Theme {
    pub fn colors(&self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors {
                text: Color::Rgb(240, 240, 240),
                dim: Color::Rgb(88, 88, 88),
                accent: Color::Rgb(255, 95, 175),
                cursor: Color::Rgb(255, 135, 215),
                cursor_line_bg: Color::Rgb(95, 0, 255),
                cursor_line_fg: Color::Rgb(255, 255, 215),
                placeholder: Color::Rgb(68, 68, 68),
                placeholder_focused: Color::Rgb(135, 95, 255),
                line_number: Color::Rgb(78, 78, 78),
                border: Color::Rgb(58, 58, 58),
                border_focused: Color::Rgb(255, 95, 175),
                error: Color::Rgb(200, 100, 100),
            },
            Theme::Light => ThemeColors {
                text: Color::Rgb(40, 40, 40),
                dim: Color::Rgb(150, 150, 150),
                accent: Color::Rgb(215, 0, 95),
                cursor: Color::Rgb(215, 0, 175),
                cursor_line_bg: Color::Rgb(215, 215, 255),
                cursor_line_fg: Color::Rgb(48, 48, 48),
                placeholder: Color::Rgb(178, 178, 178),
                placeholder_focused: Color::Rgb(135, 95, 215),
                line_number: Color::Rgb(200, 200, 200),
                border: Color::Rgb(200, 200, 200),
                border_focused: Color::Rgb(215, 0, 95),
                error: Color::Rgb(200, 0, 0),
            },
        }
    }
}
