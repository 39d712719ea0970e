//! Toolkit configuration.
//!
//! Built once at startup and handed to [`crate::Gui::new`]; there is no
//! re-initialization.
//!
//! # Environment Variables
//!
//! - `PANELS_TITLE`: Window title (default: "tui-panels")
//! - `PANELS_REVEAL_DELAY_MS`: Delay between revealed characters (default: 10)
//! - `PANELS_INSTANT_REVEAL`: Set to "1" or "true" to skip reveal delays
//! - `PANELS_LOG_PATH`: File that receives `tracing` output from the binary

use std::time::Duration;

use tui_panels_term::{CellStyle, Rgb};
use tui_panels_types::{DEFAULT_LOG_HISTORY, DEFAULT_REVEAL_DELAY_MS, GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuiConfig {
    /// Grid width in columns
    pub width: u16,
    /// Drawable rows (the log row comes on top of these)
    pub height: u16,
    pub title: String,
    /// Default background for borders and panels
    pub background: Rgb,
    /// Default text color for borders and panels
    pub foreground: Rgb,
    /// Background of a selected line in a panel that does not hold focus
    pub inactive: Rgb,
    pub log_background: Rgb,
    pub log_foreground: Rgb,
    /// Log entries kept; older ones are dropped
    pub log_history: usize,
    pub reveal_delay_ms: u64,
    pub instant_reveal: bool,
    pub log_path: Option<String>,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            title: "tui-panels".to_string(),
            background: Rgb::DARK_BLUE,
            foreground: Rgb::YELLOW,
            inactive: Rgb::DARK_YELLOW,
            log_background: Rgb::BLACK,
            log_foreground: Rgb::WHITE,
            log_history: DEFAULT_LOG_HISTORY,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            instant_reveal: false,
            log_path: None,
        }
    }
}

impl GuiConfig {
    pub fn from_env() -> Self {
        use std::env;

        let mut config = Self::default();

        if let Ok(title) = env::var("PANELS_TITLE") {
            if !title.trim().is_empty() {
                config.title = title;
            }
        }

        config.reveal_delay_ms = env::var("PANELS_REVEAL_DELAY_MS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(config.reveal_delay_ms);

        config.instant_reveal = env::var("PANELS_INSTANT_REVEAL")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        config.log_path = env::var("PANELS_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        config
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Screen size including the log row.
    pub fn screen_size(&self) -> (u16, u16) {
        (self.width, self.height.saturating_add(tui_panels_types::LOG_ROWS))
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    pub fn default_style(&self) -> CellStyle {
        CellStyle::new(self.foreground, self.background)
    }

    pub fn log_style(&self) -> CellStyle {
        CellStyle::new(self.log_foreground, self.log_background)
    }
}

/// Optional color overrides accepted by every drawing and panel call.
///
/// Unset fields fall back to the [`GuiConfig`] defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Colors {
    pub bg: Option<Rgb>,
    pub fg: Option<Rgb>,
}

impl Colors {
    pub const fn new(bg: Rgb, fg: Rgb) -> Self {
        Self {
            bg: Some(bg),
            fg: Some(fg),
        }
    }

    pub fn resolve(&self, config: &GuiConfig) -> CellStyle {
        CellStyle::new(
            self.fg.unwrap_or(config.foreground),
            self.bg.unwrap_or(config.background),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_grid() {
        let c = GuiConfig::default();
        assert_eq!(c.screen_size(), (128, 49));
        assert_eq!(c.reveal_delay(), Duration::from_millis(10));
        assert_eq!(c.default_style(), CellStyle::new(Rgb::YELLOW, Rgb::DARK_BLUE));
    }

    #[test]
    fn color_overrides_fall_back_per_channel() {
        let c = GuiConfig::default();
        let only_bg = Colors {
            bg: Some(Rgb::BLACK),
            fg: None,
        };
        assert_eq!(only_bg.resolve(&c), CellStyle::new(Rgb::YELLOW, Rgb::BLACK));
        assert_eq!(Colors::default().resolve(&c), c.default_style());
    }

    #[test]
    fn builder_overrides() {
        let c = GuiConfig::default().with_title("cards").with_size(40, 10);
        assert_eq!(c.title, "cards");
        assert_eq!(c.screen_size(), (40, 11));
    }
}
