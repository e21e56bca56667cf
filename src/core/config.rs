//! View configuration with documented constants
//!
//! All layout and stroke constants are collected here with explanations
//! of their purpose. Defaults reproduce the stock arena.

use serde::Deserialize;

/// Configuration for the arena view
///
/// These values only affect presentation. The simulation never reads them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    // === LAYOUT ===
    /// X position of player 1's bounding box (pixels from the left edge)
    ///
    /// Player 1 spawns near the left edge facing right. The initial
    /// placement is one-time only; window resizes do not move fighters.
    pub p1_x: f32,

    /// Distance from the right viewport edge to player 2's bounding box
    ///
    /// Measured to the box's top-left corner, so the fighter sits fully
    /// inside the viewport for sprite widths up to this margin.
    pub p2_right_margin: f32,

    // === STROKES ===
    /// Width of the red divider line splitting the arena in half
    pub divider_width: f32,

    /// Width of the black outline drawn around every sprite
    pub outline_width: f32,

    // === OPTIONAL ASSETS ===
    /// Arena background image. A missing or unreadable file is logged
    /// and ignored; the arena renders on a plain backdrop without it.
    pub background_path: Option<String>,

    /// Stylesheet handed through to the widget adapter. Same non-fatal
    /// contract as the background.
    pub stylesheet_path: Option<String>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            p1_x: 100.0,
            p2_right_margin: 200.0,
            divider_width: 4.0,
            outline_width: 2.0,
            background_path: None,
            stylesheet_path: None,
        }
    }
}

impl ViewConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text
    pub fn from_toml(text: &str) -> crate::core::Result<Self> {
        let config: ViewConfig = toml::from_str(text)?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> crate::core::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if !self.p1_x.is_finite() || !self.p2_right_margin.is_finite() {
            return Err("Fighter offsets must be finite".into());
        }

        if self.divider_width < 0.0 || self.outline_width < 0.0 {
            return Err(format!(
                "Stroke widths must be non-negative (divider {}, outline {})",
                self.divider_width, self.outline_width
            ));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<ViewConfig> = OnceLock::new();

/// Get the global view config (initializes with defaults if not set)
pub fn config() -> &'static ViewConfig {
    CONFIG.get_or_init(ViewConfig::default)
}

/// Set the global view config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: ViewConfig) -> Result<(), ViewConfig> {
    CONFIG.set(config)
}
