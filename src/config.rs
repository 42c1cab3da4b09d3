use crate::error::{LayoutError, LayoutResult};
use crate::ir::Direction;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HorizontalConfig {
    pub pitch: f32,
    pub edge_stroke_width: f32,
}

impl Default for HorizontalConfig {
    fn default() -> Self {
        Self {
            pitch: 300.0,
            edge_stroke_width: 8.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnakeConfig {
    pub row_width: usize,
    pub x_pitch: f32,
    pub y_pitch: f32,
    pub edge_stroke_width: f32,
    pub edge_dasharray: String,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            row_width: 4,
            x_pitch: 350.0,
            y_pitch: 200.0,
            edge_stroke_width: 2.0,
            edge_dasharray: "5,5".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VerticalConfig {
    pub y_pitch: f32,
}

impl Default for VerticalConfig {
    fn default() -> Self {
        Self { y_pitch: 220.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpineConfig {
    pub y_pitch: f32,
    pub edge_stroke_width: f32,
    pub edge_opacity: f32,
}

impl Default for SpineConfig {
    fn default() -> Self {
        Self {
            y_pitch: 300.0,
            edge_stroke_width: 4.0,
            edge_opacity: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayeredConfig {
    pub node_width: f32,
    pub node_height: f32,
    /// Gap between ranks (horizontal when flowing left to right).
    pub rank_spacing: f32,
    /// Gap between siblings inside one rank.
    pub node_spacing: f32,
    pub margin: f32,
    pub direction: Direction,
    pub edge_stroke_width: f32,
}

impl Default for LayeredConfig {
    fn default() -> Self {
        Self {
            node_width: 260.0,
            node_height: 80.0,
            rank_spacing: 100.0,
            node_spacing: 40.0,
            margin: 0.0,
            direction: Direction::LeftRight,
            edge_stroke_width: 2.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub horizontal: HorizontalConfig,
    pub snake: SnakeConfig,
    pub vertical: VerticalConfig,
    pub spine: SpineConfig,
    pub layered: LayeredConfig,
}

impl LayoutConfig {
    pub fn validate(&self) -> LayoutResult<()> {
        if self.snake.row_width == 0 {
            return Err(LayoutError::config("snake row width must be at least 1"));
        }
        if !(self.layered.node_width > 0.0 && self.layered.node_height > 0.0) {
            return Err(LayoutError::config(format!(
                "layered node size must be positive, got {}x{}",
                self.layered.node_width, self.layered.node_height
            )));
        }
        if self.layered.rank_spacing < 0.0 || self.layered.node_spacing < 0.0 {
            return Err(LayoutError::config("layered spacing must not be negative"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    line_color: Option<String>,
    accent_color: Option<String>,
    background: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    horizontal: Option<HorizontalConfig>,
    snake: Option<SnakeConfig>,
    vertical: Option<VerticalConfig>,
    spine: Option<SpineConfig>,
    layered: Option<LayeredConfig>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    let config = parse_config(&contents)?;
    tracing::debug!(path = %path.display(), "loaded layout config");
    Ok(config)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile = serde_json::from_str(contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        match Theme::from_name(theme_name) {
            Some(theme) => config.theme = theme,
            None => tracing::warn!(theme = theme_name, "unknown theme, keeping default"),
        }
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.line_color {
            config.theme.line_color = v;
        }
        if let Some(v) = vars.accent_color {
            config.theme.accent_color = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
    }

    if let Some(v) = parsed.horizontal {
        config.layout.horizontal = v;
    }
    if let Some(v) = parsed.snake {
        config.layout.snake = v;
    }
    if let Some(v) = parsed.vertical {
        config.layout.vertical = v;
    }
    if let Some(v) = parsed.spine {
        config.layout.spine = v;
    }
    if let Some(v) = parsed.layered {
        config.layout.layered = v;
    }

    config.layout.validate()?;
    Ok(config)
}
