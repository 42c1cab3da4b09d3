use roadmap_layout::{LayoutOptions, LayoutStrategy, Theme, layout_roadmap};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoadmapLayoutOptions {
    strategy: Option<String>,
    theme: Option<String>,
    line_color: Option<String>,
    snake_row_width: Option<usize>,
}

fn build_layout_options(options: &RoadmapLayoutOptions) -> LayoutOptions {
    let mut layout_options = LayoutOptions::default();
    if let Some(theme) = options.theme.as_deref().and_then(Theme::from_name) {
        layout_options.theme = theme;
    }
    if let Some(line_color) = &options.line_color {
        layout_options.theme.line_color = line_color.clone();
    }
    if let Some(row_width) = options.snake_row_width {
        layout_options.layout.snake.row_width = row_width;
    }
    layout_options
}

fn resolve_strategy(options: &RoadmapLayoutOptions) -> Result<LayoutStrategy, String> {
    match options.strategy.as_deref() {
        Some(name) => name.parse::<LayoutStrategy>().map_err(|error| error.to_string()),
        None => Ok(LayoutStrategy::default()),
    }
}

fn layout_json(roadmap: &str, options: RoadmapLayoutOptions) -> Result<String, String> {
    let strategy = resolve_strategy(&options)?;
    let dump = layout_roadmap(roadmap, strategy, &build_layout_options(&options))
        .map_err(|error| error.to_string())?;
    serde_json::to_string(&dump).map_err(|error| error.to_string())
}

/// Lays out a roadmap document and returns the node/edge JSON for the canvas.
#[wasm_bindgen]
pub fn layout_roadmap_json(roadmap: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let options = if let Some(raw_options) = options_json {
        serde_json::from_str::<RoadmapLayoutOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        RoadmapLayoutOptions::default()
    };

    layout_json(roadmap, options).map_err(|error| JsValue::from_str(&error))
}
