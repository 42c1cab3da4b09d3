#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod interaction;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod parser;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, LayoutConfig, load_config};
pub use error::{LayoutError, LayoutResult};
pub use interaction::{descendants, set_expanded, toggle_node};
pub use ir::{Direction, RoadmapNode, RoadmapResponse};
pub use layout::{Layout, LayoutEdge, LayoutNode, LayoutStrategy, compute_layout};
pub use layout_dump::LayoutDump;
pub use parser::{load_roadmap, parse_roadmap};
pub use theme::Theme;

/// Options for [`layout_roadmap`].
#[derive(Debug, Clone, Default)]
pub struct LayoutOptions {
    pub theme: Theme,
    pub layout: LayoutConfig,
}

impl LayoutOptions {
    pub fn slate() -> Self {
        Self {
            theme: Theme::slate(),
            layout: LayoutConfig::default(),
        }
    }
}

/// Parses a roadmap document and lays it out in one call.
pub fn layout_roadmap(
    input: &str,
    strategy: LayoutStrategy,
    options: &LayoutOptions,
) -> LayoutResult<LayoutDump> {
    options.layout.validate()?;
    let root = load_roadmap(input)?;
    let layout = compute_layout(&root, strategy, &options.theme, &options.layout)?;
    Ok(LayoutDump::from_layout(&layout, &options.theme))
}
