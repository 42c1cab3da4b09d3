mod horizontal;
mod layered;
mod snake;
mod spine;
mod traversal;
pub(crate) mod types;
mod vertical;
pub use layered::{
    DagreSolver, LayeredSolver, SolverEdge, SolverInput, SolverNode, compute_layered_with,
};
pub use traversal::flatten_preorder;
pub use types::*;
use horizontal::*;
use layered::*;
use snake::*;
use spine::*;
use vertical::*;

use crate::config::{
    HorizontalConfig, LayeredConfig, LayoutConfig, SnakeConfig, SpineConfig, VerticalConfig,
};
use crate::error::{LayoutError, LayoutResult};
use crate::ir::{Direction, RoadmapNode};
use crate::theme::Theme;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// The interchangeable views of one roadmap tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LayoutStrategy {
    /// One row, fixed pitch.
    Horizontal,
    /// Wrapped rows in zig-zag reading order.
    Snake,
    /// One column with hidden wiring.
    Vertical,
    /// Root and phases only, sub-tasks embedded in phase cards.
    #[cfg_attr(feature = "cli", value(alias = "timeline"))]
    Spine,
    /// Tree-shaped layered layout from the graph solver.
    #[default]
    #[cfg_attr(feature = "cli", value(alias = "auto", alias = "dagre"))]
    Layered,
}

impl LayoutStrategy {
    pub const ALL: [LayoutStrategy; 5] = [
        LayoutStrategy::Horizontal,
        LayoutStrategy::Snake,
        LayoutStrategy::Vertical,
        LayoutStrategy::Spine,
        LayoutStrategy::Layered,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LayoutStrategy::Horizontal => "horizontal",
            LayoutStrategy::Snake => "snake",
            LayoutStrategy::Vertical => "vertical",
            LayoutStrategy::Spine => "spine",
            LayoutStrategy::Layered => "layered",
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(strategy = self.name(), root = %root.id))]
    pub fn compute(
        &self,
        root: &RoadmapNode,
        theme: &Theme,
        config: &LayoutConfig,
    ) -> LayoutResult<Layout> {
        let layout = match self {
            LayoutStrategy::Horizontal => {
                compute_horizontal_layout(root, theme, &config.horizontal)
            }
            LayoutStrategy::Snake => compute_snake_layout(root, theme, &config.snake)?,
            LayoutStrategy::Vertical => compute_vertical_layout(root, theme, &config.vertical),
            LayoutStrategy::Spine => compute_spine_layout(root, theme, &config.spine),
            LayoutStrategy::Layered => compute_layered_layout(root, theme, &config.layered)?,
        };
        tracing::debug!(
            nodes = layout.nodes.len(),
            edges = layout.edges.len(),
            "computed layout"
        );
        Ok(layout)
    }
}

impl fmt::Display for LayoutStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayoutStrategy {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Ok(LayoutStrategy::Horizontal),
            "snake" => Ok(LayoutStrategy::Snake),
            "vertical" => Ok(LayoutStrategy::Vertical),
            "spine" | "timeline" => Ok(LayoutStrategy::Spine),
            "layered" | "auto" | "dagre" => Ok(LayoutStrategy::Layered),
            other => Err(LayoutError::config(format!("unknown layout strategy `{other}`"))),
        }
    }
}

pub fn compute_layout(
    root: &RoadmapNode,
    strategy: LayoutStrategy,
    theme: &Theme,
    config: &LayoutConfig,
) -> LayoutResult<Layout> {
    strategy.compute(root, theme, config)
}
