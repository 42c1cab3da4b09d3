use crate::error::{LayoutError, LayoutResult};
use crate::ir::RoadmapNode;
use crate::theme::Theme;

use super::LayoutStrategy;

/// Side of a node card that a connector attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl HandleSide {
    pub fn as_str(self) -> &'static str {
        match self {
            HandleSide::Left => "left",
            HandleSide::Right => "right",
            HandleSide::Top => "top",
            HandleSide::Bottom => "bottom",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    pub label: String,
    pub duration: Option<String>,
    /// 1-based position in the strategy's emission order.
    pub index: usize,
    pub is_root: bool,
    /// Sub-tasks folded into a spine phase card.
    pub sub_items: Option<Vec<RoadmapNode>>,
    /// Set by the snake strategy on right-to-left rows.
    pub reverse: Option<bool>,
    pub has_children: bool,
    pub is_expanded: bool,
}

impl NodeData {
    pub(crate) fn from_source(node: &RoadmapNode, seq: usize) -> Self {
        Self {
            label: node.label.clone(),
            duration: node.duration.clone(),
            index: seq + 1,
            is_root: seq == 0,
            sub_items: None,
            reverse: None,
            has_children: node.has_children(),
            is_expanded: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub data: NodeData,
    pub hidden: bool,
    pub source_handle: Option<HandleSide>,
    pub target_handle: Option<HandleSide>,
}

impl LayoutNode {
    pub(crate) fn new(node: &RoadmapNode, seq: usize, x: f32, y: f32) -> Self {
        Self {
            id: node.id.clone(),
            x,
            y,
            data: NodeData::from_source(node, seq),
            hidden: false,
            source_handle: None,
            target_handle: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden
    }
}

/// Connector routing hint for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeRouting {
    Straight,
    SmoothStep,
    Default,
}

impl EdgeRouting {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeRouting::Straight => "straight",
            EdgeRouting::SmoothStep => "smoothstep",
            EdgeRouting::Default => "default",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeStyle {
    pub stroke: String,
    pub stroke_width: f32,
    pub dasharray: Option<String>,
    pub opacity: f32,
}

impl EdgeStyle {
    pub fn solid(theme: &Theme, stroke_width: f32) -> Self {
        Self {
            stroke: theme.line_color.clone(),
            stroke_width,
            dasharray: None,
            opacity: 1.0,
        }
    }

    pub fn with_dasharray(mut self, dasharray: impl Into<String>) -> Self {
        self.dasharray = Some(dasharray.into());
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub routing: EdgeRouting,
    pub animated: bool,
    pub hidden: bool,
    pub style: EdgeStyle,
}

impl LayoutEdge {
    /// Chain edge between consecutive emitted nodes, id `e-{source}-{target}`.
    pub(crate) fn chain(source: &str, target: &str, routing: EdgeRouting, style: EdgeStyle) -> Self {
        Self {
            id: format!("e-{source}-{target}"),
            source: source.to_string(),
            target: target.to_string(),
            routing,
            animated: false,
            hidden: false,
            style,
        }
    }

    /// True parent/child edge, id `{source}-{target}`.
    pub(crate) fn tree(source: &str, target: &str, routing: EdgeRouting, style: EdgeStyle) -> Self {
        Self {
            id: format!("{source}-{target}"),
            ..Self::chain(source, target, routing, style)
        }
    }

    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub strategy: LayoutStrategy,
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<LayoutEdge>,
}

impl Layout {
    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut LayoutNode> {
        self.nodes.iter_mut().find(|node| node.id == id)
    }

    pub fn visible_nodes(&self) -> impl Iterator<Item = &LayoutNode> {
        self.nodes.iter().filter(|node| node.is_visible())
    }

    /// Min and max node anchors as `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> Option<(f32, f32, f32, f32)> {
        let first = self.nodes.first()?;
        let init = (first.x, first.y, first.x, first.y);
        Some(self.nodes.iter().fold(init, |(min_x, min_y, max_x, max_y), node| {
            (
                min_x.min(node.x),
                min_y.min(node.y),
                max_x.max(node.x),
                max_y.max(node.y),
            )
        }))
    }

    /// Fails on the first edge whose endpoint is not in the node list.
    pub fn check_edges(&self) -> LayoutResult<()> {
        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if self.node(endpoint).is_none() {
                    return Err(LayoutError::UnknownEdgeEndpoint {
                        edge: edge.id.clone(),
                        node: endpoint.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
