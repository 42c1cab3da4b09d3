use crate::ir::RoadmapNode;
use crate::layout::{Layout, LayoutEdge, LayoutNode};
use crate::theme::Theme;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Card component the renderer registers for roadmap nodes.
pub const NODE_TYPE: &str = "mindMap";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutDump {
    pub strategy: String,
    pub canvas: CanvasDump,
    pub nodes: Vec<NodeDump>,
    pub edges: Vec<EdgeDump>,
}

/// Theme colours the renderer paints the canvas with.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasDump {
    pub background: String,
    pub accent_color: String,
    pub line_color: String,
}

impl From<&Theme> for CanvasDump {
    fn from(theme: &Theme) -> Self {
        CanvasDump {
            background: theme.background.clone(),
            accent_color: theme.accent_color.clone(),
            line_color: theme.line_color.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionDump {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDataDump {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub index: usize,
    pub is_root: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_items: Option<Vec<RoadmapNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_reverse: Option<bool>,
    pub has_children: bool,
    pub is_expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDump {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub position: PositionDump,
    pub data: NodeDataDump,
    pub hidden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_position: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_position: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyleDump {
    pub stroke: String,
    pub stroke_width: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_dasharray: Option<String>,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeDump {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub animated: bool,
    pub hidden: bool,
    pub style: EdgeStyleDump,
}

impl From<&LayoutNode> for NodeDump {
    fn from(node: &LayoutNode) -> Self {
        NodeDump {
            id: node.id.clone(),
            kind: NODE_TYPE,
            position: PositionDump {
                x: node.x,
                y: node.y,
            },
            data: NodeDataDump {
                label: node.data.label.clone(),
                duration: node.data.duration.clone(),
                index: node.data.index,
                is_root: node.data.is_root,
                sub_items: node.data.sub_items.clone(),
                is_reverse: node.data.reverse,
                has_children: node.data.has_children,
                is_expanded: node.data.is_expanded,
            },
            hidden: node.hidden,
            source_position: node.source_handle.map(|side| side.as_str()),
            target_position: node.target_handle.map(|side| side.as_str()),
        }
    }
}

impl From<&LayoutEdge> for EdgeDump {
    fn from(edge: &LayoutEdge) -> Self {
        EdgeDump {
            id: edge.id.clone(),
            source: edge.source.clone(),
            target: edge.target.clone(),
            kind: edge.routing.as_str(),
            animated: edge.animated,
            hidden: edge.hidden,
            style: EdgeStyleDump {
                stroke: edge.style.stroke.clone(),
                stroke_width: edge.style.stroke_width,
                stroke_dasharray: edge.style.dasharray.clone(),
                opacity: edge.style.opacity,
            },
        }
    }
}

impl LayoutDump {
    pub fn from_layout(layout: &Layout, theme: &Theme) -> Self {
        LayoutDump {
            strategy: layout.strategy.name().to_string(),
            canvas: CanvasDump::from(theme),
            nodes: layout.nodes.iter().map(NodeDump::from).collect(),
            edges: layout.edges.iter().map(EdgeDump::from).collect(),
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Writes the dump as JSON to `path`, or to stdout when `path` is `None`.
pub fn write_layout_dump(
    path: Option<&Path>,
    layout: &Layout,
    theme: &Theme,
    pretty: bool,
) -> anyhow::Result<()> {
    let dump = LayoutDump::from_layout(layout, theme);
    match path {
        Some(path) => {
            let file = File::create(path)?;
            write_json(BufWriter::new(file), &dump, pretty)?;
        }
        None => {
            let stdout = io::stdout();
            write_json(stdout.lock(), &dump, pretty)?;
        }
    }
    Ok(())
}

fn write_json<W: Write>(mut writer: W, dump: &LayoutDump, pretty: bool) -> anyhow::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, dump)?;
    } else {
        serde_json::to_writer(&mut writer, dump)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::layout::{LayoutStrategy, compute_layout};

    fn phases() -> RoadmapNode {
        RoadmapNode::leaf("root", "Role").with_child(
            RoadmapNode::leaf("p1", "Phase")
                .with_duration("2 Weeks")
                .with_child(RoadmapNode::leaf("t1", "Task")),
        )
    }

    #[test]
    fn nodes_use_renderer_field_names() {
        let layout = compute_layout(
            &phases(),
            LayoutStrategy::Spine,
            &Theme::gold(),
            &LayoutConfig::default(),
        )
        .unwrap();
        let value = serde_json::to_value(LayoutDump::from_layout(&layout, &Theme::gold())).unwrap();
        assert_eq!(value["strategy"], "spine");
        let phase = &value["nodes"][1];
        assert_eq!(phase["type"], "mindMap");
        assert_eq!(phase["position"]["y"], 300.0);
        assert_eq!(phase["data"]["duration"], "2 Weeks");
        assert_eq!(phase["data"]["isRoot"], false);
        assert_eq!(phase["data"]["subItems"][0]["id"], "t1");
        assert!(phase["data"].get("isReverse").is_none());
        let edge = &value["edges"][0];
        assert_eq!(edge["id"], "e-root-p1");
        assert_eq!(edge["type"], "straight");
        assert_eq!(edge["style"]["strokeWidth"], 4.0);
        assert_eq!(edge["style"]["opacity"], 0.5);
    }

    #[test]
    fn layered_nodes_carry_handle_positions() {
        let layout = compute_layout(
            &phases(),
            LayoutStrategy::Layered,
            &Theme::gold(),
            &LayoutConfig::default(),
        )
        .unwrap();
        let value = serde_json::to_value(LayoutDump::from_layout(&layout, &Theme::gold())).unwrap();
        assert_eq!(value["nodes"][0]["sourcePosition"], "right");
        assert_eq!(value["nodes"][0]["targetPosition"], "left");
        assert_eq!(value["edges"][0]["type"], "smoothstep");
        assert_eq!(value["edges"][0]["animated"], true);
    }

    #[test]
    fn snake_dump_marks_dashes_and_direction() {
        let layout = compute_layout(
            &phases(),
            LayoutStrategy::Snake,
            &Theme::gold(),
            &LayoutConfig::default(),
        )
        .unwrap();
        let json = LayoutDump::from_layout(&layout, &Theme::gold()).to_json(false).unwrap();
        assert!(json.contains("\"strokeDasharray\":\"5,5\""));
        assert!(json.contains("\"isReverse\":false"));
    }

    #[test]
    fn canvas_carries_theme_colours() {
        let mut theme = Theme::slate();
        theme.background = "#101010".to_string();
        let layout = compute_layout(
            &phases(),
            LayoutStrategy::Vertical,
            &theme,
            &LayoutConfig::default(),
        )
        .unwrap();
        let value = serde_json::to_value(LayoutDump::from_layout(&layout, &theme)).unwrap();
        assert_eq!(value["canvas"]["background"], "#101010");
        assert_eq!(value["canvas"]["accentColor"], "#1C2430");
        assert_eq!(value["canvas"]["lineColor"], "#7A8AA6");
        assert_eq!(value["edges"][0]["style"]["stroke"], "#7A8AA6");
    }
}
