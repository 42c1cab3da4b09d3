use super::*;

/// Single row at a fixed pitch, one thick straight bar between consecutive steps.
pub(super) fn compute_horizontal_layout(
    root: &RoadmapNode,
    theme: &Theme,
    config: &HorizontalConfig,
) -> Layout {
    let sequence = flatten_preorder(root);
    let mut nodes = Vec::with_capacity(sequence.len());
    let mut edges = Vec::with_capacity(sequence.len().saturating_sub(1));

    for (i, item) in sequence.iter().enumerate() {
        nodes.push(LayoutNode::new(item, i, i as f32 * config.pitch, 0.0));
        if i > 0 {
            let prev = sequence[i - 1];
            edges.push(LayoutEdge::chain(
                &prev.id,
                &item.id,
                EdgeRouting::Straight,
                EdgeStyle::solid(theme, config.edge_stroke_width),
            ));
        }
    }

    Layout {
        strategy: LayoutStrategy::Horizontal,
        nodes,
        edges,
    }
}
