use super::*;

/// Single column of stacked cards. Edges keep the logical order but are hidden.
pub(super) fn compute_vertical_layout(
    root: &RoadmapNode,
    theme: &Theme,
    config: &VerticalConfig,
) -> Layout {
    let sequence = flatten_preorder(root);
    let mut nodes = Vec::with_capacity(sequence.len());
    let mut edges = Vec::with_capacity(sequence.len().saturating_sub(1));

    for (i, item) in sequence.iter().enumerate() {
        nodes.push(LayoutNode::new(item, i, 0.0, i as f32 * config.y_pitch));
        if i == 0 {
            continue;
        }
        let prev = sequence[i - 1];
        edges.push(
            LayoutEdge::chain(
                &prev.id,
                &item.id,
                EdgeRouting::Default,
                EdgeStyle::solid(theme, 1.0),
            )
            .hidden(true),
        );
    }

    Layout {
        strategy: LayoutStrategy::Vertical,
        nodes,
        edges,
    }
}
