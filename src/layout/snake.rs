use super::*;

/// Grid cell `(row, col)` for sequence index `i` with rows of `row_width`.
///
/// Even rows fill left to right, odd rows right to left.
pub(super) fn snake_cell(i: usize, row_width: usize) -> (usize, usize) {
    let row = i / row_width;
    let col_raw = i % row_width;
    let col = if row % 2 == 0 {
        col_raw
    } else {
        row_width - 1 - col_raw
    };
    (row, col)
}

/// Zig-zag grid over the pre-order sequence with a dashed, animated guide path.
pub(super) fn compute_snake_layout(
    root: &RoadmapNode,
    theme: &Theme,
    config: &SnakeConfig,
) -> LayoutResult<Layout> {
    if config.row_width == 0 {
        return Err(LayoutError::config("snake row width must be at least 1"));
    }

    let sequence = flatten_preorder(root);
    let mut nodes = Vec::with_capacity(sequence.len());
    let mut edges = Vec::with_capacity(sequence.len().saturating_sub(1));

    for (i, item) in sequence.iter().enumerate() {
        let (row, col) = snake_cell(i, config.row_width);
        let mut node = LayoutNode::new(
            item,
            i,
            col as f32 * config.x_pitch,
            row as f32 * config.y_pitch,
        );
        node.data.reverse = Some(row % 2 == 1);
        nodes.push(node);

        // Crosses row boundaries too, so the path stays continuous.
        if i > 0 {
            let prev = sequence[i - 1];
            let style = EdgeStyle::solid(theme, config.edge_stroke_width)
                .with_dasharray(config.edge_dasharray.clone());
            edges.push(
                LayoutEdge::chain(&prev.id, &item.id, EdgeRouting::SmoothStep, style).animated(true),
            );
        }
    }

    Ok(Layout {
        strategy: LayoutStrategy::Snake,
        nodes,
        edges,
    })
}
