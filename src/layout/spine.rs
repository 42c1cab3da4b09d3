use super::*;

/// Root plus first-level phases as nodes; each phase carries its own children
/// verbatim as `sub_items`. Nothing below depth two becomes a node.
pub(super) fn compute_spine_layout(
    root: &RoadmapNode,
    theme: &Theme,
    config: &SpineConfig,
) -> Layout {
    let sequence: Vec<&RoadmapNode> = std::iter::once(root).chain(root.children.iter()).collect();
    let mut nodes = Vec::with_capacity(sequence.len());
    let mut edges = Vec::with_capacity(sequence.len() - 1);

    for (i, item) in sequence.iter().enumerate() {
        let mut node = LayoutNode::new(item, i, 0.0, i as f32 * config.y_pitch);
        if i > 0 {
            tracing::trace!(
                phase = %item.id,
                sub_items = item.children.len(),
                "folding phase children into card"
            );
            node.data.sub_items = Some(item.children.clone());

            let prev = sequence[i - 1];
            let style =
                EdgeStyle::solid(theme, config.edge_stroke_width).with_opacity(config.edge_opacity);
            edges.push(LayoutEdge::chain(
                &prev.id,
                &item.id,
                EdgeRouting::Straight,
                style,
            ));
        }
        nodes.push(node);
    }

    Layout {
        strategy: LayoutStrategy::Spine,
        nodes,
        edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deep_tree() -> RoadmapNode {
        RoadmapNode::leaf("root", "Role")
            .with_child(
                RoadmapNode::leaf("p1", "Foundations")
                    .with_duration("1 Month")
                    .with_child(
                        RoadmapNode::leaf("t1", "SQL")
                            .with_child(RoadmapNode::leaf("t1a", "Joins")),
                    )
                    .with_child(RoadmapNode::leaf("t2", "Python")),
            )
            .with_child(RoadmapNode::leaf("p2", "Pipelines"))
    }

    #[test]
    fn only_root_and_phases_become_nodes() {
        let tree = deep_tree();
        let layout = compute_spine_layout(&tree, &Theme::gold(), &SpineConfig::default());
        let ids: Vec<&str> = layout.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["root", "p1", "p2"]);
        assert!(layout.node("t1").is_none());
        assert!(layout.node("t1a").is_none());
    }

    #[test]
    fn phase_sub_items_are_source_children_unchanged() {
        let tree = deep_tree();
        let layout = compute_spine_layout(&tree, &Theme::gold(), &SpineConfig::default());
        assert_eq!(layout.nodes[0].data.sub_items, None);
        assert_eq!(
            layout.nodes[1].data.sub_items.as_ref(),
            Some(&tree.children[0].children)
        );
        // The grandchild stays nested inside its sub-item, not flattened.
        let sub_items = layout.nodes[1].data.sub_items.as_ref().unwrap();
        assert_eq!(sub_items[0].children[0].id, "t1a");
        assert_eq!(layout.nodes[2].data.sub_items, Some(Vec::new()));
    }

    #[test]
    fn spine_positions_and_edges() {
        let layout = compute_spine_layout(&deep_tree(), &Theme::gold(), &SpineConfig::default());
        let ys: Vec<f32> = layout.nodes.iter().map(|n| n.y).collect();
        assert_eq!(ys, vec![0.0, 300.0, 600.0]);
        assert!(layout.nodes[0].data.is_root);

        let pairs: Vec<(&str, &str)> = layout
            .edges
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str()))
            .collect();
        assert_eq!(pairs, vec![("root", "p1"), ("p1", "p2")]);
        for edge in &layout.edges {
            assert_eq!(edge.routing, EdgeRouting::Straight);
            assert_eq!(edge.style.opacity, 0.5);
            assert_eq!(edge.style.stroke_width, 4.0);
            assert!(!edge.animated);
        }
    }

    #[test]
    fn childless_root_is_single_node() {
        let layout = compute_spine_layout(
            &RoadmapNode::leaf("root", "X"),
            &Theme::gold(),
            &SpineConfig::default(),
        );
        assert_eq!(layout.nodes.len(), 1);
        assert!(layout.edges.is_empty());
    }
}
