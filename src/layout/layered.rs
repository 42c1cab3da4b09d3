use super::*;
use dagre_rust::{
    GraphConfig as DagreConfig, GraphEdge as DagreEdge, GraphNode as DagreNode,
    layout as dagre_layout,
};
use graphlib_rust::{Graph as DagreGraph, GraphOption};

#[derive(Debug, Clone, PartialEq)]
pub struct SolverNode {
    pub id: String,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SolverEdge {
    pub source: String,
    pub target: String,
}

/// Everything a layered solver needs: sized nodes, directed edges and spacing.
#[derive(Debug, Clone)]
pub struct SolverInput {
    pub nodes: Vec<SolverNode>,
    pub edges: Vec<SolverEdge>,
    pub direction: Direction,
    pub rank_spacing: f32,
    pub node_spacing: f32,
    pub margin: f32,
}

/// Assigns a center point to every node of a directed acyclic graph.
pub trait LayeredSolver {
    fn solve(&self, input: &SolverInput) -> LayoutResult<HashMap<String, (f32, f32)>>;
}

/// Sugiyama-style layering through `dagre_rust`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DagreSolver;

impl LayeredSolver for DagreSolver {
    fn solve(&self, input: &SolverInput) -> LayoutResult<HashMap<String, (f32, f32)>> {
        let mut dagre_graph: DagreGraph<DagreConfig, DagreNode, DagreEdge> =
            DagreGraph::new(Some(GraphOption {
                directed: Some(true),
                multigraph: Some(false),
                compound: Some(false),
            }));

        let mut graph_config = DagreConfig::default();
        graph_config.rankdir = Some(dagre_rankdir(input.direction).to_string());
        graph_config.nodesep = Some(input.node_spacing);
        graph_config.ranksep = Some(input.rank_spacing);
        graph_config.marginx = Some(input.margin);
        graph_config.marginy = Some(input.margin);
        dagre_graph.set_graph(graph_config);

        for (order, solver_node) in input.nodes.iter().enumerate() {
            let mut node = DagreNode::default();
            node.width = solver_node.width;
            node.height = solver_node.height;
            node.order = Some(order);
            dagre_graph.set_node(solver_node.id.clone(), Some(node));
        }

        for edge in &input.edges {
            let edge_label = DagreEdge::default();
            let _ = dagre_graph.set_edge(&edge.source, &edge.target, Some(edge_label), None);
        }

        dagre_layout::run_layout(&mut dagre_graph);

        let mut centers = HashMap::with_capacity(input.nodes.len());
        for solver_node in &input.nodes {
            let Some(dagre_node) = dagre_graph.node(&solver_node.id) else {
                return Err(LayoutError::solver(format!(
                    "dagre produced no position for `{}`",
                    solver_node.id
                )));
            };
            centers.insert(solver_node.id.clone(), (dagre_node.x, dagre_node.y));
        }
        Ok(centers)
    }
}

fn dagre_rankdir(direction: Direction) -> &'static str {
    match direction {
        Direction::TopDown => "tb",
        Direction::LeftRight => "lr",
    }
}

fn handle_sides(direction: Direction) -> (HandleSide, HandleSide) {
    match direction {
        Direction::LeftRight => (HandleSide::Right, HandleSide::Left),
        Direction::TopDown => (HandleSide::Bottom, HandleSide::Top),
    }
}

/// Flat pre-order node list plus one edge per parent/child pair.
fn build_solver_input(root: &RoadmapNode, config: &LayeredConfig) -> SolverInput {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    let mut stack: Vec<(&RoadmapNode, Option<&str>)> = vec![(root, None)];
    while let Some((node, parent)) = stack.pop() {
        nodes.push(SolverNode {
            id: node.id.clone(),
            width: config.node_width,
            height: config.node_height,
        });
        if let Some(parent) = parent {
            edges.push(SolverEdge {
                source: parent.to_string(),
                target: node.id.clone(),
            });
        }
        for child in node.children.iter().rev() {
            stack.push((child, Some(node.id.as_str())));
        }
    }
    SolverInput {
        nodes,
        edges,
        direction: config.direction,
        rank_spacing: config.rank_spacing,
        node_spacing: config.node_spacing,
        margin: config.margin,
    }
}

fn check_solver_input(input: &SolverInput) -> LayoutResult<()> {
    let mut ids: HashSet<&str> = HashSet::with_capacity(input.nodes.len());
    for node in &input.nodes {
        if !ids.insert(node.id.as_str()) {
            return Err(LayoutError::DuplicateNodeId(node.id.clone()));
        }
    }
    for edge in &input.edges {
        for endpoint in [&edge.source, &edge.target] {
            if !ids.contains(endpoint.as_str()) {
                return Err(LayoutError::UnknownEdgeEndpoint {
                    edge: format!("{}-{}", edge.source, edge.target),
                    node: endpoint.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Layered layout following the true tree edges, positioned by `solver`.
///
/// Solver centers are re-anchored to top-left corners. A lone root never reaches
/// the solver and sits at `(margin, margin)`.
pub fn compute_layered_with(
    root: &RoadmapNode,
    theme: &Theme,
    config: &LayeredConfig,
    solver: &dyn LayeredSolver,
) -> LayoutResult<Layout> {
    let input = build_solver_input(root, config);
    check_solver_input(&input)?;

    let centers = if input.edges.is_empty() {
        let mut centers = HashMap::new();
        centers.insert(
            root.id.clone(),
            (
                config.margin + config.node_width / 2.0,
                config.margin + config.node_height / 2.0,
            ),
        );
        centers
    } else {
        solver.solve(&input)?
    };

    let (source_side, target_side) = handle_sides(config.direction);
    let mut nodes = Vec::with_capacity(input.nodes.len());
    for (i, item) in flatten_preorder(root).into_iter().enumerate() {
        let Some(&(cx, cy)) = centers.get(&item.id) else {
            return Err(LayoutError::solver(format!(
                "no position returned for `{}`",
                item.id
            )));
        };
        let mut node = LayoutNode::new(
            item,
            i,
            cx - config.node_width / 2.0,
            cy - config.node_height / 2.0,
        );
        node.source_handle = Some(source_side);
        node.target_handle = Some(target_side);
        nodes.push(node);
    }

    let edges = input
        .edges
        .iter()
        .map(|edge| {
            LayoutEdge::tree(
                &edge.source,
                &edge.target,
                EdgeRouting::SmoothStep,
                EdgeStyle::solid(theme, config.edge_stroke_width),
            )
            .animated(true)
        })
        .collect();

    Ok(Layout {
        strategy: LayoutStrategy::Layered,
        nodes,
        edges,
    })
}

pub(super) fn compute_layered_layout(
    root: &RoadmapNode,
    theme: &Theme,
    config: &LayeredConfig,
) -> LayoutResult<Layout> {
    compute_layered_with(root, theme, config, &DagreSolver)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Puts node `i` of the input at center `(10 * i + 1.5, 7 * i + 0.25)`.
    struct FixedSolver;

    impl LayeredSolver for FixedSolver {
        fn solve(&self, input: &SolverInput) -> LayoutResult<HashMap<String, (f32, f32)>> {
            Ok(input
                .nodes
                .iter()
                .enumerate()
                .map(|(i, n)| (n.id.clone(), (10.0 * i as f32 + 1.5, 7.0 * i as f32 + 0.25)))
                .collect())
        }
    }

    struct ForgetfulSolver;

    impl LayeredSolver for ForgetfulSolver {
        fn solve(&self, _input: &SolverInput) -> LayoutResult<HashMap<String, (f32, f32)>> {
            Ok(HashMap::new())
        }
    }

    fn sample() -> RoadmapNode {
        RoadmapNode::leaf("root", "X")
            .with_child(RoadmapNode::leaf("p1", "P1").with_child(RoadmapNode::leaf("t1", "T1")))
            .with_child(RoadmapNode::leaf("p2", "P2"))
    }

    #[test]
    fn edges_mirror_tree_structure() {
        let input = build_solver_input(&sample(), &LayeredConfig::default());
        let ids: Vec<&str> = input.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["root", "p1", "t1", "p2"]);
        let pairs: Vec<(&str, &str)> = input
            .edges
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str()))
            .collect();
        assert_eq!(pairs, vec![("root", "p1"), ("p1", "t1"), ("root", "p2")]);
    }

    #[test]
    fn reanchors_centers_to_top_left() {
        let config = LayeredConfig::default();
        let layout = compute_layered_with(&sample(), &Theme::gold(), &config, &FixedSolver).unwrap();
        for (i, node) in layout.nodes.iter().enumerate() {
            assert_eq!(node.x, 10.0 * i as f32 + 1.5 - config.node_width / 2.0);
            assert_eq!(node.y, 7.0 * i as f32 + 0.25 - config.node_height / 2.0);
            assert_eq!(node.target_handle, Some(HandleSide::Left));
            assert_eq!(node.source_handle, Some(HandleSide::Right));
        }
        let edge_ids: Vec<&str> = layout.edges.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(edge_ids, vec!["root-p1", "p1-t1", "root-p2"]);
        assert!(layout.edges.iter().all(|e| e.animated));
        assert!(layout.check_edges().is_ok());
    }

    #[test]
    fn top_down_direction_uses_vertical_handles() {
        let config = LayeredConfig {
            direction: Direction::TopDown,
            ..LayeredConfig::default()
        };
        let layout = compute_layered_with(&sample(), &Theme::gold(), &config, &FixedSolver).unwrap();
        assert_eq!(layout.nodes[0].target_handle, Some(HandleSide::Top));
        assert_eq!(layout.nodes[0].source_handle, Some(HandleSide::Bottom));
    }

    #[test]
    fn lone_root_skips_solver() {
        let layout = compute_layered_with(
            &RoadmapNode::leaf("root", "X"),
            &Theme::gold(),
            &LayeredConfig::default(),
            &ForgetfulSolver,
        )
        .unwrap();
        assert_eq!(layout.nodes.len(), 1);
        assert!(layout.edges.is_empty());
        assert_eq!((layout.nodes[0].x, layout.nodes[0].y), (0.0, 0.0));
    }

    #[test]
    fn lone_root_respects_margin() {
        let config = LayeredConfig {
            margin: 8.0,
            ..LayeredConfig::default()
        };
        let layout = compute_layered_with(
            &RoadmapNode::leaf("root", "X"),
            &Theme::gold(),
            &config,
            &ForgetfulSolver,
        )
        .unwrap();
        assert_eq!((layout.nodes[0].x, layout.nodes[0].y), (8.0, 8.0));
    }

    #[test]
    fn missing_solver_position_fails_fast() {
        let err = compute_layered_with(
            &sample(),
            &Theme::gold(),
            &LayeredConfig::default(),
            &ForgetfulSolver,
        )
        .unwrap_err();
        assert!(matches!(err, LayoutError::Solver(_)));
    }

    #[test]
    fn unknown_edge_endpoint_is_rejected() {
        let mut input = build_solver_input(&sample(), &LayeredConfig::default());
        input.edges.push(SolverEdge {
            source: "p2".to_string(),
            target: "ghost".to_string(),
        });
        match check_solver_input(&input) {
            Err(LayoutError::UnknownEdgeEndpoint { node, .. }) => assert_eq!(node, "ghost"),
            other => panic!("expected unknown endpoint, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_ids_are_rejected_before_solving() {
        let tree = RoadmapNode::leaf("root", "X")
            .with_child(RoadmapNode::leaf("dup", "A"))
            .with_child(RoadmapNode::leaf("dup", "B"));
        let err = compute_layered_with(
            &tree,
            &Theme::gold(),
            &LayeredConfig::default(),
            &FixedSolver,
        )
        .unwrap_err();
        assert!(matches!(err, LayoutError::DuplicateNodeId(_)));
    }

    #[test]
    fn dagre_flows_left_to_right_by_rank() {
        let config = LayeredConfig::default();
        let layout = compute_layered_layout(&sample(), &Theme::gold(), &config).unwrap();
        assert_eq!(layout.nodes.len(), 4);
        assert_eq!(layout.edges.len(), 3);

        let x = |id: &str| layout.node(id).unwrap().x;
        let y = |id: &str| layout.node(id).unwrap().y;
        assert!(x("p1") > x("root"));
        assert!(x("t1") > x("p1"));
        assert!((x("p1") - x("p2")).abs() < 0.5);
        assert!((y("p1") - y("p2")).abs() >= config.node_height);
    }
}
