use crate::ir::RoadmapNode;

/// Pre-order depth-first linearization: a node comes before its children and
/// children keep their array order.
///
/// Walks with an explicit stack so very deep roadmaps cannot exhaust the call stack.
pub fn flatten_preorder(root: &RoadmapNode) -> Vec<&RoadmapNode> {
    let mut sequence = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        sequence.push(node);
        stack.extend(node.children.iter().rev());
    }
    sequence
}
