//! Expand/collapse over an already computed layout.
//!
//! Descendants are found by walking the layout's current edges, never the source
//! tree, since callers may rewire edges after layout. Hiding nodes does not
//! re-flow the freed space; positions are left exactly as computed.

use crate::error::{LayoutError, LayoutResult};
use crate::layout::{Layout, LayoutEdge};
use std::collections::{HashSet, VecDeque};

/// Every node reachable from `id` along outgoing edges, in breadth-first order.
pub fn descendants(edges: &[LayoutEdge], id: &str) -> Vec<String> {
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(id);
    let mut order = Vec::new();
    let mut queue = VecDeque::from([id]);
    while let Some(current) = queue.pop_front() {
        for edge in edges.iter().filter(|edge| edge.source == current) {
            if visited.insert(edge.target.as_str()) {
                order.push(edge.target.clone());
                queue.push_back(edge.target.as_str());
            }
        }
    }
    order
}

/// Sets the expanded state of `id` and shows or hides all of its descendants.
///
/// Leaves have nothing to collapse and are left untouched.
pub fn set_expanded(layout: &mut Layout, id: &str, expanded: bool) -> LayoutResult<()> {
    let node = layout
        .node_mut(id)
        .ok_or_else(|| LayoutError::UnknownNode(id.to_string()))?;
    if !node.data.has_children {
        return Ok(());
    }
    node.data.is_expanded = expanded;

    let hidden: HashSet<String> = descendants(&layout.edges, id).into_iter().collect();
    tracing::debug!(node = id, expanded, affected = hidden.len(), "toggled subtree");
    for node in layout.nodes.iter_mut().filter(|node| hidden.contains(&node.id)) {
        node.hidden = !expanded;
    }
    Ok(())
}

/// Flips the expanded state of `id`, returning the new state.
pub fn toggle_node(layout: &mut Layout, id: &str) -> LayoutResult<bool> {
    let current = layout
        .node(id)
        .ok_or_else(|| LayoutError::UnknownNode(id.to_string()))?
        .data
        .is_expanded;
    set_expanded(layout, id, !current)?;
    Ok(layout.node(id).map(|node| node.data.is_expanded).unwrap_or(current))
}
