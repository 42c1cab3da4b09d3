use crate::error::{LayoutError, LayoutResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Rank flow used by the layered strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "LR")]
    LeftRight,
    #[serde(rename = "TB", alias = "TD")]
    TopDown,
}

/// One node of a roadmap tree as produced by the generator.
///
/// A missing `children` key and an empty array mean the same thing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapNode {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RoadmapNode>,
}

impl RoadmapNode {
    pub fn leaf(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            duration: None,
            description: None,
            children: Vec::new(),
        }
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn with_child(mut self, child: RoadmapNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Total number of nodes in this subtree, the node itself included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Rejects empty and repeated ids anywhere in the subtree.
    pub fn validate(&self) -> LayoutResult<()> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.id.trim().is_empty() {
                return Err(LayoutError::invalid_tree(format!(
                    "node labelled `{}` has an empty id",
                    node.label
                )));
            }
            if !seen.insert(node.id.as_str()) {
                return Err(LayoutError::DuplicateNodeId(node.id.clone()));
            }
            stack.extend(node.children.iter().rev());
        }
        Ok(())
    }
}

/// Envelope returned by the roadmap generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapResponse {
    #[serde(default)]
    pub role: String,
    pub root: RoadmapNode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RoadmapResponse {
    pub fn from_root(root: RoadmapNode) -> Self {
        Self {
            role: String::new(),
            root,
            suggestions: None,
            error: None,
        }
    }

    /// Unwraps the tree, surfacing a generator-side error instead of its placeholder root.
    pub fn into_root(self) -> LayoutResult<RoadmapNode> {
        match self.error {
            Some(message) => Err(LayoutError::Generator(message)),
            None => Ok(self.root),
        }
    }
}
