//! Mind-map tree types.
//!
//! A mind map is a labeled tree: the root carries the inferred main topic,
//! each child a salient sub-topic. Generated siblings are ordered by
//! non-increasing importance; client edits may break that ordering, which is
//! acceptable since edits are user-driven.
//!
//! Historical wire data serialized the root's attribute map under the
//! singular key `attribute`. Output is normalized to `attributes` everywhere;
//! the singular form is still accepted on input via a serde alias.

use serde::{Deserialize, Serialize};

/// Display attributes attached to a mind-map node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeAttributes {
    /// Display text for the node
    #[serde(default)]
    pub note: String,

    /// Score or co-occurrence count that produced this branch.
    /// Absent on the root and on nodes the client added without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<u32>,
}

impl NodeAttributes {
    /// Attributes with a note and no importance.
    pub fn note(note: impl Into<String>) -> Self {
        Self {
            note: note.into(),
            importance: None,
        }
    }

    /// Attributes with a note and an importance score.
    pub fn scored(note: impl Into<String>, importance: u32) -> Self {
        Self {
            note: note.into(),
            importance: Some(importance),
        }
    }
}

/// A node in the mind-map tree.
///
/// Node `name` values double as the matching key for the patch protocol, so
/// they are expected to be unique within one tree. When names collide, the
/// first match in pre-order traversal wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MindMapNode {
    /// Topic label, unique enough for patch matching within one tree
    pub name: String,

    /// Display attributes (`attribute` accepted on input for legacy data)
    #[serde(default, alias = "attribute")]
    pub attributes: NodeAttributes,

    /// Child nodes, ordered by descending importance at generation time
    #[serde(default)]
    pub children: Vec<MindMapNode>,
}

impl MindMapNode {
    /// Create a leaf node with a note and no importance.
    pub fn new(name: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: NodeAttributes::note(note),
            children: Vec::new(),
        }
    }

    /// Create a branch node whose note reflects its importance score.
    pub fn branch(name: impl Into<String>, importance: u32) -> Self {
        Self {
            name: name.into(),
            attributes: NodeAttributes::scored(format!("Importance: {importance}"), importance),
            children: Vec::new(),
        }
    }

    /// Create a leaf node with an explicit note and importance.
    pub fn child(name: impl Into<String>, note: impl Into<String>, importance: u32) -> Self {
        Self {
            name: name.into(),
            attributes: NodeAttributes::scored(note, importance),
            children: Vec::new(),
        }
    }

    /// The degenerate map returned for empty input.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Attach children, preserving their order.
    pub fn with_children(mut self, children: Vec<MindMapNode>) -> Self {
        self.children = children;
        self
    }

    /// Find the first node with the given name in pre-order traversal.
    pub fn find(&self, name: &str) -> Option<&MindMapNode> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    /// Total number of nodes in this subtree, including self.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(MindMapNode::node_count)
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_note_format() {
        let node = MindMapNode::branch("rust", 8);
        assert_eq!(node.attributes.note, "Importance: 8");
        assert_eq!(node.attributes.importance, Some(8));
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_empty_node() {
        let node = MindMapNode::empty();
        assert_eq!(node.name, "");
        assert_eq!(node.attributes.note, "");
        assert_eq!(node.attributes.importance, None);
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_find_pre_order() {
        let tree = MindMapNode::new("root", "").with_children(vec![
            MindMapNode::branch("a", 3).with_children(vec![MindMapNode::branch("target", 1)]),
            MindMapNode::branch("target", 2),
        ]);

        // Pre-order: the deep node under "a" comes before the top-level one
        let found = tree.find("target").unwrap();
        assert_eq!(found.attributes.importance, Some(1));
    }

    #[test]
    fn test_find_missing() {
        let tree = MindMapNode::new("root", "");
        assert!(tree.find("absent").is_none());
    }

    #[test]
    fn test_node_count() {
        let tree = MindMapNode::new("root", "").with_children(vec![
            MindMapNode::branch("a", 3).with_children(vec![MindMapNode::branch("b", 1)]),
            MindMapNode::branch("c", 2),
        ]);
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn test_importance_omitted_from_json() {
        let json = serde_json::to_value(MindMapNode::new("root", "note")).unwrap();
        assert!(json["attributes"].get("importance").is_none());

        let json = serde_json::to_value(MindMapNode::branch("a", 5)).unwrap();
        assert_eq!(json["attributes"]["importance"], 5);
    }

    #[test]
    fn test_legacy_attribute_alias_accepted() {
        let json = r#"{
            "name": "Economy",
            "attribute": { "note": "The economy grew." },
            "children": []
        }"#;
        let node: MindMapNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.attributes.note, "The economy grew.");
    }

    #[test]
    fn test_serde_round_trip() {
        let tree = MindMapNode::new("root", "note")
            .with_children(vec![MindMapNode::branch("a", 3), MindMapNode::branch("b", 1)]);
        let json = serde_json::to_string(&tree).unwrap();
        let parsed: MindMapNode = serde_json::from_str(&json).unwrap();
        assert_eq!(tree, parsed);
    }
}
