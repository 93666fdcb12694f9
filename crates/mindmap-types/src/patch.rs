//! Patch protocol types.
//!
//! A `MapChanges` value describes one structural edit to an existing mind
//! map. Exactly one edit kind is honored per call; when a client supplies
//! several, they are checked in the order `updatedNode` > `updatedMap` >
//! `deletedNode` > `addedNode`.

use serde::{Deserialize, Serialize};

use crate::node::{MindMapNode, NodeAttributes};

/// A structural edit to apply to a mind map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapChanges {
    /// Shallow-merge the supplied fields into the first node matching `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_node: Option<UpdatedNode>,

    /// Replace the whole tree verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_map: Option<MindMapNode>,

    /// Remove every node with this name, together with its subtree
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_node: Option<String>,

    /// Insert a new child under the first node matching `parent`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_node: Option<AddedNode>,
}

impl MapChanges {
    /// An edit that updates the named node.
    pub fn update(node: UpdatedNode) -> Self {
        Self {
            updated_node: Some(node),
            ..Self::default()
        }
    }

    /// An edit that replaces the whole map.
    pub fn replace(map: MindMapNode) -> Self {
        Self {
            updated_map: Some(map),
            ..Self::default()
        }
    }

    /// An edit that deletes every node with the given name.
    pub fn delete(name: impl Into<String>) -> Self {
        Self {
            deleted_node: Some(name.into()),
            ..Self::default()
        }
    }

    /// An edit that adds a child node.
    pub fn add(node: AddedNode) -> Self {
        Self {
            added_node: Some(node),
            ..Self::default()
        }
    }
}

/// Fields to shallow-merge into an existing node.
///
/// `name` selects the target; omitted fields keep their current value, while
/// supplied fields replace the node's wholesale (an `attributes` value here
/// replaces the entire attribute map, it is not merged field by field).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatedNode {
    /// Name of the node to update
    pub name: String,

    /// Replacement attributes, if supplied
    #[serde(default, alias = "attribute", skip_serializing_if = "Option::is_none")]
    pub attributes: Option<NodeAttributes>,

    /// Replacement children, if supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MindMapNode>>,
}

impl UpdatedNode {
    /// Update targeting the given node name, changing nothing yet.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: None,
            children: None,
        }
    }

    /// Replace the node's attributes.
    pub fn with_attributes(mut self, attributes: NodeAttributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Replace the node's children.
    pub fn with_children(mut self, children: Vec<MindMapNode>) -> Self {
        self.children = Some(children);
        self
    }
}

/// A node to insert as a new child.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddedNode {
    /// Name of the existing node to attach the child to
    pub parent: String,

    /// Name of the new child
    pub name: String,

    /// Note for the new child; empty when omitted
    #[serde(default)]
    pub note: String,

    /// Importance for the new child; defaults to 1 when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<u32>,
}

impl AddedNode {
    /// A child with the default note and importance.
    pub fn new(parent: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            name: name.into(),
            note: String::new(),
            importance: None,
        }
    }

    /// Set the note for the new child.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Set the importance for the new child.
    pub fn with_importance(mut self, importance: u32) -> Self {
        self.importance = Some(importance);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changes_parse_camel_case() {
        let json = r#"{
            "updatedNode": { "name": "Dogs", "attributes": { "note": "x" } }
        }"#;
        let changes: MapChanges = serde_json::from_str(json).unwrap();
        let update = changes.updated_node.unwrap();
        assert_eq!(update.name, "Dogs");
        assert_eq!(update.attributes.unwrap().note, "x");
        assert!(update.children.is_none());
        assert!(changes.updated_map.is_none());
    }

    #[test]
    fn test_deleted_node_is_a_plain_name() {
        let json = r#"{ "deletedNode": "Cats" }"#;
        let changes: MapChanges = serde_json::from_str(json).unwrap();
        assert_eq!(changes.deleted_node.as_deref(), Some("Cats"));
    }

    #[test]
    fn test_added_node_defaults() {
        let json = r#"{ "addedNode": { "parent": "root", "name": "new" } }"#;
        let changes: MapChanges = serde_json::from_str(json).unwrap();
        let added = changes.added_node.unwrap();
        assert_eq!(added.note, "");
        assert_eq!(added.importance, None);
    }

    #[test]
    fn test_multiple_kinds_all_parse() {
        let json = r#"{
            "updatedNode": { "name": "a" },
            "deletedNode": "b",
            "addedNode": { "parent": "c", "name": "d", "importance": 4 }
        }"#;
        let changes: MapChanges = serde_json::from_str(json).unwrap();
        assert!(changes.updated_node.is_some());
        assert!(changes.deleted_node.is_some());
        assert_eq!(changes.added_node.unwrap().importance, Some(4));
    }

    #[test]
    fn test_empty_changes() {
        let changes: MapChanges = serde_json::from_str("{}").unwrap();
        assert!(changes.updated_node.is_none());
        assert!(changes.updated_map.is_none());
        assert!(changes.deleted_node.is_none());
        assert!(changes.added_node.is_none());
    }
}
