//! Tree patcher.
//!
//! Applies one structural edit to an existing mind map and returns the new
//! tree. Matching is by node name; edits are pure rebuilds, so the caller's
//! original tree value is never aliased by the result.
//!
//! Missing targets are silent no-ops: callers cannot distinguish "nothing
//! matched" from "matched and unchanged", which is an accepted limitation of
//! the protocol.

use mindmap_types::{AddedNode, MapChanges, MindMapNode, UpdatedNode};

/// Apply one edit to a tree.
///
/// Exactly one edit kind is honored per call, in the priority order
/// `updated_node` > `updated_map` > `deleted_node` > `added_node`; a changes
/// value carrying none of them returns the tree unchanged.
pub fn apply_changes(tree: MindMapNode, changes: &MapChanges) -> MindMapNode {
    if let Some(update) = &changes.updated_node {
        let mut matched = false;
        return update_node(tree, update, &mut matched);
    }
    if let Some(replacement) = &changes.updated_map {
        return replacement.clone();
    }
    if let Some(name) = &changes.deleted_node {
        return delete_nodes(tree, name);
    }
    if let Some(added) = &changes.added_node {
        let mut matched = false;
        return add_node(tree, added, &mut matched);
    }
    tree
}

/// Shallow-merge `update` into the first pre-order node matching its name.
///
/// Supplied fields replace the node's wholesale; omitted fields are kept.
/// The merged node's children are taken as-is, not traversed further.
fn update_node(node: MindMapNode, update: &UpdatedNode, matched: &mut bool) -> MindMapNode {
    let MindMapNode {
        name,
        attributes,
        children,
    } = node;

    if !*matched && name == update.name {
        *matched = true;
        return MindMapNode {
            name,
            attributes: update.attributes.clone().unwrap_or(attributes),
            children: update.children.clone().unwrap_or(children),
        };
    }

    MindMapNode {
        name,
        attributes,
        children: children
            .into_iter()
            .map(|child| update_node(child, update, matched))
            .collect(),
    }
}

/// Remove every node named `target` from its parent's children, at every
/// depth, discarding the removed subtrees. The root itself is never removed.
fn delete_nodes(node: MindMapNode, target: &str) -> MindMapNode {
    let MindMapNode {
        name,
        attributes,
        children,
    } = node;

    MindMapNode {
        name,
        attributes,
        children: children
            .into_iter()
            .filter(|child| child.name != target)
            .map(|child| delete_nodes(child, target))
            .collect(),
    }
}

/// Append a new child to the first pre-order node matching `added.parent`.
/// An absent parent leaves the tree unchanged.
fn add_node(node: MindMapNode, added: &AddedNode, matched: &mut bool) -> MindMapNode {
    let MindMapNode {
        name,
        attributes,
        mut children,
    } = node;

    if !*matched && name == added.parent {
        *matched = true;
        children.push(MindMapNode::child(
            added.name.clone(),
            added.note.clone(),
            added.importance.unwrap_or(1),
        ));
        return MindMapNode {
            name,
            attributes,
            children,
        };
    }

    MindMapNode {
        name,
        attributes,
        children: children
            .into_iter()
            .map(|child| add_node(child, added, matched))
            .collect(),
    }
}
