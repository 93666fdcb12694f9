//! # mindmap-types
//!
//! Shared domain types for the mind-map system.
//!
//! This crate defines the core data structures used throughout the workspace:
//! - Nodes: the mind-map tree (`MindMapNode`, `NodeAttributes`)
//! - Changes: the patch protocol (`MapChanges`, `UpdatedNode`, `AddedNode`)
//!
//! ## Usage
//!
//! ```rust
//! use mindmap_types::MindMapNode;
//!
//! let root = MindMapNode::new("Rust", "Systems programming language");
//! assert!(root.children.is_empty());
//! ```

pub mod node;
pub mod patch;

pub use node::{MindMapNode, NodeAttributes};
pub use patch::{AddedNode, MapChanges, UpdatedNode};
