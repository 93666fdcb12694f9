//! # mindmap-core
//!
//! Mind-map generation and patching.
//!
//! `generate` turns free-form text into a hierarchical mind map: the root is
//! the text's inferred main topic, its children the highest-scoring topics
//! found by the concept extractor, optionally expanded with co-occurring
//! sub-topics. `apply_changes` applies one incremental edit (update node,
//! replace map, delete node, add node) to an existing tree without
//! regenerating it.
//!
//! The core is synchronous and stateless between calls: every invocation is
//! a pure function of its inputs plus the injected annotator capabilities
//! (see `mindmap-nlp`). Callers own cross-request concerns such as
//! broadcasting results or serializing concurrent edits to one logical map.
//!
//! ## Example
//!
//! ```rust
//! use mindmap_core::{GeneratorConfig, MapGenerator};
//!
//! let generator = MapGenerator::english(GeneratorConfig::default());
//! let map = generator
//!     .generate("The physicist Marie Curie studied radium in Paris.")
//!     .unwrap();
//! assert!(!map.name.is_empty());
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod extract;
pub mod patch;

pub use builder::MapGenerator;
pub use config::GeneratorConfig;
pub use error::GeneratorError;
pub use extract::{ConceptExtractor, CoOccurrences, TopicScores, ENTITY_WEIGHT, NOUN_WEIGHT};
pub use patch::apply_changes;

pub use mindmap_types::{AddedNode, MapChanges, MindMapNode, NodeAttributes, UpdatedNode};
