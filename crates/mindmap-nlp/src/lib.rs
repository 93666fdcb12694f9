//! # mindmap-nlp
//!
//! Linguistic annotation primitives for mind-map generation.
//!
//! The generator core consumes four narrow capabilities, expressed here as
//! traits so that annotator backends can be swapped without touching the
//! extraction algorithm:
//! - [`Segmenter`]: sentence and token boundaries
//! - [`Tagger`]: part-of-speech tags and named-entity chunks
//! - [`Stopwords`]: membership in a fixed stopword set
//! - [`Lemmatizer`]: noun lemmatization
//!
//! [`EnglishAnnotator`] is the built-in deterministic implementation: a
//! rule-based tagger over a closed-class lexicon with suffix heuristics, and
//! a capitalized-run entity chunker. It loads no models and holds no global
//! state, so it can be shared freely across threads.
//!
//! [`MockAnnotator`] gives tests exact control over tags via inline
//! `word_TAG` annotations.

pub mod contracts;
pub mod english;
pub mod lemma;
pub mod lexicon;
pub mod mock;

pub use contracts::{AnnotatorError, Chunk, Lemmatizer, Segmenter, Stopwords, Tagger, TaggedToken};
pub use english::EnglishAnnotator;
pub use mock::{FailingTagger, MockAnnotator};
