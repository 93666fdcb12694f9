//! Annotator capability contracts.
//!
//! The extraction core is written against these traits only. Implementations
//! must be deterministic for a given input; the core's output is a pure
//! function of its inputs given deterministic tagging.

use thiserror::Error;

/// Errors raised by annotator backends.
///
/// The built-in rule-based annotator never fails, but model-backed
/// implementations can; the generator propagates these uncaught, so a
/// tagging failure never produces a partial tree.
#[derive(Debug, Error)]
pub enum AnnotatorError {
    /// Sentence or token segmentation failed
    #[error("Segmentation failed: {0}")]
    Segmentation(String),

    /// Part-of-speech tagging failed
    #[error("Tagging failed: {0}")]
    Tagging(String),

    /// Named-entity chunking failed
    #[error("Entity chunking failed: {0}")]
    Chunking(String),
}

/// A token paired with its part-of-speech tag.
///
/// Tags follow the Penn Treebank convention; the core only relies on the
/// `NN` prefix marking nouns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    /// Surface text of the token
    pub text: String,
    /// Part-of-speech tag (e.g. `NN`, `NNS`, `NNP`, `VBD`)
    pub tag: String,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
        }
    }

    /// Whether the tag marks a noun (`NN`, `NNS`, `NNP`, `NNPS`).
    pub fn is_noun(&self) -> bool {
        self.tag.starts_with("NN")
    }
}

/// One element of a chunked sentence: a plain token or a named-entity span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    /// A token outside any entity span
    Token(TaggedToken),
    /// A contiguous run of tokens forming one named entity
    Entity(Vec<TaggedToken>),
}

impl Chunk {
    /// Joined surface text of an entity span, case preserved.
    pub fn surface(&self) -> String {
        match self {
            Chunk::Token(token) => token.text.clone(),
            Chunk::Entity(tokens) => tokens
                .iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Splits raw text into sentences and sentences into tokens.
pub trait Segmenter: Send + Sync {
    /// Split text into sentences, in document order.
    fn sentences(&self, text: &str) -> Result<Vec<String>, AnnotatorError>;

    /// Split one sentence into tokens, in sentence order.
    fn tokens(&self, sentence: &str) -> Result<Vec<String>, AnnotatorError>;
}

/// Assigns part-of-speech tags and groups tokens into named-entity spans.
pub trait Tagger: Send + Sync {
    /// Tag each token of one sentence.
    fn pos_tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, AnnotatorError>;

    /// Group contiguous entity tokens into spans, leaving the rest as-is.
    fn chunk_entities(&self, tagged: &[TaggedToken]) -> Result<Vec<Chunk>, AnnotatorError>;
}

/// Membership test over a fixed language-specific stopword set.
pub trait Stopwords: Send + Sync {
    /// True if the (lowercased) word should be ignored as a topic.
    fn contains(&self, word: &str) -> bool;
}

/// Reduces an inflected word to its lemma.
pub trait Lemmatizer: Send + Sync {
    /// Lemmatize a lowercased word.
    fn lemmatize(&self, word: &str) -> String;
}
