//! Deterministic annotators for tests.
//!
//! [`MockAnnotator`] reads tags straight out of the input: each token is
//! written `word_TAG` (e.g. `dog_NN`, `Marie_NNP`), sentences split on `.`.
//! This gives tests exact control over tagging so extraction arithmetic can
//! be asserted precisely, independent of the rule-based tagger.

use std::collections::HashSet;

use crate::contracts::{AnnotatorError, Chunk, Lemmatizer, Segmenter, Stopwords, Tagger, TaggedToken};

/// Annotator whose tags are embedded in the token text as `word_TAG`.
///
/// Tokens without an embedded tag are tagged `XX` and therefore ignored by
/// the extractor. Lemmatization strips a trailing `s` when
/// `lemmatize_plurals` is set, otherwise it is the identity.
#[derive(Debug, Clone, Default)]
pub struct MockAnnotator {
    stopwords: HashSet<String>,
    lemmatize_plurals: bool,
}

impl MockAnnotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat the given words (lowercased) as stopwords.
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = words.into_iter().map(Into::into).collect();
        self
    }

    /// Strip a trailing `s` in `lemmatize`.
    pub fn with_plural_lemmas(mut self) -> Self {
        self.lemmatize_plurals = true;
        self
    }
}

impl Segmenter for MockAnnotator {
    fn sentences(&self, text: &str) -> Result<Vec<String>, AnnotatorError> {
        Ok(text
            .split('.')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect())
    }

    fn tokens(&self, sentence: &str) -> Result<Vec<String>, AnnotatorError> {
        Ok(sentence.split_whitespace().map(String::from).collect())
    }
}

impl Tagger for MockAnnotator {
    fn pos_tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, AnnotatorError> {
        Ok(tokens
            .iter()
            .map(|token| match token.rsplit_once('_') {
                Some((text, tag)) => TaggedToken::new(text, tag),
                None => TaggedToken::new(token.clone(), "XX"),
            })
            .collect())
    }

    fn chunk_entities(&self, tagged: &[TaggedToken]) -> Result<Vec<Chunk>, AnnotatorError> {
        let mut chunks = Vec::new();
        let mut entity: Vec<TaggedToken> = Vec::new();

        for token in tagged {
            if token.tag == "NNP" {
                entity.push(token.clone());
            } else {
                if !entity.is_empty() {
                    chunks.push(Chunk::Entity(std::mem::take(&mut entity)));
                }
                chunks.push(Chunk::Token(token.clone()));
            }
        }
        if !entity.is_empty() {
            chunks.push(Chunk::Entity(entity));
        }

        Ok(chunks)
    }
}

impl Stopwords for MockAnnotator {
    fn contains(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }
}

impl Lemmatizer for MockAnnotator {
    fn lemmatize(&self, word: &str) -> String {
        if self.lemmatize_plurals && word.len() > 1 && word.ends_with('s') {
            word[..word.len() - 1].to_string()
        } else {
            word.to_string()
        }
    }
}

/// Tagger that always fails, for error-propagation tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingTagger;

impl Tagger for FailingTagger {
    fn pos_tag(&self, _tokens: &[String]) -> Result<Vec<TaggedToken>, AnnotatorError> {
        Err(AnnotatorError::Tagging("model unavailable".to_string()))
    }

    fn chunk_entities(&self, _tagged: &[TaggedToken]) -> Result<Vec<Chunk>, AnnotatorError> {
        Err(AnnotatorError::Chunking("model unavailable".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_tags() {
        let mock = MockAnnotator::new();
        let tokens = mock.tokens("dog_NN ran_VBD").unwrap();
        let tagged = mock.pos_tag(&tokens).unwrap();
        assert_eq!(tagged[0], TaggedToken::new("dog", "NN"));
        assert_eq!(tagged[1], TaggedToken::new("ran", "VBD"));
    }

    #[test]
    fn test_untagged_token_is_ignored_shape() {
        let mock = MockAnnotator::new();
        let tagged = mock.pos_tag(&["plain".to_string()]).unwrap();
        assert_eq!(tagged[0].tag, "XX");
    }

    #[test]
    fn test_entity_runs_grouped() {
        let mock = MockAnnotator::new();
        let tokens = mock.tokens("Marie_NNP Curie_NNP won_VBD").unwrap();
        let tagged = mock.pos_tag(&tokens).unwrap();
        let chunks = mock.chunk_entities(&tagged).unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].surface(), "Marie Curie");
    }

    #[test]
    fn test_sentences_split_on_dot() {
        let mock = MockAnnotator::new();
        let sentences = mock.sentences("a_NN. b_NN. ").unwrap();
        assert_eq!(sentences, vec!["a_NN", "b_NN"]);
    }

    #[test]
    fn test_plural_lemmas() {
        let mock = MockAnnotator::new().with_plural_lemmas();
        assert_eq!(mock.lemmatize("dogs"), "dog");
        assert_eq!(mock.lemmatize("dog"), "dog");
    }
}
