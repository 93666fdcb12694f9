//! Concept extraction.
//!
//! Walks tagged sentences and produces two tables: topic scores (named
//! entities weigh 3 per occurrence, common nouns 2) and sentence
//! co-occurrence counts used later to rank related sub-topics.

use std::collections::HashMap;

use tracing::trace;

use mindmap_nlp::{Chunk, Lemmatizer, Segmenter, Stopwords, Tagger};

use crate::error::GeneratorError;

/// Weight added per named-entity occurrence.
pub const ENTITY_WEIGHT: u32 = 3;

/// Weight added per qualifying common-noun occurrence.
pub const NOUN_WEIGHT: u32 = 2;

/// Topic score table with deterministic iteration order.
///
/// Weights only ever increase. Insertion order is remembered so that
/// max-weight ties and equal-weight ranking resolve to the topic seen
/// first, keeping a given extraction run fully deterministic.
#[derive(Debug, Clone, Default)]
pub struct TopicScores {
    weights: HashMap<String, u32>,
    order: Vec<String>,
}

impl TopicScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add weight to a topic, registering it on first sight.
    pub fn add(&mut self, topic: &str, weight: u32) {
        match self.weights.get_mut(topic) {
            Some(current) => *current += weight,
            None => {
                self.weights.insert(topic.to_string(), weight);
                self.order.push(topic.to_string());
            }
        }
    }

    /// Current weight of a topic; absent topics weigh 0.
    pub fn get(&self, topic: &str) -> u32 {
        self.weights.get(topic).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Topics in first-seen order.
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// The topic with the maximum weight, first-seen topic winning ties.
    pub fn max_topic(&self) -> Option<&str> {
        let mut best: Option<(&str, u32)> = None;
        for topic in self.topics() {
            let weight = self.get(topic);
            if best.is_none_or(|(_, best_weight)| weight > best_weight) {
                best = Some((topic, weight));
            }
        }
        best.map(|(topic, _)| topic)
    }

    /// All topics sorted by weight descending; ties keep first-seen order.
    pub fn ranked(&self) -> Vec<(String, u32)> {
        let mut ranked: Vec<(String, u32)> = self
            .order
            .iter()
            .map(|topic| (topic.clone(), self.get(topic)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// Symmetric sentence co-occurrence counts over ordered topic pairs.
#[derive(Debug, Clone, Default)]
pub struct CoOccurrences {
    counts: HashMap<(String, String), u32>,
}

impl CoOccurrences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one shared-sentence occurrence of two distinct topics.
    ///
    /// Both orderings are incremented; identical pairs are never recorded.
    pub fn record(&mut self, a: &str, b: &str) {
        if a == b {
            return;
        }
        *self
            .counts
            .entry((a.to_string(), b.to_string()))
            .or_insert(0) += 1;
        *self
            .counts
            .entry((b.to_string(), a.to_string()))
            .or_insert(0) += 1;
    }

    /// Number of shared-sentence occurrences of the ordered pair.
    pub fn count(&self, a: &str, b: &str) -> u32 {
        self.counts
            .get(&(a.to_string(), b.to_string()))
            .copied()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Walks tagged sentences and builds the score and co-occurrence tables.
///
/// Pure with respect to its inputs: given deterministic annotators, equal
/// sentences always yield equal tables.
pub struct ConceptExtractor<'a> {
    segmenter: &'a dyn Segmenter,
    tagger: &'a dyn Tagger,
    stopwords: &'a dyn Stopwords,
    lemmatizer: &'a dyn Lemmatizer,
}

impl<'a> ConceptExtractor<'a> {
    pub fn new(
        segmenter: &'a dyn Segmenter,
        tagger: &'a dyn Tagger,
        stopwords: &'a dyn Stopwords,
        lemmatizer: &'a dyn Lemmatizer,
    ) -> Self {
        Self {
            segmenter,
            tagger,
            stopwords,
            lemmatizer,
        }
    }

    /// Extract topic scores and co-occurrences from ordered sentences.
    pub fn extract(
        &self,
        sentences: &[String],
    ) -> Result<(TopicScores, CoOccurrences), GeneratorError> {
        let mut scores = TopicScores::new();
        let mut co_occurrences = CoOccurrences::new();

        for sentence in sentences {
            let tokens = self.segmenter.tokens(sentence)?;
            let tagged = self.tagger.pos_tag(&tokens)?;
            let chunks = self.tagger.chunk_entities(&tagged)?;

            let mut sentence_topics: Vec<String> = Vec::new();

            for chunk in chunks {
                match chunk {
                    Chunk::Entity(_) => {
                        let surface = chunk.surface();
                        if !self.stopwords.contains(&surface.to_lowercase()) {
                            scores.add(&surface, ENTITY_WEIGHT);
                            sentence_topics.push(surface);
                        }
                    }
                    Chunk::Token(token) => {
                        if token.is_noun() && !self.stopwords.contains(&token.text.to_lowercase())
                        {
                            let lemma = self.lemmatizer.lemmatize(&token.text.to_lowercase());
                            scores.add(&lemma, NOUN_WEIGHT);
                            sentence_topics.push(lemma);
                        }
                    }
                }
            }

            // Every unordered pair of sentence-local topics co-occurs once;
            // repeated mentions within the sentence re-increment.
            for i in 0..sentence_topics.len() {
                for j in (i + 1)..sentence_topics.len() {
                    co_occurrences.record(&sentence_topics[i], &sentence_topics[j]);
                }
            }

            trace!(
                sentence_topics = sentence_topics.len(),
                "processed sentence"
            );
        }

        Ok((scores, co_occurrences))
    }

    /// Pick the topic that best represents the whole text.
    ///
    /// The max-weight topic wins if its lowercased form appears in the first
    /// sentence; otherwise the first noun of the first sentence; otherwise
    /// the first 50 characters of the text.
    pub fn select_main_topic(
        &self,
        scores: &TopicScores,
        text: &str,
    ) -> Result<String, GeneratorError> {
        let sentences = self.segmenter.sentences(text)?;
        let first_sentence = sentences.first().map(String::as_str).unwrap_or(text);

        if let Some(top) = scores.max_topic() {
            if first_sentence.to_lowercase().contains(&top.to_lowercase()) {
                return Ok(top.to_string());
            }
        }

        let tokens = self.segmenter.tokens(first_sentence)?;
        let tagged = self.tagger.pos_tag(&tokens)?;
        if let Some(noun) = tagged.iter().find(|t| t.is_noun()) {
            return Ok(noun.text.clone());
        }

        Ok(char_prefix(text, 50).to_string())
    }
}

/// Prefix of `text` holding at most `n` characters, on a char boundary.
pub(crate) fn char_prefix(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
