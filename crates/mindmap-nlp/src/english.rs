//! Built-in rule-based English annotator.
//!
//! Deterministic and model-free: sentence boundaries come from terminator
//! punctuation, tags from a closed-class lexicon plus suffix heuristics, and
//! named entities from contiguous runs of capitalized tokens.
//!
//! Known limitation: a capitalized word at sentence start is ambiguous
//! between an entity and an ordinary sentence-initial word, so it is tagged
//! by suffix rules rather than as a proper noun. Entities mentioned
//! mid-sentence are chunked reliably.

use tracing::trace;

use crate::contracts::{AnnotatorError, Chunk, Lemmatizer, Segmenter, Stopwords, Tagger, TaggedToken};
use crate::lemma::lemmatize_noun;
use crate::lexicon::{closed_class_tag, is_stop_word};

/// Rule-based English implementation of all four annotator capabilities.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishAnnotator;

impl EnglishAnnotator {
    pub fn new() -> Self {
        Self
    }
}

impl Segmenter for EnglishAnnotator {
    fn sentences(&self, text: &str) -> Result<Vec<String>, AnnotatorError> {
        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            current.push(c);
            if matches!(c, '.' | '!' | '?') {
                // Swallow terminator runs and trailing quotes/brackets
                while let Some(&next) = chars.peek() {
                    if matches!(next, '.' | '!' | '?' | '"' | '\'' | ')' | ']') {
                        current.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                // Boundary only before whitespace or end of input, so
                // decimals and abbreviation-internal dots don't split
                if chars.peek().is_none_or(|next| next.is_whitespace()) {
                    push_trimmed(&mut sentences, &mut current);
                }
            }
        }
        push_trimmed(&mut sentences, &mut current);

        trace!(count = sentences.len(), "segmented sentences");
        Ok(sentences)
    }

    fn tokens(&self, sentence: &str) -> Result<Vec<String>, AnnotatorError> {
        let mut tokens = Vec::new();
        let mut current = String::new();

        for c in sentence.chars() {
            if c.is_alphanumeric() || (matches!(c, '\'' | '-') && !current.is_empty()) {
                current.push(c);
            } else {
                flush_token(&mut tokens, &mut current);
            }
        }
        flush_token(&mut tokens, &mut current);

        Ok(tokens)
    }
}

impl Tagger for EnglishAnnotator {
    fn pos_tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, AnnotatorError> {
        Ok(tokens
            .iter()
            .enumerate()
            .map(|(position, token)| TaggedToken::new(token.clone(), tag_token(token, position == 0)))
            .collect())
    }

    fn chunk_entities(&self, tagged: &[TaggedToken]) -> Result<Vec<Chunk>, AnnotatorError> {
        let mut chunks = Vec::new();
        let mut entity: Vec<TaggedToken> = Vec::new();

        for token in tagged {
            if token.tag == "NNP" {
                entity.push(token.clone());
            } else {
                flush_entity(&mut chunks, &mut entity);
                chunks.push(Chunk::Token(token.clone()));
            }
        }
        flush_entity(&mut chunks, &mut entity);

        Ok(chunks)
    }
}

impl Stopwords for EnglishAnnotator {
    fn contains(&self, word: &str) -> bool {
        is_stop_word(word)
    }
}

impl Lemmatizer for EnglishAnnotator {
    fn lemmatize(&self, word: &str) -> String {
        lemmatize_noun(word)
    }
}

fn push_trimmed(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

fn flush_token(tokens: &mut Vec<String>, current: &mut String) {
    while current.ends_with(['\'', '-']) {
        current.pop();
    }
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

fn flush_entity(chunks: &mut Vec<Chunk>, entity: &mut Vec<TaggedToken>) {
    if !entity.is_empty() {
        chunks.push(Chunk::Entity(std::mem::take(entity)));
    }
}

/// Tag one token given its sentence position.
fn tag_token(token: &str, sentence_initial: bool) -> &'static str {
    let lower = token.to_lowercase();
    if let Some(tag) = closed_class_tag(&lower) {
        return tag;
    }
    if token.chars().all(|c| c.is_ascii_digit()) {
        return "CD";
    }
    if !sentence_initial && token.chars().next().is_some_and(char::is_uppercase) {
        return "NNP";
    }
    suffix_tag(&lower)
}

/// Open-class fallback tagging by word shape.
fn suffix_tag(word: &str) -> &'static str {
    if word.len() > 4 && word.ends_with("ing") {
        "VBG"
    } else if word.len() > 3 && word.ends_with("ed") {
        "VBD"
    } else if word.len() > 3 && word.ends_with("ly") {
        "RB"
    } else if word.len() > 4
        && (word.ends_with("ous")
            || word.ends_with("ful")
            || word.ends_with("ive")
            || word.ends_with("ible")
            || word.ends_with("able"))
    {
        "JJ"
    } else if word.len() > 3 && word.ends_with('s') && !word.ends_with("ss") && !word.ends_with("us") && !word.ends_with("is")
    {
        "NNS"
    } else {
        "NN"
    }
}
