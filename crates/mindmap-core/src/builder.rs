//! Mind-map tree builder.
//!
//! Turns raw text into a tree: root named after the main topic, one branch
//! per high-scoring topic in descending importance, optionally expanded with
//! co-occurring sub-topics.

use std::sync::Arc;

use tracing::{debug, warn};

use mindmap_nlp::{EnglishAnnotator, Lemmatizer, Segmenter, Stopwords, Tagger};
use mindmap_types::MindMapNode;

use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::extract::{char_prefix, ConceptExtractor, CoOccurrences, TopicScores};

/// Generates mind-map trees from raw text.
///
/// Holds the injected annotator capabilities and the tuning configuration.
/// Stateless between calls: every `generate` builds and returns a fresh
/// tree, so one generator can serve many requests.
pub struct MapGenerator {
    segmenter: Arc<dyn Segmenter>,
    tagger: Arc<dyn Tagger>,
    stopwords: Arc<dyn Stopwords>,
    lemmatizer: Arc<dyn Lemmatizer>,
    config: GeneratorConfig,
}

impl MapGenerator {
    /// Create a generator from explicit annotator capabilities.
    pub fn new(
        segmenter: Arc<dyn Segmenter>,
        tagger: Arc<dyn Tagger>,
        stopwords: Arc<dyn Stopwords>,
        lemmatizer: Arc<dyn Lemmatizer>,
        config: GeneratorConfig,
    ) -> Self {
        Self {
            segmenter,
            tagger,
            stopwords,
            lemmatizer,
            config,
        }
    }

    /// Create a generator backed by the built-in English annotator.
    pub fn english(config: GeneratorConfig) -> Self {
        let annotator = Arc::new(EnglishAnnotator::new());
        Self::new(
            annotator.clone(),
            annotator.clone(),
            annotator.clone(),
            annotator,
            config,
        )
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a mind map for the given text.
    ///
    /// Whitespace-only input yields the defined empty map. Oversized input
    /// is truncated, never rejected. Annotator failures propagate; no
    /// partial tree is returned.
    pub fn generate(&self, text: &str) -> Result<MindMapNode, GeneratorError> {
        if text.trim().is_empty() {
            debug!("empty input, returning empty map");
            return Ok(MindMapNode::empty());
        }

        let truncated = char_prefix(text, self.config.max_input_chars);
        if truncated.len() < text.len() {
            warn!(
                limit = self.config.max_input_chars,
                original_chars = text.chars().count(),
                "input truncated"
            );
        }
        let text = truncated;

        let sentences = self.segmenter.sentences(text)?;
        let extractor = ConceptExtractor::new(
            self.segmenter.as_ref(),
            self.tagger.as_ref(),
            self.stopwords.as_ref(),
            self.lemmatizer.as_ref(),
        );
        let (scores, co_occurrences) = extractor.extract(&sentences)?;
        let main_topic = extractor.select_main_topic(&scores, text)?;

        let mut root = MindMapNode::new(main_topic.clone(), note_preview(text, self.config.note_preview_chars));

        for (topic, importance) in scores.ranked().into_iter().take(self.config.max_topics) {
            if topic == main_topic {
                continue;
            }
            let mut branch = MindMapNode::branch(&topic, importance);
            if self.config.expand_subtopics {
                self.add_related_topics(&mut branch, &topic, &scores, &co_occurrences, 1);
            }
            root.children.push(branch);
        }

        debug!(
            topics = scores.len(),
            branches = root.children.len(),
            main_topic = %root.name,
            "mind map generated"
        );
        Ok(root)
    }

    /// Attach sub-topics ranked by co-occurrence with `topic`, recursively.
    fn add_related_topics(
        &self,
        branch: &mut MindMapNode,
        topic: &str,
        scores: &TopicScores,
        co_occurrences: &CoOccurrences,
        depth: usize,
    ) {
        if depth >= self.config.max_depth {
            return;
        }

        let mut related: Vec<(&str, u32)> = scores
            .topics()
            .filter(|other| *other != topic)
            .map(|other| (other, co_occurrences.count(topic, other)))
            .collect();
        related.sort_by(|a, b| b.1.cmp(&a.1));

        for (sub_topic, relevance) in related.into_iter().take(self.config.max_subtopics) {
            let mut child = MindMapNode::branch(sub_topic, relevance);
            self.add_related_topics(&mut child, sub_topic, scores, co_occurrences, depth + 1);
            branch.children.push(child);
        }
    }
}

/// Root note: a preview of the text, elided when longer than `limit` chars.
fn note_preview(text: &str, limit: usize) -> String {
    let preview = char_prefix(text, limit);
    if preview.len() < text.len() {
        format!("{preview}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindmap_nlp::{FailingTagger, MockAnnotator};

    fn mock_generator(config: GeneratorConfig) -> MapGenerator {
        let mock = Arc::new(MockAnnotator::new());
        MapGenerator::new(mock.clone(), mock.clone(), mock.clone(), mock, config)
    }

    #[test]
    fn test_empty_input_yields_empty_map() {
        let generator = mock_generator(GeneratorConfig::default());
        for input in ["", "   ", "\n\t  \n"] {
            let map = generator.generate(input).unwrap();
            assert_eq!(map.name, "");
            assert_eq!(map.attributes.note, "");
            assert!(map.children.is_empty());
        }
    }

    #[test]
    fn test_root_named_after_main_topic() {
        let generator = mock_generator(GeneratorConfig::default());
        let map = generator
            .generate("dog_NN cat_NN. dog_NN. dog_NN bird_NN.")
            .unwrap();
        assert_eq!(map.name, "dog");
    }

    #[test]
    fn test_branches_exclude_main_topic() {
        let generator = mock_generator(GeneratorConfig::default());
        let map = generator
            .generate("dog_NN cat_NN. dog_NN. dog_NN bird_NN.")
            .unwrap();
        assert!(map.children.iter().all(|c| c.name != "dog"));
        let names: Vec<&str> = map.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["cat", "bird"]);
    }

    #[test]
    fn test_branch_importance_non_increasing() {
        let generator = mock_generator(GeneratorConfig::default());
        let map = generator
            .generate("dog_NN cat_NN bird_NN. cat_NN bird_NN. cat_NN. emu_NN.")
            .unwrap();
        let importances: Vec<u32> = map
            .children
            .iter()
            .map(|c| c.attributes.importance.unwrap())
            .collect();
        for pair in importances.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn test_branch_note_format() {
        let generator = mock_generator(GeneratorConfig::default());
        let map = generator.generate("dog_NN. dog_NN. cat_NN.").unwrap();
        let cat = map.find("cat").unwrap();
        assert_eq!(cat.attributes.note, "Importance: 2");
        assert_eq!(cat.attributes.importance, Some(2));
    }

    #[test]
    fn test_max_topics_limits_branches() {
        let config = GeneratorConfig {
            max_topics: 2,
            ..GeneratorConfig::default()
        };
        let generator = mock_generator(config);
        // "a" is the main topic and occupies one of the two ranked slots
        let map = generator
            .generate("a_NN a_NN b_NN c_NN d_NN.")
            .unwrap();
        assert_eq!(map.name, "a");
        assert_eq!(map.children.len(), 1);
        assert_eq!(map.children[0].name, "b");
    }

    #[test]
    fn test_root_note_short_text_verbatim() {
        let generator = mock_generator(GeneratorConfig::default());
        let text = "dog_NN.";
        let map = generator.generate(text).unwrap();
        assert_eq!(map.attributes.note, text);
        assert_eq!(map.attributes.importance, None);
    }

    #[test]
    fn test_root_note_long_text_elided() {
        let generator = mock_generator(GeneratorConfig::default());
        let text = format!("dog_NN {}.", "x".repeat(200));
        let map = generator.generate(&text).unwrap();
        assert_eq!(map.attributes.note.chars().count(), 103);
        assert!(map.attributes.note.ends_with("..."));
    }

    #[test]
    fn test_oversized_input_truncated_not_rejected() {
        let config = GeneratorConfig {
            max_input_chars: 30,
            ..GeneratorConfig::default()
        };
        let generator = mock_generator(config);
        // "cat" lies beyond the 30-char horizon and must not be scored
        let text = format!("dog_NN. {} cat_NN.", "y".repeat(100));
        let map = generator.generate(&text).unwrap();
        assert_eq!(map.name, "dog");
        assert!(map.find("cat").is_none());
    }

    #[test]
    fn test_no_expansion_by_default() {
        let generator = mock_generator(GeneratorConfig::default());
        let map = generator
            .generate("dog_NN cat_NN bird_NN. dog_NN. dog_NN.")
            .unwrap();
        assert!(map.children.iter().all(|c| c.children.is_empty()));
    }

    #[test]
    fn test_expansion_ranks_by_co_occurrence() {
        let config = GeneratorConfig {
            expand_subtopics: true,
            max_subtopics: 2,
            max_depth: 2,
            ..GeneratorConfig::default()
        };
        let generator = mock_generator(config);
        // cat co-occurs with bird twice and with emu once
        let map = generator
            .generate("dog_NN. dog_NN. cat_NN bird_NN. cat_NN bird_NN. cat_NN emu_NN.")
            .unwrap();
        assert_eq!(map.name, "dog");

        let cat = map.find("cat").unwrap();
        assert_eq!(cat.children.len(), 2);
        assert_eq!(cat.children[0].name, "bird");
        assert_eq!(cat.children[0].attributes.importance, Some(2));
        assert_eq!(cat.children[1].name, "emu");
        assert_eq!(cat.children[1].attributes.importance, Some(1));
        // max_depth 2 stops the recursion below the first expansion level
        assert!(cat.children[0].children.is_empty());
    }

    #[test]
    fn test_tagging_failure_propagates() {
        let mock = Arc::new(MockAnnotator::new());
        let generator = MapGenerator::new(
            mock.clone(),
            Arc::new(FailingTagger),
            mock.clone(),
            mock,
            GeneratorConfig::default(),
        );
        let result = generator.generate("dog_NN.");
        assert!(matches!(result, Err(GeneratorError::Annotation(_))));
    }

    #[test]
    fn test_zero_topics_falls_back_to_prefix_root() {
        let generator = mock_generator(GeneratorConfig::default());
        let map = generator.generate("ran_VBD fast_RB").unwrap();
        assert_eq!(map.name, "ran_VBD fast_RB");
        assert!(map.children.is_empty());
    }

    #[test]
    fn test_deterministic_output() {
        let generator = mock_generator(GeneratorConfig::default());
        let text = "dog_NN cat_NN. bird_NN dog_NN. emu_NN cat_NN dog_NN.";
        let first = generator.generate(text).unwrap();
        let second = generator.generate(text).unwrap();
        assert_eq!(first, second);
    }
}
