//! Generator configuration.

use serde::{Deserialize, Serialize};

/// Tuning knobs for mind-map generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Maximum number of top-level branches under the root
    #[serde(default = "default_max_topics")]
    pub max_topics: usize,

    /// Maximum children per branch during recursive expansion
    #[serde(default = "default_max_subtopics")]
    pub max_subtopics: usize,

    /// Maximum depth of recursive expansion
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Attach co-occurring sub-topics below each branch (off by default)
    #[serde(default)]
    pub expand_subtopics: bool,

    /// Inputs longer than this many characters are truncated, not rejected
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,

    /// Length of the text preview stored in the root note
    #[serde(default = "default_note_preview_chars")]
    pub note_preview_chars: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_topics: default_max_topics(),
            max_subtopics: default_max_subtopics(),
            max_depth: default_max_depth(),
            expand_subtopics: false,
            max_input_chars: default_max_input_chars(),
            note_preview_chars: default_note_preview_chars(),
        }
    }
}

fn default_max_topics() -> usize {
    5
}
fn default_max_subtopics() -> usize {
    3
}
fn default_max_depth() -> usize {
    3
}
fn default_max_input_chars() -> usize {
    10_000
}
fn default_note_preview_chars() -> usize {
    100
}
