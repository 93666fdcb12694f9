//! Closed-class lexicon and stopword list for English.
//!
//! Closed-class words (determiners, prepositions, pronouns, conjunctions,
//! modals, common auxiliaries) are tagged by table lookup; everything else
//! falls through to the suffix heuristics in [`crate::english`].

/// English stopwords ignored as topics.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
    "its", "of", "on", "or", "that", "the", "to", "was", "were", "will", "with", "this", "they",
    "but", "have", "had", "what", "when", "where", "who", "which", "why", "how", "all", "each",
    "every", "both", "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only",
    "own", "same", "so", "than", "too", "very", "can", "just", "should", "now", "also", "been",
    "being", "do", "does", "did", "doing", "would", "could", "might", "must", "shall", "about",
    "above", "after", "again", "against", "am", "any", "before", "below", "between", "into",
    "through", "during", "out", "over", "under", "up", "down", "then", "once", "here", "there",
    "if", "else", "while", "because", "until", "we", "you", "your", "our", "their", "him", "her",
    "them", "me", "my", "myself", "itself", "those", "these", "his", "thing", "things", "something",
    "anything", "nothing", "everything", "someone", "anyone", "everyone", "way", "lot",
];

/// True if the lowercased word is an English stopword.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Part-of-speech tag for closed-class words, by table lookup.
///
/// Expects a lowercased word. Returns `None` for open-class vocabulary.
pub fn closed_class_tag(word: &str) -> Option<&'static str> {
    match word {
        // Determiners
        "the" | "a" | "an" | "this" | "that" | "these" | "those" | "each" | "every" | "some"
        | "any" | "no" | "another" | "other" | "such" | "either" | "neither" => Some("DT"),

        // Prepositions and subordinating conjunctions
        "in" | "on" | "at" | "by" | "for" | "with" | "about" | "against" | "between" | "into"
        | "through" | "during" | "before" | "after" | "above" | "below" | "to" | "from" | "up"
        | "down" | "of" | "off" | "over" | "under" | "near" | "since" | "until" | "while"
        | "because" | "although" | "though" | "if" | "unless" | "than" | "as" => Some("IN"),

        // Personal pronouns
        "i" | "you" | "he" | "she" | "it" | "we" | "they" | "me" | "him" | "her" | "us" | "them"
        | "who" | "whom" | "someone" | "anyone" | "everyone" | "something" | "anything"
        | "everything" | "nothing" => Some("PRP"),

        // Possessive pronouns
        "my" | "your" | "his" | "its" | "our" | "their" | "whose" => Some("PRP$"),

        // Coordinating conjunctions
        "and" | "but" | "or" | "nor" | "yet" => Some("CC"),

        // Modals
        "can" | "could" | "will" | "would" | "shall" | "should" | "may" | "might" | "must"
        | "ought" => Some("MD"),

        // Forms of "to be"
        "is" | "are" | "was" | "were" | "be" | "been" | "being" | "am" => Some("VB"),

        // Common auxiliaries
        "have" | "has" | "had" | "do" | "does" | "did" | "doing" => Some("VB"),

        // Frequent adverbs and negation
        "not" | "never" | "always" | "often" | "also" | "very" | "too" | "so" | "now" | "then"
        | "here" | "there" | "just" | "only" | "again" | "once" | "however" => Some("RB"),

        // Wh-determiners and -adverbs
        "what" | "which" => Some("WDT"),
        "when" | "where" | "why" | "how" => Some("WRB"),

        _ => None,
    }
}
