//! Rule-based English noun lemmatization.
//!
//! Handles regular plural inflection plus a small table of common
//! irregulars. Expects lowercased input; unknown shapes pass through
//! unchanged.

/// Reduce a lowercased English noun to its singular lemma.
pub fn lemmatize_noun(word: &str) -> String {
    let word = word
        .strip_suffix("'s")
        .or_else(|| word.strip_suffix('\''))
        .unwrap_or(word);

    if let Some(lemma) = irregular(word) {
        return lemma.to_string();
    }

    // studies -> study
    if word.len() > 4 && word.ends_with("ies") {
        return format!("{}y", &word[..word.len() - 3]);
    }

    // boxes -> box, churches -> church, dishes -> dish, classes -> class
    for suffix in ["xes", "zes", "ches", "shes", "sses"] {
        if word.len() > suffix.len() + 1 && word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }

    // Singulars that happen to end in "s"
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }

    // dogs -> dog
    if word.len() > 3 && word.ends_with('s') {
        return word[..word.len() - 1].to_string();
    }

    word.to_string()
}

fn irregular(word: &str) -> Option<&'static str> {
    let lemma = match word {
        "children" => "child",
        "men" => "man",
        "women" => "woman",
        "people" => "person",
        "feet" => "foot",
        "teeth" => "tooth",
        "mice" => "mouse",
        "geese" => "goose",
        "wolves" => "wolf",
        "knives" => "knife",
        "lives" => "life",
        "leaves" => "leaf",
        _ => return None,
    };
    Some(lemma)
}
