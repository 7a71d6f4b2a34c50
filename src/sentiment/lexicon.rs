// Review sentiment lexicon.
//
// Each entry is (word, polarity, subjectivity). Polarity is in [-1.0, 1.0],
// subjectivity in [0.0, 1.0]. Keys are lowercase single words, mostly the
// adjectives and verbs that carry opinion in product reviews.

pub(crate) const LEXICON: &[(&str, f64, f64)] = &[
    // Positive
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("bright", 0.7, 0.8),
    ("cheap", 0.4, 0.7),
    ("clear", 0.1, 0.38),
    ("comfortable", 0.4, 0.8),
    ("convenient", 0.4, 0.5),
    ("cool", 0.35, 0.65),
    ("crisp", 0.3, 0.6),
    ("durable", 0.4, 0.5),
    ("easy", 0.43, 0.83),
    ("excellent", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("fast", 0.2, 0.6),
    ("favorite", 0.5, 1.0),
    ("fine", 0.42, 0.5),
    ("fun", 0.3, 0.2),
    ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("helpful", 0.5, 0.5),
    ("impressive", 1.0, 1.0),
    ("incredible", 0.9, 0.9),
    ("like", 0.2, 0.3),
    ("liked", 0.6, 0.8),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("loves", 0.5, 0.6),
    ("lovely", 0.5, 0.75),
    ("nice", 0.6, 1.0),
    ("perfect", 1.0, 1.0),
    ("perfectly", 1.0, 1.0),
    ("pleased", 0.5, 1.0),
    ("powerful", 0.3, 1.0),
    ("pretty", 0.25, 1.0),
    ("quick", 0.33, 0.5),
    ("recommend", 0.4, 0.5),
    ("recommended", 0.4, 0.5),
    ("reliable", 0.4, 0.5),
    ("responsive", 0.4, 0.5),
    ("satisfied", 0.5, 1.0),
    ("simple", 0.0, 0.36),
    ("smart", 0.21, 0.64),
    ("smooth", 0.4, 0.6),
    ("solid", 0.1, 0.1),
    ("sturdy", 0.4, 0.5),
    ("super", 0.33, 0.67),
    ("useful", 0.3, 0.0),
    ("valuable", 0.6, 0.8),
    ("wonderful", 1.0, 1.0),
    ("worth", 0.3, 0.1),
    // Negative
    ("annoying", -0.8, 0.9),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("boring", -1.0, 1.0),
    ("broke", -0.4, 0.4),
    ("broken", -0.4, 0.4),
    ("confusing", -0.3, 0.5),
    ("defective", -0.6, 0.6),
    ("difficult", -0.5, 1.0),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("dull", -0.31, 0.73),
    ("expensive", -0.5, 0.7),
    ("fail", -0.5, 0.3),
    ("failed", -0.5, 0.3),
    ("flimsy", -0.5, 0.6),
    ("frustrating", -0.4, 0.7),
    ("hard", -0.29, 0.54),
    ("hate", -0.8, 0.9),
    ("horrible", -1.0, 1.0),
    ("junk", -0.5, 0.6),
    ("laggy", -0.4, 0.6),
    ("poor", -0.4, 0.6),
    ("poorly", -0.4, 0.6),
    ("problem", -0.3, 0.3),
    ("return", -0.1, 0.2),
    ("returned", -0.2, 0.3),
    ("sad", -0.5, 1.0),
    ("slow", -0.3, 0.39),
    ("stupid", -0.8, 1.0),
    ("terrible", -1.0, 1.0),
    ("ugly", -0.7, 1.0),
    ("unhappy", -0.6, 0.9),
    ("unreliable", -0.4, 0.5),
    ("useless", -0.5, 0.2),
    ("waste", -0.2, 0.0),
    ("weak", -0.38, 0.56),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.9),
];

/// Words that scale the assessment that follows them.
pub(crate) const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.6),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.5),
    ("quite", 1.1),
    ("really", 1.2),
    ("so", 1.3),
    ("too", 1.1),
    ("totally", 1.3),
    ("very", 1.3),
    ("slightly", 0.7),
    ("somewhat", 0.8),
    ("barely", 0.5),
];

/// Words that flip the assessment that follows them.
pub(crate) const NEGATIONS: &[&str] = &["not", "never", "no", "nothing", "hardly", "without"];

pub(crate) fn lookup(word: &str) -> Option<(f64, f64)> {
    LEXICON
        .iter()
        .find(|(w, _, _)| *w == word)
        .map(|&(_, polarity, subjectivity)| (polarity, subjectivity))
}

pub(crate) fn intensity(word: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|&(_, factor)| factor)
}

pub(crate) fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't") || word.ends_with("n\u{2019}t")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_in_range() {
        for &(word, polarity, subjectivity) in LEXICON {
            assert!((-1.0..=1.0).contains(&polarity), "{word} polarity out of range");
            assert!((0.0..=1.0).contains(&subjectivity), "{word} subjectivity out of range");
            assert_eq!(word, word.to_lowercase(), "{word} must be lowercase");
        }
    }

    #[test]
    fn test_modifiers_are_not_assessments() {
        for &(word, _) in INTENSIFIERS {
            assert!(lookup(word).is_none(), "{word} is both an intensifier and a lexicon word");
        }
    }

    #[test]
    fn test_lexicon_words_survive_normalization() {
        let normalizer = crate::text::normalizer::TextNormalizer::english();
        for &(word, _, _) in LEXICON {
            assert!(!normalizer.is_stop_word(word), "{word} is removed by the stop list");
        }
    }

    #[test]
    fn test_negation_contractions() {
        assert!(is_negation("don't"));
        assert!(is_negation("isn\u{2019}t"));
        assert!(is_negation("never"));
        assert!(!is_negation("note"));
    }
}
