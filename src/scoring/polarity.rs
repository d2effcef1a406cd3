//! Polarity estimation boundary.
//!
//! The sentiment pipeline only needs a `text -> [-1, 1]` function; the
//! `PolarityModel` trait is that seam. The built-in `LexiconModel` is a
//! compound-style lexicon scorer good enough for CRM chat transcripts;
//! anything implementing the trait (a remote model, a different
//! lexicon) drops in without touching the pipeline.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A polarity function over arbitrary natural-language input.
///
/// Implementations must accept any string (including empty or
/// non-linguistic input) and return a score in [-1.0, 1.0]. The
/// function is infallible.
pub trait PolarityModel: Sync + Send {
    fn polarity(&self, text: &str) -> f64;
}

/// Valence entries for the built-in lexicon, on a [-4, 4] scale.
static LEXICON: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let entries: &[(&str, f64)] = &[
        ("interested", 1.7),
        ("interesting", 1.6),
        ("great", 3.1),
        ("good", 1.9),
        ("happy", 2.7),
        ("glad", 2.2),
        ("love", 3.2),
        ("like", 1.5),
        ("promising", 1.8),
        ("satisfied", 2.0),
        ("excellent", 3.2),
        ("perfect", 2.7),
        ("helpful", 1.8),
        ("thanks", 1.9),
        ("thank", 1.9),
        ("forward", 1.0),
        ("yes", 1.2),
        ("sure", 1.3),
        ("agree", 1.5),
        ("deal", 1.1),
        ("ready", 1.2),
        ("wonderful", 2.7),
        ("awesome", 3.1),
        ("doubt", -1.5),
        ("doubts", -1.5),
        ("bad", -2.5),
        ("poor", -2.1),
        ("hate", -2.7),
        ("dislike", -1.6),
        ("disappointed", -2.1),
        ("disappointing", -2.2),
        ("unhappy", -1.8),
        ("dissatisfied", -2.0),
        ("expensive", -1.1),
        ("problem", -1.7),
        ("problems", -1.7),
        ("issue", -1.2),
        ("issues", -1.2),
        ("concern", -1.1),
        ("concerns", -1.1),
        ("cancel", -1.8),
        ("refund", -1.3),
        ("waste", -2.4),
        ("wrong", -2.1),
        ("confusing", -1.5),
        ("worried", -1.6),
        ("unfortunately", -1.4),
    ];
    entries.iter().copied().collect()
});

/// Words that flip the valence of what follows.
const NEGATORS: &[&str] = &["not", "no", "never", "dont", "don't", "cannot", "can't", "isnt", "isn't", "wont", "won't"];

/// Intensity boosters and dampeners applied to the following word.
static BOOSTERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let entries: &[(&str, f64)] = &[
        ("very", 0.293),
        ("really", 0.293),
        ("extremely", 0.293),
        ("so", 0.293),
        ("quite", 0.2),
        ("somewhat", -0.15),
        ("slightly", -0.293),
        ("barely", -0.293),
    ];
    entries.iter().copied().collect()
});

// Empirical normalization constant; keeps single strong words from
// saturating the scale.
const NORM_ALPHA: f64 = 15.0;
const NEGATION_SCALAR: f64 = -0.74;

/// Compound-style lexicon polarity model.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconModel;

impl LexiconModel {
    pub fn new() -> Self {
        Self
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|t| !t.is_empty())
            .map(|t| t.to_string())
            .collect()
    }

    fn valence_at(tokens: &[String], index: usize) -> f64 {
        let word = tokens[index].as_str();
        let Some(&base) = LEXICON.get(word) else {
            return 0.0;
        };

        let mut valence = base;
        // Look back up to three tokens for negators and boosters.
        let window_start = index.saturating_sub(3);
        for prior in &tokens[window_start..index] {
            if NEGATORS.contains(&prior.as_str()) {
                valence *= NEGATION_SCALAR;
            } else if let Some(&boost) = BOOSTERS.get(prior.as_str()) {
                valence += boost * valence.signum();
            }
        }
        valence
    }
}

impl PolarityModel for LexiconModel {
    fn polarity(&self, text: &str) -> f64 {
        let tokens = Self::tokenize(text);
        let sum: f64 = (0..tokens.len())
            .map(|i| Self::valence_at(&tokens, i))
            .sum();

        if sum == 0.0 {
            return 0.0;
        }
        (sum / (sum * sum + NORM_ALPHA).sqrt()).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_neutral() {
        assert_eq!(LexiconModel::new().polarity(""), 0.0);
    }

    #[test]
    fn unknown_words_are_neutral() {
        assert_eq!(LexiconModel::new().polarity("the quarterly ledger"), 0.0);
    }

    #[test]
    fn positive_message_scores_positive() {
        let score = LexiconModel::new().polarity("Great, I'm happy with the service.");
        assert!(score > 0.2, "score was {}", score);
    }

    #[test]
    fn negative_message_scores_negative() {
        let score = LexiconModel::new().polarity("This is disappointing, I have doubts.");
        assert!(score < -0.2, "score was {}", score);
    }

    #[test]
    fn negation_flips_valence() {
        let model = LexiconModel::new();
        let plain = model.polarity("I am interested.");
        let negated = model.polarity("I am not interested.");
        assert!(plain > 0.0);
        assert!(negated < 0.0);
    }

    #[test]
    fn output_stays_in_range_for_arbitrary_input() {
        let model = LexiconModel::new();
        for text in [
            "great great great great great great great great",
            "hate hate hate hate hate hate hate hate hate",
            "!!!???",
            "12345 67890",
        ] {
            let score = model.polarity(text);
            assert!((-1.0..=1.0).contains(&score), "{} -> {}", text, score);
        }
    }
}
