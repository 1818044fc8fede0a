//! Text normalization and tokenization.
//!
//! Normalization steps, in order:
//! 1. sentence punctuation is removed (`. , ; : ! ?` by default)
//! 1. hyphens get surrounded by single spaces
//! 1. text is lowercased
//! 1. apostrophes following a word character get a trailing space (`l'acqua` -> `l' acqua`)
//! 1. whitespace runs are collapsed, ends are trimmed
//!
//! Tokens are then split on spaces.
use lazy_static::lazy_static;
use regex::Regex;

/// Default stripped punctuation.
pub const DEFAULT_PUNCTUATION: &str = ".,;:!?";

lazy_static! {
    static ref HYPHEN: Regex = Regex::new(r"\s*-\s*").unwrap();
    static ref APOSTROPHE: Regex = Regex::new(r"(\w)'").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Converts a text part into word tokens.
pub trait Tokenize {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Punctuation-stripping, lowercasing word tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    punctuation: Vec<char>,
}

impl Tokenizer {
    /// Use a custom set of stripped punctuation characters.
    pub fn with_punctuation(punctuation: &str) -> Self {
        Self {
            punctuation: punctuation.chars().collect(),
        }
    }

    /// Normalize `text` without splitting it.
    pub fn normalize(&self, text: &str) -> String {
        let text: String = text
            .chars()
            .filter(|c| !self.punctuation.contains(c))
            .collect();
        let text = HYPHEN.replace_all(&text, " - ");
        let text = text.to_lowercase();
        let text = APOSTROPHE.replace_all(&text, "${1}' ");
        let text = WHITESPACE.replace_all(&text, " ");
        text.trim().to_string()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::with_punctuation(DEFAULT_PUNCTUATION)
    }
}

impl Tokenize for Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.normalize(text)
            .split(' ')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(String::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(s: &str) -> Vec<String> {
        Tokenizer::default().tokenize(s)
    }

    #[test]
    fn punctuation_and_case() {
        assert_eq!(tok("Il gatto, dorme!"), vec!["il", "gatto", "dorme"]);
        assert_eq!(tok("Ël gat ëd DEURM?"), vec!["ël", "gat", "ëd", "deurm"]);
    }

    #[test]
    fn hyphens() {
        assert_eq!(tok("nord-ovest"), vec!["nord", "-", "ovest"]);
        assert_eq!(tok("a  -   b"), vec!["a", "-", "b"]);
    }

    #[test]
    fn apostrophes() {
        assert_eq!(tok("l'acqua"), vec!["l'", "acqua"]);
        assert_eq!(tok("ch'a l'é"), vec!["ch'", "a", "l'", "é"]);
        // only apostrophes following a word character are split
        assert_eq!(tok("'d nòst"), vec!["'d", "nòst"]);
        assert_eq!(tok("ij fieuj'"), vec!["ij", "fieuj'"]);
    }

    #[test]
    fn whitespace() {
        assert_eq!(tok("  uno \t due\n\ntre "), vec!["uno", "due", "tre"]);
        assert!(tok("   ").is_empty());
        assert!(tok(" ... ,; ").is_empty());
    }

    #[test]
    fn custom_punctuation() {
        let t = Tokenizer::with_punctuation("\"«»");
        assert_eq!(t.tokenize("«Ciao.»"), vec!["ciao."]);
        assert_eq!(t.tokenize("Sì, certo!"), vec!["sì,", "certo!"]);
    }

    #[test]
    fn normalize() {
        assert_eq!(
            Tokenizer::default().normalize("  Dell'Italia:  nord-est. "),
            "dell' italia nord - est"
        );
    }
}
