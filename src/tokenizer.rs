use std::collections::HashSet;

/// Turns raw text into an ordered sequence of normalized tokens.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Lowercases, deletes everything that is not an ASCII letter or whitespace,
/// then splits on whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleTokenizer;

impl Tokenizer for SimpleTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
            .collect::<String>()
            .split_whitespace()
            .map(|tok| tok.to_string())
            .collect()
    }
}

fn default_stopwords() -> HashSet<String> {
    [
        "a","an","and","are","as","at","be","by","for","from","has","in",
        "is","it","of","on","or","that","the","to","was","were","will","with",
        "http","https","ftp","s3"
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Splits on any non-alphabetic character and drops short tokens and stopwords.
#[derive(Debug, Clone)]
pub struct StopwordTokenizer {
    stopwords: HashSet<String>,
    min_len: usize,
}

impl Default for StopwordTokenizer {
    fn default() -> Self {
        Self {
            stopwords: default_stopwords(),
            min_len: 2,
        }
    }
}

impl StopwordTokenizer {
    pub fn new<I, S>(stopwords: I, min_len: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stopwords: stopwords.into_iter().map(Into::into).collect(),
            min_len,
        }
    }
}

impl Tokenizer for StopwordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .chars()
            .map(|c| if c.is_alphabetic() { c } else { ' ' })
            .collect::<String>()
            .split_whitespace()
            .filter(|tok| tok.chars().count() >= self.min_len && !self.stopwords.contains(*tok))
            .map(|tok| tok.to_string())
            .collect()
    }
}
