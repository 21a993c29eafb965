use std::collections::HashMap;

use crate::tokenizer::Tokenizer;

pub type WordId = usize;

/// Bijective token <-> index mapping. Indices follow first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
    word_to_id: HashMap<String, WordId>,
}

impl Vocabulary {
    /// Tokenize `texts` in order and index every new token.
    pub fn build<S: AsRef<str>>(texts: &[S], tokenizer: &dyn Tokenizer) -> Self {
        let tokenized: Vec<Vec<String>> = texts
            .iter()
            .map(|t| tokenizer.tokenize(t.as_ref()))
            .collect();
        Self::from_documents(&tokenized)
    }

    pub fn from_documents(docs: &[Vec<String>]) -> Self {
        let mut vocab = Self::default();
        for doc in docs {
            for w in doc {
                vocab.insert(w);
            }
        }
        vocab
    }

    /// Return the index of `token`, assigning the next free one if unseen.
    fn insert(&mut self, token: &str) -> WordId {
        if let Some(&id) = self.word_to_id.get(token) {
            return id;
        }
        let id = self.words.len();
        self.words.push(token.to_string());
        self.word_to_id.insert(token.to_string(), id);
        id
    }

    pub fn get(&self, token: &str) -> Option<WordId> {
        self.word_to_id.get(token).copied()
    }

    pub fn word(&self, id: WordId) -> Option<&str> {
        self.words.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
