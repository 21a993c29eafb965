//! Corpus state for collapsed Gibbs sampling.
//!
//! All counts live in dense tables addressed by vocabulary index, topic and
//! document. Every token contributes exactly once to each of the word-topic,
//! topic-total and doc-topic counts for its current assignment; `unassign`
//! and `assign` are the only ways to change that and they always update all
//! three together.

use crate::error::{LdaError, Result};
use crate::random::{uniform_index, RandomSource};
use crate::tokenizer::Tokenizer;
use crate::vocabulary::{Vocabulary, WordId};

pub type TopicId = usize;

/// Row-major table of counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountMatrix {
    rows: usize,
    cols: usize,
    data: Vec<usize>,
}

impl CountMatrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> usize {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[usize] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    #[inline]
    fn increment(&mut self, row: usize, col: usize) {
        self.data[row * self.cols + col] += 1;
    }

    #[inline]
    fn decrement(&mut self, row: usize, col: usize) {
        self.data[row * self.cols + col] -= 1;
    }

    /// Sum of every row, column by column.
    pub fn column_sums(&self) -> Vec<usize> {
        let mut sums = vec![0usize; self.cols];
        for r in 0..self.rows {
            for (s, &c) in sums.iter_mut().zip(self.row(r)) {
                *s += c;
            }
        }
        sums
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CorpusState {
    num_topics: usize,
    vocabulary: Vocabulary,
    docs: Vec<Vec<WordId>>,      // tokenized docs as word IDs
    assignments: Vec<Vec<TopicId>>,
    word_topic: CountMatrix,     // [word][topic]
    topic_totals: Vec<usize>,    // [topic]
    doc_topic: CountMatrix,      // [doc][topic]
    doc_lengths: Vec<usize>,
}

impl CorpusState {
    /// Build the vocabulary and give every token a uniformly random topic.
    ///
    /// Fails before touching anything if `num_topics` is zero or `texts` is empty.
    pub fn initialize<S, R>(
        texts: &[S],
        tokenizer: &dyn Tokenizer,
        num_topics: usize,
        rng: &mut R,
    ) -> Result<Self>
    where
        S: AsRef<str>,
        R: RandomSource + ?Sized,
    {
        if num_topics < 1 {
            return Err(LdaError::InvalidConfiguration(
                "num_topics must be at least 1".into(),
            ));
        }
        if texts.is_empty() {
            return Err(LdaError::EmptyCorpus);
        }

        let tokenized: Vec<Vec<String>> = texts
            .iter()
            .map(|t| tokenizer.tokenize(t.as_ref()))
            .collect();
        let vocabulary = Vocabulary::from_documents(&tokenized);

        let docs: Vec<Vec<WordId>> = tokenized
            .iter()
            .map(|doc| doc.iter().filter_map(|w| vocabulary.get(w)).collect())
            .collect();
        let doc_lengths: Vec<usize> = docs.iter().map(Vec::len).collect();

        let mut state = Self {
            num_topics,
            word_topic: CountMatrix::zeros(vocabulary.len(), num_topics),
            topic_totals: vec![0; num_topics],
            doc_topic: CountMatrix::zeros(docs.len(), num_topics),
            assignments: docs.iter().map(|d| Vec::with_capacity(d.len())).collect(),
            vocabulary,
            docs,
            doc_lengths,
        };

        for d in 0..state.docs.len() {
            for pos in 0..state.docs[d].len() {
                let topic = uniform_index(rng, num_topics);
                state.assignments[d].push(topic);
                state.count(d, pos, topic);
            }
        }

        Ok(state)
    }

    fn count(&mut self, doc: usize, pos: usize, topic: TopicId) {
        let w = self.docs[doc][pos];
        self.word_topic.increment(w, topic);
        self.topic_totals[topic] += 1;
        self.doc_topic.increment(doc, topic);
    }

    /// Remove the token at `(doc, pos)` from all counts and return its topic.
    ///
    /// The token must be re-added with [`assign`](Self::assign) before any
    /// other token is touched.
    pub(crate) fn unassign(&mut self, doc: usize, pos: usize) -> TopicId {
        let w = self.docs[doc][pos];
        let topic = self.assignments[doc][pos];
        self.word_topic.decrement(w, topic);
        self.topic_totals[topic] -= 1;
        self.doc_topic.decrement(doc, topic);
        topic
    }

    pub(crate) fn assign(&mut self, doc: usize, pos: usize, topic: TopicId) {
        self.assignments[doc][pos] = topic;
        self.count(doc, pos, topic);
    }

    /// `(WordTopic[w][k] + β) / (TopicTotals[k] + V·β)`
    #[inline]
    pub fn word_likelihood(&self, word: WordId, topic: TopicId, beta: f64) -> f64 {
        let vb = self.vocabulary.len() as f64 * beta;
        (self.word_topic.get(word, topic) as f64 + beta) / (self.topic_totals[topic] as f64 + vb)
    }

    pub fn num_topics(&self) -> usize {
        self.num_topics
    }

    pub fn num_docs(&self) -> usize {
        self.docs.len()
    }

    pub fn num_tokens(&self) -> usize {
        self.doc_lengths.iter().sum()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn docs(&self) -> &[Vec<WordId>] {
        &self.docs
    }

    pub fn assignments(&self) -> &[Vec<TopicId>] {
        &self.assignments
    }

    pub fn word_topic(&self) -> &CountMatrix {
        &self.word_topic
    }

    pub fn topic_totals(&self) -> &[usize] {
        &self.topic_totals
    }

    pub fn doc_topic(&self) -> &CountMatrix {
        &self.doc_topic
    }

    pub fn doc_lengths(&self) -> &[usize] {
        &self.doc_lengths
    }

    /// Check the count invariants and that the counts match a full recount
    /// of the current assignments.
    pub fn is_consistent(&self) -> bool {
        if self.word_topic.column_sums() != self.topic_totals {
            return false;
        }
        for d in 0..self.docs.len() {
            if self.doc_topic.row(d).iter().sum::<usize>() != self.doc_lengths[d] {
                return false;
            }
        }

        let mut word_topic = CountMatrix::zeros(self.word_topic.rows(), self.num_topics);
        let mut doc_topic = CountMatrix::zeros(self.docs.len(), self.num_topics);
        for (d, doc) in self.docs.iter().enumerate() {
            for (&w, &k) in doc.iter().zip(&self.assignments[d]) {
                word_topic.increment(w, k);
                doc_topic.increment(d, k);
            }
        }
        word_topic == self.word_topic && doc_topic == self.doc_topic
    }
}
