use std::{
    collections::{hash_map::Entry, HashMap},
    fmt,
};

use crate::error::{ClassifierError, Result};
use crate::tokenizer::tokenize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    pub const ALL: [Label; 2] = [Label::Positive, Label::Negative];

    /// Maps the numeric label column of the dataset ("1" / "0") onto a label.
    pub fn from_dataset_field(field: &str) -> Option<Self> {
        match field {
            "1" => Some(Label::Positive),
            "0" => Some(Label::Negative),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Positive => "positive",
            Label::Negative => "negative",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picks the higher scoring label. `Positive` wins only when strictly
/// greater, so ties and missing scores go to `Negative`.
pub fn best_label(scores: &HashMap<Label, f64>) -> Label {
    let score = |label: Label| scores.get(&label).copied().unwrap_or(0.0);

    if score(Label::Positive) > score(Label::Negative) {
        Label::Positive
    } else {
        Label::Negative
    }
}

/// Per-label occurrence counts of a single word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordFrequency {
    pub positive: usize,
    pub negative: usize,
}

impl WordFrequency {
    pub fn count(&self, label: Label) -> usize {
        match label {
            Label::Positive => self.positive,
            Label::Negative => self.negative,
        }
    }

    fn increment(&mut self, label: Label) {
        match label {
            Label::Positive => self.positive += 1,
            Label::Negative => self.negative += 1,
        }
    }

    fn total(&self) -> usize {
        self.positive + self.negative
    }
}

/// Multinomial Naive Bayes over whitespace tokens with add-one smoothing.
///
/// Training needs `&mut self` and classification only `&self`, so sharing a
/// trained model across threads needs external synchronization only if it is
/// retrained while being read.
#[derive(Debug, Clone)]
pub struct NaiveBayesClassifier {
    sentences: HashMap<Label, Vec<String>>,
    words: HashMap<String, WordFrequency>,
}

impl Default for NaiveBayesClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NaiveBayesClassifier {
    pub fn new() -> Self {
        let sentences = Label::ALL.iter().map(|&label| (label, Vec::new())).collect();

        NaiveBayesClassifier {
            sentences,
            words: HashMap::new(),
        }
    }

    /// Adds every labelled sentence to the model. Repeated calls accumulate.
    pub fn train(&mut self, dataset: &HashMap<String, Label>) {
        for (sentence, &label) in dataset {
            self.add_sentence(sentence, label);
            for word in tokenize(sentence) {
                self.add_word(word, label);
            }
        }

        tracing::debug!(
            trained = dataset.len(),
            positive = self.sentence_count(Label::Positive),
            negative = self.sentence_count(Label::Negative),
            vocabulary = self.vocabulary_len(),
            "trained classifier"
        );
    }

    /// Scores a sentence under both labels.
    ///
    /// The scores are relative likelihoods and do not sum to one; compare them
    /// to pick a label.
    pub fn classify(&self, sentence: &str) -> Result<HashMap<Label, f64>> {
        if self.total_sentences() == 0 {
            return Err(ClassifierError::invalid_state(
                "classifier has not been trained on any sentence",
            ));
        }

        let words: Vec<&str> = tokenize(sentence).collect();
        let distinct = self.total_distinct_word_count();
        if !words.is_empty() && distinct == 0 {
            return Err(ClassifierError::invalid_state(
                "classifier vocabulary is empty",
            ));
        }

        let combined_total = self.total_word_count(None);
        let scores = Label::ALL
            .iter()
            .map(|&label| {
                let label_total = self.total_word_count(Some(label));
                let score =
                    self.probability(&words, label, label_total, combined_total, distinct);
                (label, score)
            })
            .collect();

        Ok(scores)
    }

    /// Classifies a sentence and returns the higher scoring label.
    pub fn predict(&self, sentence: &str) -> Result<Label> {
        self.classify(sentence).map(|scores| best_label(&scores))
    }

    /// Fraction of training sentences carrying `label`.
    pub fn prior_prob(&self, label: Label) -> f64 {
        self.sentence_count(label) as f64 / self.total_sentences() as f64
    }

    /// Sum of word occurrences under `label`, or under both labels for `None`.
    pub fn total_word_count(&self, label: Option<Label>) -> usize {
        let (positive, negative) = self.words.values().fold((0, 0), |(pos, neg), wf| {
            (pos + wf.positive, neg + wf.negative)
        });

        match label {
            Some(Label::Positive) => positive,
            Some(Label::Negative) => negative,
            None => positive + negative,
        }
    }

    /// Counts each word once for every label it was seen under, so a word
    /// present in both labels contributes two.
    pub fn total_distinct_word_count(&self) -> usize {
        self.words
            .values()
            .map(|wf| usize::from(wf.positive > 0) + usize::from(wf.negative > 0))
            .sum()
    }

    pub fn sentence_count(&self, label: Label) -> usize {
        self.sentences.get(&label).map_or(0, Vec::len)
    }

    pub fn word_frequency(&self, word: &str) -> Option<&WordFrequency> {
        self.words.get(word)
    }

    pub fn vocabulary_len(&self) -> usize {
        self.words.len()
    }

    fn total_sentences(&self) -> usize {
        self.sentences.values().map(Vec::len).sum()
    }

    fn add_sentence(&mut self, sentence: &str, label: Label) {
        self.sentences
            .entry(label)
            .or_default()
            .push(sentence.to_string());
    }

    fn add_word(&mut self, word: &str, label: Label) {
        match self.words.entry(word.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(WordFrequency::default()),
        }
        .increment(label);
    }

    // Two separate passes: the first multiplies in the smoothed per-label
    // likelihoods, the second divides out the smoothed overall frequencies.
    // Kept as two passes so results match the reference scores exactly.
    fn probability(
        &self,
        words: &[&str],
        label: Label,
        label_total: usize,
        combined_total: usize,
        distinct: usize,
    ) -> f64 {
        let mut prob = self.prior_prob(label);

        for word in words {
            let count = self.words.get(*word).map_or(0, |wf| wf.count(label));
            prob *= (count + 1) as f64 / (label_total + distinct) as f64;
        }

        for word in words {
            let count = self.words.get(*word).map_or(0, WordFrequency::total);
            prob /= (count + 1) as f64 / (combined_total + distinct) as f64;
        }

        prob
    }
}
