//! Intent classification over bag-of-words features.
//!
//! A TF-IDF vectorizer feeding a multinomial logistic regression, trained
//! at startup from the intent patterns. The model is tiny (a handful of
//! classes, a few dozen patterns), so training runs in milliseconds and
//! prediction is one matrix-vector product plus a softmax.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::info;

use super::intents::IntentDef;
use crate::error::AppError;

/// Default probability threshold below which `predict` reports no match.
pub const DEFAULT_THRESHOLD: f32 = 0.15;

/// Full-batch gradient descent settings. Zero initialization plus a fixed
/// epoch count keeps training deterministic.
const EPOCHS: usize = 600;
const LEARNING_RATE: f32 = 0.5;
const L2_PENALTY: f32 = 1e-4;

/// Result of a successful prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Winning intent label
    pub label: String,
    /// Probability of that label (0.0 - 1.0)
    pub confidence: f32,
}

/// Bag-of-words TF-IDF vectorizer with a vocabulary fixed at fit time.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Build the vocabulary and IDF weights from the training documents.
    pub fn fit(documents: &[String]) -> Self {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();

        // Sorted unique terms so vector indices are stable across runs.
        let terms: BTreeSet<&String> = tokenized.iter().flatten().collect();
        let vocabulary: HashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(index, term)| (term.clone(), index))
            .collect();

        let mut document_frequency = vec![0usize; vocabulary.len()];
        for tokens in &tokenized {
            let mut seen = HashSet::new();
            for token in tokens {
                if let Some(&index) = vocabulary.get(token) {
                    if seen.insert(index) {
                        document_frequency[index] += 1;
                    }
                }
            }
        }

        // Smoothed IDF, as if one extra document contained every term.
        let n_documents = tokenized.len() as f32;
        let idf = document_frequency
            .iter()
            .map(|&df| ((1.0 + n_documents) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        Self { vocabulary, idf }
    }

    /// Number of distinct terms in the fitted vocabulary.
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Map text to an L2-normalized TF-IDF vector. Terms outside the fitted
    /// vocabulary are ignored.
    pub fn transform(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.vocabulary.len()];
        for token in tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&token) {
                vector[index] += 1.0;
            }
        }

        for (index, value) in vector.iter_mut().enumerate() {
            *value *= self.idf[index];
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in vector.iter_mut() {
                *value /= norm;
            }
        }

        vector
    }
}

/// Word tokens of at least two alphanumeric characters, lowercased.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| word.chars().count() >= 2)
        .map(|word| word.to_string())
        .collect()
}

/// Multi-class linear probability model over TF-IDF features.
pub struct IntentClassifier {
    vectorizer: TfidfVectorizer,
    labels: Vec<String>,
    /// One weight row per label, `vocabulary_len` columns
    weights: Vec<Vec<f32>>,
    bias: Vec<f32>,
}

impl IntentClassifier {
    /// Fit the vocabulary and the linear model from the intent patterns.
    ///
    /// Labels are kept in first-seen order; ties in `predict` resolve to
    /// the earlier label.
    pub fn train(intents: &[IntentDef]) -> Result<Self, AppError> {
        let mut texts: Vec<String> = Vec::new();
        let mut targets: Vec<usize> = Vec::new();
        let mut labels: Vec<String> = Vec::new();

        for intent in intents {
            if intent.patterns.is_empty() {
                continue;
            }
            let class = match labels.iter().position(|label| label == &intent.label) {
                Some(index) => index,
                None => {
                    labels.push(intent.label.clone());
                    labels.len() - 1
                }
            };
            for pattern in &intent.patterns {
                texts.push(pattern.clone());
                targets.push(class);
            }
        }

        if labels.len() < 2 {
            return Err(AppError::Training(format!(
                "need at least two intents with patterns, got {}",
                labels.len()
            )));
        }

        let vectorizer = TfidfVectorizer::fit(&texts);
        let features: Vec<Vec<f32>> = texts.iter().map(|t| vectorizer.transform(t)).collect();

        let n_classes = labels.len();
        let n_features = vectorizer.vocabulary_len();
        let n_samples = features.len() as f32;

        let mut weights = vec![vec![0.0f32; n_features]; n_classes];
        let mut bias = vec![0.0f32; n_classes];

        // Full-batch gradient descent on the softmax cross-entropy loss.
        for _ in 0..EPOCHS {
            let mut weight_grad = vec![vec![0.0f32; n_features]; n_classes];
            let mut bias_grad = vec![0.0f32; n_classes];

            for (x, &target) in features.iter().zip(targets.iter()) {
                let probs = softmax(&raw_scores(&weights, &bias, x));
                for class in 0..n_classes {
                    let error = probs[class] - if class == target { 1.0 } else { 0.0 };
                    bias_grad[class] += error;
                    for (feature, &value) in x.iter().enumerate() {
                        if value != 0.0 {
                            weight_grad[class][feature] += error * value;
                        }
                    }
                }
            }

            for class in 0..n_classes {
                bias[class] -= LEARNING_RATE * bias_grad[class] / n_samples;
                for feature in 0..n_features {
                    weights[class][feature] -= LEARNING_RATE
                        * (weight_grad[class][feature] / n_samples
                            + L2_PENALTY * weights[class][feature]);
                }
            }
        }

        info!(
            classes = n_classes,
            vocabulary = n_features,
            samples = texts.len(),
            "Trained intent classifier"
        );

        Ok(Self {
            vectorizer,
            labels,
            weights,
            bias,
        })
    }

    /// Labels in training order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Per-label probability vector; sums to 1.
    pub fn predict_proba(&self, text: &str) -> Vec<f32> {
        let x = self.vectorizer.transform(text);
        softmax(&raw_scores(&self.weights, &self.bias, &x))
    }

    /// Highest-probability label if it clears the threshold.
    ///
    /// Empty or whitespace-only input never reaches the model.
    pub fn predict(&self, text: &str, threshold: f32) -> Option<Prediction> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let probs = self.predict_proba(text);

        // Strict comparison: ties resolve to the first label in label order.
        let mut best = 0;
        for (index, &prob) in probs.iter().enumerate() {
            if prob > probs[best] {
                best = index;
            }
        }

        if probs[best] >= threshold {
            Some(Prediction {
                label: self.labels[best].clone(),
                confidence: probs[best],
            })
        } else {
            None
        }
    }
}

fn raw_scores(weights: &[Vec<f32>], bias: &[f32], x: &[f32]) -> Vec<f32> {
    weights
        .iter()
        .zip(bias.iter())
        .map(|(row, b)| {
            b + row
                .iter()
                .zip(x.iter())
                .map(|(weight, value)| weight * value)
                .sum::<f32>()
        })
        .collect()
}

/// Numerically stable softmax.
fn softmax(scores: &[f32]) -> Vec<f32> {
    let max = scores.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.iter().map(|e| e / sum).collect()
}
