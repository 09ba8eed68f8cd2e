//! Pre-fitted text-to-vector transform.
//!
//! The vocabulary and IDF weights come from an external training run and are
//! never updated here.

use crate::error::MatchError;
use crate::tokenizer::{analyze, Analyzer};
use crate::vector::{TermId, TermVector};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Anything that maps raw documents into a fixed vector space.
pub trait VectorSpace {
    /// Dimensionality of every vector this space produces.
    fn dim(&self) -> usize;

    /// One vector per input document. Fails with [`MatchError::Input`] when there
    /// is no text at all to transform.
    fn transform<S: AsRef<str>>(&self, docs: &[S]) -> Result<Vec<TermVector>, MatchError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TfScaling {
    /// Raw occurrence count.
    #[default]
    Raw,
    /// `1 + ln(count)`.
    Sublinear,
}

/// Fitted TF-IDF model: vocabulary, per-column IDF and the analyzer used at fit time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfModel {
    vocabulary: HashMap<String, TermId>,
    idf: Vec<f32>,
    tf: TfScaling,
    analyzer: Analyzer,
}

impl TfidfModel {
    pub fn new(vocabulary: HashMap<String, TermId>, idf: Vec<f32>, tf: TfScaling, analyzer: Analyzer) -> Result<Self> {
        if let Some((term, col)) = vocabulary.iter().find(|(_, c)| **c as usize >= idf.len()) {
            bail!("vocabulary term {term:?} maps to column {col} but model has {} columns", idf.len());
        }
        if let Some(col) = idf.iter().position(|w| !w.is_finite()) {
            bail!("idf weight for column {col} is not finite");
        }
        Ok(Self { vocabulary, idf, tf, analyzer })
    }

    pub fn vocabulary_len(&self) -> usize { self.vocabulary.len() }

    pub fn analyzer(&self) -> &Analyzer { &self.analyzer }

    fn transform_one(&self, text: &str) -> TermVector {
        let mut counts: HashMap<TermId, u32> = HashMap::new();
        for token in analyze(text, &self.analyzer) {
            if let Some(&col) = self.vocabulary.get(&token) {
                *counts.entry(col).or_insert(0) += 1;
            }
        }
        let pairs = counts
            .into_iter()
            .map(|(col, count)| {
                let tf = match self.tf {
                    TfScaling::Raw => count as f32,
                    TfScaling::Sublinear => 1.0 + (count as f32).ln(),
                };
                (col, tf * self.idf[col as usize])
            })
            .collect();
        // columns were validated in `new`
        TermVector::from_pairs(self.idf.len(), pairs)
            .unwrap_or_else(|| TermVector::zeros(self.idf.len()))
            .normalized()
    }
}

impl VectorSpace for TfidfModel {
    fn dim(&self) -> usize { self.idf.len() }

    fn transform<S: AsRef<str>>(&self, docs: &[S]) -> Result<Vec<TermVector>, MatchError> {
        if docs.iter().all(|d| d.as_ref().trim().is_empty()) {
            return Err(MatchError::Input);
        }
        let vectors: Vec<TermVector> = docs.iter().map(|d| self.transform_one(d.as_ref())).collect();
        tracing::debug!(docs = docs.len(), zero = vectors.iter().filter(|v| v.is_zero()).count(), "transformed documents");
        Ok(vectors)
    }
}
