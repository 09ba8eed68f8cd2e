//! Cosine-distance ranking of corpus entries against a query vector.
//!
//! The default [`NearestPolicy::DropNearest`] discards the single closest entry
//! before taking the top K, whether or not it is actually the query's own
//! posting. This reproduces the behavior the recommendations were tuned with:
//! when the profile text is itself in the corpus, the self-match would
//! otherwise always come first. Use [`NearestPolicy::KeepNearest`] for a true
//! top-K, or [`NearestPolicy::DropIdentical`] to drop only real self-matches.

use crate::corpus::{Corpus, CorpusEntry};
use crate::error::MatchError;
use crate::vector::{cosine_distance, TermVector};
use serde::{Deserialize, Serialize};

/// What to do with the nearest corpus entry before taking the top K.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum NearestPolicy {
    /// Unconditionally skip the single nearest entry (positions 2..=K+1).
    #[default]
    DropNearest,
    /// Return the true top K.
    KeepNearest,
    /// Skip leading entries whose distance is at most `epsilon`.
    DropIdentical { epsilon: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedMatch<'c> {
    pub entry: &'c CorpusEntry,
    /// Cosine distance to the query; lower is more similar.
    pub distance: f32,
}

/// Matches in ascending distance order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RankedResult<'c> {
    pub matches: Vec<RankedMatch<'c>>,
}

impl<'c> RankedResult<'c> {
    pub fn len(&self) -> usize { self.matches.len() }

    pub fn is_empty(&self) -> bool { self.matches.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &RankedMatch<'c>> { self.matches.iter() }

    pub fn ids(&self) -> Vec<&'c str> { self.matches.iter().map(|m| m.entry.id()).collect() }
}

/// Distance from the query to every corpus entry, in corpus order.
pub fn distances(corpus: &Corpus, query: &TermVector) -> Result<Vec<f32>, MatchError> {
    if corpus.is_empty() {
        return Err(MatchError::EmptyCorpus);
    }
    if query.dim() != corpus.dim() {
        return Err(MatchError::DimensionMismatch { expected: corpus.dim(), found: query.dim() });
    }
    Ok(corpus.entries().iter().map(|e| cosine_distance(&e.vector, query)).collect())
}

pub fn rank<'c>(corpus: &'c Corpus, query: &TermVector, k: usize, policy: NearestPolicy) -> Result<RankedResult<'c>, MatchError> {
    let dists = distances(corpus, query)?;
    let mut order: Vec<usize> = (0..dists.len()).collect();
    // stable: ties keep corpus order
    order.sort_by(|&a, &b| dists[a].total_cmp(&dists[b]));

    let skip = match policy {
        NearestPolicy::DropNearest => 1,
        NearestPolicy::KeepNearest => 0,
        NearestPolicy::DropIdentical { epsilon } => order.iter().take_while(|&&i| dists[i] <= epsilon).count(),
    };

    let mut matches = Vec::with_capacity(k.min(order.len()));
    for &i in order.iter().skip(skip).take(k) {
        let entry = corpus.get(i).ok_or(MatchError::EmptyCorpus)?;
        matches.push(RankedMatch { entry, distance: dists[i] });
    }
    tracing::debug!(corpus = corpus.len(), k, skipped = skip, returned = matches.len(), "ranked corpus");
    Ok(RankedResult { matches })
}

/// Rank every query vector independently.
pub fn rank_each<'c>(corpus: &'c Corpus, queries: &[TermVector], k: usize, policy: NearestPolicy) -> Result<Vec<RankedResult<'c>>, MatchError> {
    queries.iter().map(|q| rank(corpus, q, k, policy)).collect()
}
