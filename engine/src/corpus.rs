use crate::error::MatchError;
use crate::vector::TermVector;
use crate::vectorizer::VectorSpace;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Metadata for one job posting, as exported by the corpus source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    #[serde(rename = "job_title")]
    pub title: String,
    /// Free text used for term statistics.
    #[serde(rename = "pos_docs", default)]
    pub description: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CorpusEntry {
    pub posting: JobPosting,
    pub vector: TermVector,
}

impl CorpusEntry {
    pub fn id(&self) -> &str { &self.posting.id }
}

/// Read-only collection of postings with their precomputed vectors.
///
/// Every entry shares one dimensionality and identifiers are unique.
#[derive(Debug, Clone)]
pub struct Corpus {
    dim: usize,
    entries: Vec<CorpusEntry>,
}

impl Corpus {
    /// Join vector rows with posting metadata by identifier, keeping vector row order.
    ///
    /// Two postings sharing an identifier make the join ambiguous and are rejected.
    pub fn assemble(rows: Vec<(String, TermVector)>, postings: Vec<JobPosting>) -> Result<Self, MatchError> {
        let mut by_id: HashMap<String, JobPosting> = HashMap::with_capacity(postings.len());
        for p in postings {
            if by_id.contains_key(&p.id) {
                return Err(MatchError::MissingMetadata { id: p.id });
            }
            by_id.insert(p.id.clone(), p);
        }
        let mut entries = Vec::with_capacity(rows.len());
        for (id, vector) in rows {
            let posting = by_id.remove(&id).ok_or_else(|| MatchError::MissingMetadata { id: id.clone() })?;
            entries.push(CorpusEntry { posting, vector });
        }
        Self::new(entries)
    }

    pub fn new(entries: Vec<CorpusEntry>) -> Result<Self, MatchError> {
        let first = entries.first().ok_or(MatchError::EmptyCorpus)?;
        let dim = first.vector.dim();
        if let Some(bad) = entries.iter().find(|e| e.vector.dim() != dim) {
            return Err(MatchError::DimensionMismatch { expected: dim, found: bad.vector.dim() });
        }
        let mut seen = HashSet::new();
        if let Some(dup) = entries.iter().find(|e| !seen.insert(e.id())) {
            // a duplicate row can never be joined unambiguously
            return Err(MatchError::MissingMetadata { id: dup.id().to_string() });
        }
        Ok(Self { dim, entries })
    }

    pub fn dim(&self) -> usize { self.dim }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn entries(&self) -> &[CorpusEntry] { &self.entries }

    pub fn get(&self, index: usize) -> Option<&CorpusEntry> { self.entries.get(index) }
}

/// Process-wide read-only state: the fitted vector space and the corpus it was fitted on.
///
/// Built once at startup and shared by reference across requests.
#[derive(Debug)]
pub struct MatchContext<V> {
    space: V,
    corpus: Corpus,
}

impl<V: VectorSpace> MatchContext<V> {
    pub fn new(space: V, corpus: Corpus) -> Result<Self, MatchError> {
        if space.dim() != corpus.dim() {
            return Err(MatchError::DimensionMismatch { expected: space.dim(), found: corpus.dim() });
        }
        Ok(Self { space, corpus })
    }

    pub fn space(&self) -> &V { &self.space }

    pub fn corpus(&self) -> &Corpus { &self.corpus }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(id: &str, title: &str) -> JobPosting {
        JobPosting { id: id.into(), title: title.into(), description: None, city: None, state: None }
    }

    #[test]
    fn assemble_joins_in_vector_order() {
        let rows = vec![
            ("b".to_string(), TermVector::from_dense(&[0.0, 1.0])),
            ("a".to_string(), TermVector::from_dense(&[1.0, 0.0])),
        ];
        let corpus = Corpus::assemble(rows, vec![posting("a", "A"), posting("b", "B")]).unwrap();
        let ids: Vec<&str> = corpus.entries().iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn assemble_fails_on_missing_metadata() {
        let rows = vec![("x".to_string(), TermVector::from_dense(&[1.0]))];
        let err = Corpus::assemble(rows, vec![posting("a", "A")]).unwrap_err();
        assert_eq!(err, MatchError::MissingMetadata { id: "x".into() });
    }

    #[test]
    fn assemble_fails_on_duplicate_postings() {
        let rows = vec![("a".to_string(), TermVector::from_dense(&[1.0]))];
        let err = Corpus::assemble(rows, vec![posting("a", "First"), posting("a", "Second")]).unwrap_err();
        assert_eq!(err, MatchError::MissingMetadata { id: "a".into() });
    }

    #[test]
    fn empty_corpus_is_rejected() {
        assert_eq!(Corpus::new(vec![]).unwrap_err(), MatchError::EmptyCorpus);
    }

    #[test]
    fn mixed_dimensions_are_rejected() {
        let entries = vec![
            CorpusEntry { posting: posting("a", "A"), vector: TermVector::zeros(2) },
            CorpusEntry { posting: posting("b", "B"), vector: TermVector::zeros(3) },
        ];
        assert_eq!(Corpus::new(entries).unwrap_err(), MatchError::DimensionMismatch { expected: 2, found: 3 });
    }

    #[test]
    fn posting_reads_source_column_names() {
        let p: JobPosting = serde_json::from_str(r#"{"id":"7","job_title":"Nurse","pos_docs":"care","city":null}"#).unwrap();
        assert_eq!(p.title, "Nurse");
        assert_eq!(p.description.as_deref(), Some("care"));
        assert!(p.city.is_none() && p.state.is_none());
        assert!(serde_json::from_str::<JobPosting>(r#"{"id":"7"}"#).is_err());
    }
}
