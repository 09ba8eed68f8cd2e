use thiserror::Error;

/// Failures the matching core surfaces to its caller.
///
/// Each variant is a distinct condition so the presentation boundary can show a
/// specific message instead of a generic failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    /// No usable query text: the document collection was empty or only blank.
    #[error("no query text supplied")]
    Input,
    /// The vector space model and the corpus (or query) disagree on dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    /// Nothing to rank against.
    #[error("corpus is empty")]
    EmptyCorpus,
    /// A corpus vector has no posting metadata to join with.
    #[error("corpus entry {id} has no posting metadata")]
    MissingMetadata { id: String },
    /// No tokens survived tokenization of the ranked descriptions.
    #[error("no text available for term statistics")]
    EmptyInput,
    /// A request asked for zero matches or zero terms per category.
    #[error("invalid configuration: {field} must be at least 1")]
    Config { field: &'static str },
}

impl MatchError {
    /// Single user-facing status line for this failure.
    pub fn status_message(&self) -> &'static str {
        match self {
            MatchError::Input => "No profile text collected.",
            MatchError::DimensionMismatch { .. } => {
                "The job model and the posting vectors do not match; rebuild the artifacts."
            }
            MatchError::EmptyCorpus | MatchError::MissingMetadata { .. } => "No matches found.",
            MatchError::EmptyInput => "No descriptions available for the matched postings.",
            MatchError::Config { .. } => "Invalid matcher configuration.",
        }
    }

    /// True for the conditions that mean "nothing to rank".
    pub fn is_empty_corpus(&self) -> bool {
        matches!(self, MatchError::EmptyCorpus | MatchError::MissingMetadata { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_failure_is_empty_corpus_class() {
        let err = MatchError::MissingMetadata { id: "42".into() };
        assert!(err.is_empty_corpus());
        assert_eq!(err.status_message(), MatchError::EmptyCorpus.status_message());
        assert!(!MatchError::EmptyInput.is_empty_corpus());
    }

    #[test]
    fn messages_are_distinct_for_input_and_corpus() {
        assert_ne!(MatchError::Input.status_message(), MatchError::EmptyCorpus.status_message());
        let err = MatchError::DimensionMismatch { expected: 3, found: 2 };
        assert_eq!(err.to_string(), "dimension mismatch: expected 3, found 2");
    }

    #[test]
    fn config_error_names_the_field() {
        let err = MatchError::Config { field: "top_k" };
        assert!(!err.is_empty_corpus());
        assert_eq!(err.to_string(), "invalid configuration: top_k must be at least 1");
        assert_ne!(err.status_message(), MatchError::EmptyCorpus.status_message());
    }
}
