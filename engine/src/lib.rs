pub mod config;
pub mod corpus;
pub mod error;
pub mod format;
pub mod persist;
pub mod pipeline;
pub mod ranker;
pub mod tagger;
pub mod terms;
pub mod tokenizer;
pub mod vector;
pub mod vectorizer;

pub use config::EngineConfig;
pub use corpus::{Corpus, CorpusEntry, JobPosting, MatchContext};
pub use error::MatchError;
pub use format::DisplayRecord;
pub use pipeline::{recommend, Recommendation};
pub use ranker::{rank, NearestPolicy, RankedMatch, RankedResult};
pub use tagger::{Category, LexiconTagger, PosTagger, Tag};
pub use terms::{summarize, ChartRow, TermFrequencyTable, TermSummary};
pub use vector::{cosine_distance, TermId, TermVector};
pub use vectorizer::{TfScaling, TfidfModel, VectorSpace};
