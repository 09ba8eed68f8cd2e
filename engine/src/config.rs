use crate::format::DEFAULT_SEARCH_URL;
use crate::ranker::NearestPolicy;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of postings to recommend.
    pub top_k: usize,
    /// Tokens kept per grammatical category.
    pub top_terms: usize,
    pub nearest: NearestPolicy,
    /// Search URL prefix that `keywords=` and `location=` are appended to.
    pub search_url: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { top_k: 10, top_terms: 10, nearest: NearestPolicy::default(), search_url: DEFAULT_SEARCH_URL.to_string() }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            bail!("top_k must be at least 1");
        }
        if self.top_terms == 0 {
            bail!("top_terms must be at least 1");
        }
        url::Url::parse(&self.search_url).with_context(|| format!("invalid search url {:?}", self.search_url))?;
        if !(self.search_url.ends_with('?') || self.search_url.ends_with('&')) {
            bail!("search url {:?} must end with '?' or '&'", self.search_url);
        }
        if let NearestPolicy::DropIdentical { epsilon } = self.nearest {
            if !(0.0..=2.0).contains(&epsilon) {
                bail!("epsilon {epsilon} outside the cosine distance range");
            }
        }
        Ok(())
    }
}
