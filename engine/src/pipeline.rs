use crate::config::EngineConfig;
use crate::corpus::MatchContext;
use crate::error::MatchError;
use crate::format::{build_records, DisplayRecord};
use crate::ranker::{rank, RankedResult};
use crate::tagger::PosTagger;
use crate::terms::{summarize, TermSummary};
use crate::vectorizer::VectorSpace;

/// Everything one request produces.
#[derive(Debug, Clone)]
pub struct Recommendation<'c> {
    pub ranked: RankedResult<'c>,
    pub records: Vec<DisplayRecord>,
    pub terms: TermSummary,
}

/// Match profile texts against the corpus.
///
/// The texts are joined into one query document. Nothing is returned unless
/// every stage succeeds. A zero `top_k` or `top_terms` is rejected up front.
pub fn recommend<'c, V, T, S>(ctx: &'c MatchContext<V>, config: &EngineConfig, tagger: &T, profile: &[S]) -> Result<Recommendation<'c>, MatchError>
where
    V: VectorSpace,
    T: PosTagger + ?Sized,
    S: AsRef<str>,
{
    if config.top_k == 0 {
        return Err(MatchError::Config { field: "top_k" });
    }
    if config.top_terms == 0 {
        return Err(MatchError::Config { field: "top_terms" });
    }
    let query_text = profile.iter().map(|s| s.as_ref()).collect::<Vec<_>>().join("\n");
    let query = ctx.space().transform(&[query_text])?.into_iter().next().ok_or(MatchError::Input)?;
    if query.is_zero() {
        tracing::warn!("profile text shares no vocabulary with the model");
    }
    let ranked = rank(ctx.corpus(), &query, config.top_k, config.nearest)?;
    if ranked.is_empty() {
        return Err(MatchError::EmptyCorpus);
    }
    let terms = summarize(&ranked, tagger, config.top_terms)?;
    let records = build_records(&ranked, &config.search_url);
    tracing::info!(matches = ranked.len(), distinct_terms = terms.table.len(), "recommendation ready");
    Ok(Recommendation { ranked, records, terms })
}
