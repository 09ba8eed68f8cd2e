use crate::error::MatchError;
use crate::ranker::RankedResult;
use crate::tagger::{Category, PosTagger, Tag};
use crate::tokenizer::words;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermCount {
    pub token: String,
    pub count: u32,
    pub tag: Tag,
}

/// Distinct tokens with occurrence counts, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct TermFrequencyTable {
    terms: Vec<TermCount>,
    index: HashMap<String, usize>,
}

impl TermFrequencyTable {
    /// Count tokens; every distinct token is tagged once, on first sight.
    pub fn from_tokens<I, T>(tokens: I, tagger: &T) -> Self
    where
        I: IntoIterator<Item = String>,
        T: PosTagger + ?Sized,
    {
        let mut table = Self::default();
        for token in tokens {
            match table.index.get(&token) {
                Some(&i) => table.terms[i].count += 1,
                None => {
                    let tag = tagger.tag(&token);
                    table.index.insert(token.clone(), table.terms.len());
                    table.terms.push(TermCount { token, count: 1, tag });
                }
            }
        }
        table
    }

    pub fn get(&self, token: &str) -> Option<&TermCount> {
        self.index.get(token).map(|&i| &self.terms[i])
    }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    pub fn total(&self) -> u64 { self.terms.iter().map(|t| t.count as u64).sum() }

    pub fn iter(&self) -> impl Iterator<Item = &TermCount> { self.terms.iter() }

    /// Top `n` tokens of a category by count; ties keep first-seen order.
    pub fn top(&self, category: Category, n: usize) -> Vec<&TermCount> {
        let mut picked: Vec<&TermCount> = self.terms.iter().filter(|t| t.tag.category() == Some(category)).collect();
        picked.sort_by(|a, b| b.count.cmp(&a.count));
        picked.truncate(n);
        picked
    }
}

/// One bar of a per-category chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub category: &'static str,
    pub token: String,
    pub frequency: u32,
}

#[derive(Debug, Clone)]
pub struct TermSummary {
    pub table: TermFrequencyTable,
    pub top: BTreeMap<Category, Vec<TermCount>>,
}

impl TermSummary {
    pub fn top_list(&self, category: Category) -> &[TermCount] {
        self.top.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn chart_rows(&self, category: Category) -> Vec<ChartRow> {
        self.top_list(category)
            .iter()
            .map(|t| ChartRow { category: category.display_name(), token: t.token.clone(), frequency: t.count })
            .collect()
    }
}

/// Concatenated descriptions of the ranked postings. Missing descriptions contribute nothing.
pub fn description_blob(ranked: &RankedResult<'_>) -> String {
    ranked
        .iter()
        .filter_map(|m| m.entry.posting.description.as_deref())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Vocabulary statistics of the ranked postings' descriptions.
pub fn summarize<T: PosTagger + ?Sized>(ranked: &RankedResult<'_>, tagger: &T, top_n: usize) -> Result<TermSummary, MatchError> {
    let tokens = words(&description_blob(ranked));
    if tokens.is_empty() {
        return Err(MatchError::EmptyInput);
    }
    let table = TermFrequencyTable::from_tokens(tokens, tagger);
    let top = Category::ALL
        .iter()
        .map(|&c| (c, table.top(c, top_n).into_iter().cloned().collect()))
        .collect();
    tracing::debug!(distinct = table.len(), total = table.total(), "summarized ranked descriptions");
    Ok(TermSummary { table, top })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::LexiconTagger;

    fn table(text: &str) -> TermFrequencyTable {
        TermFrequencyTable::from_tokens(words(text), &LexiconTagger::new())
    }

    #[test]
    fn counts_distinct_tokens() {
        let t = table("fast reliable service service");
        assert_eq!(t.get("fast").map(|c| c.count), Some(1));
        assert_eq!(t.get("reliable").map(|c| c.count), Some(1));
        assert_eq!(t.get("service").map(|c| c.count), Some(2));
        assert_eq!(t.total(), 4);
        assert_eq!(t.top(Category::Noun, 10)[0].token, "service");
    }

    #[test]
    fn tags_each_token_once() {
        use std::cell::Cell;
        let calls = Cell::new(0);
        let tagger = |_: &str| {
            calls.set(calls.get() + 1);
            Tag::Noun
        };
        let t = TermFrequencyTable::from_tokens(words("a b a b a c"), &tagger);
        assert_eq!(calls.get(), 3);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let tagger = |_: &str| Tag::Verb;
        let t = TermFrequencyTable::from_tokens(words("zeta alpha zeta alpha mid"), &tagger);
        let top: Vec<&str> = t.top(Category::Verb, 10).iter().map(|c| c.token.as_str()).collect();
        assert_eq!(top, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn top_is_capped() {
        let text: String = (0..30).map(|i| format!("word{} ", ('a' as u8 + (i % 26) as u8) as char)).collect();
        let tagger = |_: &str| Tag::Adjective;
        let t = TermFrequencyTable::from_tokens(words(&text), &tagger);
        assert_eq!(t.top(Category::Adjective, 10).len(), 10);
    }
}
