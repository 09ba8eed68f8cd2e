use crate::ranker::RankedResult;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;

pub const DEFAULT_SEARCH_URL: &str = "https://www.linkedin.com/jobs/search/?";

/// Characters escaped inside a query parameter value.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Display-ready summary of one ranked posting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRecord {
    /// Title, city and state in that order; missing fields are left out.
    pub insights: Vec<String>,
    /// Search deep link; absent when the posting has no usable title.
    pub link: Option<String>,
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Job search deep link for a title, narrowed to the city when a location is known.
pub fn search_link(search_url: &str, title: &str, city: Option<&str>, state: Option<&str>) -> String {
    let mut link = format!("{search_url}keywords={}", encode_query_value(title));
    if let (Some(city), Some(_)) = (city, state) {
        link.push_str("&location=");
        link.push_str(&encode_query_value(city));
    }
    link
}

pub fn build_records(ranked: &RankedResult<'_>, search_url: &str) -> Vec<DisplayRecord> {
    ranked
        .iter()
        .map(|m| {
            let p = &m.entry.posting;
            let city = present(&p.city);
            let state = present(&p.state);
            let title = Some(p.title.trim()).filter(|s| !s.is_empty());
            let insights = [title, city, state].into_iter().flatten().map(str::to_string).collect();
            let link = title.map(|t| search_link(search_url, t, city, state));
            DisplayRecord { insights, link }
        })
        .collect()
}

/// Uppercase the first character of each space-separated word and follow every
/// word with a space: `"the quick fox"` becomes `"The Quick Fox "`.
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 1);
    for word in text.split(' ') {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
        out.push(' ');
    }
    out
}

pub fn capitalize_all<S: AsRef<str>>(texts: &[S]) -> Vec<String> {
    texts.iter().map(|t| capitalize_words(t.as_ref())).collect()
}

/// Lines to show for a record: capitalized insights, then the link untouched.
pub fn display_lines(record: &DisplayRecord) -> Vec<String> {
    let mut lines = capitalize_all(&record.insights);
    lines.extend(record.link.clone());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(capitalize_words("the quick fox"), "The Quick Fox ");
    }

    #[test]
    fn capitalization_tolerates_odd_words() {
        assert_eq!(capitalize_words("a"), "A ");
        assert_eq!(capitalize_words("\"quoted\" (paren) x"), "\"quoted\" (paren) X ");
        assert_eq!(capitalize_words("double  space"), "Double  Space ");
        assert_eq!(capitalize_words(""), " ");
        assert_eq!(capitalize_words("mcDONALD"), "McDONALD ");
    }

    #[test]
    fn link_encodes_title_and_city() {
        let link = search_link(DEFAULT_SEARCH_URL, "Data Engineer", Some("New York"), Some("NY"));
        assert_eq!(link, "https://www.linkedin.com/jobs/search/?keywords=Data%20Engineer&location=New%20York");
    }

    fn ranked_titles(titles: &[&str]) -> Vec<String> {
        use crate::corpus::{Corpus, CorpusEntry, JobPosting};
        use crate::ranker::{rank, NearestPolicy};
        use crate::vector::TermVector;

        let entries = titles
            .iter()
            .enumerate()
            .map(|(i, t)| CorpusEntry {
                posting: JobPosting { id: i.to_string(), title: t.to_string(), description: None, city: Some(" Boston ".into()), state: Some("MA".into()) },
                vector: TermVector::from_dense(&[1.0]),
            })
            .collect();
        let corpus = Corpus::new(entries).unwrap();
        let ranked = rank(&corpus, &TermVector::from_dense(&[1.0]), titles.len(), NearestPolicy::KeepNearest).unwrap();
        build_records(&ranked, DEFAULT_SEARCH_URL).iter().flat_map(display_lines).collect()
    }

    #[test]
    fn link_uses_trimmed_title() {
        let lines = ranked_titles(&["  Data Engineer \n"]);
        assert_eq!(lines, vec!["Data Engineer ", "Boston ", "MA ", "https://www.linkedin.com/jobs/search/?keywords=Data%20Engineer&location=Boston"]);
    }

    #[test]
    fn blank_title_has_no_link() {
        let lines = ranked_titles(&["   "]);
        assert_eq!(lines, vec!["Boston ", "MA "]);
    }

    #[test]
    fn link_skips_location_without_state() {
        let link = search_link(DEFAULT_SEARCH_URL, "R&D Lead", Some("Austin"), None);
        assert_eq!(link, "https://www.linkedin.com/jobs/search/?keywords=R%26D%20Lead");
    }
}
