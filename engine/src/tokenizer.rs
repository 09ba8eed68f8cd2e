use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref RE: Regex = Regex::new(r"(?u)[\p{L}\p{N}](?:[\p{L}\p{N}_']*[\p{L}\p{N}_])?").expect("valid regex");
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","aren't","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","can't","cannot","could","couldn't",
            "did","didn't","do","does","doesn't","doing","don't","down","during",
            "each","few","for","from","further",
            "had","hadn't","has","hasn't","have","haven't","having","he","he'd","he'll","he's","her","here","here's","hers","herself","him","himself","his","how","how's",
            "i","i'd","i'll","i'm","i've","if","in","into","is","isn't","it","it's","its","itself",
            "let's","me","more","most","mustn't","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","she'd","she'll","she's","should","shouldn't","so","some","such",
            "than","that","that's","the","their","theirs","them","themselves","then","there","there's","these","they","they'd","they'll","they're","they've","this","those","through","to","too",
            "under","until","up","very",
            "was","wasn't","we","we'd","we'll","we're","we've","were","weren't","what","what's","when","when's","where","where's","which","while","who","who's","whom","why","why's","with","won't","would","wouldn't",
            "you","you'd","you'll","you're","you've","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
}

/// Token analysis settings baked into a fitted vector space model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analyzer {
    pub stop_words: bool,
    pub stem: bool,
    /// Tokens shorter than this many characters are dropped.
    pub min_token_len: usize,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self { stop_words: false, stem: false, min_token_len: 2 }
    }
}

pub fn is_stopword(token: &str) -> bool { STOPWORDS.contains(token) }

/// Split text into lowercase words using NFKC normalization.
///
/// Punctuation never ends up inside a token; inner apostrophes and underscores are kept.
pub fn words(text: &str) -> Vec<String> {
    let normalized = text.nfkc().collect::<String>().to_lowercase();
    RE.find_iter(&normalized).map(|m| m.as_str().to_string()).collect()
}

/// Tokenize text the way a fitted model expects: words, then length filter,
/// optional stopword removal, optional stemming.
pub fn analyze(text: &str, analyzer: &Analyzer) -> Vec<String> {
    let mut tokens = Vec::new();
    for token in words(text) {
        if token.chars().count() < analyzer.min_token_len { continue; }
        if analyzer.stop_words && is_stopword(&token) { continue; }
        if analyzer.stem {
            tokens.push(STEMMER.stem(&token).to_string());
        } else {
            tokens.push(token);
        }
    }
    tokens
}
