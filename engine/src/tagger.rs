//! Coarse part-of-speech tagging of isolated tokens.
//!
//! Tokens are tagged one at a time without sentence context, so the tagger
//! works from a closed-class word list, a lexicon of common open-class words,
//! and suffix rules, falling back to [`Tag::Noun`].

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Universal-style part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    Adjective,
    Noun,
    Verb,
    Adverb,
    Pronoun,
    Determiner,
    Adposition,
    Conjunction,
    Particle,
    Numeral,
    Other,
}

/// The categories that get top lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Adjective,
    Noun,
    Verb,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Adjective, Category::Noun, Category::Verb];

    /// Plural display name used for chart titles.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Adjective => "Adjectives",
            Category::Noun => "Nouns",
            Category::Verb => "Verbs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Tag {
    pub fn category(&self) -> Option<Category> {
        match self {
            Tag::Adjective => Some(Category::Adjective),
            Tag::Noun => Some(Category::Noun),
            Tag::Verb => Some(Category::Verb),
            _ => None,
        }
    }
}

/// Assigns one tag to a single lowercase token.
pub trait PosTagger {
    fn tag(&self, token: &str) -> Tag;
}

impl<F: Fn(&str) -> Tag> PosTagger for F {
    fn tag(&self, token: &str) -> Tag { self(token) }
}

lazy_static! {
    static ref CLOSED_CLASS: HashMap<&'static str, Tag> = {
        let mut m = HashMap::new();
        for w in ["a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no", "all", "both", "either", "neither", "another", "such", "what", "which", "whatever"] {
            m.insert(w, Tag::Determiner);
        }
        for w in ["i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "he", "him", "his", "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us", "our", "ours", "ourselves", "they", "them", "their", "theirs", "themselves", "who", "whom", "whose", "someone", "anyone", "everyone", "something", "anything", "everything", "nothing"] {
            m.insert(w, Tag::Pronoun);
        }
        for w in ["of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through", "during", "before", "after", "above", "below", "from", "under", "over", "across", "within", "without", "upon", "among", "toward", "towards", "via", "per", "than", "like", "including", "throughout", "onto", "along", "around", "behind", "beyond", "despite"] {
            m.insert(w, Tag::Adposition);
        }
        for w in ["and", "or", "but", "nor", "yet", "so", "because", "although", "though", "while", "whereas", "if", "unless", "whether", "since"] {
            m.insert(w, Tag::Conjunction);
        }
        for w in ["to", "not", "up", "out", "off", "down"] {
            m.insert(w, Tag::Particle);
        }
        for w in ["very", "also", "well", "often", "always", "never", "here", "there", "now", "then", "just", "only", "even", "still", "too", "quickly", "highly", "strongly", "more", "most", "less", "least", "how", "when", "where", "why", "again", "already", "together", "daily", "remotely"] {
            m.insert(w, Tag::Adverb);
        }
        for w in ["is", "are", "was", "were", "be", "been", "being", "am", "has", "have", "had", "do", "does", "did", "will", "would", "can", "could", "should", "may", "might", "must", "shall"] {
            m.insert(w, Tag::Verb);
        }
        for w in ["one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "hundred", "thousand", "million"] {
            m.insert(w, Tag::Numeral);
        }
        m
    };

    static ref OPEN_CLASS: HashMap<&'static str, Tag> = {
        let mut m = HashMap::new();
        for w in ["new", "good", "great", "strong", "excellent", "large", "small", "high", "low", "fast", "senior", "junior", "full", "part", "remote", "key", "complex", "clear", "open", "able", "best", "better", "top", "deep", "broad", "solid", "hands", "proficient", "familiar", "relevant", "related", "preferred", "required", "other", "same", "various", "multiple", "diverse", "equal", "current", "daily", "real", "big", "quick", "reliable", "modern", "agile", "technical", "analytical", "scientific", "statistical", "clinical", "medical", "financial", "digital", "global", "quantitative", "qualitative", "independent", "detailed", "creative", "innovative", "effective", "efficient", "responsible", "competitive", "collaborative", "dynamic", "successful"] {
            m.insert(w, Tag::Adjective);
        }
        for w in ["work", "build", "develop", "design", "manage", "lead", "support", "create", "analyze", "analyse", "use", "make", "help", "drive", "deliver", "maintain", "implement", "ensure", "provide", "apply", "join", "collaborate", "communicate", "improve", "perform", "identify", "develops", "builds", "write", "run", "test", "deploy", "monitor", "own", "partner", "learn", "grow", "solve", "understand", "define", "review", "report", "assist", "coordinate", "prepare", "conduct", "evaluate", "train", "execute", "oversee", "seek", "include", "includes", "requires", "require", "offer", "offers", "hire", "get", "go", "know", "need", "want", "see", "take", "give"] {
            m.insert(w, Tag::Verb);
        }
        for w in ["data", "team", "experience", "business", "service", "product", "skills", "years", "company", "customer", "customers", "people", "care", "patient", "patients", "engineer", "engineering", "science", "python", "sql", "analysis", "machine", "learning", "model", "models", "role", "job", "position", "opportunity", "degree", "knowledge", "ability", "tools", "systems", "system", "software", "research", "project", "projects", "insights", "process", "processes", "quality", "information", "technology", "health", "time", "world", "management", "development", "environment", "requirements", "benefits", "salary", "office", "nurse", "manager", "analyst", "scientist"] {
            m.insert(w, Tag::Noun);
        }
        // job-posting nouns whose endings the suffix rules would misread
        for w in ["candidate", "associate", "graduate", "representative", "executive", "estate", "climate", "template", "delegate", "advocate", "affiliate", "certificate", "expertise", "enterprise", "franchise", "premise", "exercise", "merchandise", "promise", "kitchen", "garden", "token", "screen", "citizen", "assistant", "consultant", "accountant", "attendant", "applicant", "participant", "merchant", "tenant", "servant", "client", "agent", "student", "resident", "president", "talent", "content", "parent", "event", "hospital", "capital", "material", "portal", "proposal", "approval", "principal", "rental", "terminal", "clinic", "logic", "music", "topic", "traffic", "graphic", "mechanic", "republic", "secretary", "summary", "boundary", "library", "dictionary", "inventory", "marketing", "accounting", "nursing", "training", "housing", "staffing", "building", "pricing"] {
            m.insert(w, Tag::Noun);
        }
        m
    };
}

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ible", "able", "ive", "ical", "ish", "less", "ent", "ant", "ary", "ic", "al"];
const NOUN_SUFFIXES: &[&str] = &["tion", "sion", "ment", "ness", "ity", "ance", "ence", "ship", "ism", "ist", "er", "or", "ure", "age", "ogy", "ics"];
const VERB_SUFFIXES: &[&str] = &["ize", "ise", "ify", "ate", "ing", "ed", "en"];

/// Lexicon and suffix-rule tagger.
#[derive(Debug, Clone, Default)]
pub struct LexiconTagger {
    extra: HashMap<String, Tag>,
}

impl LexiconTagger {
    pub fn new() -> Self { Self::default() }

    /// Caller-supplied entries take precedence over the built-in lexicon.
    pub fn with_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Tag)>,
        S: Into<String>,
    {
        Self { extra: entries.into_iter().map(|(w, t)| (w.into().to_lowercase(), t)).collect() }
    }

    fn by_suffix(token: &str) -> Option<Tag> {
        // shortest stems like "red" or "ten" would be mangled by suffix rules
        if token.chars().count() <= 4 {
            return None;
        }
        if token.ends_with("ly") {
            return Some(Tag::Adverb);
        }
        let ends_any = |suffixes: &[&str]| suffixes.iter().any(|s| token.ends_with(s));
        if ends_any(NOUN_SUFFIXES) {
            Some(Tag::Noun)
        } else if ends_any(ADJECTIVE_SUFFIXES) {
            Some(Tag::Adjective)
        } else if ends_any(VERB_SUFFIXES) {
            Some(Tag::Verb)
        } else {
            None
        }
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, token: &str) -> Tag {
        if let Some(tag) = self.extra.get(token) {
            return *tag;
        }
        if let Some(tag) = CLOSED_CLASS.get(token).or_else(|| OPEN_CLASS.get(token)) {
            return *tag;
        }
        if token.chars().all(|c| c.is_numeric() || c == '_' || c == '\'') {
            return Tag::Numeral;
        }
        if !token.chars().any(char::is_alphabetic) {
            return Tag::Other;
        }
        Self::by_suffix(token).unwrap_or(Tag::Noun)
    }
}
