use once_cell::sync::Lazy;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::{HashMap, HashSet};

static NON_WORD: Lazy<Regex> = Lazy::new(|| {
    // Anything that is not a Unicode letter, digit, or whitespace
    Regex::new(r"[^\p{L}\p{N}\s]").unwrap()
});

// English + Italian stopwords. Intention prompts are short imperative
// phrases; filler words carry no clustering signal in either language.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "about", "ad", "after", "again", "al", "allo", "alla", "all", "ai", "agli",
        "alle", "am", "an", "and", "another", "any", "are", "as", "at", "be", "been",
        "being", "but", "da", "dal", "dallo", "dalla", "dei", "degli", "delle", "did",
        "di", "do", "does", "doing", "done", "e", "ed", "for", "from", "go", "going",
        "gone", "got", "had", "has", "have", "having", "o", "of", "on", "or", "our",
        "ours", "out", "over", "per", "che", "how", "i", "il", "lo", "la", "gli", "le",
        "un", "una", "uno", "in", "into", "is", "it", "its", "su", "so", "some", "still",
        "mi", "ti", "si", "ci", "vi", "non", "not", "now", "no", "off", "once", "only",
        "other", "sto", "stai", "sta", "stiamo", "state", "stanno", "devo", "devi",
        "deve", "dobbiamo", "dovete", "devono", "ancora", "to", "the", "this", "that",
        "these", "those", "then", "than", "there", "their", "theirs", "them", "they",
        "you", "your", "yours", "we", "us", "voglio", "vorrei", "posso", "puoi", "puo",
        "want", "wanted", "wants", "wanna", "need", "needs", "needed", "with", "without",
        "while", "when", "where", "why", "who", "whom", "what", "which", "will", "would",
        "should", "could",
    ]
    .into_iter()
    .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    Verb,
    Noun,
    Adjective,
}

/// Morphological analysis behind a narrow seam so any analyzer can be
/// substituted per target language. `None` means "no lemma for this
/// part of speech"; the caller falls back to the original token.
pub trait Lemmatizer: Send + Sync {
    fn lemmatize_as(&self, pos: PartOfSpeech, token: &str) -> Option<String>;
}

/// Lowercase, strip punctuation/symbols, split on whitespace, drop
/// stopwords, lemmatize each survivor. Empty or punctuation-only input
/// yields an empty vector; that is a valid outcome, not an error.
pub fn tokenize(text: &str, lemmatizer: &dyn Lemmatizer) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lowered, " ");
    cleaned
        .split_whitespace()
        .filter(|token| !STOPWORDS.contains(token))
        .map(|token| lemmatize_token(token, lemmatizer))
        .collect()
}

/// Fallback chain: verb lemma, then noun, then adjective, then the token
/// itself. The shortest non-empty candidate wins; ties keep the earlier
/// candidate, so the original token survives unless a lemma is strictly
/// shorter.
fn lemmatize_token(token: &str, lemmatizer: &dyn Lemmatizer) -> String {
    let mut best = token.to_string();
    for pos in [PartOfSpeech::Verb, PartOfSpeech::Noun, PartOfSpeech::Adjective] {
        if let Some(candidate) = lemmatizer.lemmatize_as(pos, token) {
            if !candidate.is_empty() && candidate.len() < best.len() {
                best = candidate;
            }
        }
    }
    best
}

static IRREGULAR_VERBS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("went", "go"),
        ("did", "do"),
        ("done", "do"),
        ("made", "make"),
        ("said", "say"),
        ("saw", "see"),
        ("seen", "see"),
        ("took", "take"),
        ("taken", "take"),
        ("gotten", "get"),
        ("found", "find"),
        ("thought", "think"),
        ("bought", "buy"),
        ("wrote", "write"),
        ("written", "write"),
        ("ran", "run"),
        ("came", "come"),
        ("knew", "know"),
        ("known", "know"),
        ("sent", "send"),
        ("spent", "spend"),
        ("paid", "pay"),
        ("kept", "keep"),
        ("left", "leave"),
        ("met", "meet"),
        ("told", "tell"),
        ("gave", "give"),
        ("given", "give"),
        ("heard", "hear"),
    ])
});

static IRREGULAR_NOUNS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("children", "child"),
        ("people", "person"),
        ("men", "man"),
        ("women", "woman"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("mice", "mouse"),
        ("movies", "movie"),
        ("series", "series"),
    ])
});

static IRREGULAR_ADJECTIVES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("better", "good"),
        ("best", "good"),
        ("worse", "bad"),
        ("worst", "bad"),
        ("further", "far"),
        ("farther", "far"),
    ])
});

/// Rule-based English lemmatizer: small irregular-form tables plus
/// suffix stripping. Approximate; clustering only needs inflections of
/// the same word to map to the same string.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishLemmatizer;

impl Lemmatizer for EnglishLemmatizer {
    fn lemmatize_as(&self, pos: PartOfSpeech, token: &str) -> Option<String> {
        if !token.is_ascii() {
            return None;
        }
        match pos {
            PartOfSpeech::Verb => verb_lemma(token),
            PartOfSpeech::Noun => noun_lemma(token),
            PartOfSpeech::Adjective => adjective_lemma(token),
        }
    }
}

fn verb_lemma(token: &str) -> Option<String> {
    if let Some(base) = IRREGULAR_VERBS.get(token) {
        return Some((*base).to_string());
    }
    if let Some(stem) = token.strip_suffix("ing") {
        if stem.len() >= 2 {
            let mut stem = stem.to_string();
            undouble(&mut stem);
            restore_e(&mut stem);
            return Some(stem);
        }
    }
    if let Some(stem) = token.strip_suffix("ied") {
        if stem.len() >= 2 {
            return Some(format!("{stem}y"));
        }
    }
    if let Some(stem) = token.strip_suffix("ed") {
        if stem.len() >= 2 {
            let mut stem = stem.to_string();
            undouble(&mut stem);
            restore_e(&mut stem);
            return Some(stem);
        }
    }
    strip_plural_s(token)
}

fn noun_lemma(token: &str) -> Option<String> {
    if let Some(base) = IRREGULAR_NOUNS.get(token) {
        return Some((*base).to_string());
    }
    strip_plural_s(token)
}

fn adjective_lemma(token: &str) -> Option<String> {
    if let Some(base) = IRREGULAR_ADJECTIVES.get(token) {
        return Some((*base).to_string());
    }
    if let Some(stem) = token.strip_suffix("iest") {
        if stem.len() >= 2 {
            return Some(format!("{stem}y"));
        }
    }
    if let Some(stem) = token.strip_suffix("ier") {
        if stem.len() >= 2 {
            return Some(format!("{stem}y"));
        }
    }
    if let Some(stem) = token.strip_suffix("est") {
        if stem.len() >= 4 {
            let mut stem = stem.to_string();
            undouble(&mut stem);
            return Some(stem);
        }
    }
    if let Some(stem) = token.strip_suffix("er") {
        if stem.len() >= 4 {
            let mut stem = stem.to_string();
            undouble(&mut stem);
            return Some(stem);
        }
    }
    None
}

/// Shared -s/-es/-ies stripping for third-person verbs and plural nouns.
fn strip_plural_s(token: &str) -> Option<String> {
    if token.len() < 3
        || !token.ends_with('s')
        || token.ends_with("ss")
        || token.ends_with("us")
        || token.ends_with("is")
    {
        return None;
    }
    if let Some(stem) = token.strip_suffix("ies") {
        if stem.len() >= 2 {
            return Some(format!("{stem}y"));
        }
    }
    if let Some(stem) = token.strip_suffix("es") {
        if stem.ends_with("ch")
            || stem.ends_with("sh")
            || stem.ends_with('x')
            || stem.ends_with('z')
            || stem.ends_with('s')
        {
            return Some(stem.to_string());
        }
    }
    token.strip_suffix('s').map(str::to_string)
}

/// "running" -> "runn" -> "run". Keeps l/s/z doubles ("call", "miss").
fn undouble(stem: &mut String) {
    let bytes = stem.as_bytes();
    if bytes.len() >= 3 {
        let last = bytes[bytes.len() - 1];
        if last == bytes[bytes.len() - 2]
            && !matches!(last, b'a' | b'e' | b'i' | b'o' | b'u' | b'l' | b's' | b'z')
        {
            stem.pop();
        }
    }
}

/// "creating" -> "creat" -> "create", "enabling" -> "enable".
fn restore_e(stem: &mut String) {
    if stem.ends_with("at") || stem.ends_with("bl") || stem.ends_with("iz") {
        stem.push('e');
    }
}

/// Snowball-backed lemmatizer for languages the rule tables do not cover.
/// Stemming ignores part of speech; the stem is offered for every slot in
/// the fallback chain and wins whenever it is shorter than the token.
pub struct SnowballLemmatizer {
    stemmer: Stemmer,
}

impl SnowballLemmatizer {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            stemmer: Stemmer::create(algorithm),
        }
    }

    pub fn english() -> Self {
        Self::new(Algorithm::English)
    }

    pub fn italian() -> Self {
        Self::new(Algorithm::Italian)
    }
}

impl Lemmatizer for SnowballLemmatizer {
    fn lemmatize_as(&self, _pos: PartOfSpeech, token: &str) -> Option<String> {
        let stem = self.stemmer.stem(token);
        if stem == token {
            None
        } else {
            Some(stem.into_owned())
        }
    }
}
