//! Rule-based NLP toolkit
//!
//! A dependency-free [`NlpToolkit`] implementation: punctuation-driven
//! sentence splitting, clitic-aware word tokenisation, a dictionary-checked
//! suffix lemmatiser, heuristic part-of-speech and dependency labels, and
//! pattern-based noun chunks and entities. Base sentiment comes from the
//! embedded polarity lexicon.

use std::collections::HashSet;

use tracing::debug;

use super::polarity;
use super::AnnotatedSentence;
use super::BaseSentiment;
use super::Document;
use super::NlpToolkit;
use super::PhraseSpan;
use super::SentenceSpan;
use super::Token;
use crate::errors::EmotiscopeError;
use crate::Result;

/// Inputs longer than this are refused
pub const DEFAULT_MAX_CHARS: usize = 100_000;

/// Label given to every proper-noun run
pub const ENTITY_LABEL: &str = "ENTITY";

const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "inc", "ltd",
    "fig", "approx",
];

const CLITICS: &[&str] = &["'s", "'re", "'m", "'ll", "'ve", "'d"];

const IRREGULAR_LEMMAS: &[(&str, &str)] = &[
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("'m", "be"),
    ("'re", "be"),
    ("'s", "be"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("'ve", "have"),
    ("'d", "would"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("doing", "do"),
    ("n't", "not"),
    ("'ll", "will"),
    ("ca", "can"),
    ("wo", "will"),
    ("sha", "shall"),
    ("felt", "feel"),
    ("went", "go"),
    ("gone", "go"),
    ("made", "make"),
    ("said", "say"),
    ("got", "get"),
    ("gotten", "get"),
    ("thought", "think"),
    ("knew", "know"),
    ("known", "know"),
    ("saw", "see"),
    ("seen", "see"),
    ("came", "come"),
    ("took", "take"),
    ("taken", "take"),
    ("gave", "give"),
    ("given", "give"),
    ("told", "tell"),
    ("found", "find"),
    ("left", "leave"),
    ("lost", "lose"),
    ("kept", "keep"),
    ("brought", "bring"),
    ("bought", "buy"),
    ("ran", "run"),
    ("sat", "sit"),
    ("stood", "stand"),
    ("heard", "hear"),
    ("meant", "mean"),
    ("broke", "break"),
    ("broken", "break"),
    ("wrote", "write"),
    ("written", "write"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("fell", "fall"),
    ("fallen", "fall"),
    ("began", "begin"),
    ("begun", "begin"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("forgot", "forget"),
    ("forgotten", "forget"),
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
];

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "every", "each", "some", "any", "no",
    "all", "another", "either", "neither",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "he", "him", "his",
    "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us", "our", "ours",
    "ourselves", "they", "them", "their", "theirs", "themselves", "who", "whom", "whose", "what",
    "which", "someone", "everyone", "anyone", "nobody", "nothing", "something", "anything",
    "everything",
];

const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "he", "she", "we", "they"];

const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "shall", "should", "can", "could", "may", "might", "must", "'m", "'re",
    "'s", "'ve", "'d", "'ll", "ca", "wo", "sha",
];

const MODALS: &[&str] = &[
    "will", "would", "shall", "should", "can", "could", "may", "might", "must", "do", "does",
    "did", "to", "'ll", "'d", "ca", "wo", "sha",
];

const PARTICLES: &[&str] = &["not", "n't", "to"];

const ADPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "from", "up", "down", "of", "off", "over",
    "under", "without", "around", "near", "towards",
];

const COORDINATORS: &[&str] = &["and", "or", "but", "nor", "yet"];

const SUBORDINATORS: &[&str] = &[
    "if", "unless", "because", "although", "though", "while", "whether", "since", "until",
    "whereas",
];

const INTERJECTIONS: &[&str] = &[
    "oh", "wow", "hey", "hello", "yes", "yeah", "ouch", "ugh", "hooray", "alas", "ah", "yay",
    "yuck", "oops",
];

const ADVERBS: &[&str] = &[
    "very", "really", "so", "too", "quite", "rather", "just", "never", "always", "often",
    "sometimes", "still", "already", "almost", "even", "also", "here", "there", "now", "then",
    "today", "yesterday", "tomorrow", "again", "maybe", "perhaps", "somewhat", "kinda", "sorta",
    "super", "most", "little", "not",
];

const NUMBER_WORDS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "hundred",
    "thousand", "million",
];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ful", "ous", "ive", "able", "ible", "less", "ish", "ic", "ent", "ant", "al",
];

const NEGATION_WORDS: &[&str] = &["not", "n't", "never", "no", "cannot"];

/// Heuristic, dependency-free NLP toolkit
#[derive(Debug, Clone)]
pub struct RuleBasedToolkit {
    vocabulary: HashSet<String>,
    max_chars: usize,
}

impl Default for RuleBasedToolkit {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleBasedToolkit {
    /// Toolkit whose lemmatiser knows the polarity lexicon's words
    pub fn new() -> Self {
        Self {
            vocabulary: polarity::vocabulary().map(str::to_string).collect(),
            max_chars: DEFAULT_MAX_CHARS,
        }
    }

    /// Teach the lemmatiser additional base forms
    #[must_use]
    pub fn with_vocabulary<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.vocabulary
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    #[must_use]
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    fn check_length(&self, text: &str) -> Result<()> {
        let length = text.chars().count();
        if length > self.max_chars {
            return Err(EmotiscopeError::delegate(format!(
                "input of {length} characters exceeds the {} character limit",
                self.max_chars
            )));
        }
        Ok(())
    }

    fn knows(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }

    /// Irregular table, then the word itself, then suffix-stripped candidates
    /// that the vocabulary recognises
    pub fn lemmatize(&self, lower: &str) -> String {
        if let Some((_, lemma)) = IRREGULAR_LEMMAS.iter().find(|(form, _)| *form == lower) {
            return (*lemma).to_string();
        }
        if self.knows(lower) {
            return lower.to_string();
        }
        suffix_candidates(lower)
            .into_iter()
            .find(|candidate| self.knows(candidate))
            .unwrap_or_else(|| lower.to_string())
    }

    fn pos_tag(&self, words: &[&str], index: usize) -> &'static str {
        let word = words[index];
        let lower = word.to_lowercase();
        let lower = lower.as_str();

        if !word.chars().any(char::is_alphanumeric) {
            return if word.chars().all(is_punctuation) {
                "PUNCT"
            } else {
                "SYM"
            };
        }
        if is_number(lower) {
            return "NUM";
        }
        if lower == "cannot" || PARTICLES.contains(&lower) {
            return "PART";
        }
        if DETERMINERS.contains(&lower) {
            return "DET";
        }
        if PRONOUNS.contains(&lower) {
            return "PRON";
        }
        if AUXILIARIES.contains(&lower) {
            return "AUX";
        }
        if ADPOSITIONS.contains(&lower) {
            return "ADP";
        }
        if COORDINATORS.contains(&lower) {
            return "CCONJ";
        }
        if SUBORDINATORS.contains(&lower) {
            return "SCONJ";
        }
        if INTERJECTIONS.contains(&lower) {
            return "INTJ";
        }
        if ADVERBS.contains(&lower) {
            return "ADV";
        }

        let capitalized = word.chars().next().is_some_and(char::is_uppercase);
        if capitalized && index > 0 && !self.knows(lower) && !self.knows(&self.lemmatize(lower)) {
            return "PROPN";
        }

        let previous = index
            .checked_sub(1)
            .map(|i| words[i].to_lowercase())
            .unwrap_or_default();
        if SUBJECT_PRONOUNS.contains(&previous.as_str())
            || MODALS.contains(&previous.as_str())
            || previous == "n't"
        {
            return "VERB";
        }
        if lower.len() > 4 && (lower.ends_with("ing") || lower.ends_with("ed")) {
            return "VERB";
        }
        if lower.len() > 4 && lower.ends_with("ly") {
            return "ADV";
        }
        if polarity::lookup(lower).is_some()
            || ADJECTIVE_SUFFIXES
                .iter()
                .any(|suffix| lower.len() > suffix.len() + 2 && lower.ends_with(suffix))
        {
            return "ADJ";
        }
        "NOUN"
    }

    fn annotate(&self, words: &[&str]) -> Vec<Token> {
        let tags: Vec<&'static str> = (0..words.len()).map(|i| self.pos_tag(words, i)).collect();
        let root = tags
            .iter()
            .position(|t| *t == "VERB")
            .or_else(|| tags.iter().position(|t| *t == "AUX"))
            .or_else(|| tags.iter().position(|t| *t != "PUNCT" && *t != "SYM"));

        words
            .iter()
            .enumerate()
            .map(|(index, word)| {
                let lower = word.to_lowercase();
                let lemma = if tags[index] == "PUNCT" || tags[index] == "SYM" {
                    lower.clone()
                } else {
                    self.lemmatize(&lower)
                };
                let dep = dependency_label(&tags, index, root, &lower);
                Token::new(word, &lemma, tags[index], dep)
            })
            .collect()
    }

    fn annotate_document(&self, text: &str) -> Result<Document> {
        let sentences = self
            .tokenize_sentences(text)?
            .into_iter()
            .map(|span| {
                let tokens = self.tokenize_words(&span.text)?;
                Ok(AnnotatedSentence { span, tokens })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Document { sentences })
    }
}

impl NlpToolkit for RuleBasedToolkit {
    fn name(&self) -> &str {
        "rule-based"
    }

    fn tokenize_sentences(&self, text: &str) -> Result<Vec<SentenceSpan>> {
        self.check_length(text)?;
        Ok(split_sentences(text))
    }

    fn tokenize_words(&self, sentence: &str) -> Result<Vec<Token>> {
        self.check_length(sentence)?;
        let words = split_words(sentence);
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        Ok(self.annotate(&refs))
    }

    fn base_sentiment(&self, text: &str) -> Result<BaseSentiment> {
        let document = self.annotate_document(text)?;
        let words: Vec<String> = document
            .sentences
            .iter()
            .flat_map(|sentence| sentence.tokens.iter())
            .filter(|token| token.is_word())
            .map(|token| {
                if polarity::lookup(&token.lower).is_some() || polarity::is_negation(&token.lower) {
                    token.lower.clone()
                } else {
                    token.lemma.clone()
                }
            })
            .collect();
        let sentiment = polarity::score_words(&words);
        debug!(words = words.len(), ?sentiment, "Rule-based base sentiment");
        Ok(sentiment)
    }

    fn noun_chunks(&self, doc: &Document) -> Result<Vec<PhraseSpan>> {
        let mut chunks = Vec::new();
        for sentence in &doc.sentences {
            let tokens = &sentence.tokens;
            let mut i = 0;
            while i < tokens.len() {
                let mut start = i;
                if tokens[start].pos == "DET" {
                    start += 1;
                }
                let mut j = start;
                while j < tokens.len() && matches!(tokens[j].pos.as_str(), "ADJ" | "NUM") {
                    j += 1;
                }
                let mut k = j;
                while k < tokens.len() && matches!(tokens[k].pos.as_str(), "NOUN" | "PROPN") {
                    k += 1;
                }
                if k > j {
                    chunks.push(PhraseSpan {
                        text: join_tokens(&tokens[start..k]),
                        label: None,
                    });
                    i = k;
                } else {
                    i += 1;
                }
            }
        }
        Ok(chunks)
    }

    fn named_entities(&self, doc: &Document) -> Result<Vec<PhraseSpan>> {
        let mut entities = Vec::new();
        for sentence in &doc.sentences {
            let tokens = &sentence.tokens;
            let mut i = 0;
            while i < tokens.len() {
                if tokens[i].pos != "PROPN" {
                    i += 1;
                    continue;
                }
                let start = i;
                while i < tokens.len() && tokens[i].pos == "PROPN" {
                    i += 1;
                }
                entities.push(PhraseSpan {
                    text: join_tokens(&tokens[start..i]),
                    label: Some(ENTITY_LABEL.to_string()),
                });
            }
        }
        Ok(entities)
    }
}

fn join_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_punctuation(c: char) -> bool {
    matches!(
        c,
        '.' | ','
            | '!'
            | '?'
            | ';'
            | ':'
            | '\''
            | '"'
            | '('
            | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '-'
            | '…'
            | '‘'
            | '’'
            | '“'
            | '”'
    )
}

fn is_number(lower: &str) -> bool {
    NUMBER_WORDS.contains(&lower)
        || (lower.chars().any(|c| c.is_ascii_digit())
            && lower
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '%')))
}

fn dependency_label(tags: &[&str], index: usize, root: Option<usize>, lower: &str) -> &'static str {
    if NEGATION_WORDS.contains(&lower) {
        return "neg";
    }
    if root == Some(index) {
        return "ROOT";
    }
    let after_root = root.is_some_and(|r| index > r);
    match tags[index] {
        "PUNCT" | "SYM" => "punct",
        "DET" => "det",
        "ADJ" => {
            if matches!(tags.get(index + 1), Some(&"NOUN") | Some(&"PROPN") | Some(&"ADJ")) {
                "amod"
            } else {
                "acomp"
            }
        }
        "ADV" => "advmod",
        "AUX" => "aux",
        "ADP" => "prep",
        "CCONJ" => "cc",
        "SCONJ" => "mark",
        "NUM" => "nummod",
        "NOUN" | "PROPN" | "PRON" => {
            if after_root {
                "dobj"
            } else {
                "nsubj"
            }
        }
        _ => "dep",
    }
}

fn ends_with_abbreviation(text: &str) -> bool {
    text.split_whitespace()
        .last()
        .map(|word| word.trim_start_matches(|c: char| !c.is_alphanumeric()))
        .is_some_and(|word| ABBREVIATIONS.contains(&word.to_lowercase().as_str()))
}

/// Break on runs of `.!?` followed by whitespace or end of input, and on newlines
fn split_sentences(text: &str) -> Vec<SentenceSpan> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut spans = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (position, c) = chars[i];
        if c == '\n' {
            push_span(text, start, position, &mut spans);
            start = position + c.len_utf8();
            i += 1;
            continue;
        }
        if matches!(c, '.' | '!' | '?') {
            let mut j = i;
            while j + 1 < chars.len()
                && matches!(chars[j + 1].1, '.' | '!' | '?' | '"' | '\'' | ')' | '”' | '’')
            {
                j += 1;
            }
            let end = chars[j].0 + chars[j].1.len_utf8();
            let boundary = j + 1 >= chars.len() || chars[j + 1].1.is_whitespace();
            let abbreviation = c == '.' && j == i && ends_with_abbreviation(&text[start..position]);
            if boundary && !abbreviation {
                push_span(text, start, end, &mut spans);
                start = end;
            }
            i = j + 1;
            continue;
        }
        i += 1;
    }
    push_span(text, start, text.len(), &mut spans);
    spans
}

fn push_span(text: &str, start: usize, end: usize, spans: &mut Vec<SentenceSpan>) {
    let slice = &text[start..end];
    let trimmed = slice.trim();
    if trimmed.is_empty() {
        return;
    }
    let offset = start + (slice.len() - slice.trim_start().len());
    spans.push(SentenceSpan {
        text: trimmed.to_string(),
        start: offset,
        end: offset + trimmed.len(),
    });
}

/// Whitespace split, punctuation peeled off both ends, clitics split off
fn split_words(sentence: &str) -> Vec<String> {
    let mut words = Vec::new();
    for chunk in sentence.split_whitespace() {
        let chunk = chunk.replace(['‘', '’'], "'");
        let chars: Vec<char> = chunk.chars().collect();

        let first = chars.iter().position(|c| c.is_alphanumeric());
        let Some(first) = first else {
            words.extend(chars.iter().map(char::to_string));
            continue;
        };
        let last = chars
            .iter()
            .rposition(|c| c.is_alphanumeric())
            .unwrap_or(first);

        words.extend(chars[..first].iter().map(char::to_string));
        let core: String = chars[first..=last].iter().collect();
        words.extend(split_clitics(&core));
        words.extend(chars[last + 1..].iter().map(char::to_string));
    }
    words
}

fn split_clitics(word: &str) -> Vec<String> {
    for clitic in std::iter::once(&"n't").chain(CLITICS) {
        if let Some(cut) = clitic_cut(word, clitic) {
            return vec![word[..cut].to_string(), word[cut..].to_string()];
        }
    }
    vec![word.to_string()]
}

/// Byte offset where an ASCII `clitic` starts, matched case-insensitively
fn clitic_cut(word: &str, clitic: &str) -> Option<usize> {
    let cut = word.len().checked_sub(clitic.len())?;
    if cut == 0 || !word.is_char_boundary(cut) {
        return None;
    }
    word[cut..].eq_ignore_ascii_case(clitic).then_some(cut)
}

fn suffix_candidates(word: &str) -> Vec<String> {
    let mut candidates = Vec::new();
    let mut push = |stem: &str, suffix: &str| {
        if stem.len() >= 2 {
            candidates.push(format!("{stem}{suffix}"));
        }
    };

    if let Some(stem) = word.strip_suffix("ies").or_else(|| word.strip_suffix("ied")) {
        push(stem, "y");
    }
    if let Some(stem) = word.strip_suffix("ves") {
        push(stem, "f");
        push(stem, "fe");
    }
    if let Some(stem) = word.strip_suffix("es") {
        push(stem, "");
    }
    if let Some(stem) = word.strip_suffix('s') {
        if !stem.ends_with('s') {
            push(stem, "");
        }
    }
    for suffix in ["ing", "ed", "est", "er"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            push(stem, "");
            push(stem, "e");
            if let Some(undoubled) = undouble(stem) {
                push(undoubled, "");
            }
            if let Some(base) = stem.strip_suffix('i') {
                push(base, "y");
            }
        }
    }
    if let Some(stem) = word.strip_suffix("ily") {
        push(stem, "y");
    }
    if let Some(stem) = word.strip_suffix("ly") {
        push(stem, "");
        push(stem, "le");
    }
    candidates
}

/// "stopp" → "stop". Compares whole chars; only ASCII consonants double.
fn undouble(stem: &str) -> Option<&str> {
    let mut tail = stem.char_indices().rev();
    let (cut, last) = tail.next()?;
    let (_, previous) = tail.next()?;
    tail.next()?;
    if last == previous && last.is_ascii_alphabetic() && !"aeiou".contains(last) {
        Some(&stem[..cut])
    } else {
        None
    }
}
