//! Lexicon store - emotion categories, modifier words and context cue words
//!
//! The store is built once at startup, validated eagerly, and then shared
//! read-only (`Arc<LexiconStore>`) by every analysis call. Category order is
//! the registration order and is part of the contract: the engine breaks
//! dominant-emotion ties by it.
//!
//! Word roles are disjoint by construction. A word may be a trigger for at
//! most one category, and never also an intensifier, diminisher, negation or
//! conditional cue. [`LexiconBuilder::build`] rejects anything else with
//! [`EmotiscopeError::MalformedLexicon`].
//!
//! Negated forms (`unhappy` → `happy`) are their own role: each one both
//! toggles negation parity and matches the category of its base trigger.

pub mod builtin;
pub mod file;

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use tracing::info;

use crate::errors::EmotiscopeError;
use crate::Result;

/// Key reserved for the synthetic "no emotion" entry
pub const NEUTRAL_KEY: &str = "neutral";
pub const NEUTRAL_SYMBOL: &str = "😐";
pub const NEUTRAL_DESCRIPTION: &str = "No significant emotional content detected";

/// One emotion category and the words that trigger it
#[derive(Debug, Clone, Serialize)]
pub struct EmotionCategory {
    pub key: String,
    pub symbol: String,
    pub description: String,
    /// Lowercase trigger lemmas, in registration order
    pub triggers: Vec<String>,
}

/// Built-in lexicon profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LexiconProfile {
    /// joy, sadness, anger, fear
    Core,
    /// Plutchik's eight plus love, gratitude, pride and shame
    #[default]
    Extended,
}

impl fmt::Display for LexiconProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Core => write!(f, "core"),
            Self::Extended => write!(f, "extended"),
        }
    }
}

/// How a modifier word scales the sentence intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Intensifier,
    Diminisher,
}

/// Intensifier and diminisher word sets
#[derive(Debug, Clone, Default)]
pub struct ModifierSet {
    words: HashMap<String, Modifier>,
}

impl ModifierSet {
    pub fn get(&self, word: &str) -> Option<Modifier> {
        self.words.get(word).copied()
    }

    pub fn intensifier_count(&self) -> usize {
        self.words
            .values()
            .filter(|m| **m == Modifier::Intensifier)
            .count()
    }

    pub fn diminisher_count(&self) -> usize {
        self.words.len() - self.intensifier_count()
    }
}

/// Negation and conditional/causal cue word sets
#[derive(Debug, Clone, Default)]
pub struct ContextWords {
    negations: Vec<String>,
    conditionals: Vec<String>,
}

impl ContextWords {
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.iter().any(|w| w == word)
    }

    pub fn is_conditional(&self, word: &str) -> bool {
        self.conditionals.iter().any(|w| w == word)
    }

    pub fn negations(&self) -> &[String] {
        &self.negations
    }

    pub fn conditionals(&self) -> &[String] {
        &self.conditionals
    }
}

/// Symmetric pairing between category indices
#[derive(Debug, Clone, Default)]
pub struct OppositeEmotionMap {
    pairs: HashMap<usize, usize>,
}

impl OppositeEmotionMap {
    pub fn get(&self, category: usize) -> Option<usize> {
        self.pairs.get(&category).copied()
    }

    pub fn len(&self) -> usize {
        self.pairs.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Immutable, validated lexicon
#[derive(Debug, Clone)]
pub struct LexiconStore {
    categories: Vec<EmotionCategory>,
    trigger_index: HashMap<String, usize>,
    modifiers: ModifierSet,
    context: ContextWords,
    /// negated form -> category of its base trigger
    negated_forms: HashMap<String, usize>,
    opposites: OppositeEmotionMap,
}

impl LexiconStore {
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// Build one of the built-in profiles
    pub fn from_profile(profile: LexiconProfile) -> Result<Self> {
        let store = match profile {
            LexiconProfile::Core => builtin::core(),
            LexiconProfile::Extended => builtin::extended(),
        }
        .build()?;
        info!(
            "Loaded {} lexicon: {} categories, {} trigger words",
            profile,
            store.len(),
            store.trigger_count()
        );
        Ok(store)
    }

    /// Load a lexicon from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let store = Self::from_toml_str(&content)?;
        info!(
            "Loaded lexicon from {}: {} categories, {} trigger words",
            path.display(),
            store.len(),
            store.trigger_count()
        );
        Ok(store)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        file::LexiconFile::parse(content)?.into_builder().build()
    }

    pub fn categories(&self) -> &[EmotionCategory] {
        &self.categories
    }

    pub fn category(&self, index: usize) -> Option<&EmotionCategory> {
        self.categories.get(index)
    }

    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.key == key)
    }

    /// Category index a trigger word belongs to
    pub fn category_for(&self, word: &str) -> Option<usize> {
        self.trigger_index.get(word).copied()
    }

    /// Category of the base trigger a prefix-negated form stands for
    pub fn negated_form(&self, word: &str) -> Option<usize> {
        self.negated_forms.get(word).copied()
    }

    pub fn negated_form_count(&self) -> usize {
        self.negated_forms.len()
    }

    pub fn modifiers(&self) -> &ModifierSet {
        &self.modifiers
    }

    pub fn context_words(&self) -> &ContextWords {
        &self.context
    }

    pub fn opposites(&self) -> &OppositeEmotionMap {
        &self.opposites
    }

    /// Opposite category key for display
    pub fn opposite_key(&self, key: &str) -> Option<&str> {
        let index = self.index_of(key)?;
        let opposite = self.opposites.get(index)?;
        self.categories.get(opposite).map(|c| c.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn trigger_count(&self) -> usize {
        self.trigger_index.len()
    }

    /// Every word the lexicon knows about, for toolkit lemmatisers
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.trigger_index
            .keys()
            .chain(self.modifiers.words.keys())
            .chain(self.context.negations.iter())
            .chain(self.context.conditionals.iter())
            .chain(self.negated_forms.keys())
            .map(String::as_str)
    }
}

#[derive(Debug, Clone)]
struct CategorySpec {
    key: String,
    symbol: String,
    description: String,
    triggers: Vec<String>,
}

/// Collects raw lexicon entries; `build` validates them
#[derive(Debug, Clone, Default)]
pub struct LexiconBuilder {
    categories: Vec<CategorySpec>,
    intensifiers: Vec<String>,
    diminishers: Vec<String>,
    negations: Vec<String>,
    conditionals: Vec<String>,
    negated_forms: Vec<(String, String)>,
    opposites: Vec<(String, String)>,
}

impl LexiconBuilder {
    #[must_use]
    pub fn category<S: AsRef<str>>(
        mut self,
        key: &str,
        symbol: &str,
        description: &str,
        triggers: &[S],
    ) -> Self {
        self.categories.push(CategorySpec {
            key: normalize_word(key),
            symbol: symbol.to_string(),
            description: description.to_string(),
            triggers: triggers.iter().map(|t| normalize_word(t.as_ref())).collect(),
        });
        self
    }

    #[must_use]
    pub fn intensifiers<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.intensifiers
            .extend(words.iter().map(|w| normalize_word(w.as_ref())));
        self
    }

    #[must_use]
    pub fn diminishers<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.diminishers
            .extend(words.iter().map(|w| normalize_word(w.as_ref())));
        self
    }

    #[must_use]
    pub fn negations<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.negations
            .extend(words.iter().map(|w| normalize_word(w.as_ref())));
        self
    }

    #[must_use]
    pub fn conditionals<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.conditionals
            .extend(words.iter().map(|w| normalize_word(w.as_ref())));
        self
    }

    /// `(form, base)` pairs such as `("unhappy", "happy")`
    #[must_use]
    pub fn negated_forms<S: AsRef<str>>(mut self, pairs: &[(S, S)]) -> Self {
        self.negated_forms.extend(
            pairs
                .iter()
                .map(|(form, base)| (normalize_word(form.as_ref()), normalize_word(base.as_ref()))),
        );
        self
    }

    #[must_use]
    pub fn opposite(mut self, a: &str, b: &str) -> Self {
        self.opposites.push((normalize_word(a), normalize_word(b)));
        self
    }

    /// Validate and freeze the lexicon
    pub fn build(self) -> Result<LexiconStore> {
        if self.categories.is_empty() {
            return Err(malformed("lexicon defines no emotion categories"));
        }

        // word -> role, used to prove every word set is disjoint
        let mut roles: HashMap<String, String> = HashMap::new();
        let mut claim = |word: &str, role: String| -> Result<()> {
            if word.is_empty() || word.chars().any(char::is_whitespace) {
                return Err(malformed(format!(
                    "invalid word {word:?} for {role}: words must be single non-empty tokens"
                )));
            }
            if let Some(existing) = roles.get(word) {
                if *existing == role {
                    // repeated within the same set
                    return Ok(());
                }
                return Err(malformed(format!(
                    "word '{word}' is registered as both {existing} and {role}"
                )));
            }
            roles.insert(word.to_string(), role);
            Ok(())
        };

        let mut categories = Vec::with_capacity(self.categories.len());
        let mut trigger_index = HashMap::new();
        for (index, spec) in self.categories.into_iter().enumerate() {
            if spec.key.is_empty() {
                return Err(malformed("category key must not be empty"));
            }
            if spec.key == NEUTRAL_KEY {
                return Err(malformed(format!(
                    "category key '{NEUTRAL_KEY}' is reserved"
                )));
            }
            if categories.iter().any(|c: &EmotionCategory| c.key == spec.key) {
                return Err(malformed(format!(
                    "category '{}' is defined twice",
                    spec.key
                )));
            }
            if spec.triggers.is_empty() {
                return Err(malformed(format!(
                    "category '{}' has no trigger words",
                    spec.key
                )));
            }

            let mut triggers = Vec::with_capacity(spec.triggers.len());
            for word in spec.triggers {
                claim(&word, format!("a trigger for '{}'", spec.key))?;
                if trigger_index.insert(word.clone(), index).is_none() {
                    triggers.push(word);
                }
            }

            categories.push(EmotionCategory {
                key: spec.key,
                symbol: spec.symbol,
                description: spec.description,
                triggers,
            });
        }

        let mut modifiers = ModifierSet::default();
        for word in self.intensifiers {
            claim(&word, "an intensifier".to_string())?;
            modifiers.words.insert(word, Modifier::Intensifier);
        }
        for word in self.diminishers {
            claim(&word, "a diminisher".to_string())?;
            modifiers.words.insert(word, Modifier::Diminisher);
        }

        let mut context = ContextWords::default();
        for word in self.negations {
            claim(&word, "a negation".to_string())?;
            if !context.negations.contains(&word) {
                context.negations.push(word);
            }
        }
        for word in self.conditionals {
            claim(&word, "a conditional cue".to_string())?;
            if !context.conditionals.contains(&word) {
                context.conditionals.push(word);
            }
        }

        let mut negated_forms = HashMap::new();
        for (form, base) in self.negated_forms {
            claim(&form, "a negated form".to_string())?;
            let category = trigger_index.get(&base).copied().ok_or_else(|| {
                malformed(format!(
                    "negated form '{form}' refers to '{base}', which is not a trigger"
                ))
            })?;
            match negated_forms.insert(form.clone(), category) {
                Some(existing) if existing != category => {
                    return Err(malformed(format!(
                        "negated form '{form}' is mapped to two categories"
                    )));
                }
                _ => {}
            }
        }

        let mut opposites = OppositeEmotionMap::default();
        for (a, b) in self.opposites {
            let lookup = |key: &str| {
                categories
                    .iter()
                    .position(|c| c.key == key)
                    .ok_or_else(|| {
                        malformed(format!("opposite pairing references unknown category '{key}'"))
                    })
            };
            let ia = lookup(&a)?;
            let ib = lookup(&b)?;
            if ia == ib {
                return Err(malformed(format!("category '{a}' cannot be its own opposite")));
            }
            for (from, to) in [(ia, ib), (ib, ia)] {
                match opposites.pairs.get(&from).copied() {
                    Some(existing) if existing != to => {
                        return Err(malformed(format!(
                            "category '{}' is already paired with '{}'",
                            categories[from].key, categories[existing].key
                        )));
                    }
                    _ => {
                        opposites.pairs.insert(from, to);
                    }
                }
            }
        }

        debug!(
            categories = categories.len(),
            triggers = trigger_index.len(),
            opposites = opposites.len(),
            "Lexicon validated"
        );

        Ok(LexiconStore {
            categories,
            trigger_index,
            modifiers,
            context,
            negated_forms,
            opposites,
        })
    }
}

fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

fn malformed(message: impl Into<String>) -> EmotiscopeError {
    EmotiscopeError::MalformedLexicon(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> LexiconBuilder {
        LexiconStore::builder()
            .category("joy", "😊", "Happiness", &["happy", "glad"])
            .category("sadness", "😢", "Sorrow", &["sad", "gloomy"])
    }

    #[test]
    fn test_builtin_profiles_are_valid() {
        let core = LexiconStore::from_profile(LexiconProfile::Core).unwrap();
        assert_eq!(core.len(), 4);
        let extended = LexiconStore::from_profile(LexiconProfile::Extended).unwrap();
        assert_eq!(extended.len(), 12);
        assert_eq!(extended.opposites().len(), 5);
    }

    #[test]
    fn test_registration_order_is_preserved() {
        let store = minimal().build().unwrap();
        let keys: Vec<_> = store.categories().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["joy", "sadness"]);
        assert_eq!(store.index_of("sadness"), Some(1));
        assert_eq!(store.category_for("glad"), Some(0));
        assert_eq!(store.category_for("unknown"), None);
    }

    #[test]
    fn test_words_are_normalized() {
        let store = LexiconStore::builder()
            .category("Joy", "😊", "Happiness", &["  HAPPY "])
            .build()
            .unwrap();
        assert_eq!(store.index_of("joy"), Some(0));
        assert_eq!(store.category_for("happy"), Some(0));
    }

    #[test]
    fn test_overlapping_triggers_are_rejected() {
        let err = minimal()
            .category("trust", "🤝", "Trust", &["glad"])
            .build()
            .unwrap_err();
        assert!(matches!(err, EmotiscopeError::MalformedLexicon(_)));
        assert!(err.to_string().contains("glad"));
    }

    #[test]
    fn test_trigger_modifier_overlap_is_rejected() {
        let err = minimal().intensifiers(&["happy"]).build().unwrap_err();
        assert!(err.to_string().contains("intensifier"));
    }

    #[test]
    fn test_negation_conditional_overlap_is_rejected() {
        let err = minimal()
            .negations(&["not"])
            .conditionals(&["not"])
            .build()
            .unwrap_err();
        assert!(matches!(err, EmotiscopeError::MalformedLexicon(_)));
    }

    #[test]
    fn test_duplicate_within_one_set_is_tolerated() {
        let store = minimal().negations(&["not", "not"]).build().unwrap();
        assert_eq!(store.context_words().negations().len(), 1);
    }

    #[test]
    fn test_negated_forms_resolve_to_base_category() {
        let store = minimal()
            .negated_forms(&[("unhappy", "happy"), ("UnGlad", "glad")])
            .build()
            .unwrap();
        assert_eq!(store.negated_form("unhappy"), Some(0));
        assert_eq!(store.negated_form("unglad"), Some(0));
        assert_eq!(store.negated_form("happy"), None);
        assert_eq!(store.category_for("unhappy"), None);
        assert!(store.vocabulary().any(|w| w == "unhappy"));
    }

    #[test]
    fn test_negated_form_must_be_disjoint_and_grounded() {
        // already a trigger
        let err = minimal().negated_forms(&[("sad", "happy")]).build().unwrap_err();
        assert!(err.to_string().contains("negated form"));
        // also a negation word
        let err = minimal()
            .negations(&["unhappy"])
            .negated_forms(&[("unhappy", "happy")])
            .build()
            .unwrap_err();
        assert!(matches!(err, EmotiscopeError::MalformedLexicon(_)));
        // base is not a trigger
        let err = minimal()
            .negated_forms(&[("unangry", "angry")])
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("not a trigger"));
    }

    #[test]
    fn test_unknown_opposite_is_rejected() {
        let err = minimal().opposite("joy", "anger").build().unwrap_err();
        assert!(err.to_string().contains("unknown category 'anger'"));
    }

    #[test]
    fn test_conflicting_opposites_are_rejected() {
        let err = minimal()
            .category("anger", "😠", "Anger", &["angry"])
            .opposite("joy", "sadness")
            .opposite("joy", "anger")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("already paired"));
    }

    #[test]
    fn test_self_opposite_is_rejected() {
        assert!(minimal().opposite("joy", "joy").build().is_err());
    }

    #[test]
    fn test_reserved_and_duplicate_keys() {
        assert!(LexiconStore::builder()
            .category("neutral", "😐", "None", &["meh"])
            .build()
            .is_err());
        assert!(minimal()
            .category("joy", "😊", "Again", &["cheerful"])
            .build()
            .is_err());
    }

    #[test]
    fn test_empty_lexicon_and_empty_category() {
        assert!(LexiconStore::builder().build().is_err());
        let empty: [&str; 0] = [];
        assert!(LexiconStore::builder()
            .category("joy", "😊", "Happiness", &empty)
            .build()
            .is_err());
    }

    #[test]
    fn test_multi_word_trigger_is_rejected() {
        assert!(LexiconStore::builder()
            .category("joy", "😊", "Happiness", &["over the moon"])
            .build()
            .is_err());
    }

    #[test]
    fn test_opposites_are_symmetric() {
        let store = minimal().opposite("joy", "sadness").build().unwrap();
        assert_eq!(store.opposites().get(0), Some(1));
        assert_eq!(store.opposites().get(1), Some(0));
        assert_eq!(store.opposite_key("sadness"), Some("joy"));
    }

    #[test]
    fn test_modifier_lookup() {
        let store = minimal()
            .intensifiers(&["very"])
            .diminishers(&["slightly"])
            .build()
            .unwrap();
        assert_eq!(store.modifiers().get("very"), Some(Modifier::Intensifier));
        assert_eq!(store.modifiers().get("slightly"), Some(Modifier::Diminisher));
        assert_eq!(store.modifiers().intensifier_count(), 1);
        assert_eq!(store.modifiers().diminisher_count(), 1);
    }
}
