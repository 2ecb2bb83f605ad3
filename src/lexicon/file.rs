//! TOML lexicon files
//!
//! ```toml
//! [[category]]
//! key = "joy"
//! symbol = "😊"
//! description = "Happiness"
//! triggers = ["happy", "glad"]
//!
//! [modifiers]
//! intensifiers = ["very"]
//! diminishers = ["slightly"]
//!
//! [context]
//! negations = ["not"]
//! conditionals = ["if"]
//!
//! [negated_forms]
//! unhappy = "happy"
//!
//! [[opposite]]
//! a = "joy"
//! b = "sadness"
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use super::LexiconBuilder;
use super::LexiconStore;
use crate::Result;

#[derive(Debug, Deserialize)]
pub struct LexiconFile {
    #[serde(rename = "category", default)]
    pub categories: Vec<CategoryEntry>,
    #[serde(default)]
    pub modifiers: ModifierEntry,
    #[serde(default)]
    pub context: ContextEntry,
    /// negated form -> base trigger
    #[serde(default)]
    pub negated_forms: BTreeMap<String, String>,
    #[serde(rename = "opposite", default)]
    pub opposites: Vec<OppositeEntry>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryEntry {
    pub key: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub description: String,
    pub triggers: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ModifierEntry {
    #[serde(default)]
    pub intensifiers: Vec<String>,
    #[serde(default)]
    pub diminishers: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContextEntry {
    #[serde(default)]
    pub negations: Vec<String>,
    #[serde(default)]
    pub conditionals: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct OppositeEntry {
    pub a: String,
    pub b: String,
}

impl LexiconFile {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn into_builder(self) -> LexiconBuilder {
        let mut builder = LexiconStore::builder();
        for category in &self.categories {
            builder = builder.category(
                &category.key,
                &category.symbol,
                &category.description,
                category.triggers.as_slice(),
            );
        }
        builder = builder
            .intensifiers(self.modifiers.intensifiers.as_slice())
            .diminishers(self.modifiers.diminishers.as_slice())
            .negations(self.context.negations.as_slice())
            .conditionals(self.context.conditionals.as_slice());
        let negated: Vec<(&str, &str)> = self
            .negated_forms
            .iter()
            .map(|(form, base)| (form.as_str(), base.as_str()))
            .collect();
        builder = builder.negated_forms(negated.as_slice());
        for pair in &self.opposites {
            builder = builder.opposite(&pair.a, &pair.b);
        }
        builder
    }
}
