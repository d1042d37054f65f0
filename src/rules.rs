//! Rule tables, sentences and the parallel rewriting step.
//!
//! A generation replaces every symbol of the current [`Sentence`] that has an
//! entry in the [`RuleTable`] with its replacement, and copies every other
//! symbol through unchanged.

use crate::error::{LSystemError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Mapping from a single symbol to its replacement string.
///
/// Keys are exactly one `char`. Symbols without an entry follow the identity rule.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct RuleTable {
    rules: BTreeMap<char, String>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(key, replacement)` pairs, rejecting keys that are
    /// not a single symbol.
    pub fn from_pairs<K, V, I>(pairs: I) -> Result<Self>
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut table = Self::new();
        for (key, replacement) in pairs {
            table.insert_str(key.as_ref(), replacement)?;
        }
        Ok(table)
    }

    /// Sets the replacement for `symbol`, returning the previous one.
    pub fn insert(&mut self, symbol: char, replacement: impl Into<String>) -> Option<String> {
        self.rules.insert(symbol, replacement.into())
    }

    /// Like [`insert`](Self::insert), but takes the key as a string and checks
    /// that it holds exactly one symbol.
    pub fn insert_str(&mut self, key: &str, replacement: impl Into<String>) -> Result<()> {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => {
                self.insert(symbol, replacement);
                Ok(())
            }
            _ => Err(LSystemError::InvalidRuleKey {
                key: key.to_string(),
            }),
        }
    }

    pub fn get(&self, symbol: char) -> Option<&str> {
        self.rules.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.rules.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl TryFrom<BTreeMap<String, String>> for RuleTable {
    type Error = LSystemError;

    fn try_from(map: BTreeMap<String, String>) -> Result<Self> {
        Self::from_pairs(map)
    }
}

impl From<RuleTable> for BTreeMap<String, String> {
    fn from(table: RuleTable) -> Self {
        table
            .rules
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }
}

/// An immutable string of symbols: the state of one generation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sentence(String);

impl Sentence {
    pub fn new(symbols: impl Into<String>) -> Self {
        Self(symbols.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of symbols (not bytes).
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn symbols(&self) -> std::str::Chars<'_> {
        self.0.chars()
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Sentence {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Sentence {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Sentence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Applies every rule of `rules` to `current` once and returns the next generation.
pub fn generate(current: &Sentence, rules: &RuleTable) -> Sentence {
    let mut next = String::with_capacity(current.0.len());
    for symbol in current.symbols() {
        match rules.get(symbol) {
            Some(replacement) => next.push_str(replacement),
            None => next.push(symbol),
        }
    }
    Sentence(next)
}

/// Symbol count of `generate(current, rules)`, computed without building it.
pub fn generated_len(current: &Sentence, rules: &RuleTable) -> usize {
    current
        .symbols()
        .map(|symbol| rules.get(symbol).map_or(1, |r| r.chars().count()))
        .sum()
}

/// Runs `generations` successive rewriting steps starting at `axiom`.
pub fn generate_n(axiom: &Sentence, rules: &RuleTable, generations: u32) -> Sentence {
    let mut sentence = axiom.clone();
    for _ in 0..generations {
        sentence = generate(&sentence, rules);
    }
    sentence
}

/// An axiom together with its production rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LSystemDefinition {
    pub axiom: Sentence,
    pub rules: RuleTable,
}

impl LSystemDefinition {
    pub fn new(axiom: impl Into<Sentence>, rules: RuleTable) -> Self {
        Self {
            axiom: axiom.into(),
            rules,
        }
    }

    /// The bushy plant: `F -> FF+[+F-F-F]-[-F+F+F]`.
    pub fn fractal_plant() -> Self {
        let mut rules = RuleTable::new();
        rules.insert('F', "FF+[+F-F-F]-[-F+F+F]");
        Self::new("F", rules)
    }
}

impl Default for LSystemDefinition {
    fn default() -> Self {
        Self::fractal_plant()
    }
}
