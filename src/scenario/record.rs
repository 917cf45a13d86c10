//! Ordered scenario records
//!
//! A scenario is one set of form field values to submit and verify as a
//! single test case. Keys keep their first-insertion order so a record
//! round-trips through the text format unchanged; assigning an existing key
//! overwrites its value in place.

use std::fmt;

use crate::common::{Error, Result};

/// One test scenario: an ordered mapping from field name to field value.
///
/// Values are plain strings; the form itself is responsible for any
/// email/phone validation, not the tester.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scenario {
    entries: Vec<(String, String)>,
}

impl Scenario {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key/value pair. A duplicate key overwrites the existing
    /// value and keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Look up a field the form requires.
    ///
    /// Absence of a required key is only detected here, when the runner
    /// reaches the field, never eagerly by the loader.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| Error::missing_field(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Human-readable tag for progress output: the `nome` field when
    /// present, a placeholder otherwise.
    pub fn label(&self) -> &str {
        self.get("nome").unwrap_or("(unnamed scenario)")
    }
}

impl fmt::Display for Scenario {
    /// Renders the record back to the `key = value` text form accepted by
    /// the loader.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            writeln!(f, "{key} = {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_preserves_order() {
        let mut s = Scenario::new();
        s.insert("nome", "Ana");
        s.insert("email", "ana@example.com");
        s.insert("telefone", "11999990000");

        let keys: Vec<&str> = s.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["nome", "email", "telefone"]);
    }

    #[test]
    fn duplicate_key_keeps_last_value_and_position() {
        let mut s = Scenario::new();
        s.insert("nome", "Ana");
        s.insert("email", "ana@example.com");
        s.insert("nome", "Beatriz");

        assert_eq!(s.get("nome"), Some("Beatriz"));
        assert_eq!(s.len(), 2);
        let keys: Vec<&str> = s.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["nome", "email"]);
    }

    #[test]
    fn require_surfaces_missing_field() {
        let mut s = Scenario::new();
        s.insert("nome", "Ana");

        assert_eq!(s.require("nome").unwrap(), "Ana");
        let err = s.require("telefone").unwrap_err();
        assert!(matches!(err, Error::MissingField { field } if field == "telefone"));
    }

    #[test]
    fn display_renders_key_value_lines() {
        let mut s = Scenario::new();
        s.insert("nome", "Ana Silva");
        s.insert("email", "ana@example.com");

        assert_eq!(s.to_string(), "nome = Ana Silva\nemail = ana@example.com\n");
    }

    #[test]
    fn label_falls_back_when_nome_is_absent() {
        let mut s = Scenario::new();
        s.insert("email", "x@example.com");
        assert_eq!(s.label(), "(unnamed scenario)");
    }
}
