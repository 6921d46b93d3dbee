//! Insertion-ordered prompt content mapping.

use serde::Serialize;

/// A single prompt field value: a scalar string or an ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PromptValue {
    Text(String),
    List(Vec<String>),
}

impl PromptValue {
    /// Renders the value as it appears after the label.
    ///
    /// List values are joined with `, `.
    pub fn render(&self) -> String {
        match self {
            PromptValue::Text(s) => s.clone(),
            PromptValue::List(items) => items.join(", "),
        }
    }
}

impl From<&str> for PromptValue {
    fn from(value: &str) -> Self {
        PromptValue::Text(value.to_string())
    }
}

impl From<String> for PromptValue {
    fn from(value: String) -> Self {
        PromptValue::Text(value)
    }
}

impl From<Vec<String>> for PromptValue {
    fn from(value: Vec<String>) -> Self {
        PromptValue::List(value)
    }
}

impl From<&[&str]> for PromptValue {
    fn from(value: &[&str]) -> Self {
        PromptValue::List(value.iter().map(|s| s.to_string()).collect())
    }
}

/// Insertion-ordered mapping of label to value.
///
/// No escaping is applied: a label or value containing the `- ` line prefix
/// is indistinguishable from a separate entry in the rendered text. Callers
/// control the labels, so this is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptContent {
    entries: Vec<(String, PromptValue)>,
}

impl PromptContent {
    /// Creates an empty content mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, preserving insertion order.
    pub fn with(mut self, label: impl Into<String>, value: impl Into<PromptValue>) -> Self {
        self.entries.push((label.into(), value.into()));
        self
    }

    /// Appends an entry in place.
    pub fn push(&mut self, label: impl Into<String>, value: impl Into<PromptValue>) {
        self.entries.push((label.into(), value.into()));
    }

    /// Returns true when no entries have been added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &PromptValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Renders one `- <label>: <value>` line per entry, joined with newlines.
    ///
    /// An empty mapping renders to an empty string, not an error.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|(label, value)| format!("- {}: {}", label, value.render()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
