//! Multi-valued query parameters

use std::collections::BTreeMap;

/// Query parameter name to ordered values
///
/// Names iterate in sorted order; values keep insertion order per name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryValues {
    values: BTreeMap<String, Vec<String>>,
}

impl QueryValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` under `name`, keeping earlier values
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.entry(name.into()).or_default().push(value.into());
    }

    /// First value recorded for `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values recorded for `name`, oldest first
    #[must_use]
    pub fn get_all(&self, name: &str) -> &[String] {
        self.values.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of distinct names
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Flattened `(name, value)` pairs in encoding order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().flat_map(|(name, values)| {
            values
                .iter()
                .map(move |value| (name.as_str(), value.as_str()))
        })
    }

    /// Render as `application/x-www-form-urlencoded`, e.g. `a=1&a=2&b=x+y`
    #[must_use]
    pub fn encode(&self) -> String {
        let pairs: Vec<(&str, &str)> = self.pairs().collect();
        serde_urlencoded::to_string(pairs).unwrap_or_default()
    }
}
