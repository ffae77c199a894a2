//! The attribute bag.

use indexmap::IndexMap;

/// An insertion-ordered `name="value"` attribute collection.
///
/// Values are interpolated verbatim: the builder layer deals only in
/// internally-controlled tokens and numbers, so callers are
/// responsible for any escaping of externally-sourced values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    map: IndexMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.map.insert(key.into(), value.into());
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.map.shift_remove(key)
    }

    /// The current value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Render as ` key="value"` pairs in insertion order, with a
    /// leading space per pair so the result drops straight into an
    /// open tag.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.map {
            out.push_str(&format!(" {}=\"{}\"", key, value));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_preserves_insertion_order() {
        let mut attrs = Attributes::new();
        attrs.set("data-role", "main");
        attrs.set("aria-hidden", "false");
        assert_eq!(attrs.render(), " data-role=\"main\" aria-hidden=\"false\"");
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut attrs = Attributes::new();
        attrs.set("a", "1");
        attrs.set("b", "2");
        attrs.set("a", "3");
        assert_eq!(attrs.render(), " a=\"3\" b=\"2\"");
    }

    #[test]
    fn test_remove_and_contains() {
        let mut attrs = Attributes::new();
        attrs.set("id", "hero");
        assert!(attrs.contains("id"));
        assert_eq!(attrs.remove("id"), Some("hero".to_string()));
        assert!(!attrs.contains("id"));
        assert_eq!(attrs.render(), "");
    }
}
