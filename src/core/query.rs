//! Ordered query-string parameters forwarded to the content API.

use std::fmt::Display;

/// Query parameters in insertion order.
///
/// Optional values go through [`QueryParams::with_opt`]: `Some` is always
/// forwarded, even `Some(0)` or `Some("")`, and `None` leaves the key out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &'static str, value: impl Display) -> Self {
        self.0.push((key, value.to_string()));
        self
    }

    pub fn with_opt<T: Display>(self, key: &'static str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.with(key, v),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_empty_string_are_present() {
        let q = QueryParams::new()
            .with_opt("offset", Some(0u32))
            .with_opt("q", Some(""))
            .with_opt::<u32>("depth", None);
        assert_eq!(q.get("offset"), Some("0"));
        assert_eq!(q.get("q"), Some(""));
        assert!(q.get("depth").is_none());
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn keeps_insertion_order() {
        let q = QueryParams::new().with("z", 1).with("a", "x").with("m", 3);
        let keys: Vec<_> = q.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn empty_by_default() {
        assert!(QueryParams::new().is_empty());
    }
}
