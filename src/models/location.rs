use crate::logic::season::matches;
use serde::{Deserialize, Serialize};

/// Locations where a crop keeps the host's default seasonal behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationNameSet {
    names: Vec<String>,
}

impl LocationNameSet {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Parse a comma-separated list of location names, trimming each entry.
    pub fn parse(input: &str) -> Self {
        let names = input
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();
        Self { names }
    }

    /// True when `location` is listed, ignoring case and surrounding whitespace.
    pub fn contains(&self, location: &str) -> bool {
        self.names.iter().any(|name| matches(name, location))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl std::fmt::Display for LocationNameSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.names.is_empty() {
            return write!(f, "(none)");
        }
        write!(f, "{}", self.names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_names() {
        let set = LocationNameSet::parse(" Greenhouse , IslandWest");
        let names: Vec<&str> = set.iter().collect();
        assert_eq!(names, vec!["Greenhouse", "IslandWest"]);
    }

    #[test]
    fn parse_blank_input_is_empty() {
        assert!(LocationNameSet::parse("").is_empty());
        assert!(LocationNameSet::parse(" , ").is_empty());
    }

    #[test]
    fn contains_ignores_case_and_whitespace() {
        let set = LocationNameSet::parse("Greenhouse");
        assert!(set.contains("greenhouse"));
        assert!(set.contains(" GREENHOUSE "));
        assert!(!set.contains("Farm"));
    }
}
