use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Canonical lower-case name, the form hosts report the active season in.
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "fall" => Some(Season::Fall),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Seasons listed for a crop, in configuration order.
///
/// Membership is all that matters; a season listed twice behaves the same as
/// a season listed once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonSet {
    seasons: Vec<Season>,
}

impl SeasonSet {
    pub fn new(seasons: Vec<Season>) -> Self {
        Self { seasons }
    }

    /// Parse a comma-separated season list such as `"Spring, summer,FALL"`.
    ///
    /// Returns the recognised seasons plus every token that did not name a
    /// season. Empty tokens (from trailing commas or blank input) are skipped.
    pub fn parse(input: &str) -> (Self, Vec<String>) {
        let mut seasons = Vec::new();
        let mut unknown = Vec::new();

        for token in input.split(',') {
            let trimmed = token.trim();
            if trimmed.is_empty() {
                continue;
            }
            match Season::from_str(trimmed) {
                Some(season) => seasons.push(season),
                None => unknown.push(trimmed.to_string()),
            }
        }

        (Self { seasons }, unknown)
    }

    pub fn contains(&self, season: Season) -> bool {
        self.seasons.contains(&season)
    }

    pub fn iter(&self) -> impl Iterator<Item = Season> + '_ {
        self.seasons.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.seasons.is_empty()
    }
}

impl std::fmt::Display for SeasonSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.seasons.is_empty() {
            return write!(f, "(none)");
        }
        let names: Vec<&str> = self.seasons.iter().map(|s| s.as_str()).collect();
        write!(f, "{}", names.join(", "))
    }
}
