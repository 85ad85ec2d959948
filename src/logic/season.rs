use crate::models::{Season, SeasonSet};

/// Compare two names ignoring case and surrounding whitespace.
pub fn matches(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// True when `active` names one of the seasons in `set`.
pub fn is_active_season(set: &SeasonSet, active: &str) -> bool {
    set.iter().any(|season| matches(season.as_str(), active))
}

pub fn is_winter(active: &str) -> bool {
    matches(Season::Winter.as_str(), active)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_ignores_case_and_padding() {
        assert!(matches("winter", "Winter"));
        assert!(matches("  fall", "FALL  "));
        assert!(!matches("fall", "f all"));
        assert!(!matches("spring", "summer"));
    }

    #[test]
    fn active_season_membership() {
        let (set, _) = SeasonSet::parse("spring,fall");
        assert!(is_active_season(&set, "spring"));
        assert!(is_active_season(&set, " Fall "));
        assert!(!is_active_season(&set, "summer"));
        assert!(!is_active_season(&set, ""));
    }

    #[test]
    fn empty_set_never_active() {
        assert!(!is_active_season(&SeasonSet::default(), "winter"));
    }

    #[test]
    fn winter_detection() {
        assert!(is_winter("winter"));
        assert!(is_winter(" WINTER"));
        assert!(!is_winter("fall"));
    }
}
