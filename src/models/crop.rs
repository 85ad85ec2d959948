use serde::{Deserialize, Serialize};

/// Duration the host appends after the last real phase so a grown crop stays grown.
pub const PHASE_DAYS_SENTINEL: i32 = 99999;

/// Number of real growth phases, ignoring the host's trailing sentinel.
pub fn effective_phase_count(phase_days: &[i32]) -> usize {
    match phase_days.last() {
        Some(&PHASE_DAYS_SENTINEL) => phase_days.len() - 1,
        _ => phase_days.len(),
    }
}

/// Watering state of a soil tile, as the host stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WaterState(pub i32);

impl WaterState {
    pub const DRY: WaterState = WaterState(0);
    pub const WATERED: WaterState = WaterState(1);

    pub fn is_watered(&self) -> bool {
        *self == Self::WATERED
    }
}

impl Default for WaterState {
    fn default() -> Self {
        Self::DRY
    }
}

impl std::fmt::Display for WaterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::DRY => write!(f, "dry"),
            Self::WATERED => write!(f, "watered"),
            WaterState(other) => write!(f, "state {}", other),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePosition {
    pub x: i32,
    pub y: i32,
}

impl TilePosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for TilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_phase_count_excludes_sentinel() {
        assert_eq!(effective_phase_count(&[1, 2, 2, 99999]), 3);
        assert_eq!(effective_phase_count(&[1, 2, 2, 3]), 4);
    }

    #[test]
    fn effective_phase_count_edge_cases() {
        assert_eq!(effective_phase_count(&[]), 0);
        assert_eq!(effective_phase_count(&[99999]), 0);
    }

    #[test]
    fn water_state_display() {
        assert_eq!(WaterState::DRY.to_string(), "dry");
        assert_eq!(WaterState::WATERED.to_string(), "watered");
        assert_eq!(WaterState(2).to_string(), "state 2");
        assert!(WaterState::WATERED.is_watered());
        assert!(!WaterState(2).is_watered());
    }
}
