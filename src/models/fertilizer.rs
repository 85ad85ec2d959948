use serde::{Deserialize, Serialize};

/// Host item code stored in a tile's fertilizer slot (0 when empty).
pub type FertilizerCode = i32;

/// Fertilizers that keep a tile watered overnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetainingSoil {
    Basic,
    Quality,
    Deluxe,
}

impl RetainingSoil {
    pub fn from_code(code: FertilizerCode) -> Option<Self> {
        match code {
            370 => Some(RetainingSoil::Basic),
            371 => Some(RetainingSoil::Quality),
            920 => Some(RetainingSoil::Deluxe),
            _ => None,
        }
    }

    pub fn code(&self) -> FertilizerCode {
        match self {
            RetainingSoil::Basic => 370,
            RetainingSoil::Quality => 371,
            RetainingSoil::Deluxe => 920,
        }
    }

    /// Odds that a tile keeps its water overnight; `None` means always.
    pub fn retention_chance(&self) -> Option<f64> {
        match self {
            RetainingSoil::Basic => Some(0.33),
            RetainingSoil::Quality => Some(0.66),
            RetainingSoil::Deluxe => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RetainingSoil::Basic => "Basic Retaining Soil",
            RetainingSoil::Quality => "Quality Retaining Soil",
            RetainingSoil::Deluxe => "Deluxe Retaining Soil",
        }
    }
}

impl std::fmt::Display for RetainingSoil {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_known() {
        assert_eq!(RetainingSoil::from_code(370), Some(RetainingSoil::Basic));
        assert_eq!(RetainingSoil::from_code(371), Some(RetainingSoil::Quality));
        assert_eq!(RetainingSoil::from_code(920), Some(RetainingSoil::Deluxe));
    }

    #[test]
    fn from_code_other_fertilizers() {
        // Speed-Gro and plain fertilizer do not retain water.
        assert_eq!(RetainingSoil::from_code(465), None);
        assert_eq!(RetainingSoil::from_code(368), None);
        assert_eq!(RetainingSoil::from_code(0), None);
    }

    #[test]
    fn codes_round_trip() {
        for soil in [
            RetainingSoil::Basic,
            RetainingSoil::Quality,
            RetainingSoil::Deluxe,
        ] {
            assert_eq!(RetainingSoil::from_code(soil.code()), Some(soil));
        }
    }

    #[test]
    fn retention_odds() {
        assert_eq!(RetainingSoil::Basic.retention_chance(), Some(0.33));
        assert_eq!(RetainingSoil::Quality.retention_chance(), Some(0.66));
        assert_eq!(RetainingSoil::Deluxe.retention_chance(), None);
    }
}
