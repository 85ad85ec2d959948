use crate::error::{AdjustmentError, Result};
use crate::host::{CropRecord, GameLocation, SoilTile};
use crate::models::{RetainingSoil, TilePosition, WaterState};
use rand::Rng;
use serde::Serialize;

/// Why a tile kept its water overnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Retention {
    Paddy,
    Soil { soil: RetainingSoil },
}

impl std::fmt::Display for Retention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Retention::Paddy => write!(f, "paddy crop next to water"),
            Retention::Soil { soil } => write!(f, "{}", soil),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WinterSurvival {
    pub retention: Option<Retention>,
}

impl WinterSurvival {
    pub fn water_reset(&self) -> bool {
        self.retention.is_none()
    }
}

/// Carry a winter-hardy crop through a day the host would otherwise wither it.
///
/// Runs the crop's own day advance, then dries the tile unless a paddy or a
/// retaining soil keeps the water. Draws from `rng` at most once, and only for
/// basic or quality retaining soil.
pub fn keep_alive<T, R>(
    tile: &mut T,
    location: &dyn GameLocation,
    position: TilePosition,
    rng: &mut R,
) -> Result<WinterSurvival>
where
    T: SoilTile + ?Sized,
    R: Rng + ?Sized,
{
    let state = tile.water_state();
    let fertilizer = tile.fertilizer();
    let crop = tile
        .crop_mut()
        .ok_or_else(|| AdjustmentError::NotFound(format!("no crop planted at {}", position)))?;
    crop.new_day(state, fertilizer, position, location)?;

    let retention = water_retention(&*tile, location, position, rng);
    if retention.is_none() {
        tile.set_water_state(WaterState::DRY);
    }

    Ok(WinterSurvival { retention })
}

fn water_retention<T, R>(
    tile: &T,
    location: &dyn GameLocation,
    position: TilePosition,
    rng: &mut R,
) -> Option<Retention>
where
    T: SoilTile + ?Sized,
    R: Rng + ?Sized,
{
    if tile.has_paddy_crop() && tile.paddy_water_check(location, position) {
        return Some(Retention::Paddy);
    }

    let soil = RetainingSoil::from_code(tile.fertilizer())?;
    let kept = match soil.retention_chance() {
        Some(chance) => rng.gen::<f64>() < chance,
        None => true,
    };

    kept.then_some(Retention::Soil { soil })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CropSnapshot, LocationSnapshot, SoilSnapshot};
    use rand::rngs::mock::StepRng;

    // Draws of 0.0 and just under 1.0.
    fn low_draw() -> StepRng {
        StepRng::new(0, 0)
    }

    fn high_draw() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    fn tile(fertilizer: i32) -> SoilSnapshot {
        SoilSnapshot::planted(CropSnapshot::new("24", vec![1, 1, 1, 99999]))
            .with_fertilizer(fertilizer)
    }

    fn survive(tile: &mut SoilSnapshot, rng: &mut StepRng) -> WinterSurvival {
        let farm = LocationSnapshot::new("Farm", "winter");
        keep_alive(tile, &farm, TilePosition::new(3, 4), rng).unwrap()
    }

    #[test]
    fn runs_host_day_advance() {
        let mut soil = tile(0);
        survive(&mut soil, &mut low_draw());
        assert_eq!(soil.crop.as_ref().unwrap().days_advanced, 1);
    }

    #[test]
    fn unfertilized_tile_dries() {
        let mut soil = tile(0);
        let outcome = survive(&mut soil, &mut low_draw());
        assert!(outcome.water_reset());
        assert_eq!(soil.state, WaterState::DRY);
    }

    #[test]
    fn deluxe_soil_always_retains() {
        let mut soil = tile(920);
        let outcome = survive(&mut soil, &mut high_draw());
        assert_eq!(
            outcome.retention,
            Some(Retention::Soil {
                soil: RetainingSoil::Deluxe
            })
        );
        assert_eq!(soil.state, WaterState::WATERED);
    }

    #[test]
    fn basic_soil_depends_on_draw() {
        let mut lucky = tile(370);
        assert!(!survive(&mut lucky, &mut low_draw()).water_reset());
        assert_eq!(lucky.state, WaterState::WATERED);

        let mut unlucky = tile(370);
        assert!(survive(&mut unlucky, &mut high_draw()).water_reset());
        assert_eq!(unlucky.state, WaterState::DRY);
    }

    #[test]
    fn quality_soil_depends_on_draw() {
        let mut lucky = tile(371);
        assert!(!survive(&mut lucky, &mut low_draw()).water_reset());

        let mut unlucky = tile(371);
        assert!(survive(&mut unlucky, &mut high_draw()).water_reset());
    }

    #[test]
    fn paddy_next_to_water_retains() {
        let mut soil = tile(0).with_paddy(true);
        let outcome = survive(&mut soil, &mut high_draw());
        assert_eq!(outcome.retention, Some(Retention::Paddy));
        assert_eq!(soil.state, WaterState::WATERED);
    }

    #[test]
    fn paddy_away_from_water_dries() {
        let mut soil = tile(0).with_paddy(false);
        assert!(survive(&mut soil, &mut low_draw()).water_reset());
    }

    #[test]
    fn missing_crop_is_an_error() {
        let mut soil = SoilSnapshot::default();
        let farm = LocationSnapshot::new("Farm", "winter");
        let result = keep_alive(&mut soil, &farm, TilePosition::default(), &mut low_draw());
        assert!(matches!(result, Err(AdjustmentError::NotFound(_))));
    }
}
