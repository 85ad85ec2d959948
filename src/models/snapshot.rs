//! Detached copies of host records.
//!
//! These implement the host traits without modelling any growth: `new_day`
//! and sprite refreshes are only counted. The CLI builds them from flags.

use super::{FertilizerCode, TilePosition, WaterState};
use crate::error::Result;
use crate::host::{CropRecord, GameLocation, IndoorPot, SoilTile};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSnapshot {
    pub name: String,
    pub season: String,
    pub world_season: String,
}

impl LocationSnapshot {
    /// A location that follows the world calendar.
    pub fn new(name: impl Into<String>, season: impl Into<String>) -> Self {
        let season = season.into();
        Self {
            name: name.into(),
            world_season: season.clone(),
            season,
        }
    }

    pub fn with_world_season(mut self, world_season: impl Into<String>) -> Self {
        self.world_season = world_season.into();
        self
    }
}

impl GameLocation for LocationSnapshot {
    fn name(&self) -> &str {
        &self.name
    }

    fn season(&self) -> &str {
        &self.season
    }

    fn world_season(&self) -> &str {
        &self.world_season
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropSnapshot {
    pub harvest_item_id: String,
    pub current_phase: i32,
    pub day_of_current_phase: i32,
    pub phase_days: Vec<i32>,
    pub regrows_after_harvest: bool,
    #[serde(default)]
    pub dead: bool,
    #[serde(default)]
    pub days_advanced: u32,
}

impl CropSnapshot {
    pub fn new(harvest_item_id: impl Into<String>, phase_days: Vec<i32>) -> Self {
        Self {
            harvest_item_id: harvest_item_id.into(),
            current_phase: 0,
            day_of_current_phase: 0,
            phase_days,
            regrows_after_harvest: false,
            dead: false,
            days_advanced: 0,
        }
    }

    pub fn at(mut self, phase: i32, day: i32) -> Self {
        self.current_phase = phase;
        self.day_of_current_phase = day;
        self
    }

    pub fn regrowing(mut self) -> Self {
        self.regrows_after_harvest = true;
        self
    }
}

impl CropRecord for CropSnapshot {
    fn harvest_item_id(&self) -> &str {
        &self.harvest_item_id
    }

    fn current_phase(&self) -> i32 {
        self.current_phase
    }

    fn set_current_phase(&mut self, phase: i32) {
        self.current_phase = phase;
    }

    fn day_of_current_phase(&self) -> i32 {
        self.day_of_current_phase
    }

    fn set_day_of_current_phase(&mut self, day: i32) {
        self.day_of_current_phase = day;
    }

    fn phase_days(&self) -> &[i32] {
        &self.phase_days
    }

    fn regrows_after_harvest(&self) -> bool {
        self.regrows_after_harvest
    }

    fn kill(&mut self) -> Result<()> {
        self.dead = true;
        Ok(())
    }

    fn new_day(
        &mut self,
        _state: WaterState,
        _fertilizer: FertilizerCode,
        _position: TilePosition,
        _location: &dyn GameLocation,
    ) -> Result<()> {
        self.days_advanced += 1;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoilSnapshot {
    pub crop: Option<CropSnapshot>,
    pub state: WaterState,
    #[serde(default)]
    pub fertilizer: FertilizerCode,
    #[serde(default)]
    pub paddy_crop: bool,
    /// Result the paddy water check reports.
    #[serde(default)]
    pub near_water: bool,
    #[serde(default)]
    pub sprite_refreshes: u32,
}

impl SoilSnapshot {
    pub fn planted(crop: CropSnapshot) -> Self {
        Self {
            crop: Some(crop),
            state: WaterState::WATERED,
            ..Self::default()
        }
    }

    pub fn with_fertilizer(mut self, fertilizer: FertilizerCode) -> Self {
        self.fertilizer = fertilizer;
        self
    }

    pub fn with_paddy(mut self, near_water: bool) -> Self {
        self.paddy_crop = true;
        self.near_water = near_water;
        self
    }
}

impl SoilTile for SoilSnapshot {
    type Crop = CropSnapshot;

    fn crop(&self) -> Option<&CropSnapshot> {
        self.crop.as_ref()
    }

    fn crop_mut(&mut self) -> Option<&mut CropSnapshot> {
        self.crop.as_mut()
    }

    fn water_state(&self) -> WaterState {
        self.state
    }

    fn set_water_state(&mut self, state: WaterState) {
        self.state = state;
    }

    fn fertilizer(&self) -> FertilizerCode {
        self.fertilizer
    }

    fn has_paddy_crop(&self) -> bool {
        self.paddy_crop
    }

    fn paddy_water_check(&self, _location: &dyn GameLocation, _position: TilePosition) -> bool {
        self.near_water
    }

    fn refresh_seasonal_sprites(&mut self, _location: &dyn GameLocation, _position: TilePosition) {
        self.sprite_refreshes += 1;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotSnapshot {
    pub soil: Option<SoilSnapshot>,
    pub position: TilePosition,
}

impl IndoorPot for PotSnapshot {
    type Soil = SoilSnapshot;

    fn soil_mut(&mut self) -> Option<&mut SoilSnapshot> {
        self.soil.as_mut()
    }

    fn tile_position(&self) -> TilePosition {
        self.position
    }
}
