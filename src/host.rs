//! Traits over the records a farming host owns.
//!
//! The adjustment logic never stores host state. It reads and nudges these
//! records inside a single hook call and leaves the real growth mechanics to
//! the host.

use crate::error::Result;
use crate::models::{FertilizerCode, TilePosition, WaterState};

/// A location crops can be planted in.
pub trait GameLocation {
    fn name(&self) -> &str;

    /// Season currently active at this location, e.g. `"winter"`.
    fn season(&self) -> &str;

    /// Season of the world calendar. Locations with their own climate may
    /// report a different [`season`](GameLocation::season).
    fn world_season(&self) -> &str;
}

/// A planted crop's growth cursor.
pub trait CropRecord {
    /// Item id of what the crop produces; rules are keyed by it.
    fn harvest_item_id(&self) -> &str;

    fn current_phase(&self) -> i32;
    fn set_current_phase(&mut self, phase: i32);

    fn day_of_current_phase(&self) -> i32;
    fn set_day_of_current_phase(&mut self, day: i32);

    /// Days spent in each phase, including the host's trailing sentinel.
    fn phase_days(&self) -> &[i32];

    fn regrows_after_harvest(&self) -> bool;

    fn kill(&mut self) -> Result<()>;

    /// The host's own day-advance for this crop.
    fn new_day(
        &mut self,
        state: WaterState,
        fertilizer: FertilizerCode,
        position: TilePosition,
        location: &dyn GameLocation,
    ) -> Result<()>;
}

/// Tilled soil that may hold a crop.
pub trait SoilTile {
    type Crop: CropRecord;

    fn crop(&self) -> Option<&Self::Crop>;
    fn crop_mut(&mut self) -> Option<&mut Self::Crop>;

    fn water_state(&self) -> WaterState;
    fn set_water_state(&mut self, state: WaterState);

    fn fertilizer(&self) -> FertilizerCode;

    fn has_paddy_crop(&self) -> bool;

    /// Whether a paddy crop on this tile is next to water.
    fn paddy_water_check(&self, location: &dyn GameLocation, position: TilePosition) -> bool;

    /// Swap the crop to its seasonal appearance, if the host supports one.
    fn refresh_seasonal_sprites(&mut self, _location: &dyn GameLocation, _position: TilePosition) {}
}

/// A garden pot wrapping its own soil tile.
pub trait IndoorPot {
    type Soil: SoilTile;

    fn soil_mut(&mut self) -> Option<&mut Self::Soil>;

    fn tile_position(&self) -> TilePosition;
}
