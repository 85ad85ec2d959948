//! Entry points a host calls from its lifecycle hooks.
//!
//! Every hook contains its own faults: an error is logged and the host's
//! default behaviour for that tile goes ahead, so one broken crop never stops
//! the rest of the day.

use crate::error::AdjustmentError;
use crate::host::{CropRecord, GameLocation, IndoorPot, SoilTile};
use crate::logic::{AdjustmentDispatcher, RuleCatalog};
use crate::models::{FertilizerCode, TilePosition, WaterState};
use rand::Rng;

pub struct CropAdjustmentHooks {
    catalog: RuleCatalog,
}

impl CropAdjustmentHooks {
    pub fn new(catalog: RuleCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    pub fn dispatcher(&self) -> AdjustmentDispatcher<'_> {
        AdjustmentDispatcher::new(&self.catalog)
    }

    /// Daily soil update, before the host withers or advances the crop.
    ///
    /// Returns `false` when the host must skip its own logic for this tile.
    pub fn soil_day_update<T, R>(
        &self,
        tile: &mut T,
        location: &dyn GameLocation,
        position: TilePosition,
        rng: &mut R,
    ) -> bool
    where
        T: SoilTile + ?Sized,
        R: Rng + ?Sized,
    {
        match self
            .dispatcher()
            .daily_wither_check(tile, location, position, rng)
        {
            Ok(outcome) => outcome.continue_default(),
            Err(e) => {
                log_fault("soil_day_update", location, position, &e);
                true
            }
        }
    }

    /// Runs after the host plants into `tile`; never vetoes planting.
    pub fn after_plant<T>(
        &self,
        tile: &mut T,
        location: &dyn GameLocation,
        position: TilePosition,
        planted: bool,
    ) where
        T: SoilTile + ?Sized,
    {
        if planted {
            tile.refresh_seasonal_sprites(location, position);
        }
    }

    /// Daily update of a garden pot, treated like the soil it holds.
    pub fn indoor_pot_day_update<P, R>(
        &self,
        pot: &mut P,
        location: &dyn GameLocation,
        rng: &mut R,
    ) -> bool
    where
        P: IndoorPot + ?Sized,
        R: Rng + ?Sized,
    {
        let position = pot.tile_position();
        let Some(soil) = pot.soil_mut() else {
            return true;
        };
        if soil.crop().is_none() {
            return true;
        }

        self.soil_day_update(soil, location, position, rng)
    }

    /// Runs at the start of the crop's own day advance; the host always
    /// continues with its advance afterwards.
    ///
    /// `fertilizer`, `x` and `y` mirror the host's day-advance arguments. The
    /// adjustment does not use them; they only appear in fault logs.
    pub fn crop_new_day<C>(
        &self,
        crop: &mut C,
        state: WaterState,
        fertilizer: FertilizerCode,
        x: i32,
        y: i32,
        location: &dyn GameLocation,
    ) where
        C: CropRecord + ?Sized,
    {
        if let Err(e) = self.dispatcher().phase_advance(crop, state, location) {
            tracing::error!(
                hook = "crop_new_day",
                location = location.name(),
                position = %TilePosition::new(x, y),
                fertilizer,
                "Failed in crop_new_day:\n{:?}",
                e
            );
        }
    }
}

fn log_fault(
    hook: &'static str,
    location: &dyn GameLocation,
    position: TilePosition,
    error: &AdjustmentError,
) {
    tracing::error!(
        hook,
        location = location.name(),
        %position,
        "Failed in {}:\n{:?}",
        hook,
        error
    );
}
