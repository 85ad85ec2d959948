use super::catalog::RuleCatalog;
use super::rollback::{self, Rollback};
use super::season::{is_active_season, is_winter};
use super::winter::{self, Retention};
use crate::error::Result;
use crate::host::{CropRecord, GameLocation, SoilTile};
use crate::models::{effective_phase_count, Season, TilePosition, WaterState};
use rand::Rng;
use serde::Serialize;

/// Decision taken on the host's daily wither check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum WitherOutcome {
    NoCrop,
    NoRule,
    /// The rule does not list winter as a growing season.
    DiesInWinter,
    NotWinter,
    KeptAlive { retention: Option<Retention> },
}

impl WitherOutcome {
    /// Whether the host should still run its own wither and advance logic.
    pub fn continue_default(&self) -> bool {
        !matches!(self, WitherOutcome::KeptAlive { .. })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WitherOutcome::NoCrop => "no crop planted",
            WitherOutcome::NoRule => "no adjustment for this crop",
            WitherOutcome::DiesInWinter => "crop is not configured to grow in winter",
            WitherOutcome::NotWinter => "not winter",
            WitherOutcome::KeptAlive { .. } => "kept alive through winter",
        }
    }
}

impl std::fmt::Display for WitherOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WitherOutcome::KeptAlive {
                retention: Some(retention),
            } => write!(f, "{} (water kept: {})", self.as_str(), retention),
            WitherOutcome::KeptAlive { retention: None } => {
                write!(f, "{} (water reset)", self.as_str())
            }
            _ => write!(f, "{}", self.as_str()),
        }
    }
}

/// Adjustment applied before the host advances a crop's phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PhaseOutcome {
    NotWatered,
    NoRule,
    DefaultLocation,
    ProducingSeason,
    Killed,
    RolledBack { rollback: Rollback },
}

impl PhaseOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseOutcome::NotWatered => "not watered",
            PhaseOutcome::NoRule => "no adjustment for this crop",
            PhaseOutcome::DefaultLocation => "location keeps default behaviour",
            PhaseOutcome::ProducingSeason => "in a producing season",
            PhaseOutcome::Killed => "killed outside its growing seasons",
            PhaseOutcome::RolledBack { .. } => "growing outside its producing seasons",
        }
    }
}

impl std::fmt::Display for PhaseOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhaseOutcome::RolledBack { rollback } => write!(f, "{}: {}", self.as_str(), rollback),
            _ => write!(f, "{}", self.as_str()),
        }
    }
}

/// Applies the first matching catalog rule to crops the host hands over.
pub struct AdjustmentDispatcher<'a> {
    catalog: &'a RuleCatalog,
}

impl<'a> AdjustmentDispatcher<'a> {
    pub fn new(catalog: &'a RuleCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a RuleCatalog {
        self.catalog
    }

    /// Decide whether the host's daily wither check runs for `tile`.
    ///
    /// Only winter is intervened on: a crop whose rule lists winter as a
    /// growing season is advanced here instead and the host default skipped.
    pub fn daily_wither_check<T, R>(
        &self,
        tile: &mut T,
        location: &dyn GameLocation,
        position: TilePosition,
        rng: &mut R,
    ) -> Result<WitherOutcome>
    where
        T: SoilTile + ?Sized,
        R: Rng + ?Sized,
    {
        let Some(item_id) = tile.crop().map(|crop| crop.harvest_item_id().to_string()) else {
            return Ok(WitherOutcome::NoCrop);
        };

        tile.refresh_seasonal_sprites(location, position);

        let Some(rule) = self.catalog.find(&item_id) else {
            return Ok(WitherOutcome::NoRule);
        };

        if !rule.grow_seasons.contains(Season::Winter) {
            return Ok(WitherOutcome::DiesInWinter);
        }

        if !is_winter(location.season()) {
            return Ok(WitherOutcome::NotWinter);
        }

        let survival = winter::keep_alive(tile, location, position, rng)?;
        tracing::debug!(
            crop = rule.label(),
            location = location.name(),
            %position,
            water_reset = survival.water_reset(),
            "Kept crop alive through winter"
        );

        Ok(WitherOutcome::KeptAlive {
            retention: survival.retention,
        })
    }

    /// Adjust `crop` just before the host advances its growth for the day.
    ///
    /// Seasons are judged against the world calendar, not the location's
    /// own season; the wither check is the one that follows the location.
    pub fn phase_advance<C>(
        &self,
        crop: &mut C,
        state: WaterState,
        location: &dyn GameLocation,
    ) -> Result<PhaseOutcome>
    where
        C: CropRecord + ?Sized,
    {
        if !state.is_watered() {
            return Ok(PhaseOutcome::NotWatered);
        }

        let phase_count = effective_phase_count(crop.phase_days());

        let Some(rule) = self.catalog.find(crop.harvest_item_id()) else {
            return Ok(PhaseOutcome::NoRule);
        };

        if rule.default_behavior_locations.contains(location.name()) {
            return Ok(PhaseOutcome::DefaultLocation);
        }

        let season = location.world_season();
        if is_active_season(&rule.produce_seasons, season) {
            return Ok(PhaseOutcome::ProducingSeason);
        }

        if !is_active_season(&rule.grow_seasons, season) {
            crop.kill()?;
            tracing::debug!(
                crop = rule.label(),
                season,
                "Killed crop outside its growing seasons"
            );
            return Ok(PhaseOutcome::Killed);
        }

        let rollback = rollback::apply(crop, phase_count)?;
        if rollback != Rollback::NotNeeded {
            tracing::debug!(
                crop = rule.label(),
                season,
                phase = crop.current_phase(),
                day = crop.day_of_current_phase(),
                "Held crop back from its grown phase: {}",
                rollback
            );
        }

        Ok(PhaseOutcome::RolledBack { rollback })
    }
}
