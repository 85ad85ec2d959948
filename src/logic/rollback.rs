//! Holding a crop one step short of its grown phase.
//!
//! The host advances the phase cursor right after this runs, so every target
//! here is the last position from which that advance cannot reach the final
//! phase. Once a producing season arrives the dispatcher stops calling in and
//! the crop finishes on its own.

use crate::error::{AdjustmentError, Result};
use crate::host::CropRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rollback {
    /// Regrowing crop about to finish its pre-final phase; day reset to 0.
    HoldPreFinalPhase,
    /// Regrowing crop about to produce again; day pushed from 1 back to 2.
    DelayRegrowth,
    /// Non-regrowing crop about to become grown; moved back one phase.
    PreviousPhase { phase: i32 },
    /// Still mid-growth, nothing to hold back yet.
    NotNeeded,
}

impl Rollback {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rollback::HoldPreFinalPhase => "held at start of pre-final phase",
            Rollback::DelayRegrowth => "regrowth delayed by one day",
            Rollback::PreviousPhase { .. } => "moved back one phase",
            Rollback::NotNeeded => "no rollback needed",
        }
    }
}

impl std::fmt::Display for Rollback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Roll `crop` back from its grown phase, given its real phase count.
pub fn apply<C: CropRecord + ?Sized>(crop: &mut C, phase_count: usize) -> Result<Rollback> {
    let count = i32::try_from(phase_count).map_err(|_| {
        AdjustmentError::InvalidData(format!("phase count {} out of range", phase_count))
    })?;
    let phase = crop.current_phase();
    let day = crop.day_of_current_phase();

    if crop.regrows_after_harvest() {
        if phase == count - 1 {
            let pre_final_days = pre_final_phase_days(crop.phase_days(), phase_count)?;
            if day == pre_final_days - 1 {
                crop.set_day_of_current_phase(0);
                return Ok(Rollback::HoldPreFinalPhase);
            }
        } else if phase == count && day == 1 {
            crop.set_day_of_current_phase(2);
            return Ok(Rollback::DelayRegrowth);
        }
        return Ok(Rollback::NotNeeded);
    }

    // Day counters are left alone; the host normalises them on its next advance.
    if phase == count - 1 {
        crop.set_current_phase(count - 2);
        return Ok(Rollback::PreviousPhase { phase: count - 2 });
    }

    Ok(Rollback::NotNeeded)
}

fn pre_final_phase_days(phase_days: &[i32], phase_count: usize) -> Result<i32> {
    phase_count
        .checked_sub(2)
        .and_then(|index| phase_days.get(index))
        .copied()
        .ok_or_else(|| {
            AdjustmentError::InvalidData(format!(
                "crop has {} phases, too few to hold before its final phase",
                phase_count
            ))
        })
}
