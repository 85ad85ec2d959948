//! Seasonal growth adjustments for crops in a farming simulation.
//!
//! Rules loaded from content packs say which seasons a crop may grow in and
//! which it may produce in. A host calls the [`hooks::CropAdjustmentHooks`]
//! entry points from its daily update, and the crop is kept alive, held back
//! from its grown phase, or killed accordingly.

pub mod config;
pub mod content;
pub mod error;
pub mod hooks;
pub mod host;
pub mod logic;
pub mod models;

pub use error::{AdjustmentError, Result};
pub use hooks::CropAdjustmentHooks;
pub use logic::{AdjustmentDispatcher, RuleCatalog};
