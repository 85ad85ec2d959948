pub mod catalog;
pub mod dispatcher;
pub mod rollback;
pub mod season;
pub mod winter;

pub use catalog::RuleCatalog;
pub use dispatcher::{AdjustmentDispatcher, PhaseOutcome, WitherOutcome};
pub use rollback::Rollback;
pub use winter::{Retention, WinterSurvival};
