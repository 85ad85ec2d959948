pub mod loader;
pub mod pack;

pub use loader::{build_catalog, load_catalog, LoadReport, PackSummary};
pub use pack::{ContentPack, PackManifest};
