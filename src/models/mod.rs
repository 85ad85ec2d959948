pub mod adjustment;
pub mod crop;
pub mod fertilizer;
pub mod location;
pub mod season;
pub mod snapshot;

pub use adjustment::*;
pub use crop::*;
pub use fertilizer::*;
pub use location::*;
pub use season::*;
pub use snapshot::*;
