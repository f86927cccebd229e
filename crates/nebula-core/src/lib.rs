pub mod commands;
pub mod derive;
pub mod engine;
pub mod ids;
pub mod model;
pub mod outcomes;
pub mod seed;
pub mod snapshot;
pub mod types;
pub mod view;

pub use commands::*;
pub use derive::*;
pub use engine::*;
pub use ids::*;
pub use model::*;
pub use outcomes::*;
pub use snapshot::*;
pub use types::*;
