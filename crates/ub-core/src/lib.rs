pub mod config;
pub mod error;
pub mod id;
pub mod model;
pub mod store;

pub use config::{PaletteConfig, SessionConfig};
pub use error::StoreError;
pub use id::{ComponentId, IdGenerator, SequentialIds};
pub use model::*;
pub use store::{DocumentStore, ObserverId, StoreEvent};
