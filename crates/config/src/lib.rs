mod models;
mod defaults;
mod loader;
mod migration;
mod storage;
mod errors;

pub use models::*;
pub use storage::StorageConfig;
pub use errors::ConfigError;
