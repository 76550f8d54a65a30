pub mod config_error;
pub mod mapping_error;
pub mod persist_error;
pub mod remote_error;
pub mod sync_error;

pub use config_error::ConfigError;
pub use mapping_error::MappingError;
pub use persist_error::PersistError;
pub use remote_error::RemoteError;
pub use sync_error::{RemoteStep, SyncError};
