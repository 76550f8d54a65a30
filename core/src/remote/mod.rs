pub mod routes;
mod r#trait;
mod types;

pub use r#trait::RemoteRunClient;
pub use types::{AddRunRequest, CreatedRun, RunTest};
