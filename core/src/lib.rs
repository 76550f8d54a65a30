pub mod api;
pub mod config;
pub mod errors;
pub mod host;
pub mod mapping;
pub mod outcome;
pub mod remote;
pub mod sink;
pub mod workflow;

pub use workflow::SyncWorkflow;
