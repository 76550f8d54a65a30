pub mod factory;
pub mod http;

pub use factory::{build_client, build_sink, build_workflow};
pub use http::HttpRunClient;
