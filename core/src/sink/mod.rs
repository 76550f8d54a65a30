mod file;
mod r#trait;

pub use file::FileResultsSink;
pub use r#trait::ResultsSink;
