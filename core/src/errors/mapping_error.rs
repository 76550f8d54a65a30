// core/src/errors/mapping_error.rs
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MappingError {
    #[error("unknown test state '{state}' for test: {title}")]
    UnknownStatus { title: String, state: String },
}
