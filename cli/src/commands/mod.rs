pub mod cli;
pub mod push;
pub mod sync;
