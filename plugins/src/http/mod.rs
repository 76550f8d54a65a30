mod client;

pub use client::HttpRunClient;
