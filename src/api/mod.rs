pub mod client;
pub mod endpoints;
pub mod http;
pub mod models;

pub use client::RiotApiClient;
pub use http::{JsonFetcher, UreqFetcher};
