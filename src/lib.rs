//! League of Legends match history: fan-out fetching of match-v5 documents,
//! per-player summaries and derived statistics.

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod history;
pub mod rate_limit;
pub mod region;

#[cfg(test)]
pub(crate) mod testing;

pub use api::RiotApiClient;
pub use config::Config;
pub use error::{AppError, FetchError, UnsupportedRegionError};
pub use history::{fetch_history, MatchHistory, MatchSummary, PlayerContext};
pub use region::{Region, RoutingRegion};
