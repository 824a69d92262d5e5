pub mod champion_stats;
pub mod stats;
pub mod team;

pub use stats::{AggregateStats, StatLine};
pub use team::{MatchBreakdown, ParticipantLine, TeamBreakdown};
