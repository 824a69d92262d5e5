pub mod fanout;
pub mod lookup;
pub mod summary;

pub use fanout::{fetch_history, MatchHistory, LOAD_MORE_INCREMENT};
pub use lookup::QueueKind;
pub use summary::{MatchSummary, Rune};

use crate::region::Region;

/// The resolved player a history request is scoped to.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerContext {
    pub puuid: String,
    pub region: Region,
}

impl PlayerContext {
    pub fn new(puuid: impl Into<String>, region: Region) -> Self {
        PlayerContext {
            puuid: puuid.into(),
            region,
        }
    }
}
