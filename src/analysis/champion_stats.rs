use crate::history::MatchSummary;
use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct ChampionStats {
    pub name: String,
    pub games: usize,
    pub wins: usize,
}

impl ChampionStats {
    pub fn new(name: String) -> Self {
        ChampionStats {
            name,
            games: 0,
            wins: 0,
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            (self.wins as f64 / self.games as f64) * 100.0
        }
    }
}

/// Per-champion tallies over a player's held matches.
#[derive(Debug, Default)]
pub struct ChampionStatsTracker {
    stats: HashMap<String, ChampionStats>,
}

impl ChampionStatsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_matches(matches: &[MatchSummary]) -> Self {
        let mut tracker = Self::new();
        for m in matches {
            tracker.add_game(&m.champion_played, m.is_win);
        }
        tracker
    }

    pub fn add_game(&mut self, champion_name: &str, won: bool) {
        let entry = self
            .stats
            .entry(champion_name.to_string())
            .or_insert_with(|| ChampionStats::new(champion_name.to_string()));

        entry.games += 1;
        if won {
            entry.wins += 1;
        }
    }

    /// Champion with the most wins. Losses never count. Ties go to the
    /// alphabetically first name; None when nothing was won.
    pub fn most_wins(&self) -> Option<(String, usize)> {
        self.best_by(|s| s.wins)
    }

    /// Champion with the most games, same tie-break.
    pub fn most_played(&self) -> Option<(String, usize)> {
        self.best_by(|s| s.games)
    }

    fn best_by(&self, key: impl Fn(&ChampionStats) -> usize) -> Option<(String, usize)> {
        self.stats
            .values()
            .filter(|s| key(s) > 0)
            .max_by(|a, b| key(a).cmp(&key(b)).then_with(|| b.name.cmp(&a.name)))
            .map(|s| (s.name.clone(), key(s)))
    }

    /// Most played first, then by name.
    pub fn get_stats(&self) -> Vec<ChampionStats> {
        let mut stats: Vec<_> = self.stats.values().cloned().collect();
        stats.sort_by(|a, b| match b.games.cmp(&a.games) {
            Ordering::Equal => a.name.cmp(&b.name),
            other => other,
        });
        stats
    }
}
