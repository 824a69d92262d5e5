use super::champion_stats::ChampionStatsTracker;
use crate::history::MatchSummary;

/// The numbers every performance formula reads.
pub trait StatLine {
    fn kills(&self) -> u32;
    fn deaths(&self) -> u32;
    fn assists(&self) -> u32;
    fn damage_to_champions(&self) -> u64;
    fn vision_score(&self) -> Option<u32>;
    fn gold_earned(&self) -> u64;
}

impl StatLine for MatchSummary {
    fn kills(&self) -> u32 {
        self.kills
    }
    fn deaths(&self) -> u32 {
        self.deaths
    }
    fn assists(&self) -> u32 {
        self.assists
    }
    fn damage_to_champions(&self) -> u64 {
        self.damage_to_champions
    }
    fn vision_score(&self) -> Option<u32> {
        self.vision_score
    }
    fn gold_earned(&self) -> u64 {
        self.gold_earned
    }
}

/// (kills + assists) / deaths, with deaths floored at 1.
pub fn kda(line: &impl StatLine) -> f64 {
    (line.kills() as f64 + line.assists() as f64) / line.deaths().max(1) as f64
}

/// Weighted composite used to rank players inside one match.
pub fn performance_score(line: &impl StatLine) -> f64 {
    kda(line)
        + line.damage_to_champions() as f64 * 0.001
        + line.vision_score().unwrap_or(0) as f64 * 0.1
        + line.gold_earned() as f64 * 0.001
}

/// Share of the team's summed performance, in percent.
pub fn carry_score(line: &impl StatLine, team_total: f64) -> f64 {
    if team_total > 0.0 {
        performance_score(line) / team_total * 100.0
    } else {
        0.0
    }
}

pub fn cs_per_minute(m: &MatchSummary) -> f64 {
    if m.duration_seconds <= 0 {
        return 0.0;
    }
    m.creep_score as f64 / (m.duration_seconds as f64 / 60.0)
}

/// Percentage of won matches; None for an empty slice.
pub fn win_rate(matches: &[MatchSummary]) -> Option<f64> {
    if matches.is_empty() {
        return None;
    }
    let wins = matches.iter().filter(|m| m.is_win).count();
    Some(100.0 * wins as f64 / matches.len() as f64)
}

pub fn most_winning_champion(matches: &[MatchSummary]) -> Option<(String, usize)> {
    ChampionStatsTracker::from_matches(matches).most_wins()
}

pub fn most_played_champion(matches: &[MatchSummary]) -> Option<(String, usize)> {
    ChampionStatsTracker::from_matches(matches).most_played()
}

/// "MM:SS"
pub fn format_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Recomputed from scratch on every change to the held matches.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateStats {
    pub matches: usize,
    pub wins: usize,
    pub win_rate: Option<f64>,
    pub most_winning_champion: Option<(String, usize)>,
    pub most_played_champion: Option<(String, usize)>,
}

impl AggregateStats {
    pub fn from_matches(matches: &[MatchSummary]) -> Self {
        let tracker = ChampionStatsTracker::from_matches(matches);
        AggregateStats {
            matches: matches.len(),
            wins: matches.iter().filter(|m| m.is_win).count(),
            win_rate: win_rate(matches),
            most_winning_champion: tracker.most_wins(),
            most_played_champion: tracker.most_played(),
        }
    }
}
