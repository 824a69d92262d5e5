use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

// Account V1 response
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub tag_line: String,
}

// Summoner V4 response
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    pub puuid: String,
    pub summoner_level: i64,
    #[serde(default)]
    pub profile_icon_id: i64,
}

// League V4 response
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
}

impl LeagueEntryDto {
    /// "Gold II (45 LP)"
    pub fn label(&self) -> String {
        format!("{} {} ({} LP)", capitalize(&self.tier), self.rank, self.league_points)
    }
}

pub const SOLO_QUEUE: &str = "RANKED_SOLO_5x5";

pub fn solo_rank(entries: &[LeagueEntryDto]) -> Option<&LeagueEntryDto> {
    entries.iter().find(|e| e.queue_type == SOLO_QUEUE)
}

pub fn solo_rank_label(entries: &[LeagueEntryDto]) -> String {
    solo_rank(entries)
        .map(LeagueEntryDto::label)
        .unwrap_or_else(|| "Unranked".to_string())
}

fn capitalize(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// Match V5 response.
// Participants stay untyped until the target is located so that one odd
// record from another player cannot fail the whole document.
#[derive(Debug, Deserialize)]
pub struct MatchDto {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadata {
    pub match_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    pub queue_id: u16,
    pub game_creation: i64,
    pub game_duration: i64,
    pub participants: Vec<Value>,
    #[serde(default)]
    pub teams: Vec<TeamDto>,
}

/// Fields the history view needs from the target participant. Every field
/// without a default is required.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub puuid: String,
    pub champion_name: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub win: bool,
    pub item0: u32,
    pub item1: u32,
    pub item2: u32,
    pub item3: u32,
    pub item4: u32,
    pub item5: u32,
    pub item6: u32,
    pub summoner1_id: u32,
    pub summoner2_id: u32,
    pub total_damage_dealt_to_champions: u64,
    pub individual_position: String,
    pub neutral_minions_killed: u32,
    pub total_minions_killed: u32,
    #[serde(default)]
    pub vision_score: Option<u32>,
    #[serde(default)]
    pub gold_earned: u64,
    /// Decoded leniently: a malformed perk tree never fails the match.
    #[serde(default)]
    pub perks: Option<Value>,
}

impl ParticipantDto {
    pub fn items(&self) -> [u32; 7] {
        [
            self.item0, self.item1, self.item2, self.item3, self.item4, self.item5, self.item6,
        ]
    }
}

/// Fields the full scoreboard needs for every participant.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ScoreboardParticipantDto {
    #[serde(default)]
    pub summoner_name: String,
    #[serde(default)]
    pub riot_id_game_name: String,
    pub champion_name: String,
    pub team_id: u16,
    pub team_position: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub champ_level: u32,
    pub total_damage_dealt_to_champions: u64,
    pub vision_score: u32,
    pub gold_earned: u64,
    pub total_minions_killed: u32,
    pub neutral_minions_killed: u32,
    #[serde(default)]
    pub item0: Option<u32>,
    #[serde(default)]
    pub item1: Option<u32>,
    #[serde(default)]
    pub item2: Option<u32>,
    #[serde(default)]
    pub item3: Option<u32>,
    #[serde(default)]
    pub item4: Option<u32>,
    #[serde(default)]
    pub item5: Option<u32>,
    #[serde(default)]
    pub item6: Option<u32>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PerksDto {
    #[serde(default)]
    pub styles: Vec<PerkStyleDto>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PerkStyleDto {
    #[serde(default)]
    pub style: u32,
    pub selections: Vec<PerkSelectionDto>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PerkSelectionDto {
    pub perk: u32,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub team_id: u16,
    #[serde(default)]
    pub win: bool,
    #[serde(default)]
    pub objectives: ObjectivesDto,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ObjectivesDto {
    #[serde(default)]
    pub baron: ObjectiveDto,
    #[serde(default)]
    pub tower: ObjectiveDto,
    #[serde(default)]
    pub dragon: ObjectiveDto,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ObjectiveDto {
    #[serde(default)]
    pub kills: u32,
}

// Data Dragon responses
#[derive(Debug, Deserialize)]
pub struct DataDragonChampions {
    pub version: String,
    pub data: HashMap<String, ChampionInfo>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChampionInfo {
    pub id: String,
    pub name: String,
    pub key: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct DataDragonItems {
    pub version: String,
    pub data: HashMap<String, ItemInfo>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ItemInfo {
    pub name: String,
    #[serde(default)]
    pub plaintext: String,
    #[serde(default)]
    pub gold: ItemGold,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ItemGold {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub purchasable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(queue: &str, tier: &str) -> LeagueEntryDto {
        LeagueEntryDto {
            queue_type: queue.to_string(),
            tier: tier.to_string(),
            rank: "II".to_string(),
            league_points: 45,
            wins: 10,
            losses: 8,
        }
    }

    #[test]
    fn test_solo_rank_label() {
        let entries = vec![entry("RANKED_FLEX_SR", "SILVER"), entry(SOLO_QUEUE, "GOLD")];
        assert_eq!(solo_rank_label(&entries), "Gold II (45 LP)");
    }

    #[test]
    fn test_unranked_without_solo_entry() {
        assert_eq!(solo_rank_label(&[entry("RANKED_FLEX_SR", "GOLD")]), "Unranked");
    }

    #[test]
    fn test_objectives_default_to_zero() {
        let team: TeamDto = serde_json::from_str(r#"{"teamId": 100, "win": true}"#).unwrap();
        assert_eq!(team.objectives.baron.kills, 0);
        assert!(team.win);
    }
}
