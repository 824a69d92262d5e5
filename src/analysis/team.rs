use super::stats::{carry_score, performance_score, StatLine};
use crate::api::models::{MatchDto, ScoreboardParticipantDto, TeamDto};
use crate::history::lookup;
use tracing::debug;

/// One row of the full-match scoreboard.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantLine {
    pub name: String,
    pub champion_name: String,
    pub team_id: u16,
    pub position: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub champ_level: u32,
    pub damage_to_champions: u64,
    pub vision_score: u32,
    pub gold_earned: u64,
    pub creep_score: u32,
    pub items: Vec<u32>,
    pub trinket: Option<u32>,
}

impl From<ScoreboardParticipantDto> for ParticipantLine {
    fn from(dto: ScoreboardParticipantDto) -> Self {
        let name = if dto.riot_id_game_name.is_empty() {
            dto.summoner_name
        } else {
            dto.riot_id_game_name
        };
        let items = [dto.item0, dto.item1, dto.item2, dto.item3, dto.item4, dto.item5]
            .into_iter()
            .flatten()
            .filter(|&id| id != 0)
            .collect();

        ParticipantLine {
            name,
            champion_name: dto.champion_name,
            team_id: dto.team_id,
            position: dto.team_position,
            kills: dto.kills,
            deaths: dto.deaths,
            assists: dto.assists,
            champ_level: dto.champ_level,
            damage_to_champions: dto.total_damage_dealt_to_champions,
            vision_score: dto.vision_score,
            gold_earned: dto.gold_earned,
            creep_score: dto.total_minions_killed.saturating_add(dto.neutral_minions_killed),
            items,
            trinket: dto.item6.filter(|&id| id != 0),
        }
    }
}

impl StatLine for ParticipantLine {
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
        Some(self.vision_score)
    }
    fn gold_earned(&self) -> u64 {
        self.gold_earned
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamBreakdown {
    pub team_id: u16,
    pub win: bool,
    pub baron_kills: u32,
    pub tower_kills: u32,
    pub dragon_kills: u32,
    pub players: Vec<ParticipantLine>,
}

impl TeamBreakdown {
    pub fn total_performance(&self) -> f64 {
        self.players.iter().map(|p| performance_score(p)).sum()
    }

    /// Each player with their share of the team's performance.
    pub fn carry_scores(&self) -> Vec<(&ParticipantLine, f64)> {
        let total = self.total_performance();
        self.players.iter().map(|p| (p, carry_score(p, total))).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchBreakdown {
    pub match_id: String,
    pub queue_id: u16,
    pub queue_name: String,
    pub duration_seconds: i64,
    pub teams: Vec<TeamBreakdown>,
}

impl MatchBreakdown {
    /// Participants that do not decode are skipped; a match with fewer rows
    /// is still shown.
    pub fn from_dto(dto: MatchDto) -> Self {
        let match_id = dto.metadata.match_id;
        let info = dto.info;

        let lines: Vec<ParticipantLine> = info
            .participants
            .into_iter()
            .filter_map(|raw| match serde_json::from_value::<ScoreboardParticipantDto>(raw) {
                Ok(dto) => Some(dto.into()),
                Err(e) => {
                    debug!(%match_id, error = %e, "skipping participant");
                    None
                }
            })
            .collect();

        let mut team_ids: Vec<u16> = info.teams.iter().map(|t| t.team_id).collect();
        for line in &lines {
            if !team_ids.contains(&line.team_id) {
                team_ids.push(line.team_id);
            }
        }

        let teams = team_ids
            .into_iter()
            .map(|team_id| {
                let team = info.teams.iter().find(|t| t.team_id == team_id);
                build_team(team_id, team, &lines)
            })
            .collect();

        MatchBreakdown {
            match_id,
            queue_id: info.queue_id,
            queue_name: lookup::queue_name(info.queue_id)
                .unwrap_or("Unknown Game Mode")
                .to_string(),
            duration_seconds: info.game_duration,
            teams,
        }
    }
}

fn build_team(team_id: u16, team: Option<&TeamDto>, lines: &[ParticipantLine]) -> TeamBreakdown {
    let objectives = team.map(|t| t.objectives.clone()).unwrap_or_default();
    TeamBreakdown {
        team_id,
        win: team.map(|t| t.win).unwrap_or(false),
        baron_kills: objectives.baron.kills,
        tower_kills: objectives.tower.kills,
        dragon_kills: objectives.dragon.kills,
        players: lines.iter().filter(|l| l.team_id == team_id).cloned().collect(),
    }
}
