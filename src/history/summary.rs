use crate::api::models::{MatchDto, ParticipantDto, PerkStyleDto, PerksDto};
use crate::error::FetchError;
use crate::history::lookup::{self, QueueKind};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rune {
    pub id: u32,
    /// Empty when the ID is not in the rune table.
    pub name: String,
}

impl Rune {
    fn from_id(id: u32) -> Self {
        let name = match lookup::rune_name(id) {
            Some(name) => name.to_string(),
            None => {
                debug!(rune_id = id, "unmapped rune");
                String::new()
            }
        };
        Rune { id, name }
    }
}

/// One match as seen by one player.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSummary {
    pub match_id: String,
    pub champion_played: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub is_win: bool,
    pub queue_id: u16,
    pub queue_kind: QueueKind,
    pub created_at: DateTime<Utc>,
    pub duration_seconds: i64,
    /// Build slots in order, empty slots and vision items removed.
    pub items_held: Vec<u32>,
    pub vision_items: Vec<u32>,
    pub summoner_ability_names: [String; 2],
    pub primary_keystone_rune: Option<Rune>,
    pub secondary_tree_runes: Vec<Rune>,
    pub damage_to_champions: u64,
    /// None for ARAM or when the document leaves it out.
    pub vision_score: Option<u32>,
    pub creep_score: u32,
    pub gold_earned: u64,
    pub lane: String,
}

impl MatchSummary {
    /// Builds the summary for `player_id` from a raw match-v5 document.
    ///
    /// Fails without a partial result when the player is not a participant or
    /// any required field is missing or mistyped. Spell and rune names never
    /// fail the decode.
    pub fn from_document(document: Value, player_id: &str) -> Result<Self, FetchError> {
        let dto: MatchDto = serde_json::from_value(document)?;
        let match_id = dto.metadata.match_id;
        let info = dto.info;

        let raw = info
            .participants
            .into_iter()
            .find(|p| p.get("puuid").and_then(Value::as_str) == Some(player_id))
            .ok_or_else(|| FetchError::ParticipantNotFound {
                match_id: match_id.clone(),
                player_id: player_id.to_string(),
            })?;

        let participant: ParticipantDto = serde_json::from_value(raw).map_err(|e| {
            FetchError::Decode(format!("participant in {}: {}", match_id, e))
        })?;

        let created_at = DateTime::from_timestamp_millis(info.game_creation).ok_or_else(|| {
            FetchError::Decode(format!("gameCreation out of range: {}", info.game_creation))
        })?;

        let queue_kind = QueueKind::from_queue_id(info.queue_id);
        let vision_score = match queue_kind {
            QueueKind::Aram => None,
            _ => participant.vision_score,
        };

        let (items_held, vision_items) = split_items(&participant.items());
        let (primary_keystone_rune, secondary_tree_runes) = decode_runes(participant.perks.as_ref());

        Ok(MatchSummary {
            summoner_ability_names: [
                spell_name(participant.summoner1_id),
                spell_name(participant.summoner2_id),
            ],
            match_id,
            champion_played: participant.champion_name,
            kills: participant.kills,
            deaths: participant.deaths,
            assists: participant.assists,
            is_win: participant.win,
            queue_id: info.queue_id,
            queue_kind,
            created_at,
            duration_seconds: info.game_duration,
            items_held,
            vision_items,
            primary_keystone_rune,
            secondary_tree_runes,
            damage_to_champions: participant.total_damage_dealt_to_champions,
            vision_score,
            creep_score: participant
                .total_minions_killed
                .saturating_add(participant.neutral_minions_killed),
            gold_earned: participant.gold_earned,
            lane: participant.individual_position,
        })
    }
}

fn split_items(slots: &[u32]) -> (Vec<u32>, Vec<u32>) {
    slots
        .iter()
        .copied()
        .filter(|&id| id != 0)
        .partition(|&id| !lookup::is_vision_item(id))
}

fn spell_name(spell_id: u32) -> String {
    match lookup::summoner_spell_name(spell_id) {
        Some(name) => name.to_string(),
        None => {
            warn!(spell_id, "unknown summoner spell");
            String::new()
        }
    }
}

/// Keystone is the first selection of the first style; the secondary tree is
/// every selection of the second style. Anything short of two styles yields
/// no runes at all.
fn decode_runes(perks: Option<&Value>) -> (Option<Rune>, Vec<Rune>) {
    let perks: PerksDto = match perks.map(|v| serde_json::from_value::<PerksDto>(v.clone())) {
        Some(Ok(perks)) => perks,
        Some(Err(e)) => {
            debug!(error = %e, "malformed perks");
            return (None, Vec::new());
        }
        None => return (None, Vec::new()),
    };

    let [primary, secondary, ..] = perks.styles.as_slice() else {
        return (None, Vec::new());
    };

    let keystone = primary.selections.first().map(|s| Rune::from_id(s.perk));
    (keystone, tree_runes(secondary))
}

fn tree_runes(style: &PerkStyleDto) -> Vec<Rune> {
    style.selections.iter().map(|s| Rune::from_id(s.perk)).collect()
}
