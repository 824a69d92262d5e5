//! Canned match-v5 documents and an in-memory fetcher for unit tests.

use crate::api::http::JsonFetcher;
use crate::error::FetchError;
use crate::history::{MatchSummary, QueueKind};
use chrono::DateTime;
use serde_json::{json, Value};
use std::sync::Mutex;

pub const PLAYER: &str = "player-puuid";

pub fn participant(puuid: &str, champion: &str, win: bool) -> Value {
    json!({
        "puuid": puuid,
        "championName": champion,
        "teamId": 100,
        "teamPosition": "MIDDLE",
        "individualPosition": "MIDDLE",
        "summonerName": "",
        "riotIdGameName": puuid,
        "kills": 7,
        "deaths": 2,
        "assists": 9,
        "champLevel": 16,
        "win": win,
        "item0": 3020,
        "item1": 6655,
        "item2": 3157,
        "item3": 0,
        "item4": 0,
        "item5": 0,
        "item6": 3364,
        "summoner1Id": 4,
        "summoner2Id": 14,
        "totalDamageDealtToChampions": 24000,
        "visionScore": 25,
        "goldEarned": 12000,
        "totalMinionsKilled": 180,
        "neutralMinionsKilled": 20,
        "perks": {
            "styles": [
                {"style": 8100, "selections": [{"perk": 8112}, {"perk": 8139}, {"perk": 8138}, {"perk": 8135}]},
                {"style": 8200, "selections": [{"perk": 8226}, {"perk": 8237}]}
            ]
        }
    })
}

pub fn match_document(match_id: &str, created_ms: i64, queue_id: u16, participants: Vec<Value>) -> Value {
    json!({
        "metadata": {"matchId": match_id, "dataVersion": "2"},
        "info": {
            "queueId": queue_id,
            "gameCreation": created_ms,
            "gameDuration": 1800,
            "participants": participants,
            "teams": [
                {"teamId": 100, "win": true, "objectives": {"baron": {"kills": 1}, "tower": {"kills": 9}, "dragon": {"kills": 3}}},
                {"teamId": 200, "win": false, "objectives": {"baron": {"kills": 0}, "tower": {"kills": 2}, "dragon": {"kills": 1}}}
            ]
        }
    })
}

/// A ranked-solo summary with round numbers; tests override what they need.
pub fn summary(champion: &str, is_win: bool) -> MatchSummary {
    MatchSummary {
        match_id: format!("EUW1_{}", champion),
        champion_played: champion.to_string(),
        kills: 5,
        deaths: 5,
        assists: 5,
        is_win,
        queue_id: 420,
        queue_kind: QueueKind::RankedSolo,
        created_at: DateTime::from_timestamp_millis(0).unwrap_or_default(),
        duration_seconds: 1800,
        items_held: Vec::new(),
        vision_items: Vec::new(),
        summoner_ability_names: ["Flash".to_string(), "Ignite".to_string()],
        primary_keystone_rune: None,
        secondary_tree_runes: Vec::new(),
        damage_to_champions: 20_000,
        vision_score: Some(20),
        creep_score: 200,
        gold_earned: 10_000,
        lane: "MIDDLE".to_string(),
    }
}

/// Routes a URL to the first canned response whose key it contains.
#[derive(Default)]
pub struct FixtureFetcher {
    routes: Vec<(String, Result<Value, FetchError>)>,
    requested: Mutex<Vec<String>>,
}

impl FixtureFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, key: &str, response: Result<Value, FetchError>) -> Self {
        self.routes.push((key.to_string(), response));
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl JsonFetcher for FixtureFetcher {
    fn fetch(&self, url: &str) -> Result<Value, FetchError> {
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(url.to_string());
        }
        self.routes
            .iter()
            .find(|(key, _)| url.contains(key.as_str()))
            .map(|(_, response)| response.clone())
            .unwrap_or_else(|| Err(FetchError::Status(404)))
    }
}
