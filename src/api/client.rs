use crate::analysis::team::MatchBreakdown;
use crate::config::Config;
use crate::error::FetchError;
use crate::history::{MatchSummary, PlayerContext};
use crate::rate_limit::RequestThrottle;
use crate::region::{Region, RoutingRegion};
use serde::de::DeserializeOwned;

use super::endpoints;
use super::http::{JsonFetcher, UreqFetcher};
use super::models::*;

pub struct RiotApiClient<F = UreqFetcher> {
    fetcher: F,
    api_key: String,
    ddragon_version: String,
}

impl RiotApiClient<UreqFetcher> {
    pub fn new(config: &Config) -> Self {
        let throttle = RequestThrottle::new(config.requests_per_second, config.requests_per_two_minutes);
        Self::with_fetcher(UreqFetcher::new(throttle), config)
    }
}

impl<F: JsonFetcher> RiotApiClient<F> {
    pub fn with_fetcher(fetcher: F, config: &Config) -> Self {
        RiotApiClient {
            fetcher,
            api_key: config.api_key.clone(),
            ddragon_version: config.ddragon_version.clone(),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let document = self.fetcher.fetch(url)?;
        Ok(serde_json::from_value(document)?)
    }

    pub fn get_account(
        &self,
        routing: RoutingRegion,
        game_name: &str,
        tag_line: &str,
    ) -> Result<AccountDto, FetchError> {
        let url = endpoints::account_by_riot_id(routing, game_name, tag_line, &self.api_key)?;
        self.get(&url)
    }

    pub fn get_summoner(&self, player: &PlayerContext) -> Result<SummonerDto, FetchError> {
        let url = endpoints::summoner_by_puuid(&player.region, &player.puuid, &self.api_key)?;
        self.get(&url)
    }

    pub fn get_league_entries(&self, player: &PlayerContext) -> Result<Vec<LeagueEntryDto>, FetchError> {
        let url = endpoints::league_entries_by_puuid(&player.region, &player.puuid, &self.api_key)?;
        self.get(&url)
    }

    /// Match IDs in the API's order, most recent first.
    pub fn list_match_ids(
        &self,
        player: &PlayerContext,
        offset: usize,
        count: usize,
    ) -> Result<Vec<String>, FetchError> {
        let url = endpoints::match_ids_by_puuid(
            player.region.routing,
            &player.puuid,
            offset,
            count,
            &self.api_key,
        )?;
        self.get(&url)
    }

    pub fn fetch_match(&self, match_id: &str, player: &PlayerContext) -> Result<MatchSummary, FetchError> {
        let url = endpoints::match_by_id(player.region.routing, match_id, &self.api_key)?;
        let document = self.fetcher.fetch(&url)?;
        MatchSummary::from_document(document, &player.puuid)
    }

    /// Every participant of one match, grouped by team.
    pub fn fetch_match_breakdown(&self, match_id: &str, region: &Region) -> Result<MatchBreakdown, FetchError> {
        let url = endpoints::match_by_id(region.routing, match_id, &self.api_key)?;
        let dto: MatchDto = self.get(&url)?;
        Ok(MatchBreakdown::from_dto(dto))
    }

    pub fn get_champions(&self) -> Result<DataDragonChampions, FetchError> {
        let url = endpoints::data_dragon(&self.ddragon_version, "champion.json")?;
        self.get(&url)
    }

    pub fn get_items(&self) -> Result<DataDragonItems, FetchError> {
        let url = endpoints::data_dragon(&self.ddragon_version, "item.json")?;
        self.get(&url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{match_document, participant, FixtureFetcher, PLAYER};
    use serde_json::json;

    fn client(fetcher: FixtureFetcher) -> RiotApiClient<FixtureFetcher> {
        RiotApiClient::with_fetcher(fetcher, &Config::with_api_key("KEY"))
    }

    fn player() -> PlayerContext {
        PlayerContext::new(PLAYER, Region::resolve("Europe West").unwrap())
    }

    #[test]
    fn test_list_match_ids_keeps_api_order() {
        let api = client(FixtureFetcher::new().route("/ids?", Ok(json!(["EUW1_3", "EUW1_2", "EUW1_1"]))));
        let ids = api.list_match_ids(&player(), 0, 3).unwrap();
        assert_eq!(ids, vec!["EUW1_3", "EUW1_2", "EUW1_1"]);
        assert!(api.fetcher().requested()[0].starts_with("https://europe.api.riotgames.com/"));
    }

    #[test]
    fn test_list_match_ids_propagates_errors() {
        let api = client(FixtureFetcher::new().route("/ids?", Err(FetchError::RateLimited)));
        assert_eq!(api.list_match_ids(&player(), 0, 5).unwrap_err(), FetchError::RateLimited);
    }

    #[test]
    fn test_fetch_match_decodes_summary() {
        let doc = match_document("EUW1_9", 1_000, 440, vec![participant(PLAYER, "Jinx", false)]);
        let api = client(FixtureFetcher::new().route("matches/EUW1_9?", Ok(doc)));
        let summary = api.fetch_match("EUW1_9", &player()).unwrap();
        assert_eq!(summary.champion_played, "Jinx");
        assert!(!summary.is_win);
    }

    #[test]
    fn test_get_account() {
        let api = client(FixtureFetcher::new().route(
            "by-riot-id/Faker/KR1?",
            Ok(json!({"puuid": "abc", "gameName": "Faker", "tagLine": "KR1"})),
        ));
        let account = api.get_account(RoutingRegion::Asia, "Faker", "KR1").unwrap();
        assert_eq!(account.puuid, "abc");
    }

    #[test]
    fn test_champions_from_data_dragon() {
        let api = client(FixtureFetcher::new().route(
            "champion.json",
            Ok(json!({
                "version": "14.23.1",
                "data": {"Ahri": {"id": "Ahri", "name": "Ahri", "key": "103", "title": "the Nine-Tailed Fox"}}
            })),
        ));
        let champions = api.get_champions().unwrap();
        assert_eq!(champions.data["Ahri"].key, "103");
    }
}
