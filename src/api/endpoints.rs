// URL builders for every upstream route.
use crate::error::FetchError;
use crate::region::{Region, RoutingRegion};
use url::Url;

pub const DATA_DRAGON_HOST: &str = "ddragon.leagueoflegends.com";

fn build(host: &str, segments: &[&str], query: &[(&str, &str)]) -> Result<String, FetchError> {
    let mut url = Url::parse(&format!("https://{}/", host))
        .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", host, e)))?;

    url.path_segments_mut()
        .map_err(|_| FetchError::InvalidUrl(host.to_string()))?
        .pop_if_empty()
        .extend(segments);

    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }

    Ok(url.into())
}

pub fn account_by_riot_id(
    routing: RoutingRegion,
    game_name: &str,
    tag_line: &str,
    api_key: &str,
) -> Result<String, FetchError> {
    build(
        &routing.host(),
        &["riot", "account", "v1", "accounts", "by-riot-id", game_name, tag_line],
        &[("api_key", api_key)],
    )
}

pub fn summoner_by_puuid(region: &Region, puuid: &str, api_key: &str) -> Result<String, FetchError> {
    build(
        &region.platform_host(),
        &["lol", "summoner", "v4", "summoners", "by-puuid", puuid],
        &[("api_key", api_key)],
    )
}

pub fn league_entries_by_puuid(
    region: &Region,
    puuid: &str,
    api_key: &str,
) -> Result<String, FetchError> {
    build(
        &region.platform_host(),
        &["lol", "league", "v4", "entries", "by-puuid", puuid],
        &[("api_key", api_key)],
    )
}

pub fn match_ids_by_puuid(
    routing: RoutingRegion,
    puuid: &str,
    start: usize,
    count: usize,
    api_key: &str,
) -> Result<String, FetchError> {
    let start = start.to_string();
    let count = count.to_string();
    build(
        &routing.host(),
        &["lol", "match", "v5", "matches", "by-puuid", puuid, "ids"],
        &[("start", &start), ("count", &count), ("api_key", api_key)],
    )
}

pub fn match_by_id(routing: RoutingRegion, match_id: &str, api_key: &str) -> Result<String, FetchError> {
    build(
        &routing.host(),
        &["lol", "match", "v5", "matches", match_id],
        &[("api_key", api_key)],
    )
}

pub fn data_dragon(version: &str, file: &str) -> Result<String, FetchError> {
    build(DATA_DRAGON_HOST, &["cdn", version, "data", "en_US", file], &[])
}
