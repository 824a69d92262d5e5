use super::{MatchSummary, PlayerContext};
use crate::analysis::stats::AggregateStats;
use crate::api::{JsonFetcher, RiotApiClient, UreqFetcher};
use crate::error::FetchError;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, warn};

/// Page size for "load more".
pub const LOAD_MORE_INCREMENT: usize = 5;

/// Fetches every match concurrently, at most `max_in_flight` at a time, and
/// waits for all of them. Failed matches are logged and left out; the rest
/// come back newest first.
pub async fn fetch_history<F>(
    client: Arc<RiotApiClient<F>>,
    player: &PlayerContext,
    match_ids: Vec<String>,
    max_in_flight: usize,
) -> Vec<MatchSummary>
where
    F: JsonFetcher + 'static,
{
    if match_ids.is_empty() {
        return Vec::new();
    }
    let requested = match_ids.len();

    let outcomes: Vec<_> = stream::iter(match_ids)
        .map(|match_id| {
            let client = Arc::clone(&client);
            let player = player.clone();
            async move {
                let task_id = match_id.clone();
                let outcome =
                    tokio::task::spawn_blocking(move || client.fetch_match(&task_id, &player)).await;
                (match_id, outcome)
            }
        })
        .buffer_unordered(max_in_flight.max(1))
        .collect()
        .await;

    let mut summaries = Vec::with_capacity(outcomes.len());
    for (match_id, outcome) in outcomes {
        match outcome {
            Ok(Ok(summary)) => summaries.push(summary),
            Ok(Err(e)) => warn!(%match_id, error = %e, "dropping match"),
            Err(e) => warn!(%match_id, error = %e, "match task did not complete"),
        }
    }

    summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    debug!(requested, kept = summaries.len(), "history page joined");
    summaries
}

async fn list_match_ids<F>(
    client: &Arc<RiotApiClient<F>>,
    player: &PlayerContext,
    offset: usize,
    count: usize,
) -> Result<Vec<String>, FetchError>
where
    F: JsonFetcher + 'static,
{
    let client = Arc::clone(client);
    let player = player.clone();
    tokio::task::spawn_blocking(move || client.list_match_ids(&player, offset, count))
        .await
        .map_err(|e| FetchError::Network(format!("match id request did not complete: {}", e)))?
}

/// The match list held by one history view.
pub struct MatchHistory<F = UreqFetcher> {
    client: Arc<RiotApiClient<F>>,
    player: PlayerContext,
    max_in_flight: usize,
    matches: Vec<MatchSummary>,
}

impl<F: JsonFetcher + 'static> MatchHistory<F> {
    pub fn new(client: Arc<RiotApiClient<F>>, player: PlayerContext, max_in_flight: usize) -> Self {
        MatchHistory {
            client,
            player,
            max_in_flight,
            matches: Vec::new(),
        }
    }

    /// Replaces the held list with the newest `count` matches.
    pub async fn load(&mut self, count: usize) -> Result<usize, FetchError> {
        self.matches = self.fetch_page(0, count).await?;
        Ok(self.matches.len())
    }

    /// Appends the next page, starting after however many matches are held.
    /// Overlapping pages are not deduplicated.
    pub async fn load_more(&mut self, increment: usize) -> Result<usize, FetchError> {
        let page = self.fetch_page(self.matches.len(), increment).await?;
        let added = page.len();
        self.matches.extend(page);
        Ok(added)
    }

    async fn fetch_page(&self, offset: usize, count: usize) -> Result<Vec<MatchSummary>, FetchError> {
        let ids = list_match_ids(&self.client, &self.player, offset, count).await?;
        debug!(offset, count, found = ids.len(), "match ids listed");
        Ok(fetch_history(Arc::clone(&self.client), &self.player, ids, self.max_in_flight).await)
    }

    pub fn matches(&self) -> &[MatchSummary] {
        &self.matches
    }

    pub fn stats(&self) -> AggregateStats {
        AggregateStats::from_matches(&self.matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::region::Region;
    use crate::testing::{match_document, participant, FixtureFetcher, PLAYER};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Serves a won match for any ID after a short delay, tracking how many
    /// requests overlap.
    #[derive(Default)]
    struct InFlightFetcher {
        current: AtomicUsize,
        peak: AtomicUsize,
    }

    impl JsonFetcher for InFlightFetcher {
        fn fetch(&self, url: &str) -> Result<serde_json::Value, FetchError> {
            let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            std::thread::sleep(Duration::from_millis(50));
            self.current.fetch_sub(1, Ordering::SeqCst);

            let match_id = url
                .split("/matches/")
                .nth(1)
                .and_then(|rest| rest.split('?').next())
                .unwrap_or_default();
            Ok(won(match_id, 1_000, "Ahri"))
        }
    }

    fn player() -> PlayerContext {
        PlayerContext::new(PLAYER, Region::resolve("euw1").unwrap())
    }

    fn won(match_id: &str, created_ms: i64, champion: &str) -> serde_json::Value {
        match_document(match_id, created_ms, 420, vec![participant(PLAYER, champion, true)])
    }

    fn client(fetcher: FixtureFetcher) -> Arc<RiotApiClient<FixtureFetcher>> {
        Arc::new(RiotApiClient::with_fetcher(fetcher, &Config::with_api_key("KEY")))
    }

    #[tokio::test]
    async fn test_empty_ids_make_no_requests() {
        let api = client(FixtureFetcher::new());
        let summaries = fetch_history(Arc::clone(&api), &player(), Vec::new(), 5).await;
        assert!(summaries.is_empty());
        assert!(api.fetcher().requested().is_empty());
    }

    #[tokio::test]
    async fn test_failures_dropped_and_survivors_sorted() {
        let api = client(
            FixtureFetcher::new()
                .route("matches/EUW1_1?", Ok(won("EUW1_1", 1_000, "Ahri")))
                .route("matches/EUW1_2?", Err(FetchError::Network("reset".to_string())))
                .route(
                    "matches/EUW1_3?",
                    Ok(match_document("EUW1_3", 2_000, 420, vec![participant("other", "Lux", true)])),
                )
                .route("matches/EUW1_4?", Ok(won("EUW1_4", 3_000, "Zed")))
                .route("matches/EUW1_5?", Err(FetchError::EmptyBody)),
        );
        let ids: Vec<String> = (1..=5).map(|n| format!("EUW1_{}", n)).collect();

        let summaries = fetch_history(Arc::clone(&api), &player(), ids, 2).await;

        let order: Vec<_> = summaries.iter().map(|s| s.match_id.as_str()).collect();
        assert_eq!(order, vec!["EUW1_4", "EUW1_1"]);
        assert_eq!(api.fetcher().requested().len(), 5);
    }

    #[tokio::test]
    async fn test_in_flight_fetches_never_exceed_bound() {
        let api = Arc::new(RiotApiClient::with_fetcher(
            InFlightFetcher::default(),
            &Config::with_api_key("KEY"),
        ));
        let ids: Vec<String> = (0..9).map(|n| format!("EUW1_{}", n)).collect();

        let summaries = fetch_history(Arc::clone(&api), &player(), ids, 3).await;

        assert_eq!(summaries.len(), 9);
        assert_eq!(api.fetcher().peak.load(Ordering::SeqCst), 3);
        assert_eq!(api.fetcher().current.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_single_slot_runs_fetches_one_at_a_time() {
        let api = Arc::new(RiotApiClient::with_fetcher(
            InFlightFetcher::default(),
            &Config::with_api_key("KEY"),
        ));
        let ids: Vec<String> = (0..4).map(|n| format!("EUW1_{}", n)).collect();

        fetch_history(Arc::clone(&api), &player(), ids, 1).await;

        assert_eq!(api.fetcher().peak.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_result_sorted_descending_regardless_of_input_order() {
        let api = client(
            FixtureFetcher::new()
                .route("matches/A?", Ok(won("A", 10, "Ahri")))
                .route("matches/B?", Ok(won("B", 30, "Ahri")))
                .route("matches/C?", Ok(won("C", 20, "Ahri"))),
        );
        let ids = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let summaries = fetch_history(api, &player(), ids, 1).await;
        let created: Vec<_> = summaries.iter().map(|s| s.created_at.timestamp_millis()).collect();
        assert_eq!(created, vec![30, 20, 10]);
    }

    #[tokio::test]
    async fn test_load_then_load_more_appends_without_dedup() {
        let api = client(
            FixtureFetcher::new()
                .route("ids?start=0&", Ok(json!(["EUW1_3", "EUW1_2", "EUW1_1"])))
                .route("ids?start=2&", Ok(json!(["EUW1_1", "EUW1_0"])))
                .route("matches/EUW1_0?", Ok(won("EUW1_0", 500, "Garen")))
                .route("matches/EUW1_1?", Ok(won("EUW1_1", 1_000, "Ahri")))
                .route("matches/EUW1_2?", Err(FetchError::Status(404)))
                .route("matches/EUW1_3?", Ok(won("EUW1_3", 3_000, "Ahri"))),
        );
        let mut history = MatchHistory::new(Arc::clone(&api), player(), 5);

        assert_eq!(history.load(3).await.unwrap(), 2);
        // Offset follows what is held, not what was asked for.
        assert_eq!(history.load_more(LOAD_MORE_INCREMENT).await.unwrap(), 2);

        let ids: Vec<_> = history.matches().iter().map(|m| m.match_id.as_str()).collect();
        assert_eq!(ids, vec!["EUW1_3", "EUW1_1", "EUW1_1", "EUW1_0"]);
        assert!(api
            .fetcher()
            .requested()
            .iter()
            .any(|url| url.contains("ids?start=2&count=5")));

        let stats = history.stats();
        assert_eq!(stats.matches, 4);
        assert_eq!(stats.win_rate, Some(100.0));
    }

    #[tokio::test]
    async fn test_load_propagates_lister_errors() {
        let api = client(FixtureFetcher::new().route("/ids?", Err(FetchError::Status(403))));
        let mut history = MatchHistory::new(api, player(), 5);
        assert_eq!(history.load(10).await.unwrap_err(), FetchError::Status(403));
        assert!(history.matches().is_empty());
    }
}
