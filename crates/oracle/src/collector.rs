use std::{sync::Arc, time::Duration};

use tokio::time::sleep;
use tracing::{info, warn};

use crate::server::AppState;
use extractor::{FallbackMerger, HtmlSnapshotExtractor, RateSource};
use interface::{RateSnapshot, RawSnapshot};

/// One scrape: fetch, extract, merge. Never fails; an unreachable upstream or
/// an unparseable page produce the fallback snapshot.
pub async fn collect_once(
    source: &dyn RateSource,
    extractor: &HtmlSnapshotExtractor,
    merger: &FallbackMerger,
) -> RateSnapshot {
    let raw = match source.fetch_html().await {
        Ok(html) => match extractor.extract_html(&html) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("extraction error from {}: {}", source.url(), e);
                RawSnapshot::default()
            }
        },
        Err(e) => {
            warn!("upstream fetch error from {}: {}", source.url(), e);
            RawSnapshot::default()
        }
    };

    let groups = raw.group_count();
    let snapshot = merger.merge(raw);
    info!(
        "rates collected: {}/8 groups scraped, gold {}, silver {}, inr {}",
        groups, snapshot.gold.price, snapshot.silver.price, snapshot.inr.price
    );
    snapshot
}

pub fn start_collect_loop(
    source: Arc<dyn RateSource>,
    extractor: HtmlSnapshotExtractor,
    merger: FallbackMerger,
    state: Arc<AppState>,
    interval: Duration,
) {
    tokio::spawn(async move {
        info!(
            "collect loop started: {} every {}s using [{}]",
            source.url(),
            interval.as_secs(),
            extractor.strategy_names().join(", ")
        );
        loop {
            let snapshot = collect_once(source.as_ref(), &extractor, &merger).await;
            {
                let mut guard = state.snapshot.write().await;
                *guard = snapshot;
            }

            sleep(interval).await;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use extractor::UpstreamClient;
    use interface::RateError;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct Unreachable;

    #[async_trait]
    impl RateSource for Unreachable {
        fn url(&self) -> &str {
            "http://unreachable.invalid/LiveRates.html"
        }

        async fn fetch_html(&self) -> Result<String, RateError> {
            Err(RateError::Timeout(Duration::from_secs(10)))
        }
    }

    const MAIN_CELLS: &str = r#"<html><body><table><tr class="main_rows">
        <td>Gold 3040.12</td><td>Silver 33.20</td><td>INR 86.020</td>
        </tr></table></body></html>"#;

    async fn upstream(status: u16, body: &str) -> (MockServer, UpstreamClient) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&server)
            .await;
        let client = UpstreamClient::new(server.uri(), Duration::from_secs(5)).unwrap();
        (server, client)
    }

    #[tokio::test]
    async fn test_network_error_gives_fallback() {
        let snapshot = collect_once(
            &Unreachable,
            &HtmlSnapshotExtractor::default(),
            &FallbackMerger::default(),
        )
        .await;
        assert_eq!(snapshot, RateSnapshot::fallback());
    }

    #[tokio::test]
    async fn test_main_cells_are_merged_over_defaults() {
        let (_server, client) = upstream(200, MAIN_CELLS).await;
        let snapshot = collect_once(
            &client,
            &HtmlSnapshotExtractor::default(),
            &FallbackMerger::default(),
        )
        .await;

        assert_eq!(snapshot.gold.price, "3040.12");
        assert_eq!(snapshot.gold.high, "3047.35");
        assert_eq!(snapshot.gold_sell.premium, "1570");
        assert_eq!(snapshot.gold_sell.price, "89800");
        assert!(snapshot.is_complete());
    }

    #[tokio::test]
    async fn test_error_status_gives_fallback() {
        let (_server, client) = upstream(500, MAIN_CELLS).await;
        let snapshot = collect_once(
            &client,
            &HtmlSnapshotExtractor::default(),
            &FallbackMerger::default(),
        )
        .await;
        assert_eq!(snapshot, RateSnapshot::fallback());
    }

    #[tokio::test]
    async fn test_blank_page_gives_fallback() {
        let (_server, client) = upstream(200, "").await;
        let snapshot = collect_once(
            &client,
            &HtmlSnapshotExtractor::default(),
            &FallbackMerger::default(),
        )
        .await;
        assert_eq!(snapshot, RateSnapshot::fallback());
    }

    #[tokio::test]
    async fn test_loop_publishes_snapshot() {
        let (_server, client) = upstream(200, MAIN_CELLS).await;
        let state = Arc::new(AppState::new());

        start_collect_loop(
            Arc::new(client),
            HtmlSnapshotExtractor::default(),
            FallbackMerger::default(),
            state.clone(),
            Duration::from_secs(60),
        );

        let mut published = false;
        for _ in 0..50 {
            if state.snapshot.read().await.gold.price == "3040.12" {
                published = true;
                break;
            }
            sleep(Duration::from_millis(50)).await;
        }
        assert!(published, "collector never published a scraped snapshot");
    }
}
