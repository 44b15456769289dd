//! Concurrent paginated retrieval of recent commit bodies

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use log::debug;
use reqwest::header::LINK;
use tokio::sync::{Mutex, Semaphore};
use tokio::time::sleep;

use crate::collector::client::ApiClient;
use crate::collector::config::CollectorConfig;
use crate::collector::pagination;
use crate::collector::wire::CommitItem;
use crate::error::{AssessError, AssessResult};
use crate::types::Commit;

pub(crate) fn format_timestamp(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Fetches every commit in the lookback window.
///
/// Page 1 is fetched synchronously for both its items and its pagination
/// links. When a `next` relation exists, the remaining pages (`next`
/// through `last` inclusive) fan out under two composed gates: a bounded
/// concurrency gate and a pacing gate that serializes a short delay in
/// front of each dispatch. Completion order is not meaningful; the caller
/// re-sorts. Any failed page aborts the whole fetch, since a partial
/// commit window would corrupt interval and author statistics.
pub(crate) async fn fetch_recent(
    client: &ApiClient,
    uri: &str,
    since: DateTime<Utc>,
    config: &CollectorConfig,
) -> AssessResult<Vec<Commit>> {
    debug!("getting commits for {uri} since {since}");
    let query = [
        ("per_page", config.page_size.to_string()),
        ("since", format_timestamp(since)),
    ];
    let first_page = client.get(&format!("repos/{uri}/commits"), &query).await?;

    let links = pagination::parse_links(
        first_page
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok()),
    );
    let items: Vec<CommitItem> = first_page.json().await?;
    let mut commits = items
        .into_iter()
        .map(CommitItem::into_commit)
        .collect::<AssessResult<Vec<_>>>()?;
    debug!("got the first page of commits: {} items", commits.len());

    if let (Some(next), Some(last)) = (links.next, links.last) {
        let urls = pagination::page_urls(&next, &last);
        let gate = Arc::new(Semaphore::new(config.concurrency_limit));
        let pace = Arc::new(Mutex::new(()));
        let pacing_delay = config.pacing_delay;

        let tasks = urls.into_iter().map(|url| {
            let gate = Arc::clone(&gate);
            let pace = Arc::clone(&pace);
            async move {
                let _permit = gate
                    .acquire()
                    .await
                    .map_err(|_| AssessError::Api("concurrency gate closed".to_string()))?;
                {
                    // Stagger dispatches: one task at a time sits out the
                    // pacing delay before its request goes on the wire.
                    let _turn = pace.lock().await;
                    sleep(pacing_delay).await;
                }
                debug!("fetching commit page at {url}");
                let items: Vec<CommitItem> = client.get_url(url).await?.json().await?;
                items
                    .into_iter()
                    .map(CommitItem::into_commit)
                    .collect::<AssessResult<Vec<Commit>>>()
            }
        });

        let pages = futures::future::try_join_all(tasks).await?;
        commits.extend(pages.into_iter().flatten());
    }

    Ok(commits)
}
