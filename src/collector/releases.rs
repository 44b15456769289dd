//! Tag and release enumeration

use std::sync::Arc;

use log::debug;
use tokio::sync::Semaphore;

use crate::collector::client::ApiClient;
use crate::collector::config::CollectorConfig;
use crate::collector::wire::{TagObject, TagRef};
use crate::error::{AssessError, AssessResult};
use crate::types::Release;

/// Lists all tag refs, then resolves each annotated tag object for its
/// creation timestamp under a bounded fan-out (independent pool from the
/// commit pages). The result is sorted newest-first; a repository with no
/// tags yields an empty list, which callers render as "Unreleased".
pub(crate) async fn fetch_releases(
    client: &ApiClient,
    uri: &str,
    config: &CollectorConfig,
) -> AssessResult<Vec<Release>> {
    debug!("fetching releases for {uri}");
    let refs: Vec<TagRef> = client
        .get(&format!("repos/{uri}/git/matching-refs/tags"), &[])
        .await?
        .json()
        .await?;
    debug!("received {} tags", refs.len());

    let gate = Arc::new(Semaphore::new(config.concurrency_limit));
    let tasks = refs.into_iter().map(|tag_ref| {
        let gate = Arc::clone(&gate);
        async move {
            let _permit = gate
                .acquire()
                .await
                .map_err(|_| AssessError::Api("concurrency gate closed".to_string()))?;
            let tag: TagObject = client
                .get(&format!("repos/{uri}/git/tags/{}", tag_ref.object.sha), &[])
                .await?
                .json()
                .await?;
            tag.into_release()
        }
    });

    let mut releases = futures::future::try_join_all(tasks).await?;
    // Most recent release first, regardless of fan-out completion order.
    releases.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(releases)
}
