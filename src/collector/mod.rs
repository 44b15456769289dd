//! Paginated REST collector
//!
//! Gathers repository metadata, pull-request/branch counts via page-count
//! probing, recent commit bodies via concurrent bounded pagination, and
//! tag-based releases. One failed sub-fetch fails the whole pass: no
//! partial assembly is ever handed downstream.

mod client;
mod commits;
mod config;
mod pagination;
mod releases;
mod wire;

pub use config::CollectorConfig;
pub use wire::RepoMetadata;

use chrono::{Duration, Utc};
use log::debug;
use reqwest::header::LINK;

use crate::error::{AssessError, AssessResult};
use crate::types::{Commit, Release, RepoRequest, Source};
use client::ApiClient;
use wire::RepoPayload;

/// Everything one collection pass produces, pre-aggregation.
#[derive(Debug)]
pub struct FetchedRepo {
    pub metadata: RepoMetadata,
    pub pull_request_count: i64,
    pub pull_request_count_open: i64,
    pub branch_count: i64,
    pub commits: Vec<Commit>,
    pub releases: Vec<Release>,
}

/// Fetches raw assessment inputs for one repository identity.
///
/// The platform is selected once here; identities referencing a platform
/// without a collector fail before any network I/O.
pub async fn fetch(request: &RepoRequest, config: &CollectorConfig) -> AssessResult<FetchedRepo> {
    match request.source {
        Source::Github => fetch_github(request, config).await,
        other => Err(AssessError::UnsupportedSource(other.to_string())),
    }
}

async fn fetch_github(request: &RepoRequest, config: &CollectorConfig) -> AssessResult<FetchedRepo> {
    debug!("fetching data from github for {}", request.uri());
    let client = ApiClient::new(config, request.token.as_deref())?;
    let uri = request.uri();
    let since = Utc::now() - Duration::days(config.recent_window_days);

    let payload: RepoPayload = client.get(&format!("repos/{uri}"), &[]).await?.json().await?;
    let metadata = payload.into_metadata()?;
    debug!("received repo metadata: {}", metadata.name);

    let pull_request_count_open =
        probe_count(&client, &format!("repos/{uri}/pulls"), Some(("state", "open"))).await?;
    let pull_request_count =
        probe_count(&client, &format!("repos/{uri}/pulls"), Some(("state", "all"))).await?;
    let branch_count = probe_count(&client, &format!("repos/{uri}/branches"), None).await?;

    let commits = commits::fetch_recent(&client, &uri, since, config).await?;
    let releases = releases::fetch_releases(&client, &uri, config).await?;

    Ok(FetchedRepo {
        metadata,
        pull_request_count,
        pull_request_count_open,
        branch_count,
        commits,
        releases,
    })
}

/// Counts a result set without downloading it.
///
/// A `per_page=1` request makes the `rel="last"` page number equal the item
/// count; only the pagination metadata and at most one item come back.
async fn probe_count(
    client: &ApiClient,
    path: &str,
    filter: Option<(&str, &str)>,
) -> AssessResult<i64> {
    let mut query = vec![("per_page", "1".to_string())];
    if let Some((key, value)) = filter {
        query.push((key, value.to_string()));
    }

    let response = client.get(path, &query).await?;
    let links = pagination::parse_links(
        response
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok()),
    );
    let items: Vec<serde_json::Value> = response.json().await?;

    let count = pagination::probed_count(&links, !items.is_empty());
    debug!("probed {path}: {count}");
    Ok(count)
}
