//! Assessment orchestration: the crate's single inbound operation

use chrono::Utc;
use log::info;

use crate::cache::{self, CacheStore};
use crate::collector::{self, CollectorConfig, FetchedRepo};
use crate::error::{AssessError, AssessResult};
use crate::grade::{self, TestGrades};
use crate::types::{
    CommitData, ContributorData, GitData, PopularityData, PullRequestData, RepoRequest, Source,
};
use crate::{aggregate, VERSION};

/// Release facts that accompany a fresh fetch. They are reported but never
/// cached, so a cache hit carries none.
#[derive(Clone, Debug)]
pub struct ReleaseSummary {
    pub latest: String,
    pub count: usize,
    pub days_since_latest: Option<i64>,
}

/// A graded assessment plus the data it was graded on.
#[derive(Clone, Debug)]
pub struct Assessment {
    pub request: RepoRequest,
    pub grades: TestGrades,
    pub data: GitData,
    pub releases: Option<ReleaseSummary>,
    pub from_cache: bool,
}

/// Assesses one repository identity.
///
/// Cache gate first; on a miss the collector, aggregator, and grading
/// engine run in sequence and the fresh record is written back through the
/// gate. Partial results are never cached or returned as if complete.
pub async fn assess(
    request: RepoRequest,
    store: &dyn CacheStore,
    config: &CollectorConfig,
) -> AssessResult<Assessment> {
    if request.source != Source::Github {
        return Err(AssessError::UnsupportedSource(request.source.to_string()));
    }

    let today = Utc::now().date_naive();

    if let Some(data) = cache::lookup(store, VERSION, &request, today) {
        info!("serving {} from cache", request.uri());
        let grades = grade::calculate_grade(&data);
        return Ok(Assessment {
            request,
            grades,
            data,
            releases: None,
            from_cache: true,
        });
    }

    info!("collecting fresh data for {}", request.uri());
    let fetched = collector::fetch(&request, config).await?;
    let (data, releases) = convert(fetched, config);

    cache::store(store, VERSION, &request, data.clone(), today);

    let grades = grade::calculate_grade(&data);
    Ok(Assessment {
        request,
        grades,
        data,
        releases: Some(releases),
        from_cache: false,
    })
}

/// Reduces a fetch into the service-layer data model.
fn convert(fetched: FetchedRepo, config: &CollectorConfig) -> (GitData, ReleaseSummary) {
    let FetchedRepo {
        metadata,
        pull_request_count,
        pull_request_count_open,
        branch_count,
        mut commits,
        releases,
    } = fetched;

    let now = Utc::now();
    let time_recent = aggregate::reduce(&mut commits);
    let days_since_commit =
        aggregate::days_since_last_commit(&commits, now, config.recent_window_days);
    let days_since_create = (now.date_naive() - metadata.created_at.date_naive()).num_days();

    let data = GitData {
        pull_request: PullRequestData {
            count: pull_request_count,
            count_open: pull_request_count_open,
        },
        commit_recent: CommitData {
            count: time_recent.commit_count,
            count_primary_author: time_recent.commit_count_primary_author,
            interval: time_recent.commit_interval,
        },
        contributor: ContributorData {
            days_since_create,
            days_since_commit,
            branch_count,
            author_count_recent: time_recent.author_count,
        },
        popularity: PopularityData {
            watcher_count: metadata.watcher_count,
            open_issue_count: metadata.open_issue_count,
            has_issues: metadata.has_issues,
        },
    };

    let summary = ReleaseSummary {
        latest: releases
            .first()
            .map_or_else(|| "Unreleased".to_string(), |release| release.tag.clone()),
        count: releases.len(),
        days_since_latest: releases
            .first()
            .map(|release| (now - release.created_at).num_days()),
    };

    (data, summary)
}
