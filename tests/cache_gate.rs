//! Cache gate laws: freshness window, version ordering, upsert semantics.

use chrono::NaiveDate;
use repograde::cache::{self, MemoryStore};
use repograde::{
    CommitData, ContributorData, GitData, PopularityData, PullRequestData, RepoRequest, Source,
    Statistics,
};

fn request() -> RepoRequest {
    RepoRequest::new(Source::Github, "octocat", "hello-world")
}

fn sample_data(watchers: i64) -> GitData {
    GitData {
        pull_request: PullRequestData {
            count: 12,
            count_open: 3,
        },
        commit_recent: CommitData {
            count: 40,
            count_primary_author: 15,
            interval: Statistics {
                mean: 86_400.0,
                standard_deviation: 3_600.0,
            },
        },
        contributor: ContributorData {
            days_since_create: 900,
            days_since_commit: 4,
            branch_count: 5,
            author_count_recent: 6,
        },
        popularity: PopularityData {
            watcher_count: watchers,
            open_issue_count: 2,
            has_issues: true,
        },
    }
}

fn day(yyyy: i32, mm: u32, dd: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(yyyy, mm, dd).unwrap()
}

#[test]
fn store_then_lookup_round_trips() {
    let store = MemoryStore::default();
    let today = day(2026, 8, 1);
    cache::store(&store, "1.2.3", &request(), sample_data(100), today);

    let found = cache::lookup(&store, "1.2.3", &request(), today);
    assert_eq!(found, Some(sample_data(100)));
}

#[test]
fn unknown_identity_misses() {
    let store = MemoryStore::default();
    assert_eq!(
        cache::lookup(&store, "1.2.3", &request(), day(2026, 8, 1)),
        None
    );
}

#[test]
fn records_older_than_the_freshness_window_miss() {
    let store = MemoryStore::default();
    let stored_on = day(2026, 6, 1);
    cache::store(&store, "1.2.3", &request(), sample_data(100), stored_on);

    // 31 days later: stale even though the version matches.
    assert_eq!(
        cache::lookup(&store, "1.2.3", &request(), day(2026, 7, 2)),
        None
    );
    // 30 days later: still inside the window.
    assert!(cache::lookup(&store, "1.2.3", &request(), day(2026, 7, 1)).is_some());
}

#[test]
fn only_newer_running_software_forces_a_miss() {
    let store = MemoryStore::default();
    let today = day(2026, 8, 1);
    cache::store(&store, "1.2.3", &request(), sample_data(100), today);

    // An older running version still accepts the cached record.
    assert!(cache::lookup(&store, "1.2.2", &request(), today).is_some());
    assert!(cache::lookup(&store, "0.9.9", &request(), today).is_some());
    // Semantic ordering, not string ordering: 1.10.0 > 1.2.3.
    assert_eq!(cache::lookup(&store, "1.10.0", &request(), today), None);
    assert_eq!(cache::lookup(&store, "2.0.0", &request(), today), None);
}

#[test]
fn unparseable_stored_version_misses() {
    let store = MemoryStore::default();
    let today = day(2026, 8, 1);
    cache::store(&store, "not-a-version", &request(), sample_data(100), today);

    assert_eq!(cache::lookup(&store, "1.2.3", &request(), today), None);
}

#[test]
fn store_is_an_upsert_and_the_most_recent_write_wins() {
    let store = MemoryStore::default();
    let today = day(2026, 8, 1);
    cache::store(&store, "1.2.3", &request(), sample_data(100), today);
    cache::store(&store, "1.2.3", &request(), sample_data(999), today);

    let found = cache::lookup(&store, "1.2.3", &request(), today).unwrap();
    assert_eq!(found.popularity.watcher_count, 999);
}

#[test]
fn identities_do_not_interfere() {
    let store = MemoryStore::default();
    let today = day(2026, 8, 1);
    let other = RepoRequest::new(Source::Github, "octocat", "spoon-knife");
    cache::store(&store, "1.2.3", &request(), sample_data(100), today);
    cache::store(&store, "1.2.3", &other, sample_data(7), today);

    assert_eq!(
        cache::lookup(&store, "1.2.3", &request(), today)
            .unwrap()
            .popularity
            .watcher_count,
        100
    );
    assert_eq!(
        cache::lookup(&store, "1.2.3", &other, today)
            .unwrap()
            .popularity
            .watcher_count,
        7
    );
}
