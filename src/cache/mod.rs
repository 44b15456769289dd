//! Cache gate: freshness- and version-aware lookup over a store contract

mod store;

pub use store::{CacheKey, CacheStore, MemoryStore};

use chrono::NaiveDate;
use log::debug;
use semver::Version;

use crate::types::{AssessmentRecord, GitData, RepoRequest};

/// Maximum age of a cached record before it is treated as stale.
pub const FRESHNESS_WINDOW_DAYS: i64 = 30;

/// Looks up a previous assessment for `request`.
///
/// `None` means "must recompute": no record exists, the record is older
/// than the freshness window, or the running software is newer than the
/// version that produced it (semantic-version ordering, so schema and
/// weight changes take effect). An older running version still accepts the
/// cached record.
pub fn lookup(
    store: &dyn CacheStore,
    current_version: &str,
    request: &RepoRequest,
    today: NaiveDate,
) -> Option<GitData> {
    let key = (request.source, request.owner.clone(), request.repo.clone());
    let Some(record) = store.get(&key) else {
        debug!("cache miss for {}: no record", request.uri());
        return None;
    };

    let age_days = (today - record.last_updated).num_days();
    if age_days > FRESHNESS_WINDOW_DAYS {
        debug!("cache miss for {}: record is {age_days} days old", request.uri());
        return None;
    }

    let (Ok(current), Ok(stored)) = (
        Version::parse(current_version),
        Version::parse(&record.version),
    ) else {
        debug!("cache miss for {}: unparseable version stamp", request.uri());
        return None;
    };
    if current > stored {
        debug!(
            "cache miss for {}: record from {stored}, running {current}",
            request.uri()
        );
        return None;
    }

    debug!("cache hit for {}", request.uri());
    Some(record.data)
}

/// Writes a fresh assessment back through the store contract.
///
/// Upsert keyed by identity; replaces any existing record.
pub fn store(
    store: &dyn CacheStore,
    current_version: &str,
    request: &RepoRequest,
    data: GitData,
    today: NaiveDate,
) {
    store.put(AssessmentRecord {
        source: request.source,
        owner: request.owner.clone(),
        repo: request.repo.clone(),
        version: current_version.to_string(),
        last_updated: today,
        data,
    });
}
