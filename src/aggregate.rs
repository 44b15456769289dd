//! Commit stream aggregation
//!
//! Concurrent page fetches do not preserve chronological order, so every
//! reduction here sorts first. The running per-author maximum is kept
//! during the walk itself; with a sorted input that makes the result
//! reproducible.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use log::debug;

use crate::stats;
use crate::types::{Commit, TimeData};

/// Reduces a commit stream to its distributional and ownership metrics.
///
/// Sorts most-recent-first, then walks once, tracking the total count,
/// per-author running counts (whose running maximum becomes the primary
/// author's commit count), and the gap in seconds between each adjacent
/// pair. Zero or one commit yields no gap samples; interval statistics
/// degrade to zero rather than erroring.
pub fn reduce(commits: &mut [Commit]) -> TimeData {
    commits.sort_by(|a, b| b.author_date.cmp(&a.author_date));

    let mut deltas: Vec<f64> = Vec::new();
    let mut previous_date: Option<DateTime<Utc>> = None;
    let mut commit_count = 0i64;
    let mut commits_by_author: HashMap<&str, i64> = HashMap::new();
    let mut primary_author_count = 0i64;

    for commit in commits.iter() {
        commit_count += 1;
        let commits_this_author = commits_by_author
            .entry(commit.author_name.as_str())
            .and_modify(|count| *count += 1)
            .or_insert(1);
        if *commits_this_author > primary_author_count {
            primary_author_count = *commits_this_author;
        }

        if let Some(previous) = previous_date {
            deltas.push((previous - commit.author_date).num_seconds() as f64);
        }
        previous_date = Some(commit.author_date);
    }

    let commit_interval = if deltas.is_empty() {
        stats::Statistics {
            mean: 0.0,
            standard_deviation: 0.0,
        }
    } else {
        stats::compute(&deltas)
    };

    debug!(
        "reduced {commit_count} commits across {} authors",
        commits_by_author.len()
    );

    TimeData {
        commit_count,
        commit_count_primary_author: primary_author_count,
        commit_interval,
        author_count: commits_by_author.len() as i64,
    }
}

/// Whole days between `now` and the most recent commit.
///
/// An empty recent window reads as "silent for longer than the lookback
/// window", one day beyond it, rather than undefined.
pub fn days_since_last_commit(commits: &[Commit], now: DateTime<Utc>, window_days: i64) -> i64 {
    commits
        .iter()
        .map(|commit| commit.author_date)
        .max()
        .map_or(window_days + 1, |latest| (now - latest).num_days())
}
