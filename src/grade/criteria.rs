//! Per-criterion scoring tables
//!
//! Each criterion is a pure function from a raw metric to earned points,
//! expressed as a descending step table evaluated top-down: the first
//! matching threshold wins.

use crate::stats::SECONDS_IN_DAY;

pub(crate) const DAYS_SINCE_COMMIT_MAX: f64 = 200.0;
pub(crate) const DAYS_SINCE_CREATE_MAX: f64 = 125.0;
pub(crate) const AUTHOR_COUNT_RECENT_MAX: f64 = 150.0;
pub(crate) const PRIMARY_AUTHOR_RECENT_MAX: f64 = 100.0;
pub(crate) const COMMIT_INTERVAL_RECENT_MAX: f64 = 100.0;

/// Recency of the last commit: longer silence earns fewer points, with
/// nothing left beyond two years of quiet.
pub(crate) fn days_since_commit(days: i64) -> f64 {
    let fraction = if days > 365 * 2 {
        0.0
    } else if days > 365 {
        0.5
    } else if days > 182 {
        0.6
    } else if days > 91 {
        0.7
    } else if days > 60 {
        0.8
    } else if days > 30 {
        0.9
    } else {
        1.0
    };
    DAYS_SINCE_COMMIT_MAX * fraction
}

/// Repository age: inverted relative to recency. A repo under 90 days old
/// has not proven anything yet; one past four years has.
pub(crate) fn days_since_create(days: i64) -> f64 {
    let fraction = if days > 365 * 4 {
        1.0
    } else if days > 365 * 3 {
        0.9
    } else if days > 365 * 2 {
        0.8
    } else if days > 365 {
        0.7
    } else if days > 182 {
        0.6
    } else if days > 90 {
        0.5
    } else {
        0.0
    };
    DAYS_SINCE_CREATE_MAX * fraction
}

/// Distinct recent contributors, saturating above ten.
pub(crate) fn author_count_recent(authors: i64) -> f64 {
    let fraction = if authors > 9 {
        1.0
    } else if authors > 6 {
        0.9
    } else if authors > 3 {
        0.8
    } else if authors > 1 {
        0.7
    } else if authors > 0 {
        0.6
    } else {
        0.0
    };
    AUTHOR_COUNT_RECENT_MAX * fraction
}

/// Share of recent commits held by the most active author.
///
/// A moderate concentration reads as an engaged lead; a monopoly is not
/// rewarded proportionally. With no recent commits at all the criterion is
/// neutral (half points) so a repo caught at the edge of the recency
/// window is not doubly penalized.
pub(crate) fn primary_author_share(primary: i64, total: i64) -> f64 {
    if total == 0 {
        return PRIMARY_AUTHOR_RECENT_MAX * 0.5;
    }

    let share = primary as f64 / total as f64;
    let fraction = if share > 0.8 {
        0.8
    } else if share > 0.4 {
        1.0
    } else if share > 0.2 {
        0.9
    } else if share > 0.1 {
        0.8
    } else if share > 0.05 {
        0.7
    } else {
        0.5
    };
    PRIMARY_AUTHOR_RECENT_MAX * fraction
}

/// Regularity of recent commits, judged on the majority gap (mean plus one
/// standard deviation of inter-commit intervals, in seconds).
///
/// A majority of exactly zero means literally no recorded activity and
/// scores nothing. Near-zero majorities score at the top whether they come
/// from very frequent commits or from too few samples to measure; the
/// engine cannot tell those apart, which callers should keep in mind.
pub(crate) fn commit_interval_recent(majority_seconds: f64) -> f64 {
    if majority_seconds == 0.0 {
        return 0.0;
    }

    let majority_days = majority_seconds / SECONDS_IN_DAY;
    let fraction = if majority_days > 112.0 {
        0.2
    } else if majority_days > 84.0 {
        0.5
    } else if majority_days > 56.0 {
        0.6
    } else if majority_days > 28.0 {
        0.7
    } else if majority_days > 14.0 {
        0.8
    } else if majority_days > 7.0 {
        0.9
    } else {
        1.0
    };
    COMMIT_INTERVAL_RECENT_MAX * fraction
}
