//! Weighted grading engine
//!
//! Each metric is a "test" worth its own point budget, graded much like an
//! American report card (for better or worse). Independent sub-scores sum
//! into one composite letter grade.

mod criteria;

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::stats::SECONDS_IN_DAY;
use crate::types::GitData;

/// Letter grade buckets shared by every criterion and the composite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

impl Grade {
    fn from_score(score: f64) -> Self {
        if score > 0.9 {
            Grade::A
        } else if score > 0.8 {
            Grade::B
        } else if score > 0.7 {
            Grade::C
        } else if score > 0.6 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

/// One graded criterion with its point budget and the raw metric it was
/// graded on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestGrade {
    pub letter_grade: Grade,
    pub points_max: f64,
    pub points_earned: f64,
    pub weight: f64,
    pub raw_number: f64,
    pub unit: Option<String>,
}

impl TestGrade {
    fn new(points_max: f64, points_earned: f64, raw_number: f64, unit: Option<&str>) -> Self {
        Self {
            letter_grade: Grade::from_score(points_earned / points_max),
            points_max,
            points_earned,
            weight: points_max / 100.0,
            raw_number,
            unit: unit.map(str::to_string),
        }
    }
}

/// The full report card.
///
/// The "all history" twins of the recent criteria are a documented
/// extension point; the current rubric grades recent activity only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestGrades {
    pub days_since_commit: TestGrade,
    pub days_since_create: TestGrade,
    pub author_count_recent: TestGrade,
    pub commit_count_primary_author_recent: TestGrade,
    pub commit_interval_recent: TestGrade,
    pub final_grade: TestGrade,
}

/// Grades an assessment. Pure: identical input data grades identically.
#[must_use]
pub fn calculate_grade(data: &GitData) -> TestGrades {
    debug!("calculating grade");

    let days_since_commit = TestGrade::new(
        criteria::DAYS_SINCE_COMMIT_MAX,
        criteria::days_since_commit(data.contributor.days_since_commit),
        data.contributor.days_since_commit as f64,
        Some("days"),
    );

    let days_since_create = TestGrade::new(
        criteria::DAYS_SINCE_CREATE_MAX,
        criteria::days_since_create(data.contributor.days_since_create),
        data.contributor.days_since_create as f64,
        Some("days"),
    );

    let author_count_recent = TestGrade::new(
        criteria::AUTHOR_COUNT_RECENT_MAX,
        criteria::author_count_recent(data.contributor.author_count_recent),
        data.contributor.author_count_recent as f64,
        Some("authors"),
    );

    let commit_total = data.commit_recent.count;
    let commit_primary = data.commit_recent.count_primary_author;
    let primary_share = if commit_total > 0 {
        commit_primary as f64 / commit_total as f64
    } else {
        0.0
    };
    let commit_count_primary_author_recent = TestGrade::new(
        criteria::PRIMARY_AUTHOR_RECENT_MAX,
        criteria::primary_author_share(commit_primary, commit_total),
        primary_share,
        None,
    );

    let majority = data.commit_recent.interval.majority();
    let commit_interval_recent = TestGrade::new(
        criteria::COMMIT_INTERVAL_RECENT_MAX,
        criteria::commit_interval_recent(majority),
        majority / SECONDS_IN_DAY,
        Some("days"),
    );

    let contributing = [
        &days_since_commit,
        &days_since_create,
        &author_count_recent,
        &commit_count_primary_author_recent,
        &commit_interval_recent,
    ];
    let points_max: f64 = contributing.iter().map(|grade| grade.points_max).sum();
    let points_earned: f64 = contributing.iter().map(|grade| grade.points_earned).sum();
    let final_grade = TestGrade::new(points_max, points_earned, points_earned / points_max, None);

    debug!(
        "final grade {}: {points_earned}/{points_max}",
        final_grade.letter_grade
    );

    TestGrades {
        days_since_commit,
        days_since_create,
        author_count_recent,
        commit_count_primary_author_recent,
        commit_interval_recent,
        final_grade,
    }
}
