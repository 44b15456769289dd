//! Identity and service-layer data model

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AssessError;
use crate::stats::Statistics;

/// Hosting platforms a repository identity can reference.
///
/// Selection happens once at the identity-resolution boundary; only
/// [`Source::Github`] currently has a collector behind it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Github,
    Bitbucket,
}

impl Source {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Github => "github",
            Source::Bitbucket => "bitbucket",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = AssessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "github" => Ok(Source::Github),
            "bitbucket" => Ok(Source::Bitbucket),
            other => Err(AssessError::UnsupportedSource(other.to_string())),
        }
    }
}

/// The incoming request requirements for grading a repo.
///
/// `(source, owner, repo)` is the natural cache key; the token rides along
/// for the collector and is never persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RepoRequest {
    pub source: Source,
    pub owner: String,
    pub repo: String,
    #[serde(skip_serializing, default)]
    pub token: Option<String>,
}

impl RepoRequest {
    pub fn new(source: Source, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            source,
            owner: owner.into(),
            repo: repo.into(),
            token: None,
        }
    }

    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// The `owner/repo` path segment used by every API route.
    #[must_use]
    pub fn uri(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// One commit as the collector hands it to the aggregator.
///
/// Timestamps are parsed to absolute time at the wire boundary; nothing
/// downstream re-parses strings.
#[derive(Clone, Debug, PartialEq)]
pub struct Commit {
    pub author_name: String,
    pub author_date: chrono::DateTime<chrono::Utc>,
    pub message: String,
    pub comment_count: i64,
}

/// An annotated tag treated as a release.
#[derive(Clone, Debug, PartialEq)]
pub struct Release {
    pub tag: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Reduction of an ordered commit stream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeData {
    pub commit_count: i64,
    pub commit_count_primary_author: i64,
    pub commit_interval: Statistics,
    pub author_count: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PullRequestData {
    pub count: i64,
    pub count_open: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommitData {
    pub count: i64,
    pub count_primary_author: i64,
    pub interval: Statistics,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContributorData {
    pub days_since_create: i64,
    pub days_since_commit: i64,
    pub branch_count: i64,
    pub author_count_recent: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PopularityData {
    pub watcher_count: i64,
    pub open_issue_count: i64,
    pub has_issues: bool,
}

/// Data used in the service layer for grade calculations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GitData {
    pub pull_request: PullRequestData,
    pub commit_recent: CommitData,
    pub contributor: ContributorData,
    pub popularity: PopularityData,
}

/// The unit that is cached: one assessment per identity, stamped with the
/// software version that produced it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub source: Source,
    pub owner: String,
    pub repo: String,
    pub version: String,
    pub last_updated: NaiveDate,
    pub data: GitData,
}
