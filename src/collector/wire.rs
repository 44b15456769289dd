//! Wire types for the hosting platform's REST payloads
//!
//! Missing fields deserialize to sentinel defaults instead of failing, so a
//! sparse payload degrades the metric rather than the whole fetch.
//! Timestamps are parsed into absolute time here and nowhere else.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{AssessError, AssessResult};
use crate::types::{Commit, Release};

const EPOCH: &str = "1970-01-01T00:00:00Z";

fn default_id() -> i64 {
    -1
}

fn default_count() -> i64 {
    -1
}

fn default_name() -> String {
    "unknown".to_string()
}

fn default_date() -> String {
    EPOCH.to_string()
}

pub(crate) fn parse_timestamp(raw: &str) -> AssessResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AssessError::Api(format!("bad timestamp {raw:?} in API payload: {e}")))
}

/// `GET /repos/{owner}/{repo}`
#[derive(Debug, Deserialize)]
pub(crate) struct RepoPayload {
    #[serde(default = "default_id")]
    pub id: i64,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_date")]
    pub created_at: String,
    #[serde(default = "default_date")]
    pub updated_at: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default = "default_count")]
    pub open_issues_count: i64,
    #[serde(default = "default_count")]
    pub watchers_count: i64,
    #[serde(default = "default_count")]
    pub forks_count: i64,
    #[serde(default)]
    pub has_issues: bool,
}

/// Repository metadata with timestamps already parsed.
#[derive(Clone, Debug)]
pub struct RepoMetadata {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub language: Option<String>,
    pub open_issue_count: i64,
    pub watcher_count: i64,
    pub fork_count: i64,
    pub has_issues: bool,
}

impl RepoPayload {
    pub(crate) fn into_metadata(self) -> AssessResult<RepoMetadata> {
        Ok(RepoMetadata {
            id: self.id,
            name: self.name,
            created_at: parse_timestamp(&self.created_at)?,
            updated_at: parse_timestamp(&self.updated_at)?,
            language: self.language,
            open_issue_count: self.open_issues_count,
            watcher_count: self.watchers_count,
            fork_count: self.forks_count,
            has_issues: self.has_issues,
        })
    }
}

/// One element of `GET /repos/{owner}/{repo}/commits`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CommitItem {
    #[serde(default)]
    pub commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommitDetail {
    #[serde(default)]
    pub author: CommitAuthor,
    #[serde(default = "default_name")]
    pub message: String,
    #[serde(default)]
    pub comment_count: i64,
}

impl Default for CommitDetail {
    fn default() -> Self {
        Self {
            author: CommitAuthor::default(),
            message: default_name(),
            comment_count: 0,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommitAuthor {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_date")]
    pub date: String,
}

impl Default for CommitAuthor {
    fn default() -> Self {
        Self {
            name: default_name(),
            date: default_date(),
        }
    }
}

impl CommitItem {
    pub(crate) fn into_commit(self) -> AssessResult<Commit> {
        Ok(Commit {
            author_name: self.commit.author.name,
            author_date: parse_timestamp(&self.commit.author.date)?,
            message: self.commit.message,
            comment_count: self.commit.comment_count,
        })
    }
}

/// One element of `GET /repos/{owner}/{repo}/git/matching-refs/tags`
#[derive(Debug, Deserialize)]
pub(crate) struct TagRef {
    pub object: TagRefObject,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TagRefObject {
    pub sha: String,
}

/// `GET /repos/{owner}/{repo}/git/tags/{sha}`
#[derive(Debug, Deserialize)]
pub(crate) struct TagObject {
    pub tag: String,
    pub tagger: Tagger,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Tagger {
    pub date: String,
}

impl TagObject {
    pub(crate) fn into_release(self) -> AssessResult<Release> {
        Ok(Release {
            tag: self.tag,
            created_at: parse_timestamp(&self.tagger.date)?,
        })
    }
}
