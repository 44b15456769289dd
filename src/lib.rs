//! `repograde` - repository vitality scoring
//!
//! Assesses the health of a remote repository by collecting metrics from
//! its hosting platform's REST API and from recent commit history, then
//! converting those metrics into a weighted letter grade. The pipeline is
//! cache gate, then paginated collector, then commit stream aggregator,
//! then grading engine; [`assess`] wires them together.

pub mod aggregate;
pub mod assess;
pub mod cache;
pub mod collector;
pub mod error;
pub mod grade;
pub mod stats;
pub mod types;

/// Version stamp written into every cached record; a newer running version
/// invalidates older records so rubric changes take effect.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export the entry point and its result types
pub use assess::{Assessment, ReleaseSummary, assess};

// Re-export the cache contract
pub use cache::{CacheStore, MemoryStore};

// Re-export collector configuration and outputs
pub use collector::{CollectorConfig, FetchedRepo, RepoMetadata};

// Re-export error types
pub use error::{AssessError, AssessResult};

// Re-export grading types
pub use grade::{Grade, TestGrade, TestGrades, calculate_grade};

// Re-export the data model
pub use stats::Statistics;
pub use types::{
    AssessmentRecord, Commit, CommitData, ContributorData, GitData, PopularityData,
    PullRequestData, Release, RepoRequest, Source, TimeData,
};
