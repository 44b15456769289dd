//! CLI front end for repository assessment.
//!
//! Parses the identity from arguments, runs the assessment pipeline, and
//! renders the report card. All user-facing error wording lives here.

use anyhow::Result;
use clap::Parser;
use repograde::{
    AssessError, Assessment, CollectorConfig, MemoryStore, RepoRequest, Source, TestGrade, assess,
};

#[derive(Parser, Debug)]
#[command(name = "repograde", version, about = "Grade the vitality of a remote repository")]
struct Cli {
    /// Repository owner (user or organization)
    owner: String,

    /// Repository name
    repo: String,

    /// Hosting platform
    #[arg(long, default_value = "github")]
    source: Source,

    /// Access token for authenticated API calls
    #[arg(long, env = "REPOGRADE_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Emit the full report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let request =
        RepoRequest::new(cli.source, cli.owner, cli.repo).with_token(cli.token.clone());
    let store = MemoryStore::default();
    let config = CollectorConfig::default();

    match assess(request, &store, &config).await {
        Ok(assessment) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&assessment.grades)?);
            } else {
                render(&assessment);
            }
            Ok(())
        }
        Err(error) => {
            eprintln!("{}", user_message(&error, cli.token.is_some()));
            std::process::exit(1);
        }
    }
}

fn user_message(error: &AssessError, had_token: bool) -> String {
    match error {
        AssessError::UnsupportedSource(_) => {
            "The URL provided is not supported, please provide a valid Github repository.".into()
        }
        AssessError::RateLimited => {
            "You've reached the rate limit for Github, please wait a while and try again.".into()
        }
        AssessError::AuthRequired if !had_token => {
            "Please provide a Github token to proceed.".into()
        }
        AssessError::AuthRequired => "Github rejected the provided token.".into(),
        AssessError::NotFound(_) => "The repo you requested does not exist.".into(),
        AssessError::Api(_) | AssessError::ClientSetup(_) => {
            "Unexpected error, please retry or open an issue.".into()
        }
    }
}

fn render(assessment: &Assessment) {
    let grades = &assessment.grades;
    println!(
        "{}/{} ({})",
        assessment.request.owner, assessment.request.repo, assessment.request.source
    );
    if assessment.from_cache {
        println!("(cached assessment)");
    }
    println!();

    render_row("Last commit", &grades.days_since_commit);
    render_row("Repository age", &grades.days_since_create);
    render_row("Recent authors", &grades.author_count_recent);
    render_row("Lead author share", &grades.commit_count_primary_author_recent);
    render_row("Commit cadence", &grades.commit_interval_recent);
    println!();
    println!(
        "Final grade: {}  ({:.0}/{:.0})",
        grades.final_grade.letter_grade,
        grades.final_grade.points_earned,
        grades.final_grade.points_max
    );

    if let Some(releases) = &assessment.releases {
        match releases.days_since_latest {
            Some(days) => println!(
                "Latest release: {} ({} total, {days} days ago)",
                releases.latest, releases.count
            ),
            None => println!("Latest release: {}", releases.latest),
        }
    }
}

fn render_row(label: &str, grade: &TestGrade) {
    let raw = match grade.unit.as_deref() {
        Some(unit) => format!("{:.0} {unit}", grade.raw_number),
        None => format!("{:.2}", grade.raw_number),
    };
    println!(
        "  {label:<20} {}  {:>6.1}/{:<6.1} {raw}",
        grade.letter_grade, grade.points_earned, grade.points_max
    );
}
