//! Grading engine behavior against reference repository shapes.

use repograde::stats::SECONDS_IN_DAY;
use repograde::{
    CommitData, ContributorData, GitData, Grade, PopularityData, PullRequestData, Statistics,
    calculate_grade,
};

/// A ten-year-old repo with three commits a week for six months and a
/// large contributor pool.
fn base_git_data() -> GitData {
    GitData {
        pull_request: PullRequestData {
            count: 52 * 10, // one per week for 10 years
            count_open: 0,
        },
        commit_recent: CommitData {
            count: 6 * 4 * 3, // 3 per week for 6 months
            count_primary_author: 6 * 4 * 3,
            interval: Statistics {
                mean: SECONDS_IN_DAY * 5.0,
                standard_deviation: SECONDS_IN_DAY,
            },
        },
        contributor: ContributorData {
            days_since_create: 365 * 10,
            days_since_commit: 0,
            branch_count: 3,
            author_count_recent: 100,
        },
        popularity: PopularityData {
            watcher_count: 100,
            open_issue_count: 0,
            has_issues: true,
        },
    }
}

#[test]
fn perfect_repo_grades_a() {
    assert_eq!(
        calculate_grade(&base_git_data()).final_grade.letter_grade,
        Grade::A
    );
}

#[test]
fn healthy_repo_grades_a() {
    let mut data = base_git_data();
    data.contributor.days_since_create = 1200;
    data.contributor.days_since_commit = 15;
    data.contributor.author_count_recent = 10;
    data.commit_recent.count_primary_author = (6 * 4 * 3) / 2;
    data.commit_recent.interval = Statistics {
        mean: SECONDS_IN_DAY * 10.0,
        standard_deviation: SECONDS_IN_DAY,
    };

    assert_eq!(calculate_grade(&data).final_grade.letter_grade, Grade::A);
}

#[test]
fn slowing_repo_grades_b() {
    let mut data = base_git_data();
    data.contributor.days_since_create = 1000;
    data.contributor.days_since_commit = 45;
    data.contributor.author_count_recent = 7;
    data.commit_recent.count_primary_author = (6.0 * 4.0 * 3.0 * 0.30) as i64;
    data.commit_recent.interval = Statistics {
        mean: SECONDS_IN_DAY * 20.0,
        standard_deviation: SECONDS_IN_DAY * 5.0,
    };

    assert_eq!(calculate_grade(&data).final_grade.letter_grade, Grade::B);
}

#[test]
fn quiet_repo_grades_c() {
    let mut data = base_git_data();
    data.contributor.days_since_create = 400;
    data.contributor.days_since_commit = 75;
    data.contributor.author_count_recent = 4;
    data.commit_recent.count_primary_author = (6.0 * 4.0 * 3.0 * 0.15) as i64;
    data.commit_recent.interval = Statistics {
        mean: SECONDS_IN_DAY * 40.0,
        standard_deviation: SECONDS_IN_DAY * 10.0,
    };

    assert_eq!(calculate_grade(&data).final_grade.letter_grade, Grade::C);
}

#[test]
fn stalling_repo_grades_d() {
    let mut data = base_git_data();
    data.contributor.days_since_create = 200;
    data.contributor.days_since_commit = 100;
    data.contributor.author_count_recent = 2;
    data.commit_recent.count_primary_author = (6.0 * 4.0 * 3.0 * 0.08) as i64;
    data.commit_recent.interval = Statistics {
        mean: SECONDS_IN_DAY * 75.0,
        standard_deviation: SECONDS_IN_DAY * 10.0,
    };

    assert_eq!(calculate_grade(&data).final_grade.letter_grade, Grade::D);
}

#[test]
fn abandoned_repo_grades_f() {
    let mut data = base_git_data();
    data.contributor.days_since_create = 100;
    data.contributor.days_since_commit = 400;
    data.contributor.author_count_recent = 0;
    data.commit_recent.count_primary_author = (6.0 * 4.0 * 3.0 * 0.04) as i64;
    data.commit_recent.interval = Statistics {
        mean: SECONDS_IN_DAY * 100.0,
        standard_deviation: SECONDS_IN_DAY * 25.0,
    };

    assert_eq!(calculate_grade(&data).final_grade.letter_grade, Grade::F);
}

#[test]
fn grading_is_deterministic() {
    let data = base_git_data();
    assert_eq!(calculate_grade(&data), calculate_grade(&data));
}

#[test]
fn fresh_commit_earns_the_full_recency_budget() {
    let mut data = base_git_data();
    data.contributor.days_since_commit = 0;
    let grades = calculate_grade(&data);
    assert_eq!(grades.days_since_commit.points_earned, 200.0);
    assert_eq!(grades.days_since_commit.letter_grade, Grade::A);

    data.contributor.days_since_commit = 800;
    let grades = calculate_grade(&data);
    assert_eq!(grades.days_since_commit.points_earned, 0.0);
    assert_eq!(grades.days_since_commit.letter_grade, Grade::F);
}

#[test]
fn zero_recent_commits_scores_neutral_concentration() {
    let mut data = base_git_data();
    data.commit_recent.count = 0;
    data.commit_recent.count_primary_author = 0;

    let grades = calculate_grade(&data);
    assert_eq!(grades.commit_count_primary_author_recent.points_earned, 50.0);
    assert_eq!(grades.commit_count_primary_author_recent.points_max, 100.0);
}

#[test]
fn all_top_bucket_criteria_compose_to_a() {
    let mut data = base_git_data();
    data.contributor.days_since_commit = 10;
    data.contributor.days_since_create = 365 * 5;
    data.contributor.author_count_recent = 15;
    data.commit_recent.count = 100;
    data.commit_recent.count_primary_author = 50;
    data.commit_recent.interval = Statistics {
        mean: SECONDS_IN_DAY,
        standard_deviation: 0.0,
    };

    let grades = calculate_grade(&data);
    for grade in [
        &grades.days_since_commit,
        &grades.days_since_create,
        &grades.author_count_recent,
        &grades.commit_count_primary_author_recent,
        &grades.commit_interval_recent,
    ] {
        assert_eq!(grade.letter_grade, Grade::A);
    }
    assert_eq!(grades.final_grade.letter_grade, Grade::A);
}

#[test]
fn final_grade_sums_the_contributing_budgets() {
    let grades = calculate_grade(&base_git_data());
    let expected_max = grades.days_since_commit.points_max
        + grades.days_since_create.points_max
        + grades.author_count_recent.points_max
        + grades.commit_count_primary_author_recent.points_max
        + grades.commit_interval_recent.points_max;
    let expected_earned = grades.days_since_commit.points_earned
        + grades.days_since_create.points_earned
        + grades.author_count_recent.points_earned
        + grades.commit_count_primary_author_recent.points_earned
        + grades.commit_interval_recent.points_earned;

    assert_eq!(grades.final_grade.points_max, expected_max);
    assert_eq!(grades.final_grade.points_earned, expected_earned);
    assert_eq!(grades.final_grade.weight, expected_max / 100.0);
}
