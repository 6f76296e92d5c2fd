//! Tests for status derivation and project mutation.

use crate::auth::domain::UserId;
use crate::project::domain::{Project, ProjectDomainError, ProjectStatus, derive_status};
use crate::task::domain::TaskStatus::{self, Done, InProgress, NotStarted};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
#[case::no_tasks(&[], ProjectStatus::NotStarted)]
#[case::all_not_started(&[NotStarted, NotStarted], ProjectStatus::NotStarted)]
#[case::all_done(&[Done, Done, Done], ProjectStatus::Done)]
#[case::single_done(&[Done], ProjectStatus::Done)]
#[case::one_in_progress(&[NotStarted, InProgress, Done], ProjectStatus::InProgress)]
#[case::only_in_progress(&[InProgress], ProjectStatus::InProgress)]
#[case::not_started_and_done(&[NotStarted, Done], ProjectStatus::InProgress)]
fn derive_status_follows_task_statuses(
    #[case] statuses: &[TaskStatus],
    #[case] expected: ProjectStatus,
) {
    assert_eq!(derive_status(statuses.iter().copied()), expected);
}

#[rstest]
#[case("not_started", ProjectStatus::NotStarted)]
#[case("in-progress", ProjectStatus::InProgress)]
#[case(" DONE ", ProjectStatus::Done)]
fn project_status_parses_wire_values(#[case] raw: &str, #[case] expected: ProjectStatus) {
    assert_eq!(ProjectStatus::try_from(raw), Ok(expected));
}

#[rstest]
fn project_status_rejects_unknown_values() {
    let result = ProjectStatus::try_from("archived");
    assert!(result.is_err());
}

#[rstest]
fn new_project_starts_not_started_with_trimmed_name(clock: DefaultClock) {
    let project =
        Project::new(UserId::new(), "  Launch  ", "Q3 launch", &clock).expect("valid project");

    assert_eq!(project.name(), "Launch");
    assert_eq!(project.status(), ProjectStatus::NotStarted);
    assert_eq!(project.created_at(), project.updated_at());
}

#[rstest]
fn new_project_rejects_blank_name(clock: DefaultClock) {
    let result = Project::new(UserId::new(), "   ", "", &clock);
    assert_eq!(result, Err(ProjectDomainError::EmptyName));
}

#[rstest]
fn update_rejects_blank_name_and_keeps_existing(clock: DefaultClock) {
    let mut project = Project::new(UserId::new(), "Launch", "", &clock).expect("valid project");

    let result = project.update(Some(" "), Some("ignored"), &clock);

    assert_eq!(result, Err(ProjectDomainError::EmptyName));
    assert_eq!(project.name(), "Launch");
    assert_eq!(project.description(), "");
}

#[rstest]
fn apply_derived_status_reports_changes_only(clock: DefaultClock) {
    let mut project = Project::new(UserId::new(), "Launch", "", &clock).expect("valid project");

    assert!(!project.apply_derived_status(ProjectStatus::NotStarted, &clock));
    assert!(project.apply_derived_status(ProjectStatus::InProgress, &clock));
    assert_eq!(project.status(), ProjectStatus::InProgress);
}

#[rstest]
fn complete_forces_done(clock: DefaultClock) {
    let mut project = Project::new(UserId::new(), "Launch", "", &clock).expect("valid project");

    project.complete(&clock);

    assert_eq!(project.status(), ProjectStatus::Done);
    assert_eq!(project.status().badge_color(), "green");
}
