//! Unit tests for task domain types.

use crate::auth::UserId;
use crate::tasks::domain::{
    ParseTaskStatusError, Task, TaskDomainError, TaskId, TaskStatus, TaskTitle,
};
use mockable::{Clock, DefaultClock};
use rstest::rstest;

/// Helper to create a task with sensible defaults.
fn create_test_task(owner_id: UserId, raw_title: &str) -> Task {
    let clock = DefaultClock;
    let title = TaskTitle::new(raw_title).expect("valid title");
    Task::new(owner_id, title, None, None, &clock)
}

// ── TaskTitle validation ───────────────────────────────────────────

#[rstest]
#[case("Buy milk")]
#[case("a")]
#[case("Review PR #42")]
fn valid_titles_are_accepted(#[case] input: &str) {
    let title = TaskTitle::new(input);
    assert!(title.is_ok(), "expected '{input}' to be valid");
    assert_eq!(title.expect("valid title").as_str(), input);
}

#[rstest]
fn title_is_trimmed() {
    let title = TaskTitle::new("  Buy milk  ").expect("should accept after trim");
    assert_eq!(title.as_str(), "Buy milk");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn empty_or_whitespace_title_is_rejected(#[case] input: &str) {
    let result = TaskTitle::new(input);
    assert!(matches!(result, Err(TaskDomainError::EmptyTitle)));
}

#[rstest]
#[case(255, true)]
#[case(256, false)]
fn title_length_boundary(#[case] length: usize, #[case] expected_ok: bool) {
    let input = "a".repeat(length);
    let result = TaskTitle::new(&input);
    if expected_ok {
        assert!(result.is_ok(), "expected length {length} to be accepted");
    } else {
        assert!(
            matches!(result, Err(TaskDomainError::TitleTooLong(_))),
            "expected length {length} to be rejected"
        );
    }
}

// ── TaskStatus round-trip ──────────────────────────────────────────

#[rstest]
#[case(TaskStatus::New, "NEW")]
#[case(TaskStatus::InProgress, "IN_PROGRESS")]
#[case(TaskStatus::Complete, "COMPLETE")]
fn status_as_str_round_trip(#[case] status: TaskStatus, #[case] expected: &str) {
    assert_eq!(status.as_str(), expected);
    let parsed = TaskStatus::try_from(expected).expect("should parse");
    assert_eq!(parsed, status);
}

#[rstest]
#[case("new", TaskStatus::New)]
#[case(" in_progress ", TaskStatus::InProgress)]
#[case("Complete", TaskStatus::Complete)]
fn status_parse_normalizes_case_and_whitespace(#[case] input: &str, #[case] expected: TaskStatus) {
    let parsed = TaskStatus::try_from(input).expect("should parse after normalization");
    assert_eq!(parsed, expected);
}

#[rstest]
#[case("DONE")]
#[case("CANCELLED")]
#[case("")]
fn status_outside_closed_set_is_rejected(#[case] input: &str) {
    let result = TaskStatus::try_from(input);
    assert!(matches!(result, Err(ParseTaskStatusError(_))));
}

// ── TaskId parsing ─────────────────────────────────────────────────

#[rstest]
fn task_id_parse_round_trip() {
    let id = TaskId::new();
    let parsed = TaskId::parse(&id.to_string()).expect("should parse its own display form");
    assert_eq!(parsed, id);
}

#[rstest]
#[case("17")]
#[case("not-a-uuid")]
#[case("")]
fn malformed_task_id_is_rejected(#[case] input: &str) {
    assert!(TaskId::parse(input).is_err());
}

// ── Task construction ──────────────────────────────────────────────

#[rstest]
fn new_task_starts_at_new_with_forced_owner() {
    let owner_id = UserId::new();
    let task = create_test_task(owner_id, "Buy milk");

    assert_eq!(task.status(), TaskStatus::New);
    assert_eq!(task.owner_id(), owner_id);
    assert!(task.is_owned_by(owner_id));
    assert_eq!(task.created_at(), task.updated_at());
}

#[rstest]
fn new_tasks_get_distinct_identifiers() {
    let owner_id = UserId::new();
    let first = create_test_task(owner_id, "First");
    let second = create_test_task(owner_id, "Second");
    assert_ne!(first.id(), second.id());
}

// ── Field-scoped mutation ──────────────────────────────────────────

#[rstest]
fn update_details_replaces_only_editable_fields() {
    let clock = DefaultClock;
    let owner_id = UserId::new();
    let mut task = create_test_task(owner_id, "Buy milk");
    task.set_status(TaskStatus::InProgress, &clock);
    let id = task.id();

    let new_title = TaskTitle::new("Buy oat milk").expect("valid title");
    task.update_details(new_title, Some("semi-skimmed is fine".to_owned()), None, &clock);

    assert_eq!(task.title().as_str(), "Buy oat milk");
    assert_eq!(task.description(), Some("semi-skimmed is fine"));
    assert_eq!(task.due_date(), None);
    assert_eq!(task.status(), TaskStatus::InProgress);
    assert_eq!(task.id(), id);
    assert_eq!(task.owner_id(), owner_id);
}

#[rstest]
fn update_details_clears_absent_optional_fields() {
    let clock = DefaultClock;
    let owner_id = UserId::new();
    let title = TaskTitle::new("With extras").expect("valid title");
    let mut task = Task::new(
        owner_id,
        title,
        Some("old description".to_owned()),
        Some(clock.utc()),
        &clock,
    );

    let replacement = TaskTitle::new("Bare").expect("valid title");
    task.update_details(replacement, None, None, &clock);

    assert_eq!(task.description(), None);
    assert_eq!(task.due_date(), None);
}

#[rstest]
#[case(TaskStatus::New, TaskStatus::New)]
#[case(TaskStatus::New, TaskStatus::InProgress)]
#[case(TaskStatus::New, TaskStatus::Complete)]
#[case(TaskStatus::InProgress, TaskStatus::New)]
#[case(TaskStatus::InProgress, TaskStatus::InProgress)]
#[case(TaskStatus::InProgress, TaskStatus::Complete)]
#[case(TaskStatus::Complete, TaskStatus::New)]
#[case(TaskStatus::Complete, TaskStatus::InProgress)]
#[case(TaskStatus::Complete, TaskStatus::Complete)]
fn any_status_may_move_to_any_status(#[case] from: TaskStatus, #[case] to: TaskStatus) {
    let clock = DefaultClock;
    let mut task = create_test_task(UserId::new(), "Status grid");
    task.set_status(from, &clock);
    assert_eq!(task.status(), from);

    task.set_status(to, &clock);
    assert_eq!(task.status(), to);
}

#[rstest]
fn set_status_leaves_other_fields_untouched() {
    let clock = DefaultClock;
    let owner_id = UserId::new();
    let due = clock.utc();
    let title = TaskTitle::new("Water plants").expect("valid title");
    let mut task = Task::new(
        owner_id,
        title,
        Some("the ficus too".to_owned()),
        Some(due),
        &clock,
    );
    let id = task.id();

    task.set_status(TaskStatus::Complete, &clock);

    assert_eq!(task.status(), TaskStatus::Complete);
    assert_eq!(task.title().as_str(), "Water plants");
    assert_eq!(task.description(), Some("the ficus too"));
    assert_eq!(task.due_date(), Some(due));
    assert_eq!(task.id(), id);
    assert_eq!(task.owner_id(), owner_id);
}

#[rstest]
fn foreign_user_does_not_own_the_task() {
    let task = create_test_task(UserId::new(), "Mine");
    assert!(!task.is_owned_by(UserId::new()));
}
