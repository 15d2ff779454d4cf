use ticklist_core::{Task, TaskValidationError};
use uuid::Uuid;

#[test]
fn task_new_sets_defaults() {
    let task = Task::new("buy milk");

    assert!(!task.id.is_nil());
    assert_eq!(task.text, "buy milk");
    assert!(!task.done);
    assert!(task.created_at > 0);
}

#[test]
fn task_new_generates_distinct_ids() {
    let first = Task::new("one");
    let second = Task::new("two");
    assert_ne!(first.id, second.id);
}

#[test]
fn validate_accepts_well_formed_task() {
    let task = Task::new("walk dog");
    assert_eq!(task.validate(), Ok(()));
}

#[test]
fn validate_rejects_whitespace_only_text() {
    let mut task = Task::new("placeholder");
    task.text = "   ".to_string();
    assert_eq!(task.validate(), Err(TaskValidationError::EmptyText));
}

#[test]
fn validate_rejects_nil_id() {
    let mut task = Task::new("placeholder");
    task.id = Uuid::nil();
    assert_eq!(task.validate(), Err(TaskValidationError::NilId));
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let mut task = Task::new("ship release");
    task.id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    task.done = true;
    task.created_at = 1_700_000_000_000;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], "11111111-2222-4333-8444-555555555555");
    assert_eq!(json["text"], "ship release");
    assert_eq!(json["done"], true);
    assert_eq!(json["createdAt"], 1_700_000_000_000_i64);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}
