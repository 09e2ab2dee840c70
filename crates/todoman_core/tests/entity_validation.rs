use chrono::{DateTime, Duration, TimeZone, Utc};
use todoman_core::{
    AgileTodo, Board, Colour, Effort, Model, Note, Todo, ValidationError, Validator,
};

#[test]
fn named_todo_is_valid() {
    assert!(Todo::new("Write report").validate().is_ok());
}

#[test]
fn unnamed_todo_reports_name_message() {
    let err = Todo::new("").validate().unwrap_err();
    assert!(err.contains("name must not be empty"), "unexpected error: {err}");
    assert!(err.to_string().contains("name must not be empty"));
}

#[test]
fn validator_reports_only_failed_checks_in_order() {
    let mut validator = Validator::new();
    validator
        .check(false, "first failure")
        .check(true, "passes")
        .check(false, "second failure");

    assert!(validator.has_errors());
    assert_eq!(validator.error_count(), 2);

    let err = validator.all_valid().unwrap_err();
    assert_eq!(err.messages(), ["first failure", "second failure"]);
    assert_eq!(err.to_string(), "first failure; second failure");
}

#[test]
fn empty_pass_is_valid() {
    let validator = Validator::new();
    assert!(!validator.has_errors());
    assert_eq!(validator.error_count(), 0);
    assert!(validator.all_valid().is_ok());
}

#[test]
fn every_aggregate_validates_through_the_model_trait() {
    let when = Utc.with_ymd_and_hms(2022, 1, 1, 9, 0, 0).unwrap();
    let valid: Vec<Box<dyn Model>> = vec![
        Box::new(Board::new("Board", Colour::default())),
        Box::new(Todo::new("Todo")),
        Box::new(AgileTodo::new("Agile")),
        Box::new(Note::new("Note", "author")),
        Box::new(Effort::new(when, Duration::hours(1))),
    ];
    for model in &valid {
        assert!(model.validate().is_ok(), "expected valid: {model}");
    }

    let invalid: Vec<(Box<dyn Model>, &str)> = vec![
        (
            Box::new(Board::new("", Colour::default())),
            "The board name must not be empty",
        ),
        (Box::new(Todo::new("")), "The name must not be empty"),
        (Box::new(AgileTodo::new("")), "The name must not be empty"),
        (Box::new(Note::new("Note", "")), "The author must not be empty"),
        (
            Box::new(Effort::new(DateTime::<Utc>::default(), Duration::hours(1))),
            "The effort date is not defined",
        ),
    ];
    for (model, expected) in &invalid {
        let err: ValidationError = model.validate().unwrap_err();
        assert_eq!(err.messages(), [*expected]);
    }
}

#[test]
fn validation_does_not_mutate_entity() {
    let mut todo = Todo::new("");
    todo.description = "kept".to_string();
    let snapshot = todo.clone();

    let _ = todo.validate();
    let _ = todo.validate();
    assert_eq!(todo, snapshot);

    todo.name = "now named".to_string();
    assert!(todo.validate().is_ok());
}

#[test]
fn format_checks_accumulate_without_short_circuit() {
    let mut validator = Validator::new();
    validator
        .is_email("ops@example.com", "email")
        .is_domain("not a domain", "domain")
        .is_hostname("127.0.0.1", "hostname")
        .is_ip("10.0.0.300", "ip")
        .is_guid("2f1e6f2c-9c1b-4b7e-9d8a-3e1f0b6c7d5a", "guid")
        .is_base64("!!!", "base64")
        .is_alphanumeric("abc 123", "alphanumeric")
        .is_lowercase("lower", "lowercase")
        .is_uppercase("Mixed", "uppercase")
        .is_credit_card("4111111111111111", "card")
        .is_url("https://example.com", "url")
        .is_size("abc", 3, "size");

    let err = validator.all_valid().unwrap_err();
    assert_eq!(err.messages(), ["domain", "ip", "base64", "uppercase"]);
}
