use crate::{NewTodo, Priority, TodoChanges, ValidationError, ValidationField, ValidationResult};
use serde::{Deserialize, Serialize};

pub const TITLE_MIN_LENGTH: usize = 3;

pub const TITLE_REQUIRED_MESSAGE: &str = "Title is required";

pub const TITLE_TOO_SHORT_MESSAGE: &str = "Title must be at least 3 characters";

/// Checks a title without altering it; surrounding whitespace is kept when stored.
///
/// Length is counted in UTF-16 code units, the unit browser clients measure
/// titles in, so a title accepted by the form is never rejected here.
pub fn validate_title(title: &str) -> ValidationResult {
    let trimmed = title.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::new(
            ValidationField::Title,
            TITLE_REQUIRED_MESSAGE,
        ));
    }

    if trimmed.encode_utf16().count() < TITLE_MIN_LENGTH {
        return Err(ValidationError::new(
            ValidationField::Title,
            TITLE_TOO_SHORT_MESSAGE,
        ));
    }

    Ok(())
}

/// Candidate fields for a new todo, as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
}

impl TodoInput {
    pub fn validate(self) -> ValidationResult<NewTodo> {
        let title = self.title.unwrap_or_default();
        validate_title(&title)?;

        let priority = self
            .priority
            .as_deref()
            .map(str::parse::<Priority>)
            .transpose()?
            .unwrap_or_default();

        Ok(NewTodo {
            title,
            description: self.description.unwrap_or_default(),
            priority,
        })
    }
}

/// Partial replacement of a stored todo. Absent fields are left alone,
/// `Some(String::new())` explicitly clears a description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn validate(self) -> ValidationResult<TodoChanges> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }

        let priority = self
            .priority
            .as_deref()
            .map(str::parse::<Priority>)
            .transpose()?;

        Ok(TodoChanges {
            title: self.title,
            description: self.description,
            priority,
            completed: self.completed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn input(title: &str) -> TodoInput {
        TodoInput {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[rstest]
    #[case("abc")]
    #[case("Buy milk")]
    #[case("  abc  ")]
    #[case("äöü")]
    #[case("👍👍")]
    fn accepts_titles_of_three_or_more_characters(#[case] title: &str) {
        assert_eq!(validate_title(title), Ok(()));
    }

    #[rstest]
    #[case("", TITLE_REQUIRED_MESSAGE)]
    #[case("   ", TITLE_REQUIRED_MESSAGE)]
    #[case("a", TITLE_TOO_SHORT_MESSAGE)]
    #[case("ab", TITLE_TOO_SHORT_MESSAGE)]
    #[case("  ab  ", TITLE_TOO_SHORT_MESSAGE)]
    #[case("👍", TITLE_TOO_SHORT_MESSAGE)]
    fn rejects_short_titles(#[case] title: &str, #[case] reason: &str) {
        let err = validate_title(title).unwrap_err();

        assert_eq!(err.field, ValidationField::Title);
        assert_eq!(err.reason, reason);
    }

    #[test]
    fn missing_title_is_required() {
        let err = TodoInput::default().validate().unwrap_err();

        assert_eq!(err.field, ValidationField::Title);
        assert!(err.reason.contains("required"));
    }

    #[test]
    fn new_todo_defaults() {
        let new_todo = input("Minimal Todo").validate().unwrap();

        assert_eq!(new_todo.priority, Priority::Medium);
        assert_eq!(new_todo.description, "");
    }

    #[test]
    fn title_is_kept_untrimmed() {
        let new_todo = input("  padded title  ").validate().unwrap();

        assert_eq!(new_todo.title, "  padded title  ");
    }

    #[test]
    fn rejects_unknown_priority_on_create() {
        let err = TodoInput {
            priority: Some("invalid".to_string()),
            ..input("Valid Title")
        }
        .validate()
        .unwrap_err();

        assert_eq!(err.field, ValidationField::Priority);
    }

    #[test]
    fn empty_patch_is_valid() {
        let changes = TodoPatch::default().validate().unwrap();

        assert!(changes.is_empty());
    }

    #[test]
    fn patch_validates_only_present_fields() {
        let changes = TodoPatch {
            priority: Some("high".to_string()),
            ..Default::default()
        }
        .validate()
        .unwrap();

        assert_eq!(changes.priority, Some(Priority::High));
        assert_eq!(changes.title, None);
    }

    #[rstest]
    #[case(Some("ab"), None, ValidationField::Title)]
    #[case(Some(""), None, ValidationField::Title)]
    #[case(None, Some("critical"), ValidationField::Priority)]
    fn patch_rejects_invalid_fields(
        #[case] title: Option<&str>,
        #[case] priority: Option<&str>,
        #[case] field: ValidationField,
    ) {
        let err = TodoPatch {
            title: title.map(str::to_string),
            priority: priority.map(str::to_string),
            ..Default::default()
        }
        .validate()
        .unwrap_err();

        assert_eq!(err.field, field);
    }

    #[test]
    fn patch_keeps_explicit_empty_description() {
        let changes = TodoPatch {
            description: Some(String::new()),
            ..Default::default()
        }
        .validate()
        .unwrap();

        assert_eq!(changes.description, Some(String::new()));
    }
}
