use todo_core::{Priority, TodoInput, validate_title};

/// Fields of the "add todo" form and the title error currently shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoForm {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub title_error: Option<String>,
}

impl TodoForm {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Editing the title clears its error.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.title_error = None;
    }

    pub fn validate(&mut self) -> bool {
        self.title_error = validate_title(&self.title).err().map(|err| err.reason);
        self.title_error.is_none()
    }

    /// Returns the payload to send and resets the form, or keeps the form as
    /// is with `title_error` set when the title is rejected.
    pub fn submit(&mut self) -> Option<TodoInput> {
        if !self.validate() {
            return None;
        }

        let submitted = std::mem::take(self);

        Some(TodoInput {
            title: Some(submitted.title),
            description: Some(submitted.description),
            priority: Some(submitted.priority.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use todo_core::{TITLE_REQUIRED_MESSAGE, TITLE_TOO_SHORT_MESSAGE};

    #[rstest]
    #[case("", TITLE_REQUIRED_MESSAGE)]
    #[case("    ", TITLE_REQUIRED_MESSAGE)]
    #[case("ab", TITLE_TOO_SHORT_MESSAGE)]
    #[case(" ab ", TITLE_TOO_SHORT_MESSAGE)]
    fn rejects_short_titles(#[case] title: &str, #[case] message: &str) {
        let mut form = TodoForm::new(title);

        assert_eq!(form.submit(), None);
        assert_eq!(form.title_error.as_deref(), Some(message));
        assert_eq!(form.title, title);
    }

    #[test]
    fn submit_returns_the_input_and_resets() {
        let mut form = TodoForm::new("Buy milk")
            .with_description("2 litres")
            .with_priority(Priority::High);

        let input = form.submit().unwrap();

        assert_eq!(input.title.as_deref(), Some("Buy milk"));
        assert_eq!(input.description.as_deref(), Some("2 litres"));
        assert_eq!(input.priority.as_deref(), Some("high"));
        assert_eq!(form, TodoForm::default());
        assert_eq!(form.priority, Priority::Medium);
    }

    #[test]
    fn editing_the_title_clears_its_error() {
        let mut form = TodoForm::new("ab");
        assert!(!form.validate());

        form.set_title("abc");

        assert_eq!(form.title_error, None);
        assert!(form.validate());
    }
}
