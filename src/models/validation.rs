use serde::Serialize;

/// One failed field with a human-readable reason. Insert and partial-update
/// payloads are checked field by field and every failure is reported, not
/// just the first.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Required string fields must contain at least one non-whitespace character.
pub fn require(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, format!("{field} is required")));
    }
}

/// Skill percentages are bounded to 0..=100.
pub fn check_percentage(errors: &mut Vec<FieldError>, field: &'static str, value: i32) {
    if !(0..=100).contains(&value) {
        errors.push(FieldError::new(
            field,
            format!("{field} must be between 0 and 100"),
        ));
    }
}

/// Minimal email shape check, matching what the admin UI enforces.
pub fn check_email(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if !value.contains('@') {
        errors.push(FieldError::new(
            field,
            format!("{field} must be a valid email address"),
        ));
    }
}

pub fn finish(errors: Vec<FieldError>) -> Result<(), Vec<FieldError>> {
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_whitespace_only() {
        let mut errors = Vec::new();
        require(&mut errors, "name", "   ");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn percentage_bounds_are_inclusive() {
        let mut errors = Vec::new();
        check_percentage(&mut errors, "percentage", 0);
        check_percentage(&mut errors, "percentage", 100);
        assert!(errors.is_empty());

        check_percentage(&mut errors, "percentage", -1);
        check_percentage(&mut errors, "percentage", 101);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn email_needs_at_sign() {
        let mut errors = Vec::new();
        check_email(&mut errors, "email", "not-an-email");
        assert_eq!(errors.len(), 1);
        errors.clear();
        check_email(&mut errors, "email", "a@x.com");
        assert!(errors.is_empty());
    }

    #[test]
    fn finish_collects_all_failures() {
        let mut errors = Vec::new();
        require(&mut errors, "name", "");
        require(&mut errors, "icon", "");
        let err = finish(errors).unwrap_err();
        assert_eq!(err.len(), 2);
    }
}
