//! Name and text validation applied before create/rename mutations.
//!
//! # Responsibility
//! - Enforce the 1-100 character bound on list names and todo text.
//! - Enforce store-wide list-name uniqueness against a caller snapshot.
//!
//! # Invariants
//! - Validation is pure; a failed check never mutates anything.
//! - Uniqueness is checked against the snapshot the caller passes in, so a
//!   stale snapshot can admit a duplicate under concurrent mutation. This is
//!   an accepted limitation of the validate-then-insert design.

use crate::model::list::TodoList;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Inclusive lower bound on name/text length in characters.
pub const NAME_MIN_CHARS: usize = 1;
/// Inclusive upper bound on name/text length in characters.
pub const NAME_MAX_CHARS: usize = 100;

/// Recoverable constraint violation on a create/rename input.
///
/// Variants are machine-distinguishable so handlers can pick user-facing
/// messaging without matching on free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Length in characters falls outside [1, 100].
    TooShortOrLong {
        /// Which input failed, e.g. "list name" or "to do".
        field: &'static str,
        /// Observed length in characters.
        chars: usize,
    },
    /// Another list already carries this exact name.
    DuplicateName { name: String },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooShortOrLong { field, .. } => {
                if *field == "to do" {
                    write!(f, "To do must be between 1 and 100 characters long.")
                } else {
                    write!(f, "List name must be between 1 and 100 characters long.")
                }
            }
            Self::DuplicateName { .. } => write!(f, "List name must be unique."),
        }
    }
}

impl Error for ValidationError {}

/// Checks a list name against length bounds and store-wide uniqueness.
///
/// `existing` is the caller's current snapshot of all lists. The comparison
/// is exact (case-sensitive).
pub fn validate_list_name(name: &str, existing: &[TodoList]) -> Result<(), ValidationError> {
    check_length("list name", name)?;

    if existing.iter().any(|list| list.name == name) {
        return Err(ValidationError::DuplicateName {
            name: name.to_string(),
        });
    }

    Ok(())
}

/// Checks todo text against length bounds. No uniqueness constraint applies.
pub fn validate_todo_text(text: &str) -> Result<(), ValidationError> {
    check_length("to do", text)
}

fn check_length(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let chars = value.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&chars) {
        return Err(ValidationError::TooShortOrLong { field, chars });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_list_name, validate_todo_text, ValidationError};
    use crate::model::list::TodoList;

    #[test]
    fn list_name_length_boundaries() {
        assert!(matches!(
            validate_list_name("", &[]),
            Err(ValidationError::TooShortOrLong { chars: 0, .. })
        ));
        assert!(validate_list_name("a", &[]).is_ok());
        assert!(validate_list_name(&"x".repeat(100), &[]).is_ok());
        assert!(matches!(
            validate_list_name(&"x".repeat(101), &[]),
            Err(ValidationError::TooShortOrLong { chars: 101, .. })
        ));
    }

    #[test]
    fn list_name_length_counts_characters_not_bytes() {
        // 100 multibyte characters must pass even though the byte length is larger.
        let name = "ä".repeat(100);
        assert!(validate_list_name(&name, &[]).is_ok());
    }

    #[test]
    fn duplicate_list_name_is_rejected_exact_match_only() {
        let existing = vec![TodoList::new(1, "Groceries")];

        let err = validate_list_name("Groceries", &existing).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateName { name } if name == "Groceries"));

        // Case-sensitive: a different casing is a different name.
        assert!(validate_list_name("groceries", &existing).is_ok());
    }

    #[test]
    fn todo_text_length_boundaries() {
        assert!(matches!(
            validate_todo_text(""),
            Err(ValidationError::TooShortOrLong { chars: 0, .. })
        ));
        assert!(validate_todo_text("milk").is_ok());
        assert!(validate_todo_text(&"x".repeat(100)).is_ok());
        assert!(validate_todo_text(&"x".repeat(101)).is_err());
    }

    #[test]
    fn error_messages_match_user_facing_wording() {
        let err = validate_list_name("", &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "List name must be between 1 and 100 characters long."
        );

        let err = validate_todo_text("").unwrap_err();
        assert_eq!(
            err.to_string(),
            "To do must be between 1 and 100 characters long."
        );

        let existing = vec![TodoList::new(1, "Chores")];
        let err = validate_list_name("Chores", &existing).unwrap_err();
        assert_eq!(err.to_string(), "List name must be unique.");
    }
}
