//! Field Validation Rules
//!
//! Maps browser constraint failures to fixed messages and computes the
//! required-field progress percentage.

use crate::models::ValidityFlags;

pub const MSG_REQUIRED: &str = "This field is required.";
pub const MSG_TYPE_MISMATCH: &str = "Please enter a valid value for this field.";
pub const MSG_PATTERN_MISMATCH: &str = "Please match the requested format.";
pub const MSG_TOO_SHORT: &str = "This entry is too short.";
pub const MSG_TOO_LONG: &str = "This entry is too long.";
pub const MSG_INVALID: &str = "Please correct this field.";

/// Message for the first failing constraint, or `None` when the field is valid
pub fn validation_message(flags: ValidityFlags) -> Option<&'static str> {
    if flags.valid {
        return None;
    }
    let message = if flags.value_missing {
        MSG_REQUIRED
    } else if flags.type_mismatch {
        MSG_TYPE_MISMATCH
    } else if flags.pattern_mismatch {
        MSG_PATTERN_MISMATCH
    } else if flags.too_short {
        MSG_TOO_SHORT
    } else if flags.too_long {
        MSG_TOO_LONG
    } else {
        MSG_INVALID
    };
    Some(message)
}

/// Whether a required field counts as filled for the progress indicator
pub fn is_filled(input_type: &str, checked: bool, value: &str) -> bool {
    match input_type {
        "checkbox" | "radio" => checked,
        _ => !value.trim().is_empty(),
    }
}

/// Snapshot of one `[required]` control for progress counting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredField {
    pub input_type: String,
    pub name: Option<String>,
    pub checked: bool,
    pub value: String,
}

/// `(filled, total)` over required fields.
///
/// Radios sharing a name are one question: the group counts once and is
/// filled when any of its radios is checked.
pub fn required_progress(fields: &[RequiredField]) -> (usize, usize) {
    let mut groups: Vec<(&str, bool)> = Vec::new();
    let mut filled = 0;
    let mut total = 0;

    for field in fields {
        let done = is_filled(&field.input_type, field.checked, &field.value);
        match field.name.as_deref().filter(|_| field.input_type == "radio") {
            Some(name) => match groups.iter_mut().find(|(group, _)| *group == name) {
                Some((_, group_done)) => *group_done |= done,
                None => groups.push((name, done)),
            },
            None => {
                total += 1;
                filled += usize::from(done);
            }
        }
    }

    total += groups.len();
    filled += groups.iter().filter(|(_, done)| *done).count();
    (filled, total)
}

/// Rounded percentage of filled required fields (0 when there are none)
pub fn progress_percent(filled: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let ratio = filled.min(total) as f64 / total as f64;
    (ratio * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid() -> ValidityFlags {
        ValidityFlags { valid: false, ..Default::default() }
    }

    #[test]
    fn test_empty_required_field() {
        let flags = ValidityFlags { value_missing: true, ..invalid() };
        assert_eq!(validation_message(flags), Some(MSG_REQUIRED));
    }

    #[test]
    fn test_filled_field_clears_message() {
        assert_eq!(validation_message(ValidityFlags::default()), None);
    }

    #[test]
    fn test_first_failing_constraint_wins() {
        let flags = ValidityFlags { type_mismatch: true, too_short: true, ..invalid() };
        assert_eq!(validation_message(flags), Some(MSG_TYPE_MISMATCH));
        let flags = ValidityFlags { pattern_mismatch: true, too_long: true, ..invalid() };
        assert_eq!(validation_message(flags), Some(MSG_PATTERN_MISMATCH));
        let flags = ValidityFlags { too_long: true, ..invalid() };
        assert_eq!(validation_message(flags), Some(MSG_TOO_LONG));
    }

    #[test]
    fn test_unlisted_failure_gets_generic_message() {
        // e.g. rangeOverflow
        assert_eq!(validation_message(invalid()), Some(MSG_INVALID));
    }

    #[test]
    fn test_is_filled() {
        assert!(is_filled("checkbox", true, ""));
        assert!(!is_filled("checkbox", false, "on"));
        assert!(is_filled("text", false, "Ada"));
        assert!(!is_filled("email", false, "   "));
    }

    fn field(input_type: &str, name: Option<&str>, checked: bool, value: &str) -> RequiredField {
        RequiredField {
            input_type: input_type.to_string(),
            name: name.map(str::to_string),
            checked,
            value: value.to_string(),
        }
    }

    #[test]
    fn test_radio_group_counts_once() {
        let fields = vec![
            field("radio", Some("session"), false, "morning"),
            field("radio", Some("session"), true, "afternoon"),
            field("radio", Some("session"), false, "evening"),
            field("text", Some("name"), false, "Ada"),
        ];
        let (filled, total) = required_progress(&fields);
        assert_eq!((filled, total), (2, 2));
        assert_eq!(progress_percent(filled, total), 100);
    }

    #[test]
    fn test_unanswered_radio_group() {
        let fields = vec![
            field("radio", Some("level"), false, "beginner"),
            field("radio", Some("level"), false, "advanced"),
            field("email", Some("email"), false, ""),
            field("checkbox", Some("terms"), true, "on"),
        ];
        assert_eq!(required_progress(&fields), (1, 3));
    }

    #[test]
    fn test_unnamed_radios_count_alone() {
        let fields = vec![field("radio", None, true, "a"), field("radio", None, false, "b")];
        assert_eq!(required_progress(&fields), (1, 2));
        assert_eq!(required_progress(&[]), (0, 0));
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(2, 4), 50);
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(2, 3), 67);
        assert_eq!(progress_percent(3, 3), 100);
        assert_eq!(progress_percent(0, 0), 0);
    }
}
