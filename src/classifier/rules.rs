use crate::classifier::ErrorCode;

/// Ordered substring rules. The first pattern contained in the message wins;
/// a message matching none of them is [`ErrorCode::InternalError`].
///
/// Matching is case-sensitive containment against Postgres' own wording, so a
/// change in driver or server message text silently falls through to
/// `InternalError`.
pub const CLASSIFICATION_RULES: &[(&str, ErrorCode)] = &[
    ("row-level security policy", ErrorCode::PermissionDenied),
    ("violates foreign key constraint", ErrorCode::InvalidReference),
    ("violates unique constraint", ErrorCode::DuplicateRecord),
];

pub fn match_rule(message: &str) -> ErrorCode {
    CLASSIFICATION_RULES
        .iter()
        .find(|(pattern, _)| message.contains(*pattern))
        .map_or(ErrorCode::InternalError, |(_, code)| *code)
}

/// The substring that selects `code`, or `None` for the fallback code.
pub fn pattern_for(code: ErrorCode) -> Option<&'static str> {
    CLASSIFICATION_RULES
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(pattern, _)| *pattern)
}

/// User-facing text for `code`. Only the permission and fallback messages
/// mention the attempted operation.
pub fn user_message(code: ErrorCode, operation_context: &str) -> String {
    match code {
        ErrorCode::PermissionDenied => format!(
            "Permission denied: you don't have access to {operation_context}. Please check your authentication or permissions."
        ),
        ErrorCode::InvalidReference => {
            "Invalid reference: one of the referenced records does not exist.".to_string()
        }
        ErrorCode::DuplicateRecord => {
            "Duplicate record: a record with the same unique field already exists.".to_string()
        }
        ErrorCode::InternalError => format!("An error occurred while {operation_context}."),
    }
}
