pub mod rules;

use crate::types::ErrorMessage;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::IntoStaticStr,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    PermissionDenied,
    InvalidReference,
    DuplicateRecord,
    InternalError,
}

impl ErrorCode {
    pub fn user_message(self, operation_context: &str) -> String {
        rules::user_message(self, operation_context)
    }
}

/// A storage error translated into the API taxonomy.
///
/// `Display` yields only `user_message`; `original_message` is diagnostic text
/// for logs and must not be shown to end users.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{user_message}")]
pub struct ClassifiedError {
    pub code: ErrorCode,
    pub user_message: String,
    pub operation_context: String,
    pub original_message: String,
}

pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn classify_message(message: &str) -> ErrorCode {
        rules::match_rule(message)
    }

    /// Classifies without logging. A missing message classifies as `""`.
    pub fn classify<E: ErrorMessage + ?Sized>(raw: &E, operation_context: &str) -> ClassifiedError {
        let original_message = raw.message().unwrap_or_default();
        let code = Self::classify_message(original_message);
        ClassifiedError {
            code,
            user_message: code.user_message(operation_context),
            operation_context: operation_context.to_string(),
            original_message: original_message.to_string(),
        }
    }
}

/// Resolver entry point for a caught storage error.
///
/// Logs the attempted operation and raw message, then always returns `Err`.
/// There is no success path; callers write `return handle_error(&err, "creating tag");`.
pub fn handle_error<T, E: ErrorMessage + ?Sized>(
    raw: &E,
    operation_context: &str,
) -> Result<T, ClassifiedError> {
    tracing::error!(
        operation = operation_context,
        raw_error = raw.message().unwrap_or_default(),
        "storage operation failed"
    );
    let classified = ErrorClassifier::classify(raw, operation_context);
    tracing::debug!(code = %classified.code, "classified storage error");
    Err(classified)
}

pub trait ClassifyExt<T> {
    /// Routes the error side through [`handle_error`], leaving `Ok` untouched.
    fn classify_err(self, operation_context: &str) -> Result<T, ClassifiedError>;
}

impl<T, E: ErrorMessage> ClassifyExt<T> for Result<T, E> {
    fn classify_err(self, operation_context: &str) -> Result<T, ClassifiedError> {
        match self {
            Ok(value) => Ok(value),
            Err(raw) => handle_error(&raw, operation_context),
        }
    }
}
