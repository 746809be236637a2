use std::convert::Infallible;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::classifier::{ClassifiedError, ErrorCode, handle_error, rules};
use crate::error::Error;
use crate::types::RawError;

/// One entry of a GraphQL response's `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    pub extensions: GraphqlErrorExtensions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlErrorExtensions {
    pub code: ErrorCode,
    /// Raw storage diagnostic for log consumers. Not for end-user display.
    pub original_error: String,
}

impl GraphqlError {
    pub fn to_json_value(&self) -> Result<serde_json::Value, Error> {
        Ok(serde_json::to_value(self)?)
    }
}

impl ClassifiedError {
    pub fn to_graphql_error(&self) -> GraphqlError {
        self.clone().into()
    }
}

impl From<ClassifiedError> for GraphqlError {
    fn from(err: ClassifiedError) -> Self {
        Self {
            message: err.user_message,
            extensions: GraphqlErrorExtensions {
                code: err.code,
                original_error: err.original_message,
            },
        }
    }
}

/// Classifies a serialized storage error straight into its GraphQL payload.
///
/// Input that is not a JSON object classifies as an error without a message.
pub fn classify_json(raw_json: &str, operation_context: &str) -> GraphqlError {
    let raw = RawError::from_json(raw_json).unwrap_or_default();
    let Err(classified) = handle_error::<Infallible, _>(&raw, operation_context);
    classified.into()
}

/// One row of the code catalog; `matched_substring` is `None` for the fallback code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorCodeInfo {
    pub code: ErrorCode,
    pub matched_substring: Option<&'static str>,
}

/// Every code in rule order, ending with the fallback.
pub fn error_code_catalog() -> Vec<ErrorCodeInfo> {
    ErrorCode::iter()
        .map(|code| ErrorCodeInfo {
            code,
            matched_substring: rules::pattern_for(code),
        })
        .collect()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;
    use crate::classifier::ErrorClassifier;
    use crate::types::RawError;

    #[test]
    fn payload_shape_matches_graphql_error_extensions() {
        let raw = RawError::new("duplicate key value violates unique constraint \"tags_name_key\"");
        let payload = ErrorClassifier::classify(&raw, "creating tag")
            .to_graphql_error()
            .to_json_value()
            .unwrap();
        assert_eq!(
            payload,
            serde_json::json!({
                "message": "Duplicate record: a record with the same unique field already exists.",
                "extensions": {
                    "code": "DUPLICATE_RECORD",
                    "originalError": "duplicate key value violates unique constraint \"tags_name_key\"",
                }
            })
        );
    }

    #[test]
    fn owned_conversion_matches_borrowed() {
        let classified = ErrorClassifier::classify(&RawError::empty(), "updating brief");
        let borrowed = classified.to_graphql_error();
        assert_eq!(GraphqlError::from(classified), borrowed);
        assert_eq!(borrowed.message, "An error occurred while updating brief.");
        assert_eq!(borrowed.extensions.original_error, "");
    }

    #[test]
    fn payload_parses_back_from_client_json() {
        let parsed: GraphqlError = serde_json::from_str(
            r#"{"message":"m","extensions":{"code":"PERMISSION_DENIED","originalError":"o"}}"#,
        )
        .unwrap();
        assert_eq!(parsed.extensions.code, ErrorCode::PermissionDenied);
        assert_eq!(parsed.extensions.original_error, "o");
    }

    #[test]
    fn unparseable_json_classifies_as_internal_error() {
        for raw_json in ["{not json", "\"just a string\"", "[]", ""] {
            let payload = classify_json(raw_json, "updating brief");
            assert_eq!(payload.extensions.code, ErrorCode::InternalError, "{raw_json}");
            assert_eq!(payload.message, "An error occurred while updating brief.");
            assert_eq!(payload.extensions.original_error, "");
        }
    }

    #[test]
    fn classify_json_reads_message_member() {
        let payload = classify_json(
            r#"{"code":"23503","message":"insert or update on table \"assets\" violates foreign key constraint \"assets_media_id_fkey\""}"#,
            "creating asset",
        );
        assert_eq!(payload.extensions.code, ErrorCode::InvalidReference);
        assert!(payload.extensions.original_error.contains("assets_media_id_fkey"));
    }

    #[test]
    fn code_catalog_serializes_fallback_substring_as_null() {
        let catalog = serde_json::to_value(error_code_catalog()).unwrap();
        assert_eq!(
            catalog,
            serde_json::json!([
                {"code": "PERMISSION_DENIED", "matchedSubstring": "row-level security policy"},
                {"code": "INVALID_REFERENCE", "matchedSubstring": "violates foreign key constraint"},
                {"code": "DUPLICATE_RECORD", "matchedSubstring": "violates unique constraint"},
                {"code": "INTERNAL_ERROR", "matchedSubstring": null},
            ])
        );
    }
}
