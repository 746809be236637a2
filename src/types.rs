use serde::{Deserialize, Deserializer};

use crate::error::Error;

/// Anything that can surface an optional textual diagnostic message.
///
/// This is the only capability the classifier needs from a storage error.
/// Implement it for a driver's error type to feed it to
/// [`handle_error`](crate::handle_error) directly.
pub trait ErrorMessage {
    fn message(&self) -> Option<&str>;
}

/// A storage-layer error as received from PostgREST / Supabase.
///
/// Only `message` is read. Other members of the payload (`code`, `details`,
/// `hint`, ...) are ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawError {
    /// Diagnostic text from the database. `None` when absent, null, or not a string.
    #[serde(default, deserialize_with = "lenient_message")]
    pub message: Option<String>,
}

impl RawError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &serde_json::Value) -> Result<Self, Error> {
        if !value.is_object() {
            return Err(Error::Parse {
                reason: format!("expected a JSON object for a raw error, got {value}"),
            });
        }
        Ok(Self::deserialize(value)?)
    }
}

fn lenient_message<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    }))
}

impl ErrorMessage for RawError {
    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl ErrorMessage for str {
    fn message(&self) -> Option<&str> {
        Some(self)
    }
}

impl ErrorMessage for String {
    fn message(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

/// Reads the string `message` member of a JSON object; anything else has no message.
impl ErrorMessage for serde_json::Value {
    fn message(&self) -> Option<&str> {
        self.get("message").and_then(serde_json::Value::as_str)
    }
}

impl<T: ErrorMessage + ?Sized> ErrorMessage for &T {
    fn message(&self) -> Option<&str> {
        (**self).message()
    }
}
