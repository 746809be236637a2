#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod classifier;
pub mod error;
pub mod response;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use classifier::rules::CLASSIFICATION_RULES;
pub use classifier::{ClassifiedError, ClassifyExt, ErrorClassifier, ErrorCode, handle_error};
pub use error::Error;
pub use response::{
    ErrorCodeInfo, GraphqlError, GraphqlErrorExtensions, classify_json, error_code_catalog,
};
pub use types::{ErrorMessage, RawError};
