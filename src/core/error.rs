//! Structured errors for helper invocation.
//!
//! Every failure that can cross the invoker boundary is represented as a
//! value with a machine-readable code, a human message, and a structured
//! details payload carrying the originating template snippet. Errors are
//! returned inside the result envelope, never panicked or thrown.

use serde::Serialize;
use serde_json::{json, Value};

pub type Result<T> = std::result::Result<T, Error>;

/// Machine-readable error codes, serialized as dotted strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorCode {
    #[serde(rename = "helper.unknown_function")]
    UnknownFunction,
    #[serde(rename = "helper.missing_argument")]
    MissingArgument,
    #[serde(rename = "helper.invalid_argument")]
    InvalidArgument,
    #[serde(rename = "helper.execution_failed")]
    ExecutionFailed,
    #[serde(rename = "internal.unexpected")]
    InternalUnexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::UnknownFunction => "helper.unknown_function",
            ErrorCode::MissingArgument => "helper.missing_argument",
            ErrorCode::InvalidArgument => "helper.invalid_argument",
            ErrorCode::ExecutionFailed => "helper.execution_failed",
            ErrorCode::InternalUnexpected => "internal.unexpected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn unknown_function(name: &str, source_text: &str, valid_functions: &[&str]) -> Self {
        let mut err = Self::new(
            ErrorCode::UnknownFunction,
            format!("Unknown helper function: {}", name),
            json!({
                "function": name,
                "validFunctions": valid_functions,
                "sourceText": source_text,
            }),
        );
        err.hints
            .push("Helper function names are case-sensitive".to_string());
        err
    }

    pub fn missing_argument(
        function: &str,
        parameter: &str,
        position: usize,
        source_text: &str,
    ) -> Self {
        Self::new(
            ErrorCode::MissingArgument,
            format!(
                "Missing required argument '{}' (position {}) for {}",
                parameter, position, function
            ),
            json!({
                "function": function,
                "parameter": parameter,
                "position": position,
                "sourceText": source_text,
            }),
        )
    }

    pub fn invalid_argument(
        function: &str,
        parameter: &str,
        detail: &str,
        source_text: &str,
    ) -> Self {
        Self::new(
            ErrorCode::InvalidArgument,
            format!("Invalid argument '{}' for {}: {}", parameter, function, detail),
            json!({
                "function": function,
                "parameter": parameter,
                "detail": detail,
                "sourceText": source_text,
            }),
        )
    }

    pub fn execution_failed(function: &str, cause: &str, source_text: &str) -> Self {
        Self::new(
            ErrorCode::ExecutionFailed,
            format!("Helper function '{}' failed: {}", function, cause),
            json!({
                "function": function,
                "cause": cause,
                "sourceText": source_text,
            }),
        )
    }

    /// Data-dependent failure raised inside a helper implementation.
    ///
    /// The invoker rewraps these into `ExecutionFailed` with the function
    /// name and source snippet attached, so implementations only supply the
    /// cause.
    pub fn other(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalUnexpected, message, Value::Null)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_function_lists_valid_names() {
        let err = Error::unknown_function("nope", "${nope()}", &["lower", "upper"]);
        assert_eq!(err.code, ErrorCode::UnknownFunction);
        assert_eq!(err.details["validFunctions"], json!(["lower", "upper"]));
        assert_eq!(err.details["sourceText"], "${nope()}");
    }

    #[test]
    fn missing_argument_names_parameter_and_position() {
        let err = Error::missing_argument("replace", "search", 1, "${replace(a)}");
        assert!(err.message.contains("'search'"));
        assert!(err.message.contains("position 1"));
        assert_eq!(err.details["position"], 1);
    }

    #[test]
    fn codes_serialize_as_dotted_strings() {
        let err = Error::execution_failed("jsonDecode", "bad json", "${jsonDecode(x)}");
        let payload = serde_json::to_value(&err).unwrap();
        assert_eq!(payload["code"], "helper.execution_failed");
        assert_eq!(payload["details"]["sourceText"], "${jsonDecode(x)}");
    }

    #[test]
    fn display_renders_message() {
        let err = Error::other("boom");
        assert_eq!(err.to_string(), "boom");
    }
}
