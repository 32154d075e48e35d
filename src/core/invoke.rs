//! Helper invocation: lookup, argument unwrapping, validation, execution.
//!
//! The contract with the templating engine is error-as-value: `call` returns
//! an envelope holding exactly one of a resolved value or a structured error,
//! and never panics or throws across the boundary. Errors already attached to
//! input arguments are contagious — the helper is never invoked with a
//! partially-failed argument list.

use crate::catalog::HelperRegistry;
use crate::error::{Error, Result};
use crate::schema;
use serde::Serialize;
use serde_json::Value;

/// One pre-evaluated argument node supplied by the engine: either a value
/// (raw or already resolved — the distinction collapses here) or an error
/// propagated from evaluating an inner expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Value(Value),
    Failed(Error),
}

impl From<Value> for Argument {
    fn from(value: Value) -> Self {
        Argument::Value(value)
    }
}

impl From<Error> for Argument {
    fn from(error: Error) -> Self {
        Argument::Failed(error)
    }
}

/// The invocation result envelope: exactly one of resolved or error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum HelperOutcome {
    #[serde(rename = "resolved")]
    Resolved(Value),
    #[serde(rename = "error")]
    Failed(Error),
}

impl HelperOutcome {
    pub fn resolved(&self) -> Option<&Value> {
        match self {
            HelperOutcome::Resolved(value) => Some(value),
            HelperOutcome::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            HelperOutcome::Resolved(_) => None,
            HelperOutcome::Failed(error) => Some(error),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, HelperOutcome::Resolved(_))
    }

    pub fn into_result(self) -> Result<Value> {
        match self {
            HelperOutcome::Resolved(value) => Ok(value),
            HelperOutcome::Failed(error) => Err(error),
        }
    }
}

impl HelperRegistry {
    /// Invoke a helper by name with pre-evaluated arguments.
    ///
    /// `source_text` is the original template snippet, attached to every
    /// error for diagnostics. With `allow_partial`, a type-validation failure
    /// degrades to returning `source_text` verbatim as the resolved value so
    /// a best-effort resolution pass renders the expression literally instead
    /// of aborting the document; lookup failures, missing required arguments,
    /// and execution failures still error.
    pub fn call(
        &self,
        name: &str,
        args: &[Argument],
        source_text: &str,
        allow_partial: bool,
    ) -> HelperOutcome {
        let entry = match self.lookup(name) {
            Some(entry) => entry,
            None => {
                return HelperOutcome::Failed(Error::unknown_function(
                    name,
                    source_text,
                    &self.names(),
                ))
            }
        };

        // Errors are contagious: the first failed argument wins and the
        // implementation is never attempted.
        let mut supplied: Vec<&Value> = Vec::with_capacity(args.len());
        for argument in args {
            match argument {
                Argument::Value(value) => supplied.push(value),
                Argument::Failed(error) => return HelperOutcome::Failed(error.clone()),
            }
        }

        let mut validated: Vec<Value> = Vec::with_capacity(entry.spec.params.len());
        for (position, param) in entry.spec.params.iter().enumerate() {
            match supplied.get(position) {
                None => {
                    if param.required {
                        return HelperOutcome::Failed(Error::missing_argument(
                            name,
                            param.name,
                            position,
                            source_text,
                        ));
                    }
                    // Absent optional parameters collapse to null.
                    validated.push(Value::Null);
                }
                Some(value) => match schema::validate(value, param.param_type) {
                    Ok(coerced) => validated.push(coerced),
                    Err(detail) => {
                        if allow_partial {
                            return HelperOutcome::Resolved(Value::String(
                                source_text.to_string(),
                            ));
                        }
                        return HelperOutcome::Failed(Error::invalid_argument(
                            name,
                            param.name,
                            &detail,
                            source_text,
                        ));
                    }
                },
            }
        }

        match (entry.spec.implementation)(&validated) {
            Ok(value) => HelperOutcome::Resolved(value),
            Err(cause) => {
                HelperOutcome::Failed(Error::execution_failed(name, &cause.message, source_text))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use serde_json::json;

    fn registry() -> HelperRegistry {
        HelperRegistry::new()
    }

    #[test]
    fn unknown_function_lists_catalog() {
        let out = registry().call("nope", &[], "${nope()}", false);
        let err = out.error().unwrap();
        assert_eq!(err.code, ErrorCode::UnknownFunction);
        let names = err.details["validFunctions"].as_array().unwrap();
        assert!(names.iter().any(|n| n == "upper"));
        assert!(names.iter().any(|n| n == "yamlDecode"));
    }

    #[test]
    fn failed_argument_is_contagious() {
        let inner = Error::execution_failed("jsonDecode", "bad json", "${jsonDecode(x)}");
        let out = registry().call(
            "upper",
            &[Argument::Failed(inner.clone())],
            "${upper(jsonDecode(x))}",
            false,
        );
        assert_eq!(out.error().unwrap(), &inner);
    }

    #[test]
    fn contagion_wins_over_validation() {
        let inner = Error::execution_failed("x", "boom", "${x()}");
        // Second argument would also fail validation; the propagated error
        // still wins because unwrapping precedes validation.
        let out = registry().call(
            "replace",
            &[
                Argument::Value(json!(5)),
                Argument::Failed(inner.clone()),
                Argument::Value(json!("-")),
            ],
            "${replace(...)}",
            false,
        );
        assert_eq!(out.error().unwrap(), &inner);
    }

    #[test]
    fn missing_required_argument_names_position() {
        let out = registry().call("replace", &[Argument::Value(json!("a"))], "${replace(a)}", false);
        let err = out.error().unwrap();
        assert_eq!(err.code, ErrorCode::MissingArgument);
        assert_eq!(err.details["parameter"], "search");
        assert_eq!(err.details["position"], 1);
    }

    #[test]
    fn missing_required_argument_errors_even_with_allow_partial() {
        let out = registry().call("upper", &[], "${upper()}", true);
        assert_eq!(out.error().unwrap().code, ErrorCode::MissingArgument);
    }

    #[test]
    fn invalid_argument_reports_validation_detail() {
        let out = registry().call(
            "upper",
            &[Argument::Value(json!(42))],
            "${upper(42)}",
            false,
        );
        let err = out.error().unwrap();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
        assert_eq!(err.details["detail"], "expected string, got number");
        assert_eq!(err.details["sourceText"], "${upper(42)}");
    }

    #[test]
    fn allow_partial_echoes_source_text() {
        let out = registry().call(
            "upper",
            &[Argument::Value(json!(42))],
            "${upper(42)}",
            true,
        );
        assert_eq!(out.resolved().unwrap(), &json!("${upper(42)}"));
    }

    #[test]
    fn coerced_value_reaches_implementation() {
        let out = registry().call(
            "slice",
            &[Argument::Value(json!("abcdef")), Argument::Value(json!("2"))],
            "${slice(abcdef, 2)}",
            false,
        );
        assert_eq!(out.resolved().unwrap(), &json!("cdef"));
    }

    #[test]
    fn execution_failure_wraps_cause_and_source() {
        let out = registry().call(
            "jsonDecode",
            &[Argument::Value(json!("{nope"))],
            "${jsonDecode(cfg)}",
            false,
        );
        let err = out.error().unwrap();
        assert_eq!(err.code, ErrorCode::ExecutionFailed);
        assert!(err.details["cause"].as_str().unwrap().contains("invalid JSON"));
        assert_eq!(err.details["sourceText"], "${jsonDecode(cfg)}");
    }

    #[test]
    fn execution_failure_survives_allow_partial() {
        // The degrade path covers validation only; a data-dependent failure
        // inside the implementation is still an error.
        let out = registry().call(
            "base64Decode",
            &[Argument::Value(json!("not base64!!!"))],
            "${base64Decode(x)}",
            true,
        );
        assert_eq!(out.error().unwrap().code, ErrorCode::ExecutionFailed);
    }

    #[test]
    fn surplus_arguments_are_ignored() {
        let out = registry().call(
            "upper",
            &[Argument::Value(json!("hi")), Argument::Value(json!("extra"))],
            "${upper(hi, extra)}",
            false,
        );
        assert_eq!(out.resolved().unwrap(), &json!("HI"));
    }

    #[test]
    fn envelope_serializes_resolved_or_error() {
        let ok = serde_json::to_value(HelperOutcome::Resolved(json!("v"))).unwrap();
        assert_eq!(ok, json!({"resolved": "v"}));

        let err = Error::missing_argument("upper", "input", 0, "${upper()}");
        let failed = serde_json::to_value(HelperOutcome::Failed(err)).unwrap();
        assert_eq!(failed["error"]["code"], "helper.missing_argument");
        assert!(failed.get("resolved").is_none());
    }
}
