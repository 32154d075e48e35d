//! The helper function catalog: implementations and specs.
//!
//! Every helper is pure and synchronous — no I/O, no shared state. The one
//! exception to determinism is `uuid`, whose example is flagged skip_test.
//! Implementations assume schema-validated inputs (wrong arity and wrong
//! types are rejected by the invoker before they run) but still return
//! errors, never panic, on data-dependent failures such as invalid base64.

use crate::catalog::{Example, HelperSpec};
use crate::error::{Error, Result};
use crate::schema::{Param, ParamType};
use crate::utils::convert;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use heck::{ToKebabCase, ToLowerCamelCase};
use serde_json::{json, Value};
use uuid::Uuid;

fn arg<'a>(args: &'a [Value], index: usize) -> &'a Value {
    args.get(index).unwrap_or(&Value::Null)
}

// ============================================================================
// String helpers
// ============================================================================

fn upper(args: &[Value]) -> Result<Value> {
    Ok(Value::String(
        convert::as_str(arg(args, 0), "input")?.to_uppercase(),
    ))
}

fn lower(args: &[Value]) -> Result<Value> {
    Ok(Value::String(
        convert::as_str(arg(args, 0), "input")?.to_lowercase(),
    ))
}

fn camel_case(args: &[Value]) -> Result<Value> {
    Ok(Value::String(
        convert::as_str(arg(args, 0), "input")?.to_lower_camel_case(),
    ))
}

fn kebab_case(args: &[Value]) -> Result<Value> {
    Ok(Value::String(
        convert::as_str(arg(args, 0), "input")?.to_kebab_case(),
    ))
}

fn trim(args: &[Value]) -> Result<Value> {
    Ok(Value::String(
        convert::as_str(arg(args, 0), "input")?.trim().to_string(),
    ))
}

fn split(args: &[Value]) -> Result<Value> {
    let input = convert::as_str(arg(args, 0), "input")?;
    let separator = convert::as_str(arg(args, 1), "separator")?;

    let parts: Vec<Value> = if separator.is_empty() {
        input
            .chars()
            .map(|c| Value::String(c.to_string()))
            .collect()
    } else {
        input
            .split(separator)
            .map(|s| Value::String(s.to_string()))
            .collect()
    };
    Ok(Value::Array(parts))
}

fn join(args: &[Value]) -> Result<Value> {
    let list = convert::as_list(arg(args, 0), "input")?;
    let separator = convert::as_str(arg(args, 1), "separator")?;

    let mut parts = Vec::with_capacity(list.len());
    for item in list {
        match item {
            Value::String(s) => parts.push(s.clone()),
            Value::Number(n) => parts.push(n.to_string()),
            Value::Bool(b) => parts.push(b.to_string()),
            Value::Null => parts.push(String::new()),
            other => {
                return Err(Error::other(format!(
                    "cannot join {} element",
                    crate::schema::value_type_name(other)
                )))
            }
        }
    }
    Ok(Value::String(parts.join(separator)))
}

fn replace(args: &[Value]) -> Result<Value> {
    let input = convert::as_str(arg(args, 0), "input")?;
    let search = convert::as_str(arg(args, 1), "search")?;
    let replacement = convert::as_str(arg(args, 2), "replacement")?;
    Ok(Value::String(input.replace(search, replacement)))
}

// ============================================================================
// Slicing
// ============================================================================

/// Resolve Python-style slice bounds: negative indices count from the end,
/// out-of-range indices clamp, an inverted range yields an empty result.
fn slice_bounds(len: usize, start: i64, end: Option<i64>) -> (usize, usize) {
    let n = len as i64;
    let clamp = |i: i64| -> usize {
        if i < 0 {
            (n + i).max(0) as usize
        } else {
            i.min(n) as usize
        }
    };

    let from = clamp(start);
    let to = end.map(clamp).unwrap_or(len);
    if to < from {
        (from, from)
    } else {
        (from, to)
    }
}

fn slice(args: &[Value]) -> Result<Value> {
    let start = match arg(args, 1) {
        Value::Null => 0,
        v => convert::as_index(v, "start")?,
    };
    let end = match arg(args, 2) {
        Value::Null => None,
        v => Some(convert::as_index(v, "end")?),
    };

    match arg(args, 0) {
        Value::String(s) => {
            let chars: Vec<char> = s.chars().collect();
            let (from, to) = slice_bounds(chars.len(), start, end);
            Ok(Value::String(chars[from..to].iter().collect()))
        }
        Value::Array(list) => {
            let (from, to) = slice_bounds(list.len(), start, end);
            Ok(Value::Array(list[from..to].to_vec()))
        }
        other => Err(Error::other(format!(
            "cannot slice {}",
            crate::schema::value_type_name(other)
        ))),
    }
}

// ============================================================================
// Emptiness
// ============================================================================

fn is_empty(args: &[Value]) -> Result<Value> {
    let empty = match arg(args, 0) {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(list) => list.is_empty(),
        Value::Object(map) => map.is_empty(),
        // Zero and false are values, not absences.
        Value::Bool(_) | Value::Number(_) => false,
    };
    Ok(Value::Bool(empty))
}

// ============================================================================
// Encoding
// ============================================================================

fn base64_encode(args: &[Value]) -> Result<Value> {
    let input = convert::as_str(arg(args, 0), "input")?;
    Ok(Value::String(BASE64.encode(input.as_bytes())))
}

fn base64_decode(args: &[Value]) -> Result<Value> {
    let input = convert::as_str(arg(args, 0), "input")?;
    let bytes = BASE64
        .decode(input)
        .map_err(|e| Error::other(format!("invalid base64: {}", e)))?;
    let decoded = String::from_utf8(bytes)
        .map_err(|e| Error::other(format!("decoded bytes are not UTF-8: {}", e)))?;
    Ok(Value::String(decoded))
}

fn json_encode(args: &[Value]) -> Result<Value> {
    serde_json::to_string(arg(args, 0))
        .map(Value::String)
        .map_err(|e| Error::other(format!("JSON encode failed: {}", e)))
}

fn json_decode(args: &[Value]) -> Result<Value> {
    let input = convert::as_str(arg(args, 0), "input")?;
    serde_json::from_str(input).map_err(|e| Error::other(format!("invalid JSON: {}", e)))
}

fn yaml_encode(args: &[Value]) -> Result<Value> {
    let multi = match arg(args, 1) {
        Value::Null => false,
        v => convert::as_bool(v, "multiDocument")?,
    };

    if !multi {
        return serde_yml::to_string(arg(args, 0))
            .map(Value::String)
            .map_err(|e| Error::other(format!("YAML encode failed: {}", e)));
    }

    let documents = arg(args, 0)
        .as_array()
        .ok_or_else(|| Error::other("multiDocument encode requires a list of documents"))?;
    let mut bodies = Vec::with_capacity(documents.len());
    for document in documents {
        bodies.push(
            serde_yml::to_string(document)
                .map_err(|e| Error::other(format!("YAML encode failed: {}", e)))?,
        );
    }
    Ok(Value::String(convert::join_yaml_documents(&bodies)))
}

fn yaml_decode(args: &[Value]) -> Result<Value> {
    let input = convert::as_str(arg(args, 0), "input")?;
    let multi = match arg(args, 1) {
        Value::Null => false,
        v => convert::as_bool(v, "multiDocument")?,
    };

    if !multi {
        return serde_yml::from_str(input)
            .map_err(|e| Error::other(format!("invalid YAML: {}", e)));
    }

    let mut documents = Vec::new();
    for chunk in convert::split_yaml_documents(input) {
        documents.push(
            serde_yml::from_str(chunk)
                .map_err(|e| Error::other(format!("invalid YAML document: {}", e)))?,
        );
    }
    Ok(Value::Array(documents))
}

// ============================================================================
// Random identifiers
// ============================================================================

fn uuid(_args: &[Value]) -> Result<Value> {
    Ok(Value::String(Uuid::new_v4().to_string()))
}

// ============================================================================
// Catalog
// ============================================================================

/// The full helper catalog, one spec per function. Parameter order is call
/// order; example sets are the functions' contracts and run as conformance
/// tests unless flagged.
pub(crate) fn specs() -> Vec<HelperSpec> {
    vec![
        HelperSpec {
            name: "upper",
            description: "Convert a string to uppercase",
            params: vec![Param::required(
                "input",
                ParamType::String,
                "String to convert",
            )],
            output_type: ParamType::String,
            examples: vec![Example::new(vec![json!("hello world")], json!("HELLO WORLD"))],
            implementation: upper,
        },
        HelperSpec {
            name: "lower",
            description: "Convert a string to lowercase",
            params: vec![Param::required(
                "input",
                ParamType::String,
                "String to convert",
            )],
            output_type: ParamType::String,
            examples: vec![Example::new(vec![json!("HELLO World")], json!("hello world"))],
            implementation: lower,
        },
        HelperSpec {
            name: "camelCase",
            description: "Convert a string to lowerCamelCase",
            params: vec![Param::required(
                "input",
                ParamType::String,
                "String to convert",
            )],
            output_type: ParamType::String,
            examples: vec![
                Example::new(
                    vec![json!("string_with_underscores")],
                    json!("stringWithUnderscores"),
                ),
                Example::new(vec![json!("kebab-case-string")], json!("kebabCaseString")),
            ],
            implementation: camel_case,
        },
        HelperSpec {
            name: "kebabCase",
            description: "Convert a string to kebab-case",
            params: vec![Param::required(
                "input",
                ParamType::String,
                "String to convert",
            )],
            output_type: ParamType::String,
            examples: vec![
                Example::new(vec![json!("ThisIsCamelCase")], json!("this-is-camel-case")),
                Example::new(vec![json!("snake_case_string")], json!("snake-case-string")),
            ],
            implementation: kebab_case,
        },
        HelperSpec {
            name: "trim",
            description: "Remove leading and trailing whitespace",
            params: vec![Param::required(
                "input",
                ParamType::String,
                "String to trim",
            )],
            output_type: ParamType::String,
            examples: vec![Example::new(vec![json!("  padded  ")], json!("padded"))],
            implementation: trim,
        },
        HelperSpec {
            name: "split",
            description: "Split a string into a list on a separator",
            params: vec![
                Param::required("input", ParamType::String, "String to split"),
                Param::required(
                    "separator",
                    ParamType::String,
                    "Separator; empty splits into characters",
                ),
            ],
            output_type: ParamType::List,
            examples: vec![
                Example::new(vec![json!("a,b,c"), json!(",")], json!(["a", "b", "c"])),
                Example::new(vec![json!("abc"), json!("")], json!(["a", "b", "c"])),
            ],
            implementation: split,
        },
        HelperSpec {
            name: "join",
            description: "Join list elements into a string with a separator",
            params: vec![
                Param::required("input", ParamType::List, "List of scalar values"),
                Param::required("separator", ParamType::String, "Separator string"),
            ],
            output_type: ParamType::String,
            examples: vec![
                Example::new(vec![json!(["a", "b", "c"]), json!("-")], json!("a-b-c")),
                Example::new(vec![json!([1, 2, 3]), json!(",")], json!("1,2,3")),
            ],
            implementation: join,
        },
        HelperSpec {
            name: "replace",
            description: "Replace every occurrence of a literal substring",
            params: vec![
                Param::required("input", ParamType::String, "String to search"),
                Param::required("search", ParamType::String, "Literal substring to find"),
                Param::required("replacement", ParamType::String, "Replacement text"),
            ],
            output_type: ParamType::String,
            examples: vec![Example::new(
                vec![json!("string_with_underscores"), json!("_"), json!("-")],
                json!("string-with-underscores"),
            )],
            implementation: replace,
        },
        HelperSpec {
            name: "slice",
            description: "Take a substring or sub-list; negative indices count from the end",
            params: vec![
                Param::required("input", ParamType::StringOrList, "String or list to slice"),
                Param::optional("start", ParamType::Number, "Start index (default 0)"),
                Param::optional("end", ParamType::Number, "End index, exclusive (default length)"),
            ],
            output_type: ParamType::StringOrList,
            examples: vec![
                Example::new(
                    vec![
                        json!("ThisIsALongStringThatINeedAPartOf"),
                        json!(11),
                        json!(-7),
                    ],
                    json!("StringThatINeed"),
                ),
                Example::new(
                    vec![json!([1, 2, 3, 4, 5]), json!(1), json!(-1)],
                    json!([2, 3, 4]),
                ),
                // Numeric-string indices coerce through validation.
                Example::new(vec![json!("abcdef"), json!("2")], json!("cdef")),
                Example::new(vec![json!("abcdef")], json!("abcdef")),
            ],
            implementation: slice,
        },
        HelperSpec {
            name: "isEmpty",
            description: "Whether a value is absent, null, or an empty string/list/mapping",
            params: vec![Param::optional("value", ParamType::Any, "Value to test")],
            output_type: ParamType::Boolean,
            examples: vec![
                Example::new(vec![json!("")], json!(true)),
                Example::new(vec![json!(null)], json!(true)),
                Example::new(vec![json!({})], json!(true)),
                Example::new(vec![json!([])], json!(true)),
                Example::new(vec![json!(0)], json!(false)),
                Example::new(vec![json!(false)], json!(false)),
                Example::new(vec![json!("x")], json!(false)),
            ],
            implementation: is_empty,
        },
        HelperSpec {
            name: "base64Encode",
            description: "Encode a string as standard base64",
            params: vec![Param::required(
                "input",
                ParamType::String,
                "String to encode",
            )],
            output_type: ParamType::String,
            examples: vec![Example::new(
                vec![json!("hello world")],
                json!("aGVsbG8gd29ybGQ="),
            )],
            implementation: base64_encode,
        },
        HelperSpec {
            name: "base64Decode",
            description: "Decode a standard base64 string",
            params: vec![Param::required(
                "input",
                ParamType::String,
                "Base64 text to decode",
            )],
            output_type: ParamType::String,
            examples: vec![Example::new(
                vec![json!("aGVsbG8gd29ybGQ=")],
                json!("hello world"),
            )],
            implementation: base64_decode,
        },
        HelperSpec {
            name: "jsonEncode",
            description: "Serialize a value to a compact JSON string",
            params: vec![Param::required("value", ParamType::Any, "Value to serialize")],
            output_type: ParamType::String,
            examples: vec![Example::new(
                vec![json!({"a": 1, "b": [2, 3]})],
                json!("{\"a\":1,\"b\":[2,3]}"),
            )],
            implementation: json_encode,
        },
        HelperSpec {
            name: "jsonDecode",
            description: "Parse a JSON string into a value",
            params: vec![Param::required(
                "input",
                ParamType::String,
                "JSON text to parse",
            )],
            output_type: ParamType::Any,
            examples: vec![Example::new(
                vec![json!("{\"a\":1}")],
                json!({"a": 1}),
            )],
            implementation: json_decode,
        },
        HelperSpec {
            name: "yamlEncode",
            description: "Serialize a value to YAML; multi-document mode emits one '---'-prefixed document per list element",
            params: vec![
                Param::required("value", ParamType::Any, "Value to serialize"),
                Param::optional(
                    "multiDocument",
                    ParamType::Boolean,
                    "Treat the value as a sequence of documents",
                ),
            ],
            output_type: ParamType::String,
            examples: vec![
                Example::new(vec![json!({"a": 1, "b": 2})], json!("a: 1\nb: 2\n")),
                Example::new(
                    vec![json!([{"a": 1, "b": 2}, {"a": 3, "b": 4}]), json!(true)],
                    json!("---a: 1\nb: 2\n---a: 3\nb: 4\n"),
                ),
            ],
            implementation: yaml_encode,
        },
        HelperSpec {
            name: "yamlDecode",
            description: "Parse YAML into a value; multi-document mode returns a list of documents",
            params: vec![
                Param::required("input", ParamType::String, "YAML text to parse"),
                Param::optional(
                    "multiDocument",
                    ParamType::Boolean,
                    "Parse a '---'-separated document stream",
                ),
            ],
            output_type: ParamType::Any,
            examples: vec![
                Example::new(vec![json!("a: 1\nb: 2\n")], json!({"a": 1, "b": 2})),
                Example::new(
                    vec![json!("---a: 1\nb: 2\n---a: 3\nb: 4\n"), json!(true)],
                    json!([{"a": 1, "b": 2}, {"a": 3, "b": 4}]),
                ),
            ],
            implementation: yaml_decode,
        },
        HelperSpec {
            name: "uuid",
            description: "Generate a random UUID v4",
            params: vec![],
            output_type: ParamType::String,
            examples: vec![Example::skipped(
                vec![],
                json!("1b671a64-40d5-491e-99b0-da01ff1f3341"),
            )],
            implementation: uuid,
        },
    ]
}
