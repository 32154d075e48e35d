//! Helper function catalog and registry.
//!
//! The catalog is data, not code branches: each helper is a `HelperSpec`
//! record binding a name, parameter schemas, documented examples, and an
//! implementation with the uniform `fn(&[Value]) -> Result<Value>` signature,
//! so invocation logic stays generic over all entries. The registry builds
//! its lookup table once, lazily, on first use.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::core::functions;
use crate::error::Result;
use crate::schema::{Param, ParamType};
use serde_json::Value;

/// Uniform helper implementation signature. Receives one validated (and
/// possibly coerced) value per declared parameter, in declaration order;
/// absent optional parameters arrive as JSON null.
pub type HelperFn = fn(&[Value]) -> Result<Value>;

/// A documented input/output pair. Doubles as a conformance test unless
/// flagged `skip_test` (non-reproducible output, e.g. random identifiers).
#[derive(Debug, Clone)]
pub struct Example {
    pub args: Vec<Value>,
    pub expected: Value,
    pub skip_test: bool,
}

impl Example {
    pub fn new(args: Vec<Value>, expected: Value) -> Self {
        Self {
            args,
            expected,
            skip_test: false,
        }
    }

    pub fn skipped(args: Vec<Value>, expected: Value) -> Self {
        Self {
            args,
            expected,
            skip_test: true,
        }
    }
}

/// Static description of one helper function.
#[derive(Debug, Clone)]
pub struct HelperSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub params: Vec<Param>,
    pub output_type: ParamType,
    pub examples: Vec<Example>,
    pub implementation: HelperFn,
}

/// A catalog entry: the spec plus metadata precomputed at table build time.
#[derive(Debug, Clone)]
pub struct HelperEntry {
    pub spec: HelperSpec,
    /// Human-readable call signature, e.g. `slice(input, [start], [end])`.
    pub usage: String,
}

fn render_usage(spec: &HelperSpec) -> String {
    let params: Vec<String> = spec
        .params
        .iter()
        .map(|p| {
            if p.required {
                p.name.to_string()
            } else {
                format!("[{}]", p.name)
            }
        })
        .collect();
    format!("{}({})", spec.name, params.join(", "))
}

fn build_table() -> BTreeMap<&'static str, HelperEntry> {
    let mut table = BTreeMap::new();
    for spec in functions::specs() {
        let mut seen = Vec::new();
        for param in &spec.params {
            debug_assert!(
                !seen.contains(&param.name),
                "duplicate parameter '{}' in {}",
                param.name,
                spec.name
            );
            seen.push(param.name);
        }

        let usage = render_usage(&spec);
        let previous = table.insert(spec.name, HelperEntry { spec, usage });
        debug_assert!(previous.is_none(), "duplicate helper registration");
    }
    table
}

/// Registry of all helper functions, owned by the templating engine for the
/// process lifetime. The lookup table is built once on first access;
/// concurrent first calls coordinate through the `OnceLock`.
#[derive(Debug, Default)]
pub struct HelperRegistry {
    table: OnceLock<BTreeMap<&'static str, HelperEntry>>,
}

impl HelperRegistry {
    pub fn new() -> Self {
        Self {
            table: OnceLock::new(),
        }
    }

    pub fn catalog(&self) -> &BTreeMap<&'static str, HelperEntry> {
        self.table.get_or_init(build_table)
    }

    pub fn lookup(&self, name: &str) -> Option<&HelperEntry> {
        self.catalog().get(name)
    }

    /// All helper names in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        self.catalog().keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_idempotent() {
        let registry = HelperRegistry::new();
        let first = registry.catalog() as *const _;
        let second = registry.catalog() as *const _;
        assert_eq!(first, second);
    }

    #[test]
    fn names_are_sorted_and_unique() {
        let registry = HelperRegistry::new();
        let names = registry.names();
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn usage_brackets_optional_params() {
        let registry = HelperRegistry::new();
        let entry = registry.lookup("slice").unwrap();
        assert_eq!(entry.usage, "slice(input, [start], [end])");
    }

    #[test]
    fn usage_without_params_is_bare_parens() {
        let registry = HelperRegistry::new();
        let entry = registry.lookup("uuid").unwrap();
        assert_eq!(entry.usage, "uuid()");
    }

    #[test]
    fn required_params_have_no_default_path() {
        let registry = HelperRegistry::new();
        for entry in registry.catalog().values() {
            // Optional params may only trail required ones; positional
            // absence detection depends on it.
            let mut optional_seen = false;
            for param in &entry.spec.params {
                if !param.required {
                    optional_seen = true;
                } else {
                    assert!(
                        !optional_seen,
                        "{}: required param '{}' after optional",
                        entry.spec.name, param.name
                    );
                }
            }
        }
    }
}
