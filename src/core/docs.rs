//! Catalog metadata for documentation generation.
//!
//! The rendering itself happens outside this crate; this module only exposes
//! the per-function metadata (description, usage, parameter docs, examples)
//! in a serializable shape.

use crate::catalog::HelperRegistry;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HelperDoc {
    pub name: String,
    pub description: String,
    pub usage: String,
    pub output_type: String,
    pub parameters: Vec<ParamDoc>,
    pub examples: Vec<ExampleDoc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamDoc {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub required: bool,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleDoc {
    pub args: Vec<Value>,
    pub output: Value,
    /// False for examples excluded from automated conformance testing.
    pub deterministic: bool,
}

impl HelperRegistry {
    /// Documentation entries for every cataloged helper, sorted by name.
    pub fn docs(&self) -> Vec<HelperDoc> {
        self.catalog()
            .values()
            .map(|entry| HelperDoc {
                name: entry.spec.name.to_string(),
                description: entry.spec.description.to_string(),
                usage: entry.usage.clone(),
                output_type: entry.spec.output_type.label().to_string(),
                parameters: entry
                    .spec
                    .params
                    .iter()
                    .map(|p| ParamDoc {
                        name: p.name.to_string(),
                        param_type: p.param_type.label().to_string(),
                        required: p.required,
                        description: p.description.to_string(),
                    })
                    .collect(),
                examples: entry
                    .spec
                    .examples
                    .iter()
                    .map(|e| ExampleDoc {
                        args: e.args.clone(),
                        output: e.expected.clone(),
                        deterministic: !e.skip_test,
                    })
                    .collect(),
            })
            .collect()
    }
}
