//! Type-safe schema generation for Gemini structured outputs.
//!
//! Uses the `schemars` crate to automatically generate JSON schemas from Rust
//! types. Doc comments on fields become the schema `description` strings the
//! model sees, so extraction guidance lives next to the field it describes.

use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;

/// Trait for types that can be used as Gemini structured output.
///
/// Automatically implemented for any type that implements `JsonSchema + DeserializeOwned`.
pub trait StructuredOutput: JsonSchema + DeserializeOwned {
    /// Generate a Gemini-compatible response schema for this type.
    ///
    /// Gemini accepts an OpenAPI-style subset of JSON Schema:
    /// 1. No `$ref` references — everything must be inlined
    /// 2. No `$schema`, `definitions`, or `additionalProperties` keywords
    /// 3. `required` listing every property
    ///
    /// This method transforms the schemars output to meet these requirements.
    fn gemini_schema() -> serde_json::Value {
        let schema = schema_for!(Self);
        let mut value = serde_json::to_value(schema).unwrap_or_default();

        // Step 1: Inline all $ref references (Gemini rejects refs outright)
        inline_refs(&mut value);

        // Step 2: Collapse single-element allOf wrappers (schemars emits them
        // for documented fields of referenced types)
        flatten_single_allof(&mut value);

        // Step 3: Normalize object schemas (require all, drop strict-mode keys)
        fix_object_schemas(&mut value);

        // Step 4: Remove top-level keys Gemini does not understand
        if let serde_json::Value::Object(map) = &mut value {
            map.remove("definitions");
            map.remove("$schema");
        }

        value
    }

    /// Get the schema name for this type.
    fn type_name() -> String {
        <Self as JsonSchema>::schema_name()
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: JsonSchema + DeserializeOwned> StructuredOutput for T {}

/// Normalize object schemas for Gemini compatibility.
///
/// Ensures all properties are listed in `required` and strips keywords
/// (`title`, `additionalProperties`) outside Gemini's accepted subset.
fn fix_object_schemas(value: &mut serde_json::Value) {
    if let serde_json::Value::Object(map) = value {
        map.remove("title");

        if map.get("type") == Some(&serde_json::Value::String("object".to_string())) {
            map.remove("additionalProperties");

            if let Some(serde_json::Value::Object(props)) = map.get("properties") {
                let all_keys: Vec<serde_json::Value> = props
                    .keys()
                    .map(|k| serde_json::Value::String(k.clone()))
                    .collect();
                map.insert("required".to_string(), serde_json::Value::Array(all_keys));
            }
        }

        // Recurse into nested schemas
        for (_, v) in map.iter_mut() {
            fix_object_schemas(v);
        }
    } else if let serde_json::Value::Array(arr) = value {
        for item in arr.iter_mut() {
            fix_object_schemas(item);
        }
    }
}

/// Collapse `{"description": ..., "allOf": [X]}` into `X` plus the description.
///
/// Gemini does not accept `allOf`; schemars produces the wrapper whenever a
/// documented field references a named type.
fn flatten_single_allof(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            let single = match map.get("allOf") {
                Some(serde_json::Value::Array(arr)) if arr.len() == 1 => Some(arr[0].clone()),
                _ => None,
            };

            if let Some(serde_json::Value::Object(mut inner)) = single {
                map.remove("allOf");
                // Keys on the wrapper (description) win over the inlined schema's
                for (k, v) in map.iter() {
                    inner.insert(k.clone(), v.clone());
                }
                *map = inner;
            }

            for (_, v) in map.iter_mut() {
                flatten_single_allof(v);
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr.iter_mut() {
                flatten_single_allof(item);
            }
        }
        _ => {}
    }
}

/// Inline all $ref references by replacing them with the actual schema from definitions.
fn inline_refs(value: &mut serde_json::Value) {
    let definitions = if let serde_json::Value::Object(map) = value {
        map.get("definitions").cloned()
    } else {
        None
    };

    if let Some(defs) = definitions {
        inline_refs_recursive(value, &defs);
    }
}

/// Recursively inline $ref references.
fn inline_refs_recursive(value: &mut serde_json::Value, definitions: &serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            if let Some(serde_json::Value::String(ref_path)) = map.get("$ref").cloned() {
                // Parse ref like "#/definitions/MonthlyComparison"
                if ref_path.starts_with("#/definitions/") {
                    let type_name = ref_path.trim_start_matches("#/definitions/");
                    if let Some(def) = definitions.get(type_name) {
                        *value = def.clone();
                        // Recursively inline any nested refs in the inlined schema
                        inline_refs_recursive(value, definitions);
                        return;
                    }
                }
            }

            for (_, v) in map.iter_mut() {
                inline_refs_recursive(v, definitions);
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr.iter_mut() {
                inline_refs_recursive(item, definitions);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemars::JsonSchema;
    use serde::Deserialize;

    #[derive(Deserialize, JsonSchema)]
    #[serde(rename_all = "camelCase")]
    struct Inner {
        /// Kilowatt hours used this period
        usage_current: f64,
        usage_previous: f64,
    }

    #[derive(Deserialize, JsonSchema)]
    #[serde(rename_all = "camelCase")]
    struct Outer {
        /// Full name of the customer
        customer_name: String,
        comparison: Inner,
    }

    #[test]
    fn test_schema_has_no_refs_or_meta_keys() {
        let schema = Outer::gemini_schema();
        let schema_str = serde_json::to_string(&schema).unwrap();

        assert!(!schema_str.contains("$ref"), "refs should be inlined");
        assert!(!schema_str.contains("$schema"));
        assert!(!schema_str.contains("definitions"));
        assert!(!schema_str.contains("additionalProperties"));
    }

    #[test]
    fn test_serde_renames_flow_into_schema() {
        let schema = Outer::gemini_schema();
        let props = schema["properties"].as_object().unwrap();

        assert!(props.contains_key("customerName"));
        assert!(props.contains_key("comparison"));
    }

    #[test]
    fn test_nested_object_inlined_and_required() {
        let schema = Outer::gemini_schema();
        let comparison = &schema["properties"]["comparison"];

        assert_eq!(comparison["type"], "object");

        let required: Vec<&str> = comparison["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert!(required.contains(&"usageCurrent"));
        assert!(required.contains(&"usagePrevious"));
    }

    #[test]
    fn test_doc_comments_become_descriptions() {
        let schema = Outer::gemini_schema();

        assert_eq!(
            schema["properties"]["customerName"]["description"],
            "Full name of the customer"
        );
    }

    #[test]
    fn test_documented_ref_field_flattened() {
        #[derive(Deserialize, JsonSchema)]
        struct Wrapper {
            /// Comparison data from the bill
            comparison: Inner,
        }

        let schema = Wrapper::gemini_schema();
        let comparison = &schema["properties"]["comparison"];

        assert!(comparison.get("allOf").is_none(), "allOf should be collapsed");
        assert_eq!(comparison["type"], "object");
        assert_eq!(comparison["description"], "Comparison data from the bill");
    }

    #[test]
    fn test_all_root_properties_required() {
        let schema = Outer::gemini_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();

        assert!(required.contains(&"customerName"));
        assert!(required.contains(&"comparison"));
    }
}
