// ABOUTME: JSON schema types describing operation inputs for tools/list responses
// ABOUTME: ToolSchema pairs an operation name and description with its input schema
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Tool schema definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Operation name
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Input parameter schema
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonSchema,
}

/// JSON Schema definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSchema {
    /// Schema type, always `object` for operation arguments
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Named properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, PropertySchema>>,
    /// Required property names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl JsonSchema {
    /// Object schema built from `(name, type, description)` triples
    #[must_use]
    pub fn object(properties: &[(&str, &str, &str)], required: &[&str]) -> Self {
        let properties = properties
            .iter()
            .map(|(name, property_type, description)| {
                (
                    (*name).to_owned(),
                    PropertySchema {
                        property_type: (*property_type).to_owned(),
                        description: Some((*description).to_owned()),
                    },
                )
            })
            .collect();
        Self {
            schema_type: "object".to_owned(),
            properties: Some(properties),
            required: (!required.is_empty())
                .then(|| required.iter().map(|name| (*name).to_owned()).collect()),
        }
    }
}

/// Property schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySchema {
    /// JSON type name
    #[serde(rename = "type")]
    pub property_type: String,
    /// What the property controls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Tool call for executing an operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Operation name
    pub name: String,
    /// Operation arguments
    #[serde(default)]
    pub arguments: Option<serde_json::Value>,
}
