// ABOUTME: Defines the Tool trait - the contract every registered tool fulfils.
// ABOUTME: Tools have a name, an LLM-facing description, a schema, and async execute.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::ToolResult;
use crate::error::ToolError;

/// Deserialize tool parameters, tagging failures as `ToolError::InvalidParams`.
pub fn parse_params<T: DeserializeOwned>(params: serde_json::Value) -> Result<T, ToolError> {
    serde_json::from_value(params).map_err(|e| ToolError::InvalidParams(e.to_string()))
}

/// A named, independently invocable capability of an agent.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the unique name of this tool.
    fn name(&self) -> &str;

    /// Returns a human-readable description for the LLM.
    fn description(&self) -> &str;

    /// Returns the JSON Schema for the tool's input parameters.
    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {}
        })
    }

    /// Execute the tool with the given parameters.
    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error>;
}
