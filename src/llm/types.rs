// ABOUTME: Core types for LLM integration - tool definitions and the
// ABOUTME: model configuration an agent is created with.

use serde::{Deserialize, Serialize};

/// Model used when no override is configured.
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Definition of a tool for the LLM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

/// Model configuration for an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmConfig {
    pub model: String,
}

impl LlmConfig {
    /// Create a config for the given model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}
