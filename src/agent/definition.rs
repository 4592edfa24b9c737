// ABOUTME: Agent - a named container of configuration and a tool registry.
// ABOUTME: Dispatches calls by tool name and maps failures onto ToolError.

use std::sync::Arc;

use uuid::Uuid;

use crate::config::AgentConfig;
use crate::error::ToolError;
use crate::llm::{LlmConfig, ToolDefinition};
use crate::tool::{Registry, Tool, ToolResult};

/// An agent: identity, instructions for the model, and the tools it may call.
#[derive(Clone)]
pub struct Agent {
    /// Unique identifier for this agent instance.
    id: String,

    /// Name the agent is exported under.
    pub name: String,

    /// Short human-readable description.
    pub description: String,

    /// System instructions handed to the model.
    pub instructions: String,

    /// Model configuration.
    pub llm: LlmConfig,

    tools: Registry,
}

impl Agent {
    /// Create an agent with default description, instructions and model.
    pub fn new(name: impl Into<String>) -> Self {
        let defaults = AgentConfig::default();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: defaults.description,
            instructions: defaults.instructions,
            llm: defaults.llm,
            tools: Registry::new(),
        }
    }

    /// Create an agent from a loaded configuration. No tools are registered.
    pub fn from_config(config: AgentConfig) -> Self {
        Self::new(config.name)
            .description(config.description)
            .instructions(config.instructions)
            .llm(config.llm)
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the instructions.
    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Set the model by name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.llm = LlmConfig::new(model);
        self
    }

    /// Replace the model configuration.
    pub fn llm(mut self, llm: LlmConfig) -> Self {
        self.llm = llm;
        self
    }

    /// Get the agent ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The agent's tool registry. Clones share state with the agent.
    pub fn registry(&self) -> &Registry {
        &self.tools
    }

    /// Register a tool on this agent.
    pub async fn tool<T: Tool + 'static>(&self, tool: T) {
        self.tools.register(tool).await;
    }

    /// Register an already shared tool.
    pub async fn tool_arc(&self, tool: Arc<dyn Tool>) {
        self.tools.register_arc(tool).await;
    }

    /// Names of all registered tools, sorted.
    pub async fn tool_names(&self) -> Vec<String> {
        self.tools.list().await
    }

    /// LLM-facing definitions of all registered tools.
    pub async fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.to_definitions().await
    }

    /// Invoke a tool by name.
    ///
    /// A tool that reports a failure through an error result still returns
    /// `Ok`; only unknown tools, unusable parameters and genuine execution
    /// failures become `Err`.
    pub async fn call(
        &self,
        name: &str,
        params: serde_json::Value,
    ) -> Result<ToolResult, ToolError> {
        let Some(tool) = self.tools.get(name).await else {
            tracing::warn!(agent = %self.name, tool = name, "unknown tool");
            return Err(ToolError::NotFound(name.to_string()));
        };

        tracing::debug!(agent = %self.name, agent_id = %self.id, tool = name, "calling tool");

        match tool.execute(params).await {
            Ok(result) => {
                tracing::debug!(tool = name, is_error = result.is_error, "tool returned");
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(tool = name, error = %e, "tool call failed");
                match e.downcast::<ToolError>() {
                    Ok(tool_error) => Err(tool_error),
                    Err(e) => Err(ToolError::Execution(e)),
                }
            }
        }
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("description", &self.description)
            .field("llm", &self.llm)
            .finish_non_exhaustive()
    }
}
