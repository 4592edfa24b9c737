// ABOUTME: Agent configuration - defaults plus CHECKUP_* environment overrides.
// ABOUTME: Resolution goes through a lookup function so it can be tested without env.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::llm::LlmConfig;

pub const ENV_AGENT_NAME: &str = "CHECKUP_AGENT_NAME";
pub const ENV_AGENT_DESCRIPTION: &str = "CHECKUP_AGENT_DESCRIPTION";
pub const ENV_AGENT_INSTRUCTIONS: &str = "CHECKUP_AGENT_INSTRUCTIONS";
pub const ENV_MODEL: &str = "CHECKUP_MODEL";

pub const DEFAULT_AGENT_NAME: &str = "test_agent";
pub const DEFAULT_DESCRIPTION: &str = "A simple test agent to verify agent functionality";
pub const DEFAULT_INSTRUCTIONS: &str =
    "You are a helpful test agent. Respond to user queries and demonstrate basic functionality.";

/// Everything needed to build an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub name: String,
    pub description: String,
    pub instructions: String,
    pub llm: LlmConfig,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_AGENT_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            instructions: DEFAULT_INSTRUCTIONS.to_string(),
            llm: LlmConfig::default(),
        }
    }
}

impl AgentConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup. Blank values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();
        if let Some(name) = get(ENV_AGENT_NAME) {
            validate_name(ENV_AGENT_NAME, &name)?;
            config.name = name;
        }
        if let Some(description) = get(ENV_AGENT_DESCRIPTION) {
            config.description = description;
        }
        if let Some(instructions) = get(ENV_AGENT_INSTRUCTIONS) {
            config.instructions = instructions;
        }
        if let Some(model) = get(ENV_MODEL) {
            config.llm = LlmConfig::new(model);
        }
        Ok(config)
    }
}

/// Agent names are identifiers: ASCII letters, digits, `_` and `-`.
fn validate_name(key: &str, name: &str) -> Result<(), ConfigError> {
    if name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            key: key.to_string(),
            reason: format!("'{}' must contain only letters, digits, '_' or '-'", name),
        })
    }
}
