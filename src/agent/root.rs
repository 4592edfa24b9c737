// ABOUTME: Root agent factory - the exported test agent with every built-in tool.
// ABOUTME: Builds from AgentConfig and registers the five tools in a fixed order.

use std::sync::Arc;

use super::Agent;
use crate::config::AgentConfig;
use crate::tool::Tool;
use crate::tools::{CalculateTool, EchoMessageTool, GreetTool, HelloWorldTool, SystemInfoTool};

/// The five built-in tools, in registration order.
pub fn builtin_tools() -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(HelloWorldTool),
        Arc::new(SystemInfoTool),
        Arc::new(CalculateTool),
        Arc::new(EchoMessageTool),
        Arc::new(GreetTool),
    ]
}

/// Build the root agent from config and register all built-in tools.
pub async fn root_agent(config: AgentConfig) -> Agent {
    let agent = Agent::from_config(config);
    for tool in builtin_tools() {
        agent.tool_arc(tool).await;
    }
    let tools = agent.registry().count().await;
    tracing::info!(
        agent = %agent.name,
        model = %agent.llm.model,
        tools,
        "root agent ready"
    );
    agent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_root_agent_has_all_tools() {
        let agent = root_agent(AgentConfig::default()).await;
        assert_eq!(
            agent.tool_names().await,
            vec![
                "calculate",
                "echo_message",
                "get_system_info",
                "greet",
                "hello_world"
            ]
        );
    }

    #[tokio::test]
    async fn test_root_agent_definitions_carry_schemas() {
        let agent = root_agent(AgentConfig::default()).await;
        let defs = agent.definitions().await;
        let calc = defs.iter().find(|d| d.name == "calculate").unwrap();
        assert_eq!(calc.input_schema["required"][0], "expression");
        assert!(defs.iter().all(|d| !d.description.is_empty()));
    }
}
