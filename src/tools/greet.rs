// ABOUTME: GreetTool - answers simple greetings with a fixed response.
// ABOUTME: Takes no parameters; any that are passed are ignored.

use async_trait::async_trait;

use crate::tool::{Tool, ToolResult};

pub const GREETING: &str = "Hello! I'm a test agent. How can I help you today?";

/// Tool for handling simple greetings.
pub struct GreetTool;

#[async_trait]
impl Tool for GreetTool {
    fn name(&self) -> &str {
        "greet"
    }

    fn description(&self) -> &str {
        "Handle simple greetings. Returns a greeting response."
    }

    async fn execute(&self, _params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        Ok(ToolResult::text(GREETING))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_greet_ignores_params() {
        let result = GreetTool
            .execute(serde_json::json!({"unused": true}))
            .await
            .unwrap();
        assert_eq!(
            result.content,
            "Hello! I'm a test agent. How can I help you today?"
        );
    }
}
