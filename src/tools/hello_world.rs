// ABOUTME: HelloWorldTool - fixed greeting proving tool dispatch works.
// ABOUTME: Takes no parameters and cannot fail.

use async_trait::async_trait;

use crate::tool::{Tool, ToolResult};

/// Message returned by [`HelloWorldTool`].
pub const HELLO_WORLD_MESSAGE: &str =
    "Hello! This is a test message from your agent. The setup is working correctly!";

/// Tool returning a fixed greeting.
pub struct HelloWorldTool;

#[async_trait]
impl Tool for HelloWorldTool {
    fn name(&self) -> &str {
        "hello_world"
    }

    fn description(&self) -> &str {
        "A simple greeting function to test tool functionality. Returns a greeting message."
    }

    async fn execute(&self, _params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        Ok(ToolResult::text(HELLO_WORLD_MESSAGE))
    }
}
