// ABOUTME: EchoMessageTool - echoes a message back with an "Echo: " label.
// ABOUTME: Exercises string parameter handling end to end.

use async_trait::async_trait;
use serde::Deserialize;

use crate::tool::{Tool, ToolResult, parse_params};

/// Tool that echoes its input.
pub struct EchoMessageTool;

#[async_trait]
impl Tool for EchoMessageTool {
    fn name(&self) -> &str {
        "echo_message"
    }

    fn description(&self) -> &str {
        "Echo back a message to test string handling. Returns the echoed message."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "message": {
                    "type": "string",
                    "description": "Message to echo back"
                }
            },
            "required": ["message"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            message: String,
        }
        let params: Params = parse_params(params)?;

        Ok(ToolResult::text(format!("Echo: {}", params.message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echo() {
        let result = EchoMessageTool
            .execute(serde_json::json!({"message": "hello there"}))
            .await
            .unwrap();
        assert_eq!(result.content, "Echo: hello there");
    }

    #[tokio::test]
    async fn test_echo_keeps_input_verbatim() {
        let result = EchoMessageTool
            .execute(serde_json::json!({"message": "  ünïcode\nline "}))
            .await
            .unwrap();
        assert_eq!(result.content, "Echo:   ünïcode\nline ");

        let empty = EchoMessageTool
            .execute(serde_json::json!({"message": ""}))
            .await
            .unwrap();
        assert_eq!(empty.content, "Echo: ");
    }

    #[tokio::test]
    async fn test_echo_missing_message() {
        let result = EchoMessageTool.execute(serde_json::json!({})).await;
        assert!(result.is_err());
    }
}
