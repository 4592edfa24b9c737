// ABOUTME: CalculateTool - evaluates arithmetic with the calc engine.
// ABOUTME: Rejects non-arithmetic characters up front, reports failures as error results.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;

use crate::calc;
use crate::tool::{Tool, ToolResult, parse_params};

/// Characters an expression may contain at all.
static ALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9+\-*/(). ,]*$").expect("calculator whitelist pattern is valid")
});

pub const DISALLOWED_MESSAGE: &str = "Error: Only basic math operations are allowed";

/// Tool for simple arithmetic.
pub struct CalculateTool;

impl CalculateTool {
    /// Evaluate an expression into the user-facing result.
    pub fn calculate(expression: &str) -> ToolResult {
        if !ALLOWED.is_match(expression) {
            tracing::debug!(expression, "calculator rejected characters");
            return ToolResult::error(DISALLOWED_MESSAGE);
        }

        match calc::evaluate(expression) {
            Ok(value) => ToolResult::text(format!("Result: {} = {}", expression, value))
                .with_metadata("value", value.to_string()),
            Err(e) => ToolResult::error(format!("Error calculating '{}': {}", expression, e)),
        }
    }
}

#[async_trait]
impl Tool for CalculateTool {
    fn name(&self) -> &str {
        "calculate"
    }

    fn description(&self) -> &str {
        "Perform a simple calculation. Supports + - * / // ** and parentheses. Returns the result of the calculation."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "expression": {
                    "type": "string",
                    "description": "Mathematical expression to evaluate (e.g., \"2 + 2\")"
                }
            },
            "required": ["expression"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            expression: String,
        }
        let params: Params = parse_params(params)?;

        Ok(Self::calculate(&params.expression))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn run(expression: &str) -> ToolResult {
        CalculateTool
            .execute(serde_json::json!({ "expression": expression }))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_calculate_addition() {
        let result = run("2 + 2").await;
        assert!(!result.is_error);
        assert_eq!(result.content, "Result: 2 + 2 = 4");
        assert_eq!(result.metadata["value"], "4");
    }

    #[tokio::test]
    async fn test_calculate_division_formats_float() {
        let result = run("(1 + 2) / 2").await;
        assert_eq!(result.content, "Result: (1 + 2) / 2 = 1.5");
    }

    #[tokio::test]
    async fn test_calculate_rejects_disallowed_characters() {
        let result = run("import os").await;
        assert!(result.is_error);
        assert_eq!(result.content, DISALLOWED_MESSAGE);

        let result = run("2 + 2; rm").await;
        assert_eq!(result.content, DISALLOWED_MESSAGE);

        let result = run("true").await;
        assert_eq!(result.content, DISALLOWED_MESSAGE);
    }

    #[tokio::test]
    async fn test_calculate_malformed_expression() {
        let result = run("2 +").await;
        assert!(result.is_error);
        assert!(result.content.starts_with("Error calculating '2 +': "));
        assert!(result.content.contains("unexpected end"));
    }

    #[tokio::test]
    async fn test_calculate_division_by_zero() {
        let result = run("1/0").await;
        assert!(result.is_error);
        assert_eq!(result.content, "Error calculating '1/0': division by zero");
    }

    #[tokio::test]
    async fn test_calculate_comma_is_not_arithmetic() {
        let result = run("1, 2").await;
        assert!(result.is_error);
        assert!(result.content.contains("unexpected ','"));
    }

    #[tokio::test]
    async fn test_calculate_missing_expression() {
        let result = CalculateTool.execute(serde_json::json!({})).await;
        assert!(result.is_err());
    }
}
