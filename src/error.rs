// ABOUTME: Defines all error types for the checkup library using thiserror.
// ABOUTME: Each submodule has its own error enum, unified under CheckupError.

/// Top-level error type for the checkup library.
#[derive(Debug, thiserror::Error)]
pub enum CheckupError {
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("Calculation error: {0}")]
    Calc(#[from] CalcError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors from tool operations.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Execution failed: {0}")]
    Execution(#[source] anyhow::Error),
}

/// Errors from parsing or evaluating an arithmetic expression.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid number '{text}' at position {pos}")]
    InvalidNumber { text: String, pos: usize },

    #[error("unexpected '{token}' at position {pos}")]
    UnexpectedToken { token: String, pos: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow")]
    Overflow,

    #[error("result is not a finite number")]
    NotFinite,

    #[error("result is not a real number")]
    NotReal,

    #[error("expression nested deeper than {0} levels")]
    TooDeep(usize),
}

/// Errors from loading agent configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}
