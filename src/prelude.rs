// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use checkup::prelude::*;` to get started quickly.

pub use crate::agent::{Agent, builtin_tools, root_agent};
pub use crate::calc::{Number, evaluate};
pub use crate::config::AgentConfig;
pub use crate::error::{CalcError, CheckupError, ConfigError, ToolError};
pub use crate::llm::{LlmConfig, ToolDefinition};
pub use crate::tool::{Registry, Tool, ToolResult};
pub use crate::tools::{
    CalculateTool, EchoMessageTool, GreetTool, HelloWorldTool, SystemInfo, SystemInfoTool,
};
