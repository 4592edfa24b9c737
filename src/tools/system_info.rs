// ABOUTME: SystemInfoTool - reports basic facts about the host and build.
// ABOUTME: Returns the facts as pretty JSON plus per-key result metadata.

use async_trait::async_trait;
use serde::Serialize;

use crate::tool::{Tool, ToolResult};

/// Host and build facts, valid at the moment they were collected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemInfo {
    pub rust_version: String,
    pub crate_version: String,
    pub platform: String,
    pub os: String,
    pub family: String,
    pub architecture: String,
    pub processor: String,
    pub agent_status: String,
}

impl SystemInfo {
    /// Every key present in the serialized form.
    pub const KEYS: [&'static str; 8] = [
        "rust_version",
        "crate_version",
        "platform",
        "os",
        "family",
        "architecture",
        "processor",
        "agent_status",
    ];

    /// Collect facts about the running process.
    pub fn collect() -> Self {
        use std::env::consts::{ARCH, FAMILY, OS};

        let processor = match std::thread::available_parallelism() {
            Ok(n) => format!("{} ({} logical cores)", ARCH, n),
            Err(_) => ARCH.to_string(),
        };

        Self {
            rust_version: option_env!("CHECKUP_RUSTC_VERSION")
                .unwrap_or("unknown")
                .to_string(),
            crate_version: env!("CARGO_PKG_VERSION").to_string(),
            platform: format!("{}-{}", OS, ARCH),
            os: OS.to_string(),
            family: FAMILY.to_string(),
            architecture: ARCH.to_string(),
            processor,
            agent_status: "running".to_string(),
        }
    }
}

/// Tool reporting [`SystemInfo`].
pub struct SystemInfoTool;

#[async_trait]
impl Tool for SystemInfoTool {
    fn name(&self) -> &str {
        "get_system_info"
    }

    fn description(&self) -> &str {
        "Get basic system information to verify the environment. Returns OS, architecture, toolchain and agent status."
    }

    async fn execute(&self, _params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        let info = SystemInfo::collect();
        let value = serde_json::to_value(&info)?;
        let content = serde_json::to_string_pretty(&value)?;

        let mut result = ToolResult::text(content);
        if let serde_json::Value::Object(map) = value {
            for (key, v) in map {
                result = result.with_metadata(key, v);
            }
        }
        Ok(result)
    }
}
