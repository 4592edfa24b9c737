// ABOUTME: Agent module - the container that owns configuration and tools.
// ABOUTME: Provides Agent, call dispatch by tool name, and the root agent factory.

mod definition;
mod root;

pub use definition::Agent;
pub use root::{builtin_tools, root_agent};
