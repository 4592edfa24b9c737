// ABOUTME: Root module for checkup - verifies an agent environment end to end.
// ABOUTME: Re-exports the agent, tool registry, built-in tools and calc engine.

pub mod agent;
pub mod calc;
pub mod config;
pub mod error;
pub mod llm;
pub mod prelude;
pub mod tool;
pub mod tools;

pub use agent::{Agent, root_agent};
pub use error::CheckupError;
