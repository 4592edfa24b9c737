// ABOUTME: LLM module - the model-facing shapes an agent hands to a provider.
// ABOUTME: Holds tool definitions and model configuration; no client lives here.

mod types;

pub use types::*;
