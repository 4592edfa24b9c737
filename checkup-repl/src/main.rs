// ABOUTME: REPL for checking an agent environment by calling tools by hand.
// ABOUTME: Loads .env, builds the root agent, then dispatches typed-in tool calls.

use anyhow::Result;
use rustyline::DefaultEditor;
use serde_json::Value;

use checkup::prelude::*;

const HELP: &str = "\
Commands:
  <tool> [json]   call a tool, e.g. calculate {\"expression\": \"2 + 2\"}
  <tool> <text>   call a tool with one string parameter, e.g. echo_message hi
  tools           list tools with descriptions
  help            show this message
  quit | exit     leave";

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "checkup=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Name of the sole required string parameter, if the schema has exactly one.
fn single_string_param(schema: &Value) -> Option<&str> {
    let required = schema["required"].as_array()?;
    let [name] = required.as_slice() else {
        return None;
    };
    let name = name.as_str()?;
    (schema["properties"][name]["type"] == "string").then_some(name)
}

/// Turn the text after the tool name into call parameters.
fn parse_params(schema: &Value, rest: &str) -> Result<Value> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Ok(serde_json::json!({}));
    }
    if rest.starts_with('{') {
        return Ok(serde_json::from_str(rest)?);
    }
    let Some(name) = single_string_param(schema) else {
        anyhow::bail!("expected JSON object parameters");
    };
    let mut params = serde_json::Map::new();
    params.insert(name.to_string(), Value::String(rest.to_string()));
    Ok(Value::Object(params))
}

async fn print_banner(agent: &Agent) {
    println!("Test agent loaded successfully!");
    println!("Agent name: {}", agent.name);
    println!("Agent description: {}", agent.description);
    println!("Available tools: {:?}", agent.tool_names().await);
}

async fn print_tools(agent: &Agent) {
    for def in agent.definitions().await {
        println!("  {:<16} {}", def.name, def.description);
    }
}

async fn handle_line(agent: &Agent, line: &str) -> Result<()> {
    let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    let Some(tool) = agent.registry().get(name).await else {
        println!("Unknown tool '{}'. Type 'tools' to list them.", name);
        return Ok(());
    };
    let params = parse_params(&tool.schema(), rest)?;

    match agent.call(name, params).await {
        Ok(result) if result.is_error => println!("[error] {}", result.content),
        Ok(result) => println!("{}", result.content),
        Err(e) => println!("[error] {}", e),
    }
    Ok(())
}

async fn run_repl(agent: &Agent) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    println!("\nType 'help' for commands, 'quit' to exit.\n");

    loop {
        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(_) => break,
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(line);

        match line {
            "quit" | "exit" => break,
            "help" => println!("{}", HELP),
            "tools" => print_tools(agent).await,
            _ => {
                if let Err(e) = handle_line(agent, line).await {
                    println!("[error] {}", e);
                }
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = AgentConfig::from_env()?;
    let agent = root_agent(config).await;

    print_banner(&agent).await;

    if std::env::args().skip(1).any(|arg| arg == "--list") {
        return Ok(());
    }

    run_repl(&agent).await
}
