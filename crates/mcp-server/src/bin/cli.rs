use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use openbb_docs_mcp_server::{init_logging, Config, OpenBbDocsHandler};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(
    name = "openbb-docs-cli",
    about = "CLI tool for debugging the OpenBB documentation MCP tools",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, help = "Output format", default_value = "pretty")]
    format: OutputFormat,

    #[arg(short, long, help = "Set log level (overrides configuration)", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "List all available tools")]
    List,

    #[command(about = "Run a specific tool")]
    Run {
        #[arg(help = "Tool name (e.g., discover_openbb_sections)")]
        tool: String,

        #[arg(help = "Tool parameters as JSON string")]
        params: Option<String>,
    },

    #[command(about = "Show parameter schema for a tool")]
    Schema {
        #[arg(help = "Tool name")]
        tool: String,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
    Raw,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load()?;
    config.logging.level = cli.log_level.clone();
    config.logging.format = "compact".to_string();
    init_logging(&config.logging)?;

    let handler = OpenBbDocsHandler::new(config)?;

    match cli.command {
        Commands::List => list_tools(&handler, cli.format),
        Commands::Run { tool, params } => run_tool(&handler, &tool, params, cli.format).await,
        Commands::Schema { tool } => show_schema(&handler, &tool, cli.format),
    }
}

fn list_tools(handler: &OpenBbDocsHandler, format: OutputFormat) -> Result<()> {
    let tools = handler.get_available_tools();

    match format {
        OutputFormat::Json => {
            let json = json!({
                "tools": tools.iter().map(|tool| {
                    json!({
                        "name": tool.name,
                        "description": tool.description,
                    })
                }).collect::<Vec<_>>()
            });
            println!("{}", serde_json::to_string(&json)?);
        }
        OutputFormat::Pretty => {
            println!("Available tools:\n");
            for tool in tools {
                println!("  {} - {}", tool.name, tool.description);
            }
        }
        OutputFormat::Raw => {
            for tool in tools {
                println!("{}", tool.name);
            }
        }
    }

    Ok(())
}

async fn run_tool(
    handler: &OpenBbDocsHandler,
    tool_name: &str,
    params: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let params_json: Value = match params {
        Some(p) => serde_json::from_str(&p).context("Tool parameters must be valid JSON")?,
        None => json!({}),
    };

    let result = handler.execute_tool_directly(tool_name, params_json).await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&result)?);
        }
        OutputFormat::Pretty => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Raw => print_raw(&result),
    }

    Ok(())
}

/// Print the documentation text itself instead of the response envelope
fn print_raw(result: &Value) {
    if let Some(error) = result.get("error").and_then(Value::as_str) {
        eprintln!("error: {error}");
        return;
    }

    if let Some(toc) = result.get("raw_toc_content").and_then(Value::as_str) {
        println!("{toc}");
    } else if let Some(content) = result.get("content").and_then(Value::as_object) {
        for text in content.values().filter_map(Value::as_str) {
            println!("{text}\n");
        }
    } else if let Some(sections) = result.get("sections").and_then(Value::as_array) {
        for section in sections {
            let title = section["title"].as_str().unwrap_or_default();
            let url = section["url"].as_str().unwrap_or_default();
            println!("{title}\t{url}");
        }
    } else {
        println!("{result}");
    }
}

fn show_schema(handler: &OpenBbDocsHandler, tool_name: &str, format: OutputFormat) -> Result<()> {
    let schema = handler.get_tool_schema(tool_name)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&schema)?);
        }
        OutputFormat::Pretty => {
            println!("Schema for tool '{tool_name}':\n");
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        OutputFormat::Raw => {
            println!("{schema}");
        }
    }

    Ok(())
}
