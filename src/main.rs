use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use serde_json::json;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

mod cli;
mod config;

use cli::Cli;
use cli::commands::{AnalyzeMode, Commands};
use config::Config;
use paytrace::llm::{AnthropicClient, ContentBlock, LlmClient, Message, MessageContent};
use paytrace::prompt::{DEMO_CUSTOMER_QUERY, DEMO_PAYMENT_QUERY, DETAILED_SAMPLE_LOG, PromptVersion, SAMPLE_LOG};
use paytrace::report::{Analyzer, parse_payment_attempts, payment_attempt_schema, render_report, report_schema};
use paytrace::runner::{Investigation, Investigator};
use paytrace::store::RecordStore;
use paytrace::tools::{SubmitReportTool, Tool, ToolExecutor};

fn setup_logging(level: &str) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("paytrace")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("paytrace.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None => handle_demo_command(cli, config, false).await,
        Some(Commands::Investigate { query }) => handle_investigate_command(cli, config, query).await,
        Some(Commands::Demo { no_pause }) => handle_demo_command(cli, config, *no_pause).await,
        Some(Commands::Prompts {
            prompt_version,
            log,
            no_pause,
        }) => handle_prompts_command(cli, config, *prompt_version, log.as_deref(), *no_pause).await,
        Some(Commands::Analyze { mode, log, raw }) => {
            handle_analyze_command(cli, config, *mode, log.as_deref(), *raw).await
        }
        Some(Commands::Tools) => handle_tools_command(),
        Some(Commands::Schema { check }) => handle_schema_command(check.as_deref()),
    }
}

fn build_client(cli: &Cli, config: &Config) -> Result<AnthropicClient> {
    let anthropic = config.anthropic(cli.model.as_deref());
    info!("Using model {}", anthropic.model);
    AnthropicClient::new(anthropic).context("Failed to create Anthropic client")
}

fn read_log(path: Option<&Path>, default: &str) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).context(format!("Failed to read log file {}", path.display())),
        None => Ok(default.to_string()),
    }
}

fn pause(message: &str) -> Result<()> {
    print!("{}", message.dimmed());
    io::stdout().flush().context("Failed to flush stdout")?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).context("Failed to read stdin")?;
    Ok(())
}

fn print_header(title: &str) {
    println!();
    println!("{}", "=".repeat(70).cyan());
    println!("{}", title.bold());
    println!("{}", "=".repeat(70).cyan());
}

async fn investigate(client: Arc<AnthropicClient>, config: &Config, store: &RecordStore, query: &str) -> Result<Investigation> {
    let investigator = Investigator::with_config(client, store, ToolExecutor::standard(), config.investigator());
    investigator.run(query).await.context("Investigation failed")
}

fn print_investigation(query: &str, outcome: &Investigation, model: &str, verbose: bool) {
    println!("{} {}", "Question:".green().bold(), query);
    println!();

    for message in &outcome.history {
        print_tool_traffic(message, verbose);
    }

    println!();
    match &outcome.answer {
        Some(answer) => println!("{}\n{}", "Answer:".green().bold(), answer),
        None => println!("{}", "The model returned no text answer.".yellow()),
    }

    println!();
    println!(
        "{}",
        format!(
            "{} model call(s), {} tool round(s), {} tokens (~${:.4})",
            outcome.model_calls,
            outcome.tool_rounds,
            outcome.usage.total(),
            outcome.usage.cost_usd(model)
        )
        .dimmed()
    );
}

fn print_tool_traffic(message: &Message, verbose: bool) {
    let MessageContent::Blocks(blocks) = &message.content else {
        return;
    };

    for block in blocks {
        match block {
            ContentBlock::ToolUse { name, input, .. } => {
                println!("  {} {}({})", "→".cyan(), name.cyan(), input);
            }
            ContentBlock::ToolResult { content, is_error, .. } => {
                let status = if *is_error { "error".red() } else { "ok".green() };
                if verbose {
                    println!("  {} [{}] {}", "←".cyan(), status, content);
                } else {
                    println!("  {} [{}]", "←".cyan(), status);
                }
            }
            ContentBlock::Text { .. } => {}
        }
    }
}

async fn handle_investigate_command(cli: &Cli, config: &Config, query: &str) -> Result<()> {
    info!("Investigating: {}", query);
    let client = Arc::new(build_client(cli, config)?);
    let store = RecordStore::sample();

    let outcome = investigate(client.clone(), config, &store, query).await?;
    print_investigation(query, &outcome, client.model(), cli.is_verbose());
    Ok(())
}

async fn handle_demo_command(cli: &Cli, config: &Config, no_pause: bool) -> Result<()> {
    info!("Running demo investigations");
    let client = Arc::new(build_client(cli, config)?);
    let store = RecordStore::sample();

    let scenarios = [
        ("Demo 1: Payment investigation", DEMO_PAYMENT_QUERY),
        ("Demo 2: Customer history", DEMO_CUSTOMER_QUERY),
    ];

    for (i, (title, query)) in scenarios.iter().enumerate() {
        if i > 0 && !no_pause {
            pause("\nPress Enter to continue to the next investigation...")?;
        }
        print_header(title);
        let outcome = investigate(client.clone(), config, &store, query).await?;
        print_investigation(query, &outcome, client.model(), cli.is_verbose());
    }

    Ok(())
}

async fn handle_prompts_command(
    cli: &Cli,
    config: &Config,
    version: Option<PromptVersion>,
    log: Option<&Path>,
    no_pause: bool,
) -> Result<()> {
    let log = read_log(log, SAMPLE_LOG)?;
    let client = build_client(cli, config)?;
    let analyzer = Analyzer::new(&client);

    let versions: Vec<PromptVersion> = match version {
        Some(v) => vec![v],
        None => PromptVersion::ALL.to_vec(),
    };

    for (i, version) in versions.iter().enumerate() {
        if i > 0 && !no_pause {
            pause("\nPress Enter to run the next prompt version...")?;
        }
        print_header(version.label());

        let output = analyzer
            .run_prompt(*version, &log)
            .await
            .context(format!("Prompt {} failed", version))?;
        match output {
            Some(text) => println!("{}", text),
            None => println!("{}", "The model returned no text.".yellow()),
        }
    }

    Ok(())
}

async fn handle_analyze_command(
    cli: &Cli,
    config: &Config,
    mode: AnalyzeMode,
    log: Option<&Path>,
    raw: bool,
) -> Result<()> {
    info!("Analyzing log with mode {:?}", mode);
    let log = read_log(log, DETAILED_SAMPLE_LOG)?;
    let client = build_client(cli, config)?;
    let analyzer = Analyzer::new(&client);

    let report = match mode {
        AnalyzeMode::Unstructured => {
            let text = analyzer
                .analyze_unstructured(&log)
                .await
                .context("Unstructured analysis failed")?;
            println!("{}", text.unwrap_or_default());
            return Ok(());
        }
        AnalyzeMode::Json => analyzer
            .analyze_with_prompt_json(&log)
            .await
            .context("JSON analysis failed")?,
        AnalyzeMode::Tool => analyzer
            .analyze_with_tool(&log)
            .await
            .context("Tool-based analysis failed")?,
    };

    if raw {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }
    Ok(())
}

fn handle_tools_command() -> Result<()> {
    let catalog = json!({
        "investigation": ToolExecutor::standard().definitions(),
        "report": [SubmitReportTool.definition()],
    });
    println!("{}", serde_json::to_string_pretty(&catalog)?);
    Ok(())
}

fn handle_schema_command(check: Option<&Path>) -> Result<()> {
    if let Some(path) = check {
        info!("Validating payment attempts in {}", path.display());
        let content = fs::read_to_string(path).context(format!("Failed to read {}", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&content).context("Failed to parse attempts JSON")?;
        let attempts = parse_payment_attempts(&value).context(format!("Invalid payment attempts in {}", path.display()))?;
        println!("{} {} payment attempt(s) valid", "OK".green().bold(), attempts.len());
        return Ok(());
    }

    let schemas = json!({
        "PaymentInvestigationReport": report_schema(),
        "PaymentAttempt": payment_attempt_schema(),
    });
    println!("{}", serde_json::to_string_pretty(&schemas)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Setup logging; RUST_LOG still wins over the configured level
    let level = if cli.is_verbose() {
        "debug"
    } else {
        config.log_level.as_deref().unwrap_or("info")
    };
    setup_logging(level).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
