use std::io::{self, Write};
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use logmine::config::{Config, InputFormat, OutputFormat};
use logmine::report::{render_json, render_text, summarize};
use logmine::sources::{JsonMessageSource, PlainTextSource};
use logmine::traits::LineSource;
use logmine::LogMiner;

fn main() {
    // Optional .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            tracing::error!("Supported environment variables:");
            tracing::error!("   - LOGMINE_INPUT: log file to read (optional, default: stdin)");
            tracing::error!("   - LOGMINE_FORMAT: text or json (optional, default: text)");
            tracing::error!("   - LOGMINE_OUTPUT: text or json (optional, default: text)");
            tracing::error!("   - LOGMINE_MAX_DISTANCE: clustering threshold in [0, 1] (optional, default: 0.5)");
            std::process::exit(2);
        }
    };

    config.log_config();

    if let Err(e) = run(&config) {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn open_source(config: &Config) -> Result<Box<dyn LineSource>> {
    let source: Box<dyn LineSource> = match (&config.input, config.input_format) {
        (Some(path), InputFormat::Text) => Box::new(PlainTextSource::from_path(path)),
        (Some(path), InputFormat::Json) => Box::new(JsonMessageSource::from_path(path)),
        (None, InputFormat::Text) => Box::new(PlainTextSource::from_reader("<stdin>", io::stdin())?),
        (None, InputFormat::Json) => Box::new(JsonMessageSource::from_reader("<stdin>", io::stdin())?),
    };
    Ok(source)
}

fn run(config: &Config) -> Result<()> {
    let source = open_source(config)?;
    let lines = source.load_lines()?;
    info!("Loaded {} lines from {}", lines.len(), source.name());

    let start = Instant::now();
    let mut miner = LogMiner::with_config(config.miner_config());
    miner.add_all(&lines);
    let elapsed = start.elapsed();

    info!(
        "Mined {} clusters from {} lines in {:.2?}",
        miner.cluster_count(),
        miner.line_count(),
        elapsed
    );

    let summaries = summarize(&miner);
    let rendered = match config.output_format {
        OutputFormat::Text => render_text(&summaries),
        OutputFormat::Json => render_json(&summaries)? + "\n",
    };

    io::stdout().lock().write_all(rendered.as_bytes())?;
    Ok(())
}
