//! Command-line interface for lira-config
//!
//! A single-purpose tool: five required flags in, one JSON document out.
//! The flag spellings are the surface deployment scripts already call, so
//! they keep their underscores instead of clap's kebab-case default.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::assemble::assemble;
use crate::config::{load_env_config, load_secrets_config};
use crate::domain::PathPrefixes;
use crate::render::render_json;

/// Assemble the Lira workflow-submission service configuration document
#[derive(Parser)]
#[command(name = "lira-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Environment configuration JSON (env name and subscription ids)
    #[arg(long = "env_config_file", value_name = "FILE")]
    pub env_config_file: PathBuf,

    /// Secrets JSON, merged verbatim into the output
    #[arg(long = "secrets_file", value_name = "FILE")]
    pub secrets_file: PathBuf,

    /// Base location of the adapter pipeline WDLs
    #[arg(long = "pipeline_tools_prefix", value_name = "PREFIX")]
    pub pipeline_tools_prefix: String,

    /// Base location of the 10x count analysis pipeline
    #[arg(long = "tenx_prefix", value_name = "PREFIX")]
    pub tenx_prefix: String,

    /// Base location of the Smart-seq2 analysis pipeline
    #[arg(long = "ss2_prefix", value_name = "PREFIX")]
    pub ss2_prefix: String,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let env_config = load_env_config(&cli.env_config_file)?;
    let secrets = load_secrets_config(&cli.secrets_file)?;
    let prefixes = PathPrefixes {
        pipeline_tools: cli.pipeline_tools_prefix,
        tenx: cli.tenx_prefix,
        ss2: cli.ss2_prefix,
    };

    let config = assemble(&prefixes, &env_config, secrets);

    // Stdout carries the document and nothing else; logs go to stderr.
    println!("{}", render_json(&config)?);
    Ok(())
}
