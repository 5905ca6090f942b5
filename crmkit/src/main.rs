//! crmkit-inspect
//!
//! Checks a saved API or widget payload against its schema:
//!
//!   crmkit-inspect --kind leads leads.json
//!   crmkit-inspect --kind leads --definitions custom_fields.json leads.json
//!
//! Exits non-zero when the payload does not match.

use anyhow::{Context, Result};
use clap::Parser;
use crmkit::inspect::{self, PayloadKind};
use std::{fs, path::PathBuf};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "crmkit-inspect")]
#[command(about = "Check CRM API and widget payloads against their schemas")]
struct Args {
    /// Schema to check the payload against
    #[arg(short, long, value_enum)]
    kind: PayloadKind,

    /// Custom field definitions to decode entity values with
    #[arg(short, long)]
    definitions: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Payload file (JSON)
    path: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let definitions = args
        .definitions
        .as_deref()
        .map(inspect::load_definitions)
        .transpose()?;

    let payload = fs::read_to_string(&args.path)
        .with_context(|| format!("reading {}", args.path.display()))?;

    match inspect::inspect(args.kind, &payload, definitions.as_ref()) {
        Ok(summary) => {
            info!(
                path = %args.path.display(),
                records = summary.records,
                warnings = summary.warnings.len(),
                "OK"
            );
            Ok(())
        }
        Err(e) => {
            error!(path = %args.path.display(), "{e:#}");
            Err(e)
        }
    }
}
