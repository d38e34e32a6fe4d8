use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

mod parse;

#[derive(Parser, Debug)]
#[command(name = "unshard")]
#[command(about = "recover a shamir-style secret from partially corrupted shares", long_about = None)]
struct Args {
    /// share bundle file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// emit the report as json instead of the text lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // diagnostics go to stderr so the report stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "unshard=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let raw = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let set = parse::parse_bundle(&raw)?;
    info!(
        declared_n = set.declared_n(),
        k = set.threshold(),
        decoded = set.shares().len(),
        "parsed share bundle"
    );

    let report = unshard::recover(&set)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
