//! Offline inspection of a durable paste database.
//!
//! Nothing here counts a view: reads go through [`AccessService::inspect`] and the
//! listing queries.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use pastebin_core::types::{Config, PasteSummary};
use pastebin_core::{AccessService, PasteDb};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::SystemTime;
use tracing::debug;

pub mod output;

use output::{ExpiredOutput, ListOutput, RecordOutput, print_output};

#[derive(Parser, Debug)]
#[command(name = "pastebin-admin", version, about = "Inspect a pastebin database")]
pub struct Cli {
    /// Directory holding `pastes.redb`.
    #[arg(long, env = "PASTEBIN_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List stored pastes with their status, newest first.
    List(ListArgs),

    /// Show one stored record, expired or not.
    Show {
        /// Paste id.
        id: String,
    },

    /// List pastes whose TTL deadline has passed.
    Expired,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only pastes whose id or content contains this text (case-insensitive).
    #[arg(long)]
    pub search: Option<String>,

    /// Only pastes still readable now.
    #[arg(long, conflicts_with = "expired")]
    pub active: bool,

    /// Only pastes no longer readable now.
    #[arg(long)]
    pub expired: bool,
}

impl ListArgs {
    fn keeps(&self, summary: &PasteSummary) -> bool {
        !(self.active && !summary.active) && !(self.expired && summary.active)
    }
}

pub fn run(cli: &Cli, out: &mut impl Write, now: SystemTime) -> anyhow::Result<()> {
    let config = Config {
        base_path: cli.data_dir.clone(),
    };
    let db = PasteDb::open(&config)
        .with_context(|| format!("opening {}", config.db_path().display()))?;
    debug!(path = %config.db_path().display(), "database opened");
    let service = AccessService::new(Arc::new(db));

    match &cli.command {
        Command::List(args) => {
            let mut summaries = match &args.search {
                Some(text) => service.search(text, now)?,
                None => service.summaries(now)?,
            };
            summaries.retain(|summary| args.keeps(summary));
            print_output(out, &ListOutput(summaries), cli.json)?;
        }
        Command::Show { id } => {
            let paste = service
                .inspect(id)
                .with_context(|| format!("paste {id}"))?;
            print_output(out, &RecordOutput { paste, now }, cli.json)?;
        }
        Command::Expired => {
            let ids = service.ttl_expired(now)?;
            print_output(out, &ExpiredOutput(ids), cli.json)?;
        }
    }

    Ok(())
}
