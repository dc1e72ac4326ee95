//! Remembery command line interface.
//!
//! Four subcommands: `name` (onboarding), `log` (record a memory,
//! optionally with a photo reference), `list` (filtered, sorted browsing),
//! and `forget` (delete).

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::{Parser, Subcommand};
use remembery_config::{RememberyConfig, default_data_dir};
use remembery_store::{FileKeyValueStore, IdentityStore, MemoryRecord, MemoryStore, SortOrder};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "remembery")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Local-first memory logger", long_about = None)]
struct Cli {
    /// Path to a config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the data directory holding the record store
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set or show the display name
    Name {
        /// Name to store; omit to show the current one
        name: Option<String>,
    },

    /// Log a new memory
    Log {
        /// What to remember
        text: String,

        /// Attach a photo by file path
        #[arg(long)]
        photo: Option<PathBuf>,
    },

    /// List memories, newest first unless configured otherwise
    List {
        /// Only show memories whose text contains this query
        #[arg(long)]
        query: Option<String>,

        /// Sort oldest first
        #[arg(long)]
        oldest_first: bool,
    },

    /// Delete a memory by id
    Forget {
        /// Id shown by `list`
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    remembery::init_logging();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let data_dir = resolve_data_dir(cli.data_dir.clone(), &config)?;
    let kv = FileKeyValueStore::new(&data_dir)
        .with_context(|| format!("could not open data directory {}", data_dir.display()))?;
    let store = MemoryStore::new(kv.clone());
    let identity = IdentityStore::new(kv);

    match cli.command {
        Commands::Name { name: Some(name) } => {
            let stored = identity.set_name(&name).await?;
            println!("Nice to meet you, {stored}.");
        }
        Commands::Name { name: None } => match identity.name().await? {
            Some(name) => println!("{name}"),
            None => println!("No name set yet."),
        },
        Commands::Log { text, photo } => {
            let image = photo.as_deref().map(resolve_photo).transpose()?;
            let name = identity
                .name()
                .await?
                .unwrap_or_else(|| "there".to_string());
            let record = store.remember(&text, image).await?;
            println!("Hey {name} -- saved! Memory {} stored.", record.id);
        }
        Commands::List {
            query,
            oldest_first,
        } => {
            let order = if oldest_first {
                SortOrder::OldestFirst
            } else if config.newest_first {
                SortOrder::NewestFirst
            } else {
                SortOrder::OldestFirst
            };
            let records = store.recall(query.as_deref(), order).await?;
            print_records(&records);
        }
        Commands::Forget { id } => {
            if store.forget(id).await? {
                println!("Deleted! Memory removed.");
            } else {
                println!("No memory with id {id}.");
            }
        }
    }

    Ok(())
}

/// Load an explicit config file, or the default one if present.
fn load_config(path: Option<&Path>) -> Result<RememberyConfig> {
    let config = match path {
        Some(path) => RememberyConfig::load_from_path(path)
            .with_context(|| format!("could not load config {}", path.display()))?,
        None => RememberyConfig::load_default().context("could not load default config")?,
    };
    Ok(config)
}

/// Pick the data directory: flag, then config, then the platform default.
fn resolve_data_dir(flag: Option<PathBuf>, config: &RememberyConfig) -> Result<PathBuf> {
    flag.or_else(|| config.data_dir.clone())
        .or_else(default_data_dir)
        .context("could not determine a data directory; pass --data-dir")
}

/// Resolve a photo path to the opaque reference stored on the record.
///
/// The store never inspects the reference, so the existence check lives
/// here at the presentation boundary.
fn resolve_photo(path: &Path) -> Result<String> {
    let metadata = std::fs::metadata(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => {
            anyhow::anyhow!("photo not found: {}", path.display())
        }
        std::io::ErrorKind::PermissionDenied => {
            anyhow::anyhow!("photo access denied: {}", path.display())
        }
        _ => anyhow::Error::new(err).context(format!("could not read photo {}", path.display())),
    })?;
    if !metadata.is_file() {
        bail!("photo is not a file: {}", path.display());
    }
    let canonical = path
        .canonicalize()
        .with_context(|| format!("could not resolve photo path {}", path.display()))?;
    Ok(format!("file://{}", canonical.display()))
}

fn print_records(records: &[MemoryRecord]) {
    if records.is_empty() {
        println!("No memories yet. Start logging your stuff!");
        return;
    }
    for record in records {
        let marker = if record.has_image() { "  [photo]" } else { "" };
        println!(
            "{}  {}  {}{}",
            record.id,
            record.time.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
            record.text,
            marker
        );
    }
}
