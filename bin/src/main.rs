//! bestchange CLI - Query the BestChange exchange rates bundle.

use anyhow::Result;
use bestchange_lib::prelude::*;
use clap::{CommandFactory, Parser, Subcommand};
use directories::ProjectDirs;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "bestchange")]
#[command(about = "Query the BestChange exchange rates bundle", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    format: Format,

    /// Cache file path. Defaults to the platform cache directory.
    #[arg(long, global = true)]
    cache: Option<PathBuf>,

    /// Always download the bundle, keeping nothing on disk
    #[arg(long, global = true, conflicts_with = "cache")]
    no_cache: bool,

    /// Seconds a cached bundle stays fresh
    #[arg(long, default_value = "3600", global = true)]
    ttl: u64,

    /// Download timeout in seconds
    #[arg(long, default_value = "25", global = true)]
    timeout: u64,

    /// Bundle URL
    #[arg(long, global = true)]
    url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show bundle version, update time and record counts
    Info,

    /// List currencies
    Currencies {
        /// Case-insensitive name filter
        #[arg(short, long)]
        search: Option<String>,
    },

    /// List exchangers
    Exchangers {
        /// Case-insensitive name filter
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show rates quoted from a currency
    Rates {
        /// Source currency id
        #[arg(long)]
        from: u32,

        /// Target currency id
        #[arg(long)]
        to: Option<u32>,

        /// Exchanger id
        #[arg(long)]
        exchanger: Option<u32>,
    },

    /// Look up a single record by id
    Lookup {
        /// Record id
        id: u32,

        /// Table to search (currencies, exchangers, rates)
        #[arg(short, long, default_value = "currencies")]
        kind: LookupKind,
    },
}

impl Cli {
    fn config(&self) -> BestChangeConfig {
        let mut config = BestChangeConfig::new().with_timeout(Duration::from_secs(self.timeout));
        if !self.no_cache {
            let path = self.cache.clone().unwrap_or_else(default_cache_path);
            config = config.with_cache(path, Duration::from_secs(self.ttl));
        }
        if let Some(url) = &self.url {
            config = config.with_url(url.clone());
        }
        config
    }
}

/// Returns the default cache file location.
///
/// - Linux: `~/.cache/bestchange/info.zip`
/// - macOS: `~/Library/Caches/bestchange/info.zip`
/// - Windows: `C:\Users\<User>\AppData\Local\bestchange\cache\info.zip`
fn default_cache_path() -> PathBuf {
    ProjectDirs::from("", "", "bestchange")
        .map_or_else(cache_fallback, |dirs| dirs.cache_dir().to_path_buf())
        .join("info.zip")
}

fn cache_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".bestchange")
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let client = commands::load(cli.config()).await?;

    match command {
        Commands::Info => commands::info::show_info(&client, cli.format),
        Commands::Currencies { search } => {
            commands::currencies::list_currencies(&client, search.as_deref(), cli.format)
        }
        Commands::Exchangers { search } => {
            commands::exchangers::list_exchangers(&client, search.as_deref(), cli.format)
        }
        Commands::Rates {
            from,
            to,
            exchanger,
        } => commands::rates::show_rates(&client, *from, *to, *exchanger, cli.format),
        Commands::Lookup { id, kind } => commands::lookup::lookup(&client, *id, *kind, cli.format),
    }
}
