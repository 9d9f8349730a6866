mod observability;
mod table;
mod tui;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use hoteldash_core::{DashboardConfig, FileRecordRepository, RecordStore, SampleRecordRepository, Tab};

use crate::observability::{init_tracing, LogTarget};

#[derive(Parser)]
#[command(name = "hoteldash")]
#[command(about = "Hotel utility usage dashboard", long_about = None)]
struct Cli {
    /// JSON file of daily records (defaults to the built-in sample week)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Config file (defaults to $HOTELDASH_CONFIG or ~/.hoteldash/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive dashboard (default)
    Tui,
    /// Print total, average and peak figures
    Summary,
    /// Print the records, or one tab's view with --tab
    Table {
        /// electricity, gas, utilization or correlation
        #[arg(long)]
        tab: Option<String>,
    },
}

fn load_store(data_file: Option<&Path>) -> RecordStore {
    match data_file {
        Some(path) => RecordStore::load(&FileRecordRepository::new(path)),
        None => RecordStore::load(&SampleRecordRepository),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = DashboardConfig::load(cli.config.as_deref())?;
    let data_file = cli.data.or_else(|| config.data_file.clone());

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            init_tracing(LogTarget::File(config.log_file_path()?))?;
            let store = load_store(data_file.as_deref());
            tui::run(store, Duration::from_millis(config.tick_rate_ms))?;
        }
        Commands::Summary => {
            init_tracing(LogTarget::Stderr)?;
            let store = load_store(data_file.as_deref());
            for line in table::summary_lines(&store.summary(), &store.insights()) {
                println!("{}", line);
            }
        }
        Commands::Table { tab } => {
            init_tracing(LogTarget::Stderr)?;
            let tab = tab.map(|t| t.parse::<Tab>()).transpose()?;
            let store = load_store(data_file.as_deref());
            if store.is_empty() {
                println!("No records found.");
                return Ok(());
            }
            match tab {
                Some(tab) => println!("{}", table::projection_table(&store.projection(tab))),
                None => println!("{}", table::records_table(store.records())),
            }
        }
    }
    Ok(())
}
