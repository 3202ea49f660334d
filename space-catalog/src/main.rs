mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use shared::models::Period;
use space_catalog::{CatalogError, Config, init_logger_with_file};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "space-catalog")]
#[command(about = "Browse rentable spaces, quote prices and prepare rental requests")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Directory holding the local CSV tables")]
    pub data_dir: Option<String>,
    #[arg(long, global = true, help = "Load from the published sheet export")]
    pub remote: bool,
    #[arg(long, short, global = true, value_enum, default_value = "text", help = "Output format")]
    pub format: OutputFormat,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List spaces, optionally filtered by a search term")]
    List {
        #[arg(long, short, help = "Case-insensitive search term")]
        search: Option<String>,
    },
    #[command(about = "Show one space with its equipment and prices")]
    Show {
        #[arg(help = "Space name")]
        name: String,
    },
    #[command(about = "Price a rental and build the request link")]
    Quote {
        #[arg(help = "Space name")]
        name: String,
        #[arg(long, short, default_value = "half-day", help = "half-day or full-day")]
        period: Period,
        #[arg(long = "equipment", short, value_name = "NAME", help = "Add-on equipment (repeatable)")]
        equipment: Vec<String>,
    },
    #[command(about = "List available periods grouped by space")]
    Periods,
    #[command(about = "List spaces from the legacy single-table export")]
    Legacy,
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 1. 环境 (.env 可选)
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    // 2. 配置 + 日志
    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if cli.remote {
        config.use_remote_sheet = true;
    }
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    // 3. 执行命令
    let result = match cli.command {
        Commands::List { search } => {
            commands::list::run(&config, search.as_deref(), cli.format).await
        }
        Commands::Show { name } => commands::show::run(&config, &name, cli.format).await,
        Commands::Quote {
            name,
            period,
            equipment,
        } => commands::quote::run(&config, &name, period, &equipment, cli.format).await,
        Commands::Periods => commands::periods::run(&config, cli.format).await,
        Commands::Legacy => commands::legacy::run(&config, cli.format).await,
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            if is_data_unavailable(&e) {
                eprintln!("Dados indisponíveis: {:#}", e);
                ExitCode::from(3)
            } else {
                eprintln!("Error: {:#}", e);
                ExitCode::from(2)
            }
        }
    }
}

/// Load failures are reported apart from usage errors and empty results
fn is_data_unavailable(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<CatalogError>()
            .is_some_and(|e| !matches!(e, CatalogError::Config(_)))
    })
}
