use clap::Parser;
use std::env;

use crate::cli::command::Command;
use crate::query::DEFAULT_PAGE_UNIT;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Serve a read-only catalog of land titles over HTTP",
    long_about = "Serves land-title records from a SQLite database through a small REST API with filtering, multi-key sorting and paging.",
    subcommand_required = false,
    arg_required_else_help = false
)]
pub struct Cli {
    #[arg(
        long = "db-path",
        env = "TITLES_DB_PATH",
        default_value = "titles.sqlite",
        value_name = "PATH",
        help = "SQLite database holding the titles table"
    )]
    pub db_path: String,

    #[arg(
        long = "api-listen",
        env = "TITLES_API_LISTEN",
        value_name = "ADDR",
        default_value = "127.0.0.1:8000",
        help = "REST API listen address (host:port)"
    )]
    pub api_listen: std::net::SocketAddr,

    #[arg(
        long = "page-unit",
        env = "TITLES_PAGE_UNIT",
        default_value_t = DEFAULT_PAGE_UNIT,
        value_parser = clap::value_parser!(u32).range(1..),
        value_name = "ROWS",
        help = "Rows per page used to turn _page into an offset"
    )]
    pub page_unit: u32,

    #[arg(
        long = "max-limit",
        env = "TITLES_MAX_LIMIT",
        value_name = "ROWS",
        help = "Reject list requests whose _limit exceeds ROWS (unbounded when unset)"
    )]
    pub max_limit: Option<u32>,

    #[arg(
        long,
        default_value_t = false,
        help = "Reset all persisted state (delete the SQLite database) before starting"
    )]
    pub reset: bool,

    #[arg(
        long = "log-file",
        env = "TITLES_LOG_FILE",
        value_name = "PATH",
        help = "Write logs to PATH (in addition to stderr)"
    )]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

pub fn parse() -> Cli {
    let dotenv_path = env::var("DOTENV_PATH").unwrap_or(".env".into());
    if dotenvy::from_filename(&dotenv_path).is_ok() {
        log::info!("Loaded env from {}", dotenv_path);
    }
    Cli::parse()
}
