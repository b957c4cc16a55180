use std::path::PathBuf;

use crate::configuration::Configuration;
use crate::query::QueryLimits;

pub struct Context {
    pub config: Configuration,
}

impl Context {
    pub fn from_cli(cli: &crate::cli::Cli) -> Self {
        let cfg = Configuration {
            db_path: PathBuf::from(&cli.db_path),
            api_listen: cli.api_listen,
            limits: QueryLimits {
                page_unit: cli.page_unit,
                max_limit: cli.max_limit,
            },
            log_file: cli.log_file.as_ref().map(PathBuf::from),
            reset: cli.reset,
        };
        Self { config: cfg }
    }
}
