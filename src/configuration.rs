use std::net::SocketAddr;
use std::path::PathBuf;

use crate::query::QueryLimits;

#[derive(Clone, Debug)]
pub struct Configuration {
    pub db_path: PathBuf,
    pub api_listen: SocketAddr,
    pub limits: QueryLimits,
    pub log_file: Option<PathBuf>,
    pub reset: bool,
}
