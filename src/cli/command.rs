use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(
        about = "Load titles from a JSON file",
        long_about = "Replace the contents of the titles table with the records in FILE, a JSON array of objects with id, title_number, title_class and content."
    )]
    Load {
        #[arg(value_name = "FILE", help = "JSON array of title records")]
        file: PathBuf,
    },
}
