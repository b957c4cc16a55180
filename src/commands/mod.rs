use crate::cli::Command;
use crate::context;

pub mod load;

pub trait CommandRunner {
    fn run(&self, ctx: &context::Context) -> anyhow::Result<()>;
}

impl Command {
    pub fn run(&self, ctx: &context::Context) -> anyhow::Result<()> {
        match self {
            Command::Load { file } => load::LoadTitles { file }.run(ctx),
        }
    }
}
