mod wiring;

use crate::{cli, context, rest, storage};
use anyhow::{Context as AnyhowContext, Result};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub struct App {
    pub ctx: context::Context,
}

impl App {
    pub fn from_cli() -> Result<(Self, cli::Cli)> {
        let cli = crate::cli::parse();
        let ctx = context::Context::from_cli(&cli);

        crate::tracing::set_log_file(ctx.config.log_file.as_deref())
            .context("configuring log file")?;
        log::info!("🚀 Starting title-catalog");
        log::info!("📂 Database: {}", ctx.config.db_path.display());

        wiring::init_data_dir(&ctx).context("initializing data dir")?;

        Ok((Self { ctx }, cli))
    }

    fn init_storage(&self) -> Result<Arc<storage::SqliteStorage>> {
        wiring::init_storage(&self.ctx)
    }
}

pub async fn run_server(app: App) -> Result<()> {
    let config = &app.ctx.config;
    log::info!("🌐 REST API: http://{}", config.api_listen);
    log::info!("📄 Page unit: {}", config.limits.page_unit);
    match config.limits.max_limit {
        Some(max) => log::info!("📏 Max limit: {}", max),
        None => log::info!("📏 Max limit: unbounded"),
    }
    if let Some(path) = config.log_file.as_deref() {
        log::info!("📝 Log file: {}", path.display());
    }

    let storage = app.init_storage()?;
    let shutdown = CancellationToken::new();

    let rest_shutdown = shutdown.clone();
    let addr = config.api_listen;
    let limits = config.limits;
    let mut rest_handle = tokio::spawn(async move {
        if let Err(e) = rest::serve(addr, storage, limits, rest_shutdown).await {
            log::error!("REST server failed: {:#}", e);
        }
    });

    tokio::select! {
        _ = tokio::signal::ctrl_c() => log::info!("🧨 Ctrl-C received, shutting down..."),
        _ = &mut rest_handle => log::error!("REST task exited unexpectedly"),
    }

    shutdown.cancel();
    if !rest_handle.is_finished() {
        rest_handle.await.context("joining REST task")?;
    }

    log::info!("✅ Shutdown complete");
    Ok(())
}

pub async fn run() -> Result<()> {
    let (app, cli) = App::from_cli()?;

    if let Some(cmd) = &cli.cmd {
        if app.ctx.config.reset {
            app.init_storage()?;
        }
        cmd.run(&app.ctx)?;
        return Ok(());
    }

    run_server(app).await
}
