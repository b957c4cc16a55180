#[tokio::main]
async fn main() -> anyhow::Result<()> {
    title_catalog::tracing::init();
    title_catalog::app::run().await
}
