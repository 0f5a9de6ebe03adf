use anyhow::Context;

mod app;
mod model;
mod sim;
mod ui;
mod util;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("situation room starting");

    app::run()
        .map_err(|e| anyhow::anyhow!(e.to_string()))
        .context("situation room UI failed")?;
    Ok(())
}
