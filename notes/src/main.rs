use anyhow::Result;

use notes::logging::init_logging;
use notes::App;

#[tokio::main]
async fn main() -> Result<()> {
    let (log_path, _log_guard) = init_logging()?;
    tracing::info!("Logging to {}", log_path.display());

    let (settings, gateway) = notes_auth::init()?;

    App::new(settings, gateway).run().await?;

    Ok(())
}
