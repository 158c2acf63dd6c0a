use appfit::app::App;
use appfit::config::AppConfig;
use appfit::{logging, Result};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("appfit: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config = AppConfig::load()?;
    if let Err(err) = logging::init(&config) {
        eprintln!("appfit: logging disabled: {}", err);
    }
    tracing::info!(?config, "starting");

    // The single application instance for this process
    let mut app = App::new(&config)?;
    app.init()?;
    let outcome = app.run().await;
    app.restore()?;

    tracing::info!("shutdown");
    outcome
}
