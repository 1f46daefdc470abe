use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use sensdeck::{
    core::state::AppState,
    domain::seed::StoreSeed,
    infrastructure::{cli::Cli, config::Config, platform::Platform, tui::real::RealTui},
    integration::{app_runner::AppRunner, runtime::Runtime},
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    // Load configuration (file-based)
    let config = Config::new()?;
    let seed = StoreSeed::builtin()?;
    let platform = Platform::detect(config.store.user_agent.as_deref(), args.mobile);
    log::info!("Starting on {platform:?}");

    let runtime = Runtime::new_with_executor(AppState::new_with_config(config, seed, platform));
    let tui = Arc::new(Mutex::new(
        RealTui::new()?
            .tick_rate(args.tick_rate)
            .frame_rate(args.frame_rate),
    ));
    let mut runner = AppRunner::new(runtime, tui)?;
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
