//! Classic Turn Battle client binary.
//!
//! This binary is the composition root that assembles:
//! 1. Configuration from the environment (and an optional `.env` file)
//! 2. Logging to a file, leaving the terminal to the UI
//! 3. The battle setup via `client-bootstrap`
//! 4. The terminal frontend
//!
//! # Examples
//!
//! ```bash
//! # Default matchup
//! cargo run -p battle-client
//!
//! # Custom roster, faster enemy
//! BATTLE_ROSTER_PATH=arena.toml BATTLE_ENEMY_DELAY_MS=200 cargo run -p battle-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_bootstrap::BootstrapConfig;
    use client_frontend_cli::{CliApp, CliConfig, logging};

    // 1. Load configuration from environment
    let bootstrap_config = BootstrapConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    logging::setup_logging(cli_config.log_dir.as_deref())?;

    tracing::info!("Starting battle client");
    tracing::info!("Roster: {:?}", bootstrap_config.roster_path);

    // 3. Build and run
    let app = CliApp::new(cli_config, bootstrap_config)?;
    app.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
