//! Glue code tying the bootstrap, the battle runtime, and the terminal UI together.
use anyhow::Result;

use client_bootstrap::{BootstrapConfig, RuntimeBuilder, RuntimeSetup};

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal;
use crate::view::BattleView;

pub struct CliApp {
    config: CliConfig,
    setup: RuntimeSetup,
}

impl CliApp {
    pub fn new(config: CliConfig, bootstrap: BootstrapConfig) -> Result<Self> {
        let setup = RuntimeBuilder::new(bootstrap).build()?;
        Ok(Self { config, setup })
    }

    pub async fn run(self) -> Result<()> {
        tracing::info!("CLI client starting...");

        let CliApp { config, mut setup } = self;
        let runtime = setup.new_battle(BattleView::new(config.ui.message_capacity))?;

        let mut terminal = terminal::init()?;
        let guard = terminal::TerminalGuard::new();

        EventLoop::new(setup, runtime, config)
            .run(&mut terminal)
            .await?;

        guard.restore()?;
        tracing::info!("CLI client exiting");

        Ok(())
    }
}
