//! Builds the battle configuration and runtimes used by front-ends.
use anyhow::{Context, Result};

use battle_content::RosterLoader;
use battle_core::{BattleConfig, SessionId};
use runtime::{BattleRuntime, BattleRuntimeBuilder, Presenter, RuntimeConfig};

use crate::config::BootstrapConfig;

/// Builder that resolves the roster and timing overrides for clients.
pub struct RuntimeBuilder {
    config: BootstrapConfig,
}

impl RuntimeBuilder {
    pub fn new(config: BootstrapConfig) -> Self {
        Self { config }
    }

    pub fn build(self) -> Result<RuntimeSetup> {
        let mut battle = match &self.config.roster_path {
            Some(path) => {
                let battle = RosterLoader::load(path)
                    .with_context(|| format!("loading roster {}", path.display()))?;
                tracing::info!(path = %path.display(), "roster loaded");
                battle
            }
            None => {
                tracing::info!("using built-in roster");
                BattleConfig::default()
            }
        };
        self.config.timings.apply(&mut battle.timings);

        tracing::debug!(
            player = %battle.player.name,
            enemy = %battle.enemy.name,
            timings = ?battle.timings,
            "battle configuration resolved"
        );

        Ok(RuntimeSetup {
            runtime_config: RuntimeConfig {
                battle,
                event_buffer_size: self.config.event_buffer,
            },
            config: self.config,
            next_session: 1,
        })
    }
}

/// Resolved configuration plus a factory for fresh battles.
pub struct RuntimeSetup {
    pub config: BootstrapConfig,
    runtime_config: RuntimeConfig,
    next_session: u64,
}

impl RuntimeSetup {
    pub fn battle(&self) -> &BattleConfig {
        &self.runtime_config.battle
    }

    /// Build and start a brand-new battle.
    ///
    /// Every call gets its own session id, so steps left over from an
    /// earlier battle can never act on this one.
    pub fn new_battle<P: Presenter>(&mut self, presenter: P) -> Result<BattleRuntime<P>> {
        let session_id = SessionId(self.next_session);
        self.next_session += 1;

        let mut runtime = BattleRuntimeBuilder::new()
            .config(self.runtime_config.clone())
            .session_id(session_id)
            .build(presenter)
            .context("building battle runtime")?;
        runtime.start();

        Ok(runtime)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use battle_core::{BattleState, Effect, EffectHandle, TextSlot};

    use super::*;
    use crate::config::TimingOverrides;

    struct NullPresenter;

    impl Presenter for NullPresenter {
        fn show_text(&mut self, _slot: TextSlot, _content: &str) {}
        fn show_effect(&mut self, _handle: EffectHandle, _effect: &Effect) {}
        fn clear_effect(&mut self, _handle: EffectHandle) {}
    }

    #[test]
    fn built_in_roster_with_overrides() {
        let config = BootstrapConfig {
            timings: TimingOverrides {
                turn_delay_ms: Some(10),
                ..TimingOverrides::default()
            },
            ..BootstrapConfig::default()
        };

        let setup = RuntimeBuilder::new(config).build().unwrap();

        assert_eq!(setup.battle().player.name, "Hero");
        assert_eq!(setup.battle().timings.turn_delay_ms, 10);
    }

    #[test]
    fn roster_file_is_loaded() {
        let mut file = tempfile::Builder::new().suffix(".ron").tempfile().unwrap();
        write!(
            file,
            r#"(player: (name: "Rogue", max_hp: 22, atk: 7), enemy: (name: "Wolf", max_hp: 15, atk: 4))"#
        )
        .unwrap();
        let config = BootstrapConfig {
            roster_path: Some(file.path().to_path_buf()),
            ..BootstrapConfig::default()
        };

        let setup = RuntimeBuilder::new(config).build().unwrap();

        assert_eq!(setup.battle().enemy.name, "Wolf");
    }

    #[test]
    fn missing_roster_is_an_error() {
        let config = BootstrapConfig {
            roster_path: Some("/no/such/roster.ron".into()),
            ..BootstrapConfig::default()
        };

        let err = RuntimeBuilder::new(config).build().err().unwrap();

        assert!(format!("{err:#}").contains("/no/such/roster.ron"));
    }

    #[test]
    fn each_battle_is_fresh_and_started() {
        let mut setup = RuntimeBuilder::new(BootstrapConfig::default())
            .build()
            .unwrap();

        let first = setup.new_battle(NullPresenter).unwrap();
        let second = setup.new_battle(NullPresenter).unwrap();

        assert_eq!(first.state(), BattleState::PlayerCommand);
        assert_eq!(second.state(), BattleState::PlayerCommand);
        assert_ne!(first.session().id(), second.session().id());
    }
}
