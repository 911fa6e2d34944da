//! Bootstrap configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use battle_core::BattleTimings;
use runtime::RuntimeConfig;

/// Configuration required to assemble a battle runtime.
#[derive(Clone, Debug)]
pub struct BootstrapConfig {
    /// Roster file to load; the built-in matchup is used when unset.
    pub roster_path: Option<PathBuf>,
    pub timings: TimingOverrides,
    pub event_buffer: usize,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            roster_path: None,
            timings: TimingOverrides::default(),
            event_buffer: RuntimeConfig::DEFAULT_EVENT_BUFFER_SIZE,
        }
    }
}

impl BootstrapConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_ROSTER_PATH` - RON or TOML roster file (default: built-in Hero vs Slime)
    /// - `BATTLE_IMPACT_DELAY_MS` - Delay before an attack lands
    /// - `BATTLE_TURN_DELAY_MS` - Pause before control changes hands
    /// - `BATTLE_ENEMY_DELAY_MS` - Enemy wind-up before its attack
    /// - `BATTLE_OUTCOME_DELAY_MS` - Pause before the outcome message
    /// - `BATTLE_EVENT_BUFFER` - Battle event channel size (default: 64)
    ///
    /// Delay variables override the roster's timings when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`BootstrapConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read_u64 = |key: &str| lookup(key)?.trim().parse::<u64>().ok();

        let mut config = Self {
            roster_path: lookup("BATTLE_ROSTER_PATH")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            timings: TimingOverrides {
                impact_delay_ms: read_u64("BATTLE_IMPACT_DELAY_MS"),
                turn_delay_ms: read_u64("BATTLE_TURN_DELAY_MS"),
                enemy_delay_ms: read_u64("BATTLE_ENEMY_DELAY_MS"),
                outcome_delay_ms: read_u64("BATTLE_OUTCOME_DELAY_MS"),
            },
            ..Self::default()
        };

        let capacity = lookup("BATTLE_EVENT_BUFFER").and_then(|v| v.trim().parse::<usize>().ok());
        if let Some(capacity) = capacity {
            config.event_buffer = capacity.max(1);
        }

        config
    }
}

/// Per-delay overrides layered on top of the roster's timings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimingOverrides {
    pub impact_delay_ms: Option<u64>,
    pub turn_delay_ms: Option<u64>,
    pub enemy_delay_ms: Option<u64>,
    pub outcome_delay_ms: Option<u64>,
}

impl TimingOverrides {
    pub fn apply(&self, timings: &mut BattleTimings) {
        if let Some(ms) = self.impact_delay_ms {
            timings.impact_delay_ms = ms;
        }
        if let Some(ms) = self.turn_delay_ms {
            timings.turn_delay_ms = ms;
        }
        if let Some(ms) = self.enemy_delay_ms {
            timings.enemy_delay_ms = ms;
        }
        if let Some(ms) = self.outcome_delay_ms {
            timings.outcome_delay_ms = ms;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = BootstrapConfig::from_lookup(lookup(&[]));

        assert!(config.roster_path.is_none());
        assert_eq!(config.timings, TimingOverrides::default());
        assert_eq!(config.event_buffer, RuntimeConfig::DEFAULT_EVENT_BUFFER_SIZE);
    }

    #[test]
    fn reads_paths_delays_and_buffer() {
        let config = BootstrapConfig::from_lookup(lookup(&[
            ("BATTLE_ROSTER_PATH", "arena.toml"),
            ("BATTLE_TURN_DELAY_MS", " 120 "),
            ("BATTLE_ENEMY_DELAY_MS", "not-a-number"),
            ("BATTLE_EVENT_BUFFER", "0"),
        ]));

        assert_eq!(config.roster_path, Some(PathBuf::from("arena.toml")));
        assert_eq!(config.timings.turn_delay_ms, Some(120));
        assert_eq!(config.timings.enemy_delay_ms, None);
        assert_eq!(config.event_buffer, 1);
    }

    #[test]
    fn overrides_only_touch_set_delays() {
        let mut timings = BattleTimings::default();
        TimingOverrides {
            impact_delay_ms: Some(0),
            outcome_delay_ms: Some(2_000),
            ..TimingOverrides::default()
        }
        .apply(&mut timings);

        assert_eq!(timings.impact_delay_ms, 0);
        assert_eq!(timings.outcome_delay_ms, 2_000);
        assert_eq!(timings.turn_delay_ms, BattleTimings::DEFAULT_TURN_DELAY_MS);
        assert_eq!(timings.shake_ms, BattleTimings::DEFAULT_SHAKE_MS);
    }
}
