//! Battle roster loader.

use std::path::Path;

use battle_core::{BattleConfig, ConfigError};

use crate::loaders::{LoadResult, read_file};

/// On-disk encodings a roster can use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RosterFormat {
    Ron,
    Toml,
}

impl RosterFormat {
    /// Picks the format from the file extension (`.ron` or `.toml`).
    pub fn from_path(path: &Path) -> LoadResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ron") => Ok(Self::Ron),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            _ => Err(anyhow::anyhow!(
                "Unsupported roster file {} (expected .ron or .toml)",
                path.display()
            )),
        }
    }
}

/// Loader for [`BattleConfig`] rosters.
pub struct RosterLoader;

impl RosterLoader {
    /// Load and validate a roster file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a `.ron` or `.toml` file containing a BattleConfig
    ///
    /// # Returns
    ///
    /// Returns a BattleConfig whose combatants satisfy the stat contract.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let format = RosterFormat::from_path(path)?;
        let content = read_file(path)?;
        Self::parse(&content, format)
            .map_err(|e| anyhow::anyhow!("Invalid roster {}: {}", path.display(), e))
    }

    /// Parse and validate roster text.
    pub fn parse(content: &str, format: RosterFormat) -> LoadResult<BattleConfig> {
        let config: BattleConfig = match format {
            RosterFormat::Ron => ron::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?,
            RosterFormat::Toml => toml::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse roster TOML: {}", e))?,
        };

        config.player.validate().map_err(ConfigError::Player)?;
        config.enemy.validate().map_err(ConfigError::Enemy)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::BattleTimings;

    #[test]
    fn parses_toml_with_default_timings() {
        let content = r#"
            [player]
            name = "Knight"
            max_hp = 40
            atk = 6

            [enemy]
            name = "Bat"
            max_hp = 12
            atk = 3
        "#;

        let config = RosterLoader::parse(content, RosterFormat::Toml).unwrap();

        assert_eq!(config.player.name, "Knight");
        assert_eq!(config.enemy.max_hp, 12);
        assert_eq!(config.timings, BattleTimings::default());
    }

    #[test]
    fn partial_timings_fall_back_to_defaults() {
        let content = r#"(
            player: (name: "Hero", max_hp: 30, atk: 8),
            enemy: (name: "Slime", max_hp: 20, atk: 5),
            timings: (turn_delay_ms: 100),
        )"#;

        let config = RosterLoader::parse(content, RosterFormat::Ron).unwrap();

        assert_eq!(config.timings.turn_delay_ms, 100);
        assert_eq!(
            config.timings.impact_delay_ms,
            BattleTimings::DEFAULT_IMPACT_DELAY_MS
        );
    }

    #[test]
    fn rejects_zero_attack() {
        let content = r#"(
            player: (name: "Hero", max_hp: 30, atk: 0),
            enemy: (name: "Slime", max_hp: 20, atk: 5),
        )"#;

        let err = RosterLoader::parse(content, RosterFormat::Ron).unwrap_err();
        assert!(err.to_string().contains("invalid player"));
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            RosterFormat::from_path(Path::new("arena.RON")).unwrap(),
            RosterFormat::Ron
        );
        assert_eq!(
            RosterFormat::from_path(Path::new("arena.toml")).unwrap(),
            RosterFormat::Toml
        );
        assert!(RosterFormat::from_path(Path::new("arena.json")).is_err());
    }
}
