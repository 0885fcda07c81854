use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{Player, PlayerId};

/// How one player is shown on screen.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub token: String,
}

impl PlayerConfig {
    fn default_for(id: PlayerId) -> Self {
        let player = Player::default_for(id);
        PlayerConfig {
            name: player.name().to_string(),
            token: player.token().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: PlayerConfig,
    pub two: PlayerConfig,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one: PlayerConfig::default_for(PlayerId::One),
            two: PlayerConfig::default_for(PlayerId::Two),
        }
    }
}

/// Top-level game configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub players: PlayersConfig,
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let seats = [("one", &self.players.one), ("two", &self.players.two)];
        for (seat, player) in seats {
            if player.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "players.{seat}.name must not be empty"
                )));
            }
            if player.token.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "players.{seat}.token must not be empty"
                )));
            }
        }

        if self.players.one.name.trim() == self.players.two.name.trim() {
            return Err(ConfigError::Validation(
                "players.one.name and players.two.name must differ".into(),
            ));
        }
        if self.players.one.token.trim() == self.players.two.token.trim() {
            return Err(ConfigError::Validation(
                "players.one.token and players.two.token must differ".into(),
            ));
        }

        Ok(())
    }

    /// The two players described by this configuration, seat one first.
    pub fn players(&self) -> [Player; 2] {
        let build = |id, player: &PlayerConfig| {
            Player::new(id, player.name.trim(), player.token.trim())
        };
        [
            build(PlayerId::One, &self.players.one),
            build(PlayerId::Two, &self.players.two),
        ]
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.players.one.name, "Player 1");
        assert_eq!(config.players.two.name, "Player 2");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[players.two]
name = "Grace"
token = "O"
"#;
        let config: GameConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.players.two.name, "Grace");
        assert_eq!(config.players.one, PlayerConfig::default_for(PlayerId::One));
    }

    #[test]
    fn test_players_from_config() {
        let mut config = GameConfig::default();
        config.players.one.name = "  Ada ".into();
        let [one, two] = config.players();
        assert_eq!(one.id(), PlayerId::One);
        assert_eq!(one.name(), "Ada");
        assert_eq!(two.id(), PlayerId::Two);
        assert_eq!(two.name(), "Player 2");
    }

    #[test]
    fn test_validation_rejects_empty_name() {
        let mut config = GameConfig::default();
        config.players.one.name = "   ".into();
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: players.one.name must not be empty"
        );
    }

    #[test]
    fn test_validation_rejects_empty_token() {
        let mut config = GameConfig::default();
        config.players.two.token = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_duplicate_tokens() {
        let mut config = GameConfig::default();
        config.players.two.token = config.players.one.token.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_duplicate_names() {
        let mut config = GameConfig::default();
        config.players.two.name = "Player 1".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = GameConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[players.one]
name = "Ada"
token = "X"
"#
        )
        .unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.players.one.name, "Ada");
        assert_eq!(config.players.one.token, "X");
        // Others are defaults
        assert_eq!(config.players.two.name, "Player 2");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[players.one]\nname = \"\"\ntoken = \"X\"\n").unwrap();
        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));

        std::fs::write(&path, "players = 3").unwrap();
        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = GameConfig::default_toml();
        let config: GameConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, GameConfig::default());
    }
}
