use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_engine::tictactoe::{FirstPlayer, Mark};

const GRID_CHARACTERS: [char; 2] = ['|', '-'];

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, GameConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

/// Builds the effective config: file (or defaults), then the command-line first player.
pub fn resolve_config(
    path: Option<&Path>,
    first_player: Option<FirstPlayer>,
) -> Result<GameConfig, String> {
    let mut config = match path {
        Some(path) => get_config_manager(path).get_config()?,
        None => GameConfig::default(),
    };
    if first_player.is_some() {
        config.first_player = first_player;
    }
    config.validate()?;
    Ok(config)
}

pub fn save_config(path: &Path, config: &GameConfig) -> Result<(), String> {
    get_config_manager(path).set_config(config)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    /// When set, the "who goes first" prompt is skipped.
    pub first_player: Option<FirstPlayer>,
    pub human_symbol: char,
    pub ai_symbol: char,
    pub announce_ai_move: bool,
}

impl GameConfig {
    pub fn symbol_for(&self, mark: Mark) -> char {
        match mark {
            Mark::Empty => Mark::Empty.default_symbol(),
            Mark::Human => self.human_symbol,
            Mark::Ai => self.ai_symbol,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        for (name, symbol) in [("human_symbol", self.human_symbol), ("ai_symbol", self.ai_symbol)] {
            if symbol.is_whitespace() {
                return Err(format!("{} must not be whitespace", name));
            }
            if GRID_CHARACTERS.contains(&symbol) {
                return Err(format!("{} must not be a grid character ('{}')", name, symbol));
            }
        }
        if self.human_symbol == self.ai_symbol {
            return Err(format!(
                "human_symbol and ai_symbol must differ (both are '{}')",
                self.human_symbol
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: None,
            human_symbol: Mark::Human.default_symbol(),
            ai_symbol: Mark::Ai.default_symbol(),
            announce_ai_move: true,
        }
    }
}
