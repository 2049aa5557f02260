use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{QuizError, Result};
use crate::models::{DeckData, Fact, builtin_catalog};

/// 从TOML文件加载题库
pub fn load_deck(path: &Path) -> Result<Vec<Fact>> {
    if !path.exists() {
        return Err(QuizError::DeckNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let data: DeckData = toml::from_str(&content).map_err(|source| QuizError::DeckParse {
        path: path.to_path_buf(),
        source,
    })?;

    if data.facts.is_empty() {
        return Err(QuizError::EmptyDeck(path.to_path_buf()));
    }

    info!(path = %path.display(), facts = data.facts.len(), "loaded deck file");
    Ok(data.facts)
}

/// 有牌组文件时读取，否则使用内置题库
pub fn resolve_catalog(deck: Option<&Path>) -> Result<Vec<Fact>> {
    match deck {
        Some(path) => load_deck(path),
        None => Ok(builtin_catalog()),
    }
}
