//! 配置加载
//!
//! 优先级：命令行 > 配置文件 > 默认值

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::error::{QuizError, Result};

const APP_DIR: &str = "universe-quiz";

/// 命令行参数
#[derive(Debug, Default, Parser)]
#[command(name = "universe-quiz", version, about = "Universe facts flashcard quiz")]
pub struct Cli {
    /// Config file (default: <config dir>/universe-quiz/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for random card selection and shuffling
    #[arg(long)]
    pub seed: Option<u64>,

    /// TOML deck file replacing the built-in catalog
    #[arg(long)]
    pub deck: Option<PathBuf>,

    /// Log level filter (overridden by RUST_LOG)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// 配置文件结构
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub seed: Option<u64>,
    pub deck: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            deck: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// 文件不存在时返回默认配置
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| QuizError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 命令行参数覆盖配置文件
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if cli.deck.is_some() {
            self.deck = cli.deck.clone();
        }
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
        self
    }
}

/// 默认配置文件路径 (~/.config/universe-quiz/config.toml)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// 获取数据目录路径 (~/.local/share/universe-quiz/)
pub fn data_dir() -> Result<PathBuf> {
    let dir = dirs::data_dir().ok_or(QuizError::NoDataDir)?.join(APP_DIR);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// 解析命令行并合并配置文件
pub fn resolve(cli: &Cli) -> Result<Config> {
    let config = match cli.config.clone().or_else(default_config_path) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    Ok(config.merge_cli(cli))
}
