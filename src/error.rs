use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 启动阶段的错误（会话操作本身不会失败）
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid deck file {path}: {source}")]
    DeckParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("deck file {0} contains no facts")]
    EmptyDeck(PathBuf),

    #[error("deck file {0} not found")]
    DeckNotFound(PathBuf),

    #[error("cannot determine user data directory")]
    NoDataDir,
}

pub type Result<T> = std::result::Result<T, QuizError>;
