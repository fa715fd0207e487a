//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: status {0}")]
    Http(u16),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Missing uploads: a job description and at least one resume are required")]
    MissingUploads,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Unexpected payload: {0}")]
    UnexpectedPayload(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
