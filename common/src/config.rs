//! 接続先設定

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_EVALUATE_PATH: &str = "/evaluate_batch";
const DEFAULT_CANDIDATES_PATH: &str = "/get_resume_delta/";
const DEFAULT_SELECTION_KEY: &str = "selectedCandidate";

/// スコアリングサービスの接続設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub evaluate_path: String,
    pub candidates_path: String,
    /// 選択中候補者を保持するlocalStorageキー
    pub selection_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            evaluate_path: DEFAULT_EVALUATE_PATH.into(),
            candidates_path: DEFAULT_CANDIDATES_PATH.into(),
            selection_key: DEFAULT_SELECTION_KEY.into(),
        }
    }
}

impl AppConfig {
    /// 部分的なJSONから読み込む（未指定の項目はデフォルト値）
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        if config.api_base_url.trim().is_empty() {
            return Err(Error::Config("api_base_url must not be empty".into()));
        }
        let base_url = config.api_base_url.clone();
        Ok(config.with_base_url(&base_url))
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.api_base_url = base_url.trim().trim_end_matches('/').to_string();
        self
    }

    pub fn evaluate_url(&self) -> String {
        join_url(&self.api_base_url, &self.evaluate_path)
    }

    pub fn candidates_url(&self) -> String {
        join_url(&self.api_base_url, &self.candidates_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let config = AppConfig::default();
        assert_eq!(config.evaluate_url(), "http://localhost:8000/evaluate_batch");
        assert_eq!(config.candidates_url(), "http://localhost:8000/get_resume_delta/");
        assert_eq!(config.selection_key, "selectedCandidate");
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let config = AppConfig::default().with_base_url("https://compass.example.com/");
        assert_eq!(config.evaluate_url(), "https://compass.example.com/evaluate_batch");
    }

    #[test]
    fn test_from_json_partial() {
        let config = AppConfig::from_json(r#"{"api_base_url": "http://10.0.0.5:9000/"}"#)
            .expect("設定読み込み失敗");
        assert_eq!(config.api_base_url, "http://10.0.0.5:9000");
        assert_eq!(config.candidates_path, "/get_resume_delta/");
    }

    #[test]
    fn test_from_json_relative_path() {
        let config = AppConfig::from_json(r#"{"evaluate_path": "score"}"#).expect("設定読み込み失敗");
        assert_eq!(config.evaluate_url(), "http://localhost:8000/score");
    }

    #[test]
    fn test_from_json_rejects_empty_base() {
        let result = AppConfig::from_json(r#"{"api_base_url": "  "}"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
