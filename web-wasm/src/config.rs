//! ビルド時設定

use compass_common::AppConfig;

/// 接続先（`COMPASS_API_BASE` をビルド時に指定すると上書き）
pub fn app_config() -> AppConfig {
    match option_env!("COMPASS_API_BASE") {
        Some(base) if !base.trim().is_empty() => AppConfig::default().with_base_url(base),
        _ => AppConfig::default(),
    }
}
