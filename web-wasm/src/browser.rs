//! ブラウザAPIによる保存先・画面遷移の実装

use compass_common::{Error, Navigator, Result, Route, SelectedCandidate, SelectionStore, UploadFile};
use gloo::storage::{LocalStorage, Storage};
use serde_json::Value;

/// `web_sys::File` のラッパー
#[derive(Debug, Clone)]
pub struct BrowserFile(pub web_sys::File);

impl UploadFile for BrowserFile {
    fn file_name(&self) -> String {
        self.0.name()
    }
}

/// `<input type=file>` の選択内容を取り出す
pub fn files_from_input(input: &web_sys::HtmlInputElement) -> Vec<BrowserFile> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(BrowserFile)
        .collect()
}

/// localStorage上の選択中候補者
#[derive(Debug, Clone)]
pub struct BrowserSelectionStore {
    key: String,
}

impl BrowserSelectionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl SelectionStore for BrowserSelectionStore {
    fn load(&self) -> Option<Value> {
        match LocalStorage::get::<Value>(&self.key) {
            Ok(value) => Some(value),
            Err(e) => {
                log::debug!("no stored selection under {}: {}", self.key, e);
                None
            }
        }
    }

    fn save(&self, selection: &SelectedCandidate) -> Result<()> {
        LocalStorage::set(&self.key, selection).map_err(|e| Error::Storage(e.to_string()))
    }

    fn clear(&self) {
        LocalStorage::delete(&self.key);
    }
}

/// `window.location` による全画面遷移
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, route: Route) {
        let Some(window) = web_sys::window() else {
            log::error!("window is not available");
            return;
        };
        if let Err(e) = window.location().set_href(route.path()) {
            log::error!("navigation to {} failed: {:?}", route.path(), e);
        }
    }
}

/// 現在のパス
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}
