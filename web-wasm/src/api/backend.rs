//! スコアリングサービスのHTTPクライアント
//!
//! - `POST /evaluate_batch`: multipart（jd, jd_uuid, resumes, resume_uuids）
//! - `GET /get_resume_delta/`: 候補者一覧

use crate::browser::BrowserFile;
use compass_common::{AppConfig, Error, FieldValue, MatchRequest, Result, ScoringService};
use gloo::net::http::Request;
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::FormData;

#[derive(Debug, Clone)]
pub struct HttpScoringService {
    config: AppConfig,
}

impl HttpScoringService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

fn js_error(e: JsValue) -> Error {
    Error::Transport(format!("{:?}", e))
}

fn net_error(e: gloo::net::Error) -> Error {
    match e {
        gloo::net::Error::SerdeError(e) => Error::Json(e),
        other => Error::Transport(other.to_string()),
    }
}

/// multipartフォームの組み立て
fn build_form(request: &MatchRequest<'_, BrowserFile>) -> Result<FormData> {
    let form = FormData::new().map_err(js_error)?;
    for field in request.fields() {
        match field.value {
            FieldValue::File(file) => form
                .append_with_blob_and_filename(field.name, &file.0, &file.0.name())
                .map_err(js_error)?,
            FieldValue::Text(text) => form.append_with_str(field.name, text).map_err(js_error)?,
        }
    }
    Ok(form)
}

impl ScoringService for HttpScoringService {
    type File = BrowserFile;

    async fn evaluate_batch(&self, request: &MatchRequest<'_, BrowserFile>) -> Result<Value> {
        let form = build_form(request)?;
        let url = self.config.evaluate_url();
        log::debug!("POST {} ({} resume(s))", url, request.resume_count());

        let resp = Request::post(&url)
            .body(form)
            .map_err(net_error)?
            .send()
            .await
            .map_err(net_error)?;

        // ステータスに関わらずJSONなら成功扱い
        if !resp.ok() {
            log::warn!("evaluate_batch returned status {}", resp.status());
        }
        resp.json::<Value>().await.map_err(net_error)
    }

    async fn fetch_candidates(&self) -> Result<Value> {
        let url = self.config.candidates_url();
        log::debug!("GET {}", url);

        let resp = Request::get(&url).send().await.map_err(net_error)?;
        if !resp.ok() {
            return Err(Error::Http(resp.status()));
        }
        resp.json::<Value>().await.map_err(net_error)
    }
}
