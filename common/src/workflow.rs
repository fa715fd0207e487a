//! 画面ロジック（WASM/テスト共通）
//!
//! ブラウザAPIに依存する部分はトレイトで受け取る:
//! - ScoringService: スコアリングサービスへのHTTP
//! - SelectionStore: 選択中候補者の保存先（localStorage）
//! - Navigator: 画面遷移
//! - Notifier: トースト通知

use crate::candidate::normalize_candidates;
use crate::error::Result;
use crate::notify::Notification;
use crate::resume::ResumeDocument;
use crate::review::{map_review_rows, ReviewRow, SelectedCandidate};
use crate::routes::Route;
use crate::scoring::ScoreBreakdown;
use crate::upload::{MatchRequest, UploadFile, UploadState};
use chrono::NaiveDate;
use serde_json::Value;

/// スコアリングサービス
#[allow(async_fn_in_trait)]
pub trait ScoringService {
    type File: UploadFile;

    /// `POST /evaluate_batch`。レスポンスは検証せずJSONのまま返す
    async fn evaluate_batch(&self, request: &MatchRequest<'_, Self::File>) -> Result<Value>;

    /// `GET /get_resume_delta/`
    async fn fetch_candidates(&self) -> Result<Value>;
}

/// 選択中候補者の保存先
pub trait SelectionStore {
    /// 保存済みのJSON（無い・壊れている場合は `None`）
    fn load(&self) -> Option<Value>;
    fn save(&self, selection: &SelectedCandidate) -> Result<()>;
    fn clear(&self);
}

pub trait Navigator {
    fn navigate(&self, route: Route);
}

pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// 送信結果
#[derive(Debug)]
pub enum SubmitOutcome {
    /// 入力不足で送信しなかった
    Rejected,
    Submitted(Value),
    /// 通信失敗（ログのみ、画面には出さない）
    Failed(crate::error::Error),
}

/// マッチング開始
pub async fn submit_match<S, N, T>(
    uploads: &UploadState<S::File>,
    service: &S,
    navigator: &N,
    notifier: &T,
) -> SubmitOutcome
where
    S: ScoringService,
    N: Navigator,
    T: Notifier,
{
    let request = match uploads.match_request() {
        Ok(request) => request,
        Err(_) => {
            notifier.notify(Notification::missing_files());
            return SubmitOutcome::Rejected;
        }
    };

    notifier.notify(Notification::processing());
    log::info!("submitting {} resume(s) for matching", request.resume_count());

    match service.evaluate_batch(&request).await {
        Ok(response) => {
            log::debug!("evaluate_batch response: {}", response);
            navigator.navigate(Route::UnderReview);
            SubmitOutcome::Submitted(response)
        }
        Err(e) => {
            log::error!("Error uploading files: {}", e);
            SubmitOutcome::Failed(e)
        }
    }
}

/// 審査待ち一覧の読み込み
///
/// 画面に入るたびに前回の選択を破棄する。取得失敗時は空一覧。
pub async fn load_review_queue<S, St>(service: &S, store: &St, today: NaiveDate) -> Vec<ReviewRow>
where
    S: ScoringService,
    St: SelectionStore,
{
    store.clear();

    let fetched = match service.fetch_candidates().await {
        Ok(value) => normalize_candidates(&value),
        Err(e) => Err(e),
    };

    match fetched {
        Ok(candidates) => {
            log::info!("loaded {} candidate(s) for review", candidates.len());
            map_review_rows(candidates, today)
        }
        Err(e) => {
            log::error!("Failed to fetch candidate data: {}", e);
            Vec::new()
        }
    }
}

/// 候補者を選択して評価画面へ
pub fn select_for_review<St, N>(row: &ReviewRow, store: &St, navigator: &N) -> Result<()>
where
    St: SelectionStore,
    N: Navigator,
{
    if let Err(e) = store.save(&row.selection()) {
        log::error!("Failed to store selected candidate {}: {}", row.id, e);
        return Err(e);
    }
    navigator.navigate(Route::Evaluation);
    Ok(())
}

/// 評価画面の表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub selection: SelectedCandidate,
    pub breakdown: ScoreBreakdown,
    pub resume: ResumeDocument,
}

/// 評価画面の読み込み（保存先のみ参照し、通信はしない）
///
/// `None` の場合は読み込み中表示のまま。
pub fn load_evaluation<St: SelectionStore>(store: &St) -> Option<Evaluation> {
    let stored = store.load()?;
    let selection = match SelectedCandidate::from_value(&stored) {
        Some(selection) => selection,
        None => {
            log::warn!("stored selection has no candidate record");
            return None;
        }
    };

    let breakdown = ScoreBreakdown::from_candidate(&selection.candidate);
    Some(Evaluation {
        selection,
        breakdown,
        resume: ResumeDocument::sample(),
    })
}
