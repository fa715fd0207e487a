//! 審査待ち一覧（Under Review）のビューモデル

use crate::candidate::Candidate;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 一覧の満点表示
pub const REVIEW_MAX_SCORE: u32 = 100;

/// 審査ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Pending,
    InReview,
}

impl ReviewStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "Pending",
            ReviewStatus::InReview => "In Review",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::InReview => "in-review",
        }
    }
}

/// 一覧の1行
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRow {
    pub id: String,
    pub name: String,
    pub role: String,
    pub score: f64,
    pub max_score: u32,
    pub upload_date: String,
    pub status: ReviewStatus,
    pub candidate: Candidate,
}

impl ReviewRow {
    pub fn from_candidate(candidate: Candidate, upload_date: &str) -> Self {
        Self {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            role: candidate.role().to_string(),
            score: candidate.final_score,
            max_score: REVIEW_MAX_SCORE,
            upload_date: upload_date.to_string(),
            // バックエンドに状態が無いため常にPending
            status: ReviewStatus::Pending,
            candidate,
        }
    }

    /// 評価画面へ引き渡すエンベロープ
    pub fn selection(&self) -> SelectedCandidate {
        SelectedCandidate {
            candidate: self.candidate.clone(),
            role: self.role.clone(),
        }
    }
}

/// 一覧行を生成（アップロード日は表示時点の日付）
pub fn map_review_rows(candidates: Vec<Candidate>, today: NaiveDate) -> Vec<ReviewRow> {
    let upload_date = format_upload_date(today);
    candidates
        .into_iter()
        .map(|c| ReviewRow::from_candidate(c, &upload_date))
        .collect()
}

/// en-US短縮形式（例: "Nov 5, 2024"）
pub fn format_upload_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn pending_badge(count: usize) -> String {
    format!("{} Pending", count)
}

/// 選択中の候補者（localStorageの `selectedCandidate` に保存される）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedCandidate {
    pub candidate: Candidate,
    pub role: String,
}

impl SelectedCandidate {
    /// 保存済みJSONから復元
    ///
    /// `candidate` が無い・オブジェクトでない場合は `None`。
    pub fn from_value(value: &Value) -> Option<Self> {
        let candidate = Candidate::from_value(value.get("candidate")?, 0)?;
        let role = value
            .get("role")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| candidate.role().to_string());

        Some(Self { candidate, role })
    }

    pub fn from_json(json: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(json).ok()?;
        Self::from_value(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("不正な日付")
    }

    fn candidate(value: Value) -> Candidate {
        Candidate::from_value(&value, 0).expect("正規化失敗")
    }

    #[test]
    fn test_format_upload_date() {
        assert_eq!(format_upload_date(date(2024, 11, 5)), "Nov 5, 2024");
        assert_eq!(format_upload_date(date(2026, 1, 21)), "Jan 21, 2026");
    }

    #[test]
    fn test_map_review_rows() {
        let rows = map_review_rows(
            vec![
                candidate(json!({"id": 1, "name": "Ana", "experience": "Data Engineer", "final_score": 82})),
                candidate(json!({"id": 2, "name": "Ben"})),
            ],
            date(2024, 11, 15),
        );

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].role, "Data Engineer");
        assert_eq!(rows[0].score, 82.0);
        assert_eq!(rows[0].max_score, 100);
        assert_eq!(rows[0].upload_date, "Nov 15, 2024");
        assert_eq!(rows[0].status, ReviewStatus::Pending);

        // experience / final_score 欠損時のフォールバック
        assert_eq!(rows[1].role, "Not specified");
        assert_eq!(rows[1].score, 0.0);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ReviewStatus::Pending.label(), "Pending");
        assert_eq!(ReviewStatus::InReview.label(), "In Review");
        assert_eq!(ReviewStatus::InReview.as_str(), "in-review");
    }

    #[test]
    fn test_pending_badge() {
        assert_eq!(pending_badge(0), "0 Pending");
        assert_eq!(pending_badge(12), "12 Pending");
    }

    #[test]
    fn test_selection_envelope_json_shape() {
        let row = ReviewRow::from_candidate(
            candidate(json!({"id": "r-9", "name": "Chen", "experience": "SRE", "final_score": 71})),
            "Nov 1, 2024",
        );
        let json = serde_json::to_value(row.selection()).unwrap();
        assert_eq!(json["role"], "SRE");
        assert_eq!(json["candidate"]["name"], "Chen");
        assert_eq!(json["candidate"]["final_score"], 71.0);
    }

    #[test]
    fn test_selected_candidate_from_json() {
        let stored = r#"{"candidate": {"name": "Dana", "final_score": 66}, "role": "Analyst"}"#;
        let selected = SelectedCandidate::from_json(stored).expect("復元失敗");
        assert_eq!(selected.candidate.name, "Dana");
        assert_eq!(selected.role, "Analyst");
    }

    #[test]
    fn test_selected_candidate_missing_candidate_field() {
        assert!(SelectedCandidate::from_json(r#"{"role": "Analyst"}"#).is_none());
        assert!(SelectedCandidate::from_json(r#"{"candidate": "Dana"}"#).is_none());
        assert!(SelectedCandidate::from_json("not json").is_none());
    }

    #[test]
    fn test_selected_candidate_role_falls_back_to_experience() {
        let value = json!({"candidate": {"name": "Eve", "experience": "Designer"}});
        let selected = SelectedCandidate::from_value(&value).unwrap();
        assert_eq!(selected.role, "Designer");
    }
}
