//! Candidate Compass Common Library
//!
//! レビュー画面(WASM)のビューモデルと画面ロジック。
//! ブラウザAPIに依存しないため、ネイティブでテストできる。

pub mod approved;
pub mod candidate;
pub mod config;
pub mod error;
pub mod notify;
pub mod resume;
pub mod review;
pub mod routes;
pub mod scoring;
pub mod upload;
pub mod workflow;

pub use approved::{approved_badge, approved_candidates, ApprovedCandidate};
pub use candidate::{normalize_candidates, Candidate};
pub use config::AppConfig;
pub use error::{Error, Result};
pub use notify::{Notification, NotificationVariant};
pub use resume::{Keyword, KeywordKind, LineStyle, ResumeDocument, ResumeLine, Segment};
pub use review::{format_upload_date, map_review_rows, pending_badge, ReviewRow, ReviewStatus, SelectedCandidate};
pub use routes::{NavItem, Route, SIDEBAR_ITEMS};
pub use scoring::{format_percentage, BreakdownRow, ScoreBreakdown, ScoreCategory, ScoreStatus};
pub use upload::{FieldValue, FormField, MatchRequest, QuickStat, UploadFile, UploadState, QUICK_STATS};
pub use workflow::{
    load_evaluation, load_review_queue, select_for_review, submit_match, Evaluation, Navigator,
    Notifier, ScoringService, SelectionStore, SubmitOutcome,
};
