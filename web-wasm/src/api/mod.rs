//! スコアリングサービス連携

mod backend;

pub use backend::HttpScoringService;
