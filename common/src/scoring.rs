//! 評価画面のスコア内訳
//!
//! 各カテゴリの配点（50/20/10/10/10）と閾値判定はバックエンドの
//! スコアリング基準に合わせた固定値。

use crate::candidate::Candidate;

/// 内訳に表示するメモの最大件数
const MAX_NOTES: usize = 4;
const NO_DATA: &str = "No data";

/// スコアカテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreCategory {
    TechnicalSkills,
    Experience,
    SoftSkills,
    Education,
    Certifications,
}

/// 判定結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreStatus {
    Warning,
    Good,
    Excellent,
}

impl ScoreStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreStatus::Warning => "warning",
            ScoreStatus::Good => "good",
            ScoreStatus::Excellent => "excellent",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ScoreStatus::Warning => "⚠",
            ScoreStatus::Good | ScoreStatus::Excellent => "✔",
        }
    }
}

impl ScoreCategory {
    pub const ALL: [ScoreCategory; 5] = [
        ScoreCategory::TechnicalSkills,
        ScoreCategory::Experience,
        ScoreCategory::SoftSkills,
        ScoreCategory::Education,
        ScoreCategory::Certifications,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ScoreCategory::TechnicalSkills => "Technical Skills",
            ScoreCategory::Experience => "Experience",
            ScoreCategory::SoftSkills => "Soft Skills",
            ScoreCategory::Education => "Education Level",
            ScoreCategory::Certifications => "Certifications",
        }
    }

    pub fn max_points(&self) -> u32 {
        match self {
            ScoreCategory::TechnicalSkills => 50,
            ScoreCategory::Experience => 20,
            ScoreCategory::SoftSkills
            | ScoreCategory::Education
            | ScoreCategory::Certifications => 10,
        }
    }

    /// 閾値判定（境界値を含む）
    pub fn classify(&self, score: f64) -> ScoreStatus {
        match self {
            ScoreCategory::TechnicalSkills if score >= 35.0 => ScoreStatus::Good,
            ScoreCategory::TechnicalSkills => ScoreStatus::Warning,
            ScoreCategory::Experience if score >= 15.0 => ScoreStatus::Excellent,
            ScoreCategory::Experience => ScoreStatus::Good,
            ScoreCategory::SoftSkills if score >= 6.0 => ScoreStatus::Good,
            ScoreCategory::SoftSkills => ScoreStatus::Warning,
            ScoreCategory::Education if score >= 7.0 => ScoreStatus::Excellent,
            ScoreCategory::Education => ScoreStatus::Good,
            ScoreCategory::Certifications if score >= 6.0 => ScoreStatus::Excellent,
            ScoreCategory::Certifications => ScoreStatus::Good,
        }
    }

    fn score_of(&self, candidate: &Candidate) -> f64 {
        match self {
            ScoreCategory::TechnicalSkills => candidate.technical_skills_score,
            ScoreCategory::Experience => candidate.experience_score,
            ScoreCategory::SoftSkills => candidate.soft_skills_score,
            ScoreCategory::Education => candidate.education_score,
            ScoreCategory::Certifications => candidate.certifications_score,
        }
    }

    fn notes_of<'a>(&self, candidate: &'a Candidate) -> Option<&'a str> {
        match self {
            ScoreCategory::TechnicalSkills => candidate.technical_skills.as_deref(),
            ScoreCategory::Experience => candidate.experience.as_deref(),
            ScoreCategory::SoftSkills => candidate.soft_skills.as_deref(),
            ScoreCategory::Education => candidate.education.as_deref(),
            ScoreCategory::Certifications => candidate.certifications.as_deref(),
        }
    }
}

/// 内訳の1行
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub category: ScoreCategory,
    pub score: f64,
    pub max_points: u32,
    pub status: ScoreStatus,
    pub notes: String,
}

impl BreakdownRow {
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    pub fn percentage(&self) -> f64 {
        percentage_of(self.score, self.max_points)
    }
}

/// スコア内訳全体
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub rows: Vec<BreakdownRow>,
    pub total_score: f64,
    pub total_max: u32,
    /// 上限・下限の補正はしない（final_scoreが範囲外ならそのまま範囲外）
    pub overall_percentage: f64,
}

impl ScoreBreakdown {
    pub fn from_candidate(candidate: &Candidate) -> Self {
        let rows: Vec<BreakdownRow> = ScoreCategory::ALL
            .iter()
            .map(|category| {
                let score = category.score_of(candidate);
                BreakdownRow {
                    category: *category,
                    score,
                    max_points: category.max_points(),
                    status: category.classify(score),
                    notes: summarize_notes(category.notes_of(candidate)),
                }
            })
            .collect();

        let total_max: u32 = rows.iter().map(|r| r.max_points).sum();
        let total_score = candidate.final_score;

        Self {
            rows,
            total_score,
            total_max,
            overall_percentage: percentage_of(total_score, total_max),
        }
    }
}

fn percentage_of(score: f64, max: u32) -> f64 {
    if max == 0 {
        0.0
    } else {
        score * 100.0 / f64::from(max)
    }
}

/// カンマ区切りのメモを先頭4件に要約
pub fn summarize_notes(notes: Option<&str>) -> String {
    let items: Vec<&str> = notes
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(MAX_NOTES)
        .collect();

    if items.is_empty() {
        NO_DATA.to_string()
    } else {
        items.join(", ")
    }
}

/// パーセント表示（小数点以下なし、0.5は0から遠い方へ丸める）
pub fn format_percentage(value: f64) -> String {
    format!("{:.0}%", value.round())
}
