//! 候補者データの型定義と正規化
//!
//! スコアリングサービスのレスポンスはスキーマが保証されないため、
//! ここで一度だけ欠損・型ゆれを吸収してから各ビューに渡す。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const UNNAMED_CANDIDATE: &str = "Unnamed candidate";
pub const NOT_PROVIDED: &str = "Not provided";
pub const ROLE_NOT_SPECIFIED: &str = "Not specified";

/// 正規化済みの候補者レコード
///
/// フィールド名はバックエンド（resume_analysisテーブル）と揃えているので、
/// シリアライズした結果をそのまま再度 `from_value` に通せる。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Candidate {
    pub id: String,
    pub name: String,

    /// 経験の要約（一覧では役職として表示）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical_skills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soft_skills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifications: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strengths: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weaknesses: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<String>,

    pub technical_skills_score: f64,
    pub experience_score: f64,
    pub soft_skills_score: f64,
    pub education_score: f64,
    pub certifications_score: f64,
    pub final_score: f64,

    pub email: String,
    pub contact_no: String,
}

impl Candidate {
    /// JSONオブジェクト1件を正規化
    ///
    /// `index` はidが無いレコードの代替キーに使う。
    /// オブジェクト以外は `None`。
    pub fn from_value(value: &Value, index: usize) -> Option<Self> {
        let obj = value.as_object()?;

        let id = field_id(obj).unwrap_or_else(|| format!("candidate-{}", index));

        Some(Self {
            id,
            name: field_text(obj, "name").unwrap_or_else(|| UNNAMED_CANDIDATE.to_string()),
            experience: field_text(obj, "experience"),
            technical_skills: field_text(obj, "technical_skills"),
            soft_skills: field_text(obj, "soft_skills"),
            education: field_text(obj, "education"),
            certifications: field_text(obj, "certifications"),
            strengths: field_text(obj, "strengths"),
            weaknesses: field_text(obj, "weaknesses"),
            suggestions: field_text(obj, "suggestions"),
            technical_skills_score: field_number(obj, "technical_skills_score"),
            experience_score: field_number(obj, "experience_score"),
            soft_skills_score: field_number(obj, "soft_skills_score"),
            education_score: field_number(obj, "education_score"),
            certifications_score: field_number(obj, "certifications_score"),
            final_score: field_number(obj, "final_score"),
            email: field_text(obj, "email").unwrap_or_else(|| NOT_PROVIDED.to_string()),
            contact_no: field_text(obj, "contact_no").unwrap_or_else(|| NOT_PROVIDED.to_string()),
        })
    }

    /// 一覧表示用の役職
    pub fn role(&self) -> &str {
        self.experience.as_deref().unwrap_or(ROLE_NOT_SPECIFIED)
    }
}

/// 候補者一覧レスポンスを正規化
pub fn normalize_candidates(value: &Value) -> Result<Vec<Candidate>> {
    let items = value.as_array().ok_or_else(|| {
        Error::UnexpectedPayload(format!("expected a JSON array of candidates, got {}", kind_of(value)))
    })?;

    let candidates = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let candidate = Candidate::from_value(item, index);
            if candidate.is_none() {
                log::warn!("skipping candidate #{}: not a JSON object ({})", index, kind_of(item));
            }
            candidate
        })
        .collect();

    Ok(candidates)
}

fn field_id(obj: &Map<String, Value>) -> Option<String> {
    match obj.get("id")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// 空文字・空白のみ・null・欠損は `None`
fn field_text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// 数値または数値文字列。それ以外は0
fn field_number(obj: &Map<String, Value>, key: &str) -> f64 {
    let number = match obj.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite()).unwrap_or(0.0)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_full_record() {
        let value = json!({
            "id": 7,
            "name": "Priya Raman",
            "experience": "Backend Engineer, 6 years",
            "technical_skills": "Rust, Go, PostgreSQL",
            "technical_skills_score": 41.5,
            "experience_score": 16,
            "soft_skills_score": 7,
            "education_score": 8,
            "certifications_score": 5,
            "final_score": 77.5,
            "email": "priya@example.com",
            "contact_no": "+1 555 0100"
        });

        let c = Candidate::from_value(&value, 0).expect("正規化失敗");
        assert_eq!(c.id, "7");
        assert_eq!(c.name, "Priya Raman");
        assert_eq!(c.role(), "Backend Engineer, 6 years");
        assert_eq!(c.technical_skills_score, 41.5);
        assert_eq!(c.experience_score, 16.0);
        assert_eq!(c.final_score, 77.5);
        assert_eq!(c.contact_no, "+1 555 0100");
    }

    #[test]
    fn test_missing_experience_role_not_specified() {
        let c = Candidate::from_value(&json!({"name": "A"}), 0).unwrap();
        assert_eq!(c.role(), "Not specified");

        let c = Candidate::from_value(&json!({"name": "A", "experience": "   "}), 0).unwrap();
        assert_eq!(c.role(), "Not specified");
    }

    #[test]
    fn test_missing_scores_default_to_zero() {
        let c = Candidate::from_value(&json!({"final_score": null, "soft_skills_score": "abc"}), 0).unwrap();
        assert_eq!(c.final_score, 0.0);
        assert_eq!(c.soft_skills_score, 0.0);
        assert_eq!(c.education_score, 0.0);
    }

    #[test]
    fn test_numeric_string_scores() {
        let c = Candidate::from_value(&json!({"final_score": " 64.25 "}), 0).unwrap();
        assert_eq!(c.final_score, 64.25);
    }

    #[test]
    fn test_placeholders() {
        let c = Candidate::from_value(&json!({}), 3).unwrap();
        assert_eq!(c.id, "candidate-3");
        assert_eq!(c.name, UNNAMED_CANDIDATE);
        assert_eq!(c.email, NOT_PROVIDED);
        assert_eq!(c.contact_no, NOT_PROVIDED);
    }

    #[test]
    fn test_non_object_is_none() {
        assert!(Candidate::from_value(&json!("bob"), 0).is_none());
        assert!(Candidate::from_value(&json!(null), 0).is_none());
    }

    #[test]
    fn test_normalize_candidates_skips_non_objects() {
        let value = json!([{"name": "A"}, 42, {"name": "B"}]);
        let list = normalize_candidates(&value).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, "candidate-0");
        // 位置ベースのidは元配列のインデックス
        assert_eq!(list[1].id, "candidate-2");
    }

    #[test]
    fn test_normalize_candidates_rejects_object_payload() {
        let value = json!({"error": "relation \"resume_analysis\" does not exist"});
        let result = normalize_candidates(&value);
        assert!(matches!(result, Err(Error::UnexpectedPayload(_))));
    }

    #[test]
    fn test_serialized_candidate_normalizes_back() {
        let original = Candidate::from_value(
            &json!({"id": "x1", "name": "Lee", "experience": "QA", "final_score": 58}),
            0,
        )
        .unwrap();
        let value = serde_json::to_value(&original).unwrap();
        let restored = Candidate::from_value(&value, 99).unwrap();
        assert_eq!(restored, original);
    }
}
