//! 承認済み一覧
//!
//! 承認状態はバックエンドに存在しないため、固定データを表示する。

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovedCandidate {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub score: u32,
    pub max_score: u32,
    pub approved_date: &'static str,
    /// 採用担当マネージャーへ送付済みか
    pub sent_to_hm: bool,
}

impl ApprovedCandidate {
    pub fn hm_status_label(&self) -> &'static str {
        if self.sent_to_hm {
            "Sent to HM"
        } else {
            "Pending Send"
        }
    }

    pub fn can_send_to_hm(&self) -> bool {
        !self.sent_to_hm
    }

    pub fn score_label(&self) -> String {
        format!("{}/{}", self.score, self.max_score)
    }
}

pub fn approved_candidates() -> Vec<ApprovedCandidate> {
    vec![
        ApprovedCandidate {
            id: 1,
            name: "Alex Thompson",
            role: "Senior Developer",
            score: 89,
            max_score: 94,
            approved_date: "Nov 12, 2024",
            sent_to_hm: true,
        },
        ApprovedCandidate {
            id: 2,
            name: "Maria Garcia",
            role: "Data Scientist",
            score: 91,
            max_score: 94,
            approved_date: "Nov 11, 2024",
            sent_to_hm: true,
        },
        ApprovedCandidate {
            id: 3,
            name: "David Kim",
            role: "DevOps Engineer",
            score: 85,
            max_score: 94,
            approved_date: "Nov 10, 2024",
            sent_to_hm: false,
        },
    ]
}

pub fn approved_badge(count: usize) -> String {
    format!("{} Approved", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_rows() {
        let rows = approved_candidates();
        assert_eq!(rows.len(), 3);
        assert_eq!(approved_badge(rows.len()), "3 Approved");
        assert_eq!(rows[0].score_label(), "89/94");
    }

    #[test]
    fn test_hm_status() {
        let rows = approved_candidates();
        assert_eq!(rows[0].hm_status_label(), "Sent to HM");
        assert!(!rows[0].can_send_to_hm());
        assert_eq!(rows[2].hm_status_label(), "Pending Send");
        assert!(rows[2].can_send_to_hm());
    }
}
