//! アップロード画面（Home）の状態
//!
//! ファイルハンドルの型はプラットフォーム依存なので `UploadFile` で抽象化する。
//! WASM側では `web_sys::File` のラッパー、テストではダミー型を使う。

use crate::error::{Error, Result};
use crate::notify::Notification;
use uuid::Uuid;

/// レジュメとして受け付ける拡張子
pub const RESUME_ACCEPT: &str = ".pdf,.doc,.docx";
/// 求人票として受け付ける拡張子
pub const JOB_DESCRIPTION_ACCEPT: &str = ".pdf,.doc,.docx,.txt";

/// アップロード対象ファイル
pub trait UploadFile {
    fn file_name(&self) -> String;
}

/// 選択中のファイル（画面遷移で破棄される）
#[derive(Debug, Clone)]
pub struct UploadState<F> {
    resumes: Vec<F>,
    job_description: Option<F>,
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        Self {
            resumes: Vec::new(),
            job_description: None,
        }
    }
}

impl<F: UploadFile> UploadState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resumes(&self) -> &[F] {
        &self.resumes
    }

    pub fn job_description(&self) -> Option<&F> {
        self.job_description.as_ref()
    }

    /// レジュメを追加（既存の選択は保持し、末尾に追加）
    pub fn add_resume_files(&mut self, files: Vec<F>) -> Option<Notification> {
        if files.is_empty() {
            return None;
        }
        let count = files.len();
        self.resumes.extend(files);
        Some(Notification::success(
            "Resumes Uploaded",
            format!("{} file(s) uploaded successfully.", count),
        ))
    }

    /// 求人票を設定（以前の選択は置き換え）
    pub fn set_job_description(&mut self, file: F) -> Notification {
        let name = file.file_name();
        self.job_description = Some(file);
        Notification::success(
            "Job Description Uploaded",
            format!("{} has been uploaded successfully.", name),
        )
    }

    /// 求人票とレジュメ1件以上が揃っているか
    pub fn is_ready(&self) -> bool {
        !self.resumes.is_empty() && self.job_description.is_some()
    }

    pub fn resume_names(&self) -> Vec<String> {
        self.resumes.iter().map(UploadFile::file_name).collect()
    }

    pub fn job_description_name(&self) -> Option<String> {
        self.job_description.as_ref().map(UploadFile::file_name)
    }

    /// 送信リクエストを組み立てる
    pub fn match_request(&self) -> Result<MatchRequest<'_, F>> {
        let job_description = match (&self.job_description, self.resumes.is_empty()) {
            (Some(jd), false) => jd,
            _ => return Err(Error::MissingUploads),
        };

        Ok(MatchRequest {
            job_description,
            job_description_id: Uuid::new_v4().to_string(),
            resumes: self
                .resumes
                .iter()
                .map(|file| (file, Uuid::new_v4().to_string()))
                .collect(),
        })
    }
}

/// multipartの値
#[derive(Debug, PartialEq)]
pub enum FieldValue<'a, F> {
    File(&'a F),
    Text(&'a str),
}

/// multipartの1フィールド
#[derive(Debug, PartialEq)]
pub struct FormField<'a, F> {
    pub name: &'static str,
    pub value: FieldValue<'a, F>,
}

/// `POST /evaluate_batch` の送信内容
///
/// バックエンドは保存ファイル名の接頭辞として `jd_uuid` と
/// `resume_uuids`（レジュメと同数・同順）を要求する。
#[derive(Debug)]
pub struct MatchRequest<'a, F> {
    pub job_description: &'a F,
    pub job_description_id: String,
    pub resumes: Vec<(&'a F, String)>,
}

impl<'a, F> MatchRequest<'a, F> {
    /// フィールドを送信順に列挙
    pub fn fields(&self) -> Vec<FormField<'_, F>> {
        let mut fields = Vec::with_capacity(2 + self.resumes.len() * 2);
        fields.push(FormField { name: "jd", value: FieldValue::File(self.job_description) });
        fields.push(FormField { name: "jd_uuid", value: FieldValue::Text(&self.job_description_id) });
        for (file, _) in &self.resumes {
            fields.push(FormField { name: "resumes", value: FieldValue::File(*file) });
        }
        for (_, id) in &self.resumes {
            fields.push(FormField { name: "resume_uuids", value: FieldValue::Text(id) });
        }
        fields
    }

    pub fn resume_count(&self) -> usize {
        self.resumes.len()
    }
}

/// ホーム画面の集計カード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickStat {
    pub value: u32,
    pub label: &'static str,
    pub tone: &'static str,
}

pub const QUICK_STATS: [QuickStat; 3] = [
    QuickStat { value: 24, label: "Candidates Today", tone: "blue" },
    QuickStat { value: 18, label: "Under Review", tone: "green" },
    QuickStat { value: 6, label: "Approved", tone: "purple" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct NamedFile(&'static str);

    impl UploadFile for NamedFile {
        fn file_name(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_add_resume_files_appends_in_order() {
        let mut state = UploadState::new();
        state.add_resume_files(vec![NamedFile("a.pdf"), NamedFile("b.pdf")]);
        let note = state.add_resume_files(vec![NamedFile("c.docx")]).expect("通知なし");

        assert_eq!(state.resume_names(), vec!["a.pdf", "b.pdf", "c.docx"]);
        assert_eq!(note.title, "Resumes Uploaded");
        assert_eq!(note.description, "1 file(s) uploaded successfully.");
        assert!(!note.is_destructive());
    }

    #[test]
    fn test_add_empty_selection_is_silent() {
        let mut state: UploadState<NamedFile> = UploadState::new();
        assert!(state.add_resume_files(vec![]).is_none());
        assert!(state.resumes().is_empty());
    }

    #[test]
    fn test_set_job_description_replaces() {
        let mut state = UploadState::new();
        state.set_job_description(NamedFile("old.txt"));
        let note = state.set_job_description(NamedFile("jd.pdf"));

        assert_eq!(state.job_description(), Some(&NamedFile("jd.pdf")));
        assert_eq!(note.title, "Job Description Uploaded");
        assert_eq!(note.description, "jd.pdf has been uploaded successfully.");
    }

    #[test]
    fn test_is_ready() {
        let mut state = UploadState::new();
        assert!(!state.is_ready());
        state.add_resume_files(vec![NamedFile("r.pdf")]);
        assert!(!state.is_ready());
        state.set_job_description(NamedFile("jd.pdf"));
        assert!(state.is_ready());
    }

    #[test]
    fn test_match_request_requires_both() {
        let mut state = UploadState::new();
        state.set_job_description(NamedFile("jd.pdf"));
        assert!(matches!(state.match_request(), Err(Error::MissingUploads)));

        let mut state = UploadState::new();
        state.add_resume_files(vec![NamedFile("r.pdf")]);
        assert!(matches!(state.match_request(), Err(Error::MissingUploads)));
    }

    #[test]
    fn test_match_request_fields_order() {
        let mut state = UploadState::new();
        state.set_job_description(NamedFile("jd.pdf"));
        state.add_resume_files(vec![NamedFile("r1.pdf"), NamedFile("r2.pdf")]);

        let request = state.match_request().expect("リクエスト生成失敗");
        let names: Vec<&str> = request.fields().iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec!["jd", "jd_uuid", "resumes", "resumes", "resume_uuids", "resume_uuids"]
        );

        let fields = request.fields();
        assert_eq!(fields[0].value, FieldValue::File(&NamedFile("jd.pdf")));
        assert_eq!(fields[3].value, FieldValue::File(&NamedFile("r2.pdf")));
    }

    #[test]
    fn test_match_request_ids_are_uuids() {
        let mut state = UploadState::new();
        state.set_job_description(NamedFile("jd.pdf"));
        state.add_resume_files(vec![NamedFile("r1.pdf"), NamedFile("r2.pdf")]);
        let request = state.match_request().unwrap();

        assert!(Uuid::parse_str(&request.job_description_id).is_ok());
        assert_eq!(request.resume_count(), 2);
        assert_ne!(request.resumes[0].1, request.resumes[1].1);
        assert!(request.resumes.iter().all(|(_, id)| Uuid::parse_str(id).is_ok()));
    }

    #[test]
    fn test_quick_stats() {
        let labels: Vec<&str> = QUICK_STATS.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Candidates Today", "Under Review", "Approved"]);
    }
}
