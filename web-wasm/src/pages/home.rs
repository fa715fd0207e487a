//! Home: 求人票とレジュメのアップロード

use crate::api::HttpScoringService;
use crate::browser::{BrowserFile, BrowserNavigator};
use crate::components::toast::Toaster;
use crate::components::upload_card::UploadCard;
use crate::config::app_config;
use compass_common::upload::{JOB_DESCRIPTION_ACCEPT, RESUME_ACCEPT};
use compass_common::{submit_match, Notifier, SubmitOutcome, UploadState, QUICK_STATS};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn Home() -> impl IntoView {
    let toaster = expect_context::<Toaster>();

    // File は Send でないためローカル保持、表示用の名前だけシグナルに置く
    let uploads = StoredValue::new_local(UploadState::<BrowserFile>::new());
    let resume_names = RwSignal::new(Vec::<String>::new());
    let jd_names = RwSignal::new(Vec::<String>::new());
    let (submitting, set_submitting) = signal(false);

    let refresh = move || {
        uploads.with_value(|u| {
            resume_names.set(u.resume_names());
            jd_names.set(u.job_description_name().into_iter().collect());
        });
    };

    let on_resumes = move |files: Vec<BrowserFile>| {
        let note = uploads.try_update_value(|u| u.add_resume_files(files)).flatten();
        refresh();
        if let Some(note) = note {
            toaster.notify(note);
        }
    };

    let on_job_description = move |files: Vec<BrowserFile>| {
        let Some(file) = files.into_iter().next() else {
            return;
        };
        let note = uploads.try_update_value(|u| u.set_job_description(file));
        refresh();
        if let Some(note) = note {
            toaster.notify(note);
        }
    };

    let on_submit = move |_| {
        if submitting.get_untracked() {
            return;
        }
        let snapshot = uploads.get_value();
        set_submitting.set(true);

        spawn_local(async move {
            let service = HttpScoringService::new(app_config());
            let outcome = submit_match(&snapshot, &service, &BrowserNavigator, &toaster).await;
            // 遷移中はボタンを無効のままにする
            if !matches!(outcome, SubmitOutcome::Submitted(_)) {
                set_submitting.set(false);
            }
        });
    };

    view! {
        <div class="page home">
            <header class="page-header">
                <h1>"Welcome L&D to Candidate Compass"</h1>
                <p class="text-muted">
                    "Upload a job description and resumes to start matching candidates."
                </p>
            </header>

            <div class="quick-stats">
                {QUICK_STATS
                    .iter()
                    .map(|stat| view! {
                        <div class=format!("stat-card {}", stat.tone)>
                            <span class="stat-value">{stat.value}</span>
                            <span class="stat-label">{stat.label}</span>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="upload-grid">
                <UploadCard
                    title="Upload Resumes"
                    hint="PDF, DOC, DOCX (multiple files allowed)"
                    icon="📄"
                    input_id="resume-input"
                    accept=RESUME_ACCEPT
                    multiple=true
                    selected=resume_names
                    on_files=on_resumes
                />
                <UploadCard
                    title="Job Description"
                    hint="PDF, DOC, DOCX, TXT"
                    icon="💼"
                    input_id="jd-input"
                    accept=JOB_DESCRIPTION_ACCEPT
                    selected=jd_names
                    on_files=on_job_description
                />
            </div>

            <div class="submit-row">
                <button
                    class="btn btn-primary btn-large"
                    disabled=move || submitting.get()
                    on:click=on_submit
                >
                    {move || if submitting.get() { "Processing..." } else { "Start Candidate Evaluation" }}
                </button>
            </div>
        </div>
    }
}
