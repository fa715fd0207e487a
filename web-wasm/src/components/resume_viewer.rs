//! レジュメビューア
//!
//! 表示内容は `ResumeDocument` として受け取る。ハイライトは `<mark>` 要素で
//! 描画し、HTML文字列は挿入しない。

use compass_common::{KeywordKind, ResumeDocument, ResumeLine};
use leptos::prelude::*;

fn render_line(line: ResumeLine) -> impl IntoView {
    let segments = line
        .segments
        .into_iter()
        .map(|segment| {
            if segment.highlighted {
                view! { <mark class="keyword-hit">{segment.text}</mark> }.into_any()
            } else {
                segment.text.into_any()
            }
        })
        .collect_view();

    view! { <p class=line.style.css_class()>{segments}</p> }
}

#[component]
pub fn ResumeViewer(document: ResumeDocument) -> impl IntoView {
    let legend = document
        .keywords
        .iter()
        .map(|keyword| {
            let class = match keyword.kind {
                KeywordKind::Match => "legend-chip match",
                KeywordKind::Missing => "legend-chip missing",
            };
            view! { <span class=class>{keyword.legend_label()}</span> }
        })
        .collect_view();

    let banner = document.missing_skills_message().map(|message| {
        view! {
            <div class="missing-banner">
                <span class="missing-icon">"⚠"</span>
                <p>
                    <strong>"Missing Skills: "</strong>
                    {message}
                </p>
            </div>
        }
    });

    let lines = document.lines().into_iter().map(render_line).collect_view();

    view! {
        <section class="card resume-viewer">
            <header class="card-header">
                <h2>"Resume"</h2>
                <div class="card-actions">
                    <button class="btn btn-secondary" type="button">"Download"</button>
                    <button class="btn btn-secondary" type="button">"Full View"</button>
                </div>
            </header>
            <div class="keyword-legend">{legend}</div>
            {banner}
            <div class="resume-body">{lines}</div>
        </section>
    }
}
