//! Legal-document analysis page: upload, analyze, and follow-up Q&A.

use leptos::prelude::*;

use crate::components::layout::MainLayout;
use crate::components::qa_panel::QaPanel;
use crate::components::report_card::DocumentReportCard;
use crate::components::toast::notify;
use crate::net::types::AnalysisRequest;
use crate::state::analysis::AnalysisPhase;
use crate::state::document::{DocumentState, SelectedFile};
use crate::state::toast::{ToastKind, ToastState};

/// Document analysis page — upload card and report on the left, Q&A
/// assistant on the right.
#[component]
pub fn DocumentAnalysisPage() -> impl IntoView {
    let document = expect_context::<RwSignal<DocumentState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let analyzing = move || document.get().lifecycle.phase == AnalysisPhase::InFlight;

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            let input = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
            if let Some(input) = input {
                if let Some(file) = input.files().and_then(|list| list.get(0)) {
                    document.update(|d| {
                        d.select_file(SelectedFile {
                            name: file.name(),
                            size_bytes: file.size(),
                        });
                    });
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_clear = move |_| document.update(DocumentState::clear_file);

    let on_analyze = move |_| {
        let Some(file) = document.get().file else {
            notify(toasts, ToastKind::Error, "Please upload a document first");
            return;
        };
        let request = AnalysisRequest::Document {
            name: file.name,
            size_bytes: file.size_bytes,
        };
        if request.is_empty() {
            notify(toasts, ToastKind::Error, "Please upload a document first");
            return;
        }

        let token = document
            .try_update(DocumentState::begin_analysis)
            .unwrap_or_default();

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::analyze_document(&request).await {
                    Ok(report) => document.update(|d| {
                        d.apply_report(token, report);
                    }),
                    Err(err) => {
                        leptos::logging::error!("document analysis failed: {err}");
                        let was_current = document
                            .try_update(|d| d.fail_analysis(token))
                            .unwrap_or(false);
                        if was_current {
                            notify(toasts, ToastKind::Error, "Failed to analyze the document");
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, token);
        }
    };

    view! {
        <MainLayout>
            <div class="document-page">
                <header class="document-page__header">
                    <h1>"Legal Document Analyzer"</h1>
                    <p class="document-page__subtitle">
                        "Upload legal documents for AI-powered analysis, summaries, and \
                         interactive Q&A."
                    </p>
                </header>

                <div class="document-page__grid">
                    <div class="document-page__left">
                        <div class="card upload-card">
                            <div class="card__header">
                                <h2 class="card__title">"Document Upload"</h2>
                                <p class="card__description">
                                    "Upload a legal document to analyze and summarize"
                                </p>
                            </div>
                            <div class="card__content">
                                {move || {
                                    document
                                        .get()
                                        .file
                                        .map_or_else(
                                            || {
                                                view! {
                                                    <div class="upload-card__dropzone">
                                                        <p>"Drag and drop your document here or click to browse"</p>
                                                        <p class="upload-card__hint">
                                                            "Supports PDF, DOCX, and TXT files"
                                                        </p>
                                                        <input
                                                            id="document-upload"
                                                            class="upload-card__file-input"
                                                            type="file"
                                                            accept=".pdf,.docx,.txt"
                                                            on:change=on_file_change
                                                        />
                                                        <label class="btn" for="document-upload">
                                                            "Browse Files"
                                                        </label>
                                                    </div>
                                                }
                                                    .into_any()
                                            },
                                            |file| {
                                                view! {
                                                    <div class="upload-card__file-row">
                                                        <div>
                                                            <p class="upload-card__file-name">{file.name.clone()}</p>
                                                            <p class="upload-card__file-size">{file.size_label()}</p>
                                                        </div>
                                                        <button
                                                            class="btn upload-card__clear"
                                                            title="Remove file"
                                                            on:click=on_clear
                                                        >
                                                            "\u{d7}"
                                                        </button>
                                                    </div>
                                                }
                                                    .into_any()
                                            },
                                        )
                                }}
                            </div>
                            <div class="card__footer">
                                <button
                                    class="btn btn--primary upload-card__analyze"
                                    disabled=move || analyzing() || document.get().file.is_none()
                                    on:click=on_analyze
                                >
                                    {move || if analyzing() { "Analyzing..." } else { "Analyze Document" }}
                                </button>
                            </div>
                        </div>

                        {move || {
                            analyzing()
                                .then(|| {
                                    view! {
                                        <div class="card document-page__progress">
                                            <div class="spinner"></div>
                                            <p>"Analyzing document..."</p>
                                            <p class="document-page__progress-hint">
                                                "This may take a minute"
                                            </p>
                                        </div>
                                    }
                                })
                        }}

                        {move || {
                            document
                                .get()
                                .report
                                .map(|report| view! { <DocumentReportCard report=report/> })
                        }}
                    </div>

                    <div class="document-page__right">
                        <QaPanel/>
                    </div>
                </div>
            </div>
        </MainLayout>
    }
}
