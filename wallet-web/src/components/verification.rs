//! Content verification form (simulated)
//!
//! Any edit to the input clears the previous result.

use chrono::Local;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use lib_core::content::{content_error_notice, verification_notice, verify};
use shared::dto::content::{ContentBody, ContentKind, VerificationQuery, VerificationResult};
use web_sys::HtmlInputElement;

use super::tab_class;
use crate::services::host::{random_roll, BrowserSleeper};
use crate::state::toast::use_toast_context;

#[component]
pub fn VerificationSection() -> impl IntoView {
    let toasts = use_toast_context();

    let tab = RwSignal::new(ContentKind::Text);
    let text = RwSignal::new(String::new());
    let file = RwSignal::new(None::<ContentBody>);
    let verifying = RwSignal::new(false);
    let result = RwSignal::new(None::<VerificationResult>);

    let on_file_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(picked) = input.files().and_then(|files| files.get(0)) {
            file.set(Some(ContentBody::File {
                name: picked.name(),
                size_bytes: picked.size() as u64,
            }));
            result.set(None);
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let query = match tab.get_untracked() {
            ContentKind::Text => VerificationQuery::Text(text.get_untracked()),
            ContentKind::File => VerificationQuery::File(file.get_untracked()),
        };

        verifying.set(true);
        result.set(None);
        leptos::task::spawn_local(async move {
            match verify(&query, random_roll(), &BrowserSleeper).await {
                Ok(outcome) => {
                    toasts.push(verification_notice(&query, &outcome));
                    result.set(Some(outcome));
                }
                Err(err) => toasts.push(content_error_notice(&err, "verify")),
            }
            verifying.set(false);
        });
    };

    let body = move || match tab.get() {
        ContentKind::Text => view! {
            <div class="field">
                <label for="verify-text-content">"Text Content to Verify"</label>
                <textarea
                    id="verify-text-content"
                    rows="6"
                    placeholder="Paste text content to verify ownership"
                    prop:value=move || text.get()
                    on:input=move |ev| {
                        text.set(event_target_value(&ev));
                        result.set(None);
                    }
                ></textarea>
            </div>
        }
        .into_any(),
        ContentKind::File => view! {
            <div class="dropzone">
                <p>
                    {move || match file.get() {
                        Some(ContentBody::File { name, .. }) => name,
                        _ => "Drag & drop your file here or click to browse".to_string(),
                    }}
                </p>
                <p class="hint">"Upload the file you want to verify ownership for"</p>
                <input id="verify-file-upload" type="file" class="hidden" on:change=on_file_change/>
                <label for="verify-file-upload" class="btn btn-outline">"Browse Files"</label>
            </div>
        }
        .into_any(),
    };

    view! {
        <section class="section">
            <div class="section-header">
                <h2>"Verify Content Ownership"</h2>
                <p>"Check if content has been registered and get ownership details from the blockchain."</p>
            </div>
            <div class="card">
                <h3 class="card-title">"Content Verification"</h3>
                <p class="card-description">
                    "Upload or paste content to verify its ownership on the blockchain"
                </p>
                <div class="tabs">
                    <button
                        type="button"
                        class=move || tab_class(tab.get() == ContentKind::Text)
                        on:click=move |_| tab.set(ContentKind::Text)
                    >
                        "Text"
                    </button>
                    <button
                        type="button"
                        class=move || tab_class(tab.get() == ContentKind::File)
                        on:click=move |_| tab.set(ContentKind::File)
                    >
                        "File/Image"
                    </button>
                </div>
                <form class="form" on:submit=on_submit>
                    {body}
                    <button type="submit" class="btn btn-block" disabled=move || verifying.get()>
                        {move || if verifying.get() { "Verifying..." } else { "Verify Ownership" }}
                    </button>
                </form>
                {move || result.get().map(|outcome| view! { <ResultPanel outcome=outcome/> })}
            </div>
        </section>
    }
}

#[component]
fn ResultPanel(outcome: VerificationResult) -> impl IntoView {
    let similarity = format!("{}%", outcome.similarity);

    if outcome.verified {
        let owner = outcome.owner.unwrap_or_default();
        let registered = outcome
            .timestamp
            .map(|ts| ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();

        view! {
            <div class="result result-verified">
                <h3>"Content Ownership Verified"</h3>
                <p>"This content has been registered on the blockchain with verified ownership."</p>
                <dl>
                    <dt>"Owner Address:"</dt>
                    <dd class="mono">{owner}</dd>
                    <dt>"Registration Time:"</dt>
                    <dd>{registered}</dd>
                    <dt>"Similarity Score:"</dt>
                    <dd>{similarity}</dd>
                </dl>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="result result-unverified">
                <h3>"Content Not Found"</h3>
                <p>"No exact match was found on the blockchain."</p>
                <dl>
                    <dt>"Similarity Score:"</dt>
                    <dd>{similarity}</dd>
                </dl>
                <p>"Consider registering this content to protect your ownership rights."</p>
            </div>
        }
        .into_any()
    }
}
