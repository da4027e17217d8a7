//! Content registration form (simulated)

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use lib_core::content::{content_error_notice, register, registration_notice};
use shared::dto::content::{ContentKind, ContentSubmission};
use web_sys::HtmlInputElement;

use super::tab_class;
use crate::services::host::BrowserSleeper;
use crate::state::toast::use_toast_context;

#[component]
pub fn RegistrationSection() -> impl IntoView {
    let toasts = use_toast_context();

    let tab = RwSignal::new(ContentKind::Text);
    let title = RwSignal::new(String::new());
    let text = RwSignal::new(String::new());
    let file = RwSignal::new(None::<(String, u64)>);
    let submitting = RwSignal::new(false);

    let on_file_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(picked) = input.files().and_then(|files| files.get(0)) {
            file.set(Some((picked.name(), picked.size() as u64)));
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let (submission, action) = match tab.get_untracked() {
            ContentKind::Text => (
                ContentSubmission::text(title.get_untracked(), text.get_untracked()),
                "register",
            ),
            ContentKind::File => {
                let (name, size_bytes) = file.get_untracked().unwrap_or_default();
                (ContentSubmission::file(title.get_untracked(), name, size_bytes), "upload")
            }
        };

        submitting.set(true);
        leptos::task::spawn_local(async move {
            match register(submission, &BrowserSleeper).await {
                Ok(receipt) => toasts.push(registration_notice(&receipt)),
                Err(err) => toasts.push(content_error_notice(&err, action)),
            }
            submitting.set(false);
        });
    };

    let title_field = move || {
        view! {
            <div class="field">
                <label for="content-title">"Content Title"</label>
                <input
                    id="content-title"
                    type="text"
                    placeholder="Enter a title for your content"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </div>
        }
    };

    let body = move || match tab.get() {
        ContentKind::Text => view! {
            {title_field()}
            <div class="field">
                <label for="text-content">"Text Content"</label>
                <textarea
                    id="text-content"
                    rows="6"
                    placeholder="Enter your text content here"
                    prop:value=move || text.get()
                    on:input=move |ev| text.set(event_target_value(&ev))
                ></textarea>
            </div>
        }
        .into_any(),
        ContentKind::File => view! {
            {title_field()}
            <div class="dropzone">
                <p>
                    {move || {
                        file.get()
                            .map(|(name, _)| name)
                            .unwrap_or_else(|| "Drag & drop your file here or click to browse".to_string())
                    }}
                </p>
                <p class="hint">"Supports images, documents, and other files up to 50MB"</p>
                <input id="file-upload" type="file" class="hidden" on:change=on_file_change/>
                <label for="file-upload" class="btn btn-outline">"Browse Files"</label>
            </div>
        }
        .into_any(),
    };

    view! {
        <section class="section">
            <div class="section-header">
                <h2>"Register Your Content"</h2>
                <p>
                    "Protect your intellectual property by registering it on the blockchain for immutable proof of ownership."
                </p>
            </div>
            <div class="card">
                <h3 class="card-title">"Content Registration"</h3>
                <p class="card-description">
                    "Upload your content to receive blockchain-verified proof of ownership"
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
                    <button type="submit" class="btn btn-block" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Registering..." } else { "Register on Blockchain" }}
                    </button>
                </form>
            </div>
        </section>
    }
}
