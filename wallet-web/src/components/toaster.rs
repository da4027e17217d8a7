//! Toast host

use leptos::prelude::*;
use lib_core::Severity;

use crate::state::toast::{use_toast_context, Toast};

#[component]
pub fn Toaster() -> impl IntoView {
    let toast_ctx = use_toast_context();

    view! {
        <div class="toaster">
            <For
                each=move || toast_ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let class = match toast.notification.severity {
                        Severity::Info => "toast",
                        Severity::Success => "toast toast-success",
                        Severity::Destructive => "toast toast-destructive",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class role="status">
                            <div class="toast-title">{toast.notification.title}</div>
                            <div class="toast-message">{toast.notification.message}</div>
                            <button class="toast-close" on:click=move |_| toast_ctx.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
