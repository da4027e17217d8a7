//! Toast notifications

use leptos::prelude::*;
use lib_core::{Notification, NotificationSink};
use uuid::Uuid;

use crate::utils::constants::TOAST_DURATION_MS;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub notification: Notification,
}

/// Global toast queue
#[derive(Clone, Copy)]
pub struct ToastContext {
    pub toasts: RwSignal<Vec<Toast>>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    /// Show a notification and schedule its dismissal.
    pub fn push(&self, notification: Notification) {
        let id = Uuid::new_v4();
        self.toasts.update(|toasts| toasts.push(Toast { id, notification }));

        let context = *self;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
            context.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts
            .try_update(|toasts| toasts.retain(|toast| toast.id != id));
    }
}

/// [`NotificationSink`] that feeds the toast queue
pub struct ToastSink(pub ToastContext);

impl NotificationSink for ToastSink {
    fn notify(&self, notification: Notification) {
        log::debug!("toast: {}", notification.title);
        self.0.push(notification);
    }
}

pub fn provide_toast_context() -> ToastContext {
    let context = ToastContext::new();
    provide_context(context);
    context
}

pub fn use_toast_context() -> ToastContext {
    expect_context::<ToastContext>()
}
