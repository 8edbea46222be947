//! Top-right stack of transient notifications.

#[cfg(test)]
#[path = "toast_stack_test.rs"]
mod toast_stack_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::toast::{Toast, ToastKind, ToastState};

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    }
}

/// Renders every queued toast; each one dismisses itself after the
/// configured timeout or on click.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let timeout_ms = expect_context::<ClientConfig>().toast_timeout_ms;

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast timeout_ms=timeout_ms/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, timeout_ms: u32) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(timeout_ms).await;
        toasts.try_update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = timeout_ms;

    view! {
        <div class={toast_class(toast.kind)} role="status" on:click=move |_| toasts.update(|t| t.dismiss(id))>
            {toast.message}
        </div>
    }
}
