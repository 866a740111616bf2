//! Toast notifications

use leptos::*;

use crate::components::icons::*;
use crate::state::{use_admin_state, Toast, ToastPhase};

/// Renders every toast in the panel's queue.
#[component]
pub fn ToastContainer() -> impl IntoView {
    let state = use_admin_state();
    let panel = state.panel;

    view! {
        <div class="toast-container">
            <For
                each=move || panel.with(|p| p.toasts.visible().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let state = state.clone();
                    let id = toast.id;
                    view! { <ToastItem toast=toast on_close=Callback::new(move |_| state.dismiss_toast(id)) /> }
                }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, on_close: Callback<()>) -> impl IntoView {
    let panel = use_admin_state().panel;
    let id = toast.id;
    let kind_class = toast.kind.class();

    // The row stays mounted while hiding so the exit transition can run.
    let class = move || {
        let phase = panel.with(|p| p.toasts.phase(id)).unwrap_or(ToastPhase::Hiding);
        let phase_class = match phase {
            ToastPhase::Shown => "toast-enter",
            ToastPhase::Hiding => "toast-exit",
        };
        format!("toast {kind_class} {phase_class}")
    };

    view! {
        <div class=class role="alert">
            <div class="toast-icon">
                <Icon name=IconName::from_name(toast.kind.icon()) />
            </div>
            <div class="toast-content">
                <div class="toast-title">{toast.kind.title()}</div>
                <div class="toast-message">{toast.message}</div>
            </div>
            <button class="toast-close" on:click=move |_| on_close.call(())>
                <Icon name=IconName::X size=IconSize::Sm />
            </button>
        </div>
    }
}
