//! Modal dialogs

use leptos::*;

use crate::components::icons::*;

/// Dialog shown while `show` is true. Backdrop clicks, the close button and
/// Escape all call `on_close`; the owner decides what closing means.
#[component]
pub fn Modal(
    #[prop(into)] show: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional, into)] title: String,
    #[prop(optional, into)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" && show.get_untracked() {
            on_close.call(());
        }
    });
    on_cleanup(move || escape.remove());

    let title = store_value(title);
    let class = store_value(class);
    let children = store_value(children);

    view! {
        <Show when=move || show.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.call(())>
                <div
                    class=format!("modal modal-md {}", class.get_value())
                    role="dialog"
                    on:click=|e| e.stop_propagation()
                >
                    <div class="modal-header">
                        <h3 class="modal-title">{title.get_value()}</h3>
                        <button class="btn btn-ghost modal-close" on:click=move |_| on_close.call(())>
                            <Icon name=IconName::X />
                        </button>
                    </div>
                    <div class="modal-body">{children.with_value(|c| c())}</div>
                </div>
            </div>
        </Show>
    }
}

/// Yes/no question before a destructive action.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] show: Signal<bool>,
    #[prop(into)] message: Signal<String>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal show=show on_close=on_cancel title="Please confirm" class="confirm-dialog">
            <p class="confirm-message">{move || message.get()}</p>
            <div class="confirm-actions">
                <button class="btn btn-ghost" on:click=move |_| on_cancel.call(())>
                    "Cancel"
                </button>
                <button class="btn btn-danger" on:click=move |_| on_confirm.call(())>
                    <Icon name=IconName::Trash size=IconSize::Sm />
                    "Delete"
                </button>
            </div>
        </Modal>
    }
}
