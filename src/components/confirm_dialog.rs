//! Modal yes/no confirmation for destructive actions.

use leptos::prelude::*;

/// Confirmation dialog. Clicking the backdrop or pressing Escape cancels.
#[component]
pub fn ConfirmDialog(
    title: &'static str,
    #[prop(into)] message: Signal<String>,
    #[prop(default = "Confirm")] confirm_text: &'static str,
    #[prop(default = "Cancel")] cancel_text: &'static str,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    // Escape only reaches the dialog once it holds focus.
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            if let Some(dialog) = dialog_ref.get() {
                let _ = dialog.focus();
            }
        });
    }

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div
                node_ref=dialog_ref
                class="dialog dialog--danger"
                role="alertdialog"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h2>{title}</h2>
                <p class="dialog__message">{move || message.get()}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        {cancel_text}
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        {confirm_text}
                    </button>
                </div>
            </div>
        </div>
    }
}
