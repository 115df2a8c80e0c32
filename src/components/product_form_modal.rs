//! Shared add/edit product modal bound to the catalog's draft.

use leptos::prelude::*;

use crate::state::products::{DraftField, ProductsState};

/// Add/edit form. Title and submit label switch on whether the open editor
/// has a target product.
#[component]
pub fn ProductFormModal(
    state: RwSignal<ProductsState>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_edit = move || state.with(|s| s.editor.as_ref().is_some_and(|e| e.is_edit()));
    let title = move || if is_edit() { "Edit Product" } else { "Add New Product" };
    let submit_label = move || if is_edit() { "Update Product" } else { "Add Product" };

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <div class="dialog-backdrop">
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <header class="dialog__header">
                    <h2>{title}</h2>
                    <button class="dialog__close" aria-label="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </header>
                <form class="product-form" on:submit=on_form_submit>
                    <DraftInput state=state field=DraftField::Name label="Product Name" placeholder="Paracetamol 500mg" required=true/>
                    <label class="dialog__label">
                        "Description"
                        <textarea
                            class="dialog__input"
                            rows="3"
                            placeholder="Product description..."
                            required=true
                            prop:value=move || draft_value(state, DraftField::Description)
                            on:input=move |ev| {
                                state.update(|s| s.set_draft_field(DraftField::Description, event_target_value(&ev)));
                            }
                        ></textarea>
                    </label>
                    <div class="product-form__row">
                        <DraftInput state=state field=DraftField::Price label="Price" placeholder="9.99" input_type="number" step="0.01" required=true/>
                        <DraftInput state=state field=DraftField::StockQuantity label="Stock Quantity" placeholder="100" input_type="number" step="1" required=true/>
                    </div>
                    <div class="product-form__row">
                        <DraftInput state=state field=DraftField::Category label="Category" placeholder="Pain Relief"/>
                        <DraftInput state=state field=DraftField::Manufacturer label="Manufacturer" placeholder="Pharma Corp"/>
                    </div>
                    <DraftInput state=state field=DraftField::ImageUrl label="Image URL" placeholder="https://example.com/image.jpg"/>
                    <div class="dialog__actions">
                        <button class="btn btn--primary" type="submit">{submit_label}</button>
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn draft_value(state: RwSignal<ProductsState>, field: DraftField) -> String {
    state.with(|s| {
        s.editor
            .as_ref()
            .map(|e| e.draft.field(field).to_owned())
            .unwrap_or_default()
    })
}

/// One labelled text input bound to a draft field.
#[component]
fn DraftInput(
    state: RwSignal<ProductsState>,
    field: DraftField,
    label: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] step: Option<&'static str>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="dialog__label">
            {label}
            <input
                class="dialog__input"
                type=input_type
                min=(input_type == "number").then_some("0")
                step=step
                placeholder=placeholder
                required=required
                prop:value=move || draft_value(state, field)
                on:input=move |ev| {
                    state.update(|s| s.set_draft_field(field, event_target_value(&ev)));
                }
            />
        </label>
    }
}
