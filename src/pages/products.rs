//! Product catalog page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Staff (admin/pharmacist) manage the catalog through the shared add/edit
//! modal and a delete confirmation; everyone else browses and adds to the
//! cart. Every successful mutation refetches the full list.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::product_card::ProductCard;
use crate::components::product_form_modal::ProductFormModal;
use crate::net::api;
use crate::net::http::BrowserClient;
use crate::net::types::Product;
use crate::state::auth::AuthState;
use crate::state::cart::CartState;
use crate::state::notify::Notices;
use crate::state::products::{self, CatalogAffordances, ProductsState, Submission};
use crate::util::task::spawn_in_browser;

fn load_products(client: StoredValue<BrowserClient>, state: RwSignal<ProductsState>, notices: RwSignal<Notices>) {
    state.update(ProductsState::begin_load);
    spawn_in_browser(async move {
        let result = api::fetch_products(&client.get_value()).await;
        state.update(|s| s.apply_products(result, &notices));
    });
}

fn save_product(client: StoredValue<BrowserClient>, state: RwSignal<ProductsState>, notices: RwSignal<Notices>) {
    let Some(submission) = state.with_untracked(|s| s.submission(&notices)) else {
        return;
    };
    spawn_in_browser(async move {
        let http = client.get_value();
        let result = match &submission {
            Submission::Create(payload) => api::create_product(&http, payload).await,
            Submission::Update { id, payload } => api::update_product(&http, *id, payload).await,
        };
        if state.try_update(|s| s.apply_saved(&submission, result, &notices)) == Some(true) {
            load_products(client, state, notices);
        }
    });
}

fn delete_confirmed(client: StoredValue<BrowserClient>, state: RwSignal<ProductsState>, notices: RwSignal<Notices>) {
    let Some(id) = state.with_untracked(ProductsState::confirm_delete) else {
        return;
    };
    spawn_in_browser(async move {
        let result = api::delete_product(&client.get_value(), id).await;
        if state.try_update(|s| s.apply_deleted(result, &notices)) == Some(true) {
            load_products(client, state, notices);
        }
    });
}

/// Products page.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<Notices>>();
    let cart = expect_context::<RwSignal<CartState>>();
    let client = StoredValue::new(expect_context::<BrowserClient>());
    let state = RwSignal::new(ProductsState::default());

    load_products(client, state, notices);

    let affordances = move || CatalogAffordances::for_role(auth.with(AuthState::role));

    let on_add = move |_| state.update(|s| s.open_editor(None));
    let on_edit = Callback::new(move |product: Product| state.update(|s| s.open_editor(Some(&product))));
    let on_delete = Callback::new(move |product: Product| state.update(|s| s.request_delete(&product)));
    let on_add_to_cart = Callback::new(move |product: Product| {
        cart.update(|c| products::add_to_cart(c, &product, &notices));
    });
    let on_submit = Callback::new(move |()| save_product(client, state, notices));
    let on_close = Callback::new(move |()| state.update(ProductsState::close_editor));
    let on_delete_confirm = Callback::new(move |()| delete_confirmed(client, state, notices));
    let on_delete_cancel = Callback::new(move |()| state.update(ProductsState::cancel_delete));

    let delete_prompt = Signal::derive(move || {
        state.with(|s| s.pending_delete.as_ref().map(|p| p.prompt()).unwrap_or_default())
    });

    view! {
        <Show
            when=move || !state.with(|s| s.loading)
            fallback=|| view! { <div class="page-spinner" aria-busy="true"></div> }
        >
            <div class="products-page">
                <header class="page-header">
                    <h1>"Products"</h1>
                    <Show when=move || affordances().manage>
                        <button class="btn btn--primary" on:click=on_add>
                            "Add Product"
                        </button>
                    </Show>
                </header>

                <input
                    class="products-page__search"
                    type="search"
                    placeholder="Search products..."
                    prop:value=move || state.with(|s| s.search.clone())
                    on:input=move |ev| state.update(|s| s.search = event_target_value(&ev))
                />

                <div class="products-page__grid">
                    {move || {
                        let affordances = affordances();
                        state
                            .with(|s| s.visible().into_iter().cloned().collect::<Vec<_>>())
                            .into_iter()
                            .map(|product| {
                                view! {
                                    <ProductCard
                                        product=product
                                        affordances=affordances
                                        on_edit=on_edit
                                        on_delete=on_delete
                                        on_add_to_cart=on_add_to_cart
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                {move || {
                    state
                        .with(ProductsState::empty_message)
                        .map(|msg| view! { <p class="products-page__empty">{msg}</p> })
                }}
            </div>
        </Show>

        <Show when=move || state.with(|s| s.editor.is_some())>
            <ProductFormModal state=state on_submit=on_submit on_close=on_close/>
        </Show>

        <Show when=move || state.with(|s| s.pending_delete.is_some())>
            <ConfirmDialog
                title="Delete Product"
                message=delete_prompt
                confirm_text="Delete"
                on_confirm=on_delete_confirm
                on_cancel=on_delete_cancel
            />
        </Show>
    }
}
