//! Catalog card for one product with role-dependent actions.

use leptos::prelude::*;

use crate::net::types::Product;
use crate::state::products::{CatalogAffordances, StockLevel};
use crate::util::format::format_price;

#[component]
pub fn ProductCard(
    product: Product,
    affordances: CatalogAffordances,
    on_edit: Callback<Product>,
    on_delete: Callback<Product>,
    on_add_to_cart: Callback<Product>,
) -> impl IntoView {
    let stock = product.stock_quantity;
    let badge_class = format!("product-card__stock product-card__stock--{}", StockLevel::of(stock).css_modifier());
    let can_add = affordances.can_add_to_cart(&product);
    let image = product.image_url.clone().filter(|u| !u.trim().is_empty()).map(|src| {
        let alt = product.name.clone();
        view! { <img class="product-card__image" src=src alt=alt/> }
    });

    let for_edit = product.clone();
    let for_delete = product.clone();
    let for_cart = product.clone();

    view! {
        <div class="product-card">
            {image}
            <div class="product-card__body">
                <h3 class="product-card__name">{product.name.clone()}</h3>
                <p class="product-card__description">{product.description.clone()}</p>
                <div class="product-card__meta">
                    <span class="product-card__price">{format_price(product.price)}</span>
                    <span class=badge_class>{format!("Stock: {stock}")}</span>
                </div>
                <div class="product-card__actions">
                    <Show when=move || can_add>
                        <button
                            class="btn btn--primary btn--full"
                            on:click={
                                let p = for_cart.clone();
                                move |_| on_add_to_cart.run(p.clone())
                            }
                        >
                            "Add to Cart"
                        </button>
                    </Show>
                    <Show when=move || affordances.manage>
                        <button
                            class="btn btn--secondary"
                            title="Edit product"
                            on:click={
                                let p = for_edit.clone();
                                move |_| on_edit.run(p.clone())
                            }
                        >
                            "Edit"
                        </button>
                        <button
                            class="btn btn--danger"
                            title="Delete product"
                            on:click={
                                let p = for_delete.clone();
                                move |_| on_delete.run(p.clone())
                            }
                        >
                            "Delete"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
