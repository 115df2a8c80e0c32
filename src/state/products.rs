//! Product catalog screen state: list, search, editor modal, delete
//! confirmation, and role-based affordances.
//!
//! SYSTEM CONTEXT
//! ==============
//! The products page owns one `RwSignal<ProductsState>`. Mutations are never
//! merged locally; a successful save or delete asks the page to refetch the
//! whole list.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use crate::net::http::ApiError;
use crate::net::types::{Id, Product, ProductPayload, Role};
use crate::state::cart::CartState;
use crate::state::notify::{Notifier, report_failure};

pub const LOAD_PRODUCTS_FAILED: &str = "Failed to load products";
pub const SAVE_FAILED: &str = "Failed to save product";
pub const DELETE_FAILED: &str = "Failed to delete product";
pub const CART_FAILED: &str = "Failed to add product to cart";
pub const PRODUCT_ADDED: &str = "Product added successfully!";
pub const PRODUCT_UPDATED: &str = "Product updated successfully!";
pub const PRODUCT_DELETED: &str = "Product deleted successfully!";

/// Stock above this count is shown as plentiful.
pub const LOW_STOCK_THRESHOLD: u64 = 10;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("product name is required")]
    MissingName,
    #[error("description is required")]
    MissingDescription,
    #[error("price must be a non-negative number")]
    InvalidPrice,
    #[error("stock quantity must be a non-negative whole number")]
    InvalidStock,
}

/// Editable form fields, kept as the raw text typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock_quantity: String,
    pub category: String,
    pub manufacturer: String,
    pub image_url: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Description,
    Price,
    StockQuantity,
    Category,
    Manufacturer,
    ImageUrl,
}

impl ProductDraft {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            stock_quantity: product.stock_quantity.to_string(),
            category: product.category.clone().unwrap_or_default(),
            manufacturer: product.manufacturer.clone().unwrap_or_default(),
            image_url: product.image_url.clone().unwrap_or_default(),
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Description => &self.description,
            DraftField::Price => &self.price,
            DraftField::StockQuantity => &self.stock_quantity,
            DraftField::Category => &self.category,
            DraftField::Manufacturer => &self.manufacturer,
            DraftField::ImageUrl => &self.image_url,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Description => &mut self.description,
            DraftField::Price => &mut self.price,
            DraftField::StockQuantity => &mut self.stock_quantity,
            DraftField::Category => &mut self.category,
            DraftField::Manufacturer => &mut self.manufacturer,
            DraftField::ImageUrl => &mut self.image_url,
        };
        *slot = value;
    }

    /// Validate and convert to the request body.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field.
    pub fn to_payload(&self) -> Result<ProductPayload, DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::MissingName);
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(DraftError::MissingDescription);
        }
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or(DraftError::InvalidPrice)?;
        let stock_quantity = self
            .stock_quantity
            .trim()
            .parse::<u64>()
            .map_err(|_| DraftError::InvalidStock)?;
        Ok(ProductPayload {
            name: name.to_owned(),
            description: description.to_owned(),
            price,
            stock_quantity,
            category: optional(&self.category),
            manufacturer: optional(&self.manufacturer),
            image_url: optional(&self.image_url),
        })
    }
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Open add/edit modal. `target` is the product being edited, `None` when
/// creating.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductEditor {
    pub target: Option<Id>,
    pub draft: ProductDraft,
}

impl ProductEditor {
    pub fn is_edit(&self) -> bool {
        self.target.is_some()
    }
}

/// A validated save request chosen by editor target.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    Create(ProductPayload),
    Update { id: Id, payload: ProductPayload },
}

/// Delete awaiting confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: Id,
    pub name: String,
}

impl PendingDelete {
    pub fn prompt(&self) -> String {
        format!("Are you sure you want to delete \"{}\"? This action cannot be undone.", self.name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockLevel {
    Plenty,
    Low,
    Out,
}

impl StockLevel {
    pub fn of(stock: u64) -> Self {
        if stock > LOW_STOCK_THRESHOLD {
            Self::Plenty
        } else if stock > 0 {
            Self::Low
        } else {
            Self::Out
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Plenty => "plenty",
            Self::Low => "low",
            Self::Out => "out",
        }
    }
}

/// Controls a role may see on the catalog page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogAffordances {
    /// "Add Product", edit, and delete.
    pub manage: bool,
    /// "Add to Cart" (still subject to stock per product).
    pub shop: bool,
}

impl CatalogAffordances {
    pub fn for_role(role: Role) -> Self {
        let manage = role.is_privileged();
        Self { manage, shop: !manage }
    }

    pub fn can_add_to_cart(self, product: &Product) -> bool {
        self.shop && product.stock_quantity > 0
    }
}

/// Case-insensitive substring match on product name. An empty query keeps
/// every product.
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

#[derive(Clone, Debug, Default)]
pub struct ProductsState {
    pub products: Vec<Product>,
    pub loading: bool,
    pub search: String,
    pub editor: Option<ProductEditor>,
    pub pending_delete: Option<PendingDelete>,
}

impl ProductsState {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn apply_products<N: Notifier>(&mut self, result: Result<Vec<Product>, ApiError>, notifier: &N) {
        self.loading = false;
        match result {
            Ok(list) => self.products = list,
            Err(e) => {
                report_failure(notifier, "load products", &e, LOAD_PRODUCTS_FAILED);
                self.products.clear();
            }
        }
    }

    pub fn visible(&self) -> Vec<&Product> {
        filter_products(&self.products, &self.search)
    }

    /// Message for an empty result, `None` when something is visible.
    pub fn empty_message(&self) -> Option<&'static str> {
        if !self.visible().is_empty() {
            return None;
        }
        Some(if self.search.is_empty() {
            "No products found"
        } else {
            "No products found matching your search"
        })
    }

    // ---- editor ---------------------------------------------------------

    /// Open the modal, prefilled from `product` when editing.
    pub fn open_editor(&mut self, product: Option<&Product>) {
        self.editor = Some(match product {
            Some(p) => ProductEditor { target: Some(p.id), draft: ProductDraft::from_product(p) },
            None => ProductEditor::default(),
        });
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    pub fn set_draft_field(&mut self, field: DraftField, value: String) {
        if let Some(editor) = self.editor.as_mut() {
            editor.draft.set(field, value);
        }
    }

    /// Validate the open draft into a request. An invalid draft is reported
    /// and leaves the modal open.
    pub fn submission<N: Notifier>(&self, notifier: &N) -> Option<Submission> {
        let editor = self.editor.as_ref()?;
        match editor.draft.to_payload() {
            Ok(payload) => Some(match editor.target {
                Some(id) => Submission::Update { id, payload },
                None => Submission::Create(payload),
            }),
            Err(e) => {
                report_failure(notifier, "validate product", &e, SAVE_FAILED);
                None
            }
        }
    }

    /// Apply a save result. Returns `true` when the list must be refetched.
    pub fn apply_saved<N: Notifier>(&mut self, submission: &Submission, result: Result<(), ApiError>, notifier: &N) -> bool {
        match result {
            Ok(()) => {
                notifier.success(match submission {
                    Submission::Create(_) => PRODUCT_ADDED,
                    Submission::Update { .. } => PRODUCT_UPDATED,
                });
                self.close_editor();
                true
            }
            Err(e) => {
                report_failure(notifier, "save product", &e, SAVE_FAILED);
                false
            }
        }
    }

    // ---- delete ---------------------------------------------------------

    pub fn request_delete(&mut self, product: &Product) {
        self.pending_delete = Some(PendingDelete { id: product.id, name: product.name.clone() });
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Id to delete once the user accepts the confirmation.
    pub fn confirm_delete(&self) -> Option<Id> {
        self.pending_delete.as_ref().map(|p| p.id)
    }

    /// Apply a delete result; the confirmation is cleared either way.
    /// Returns `true` when the list must be refetched.
    pub fn apply_deleted<N: Notifier>(&mut self, result: Result<(), ApiError>, notifier: &N) -> bool {
        self.pending_delete = None;
        match result {
            Ok(()) => {
                notifier.success(PRODUCT_DELETED);
                true
            }
            Err(e) => {
                report_failure(notifier, "delete product", &e, DELETE_FAILED);
                false
            }
        }
    }
}

/// Put one unit of `product` in the cart and report the outcome.
pub fn add_to_cart<N: Notifier>(cart: &mut CartState, product: &Product, notifier: &N) {
    match cart.add(product, 1) {
        Ok(()) => notifier.success(format!("{} added to cart!", product.name)),
        Err(e) => report_failure(notifier, "add to cart", &e, CART_FAILED),
    }
}
