//! Shopping cart shared across the app.
//!
//! The catalog screen only adds to it; checkout lives elsewhere.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use crate::net::types::{Id, Product};
use crate::util::format::format_price;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    #[error("quantity must be at least 1")]
    InvalidQuantity,
    #[error("only {available} of product {product_id} in stock")]
    InsufficientStock { product_id: Id, available: u64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u64,
}

#[derive(Clone, Debug, Default)]
pub struct CartState {
    pub lines: Vec<CartLine>,
}

impl CartState {
    /// Add `quantity` of `product`, merging with an existing line.
    ///
    /// # Errors
    ///
    /// Fails without changing the cart when `quantity` is zero or the merged
    /// quantity would exceed the product's stock.
    pub fn add(&mut self, product: &Product, quantity: u64) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        let existing = self.lines.iter().position(|l| l.product.id == product.id);
        let current = existing.map_or(0, |i| self.lines[i].quantity);
        let wanted = current.saturating_add(quantity);
        if wanted > product.stock_quantity {
            return Err(CartError::InsufficientStock { product_id: product.id, available: product.stock_quantity });
        }
        match existing {
            Some(i) => {
                let line = &mut self.lines[i];
                line.product = product.clone();
                line.quantity = wanted;
            }
            None => self.lines.push(CartLine { product: product.clone(), quantity }),
        }
        Ok(())
    }

    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn total_price(&self) -> f64 {
        self.lines.iter().map(|l| l.product.price * l.quantity as f64).sum()
    }

    /// Nav label, e.g. `Cart (3) $7.50`.
    pub fn summary(&self) -> String {
        format!("Cart ({}) {}", self.total_items(), format_price(self.total_price()))
    }
}
