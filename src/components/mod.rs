//! Reusable view components shared by the pages.

pub mod confirm_dialog;
pub mod metric_card;
pub mod notice_bar;
pub mod product_card;
pub mod product_form_modal;
