//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site and dashboard chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod chat_panel;
pub mod dashboard_header;
pub mod dashboard_layout;
pub mod faq_item;
pub mod file_card;
pub mod site_header;
pub mod upload_panel;
