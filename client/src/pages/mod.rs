//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Input checks that can be tested without a browser live
//! as plain functions next to the page that uses them.

pub mod contact;
pub mod dashboard;
pub mod document;
pub mod documents;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod signup;
