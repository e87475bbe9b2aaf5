//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `documents`, `chat`) so individual
//! components can depend on small focused models. `session` owns the only
//! mutable copy of the signed-in user; the rest are plain view models held in
//! `RwSignal`s by the pages that need them.

pub mod auth;
pub mod chat;
pub mod documents;
pub mod session;
