//! Backend access for the client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the `Backend` contract, `mock` fabricates answers in-process,
//! `http` talks to a real service, and `types` defines the shared wire schema.

pub mod api;
pub mod http;
pub mod mock;
pub mod types;
