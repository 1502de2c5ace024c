//! Shared contracts between the booking frontend and the REST backend.
//!
//! Everything in this crate is platform-neutral: wire DTOs, status
//! vocabularies and the pure cart/reconciliation logic. No leptos, no
//! `web_sys` — the whole crate compiles and tests natively.

pub mod domain;
pub mod usecases;
