//! Shared types and logic for the Smart Crop dashboard
//!
//! This crate holds everything that does no I/O: wire models, form state,
//! payload builders, and response projection. It is used by the async
//! client and, through WASM, by the browser pages.

pub mod form;
pub mod models;
pub mod payload;
pub mod projection;
pub mod types;
pub mod validation;

pub use form::*;
pub use models::*;
pub use payload::*;
pub use projection::*;
pub use types::*;
pub use validation::*;
