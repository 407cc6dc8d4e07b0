//! `shopfront-core` — domain primitives shared by the storefront crates.
//!
//! This crate contains **pure domain** primitives (no IO, no rendering).

pub mod entity;
pub mod error;
pub mod id;
pub mod price;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use price::{MAX_AMOUNT, Price};
pub use value_object::ValueObject;
