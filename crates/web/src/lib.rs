//! `shopfront-web`
//!
//! **Responsibility:** thin adapters between the storefront pipeline and a
//! page.
//!
//! This crate provides:
//! - Static page generation (`shopfront-build` binary)
//! - Environment-based configuration for the builder
//! - A Leptos browser frontend (WASM builds only)

pub mod config;
pub mod page;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use config::StorefrontConfig;
pub use page::{PageOptions, render_page};
