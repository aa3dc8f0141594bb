//! Giftbox API
//!
//! HTTP surface of the gift-box customizer: asset catalog, preview generation and logo
//! upload. The binary in `main.rs` only loads configuration and serves the router built here.

pub mod api_doc;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod utils;
