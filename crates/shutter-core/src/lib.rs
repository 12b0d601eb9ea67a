//! Core types and trait definitions for the shutter client.
//!
//! This crate is deliberately free of HTTP dependencies. The transport
//! traits defined here are implemented by `shutter-client` and consumed
//! generically by the feedback store and the presentation surfaces.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod api;
pub mod content;
pub mod error;
pub mod feedback;
pub mod session;

pub use error::{Error, Result};
