//! HTTP transport and client-side state for the shutter service.
//!
//! Three pieces: [`HttpApi`] (the reqwest-backed transport implementing the
//! traits from `shutter-core`), [`FeedbackStore`] (per-content-item rating
//! and comment state with pagination), and [`Browser`] (stateless feed and
//! profile calls). Presentation surfaces render snapshots from these and
//! forward user intents into them; they hold no logic of their own.

pub mod feed;
pub mod http;
pub mod store;

pub use feed::Browser;
pub use http::{HttpApi, HttpConfig};
pub use store::{FeedbackState, FeedbackStore, Phase};
