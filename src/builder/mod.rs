//! Builder API and configuration for stores.
//!
//! `StoreBuilder` offers a fluent way to construct a [`Store`](crate::Store)
//! with history settings and pre-attached subscribers. `StoreConfig` holds the
//! same settings in a serde-friendly form.

pub mod config;
pub mod error;
pub mod store;

pub use config::StoreConfig;
pub use error::BuildError;
pub use store::StoreBuilder;
