//! The store: single owner of application state.
//!
//! This is the imperative shell around the pure core. A store applies
//! actions through the pure reducers in [`crate::core`], records what it
//! did, and notifies subscribers after every dispatch.

mod store;
mod subscription;

pub use store::Store;
pub use subscription::SubscriptionId;
