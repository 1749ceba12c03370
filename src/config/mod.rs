//! Store configuration.
//!
//! A store is built from optional per-field overrides merged over the
//! defaults; the merged [`StoreConfig`] is fixed for the life of the store.

mod config;

pub use config::{StoreConfig, StoreOptions};
