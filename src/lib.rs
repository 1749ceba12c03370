//! # Storem
//!
//! A minimal reactive key-value store for client applications.
//!
//! A [`Store`] keeps an untyped data map and adds three things to it:
//!
//! ## Effects
//!
//! Callbacks bound to a key with [`Store::listen`]. They receive
//! `(new, old)` synchronously every time the key is set, and optionally when
//! it is deleted.
//!
//! ## Mutations
//!
//! Named procedures registered with [`Store::set_mutation`] and run with
//! [`Store::run_mutation`]. They edit the live data map directly, without
//! running effects or saving.
//!
//! ## Persistence
//!
//! With `persist` enabled the store loads a snapshot from a [`Backend`] when
//! it is built and saves the full map after every `set` and `delete` batch.
//! An injected [`Environment`] can switch persistence off, e.g. in headless
//! runs.
//!
//! ```
//! use storem::{Data, Store, Value};
//!
//! let mut store = Store::new();
//! store.set([("x", 5)]).unwrap();
//!
//! store.set_mutation("double", |data: &mut Data, _: &[Value]| {
//!     for value in data.values_mut() {
//!         if let Some(n) = value.as_i64() {
//!             *value = Value::from(n * 2);
//!         }
//!     }
//! });
//! store.run_mutation("double", &[]).unwrap();
//!
//! assert_eq!(store.get("x"), Some(&Value::from(10)));
//! ```
//!
//! Diagnostic `tracing` events are emitted under the `storem` target when the
//! `debug` option is on.

pub mod config;
pub mod data;
pub mod effect;
pub mod error;
pub mod mutation;
pub mod persist;
pub mod store;

// Re-export main types for convenience
pub use config::{StoreConfig, StoreOptions};
pub use data::{Data, Key, Keys, Value};
pub use effect::{CallbackOutput, Effect};
pub use error::{BoxError, Result, StoreError};
pub use mutation::Mutation;
pub use persist::{
    Backend, Environment, FileBackend, Headless, Interactive, MemoryBackend, STORAGE_KEY,
};
pub use store::{Store, StoreBuilder};
