//! The store engine.
//!
//! A [`Store`] owns the data map, the effects bound to its keys and its named
//! mutations. Every operation is synchronous and runs to completion before
//! returning.

mod builder;
mod store;

pub use builder::StoreBuilder;
pub use store::Store;
