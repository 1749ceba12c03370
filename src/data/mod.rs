//! Keys and the data map held by a store.
//!
//! Values are untyped [`serde_json::Value`] payloads so that any data map can be
//! written out as a snapshot. A JSON `null` is a stored value; a key with no
//! entry is absent, which the API reports as `None`.

mod key;

use std::collections::HashMap;

pub use key::{Key, Keys};
pub use serde_json::Value;

/// The key/value map owned by a store.
pub type Data = HashMap<Key, Value>;
