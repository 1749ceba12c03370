//! Snapshot persistence.
//!
//! A store with `persist` enabled writes its whole data map to a [`Backend`]
//! after every `set` and `delete` batch, and reads it back on construction.
//! Whether persistence is available at all is decided by an injected
//! [`Environment`].

mod backend;
mod environment;
mod snapshot;

pub use backend::{Backend, FileBackend, MemoryBackend, STORAGE_KEY};
pub use environment::{Environment, Headless, Interactive};
pub(crate) use snapshot::{decode, encode};
