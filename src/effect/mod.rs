//! Change effects bound to store keys.
//!
//! An effect receives `(new, old)` each time its key changes. Effects bound to
//! the same key run in registration order and are never removed.

mod effect;

pub use effect::{CallbackOutput, Effect};
pub(crate) use effect::EffectRegistry;
