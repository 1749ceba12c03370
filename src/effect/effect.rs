use crate::data::{Key, Value};
use crate::error::{BoxError, Result, StoreError};
use std::collections::HashMap;

/// Return value of a store callback.
///
/// Callbacks may return `()` or any `Result<(), E>` whose error converts into a
/// [`BoxError`], which covers `anyhow::Result<()>` and `std::io::Result<()>`.
pub trait CallbackOutput {
    fn into_result(self) -> std::result::Result<(), BoxError>;
}

impl CallbackOutput for () {
    fn into_result(self) -> std::result::Result<(), BoxError> {
        Ok(())
    }
}

impl<E: Into<BoxError>> CallbackOutput for std::result::Result<(), E> {
    fn into_result(self) -> std::result::Result<(), BoxError> {
        self.map_err(Into::into)
    }
}

type EffectFn =
    dyn FnMut(Option<&Value>, Option<&Value>) -> std::result::Result<(), BoxError> + Send;

/// A procedure run with `(new, old)` whenever its key changes.
///
/// `None` stands for an absent value: `old` is `None` the first time a key is
/// set, `new` is `None` when the key is deleted.
///
/// # Examples
///
/// ```
/// use storem::{Effect, Value};
///
/// let mut effect = Effect::new(|new: Option<&Value>, old: Option<&Value>| {
///     assert_eq!(new, Some(&Value::from(2)));
///     assert_eq!(old, None);
/// });
/// effect.run(Some(&Value::from(2)), None).unwrap();
/// ```
pub struct Effect {
    run: Box<EffectFn>,
}

impl Effect {
    /// Wrap a closure returning `()` or `Result<(), E>`.
    pub fn new<F, R>(mut effect: F) -> Self
    where
        F: FnMut(Option<&Value>, Option<&Value>) -> R + Send + 'static,
        R: CallbackOutput,
    {
        Self {
            run: Box::new(move |new: Option<&Value>, old: Option<&Value>| {
                effect(new, old).into_result()
            }),
        }
    }

    /// Invoke the effect directly.
    pub fn run(
        &mut self,
        new: Option<&Value>,
        old: Option<&Value>,
    ) -> std::result::Result<(), BoxError> {
        (self.run)(new, old)
    }
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Effect").finish_non_exhaustive()
    }
}

/// Effects per key, in registration order.
#[derive(Debug, Default)]
pub(crate) struct EffectRegistry {
    effects: HashMap<Key, Vec<Effect>>,
}

impl EffectRegistry {
    pub(crate) fn register(&mut self, key: Key, effect: Effect) {
        self.effects.entry(key).or_default().push(effect);
    }

    pub(crate) fn count(&self, key: &Key) -> usize {
        self.effects.get(key).map_or(0, Vec::len)
    }

    /// Run every effect bound to `key`. Stops at the first failure.
    pub(crate) fn notify(
        &mut self,
        key: &Key,
        new: Option<&Value>,
        old: Option<&Value>,
    ) -> Result<()> {
        let Some(effects) = self.effects.get_mut(key) else {
            return Ok(());
        };

        for effect in effects.iter_mut() {
            effect.run(new, old).map_err(|source| StoreError::Effect {
                key: key.clone(),
                source,
            })?;
        }
        Ok(())
    }
}
