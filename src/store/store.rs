use super::StoreBuilder;
use crate::config::{StoreConfig, StoreOptions};
use crate::data::{Data, Key, Keys, Value};
use crate::effect::{CallbackOutput, Effect, EffectRegistry};
use crate::error::{Result, StoreError};
use crate::mutation::{Mutation, MutationRegistry};
use crate::persist::{self, Backend, Environment, Interactive};
use std::collections::HashMap;

macro_rules! trace {
    ($config:expr, $($arg:tt)+) => {
        if $config.debug {
            tracing::debug!(target: "storem", $($arg)+);
        }
    };
}

/// An in-memory key-value store with change effects and named mutations.
///
/// Mutating methods take `&mut self`; to share a store across threads wrap it
/// in a `Mutex`. All callbacks and backends held by the store are `Send`.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use storem::{Store, Value};
///
/// let mut store = Store::new();
/// let seen = Arc::new(Mutex::new(Vec::new()));
///
/// let log = seen.clone();
/// store.listen("count", move |new: Option<&Value>, old: Option<&Value>| {
///     log.lock().unwrap().push((new.cloned(), old.cloned()));
/// });
///
/// store.set([("count", 1)]).unwrap();
/// store.set([("count", 2)]).unwrap();
///
/// assert_eq!(store.get("count"), Some(&Value::from(2)));
/// assert_eq!(seen.lock().unwrap().len(), 2);
/// ```
pub struct Store {
    data: Data,
    effects: EffectRegistry,
    mutations: MutationRegistry,
    config: StoreConfig,
    backend: Option<Box<dyn Backend>>,
    environment: Box<dyn Environment>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create an empty store with the default configuration and no backend.
    pub fn new() -> Self {
        Self {
            data: Data::new(),
            effects: EffectRegistry::default(),
            mutations: MutationRegistry::default(),
            config: StoreConfig::default(),
            backend: None,
            environment: Box::new(Interactive),
        }
    }

    /// Start configuring a store with options, a backend or an environment.
    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    pub(super) fn from_builder(
        options: StoreOptions,
        backend: Option<Box<dyn Backend>>,
        environment: Box<dyn Environment>,
    ) -> Result<Self> {
        let config = options.resolve();
        trace!(config, "initializing store");
        trace!(
            config,
            persist = config.persist,
            debug = config.debug,
            react_on_delete = config.react_on_delete,
            "configuration merged"
        );

        let mut store = Self {
            config,
            backend,
            environment,
            ..Self::new()
        };

        if store.persistence_enabled() {
            if let Some(backend) = store.backend.as_mut() {
                if let Some(blob) = backend.load().map_err(StoreError::Backend)? {
                    store.data = persist::decode(&blob)?;
                }
            }
            trace!(store.config, entries = store.data.len(), "persisted data loaded");
        }

        Ok(store)
    }

    /// The merged configuration this store was built with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Set each entry in iteration order.
    ///
    /// For every key the bound effects run with `(new, old)` before the value
    /// is written. If an effect fails, the error is returned at once: later
    /// effects and keys are skipped, keys already written stay written and
    /// no snapshot is saved. After a complete batch the whole map is saved
    /// once.
    pub fn set<I, K, V>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        for (key, value) in entries {
            let key = key.into();
            let value = value.into();

            self.effects.notify(&key, Some(&value), self.data.get(&key))?;
            self.data.insert(key.clone(), value);
            trace!(self.config, %key, "entry set");
        }

        self.persist()
    }

    /// Set from an untyped JSON value, which must be an object.
    pub fn set_json(&mut self, entries: Value) -> Result<()> {
        match entries {
            Value::Object(map) => self.set(map),
            other => Err(StoreError::InvalidArgument(format!(
                "`set` expects an object of entries, got {}",
                kind(&other)
            ))),
        }
    }

    /// Value stored under `key`, or `None` if the key is absent.
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.data.get(&key.into())
    }

    /// Borrowed view of the whole data map.
    pub fn all(&self) -> &Data {
        &self.data
    }

    /// Copy out the requested keys; absent keys map to `None`.
    pub fn only(&self, keys: impl Keys) -> HashMap<Key, Option<Value>> {
        keys.into_keys()
            .into_iter()
            .map(|key| {
                let value = self.data.get(&key).cloned();
                (key, value)
            })
            .collect()
    }

    /// Remove one key or a sequence of keys.
    ///
    /// With `react_on_delete` the effects of each removed key run with
    /// `(None, old)`. Keys that hold no value are skipped silently: nothing
    /// changed, so their effects do not run even with `react_on_delete`.
    /// The map is saved once after the batch.
    pub fn delete(&mut self, keys: impl Keys) -> Result<()> {
        for key in keys.into_keys() {
            let old = self.data.remove(&key);
            trace!(self.config, %key, existed = old.is_some(), "entry deleted");

            if self.config.react_on_delete {
                if let Some(old) = old.as_ref() {
                    self.effects.notify(&key, None, Some(old))?;
                }
            }
        }

        self.persist()
    }

    /// Whether `key` holds a value. `null`, `0` and `""` all count.
    pub fn has(&self, key: impl Into<Key>) -> bool {
        self.data.contains_key(&key.into())
    }

    /// Number of keys holding a value.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no key holds a value.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Keys currently holding a value, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.data.keys()
    }

    /// Bind an effect to `key`. The key does not need to hold a value yet.
    /// Registering the same closure twice runs it twice.
    pub fn listen<K, F, R>(&mut self, key: K, effect: F)
    where
        K: Into<Key>,
        F: FnMut(Option<&Value>, Option<&Value>) -> R + Send + 'static,
        R: CallbackOutput,
    {
        self.effects.register(key.into(), Effect::new(effect));
    }

    /// Number of effects bound to `key`.
    pub fn effect_count(&self, key: impl Into<Key>) -> usize {
        self.effects.count(&key.into())
    }

    /// Register a mutation under `name`, replacing any previous one.
    pub fn set_mutation<F, R>(&mut self, name: impl Into<String>, mutation: F)
    where
        F: FnMut(&mut Data, &[Value]) -> R + Send + 'static,
        R: CallbackOutput,
    {
        self.mutations.insert(name.into(), Mutation::new(mutation));
    }

    /// Whether a mutation is registered under `name`.
    pub fn has_mutation(&self, name: &str) -> bool {
        self.mutations.contains(name)
    }

    /// Run the mutation registered under `name` against the live data map.
    ///
    /// Effects are not run and no snapshot is saved; call [`Store::save`]
    /// afterwards to persist the result.
    pub fn run_mutation(&mut self, name: &str, args: &[Value]) -> Result<()> {
        self.mutations.run(name, &mut self.data, args)?;
        trace!(self.config, mutation = name, args = args.len(), "mutation run");
        Ok(())
    }

    /// Write a snapshot now, if persistence applies.
    pub fn save(&mut self) -> Result<()> {
        self.persist()
    }

    fn persistence_enabled(&self) -> bool {
        self.config.persist && self.environment.supports_persistence()
    }

    fn persist(&mut self) -> Result<()> {
        if !self.persistence_enabled() {
            return Ok(());
        }
        let Some(backend) = self.backend.as_mut() else {
            return Ok(());
        };

        let blob = persist::encode(&self.data)?;
        backend.save(&blob).map_err(StoreError::Backend)?;
        trace!(self.config, entries = self.data.len(), "snapshot saved");
        Ok(())
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("data", &self.data)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
