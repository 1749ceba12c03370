use super::Store;
use crate::config::StoreOptions;
use crate::error::Result;
use crate::persist::{Backend, Environment, Interactive};

/// Configures and builds a [`Store`].
///
/// # Examples
///
/// ```
/// use storem::{MemoryBackend, Store};
///
/// let backend = MemoryBackend::new();
/// let mut store = Store::builder()
///     .persist(true)
///     .backend(backend.clone())
///     .build()
///     .unwrap();
///
/// store.set([("theme", "dark")]).unwrap();
/// assert_eq!(backend.snapshot().as_deref(), Some(r#"{"theme":"dark"}"#));
/// ```
pub struct StoreBuilder {
    options: StoreOptions,
    backend: Option<Box<dyn Backend>>,
    environment: Box<dyn Environment>,
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self {
            options: StoreOptions::default(),
            backend: None,
            environment: Box::new(Interactive),
        }
    }
}

impl StoreBuilder {
    /// Builder with default options, no backend and [`Interactive`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all caller overrides at once.
    pub fn options(mut self, options: StoreOptions) -> Self {
        self.options = options;
        self
    }

    /// Enable loading from and saving to the backend.
    pub fn persist(mut self, persist: bool) -> Self {
        self.options = self.options.persist(persist);
        self
    }

    /// Emit diagnostic `tracing` events.
    pub fn debug(mut self, debug: bool) -> Self {
        self.options = self.options.debug(debug);
        self
    }

    /// Run effects when their key is deleted.
    pub fn react_on_delete(mut self, react_on_delete: bool) -> Self {
        self.options = self.options.react_on_delete(react_on_delete);
        self
    }

    /// Backend used for snapshot load and save. Without one, persistence is
    /// a no-op even if enabled.
    pub fn backend(mut self, backend: impl Backend + 'static) -> Self {
        self.backend = Some(Box::new(backend));
        self
    }

    /// Capability deciding whether persistence is available. Defaults to
    /// [`Interactive`].
    pub fn environment(mut self, environment: impl Environment + 'static) -> Self {
        self.environment = Box::new(environment);
        self
    }

    /// Build the store, loading the persisted snapshot if persistence applies.
    pub fn build(self) -> Result<Store> {
        Store::from_builder(self.options, self.backend, self.environment)
    }
}
