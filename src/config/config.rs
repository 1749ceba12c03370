use serde::{Deserialize, Serialize};

/// Resolved configuration of a store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Load from and save to the persistence backend.
    pub persist: bool,
    /// Emit diagnostic `tracing` events.
    pub debug: bool,
    /// Run effects when a key is deleted.
    pub react_on_delete: bool,
}

impl StoreConfig {
    /// Merge caller overrides over this configuration. Set fields win.
    pub fn merge(self, options: &StoreOptions) -> Self {
        Self {
            persist: options.persist.unwrap_or(self.persist),
            debug: options.debug.unwrap_or(self.debug),
            react_on_delete: options.react_on_delete.unwrap_or(self.react_on_delete),
        }
    }
}

/// Caller-supplied configuration; unset fields keep their defaults.
///
/// Deserializes from camelCase JSON such as `{"persist": true, "reactOnDelete": true}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct StoreOptions {
    pub persist: Option<bool>,
    pub debug: Option<bool>,
    pub react_on_delete: Option<bool>,
}

impl StoreOptions {
    /// Options with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override `persist`.
    pub fn persist(mut self, persist: bool) -> Self {
        self.persist = Some(persist);
        self
    }

    /// Override `debug`.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Override `react_on_delete`.
    pub fn react_on_delete(mut self, react_on_delete: bool) -> Self {
        self.react_on_delete = Some(react_on_delete);
        self
    }

    /// Resolve against the default configuration.
    pub fn resolve(&self) -> StoreConfig {
        StoreConfig::default().merge(self)
    }
}
