use crate::data::{Data, Value};
use crate::effect::CallbackOutput;
use crate::error::{BoxError, Result, StoreError};
use std::collections::HashMap;

type MutationFn = dyn FnMut(&mut Data, &[Value]) -> std::result::Result<(), BoxError> + Send;

/// A procedure applied to the live data map with extra arguments.
pub struct Mutation {
    run: Box<MutationFn>,
}

impl Mutation {
    /// Wrap a closure returning `()` or `Result<(), E>`.
    pub fn new<F, R>(mut mutation: F) -> Self
    where
        F: FnMut(&mut Data, &[Value]) -> R + Send + 'static,
        R: CallbackOutput,
    {
        Self {
            run: Box::new(move |data: &mut Data, args: &[Value]| {
                mutation(data, args).into_result()
            }),
        }
    }

    /// Invoke the mutation directly on `data`.
    pub fn run(
        &mut self,
        data: &mut Data,
        args: &[Value],
    ) -> std::result::Result<(), BoxError> {
        (self.run)(data, args)
    }
}

impl std::fmt::Debug for Mutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mutation").finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
pub(crate) struct MutationRegistry {
    mutations: HashMap<String, Mutation>,
}

impl MutationRegistry {
    /// Register under `name`, replacing any previous mutation.
    pub(crate) fn insert(&mut self, name: String, mutation: Mutation) {
        self.mutations.insert(name, mutation);
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.mutations.contains_key(name)
    }

    pub(crate) fn run(&mut self, name: &str, data: &mut Data, args: &[Value]) -> Result<()> {
        let mutation = self
            .mutations
            .get_mut(name)
            .ok_or_else(|| StoreError::NotFound(name.to_owned()))?;

        mutation.run(data, args).map_err(|source| StoreError::Mutation {
            name: name.to_owned(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Key;

    #[test]
    fn last_registration_wins() {
        let mut registry = MutationRegistry::default();
        let mut data = Data::new();

        registry.insert(
            "fill".into(),
            Mutation::new(|data: &mut Data, _: &[Value]| {
                data.insert(Key::from("v"), Value::from(1));
            }),
        );
        registry.insert(
            "fill".into(),
            Mutation::new(|data: &mut Data, _: &[Value]| {
                data.insert(Key::from("v"), Value::from(2));
            }),
        );

        registry.run("fill", &mut data, &[]).unwrap();
        assert_eq!(data.get(&Key::from("v")), Some(&Value::from(2)));
    }

    #[test]
    fn missing_mutation_is_not_found() {
        let mut registry = MutationRegistry::default();
        let mut data = Data::new();

        let err = registry.run("nope", &mut data, &[]).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(ref name) if name == "nope"));
        assert!(!registry.contains("nope"));
    }

    #[test]
    fn arguments_are_passed_through() {
        let mut registry = MutationRegistry::default();
        let mut data = Data::new();

        registry.insert(
            "put".into(),
            Mutation::new(|data: &mut Data, args: &[Value]| -> anyhow::Result<()> {
                let name = args
                    .first()
                    .and_then(Value::as_str)
                    .ok_or_else(|| anyhow::anyhow!("missing name"))?;
                data.insert(Key::from(name), args.get(1).cloned().unwrap_or(Value::Null));
                Ok(())
            }),
        );

        registry
            .run("put", &mut data, &[Value::from("k"), Value::from(true)])
            .unwrap();
        assert_eq!(data.get(&Key::from("k")), Some(&Value::Bool(true)));

        let err = registry.run("put", &mut data, &[]).unwrap_err();
        assert!(matches!(err, StoreError::Mutation { .. }));
    }
}
