/// Decides whether the running context can persist at all.
///
/// Persistence is skipped, even when enabled in the configuration, if this
/// reports `false`. Closures returning `bool` implement it too.
pub trait Environment: Send {
    fn supports_persistence(&self) -> bool;
}

/// A context with durable storage. The default.
#[derive(Clone, Copy, Debug, Default)]
pub struct Interactive;

impl Environment for Interactive {
    fn supports_persistence(&self) -> bool {
        true
    }
}

/// A headless context (server, test runner) where persistence is skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct Headless;

impl Environment for Headless {
    fn supports_persistence(&self) -> bool {
        false
    }
}

impl<F> Environment for F
where
    F: Fn() -> bool + Send,
{
    fn supports_persistence(&self) -> bool {
        self()
    }
}
