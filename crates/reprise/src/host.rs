//! Capabilities consumed from the test runtime that hosts a suite.
//!
//! The replay engine only needs to abort the running execution and to open
//! named nested executions. [`Context`](crate::Context) is the runtime shipped
//! with this crate, but any type implementing these traits can drive a suite.

use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

/// Opaque identity of one execution scope.
///
/// Identities are unique for the lifetime of the process.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ExecutionId(u64);

impl ExecutionId {
    /// Allocate a fresh identity.
    pub fn next() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(0);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ExecutionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An execution scope able to abort itself.
pub trait Host {
    /// The identity under which registrations for this scope are looked up.
    fn execution_id(&self) -> ExecutionId;

    /// The human readable name of this scope.
    fn name(&self) -> &str;

    /// Mark this scope as failed and terminate its execution.
    ///
    /// Implementations must not return; they typically unwind back to the
    /// point where the scope was opened.
    fn fail(&self, message: fmt::Arguments<'_>) -> !;
}

/// An execution scope able to open isolated, individually reported children.
pub trait RunScoped: Host + Sized {
    /// Run `f` within a new nested scope labelled `name`.
    ///
    /// A failure inside the child must not abort `self`.
    fn run_scoped<F>(&self, name: &str, f: F)
    where
        F: FnOnce(&Self);
}
