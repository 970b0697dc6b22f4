//! The replay driver and the subtest scheduler.
//!
//! A suite is executed once per node of its case tree. Each execution is
//! handed a stack of frames that selects one case per settled level; every
//! other case is merely counted. Names registered below the deepest settled
//! level are collected and, once the execution returns, each of them becomes
//! the target of a new execution inside its own nested scope.

use crate::{
    channel::{self, Channel, Register},
    error::CaseError,
    frame::Frame,
    host::{Host, RunScoped},
    registry,
    termination::Termination,
};
use std::{fmt, sync::Arc};

/// A suite definition, in either of the supported calling conventions.
pub enum Suite<'s, H> {
    /// The suite receives a [`Register`] and threads it into nested scopes.
    Explicit(&'s dyn Fn(&H, &Register<'_>) -> anyhow::Result<()>),
    /// The suite registers cases through [`case`](crate::case).
    Implicit(&'s dyn Fn(&H) -> anyhow::Result<()>),
}

impl<H> Clone for Suite<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for Suite<'_, H> {}

impl<H> fmt::Debug for Suite<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(..) => f.write_str("Suite::Explicit(..)"),
            Self::Implicit(..) => f.write_str("Suite::Implicit(..)"),
        }
    }
}

/// Run `suite` under `host`, replaying it once for every case it registers.
pub fn run_suite<H>(host: &H, suite: Suite<'_, H>)
where
    H: RunScoped,
{
    run_target_and_recurse(host, vec![], suite);
}

/// Run a suite written in the explicit style.
///
/// ```
/// let summary = reprise::run("vec", |ctx| {
///     reprise::suite(ctx, |_ctx, test| {
///         let mut v = vec![1, 2, 3];
///
///         test.case("push", || {
///             v.push(4);
///             assert_eq!(v.len(), 4);
///         });
///
///         test.case("pop", || {
///             assert_eq!(v.pop(), Some(3));
///             assert_eq!(v.len(), 2);
///         });
///     });
/// });
/// assert!(summary.is_passed());
/// ```
pub fn suite<H, F, T>(host: &H, f: F)
where
    H: RunScoped,
    F: Fn(&H, &Register<'_>) -> T,
    T: Termination,
{
    let f = |host: &H, test: &Register<'_>| f(host, test).into_result();
    run_suite(host, Suite::Explicit(&f));
}

/// Run a suite written in the implicit style.
///
/// Cases are registered with [`case`], which can be called from helper
/// functions that only have access to the scope.
///
/// ```
/// use reprise::Context;
///
/// fn check_sorted(ctx: &Context<'_>, v: &[i32]) {
///     reprise::case(ctx, "is sorted", || {
///         assert!(v.windows(2).all(|w| w[0] <= w[1]));
///     });
/// }
///
/// let summary = reprise::run("sorting", |ctx| {
///     reprise::suite_implicit(ctx, |ctx| {
///         let mut v = vec![3, 1, 2];
///         v.sort();
///         check_sorted(ctx, &v);
///     });
/// });
/// assert!(summary.is_passed());
/// ```
pub fn suite_implicit<H, F, T>(host: &H, f: F)
where
    H: RunScoped,
    F: Fn(&H) -> T,
    T: Termination,
{
    let f = |host: &H| f(host).into_result();
    run_suite(host, Suite::Implicit(&f));
}

/// Register a case for the suite currently running under `host`.
///
/// Fails the scope when `host` is not running a suite, for example when a
/// case body is stashed and invoked after its suite has returned.
pub fn case<H, F, T>(host: &H, name: &str, body: F)
where
    H: Host,
    F: FnOnce() -> T,
    T: Termination,
{
    match registry::lookup(host.execution_id()) {
        Some(channel) => channel::register(host, &channel, name, body),
        None => host.fail(format_args!(
            "{}",
            CaseError::TerminatedContext {
                name: name.to_owned(),
                scope: host.name().to_owned(),
            }
        )),
    }
}

fn run_target_and_recurse<H>(host: &H, stack: Vec<Frame>, suite: Suite<'_, H>)
where
    H: RunScoped,
{
    let names = run_stack_target(host, &stack, suite);
    if names.is_empty() {
        log::trace!("{}: reached a leaf at depth {}", host.name(), stack.len());
        return;
    }
    log::debug!(
        "{}: discovered {} case(s) at depth {}: {:?}",
        host.name(),
        names.len(),
        stack.len() + 1,
        names
    );
    run_last_frame(host, stack, names.into(), suite);
}

fn run_stack_target<H>(host: &H, stack: &[Frame], suite: Suite<'_, H>) -> Vec<String>
where
    H: RunScoped,
{
    let channel = Arc::new(Channel::new(stack.to_vec()));
    {
        let _binding = registry::bind(host.execution_id(), Arc::clone(&channel));
        let result = match suite {
            Suite::Explicit(f) => f(host, &Register::new(host, &channel)),
            Suite::Implicit(f) => f(host),
        };
        if let Err(err) = result {
            host.fail(format_args!("{:#}", err));
        }
    }
    channel.take_discovered()
}

fn run_last_frame<H>(host: &H, stack: Vec<Frame>, names: Arc<[String]>, suite: Suite<'_, H>)
where
    H: RunScoped,
{
    for (target, name) in names.iter().enumerate() {
        let mut stack = stack.clone();
        stack.push(Frame::new(names.clone(), target));
        host.run_scoped(name, |host| {
            let frame = &stack[stack.len() - 1];
            log::trace!("{}: targeting {:?}", host.name(), frame.target_name());
            run_target_and_recurse(host, stack, suite)
        });
    }
}
