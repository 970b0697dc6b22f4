use crate::{
    error::CaseError,
    frame::{Cursor, Frame},
    host::Host,
    termination::Termination,
};
use indexmap::IndexSet;
use std::{
    fmt,
    sync::{Mutex, MutexGuard, PoisonError},
};

/// Bookkeeping for the registrations of a single replay of a suite.
///
/// The lock is never held while a case body runs, so bodies may register
/// nested cases on the same channel.
pub(crate) struct Channel {
    stack: Vec<Frame>,
    state: Mutex<State>,
}

#[derive(Debug)]
struct State {
    cursor: Cursor,
    discovered: IndexSet<String>,
}

impl Channel {
    pub(crate) fn new(stack: Vec<Frame>) -> Self {
        let cursor = Cursor::new(stack.len());
        Self {
            stack,
            state: Mutex::new(State {
                cursor,
                discovered: IndexSet::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Account for a registration of `name`.
    ///
    /// Returns the depth of the case when its body has to be run, in which
    /// case [`leave`](Self::leave) must be called with it once the body returns.
    pub(crate) fn enter(&self, name: &str) -> Result<Option<usize>, CaseError> {
        if name.is_empty() {
            return Err(CaseError::EmptyName);
        }

        let mut state = self.lock();
        let depth = state.cursor.depth();

        if state.cursor.is_frontier(&self.stack) {
            if !state.discovered.insert(name.to_owned()) {
                return Err(CaseError::Duplicate {
                    name: name.to_owned(),
                });
            }
            return Ok(None);
        }

        let frame = &self.stack[depth - 1];
        let index = state.cursor.index();
        let recorded = frame
            .names()
            .get(index)
            .ok_or_else(|| CaseError::UnexpectedExtra {
                name: name.to_owned(),
                expected: frame.len(),
            })?;
        if recorded != name {
            return Err(CaseError::Renamed {
                index,
                recorded: recorded.clone(),
                name: name.to_owned(),
            });
        }

        state.cursor.advance();
        if !frame.is_target(index) {
            return Ok(None);
        }

        state.cursor.push();
        Ok(Some(depth))
    }

    /// Close the level opened by [`enter`](Self::enter) and check that the body
    /// registered every nested case known from earlier replays.
    pub(crate) fn leave(&self, name: &str, depth: usize) -> Result<(), CaseError> {
        let called = self.lock().cursor.truncate(depth);
        match self.stack.get(depth) {
            Some(children) if called < children.len() => Err(CaseError::MissingCallbacks {
                name: name.to_owned(),
                expected: children.len(),
                actual: called,
            }),
            _ => Ok(()),
        }
    }

    /// Names registered at the frontier, in registration order.
    pub(crate) fn take_discovered(&self) -> Vec<String> {
        let discovered = std::mem::take(&mut self.lock().discovered);
        discovered.into_iter().collect()
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("stack", &self.stack)
            .field("state", &*self.lock())
            .finish()
    }
}

pub(crate) fn register<F, T>(host: &dyn Host, channel: &Channel, name: &str, body: F)
where
    F: FnOnce() -> T,
    T: Termination,
{
    let depth = match channel.enter(name) {
        Ok(Some(depth)) => depth,
        Ok(None) => return,
        Err(err) => host.fail(format_args!("{}", err)),
    };

    log::trace!("{}: entering case {:?} at depth {}", host.name(), name, depth);
    if let Err(err) = body().into_result() {
        host.fail(format_args!("case {:?} returned an error: {:#}", name, err));
    }

    if let Err(err) = channel.leave(name, depth) {
        host.fail(format_args!("{}", err));
    }
}

/// The registration handle passed to suites written in the explicit style.
///
/// See [`suite`](crate::suite).
pub struct Register<'r> {
    host: &'r dyn Host,
    channel: &'r Channel,
}

impl<'r> Register<'r> {
    pub(crate) fn new(host: &'r dyn Host, channel: &'r Channel) -> Self {
        Self { host, channel }
    }

    /// Register a case named `name` at the current nesting level.
    ///
    /// `body` only runs when this case lies on the path selected for the
    /// current replay. Any cases it registers in turn become its children.
    pub fn case<F, T>(&self, name: &str, body: F)
    where
        F: FnOnce() -> T,
        T: Termination,
    {
        register(self.host, self.channel, name, body)
    }
}

impl fmt::Debug for Register<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Register")
            .field("host", &self.host.name())
            .field("channel", self.channel)
            .finish()
    }
}
