//! Process-wide association from running executions to their channels.
//!
//! This is what lets [`case`](crate::case) find the channel of the suite
//! replay that is currently running for a given scope.

use crate::{channel::Channel, host::ExecutionId};
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

static ACTIVE: Lazy<Mutex<HashMap<ExecutionId, Arc<Channel>>>> = Lazy::new(Default::default);

fn active() -> MutexGuard<'static, HashMap<ExecutionId, Arc<Channel>>> {
    ACTIVE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Restores the previous binding of an execution when dropped.
#[must_use]
pub(crate) struct Binding {
    id: ExecutionId,
    prev: Option<Arc<Channel>>,
}

impl Drop for Binding {
    fn drop(&mut self) {
        let mut active = active();
        match self.prev.take() {
            Some(prev) => {
                active.insert(self.id, prev);
            }
            None => {
                active.remove(&self.id);
            }
        }
    }
}

pub(crate) fn bind(id: ExecutionId, channel: Arc<Channel>) -> Binding {
    let prev = active().insert(id, channel);
    Binding { id, prev }
}

pub(crate) fn lookup(id: ExecutionId) -> Option<Arc<Channel>> {
    active().get(&id).cloned()
}
