use std::sync::Arc;

/// The case names discovered at one nesting level, together with the index
/// of the case whose body runs in the current replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Frame {
    names: Arc<[String]>,
    target: usize,
}

impl Frame {
    pub(crate) fn new(names: Arc<[String]>, target: usize) -> Self {
        debug_assert!(target < names.len());
        Self { names, target }
    }

    #[inline]
    pub(crate) fn names(&self) -> &[String] {
        &self.names[..]
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub(crate) fn target_name(&self) -> &str {
        &self.names[self.target]
    }

    /// Whether the registration observed at `index` lies on the path to the target.
    #[inline]
    pub(crate) fn is_target(&self, index: usize) -> bool {
        index == self.target
    }
}

/// Per-replay counters of the registrations observed at each open nesting level.
///
/// The first level is always present; a level is pushed while the body of
/// an on-path case runs and popped once it returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Cursor {
    levels: Vec<usize>,
}

impl Cursor {
    pub(crate) fn new(settled: usize) -> Self {
        let mut levels = Vec::with_capacity(settled + 1);
        levels.push(0);
        Self { levels }
    }

    /// The 1-based depth of the next registration.
    #[inline]
    pub(crate) fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Whether the next registration explores a level below every settled frame.
    #[inline]
    pub(crate) fn is_frontier(&self, stack: &[Frame]) -> bool {
        self.depth() > stack.len()
    }

    /// The number of registrations already observed at the innermost level.
    #[inline]
    pub(crate) fn index(&self) -> usize {
        self.levels.last().copied().unwrap_or(0)
    }

    pub(crate) fn advance(&mut self) {
        if let Some(last) = self.levels.last_mut() {
            *last += 1;
        }
    }

    pub(crate) fn push(&mut self) {
        self.levels.push(0);
    }

    /// Close every level below `depth`, returning the number of registrations
    /// that were observed directly beneath it.
    pub(crate) fn truncate(&mut self, depth: usize) -> usize {
        let called = self.levels.get(depth).copied().unwrap_or(0);
        self.levels.truncate(depth);
        called
    }
}
