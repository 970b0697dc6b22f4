use crate::{
    host::{ExecutionId, Host, RunScoped},
    report::{Outcome, Reporter, ScopeDesc, ScopeSummary},
    test::Location,
};
use maybe_unwind::maybe_unwind;
use std::{cell::RefCell, fmt, panic, panic::AssertUnwindSafe};

#[derive(Debug)]
enum ExitReason {
    Skipped {
        location: &'static Location,
        reason: String,
    },
    Failed {
        location: Option<&'static Location>,
        reason: String,
    },
}

/// Unwinding payload used to terminate a scope early.
struct Exit;

#[derive(Debug, Default)]
struct State {
    exit_reason: Option<ExitReason>,
    children: Vec<ScopeSummary>,
}

/// Context values of a running execution scope.
///
/// One context exists for the suite itself and one for every nested case
/// discovered while replaying it. Suites and case bodies receive the context
/// of the scope they are running in.
pub struct Context<'a> {
    id: ExecutionId,
    desc: ScopeDesc,
    reporter: &'a dyn Reporter,
    state: RefCell<State>,
}

impl<'a> Context<'a> {
    pub(crate) fn root(
        reporter: &'a dyn Reporter,
        name: &str,
        location: Option<&'static Location>,
    ) -> Self {
        Self::new(reporter, ScopeDesc::root(name, location))
    }

    fn new(reporter: &'a dyn Reporter, desc: ScopeDesc) -> Self {
        Self {
            id: ExecutionId::next(),
            desc,
            reporter,
            state: RefCell::new(State::default()),
        }
    }

    /// The full name of this scope, with nested case names joined by `/`.
    #[inline]
    pub fn name(&self) -> &str {
        self.desc.name()
    }

    /// The nesting depth of this scope; the suite itself is at depth 0.
    #[inline]
    pub fn depth(&self) -> usize {
        self.desc.depth()
    }

    /// Run `f` as the body of this scope and report its outcome.
    pub(crate) fn run<F>(self, f: F) -> ScopeSummary
    where
        F: FnOnce(&Self),
    {
        let reporter = self.reporter;
        reporter.scope_starting(&self.desc);

        let result = maybe_unwind(AssertUnwindSafe(|| f(&self)));

        let state = self.state.into_inner();
        let outcome = match (state.exit_reason, result) {
            (Some(ExitReason::Skipped { location, reason }), _) => {
                Outcome::Skipped { location, reason }
            }
            (Some(ExitReason::Failed { location, reason }), _) => {
                Outcome::Failed { location, reason }
            }
            (None, Ok(())) => Outcome::Passed,
            (None, Err(unwind)) => Outcome::Panicked(unwind),
        };

        let summary = ScopeSummary {
            desc: self.desc,
            outcome,
            children: state.children,
        };
        reporter.scope_ended(&summary);
        summary
    }

    fn exit(&self, reason: ExitReason) -> ! {
        {
            let mut state = self.state.borrow_mut();
            state.exit_reason.get_or_insert(reason);
        }
        panic::resume_unwind(Box::new(Exit))
    }
}

hidden_item! {
    impl Context<'_> {
        #[inline(never)]
        pub fn skip(&self, location: &'static Location, reason: fmt::Arguments<'_>) -> ! {
            self.exit(ExitReason::Skipped {
                location,
                reason: reason.to_string(),
            })
        }

        #[inline(never)]
        pub fn fail_at(&self, location: &'static Location, reason: fmt::Arguments<'_>) -> ! {
            self.exit(ExitReason::Failed {
                location: Some(location),
                reason: reason.to_string(),
            })
        }
    }
}

impl Host for Context<'_> {
    #[inline]
    fn execution_id(&self) -> ExecutionId {
        self.id
    }

    #[inline]
    fn name(&self) -> &str {
        self.desc.name()
    }

    fn fail(&self, message: fmt::Arguments<'_>) -> ! {
        self.exit(ExitReason::Failed {
            location: None,
            reason: message.to_string(),
        })
    }
}

impl RunScoped for Context<'_> {
    fn run_scoped<F>(&self, name: &str, f: F)
    where
        F: FnOnce(&Self),
    {
        let child = Context::new(self.reporter, self.desc.child(name));
        let summary = child.run(f);
        self.state.borrow_mut().children.push(summary);
    }
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("id", &self.id)
            .field("desc", &self.desc)
            .finish()
    }
}
