mod console;
mod log;

pub(crate) use self::{console::ConsoleReporter, log::LogReporter};

use crate::test::{Location, TestSuite};
use maybe_unwind::Unwind;
use std::fmt;

/// Description of an execution scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeDesc {
    name: String,
    case_offset: usize,
    depth: usize,
    location: Option<&'static Location>,
}

impl ScopeDesc {
    pub(crate) fn root(name: &str, location: Option<&'static Location>) -> Self {
        Self {
            name: name.to_owned(),
            case_offset: 0,
            depth: 0,
            location,
        }
    }

    pub(crate) fn child(&self, case: &str) -> Self {
        let name = format!("{}/{}", self.name, case);
        Self {
            case_offset: name.len() - case.len(),
            name,
            depth: self.depth + 1,
            location: self.location,
        }
    }

    /// The full name of the scope, with nested case names joined by `/`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name of the case this scope was opened for.
    ///
    /// For the suite itself this is the suite name.
    #[inline]
    pub fn case_name(&self) -> &str {
        &self.name[self.case_offset..]
    }

    /// The nesting depth; the suite itself is at depth 0.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The location of the suite definition, when known.
    #[inline]
    pub fn location(&self) -> Option<&'static Location> {
        self.location
    }
}

/// How a single scope terminated.
#[derive(Debug)]
#[non_exhaustive]
pub enum Outcome {
    /// The scope ran to completion.
    Passed,
    /// The scope was skipped explicitly.
    Skipped {
        /// Where the scope was skipped.
        location: &'static Location,
        /// Why the scope was skipped.
        reason: String,
    },
    /// The scope was failed explicitly, or by a malformed suite.
    Failed {
        /// Where the scope was failed, if it was failed by the test author.
        location: Option<&'static Location>,
        /// Why the scope failed.
        reason: String,
    },
    /// The scope panicked.
    Panicked(Unwind),
}

impl Outcome {
    /// Whether this outcome denotes a failure of the scope itself.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. } | Self::Panicked(..))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => f.write_str("passed"),
            Self::Skipped { location, reason } => write!(f, "skipped at {}: {}", location, reason),
            Self::Failed {
                location: Some(location),
                reason,
            } => write!(f, "failed at {}: {}", location, reason),
            Self::Failed {
                location: None,
                reason,
            } => write!(f, "failed: {}", reason),
            Self::Panicked(unwind) => write!(f, "{}", unwind),
        }
    }
}

/// The result of a scope and of every scope nested under it.
#[derive(Debug)]
pub struct ScopeSummary {
    pub(crate) desc: ScopeDesc,
    pub(crate) outcome: Outcome,
    pub(crate) children: Vec<ScopeSummary>,
}

impl ScopeSummary {
    /// The description of this scope.
    #[inline]
    pub fn desc(&self) -> &ScopeDesc {
        &self.desc
    }

    /// The full name of this scope.
    #[inline]
    pub fn name(&self) -> &str {
        self.desc.name()
    }

    /// How this scope itself terminated, regardless of its children.
    #[inline]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// The scopes opened directly beneath this one, in execution order.
    #[inline]
    pub fn children(&self) -> &[ScopeSummary] {
        &self.children[..]
    }

    /// Whether neither this scope nor any scope nested under it failed.
    pub fn is_passed(&self) -> bool {
        !self.outcome.is_failure() && self.children.iter().all(ScopeSummary::is_passed)
    }

    /// Whether this scope was skipped.
    #[inline]
    pub fn is_skipped(&self) -> bool {
        matches!(self.outcome, Outcome::Skipped { .. })
    }

    /// The failure message of this scope itself, if it failed.
    pub fn failure(&self) -> Option<String> {
        match &self.outcome {
            Outcome::Failed { reason, .. } => Some(reason.clone()),
            Outcome::Panicked(unwind) => Some(unwind.to_string()),
            Outcome::Passed | Outcome::Skipped { .. } => None,
        }
    }

    /// Look up a scope by its full name, searching this scope and its descendants.
    pub fn find(&self, name: &str) -> Option<&ScopeSummary> {
        self.scopes().into_iter().find(|scope| scope.name() == name)
    }

    /// This scope followed by every descendant, in execution order.
    pub fn scopes(&self) -> Vec<&ScopeSummary> {
        let mut scopes = vec![];
        let mut pending = vec![self];
        while let Some(scope) = pending.pop() {
            scopes.push(scope);
            pending.extend(scope.children.iter().rev());
        }
        scopes
    }

    /// The descendants that did not open any nested scope.
    pub fn leaves(&self) -> Vec<&ScopeSummary> {
        self.scopes()
            .into_iter()
            .filter(|scope| scope.desc.depth > 0 && scope.children.is_empty())
            .collect()
    }
}

/// The results of a whole test run.
#[derive(Debug, Default)]
pub(crate) struct Summary {
    pub(crate) suites: Vec<ScopeSummary>,
}

impl Summary {
    pub(crate) fn append(&mut self, suite: ScopeSummary) {
        self.suites.push(suite);
    }

    pub(crate) fn is_passed(&self) -> bool {
        self.suites.iter().all(ScopeSummary::is_passed)
    }

    fn all_scopes(&self) -> impl Iterator<Item = &ScopeSummary> + '_ {
        self.suites.iter().flat_map(ScopeSummary::scopes)
    }

    pub(crate) fn passed(&self) -> usize {
        self.all_scopes()
            .filter(|scope| scope.is_passed() && !scope.is_skipped())
            .count()
    }

    pub(crate) fn failed(&self) -> usize {
        self.all_scopes().filter(|scope| !scope.is_passed()).count()
    }

    pub(crate) fn skipped(&self) -> usize {
        self.all_scopes().filter(|scope| scope.is_skipped()).count()
    }

    /// Scopes that failed on their own account.
    pub(crate) fn failures(&self) -> impl Iterator<Item = &ScopeSummary> + '_ {
        self.all_scopes().filter(|scope| scope.outcome.is_failure())
    }
}

pub(crate) trait Reporter {
    fn test_run_starting(&self, suites: &[&TestSuite]);
    fn test_run_ended(&self, summary: &Summary);

    fn scope_starting(&self, desc: &ScopeDesc);
    fn scope_ended(&self, summary: &ScopeSummary);
}

macro_rules! impl_reporter_body {
    () => {
        fn test_run_starting(&self, suites: &[&TestSuite]) {
            (**self).test_run_starting(suites)
        }

        fn test_run_ended(&self, summary: &Summary) {
            (**self).test_run_ended(summary)
        }

        fn scope_starting(&self, desc: &ScopeDesc) {
            (**self).scope_starting(desc)
        }

        fn scope_ended(&self, summary: &ScopeSummary) {
            (**self).scope_ended(summary)
        }
    };
}

impl<R: ?Sized> Reporter for &R
where
    R: Reporter,
{
    impl_reporter_body!();
}

impl<R: ?Sized> Reporter for Box<R>
where
    R: Reporter,
{
    impl_reporter_body!();
}

impl<R: ?Sized> Reporter for std::sync::Arc<R>
where
    R: Reporter,
{
    impl_reporter_body!();
}
