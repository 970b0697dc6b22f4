use super::{Outcome, Reporter, ScopeDesc, ScopeSummary, Summary};
use crate::test::TestSuite;

/// Reports progress through the `log` facade.
#[derive(Debug, Clone)]
pub(crate) struct LogReporter {
    _p: (),
}

impl LogReporter {
    pub(crate) fn new() -> Self {
        Self { _p: () }
    }
}

impl Reporter for LogReporter {
    fn test_run_starting(&self, suites: &[&TestSuite]) {
        let suffix = match suites.len() {
            1 => "",
            _ => "s",
        };
        log::info!("running {} suite{}", suites.len(), suffix);
    }

    fn test_run_ended(&self, summary: &Summary) {
        if summary.is_passed() {
            log::info!("test status: ok");
        } else {
            log::error!("test status: FAILED");
        }
    }

    fn scope_starting(&self, desc: &ScopeDesc) {
        log::info!("start: {}", desc.name());
    }

    fn scope_ended(&self, summary: &ScopeSummary) {
        match summary.outcome() {
            Outcome::Failed { reason, .. } => log::error!("{}: FAILED: {}", summary.name(), reason),
            Outcome::Panicked(unwind) => log::error!("{}: FAILED: {}", summary.name(), unwind),
            Outcome::Skipped { reason, .. } => log::info!("{}: skipped: {}", summary.name(), reason),
            Outcome::Passed if !summary.is_passed() => {
                log::error!("{}: FAILED in nested case", summary.name())
            }
            Outcome::Passed => log::info!("{}: ok", summary.name()),
        }
    }
}
