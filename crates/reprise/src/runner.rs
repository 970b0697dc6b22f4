use crate::{
    args::{Args, OutputFormat},
    context::Context,
    exit_status::ExitStatus,
    report::{ConsoleReporter, LogReporter, Outcome, Reporter, ScopeDesc, ScopeSummary, Summary},
    test::TestSuite,
};
use futures_channel::oneshot;
use futures_executor::{block_on, ThreadPool};
use futures_util::future::join_all;
use maybe_unwind::capture_panic_info;
use std::{
    collections::HashSet,
    panic,
    sync::{Arc, Once},
};

pub(crate) fn install_panic_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let prev_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !capture_panic_info(info) {
                prev_hook(info);
            }
        }));
    });
}

/// Run `f` as the root scope of a suite outside of the test harness.
///
/// Progress is reported through the `log` facade and the results of the
/// scope and its nested cases are returned to the caller.
///
/// ```
/// let summary = reprise::run("arith", |ctx| {
///     reprise::suite(ctx, |_, test| {
///         test.case("add", || assert_eq!(1 + 1, 2));
///         test.case("mul", || assert_eq!(2 * 3, 6));
///     });
/// });
/// assert!(summary.is_passed());
/// assert_eq!(summary.children().len(), 2);
/// ```
pub fn run<F>(name: &str, f: F) -> ScopeSummary
where
    F: FnOnce(&Context<'_>),
{
    install_panic_hook();
    let reporter = LogReporter::new();
    Context::root(&reporter, name, None).run(f)
}

/// Run the given suites with the command line arguments of the process.
pub fn test_runner(suites: &[&'static TestSuite]) -> ExitStatus {
    install_panic_hook();

    let args = match Args::from_env() {
        Ok(args) => args,
        Err(status) => return status,
    };

    let mut suites = suites.to_vec();
    suites.sort_by(|a, b| a.name().cmp(b.name()));

    let mut unique_names = HashSet::new();
    for suite in &suites {
        if !unique_names.insert(suite.name()) {
            eprintln!("the suite name is conflicted: {}", suite.name());
            return ExitStatus::FAILED;
        }
    }

    if args.list {
        for suite in &suites {
            println!("{}: test", suite.name());
        }
        return ExitStatus::OK;
    }

    if let Some(ref pattern) = args.filter_pattern {
        eprintln!(
            "warning: filtering is not supported; running every suite (FILTER = {:?})",
            pattern
        );
    }

    let reporter: Arc<dyn Reporter + Send + Sync> = match args.format {
        OutputFormat::Pretty => Arc::new(ConsoleReporter::new(&args)),
        OutputFormat::Log => Arc::new(LogReporter::new()),
    };

    let mut builder = ThreadPool::builder();
    if let Some(n) = args.test_threads {
        builder.pool_size(n);
    }
    let pool = match builder.name_prefix("reprise-").create() {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("failed to start the test threads: {}", err);
            return ExitStatus::FAILED;
        }
    };

    reporter.test_run_starting(&suites);

    let handles = suites.iter().map(|&suite| {
        let (tx, rx) = oneshot::channel();
        let reporter = reporter.clone();
        pool.spawn_ok(async move {
            let _ = tx.send(suite.run(&*reporter));
        });
        async move {
            rx.await.unwrap_or_else(|err| ScopeSummary {
                desc: ScopeDesc::root(suite.name(), Some(&suite.desc.location)),
                outcome: Outcome::Failed {
                    location: None,
                    reason: format!("unknown error: {}", err),
                },
                children: vec![],
            })
        }
    });

    let mut summary = Summary::default();
    for result in block_on(join_all(handles)) {
        summary.append(result);
    }

    reporter.test_run_ended(&summary);

    if summary.is_passed() {
        ExitStatus::OK
    } else {
        ExitStatus::FAILED
    }
}
