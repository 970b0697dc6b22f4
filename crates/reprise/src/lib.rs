/*!
Nested test cases with shared setup and teardown, driven by replaying the suite.

A suite is an ordinary function that performs some setup, registers named
cases and then tears the setup down again. Cases may register further cases
of their own. Instead of executing every case in a single pass, the suite is
run once per node of its case tree: each run selects one case per level and
merely counts the others, so every case observes a freshly built setup and
the teardown always runs after it.

```
let summary = reprise::run("vec", |ctx| {
    reprise::suite(ctx, |_ctx, test| {
        let mut v = Vec::with_capacity(5);
        v.extend_from_slice(&[1, 2, 3]);

        test.case("push", || {
            v.push(4);
            assert_eq!(v.len(), 4);

            test.case("then pop", || {
                assert_eq!(v.pop(), Some(4));
            });
        });

        test.case("clear", || {
            v.clear();
            assert!(v.is_empty());
        });

        // runs after each of "push", "push/then pop" and "clear"
        assert!(v.capacity() >= 5);
    });
});

assert!(summary.is_passed());
assert!(summary.find("vec/push/then pop").is_some());
```

Suites are usually declared with [`#[reprise::test]`](macro@test) and run by
the harness generated with [`test_harness!`], which accepts the command line
arguments of the built-in test harness.
!*/

#![doc(html_root_url = "https://docs.rs/reprise/0.1.0-dev")]
#![deny(missing_docs)]
#![forbid(clippy::unimplemented, clippy::todo)]

#[macro_use]
mod macros;

mod args;
mod channel;
mod context;
mod driver;
mod error;
mod exit_status;
mod frame;
mod harness;
mod host;
mod registry;
mod report;
mod runner;
mod termination;

pub use crate::{
    channel::Register,
    context::Context,
    driver::{case, run_suite, suite, suite_implicit, Suite},
    error::CaseError,
    exit_status::ExitStatus,
    host::{ExecutionId, Host, RunScoped},
    report::{Outcome, ScopeDesc, ScopeSummary},
    runner::{run, test_runner},
    termination::Termination,
    test::Location,
};

/// Define a test suite.
///
/// A function taking `&Context<'_>` is run in the implicit style, where cases
/// are registered with [`case`]. A function taking `&Context<'_>` and
/// `&Register<'_>` is run in the explicit style.
///
/// The path of this crate can be overridden with `#[reprise(crate = path)]`.
pub use reprise_macros::test;

hidden_item! {
    /// Re-exported items for #[test]
    pub mod _test_reexports {
        pub use crate::{
            __location as location, //
            __suite_fn as suite_fn,
            __test_name as test_name,
            channel::Register,
            context::Context,
            termination::Termination,
            test::{Location, SuiteFn, TestDesc, TestName, TestSuite},
        };
        pub use std::{
            column, concat, file, format_args, line, module_path, result::Result, stringify,
        };
    }

    /// Re-exported items for test_main!()
    pub mod _test_main_reexports {
        pub use crate::runner::test_runner;
    }

    /// Re-exported items for test_harness!() and __test_suite!()
    #[cfg(feature = "harness")]
    pub mod _test_harness_reexports {
        pub use {
            crate::harness::{TEST_SUITES, main},
            linkme::{self, distributed_slice},
        };
    }
}
