macro_rules! hidden_item {
    ( $( $item:item )* ) => {
        $(
            #[doc(hidden)]
            $item
        )*
    };
}

/// Mark the current scope as skipped and then terminate its execution.
///
/// The cases nested under a skipped scope are not discovered. This macro is
/// usually used to disable suites that cannot succeed in the current
/// environment, such as those requiring network access.
#[macro_export]
macro_rules! skip {
    ( $ctx:ident ) => {
        $crate::skip!($ctx, "explicitly skipped");
    };
    ( $ctx:ident, $($arg:tt)+ ) => {{
        use $crate::_test_reexports as __reprise;
        const LOCATION: __reprise::Location = __reprise::location!();
        return $ctx.skip(&LOCATION, __reprise::format_args!($($arg)+));
    }};
}

/// Mark the current scope as failed and then terminate its execution.
#[macro_export]
macro_rules! fail {
    ($ctx:ident) => {
        $crate::fail!($ctx, "explicitly failed");
    };
    ($ctx:ident, $($arg:tt)+) => {{
        use $crate::_test_reexports as __reprise;
        const LOCATION: __reprise::Location = __reprise::location!();
        return $ctx.fail_at(&LOCATION, __reprise::format_args!($($arg)+));
    }};
}

/// Generate the main function running the listed suites.
///
/// ```ignore
/// #[reprise::test]
/// fn first(_: &reprise::Context<'_>) {}
///
/// #[reprise::test]
/// fn second(_: &reprise::Context<'_>) {}
///
/// reprise::test_main!(first, second);
/// ```
#[macro_export]
macro_rules! test_main {
    ( $( $suite:path ),* $(,)? ) => {
        fn main() {
            $crate::_test_main_reexports::test_runner(&[ $( $suite ),* ]).exit()
        }
    };
}

#[doc(hidden)] // private API
#[macro_export]
macro_rules! __test_name {
    ($name:ident) => {{
        use $crate::_test_reexports as __reprise;
        __reprise::TestName {
            raw: __reprise::concat!(__reprise::module_path!(), "::", __reprise::stringify!($name)),
        }
    }};
}

#[doc(hidden)] // private API
#[macro_export]
macro_rules! __suite_fn {
    (@explicit $path:path) => {{
        use $crate::_test_reexports as __reprise;
        __reprise::SuiteFn::Explicit(|ctx, test| {
            __reprise::Termination::into_result($path(ctx, test))
        })
    }};

    (@implicit $path:path) => {{
        use $crate::_test_reexports as __reprise;
        __reprise::SuiteFn::Implicit(|ctx| {
            __reprise::Termination::into_result($path(ctx))
        })
    }};
}

#[doc(hidden)] // private API
#[macro_export]
macro_rules! __location {
    () => {{
        use $crate::_test_reexports as __reprise;
        __reprise::Location {
            file: __reprise::file!(),
            line: __reprise::line!(),
            column: __reprise::column!(),
        }
    }};
}

#[cfg(not(feature = "harness"))]
#[doc(hidden)] // private API
#[macro_export]
macro_rules! __test_suite {
    ( $item:item ) => {};
}
