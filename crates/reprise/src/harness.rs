#![cfg(feature = "harness")]

use crate::{runner::test_runner, test::TestSuite};
use linkme::distributed_slice;

#[doc(hidden)]
#[distributed_slice]
pub static TEST_SUITES: [&'static TestSuite] = [..];

#[doc(hidden)] // private API.
#[macro_export]
macro_rules! __test_suite {
    ( $item:item ) => {
        #[$crate::_test_harness_reexports::distributed_slice(
            $crate::_test_harness_reexports::TEST_SUITES
        )]
        #[linkme(crate = $crate::_test_harness_reexports::linkme)]
        $item
    };
}

#[doc(hidden)]
pub fn main() {
    test_runner(&*TEST_SUITES).exit()
}

/// Generate the main function running every suite defined with `#[reprise::test]`.
///
/// The test target must disable the built-in harness:
///
/// ```toml
/// [[test]]
/// name = "my_suites"
/// harness = false
/// ```
#[macro_export]
macro_rules! test_harness {
    () => {
        fn main() {
            $crate::_test_harness_reexports::main()
        }
    };
}
