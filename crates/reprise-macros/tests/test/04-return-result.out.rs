#[allow(non_upper_case_globals)]
const return_result: & ::reprise::_test_reexports::TestSuite = {
    #[allow(unused_imports)]
    use ::reprise::_test_reexports as __reprise;

    fn return_result(_: &Context<'_>, _: &Register<'_>) -> std::io::Result<()>
    where
        std::io::Result<()>: __reprise::Termination
    {
        Ok(())
    }

    &__reprise::TestSuite {
        desc: __reprise::TestDesc {
            name: __reprise::test_name!(return_result),
            location: __reprise::location!(),
        },
        suite_fn: __reprise::suite_fn!(@explicit return_result),
    }
};

::reprise::__test_suite! {
    #[allow(non_upper_case_globals)]
    static __TEST_SUITE_return_result: & ::reprise::_test_reexports::TestSuite = return_result;
}
