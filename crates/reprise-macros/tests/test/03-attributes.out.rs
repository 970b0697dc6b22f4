#[allow(non_upper_case_globals)]
const attributes: & path::to::reprise::_test_reexports::TestSuite = {
    #[allow(unused_imports)]
    use path::to::reprise::_test_reexports as __reprise;

    #[allow(clippy::len_zero)]
    fn attributes(ctx: &Context<'_>) {
        let vec = Vec::<usize>::new();
        assert!(vec.len() == 0);

        #[allow(unused_variables)]
        let unused = 10;
    }

    &__reprise::TestSuite {
        desc: __reprise::TestDesc {
            name: __reprise::test_name!(attributes),
            location: __reprise::location!(),
        },
        suite_fn: __reprise::suite_fn!(@implicit attributes),
    }
};

path::to::reprise::__test_suite! {
    #[allow(non_upper_case_globals)]
    static __TEST_SUITE_attributes: & path::to::reprise::_test_reexports::TestSuite = attributes;
}
