#[allow(non_upper_case_globals)]
const implicit: & ::reprise::_test_reexports::TestSuite = {
    #[allow(unused_imports)]
    use ::reprise::_test_reexports as __reprise;

    fn implicit(ctx: &Context<'_>) {
        let mut vec = vec![0usize; 5];
        assert_eq!(vec.len(), 5);

        reprise::case(ctx, "resizing bigger changes size and capacity", || {
            vec.resize(10, 0);
            assert_eq!(vec.len(), 10);
            assert!(vec.capacity() >= 10);
        });
    }

    &__reprise::TestSuite {
        desc: __reprise::TestDesc {
            name: __reprise::test_name!(implicit),
            location: __reprise::location!(),
        },
        suite_fn: __reprise::suite_fn!(@implicit implicit),
    }
};

::reprise::__test_suite! {
    #[allow(non_upper_case_globals)]
    static __TEST_SUITE_implicit: & ::reprise::_test_reexports::TestSuite = implicit;
}
