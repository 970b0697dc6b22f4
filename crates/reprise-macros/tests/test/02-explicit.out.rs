#[allow(non_upper_case_globals)]
const explicit: & ::reprise::_test_reexports::TestSuite = {
    #[allow(unused_imports)]
    use ::reprise::_test_reexports as __reprise;

    fn explicit(ctx: &Context<'_>, test: &Register<'_>) {
        let mut vec = vec![0usize; 5];

        test.case("resizing bigger changes size and capacity", || {
            vec.resize(10, 0);
            assert_eq!(vec.len(), 10);

            test.case("shrinking smaller does not change capacity", || {
                vec.resize(0, 0);
                assert!(vec.capacity() >= 10);
            });
        });

        test.case("clearing empties the vector", || {
            vec.clear();
            assert!(vec.is_empty());
        });
    }

    &__reprise::TestSuite {
        desc: __reprise::TestDesc {
            name: __reprise::test_name!(explicit),
            location: __reprise::location!(),
        },
        suite_fn: __reprise::suite_fn!(@explicit explicit),
    }
};

::reprise::__test_suite! {
    #[allow(non_upper_case_globals)]
    static __TEST_SUITE_explicit: & ::reprise::_test_reexports::TestSuite = explicit;
}
