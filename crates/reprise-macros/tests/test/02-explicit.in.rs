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
