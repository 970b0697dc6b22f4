fn implicit(ctx: &Context<'_>) {
    let mut vec = vec![0usize; 5];
    assert_eq!(vec.len(), 5);

    reprise::case(ctx, "resizing bigger changes size and capacity", || {
        vec.resize(10, 0);
        assert_eq!(vec.len(), 10);
        assert!(vec.capacity() >= 10);
    });
}
