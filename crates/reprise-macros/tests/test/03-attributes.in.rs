#[allow(clippy::len_zero)]
#[reprise(crate = path::to::reprise)]
fn attributes(ctx: &Context<'_>) {
    let vec = Vec::<usize>::new();
    assert!(vec.len() == 0);

    #[allow(unused_variables)]
    let unused = 10;
}
