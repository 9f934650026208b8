use melting::{Melt, melt};

#[derive(Melt)]
struct Wrapper<T> {
    inner: T,
    tag: &'static str,
}

#[derive(Melt)]
struct Pair<A, const N: usize> {
    left: A,
    right: [u8; N],
}

fn main() -> Result<(), melting::MeltError> {
    let source = Wrapper { inner: 3_u16, tag: "new" };
    let mut destination = Wrapper { inner: 1_u16, tag: "old" };
    melt(&source, &mut destination)?;
    assert_eq!(destination.inner, 3);
    assert_eq!(destination.tag, "new");

    let source = Pair { left: String::from("a"), right: [1; 2] };
    let mut destination = Pair { left: String::new(), right: [0; 2] };
    melt(&source, &mut destination)?;
    assert_eq!(destination.right, [1, 1]);
    Ok(())
}
