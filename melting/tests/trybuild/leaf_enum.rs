use melting::{Melt, melt};

#[derive(Clone, Debug, PartialEq, Melt)]
#[melt(leaf)]
enum Mode {
    Fast,
    Safe { retries: u8 },
}

#[derive(Clone, Debug, PartialEq, Melt)]
#[melt(leaf)]
struct Opaque(u32);

#[derive(Melt)]
struct Job {
    mode: Mode,
    token: Opaque,
}

fn main() -> Result<(), melting::MeltError> {
    let source = Job { mode: Mode::Safe { retries: 3 }, token: Opaque(7) };
    let mut destination = Job { mode: Mode::Fast, token: Opaque(0) };
    melt(&source, &mut destination)?;
    assert_eq!(destination.mode, Mode::Safe { retries: 3 });
    assert_eq!(destination.token, Opaque(7));
    Ok(())
}
