use melting as deps;

#[derive(deps::Melt)]
#[melt(crate = "deps")]
struct Settings {
    level: u8,
}

fn main() -> Result<(), deps::MeltError> {
    let mut destination = Settings { level: 1 };
    deps::melt(&Settings { level: 4 }, &mut destination)?;
    assert_eq!(destination.level, 4);
    Ok(())
}
