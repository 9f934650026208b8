use melting::{Melt, Record, melt};

#[derive(Melt)]
struct Token {
    r#type: String,
    r#ref: u32,
}

#[derive(Melt)]
struct Marker;

fn main() -> Result<(), melting::MeltError> {
    let source = Token { r#type: "bearer".into(), r#ref: 2 };
    let mut destination = Token { r#type: String::new(), r#ref: 0 };
    melt(&source, &mut destination)?;
    assert_eq!(destination.r#type, "bearer");
    assert!(destination.field("type").is_some());
    assert!(Marker.fields().is_empty());
    melt(&Marker, &mut Marker)?;
    Ok(())
}
