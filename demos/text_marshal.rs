//! Encoding custom types as text with the text-marshal rule.
//!
//! Run with: cargo run --example text_marshal

use serde::Serialize;
use serde_ejson::{to_string, to_string_with_registry, BoxError, MarshalText, Registry, Text};
use std::error::Error;
use std::net::Ipv4Addr;

/// A document reference rendered as "collection/id".
#[derive(Debug, Serialize)]
struct DocRef {
    collection: String,
    id: u64,
}

impl MarshalText for DocRef {
    fn marshal_text(&self) -> Result<Vec<u8>, BoxError> {
        Ok(format!("{}/{}", self.collection, self.id).into_bytes())
    }
}

#[derive(Serialize)]
struct Peer {
    name: String,
    addr: Text<Ipv4Addr>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let reference = DocRef {
        collection: "orders".to_string(),
        id: 12345,
    };

    // Without a registry hook the struct encodes field by field.
    println!("Structural: {}", to_string(&reference)?);

    // With the hook it encodes as its text form, Option shells included.
    let registry = Registry::builder().text_marshaler::<DocRef>().build();
    println!("Text:       {}", to_string_with_registry(&registry, &reference)?);
    println!("Absent:     {}", to_string_with_registry(&registry, &None::<DocRef>)?);

    // At field positions the Text wrapper applies the same rule.
    let peer = Peer {
        name: "gateway".to_string(),
        addr: Text(Ipv4Addr::new(10, 0, 0, 1)),
    };
    println!("Field:      {}", to_string(&peer)?);

    Ok(())
}
