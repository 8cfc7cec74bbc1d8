//! Basic Extended JSON serialization.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use serde_ejson::{to_string, to_string_pretty};
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    email: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let users = vec![
        User {
            id: 42,
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
        },
        User {
            id: 43,
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
        },
    ];

    // Compact relaxed Extended JSON
    let ejson = to_string(&users)?;
    println!("Compact:\n{}\n", ejson);

    // Pretty-printed
    let pretty = to_string_pretty(&users)?;
    println!("Pretty:\n{}", pretty);

    Ok(())
}
