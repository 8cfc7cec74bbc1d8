//! Building documents at runtime with Value and the ejson! macro.
//!
//! Run with: cargo run --example dynamic_values

use chrono::Utc;
use serde_ejson::{ejson, to_string, to_string_pretty};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let doc = ejson!({
        "name": "Alice",
        "age": 30,
        "tags": ["rust", "serde"],
        "address": {
            "city": "Portland",
            "zip": "97201"
        }
    });

    println!("Compact:\n{}\n", to_string(&doc)?);
    println!("Pretty:\n{}\n", to_string_pretty(&doc)?);

    // Wrapper scalars use their Extended JSON literal form.
    let event = ejson!({
        "at": {"$date": Utc::now()},
        "payload": {"$binary": vec![1u8, 2, 3]}
    });
    println!("Wrapped scalars:\n{}", to_string(&event)?);

    Ok(())
}
