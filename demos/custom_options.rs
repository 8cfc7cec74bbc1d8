//! Customizing Extended JSON output with EjsonOptions.
//!
//! Run with: cargo run --example custom_options

use serde::Serialize;
use serde_ejson::{to_string_with_options, EjsonOptions};
use std::error::Error;

#[derive(Debug, Serialize)]
struct Reading {
    sensor: i32,
    count: i64,
    value: f64,
    label: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let reading = Reading {
        sensor: 7,
        count: 120,
        value: 0.5,
        label: "<probe A>".to_string(),
    };

    // Default: relaxed, compact
    println!("Relaxed:");
    println!("{}\n", serde_ejson::to_string(&reading)?);

    // Canonical mode keeps the BSON wire types
    println!("Canonical:");
    let canonical = to_string_with_options(&reading, EjsonOptions::canonical())?;
    println!("{}\n", canonical);

    // Pretty with 4-space indentation
    println!("Pretty (indent 4):");
    let pretty_options = EjsonOptions::pretty().with_indent(4);
    println!("{}\n", to_string_with_options(&reading, pretty_options)?);

    // HTML-safe escaping for embedding in script contexts
    println!("HTML-escaped:");
    let html_options = EjsonOptions::new().with_escape_html(true);
    println!("{}", to_string_with_options(&reading, html_options)?);

    Ok(())
}
