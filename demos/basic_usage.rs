//! Basic logger usage example
//!
//! Demonstrates text and structured emissions at different levels and
//! automatic error enrichment.
//!
//! Run with: cargo run --example basic_usage

use ecs_logger_core::prelude::*;
use serde_json::{json, Value};

fn props(value: Value) -> PropertyMap {
    match value {
        Value::Object(map) => map,
        _ => PropertyMap::new(),
    }
}

fn main() -> Result<()> {
    let logger = Logger::builder("petshop").sink(ConsoleSink::new()).build()?;

    // Plain text messages
    logger.debug("Checking stock levels")?;
    logger.info("Guinea pigs arrived")?;
    logger.warn("Only two dogs left")?;

    // Structured messages; dotted keys become nested objects
    logger.info(props(json!({
        "message": "customer bought a dog",
        "pet.name": "Barker",
        "pet.species": "dog",
        "pet.breed": "Bitsa"
    })))?;

    // Error emissions can carry structured error details
    let details = ErrorInfo::new("divided by 0").with_stack_trace([
        "till.rs:42: fn split_bill",
        "checkout.rs:17: fn total",
    ]);
    logger.error_with("Failed to split the bill", &details)?;

    Ok(())
}
