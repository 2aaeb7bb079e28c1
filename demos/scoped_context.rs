//! Scoped context example
//!
//! Demonstrates deriving loggers with `with`: each derived logger carries
//! its own default properties, merged into every event it emits, without
//! affecting the parent.
//!
//! Run with: cargo run --example scoped_context

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

    // Add some context to this customer journey
    let purchase_logger = logger.with(props(json!({
        "trace": {"id": "1c8a5fb2-fecd-44d8-92a4-449eb2ce4dcb"},
        "customer": {"full_name": "Freda Bloggs"},
        "event": {"action": "pet purchase"}
    })));

    purchase_logger.info(props(json!({
        "message": "customer bought a dog",
        "pet": {"name": "Barker", "species": "dog", "breed": "Bitsa"}
    })))?;

    // The parent logger is unaffected: no trace, customer, or event fields
    logger.info("shop closed for the day")?;

    Ok(())
}
