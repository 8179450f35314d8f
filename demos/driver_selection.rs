//! Driver selection example: a process-wide driver table built at startup.
//!
//! Demonstrates the static-registry macro with trait-object values and the
//! default entry as the fallback when no driver is named explicitly.
//!
//! Run with: `cargo run --example driver_selection`

use keyed_registry::define_registry;
use std::sync::Arc;

trait StorageDriver: Send + Sync {
    fn scheme(&self) -> &'static str;
    fn describe(&self) -> String;
}

struct InMemory;

impl StorageDriver for InMemory {
    fn scheme(&self) -> &'static str {
        "memory"
    }

    fn describe(&self) -> String {
        "volatile in-process store".to_string()
    }
}

struct OnDisk;

impl StorageDriver for OnDisk {
    fn scheme(&self) -> &'static str {
        "file"
    }

    fn describe(&self) -> String {
        "durable single-file store".to_string()
    }
}

define_registry!(drivers: &'static str => Box<dyn StorageDriver>);

/// Resolves a driver by name, falling back to the default entry.
fn resolve(name: Option<&'static str>) -> Option<Arc<Box<dyn StorageDriver>>> {
    match name {
        Some(name) => drivers::get(&name),
        None => drivers::default_entry().map(|(_, driver)| driver),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== keyed-registry: Driver Selection ===\n");

    // Startup: each driver registers exactly once; a duplicate here would be
    // a wiring bug, so the panicking variant is the right call.
    drivers::register("memory", Box::new(InMemory));
    drivers::register("file", Box::new(OnDisk));
    drivers::set_default("file").unwrap();

    println!("Registered drivers: memory, file (default: file)\n");

    // Explicit selection.
    let driver = resolve(Some("memory")).unwrap();
    println!("memory   -> {} ({})", driver.scheme(), driver.describe());

    // Fallback to the default entry.
    let driver = resolve(None).unwrap();
    println!("(none)   -> {} ({})", driver.scheme(), driver.describe());

    // Unknown names simply resolve to nothing.
    println!("unknown  -> {:?}", resolve(Some("s3")).map(|d| d.scheme()));
}
