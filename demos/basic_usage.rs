//! Basic usage example for keyed-registry.
//!
//! Demonstrates:
//! - Registering values under unique keys with `register()` and `try_register()`
//! - Write-once semantics: duplicate keys are rejected, first binding wins
//! - Retrieving values with `get()` (returns `Arc<V>`) and `get_cloned()`
//! - Designating a default entry with `set_default()` / `default_entry()`
//!
//! Run with: `cargo run --example basic_usage`

use keyed_registry::Registry;
use std::sync::Arc;

fn main() {
    // Log the registry's tracing events to stderr so the write-once
    // rejections below are visible.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== keyed-registry: Basic Usage ===\n");

    let endpoints: Registry<&str, String> = Registry::new("endpoints");

    // -------------------------------------------------------------------------
    // 1. Register values under unique keys
    // -------------------------------------------------------------------------
    println!("1. Registering endpoints...");

    endpoints.register("auth", "https://auth.internal:8443".to_string());
    endpoints.register("billing", "https://billing.internal:8443".to_string());
    endpoints.register("search", "https://search.internal:9200".to_string());

    println!("   Registered: auth, billing, search");

    // -------------------------------------------------------------------------
    // 2. Duplicate keys are rejected
    // -------------------------------------------------------------------------
    println!("\n2. Attempting to re-register an existing key...");

    match endpoints.try_register("auth", "https://evil.example".to_string()) {
        Ok(()) => println!("   Unexpectedly succeeded"),
        Err(e) => println!("   Error (expected): {e}"),
    }

    // -------------------------------------------------------------------------
    // 3. Retrieve values with get() - returns Arc<V>
    // -------------------------------------------------------------------------
    println!("\n3. Retrieving values with get() -> Arc<V>...");

    let auth: Arc<String> = endpoints.get("auth").unwrap();
    println!("   auth    = {auth}");
    println!("   billing = {}", endpoints.get("billing").unwrap());
    println!("   missing = {:?}", endpoints.get("missing"));

    // -------------------------------------------------------------------------
    // 4. Retrieve owned copies with get_cloned() - returns V
    // -------------------------------------------------------------------------
    println!("\n4. Retrieving owned copies with get_cloned() -> V...");

    let owned: String = endpoints.get_cloned("search").unwrap();
    println!("   search (owned) = {owned}");

    // -------------------------------------------------------------------------
    // 5. Designate a default entry, at most once
    // -------------------------------------------------------------------------
    println!("\n5. Setting the default entry...");

    let value = endpoints.set_default("auth").unwrap();
    println!("   Default set to 'auth' -> {value}");

    match endpoints.set_default("billing") {
        Ok(_) => println!("   Unexpectedly replaced the default"),
        Err(e) => println!("   Error (expected): {e}"),
    }

    let (key, value) = endpoints.default_entry().unwrap();
    println!("   default_entry() = ({key}, {value})");

    // -------------------------------------------------------------------------
    // Summary
    // -------------------------------------------------------------------------
    println!("\n=== Example Complete ===");
    println!("The registry holds 3 endpoints; 'auth' is the default entry.");
}
