//! Demonstrates loading the built-in registry and dumping its catalog.
//!
//! Run with: `cargo run --example dump_registry -p mathkind`

use mathkind::{classify, TypeRegistry, Value};

fn main() {
    let registry = TypeRegistry::builtin();

    println!("mathkind built-in registry");
    println!("  Types: {}", registry.len());
    println!();

    for descriptor in registry.iter() {
        let markers: Vec<&str> = descriptor.markers().map(|m| m.as_str()).collect();
        let instance = registry
            .instantiate(descriptor.name(), Vec::<(String, Value)>::new())
            .unwrap_or_default();
        let variants: Vec<&str> = classify::variants_of(&instance)
            .into_iter()
            .map(|v| v.name())
            .collect();
        println!(
            "  {:14} parent={:10} markers=[{}] -> [{}]",
            descriptor.name(),
            descriptor.parent().map_or("-", |p| p.name()),
            markers.join(", "),
            variants.join(", "),
        );
    }

    println!();

    let catalog = mathkind::serializer::json::registry_to_json(registry);
    let json_str =
        serde_json::to_string_pretty(&catalog).unwrap_or_else(|e| format!("JSON error: {e}"));
    println!("JSON catalog ({} bytes):", json_str.len());
    println!("{json_str}");
}
