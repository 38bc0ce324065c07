// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for garden.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O, templating, and process-execution concerns are handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derive
//! - **Immutable entities**: The map is read-only after load
//!
// Public API - what the world sees
pub mod error;
pub mod inventory;
pub mod layout;
pub mod map;

// Re-exports for convenience
pub use error::DomainError;
pub use inventory::TemplateInventory;
pub use map::{GardenMap, Plant, PlantFilter, VarMap, Zone};

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    // ========================================================================
    // Cross-module behavior: document → resolution → inventory → env
    // ========================================================================

    fn document() -> GardenMap {
        // JSON stands in for the map document here; the domain is format
        // agnostic and the YAML path is exercised by the map loader.
        serde_json::from_str(
            r#"{
                "plants": {
                    "api": {
                        "path": "/srv/$_GARDEN_PLANT_ID",
                        "seed": "service",
                        "vars": { "PORT": "8080" },
                        "zones": ["shared", "backend"]
                    }
                },
                "zones": {
                    "shared": { "vars": { "ORG": "acme", "PORT": "80" } },
                    "backend": { "vars": { "PORT": "9090", "LANG": "go" } }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn resolution_feeds_inventory_with_full_overlay() {
        let map = document();
        let plant = map.plant("api").unwrap();
        let expanded = plant.expanded_path("api");
        assert_eq!(expanded, "/srv/api");

        let inventory =
            TemplateInventory::new("api", Path::new(&expanded), map.vars_for_plant("api").unwrap());

        // plant var beats both zones; later zone beats earlier zone.
        assert_eq!(inventory.vars.get("PORT").map(String::as_str), Some("8080"));
        assert_eq!(inventory.vars.get("LANG").map(String::as_str), Some("go"));
        assert_eq!(inventory.vars.get("ORG").map(String::as_str), Some("acme"));
    }

    #[test]
    fn inventory_env_round_trips_resolved_vars() {
        let map = document();
        let inventory = TemplateInventory::new(
            "api",
            Path::new("/srv/api"),
            map.vars_for_plant("api").unwrap(),
        );
        let env = inventory.child_env();
        assert!(env.contains(&("_GARDEN_PLANT_ID".into(), "api".into())));
        assert!(env.contains(&("_GARDEN_PLANT_PATH".into(), "/srv/api".into())));
        assert!(env.contains(&("_GARDENVAR_PORT".into(), "8080".into())));
        assert!(env.contains(&("_GARDENVAR_ORG".into(), "acme".into())));
    }

    #[test]
    fn layout_and_map_agree_on_garden_conventions() {
        let garden = Path::new("/home/u/.garden");
        let map = document();
        let plant = map.plant("api").unwrap();

        let seed = layout::seed_dir(garden, &plant.seed);
        assert_eq!(seed, Path::new("/home/u/.garden/seeds/service"));
        assert_eq!(layout::map_path(garden), Path::new("/home/u/.garden/map.yml"));
    }

    #[test]
    fn inventory_serializes_with_template_context_names() {
        let inventory = TemplateInventory::new("p", Path::new("/p"), VarMap::new());
        let json = serde_json::to_value(&inventory).unwrap();
        assert!(json.get("plant_id").is_some());
        assert!(json.get("plant_path").is_some());
        assert!(json.get("vars").is_some());
    }
}
