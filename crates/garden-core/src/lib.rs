//! Garden Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the garden
//! project-inventory tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           garden-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │      (GrowService, ReapService)         │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Filesystem, Engine, Runner)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    garden-adapters (Infrastructure)     │
//! │ (LocalFilesystem, TeraEngine, etc)      │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │ (GardenMap, Plant, Zone, Inventory)     │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use garden_core::{
//!     application::GrowService,
//!     domain::PlantFilter,
//! };
//! # fn demo(map: garden_core::domain::GardenMap,
//! #         filesystem: Box<dyn garden_core::application::ports::Filesystem>,
//! #         engine: Box<dyn garden_core::application::ports::TemplateEngine>)
//! #         -> garden_core::error::GardenResult<()> {
//!
//! // 1. Select plants (explicit filter, no ambient state)
//! let filter = PlantFilter::all();
//! let ids = map.filtered_plant_ids(&filter);
//!
//! // 2. Use application service (with injected adapters)
//! let service = GrowService::new(filesystem, engine);
//! for id in &ids {
//!     service.grow_plant(&map, id, std::path::Path::new("/tmp/.garden"))?;
//! }
//! # Ok(())
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GrowService, ReapService,
        ports::{CommandSpec, Filesystem, ProcessRunner, RenderError, TemplateEngine},
    };
    pub use crate::domain::{
        GardenMap, Plant, PlantFilter, TemplateInventory, VarMap, Zone, layout,
    };
    pub use crate::error::{GardenError, GardenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
