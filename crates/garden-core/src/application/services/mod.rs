//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the two
//! plant lifecycle operations: "grow a plant from its seed" and "reap a
//! plant with an external command".

pub mod grow_service;
pub mod reap_service;

pub use grow_service::GrowService;
pub use reap_service::ReapService;
