//! Infrastructure layer: I/O boundary traits and DI container
//!
//! This layer implements I/O boundary traits and wires up services.

pub mod di;
pub mod traits;

pub use di::ServiceContainer;
