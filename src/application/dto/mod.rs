//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so infrastructure (HTTP) can
//! serialize/deserialize without pulling serde into the domain model.
//! Field names are camelCase on the wire.

pub mod character;
pub mod world;

pub use character::*;
pub use world::*;
