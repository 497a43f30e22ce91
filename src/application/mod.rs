//! Application layer - Use cases and boundary contracts
//!
//! Services implement the use cases, ports declare what the application
//! requires from external systems, and DTOs shape the HTTP boundary.

pub mod dto;
pub mod ports;
pub mod services;
