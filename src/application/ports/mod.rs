//! Ports - Boundary interfaces for the application layer

pub mod outbound;
