//! Application layer - Use cases and orchestration
//!
//! Defines the ports the rain forecast use case depends on and the services
//! that drive them. Infrastructure adapters implement the ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
