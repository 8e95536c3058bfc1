//! Domain layer for Raincast
//!
//! Contains the forecast samples read from the weather provider, the
//! fixed-shape feature record the classifier consumes, and the prediction
//! result rendered to users. This layer has no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
