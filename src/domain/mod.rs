//! # Domain Layer
//!
//! Core models, the response schema contract, and the error taxonomy.
//! This layer is independent of external frameworks and infrastructure.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
