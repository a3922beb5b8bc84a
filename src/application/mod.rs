//! # Application Layer
//!
//! The report-requesting use case and the provider seam it depends on.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
