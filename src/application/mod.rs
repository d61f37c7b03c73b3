//! # Application Layer
//!
//! Use cases and the error taxonomy the API surface translates from.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
