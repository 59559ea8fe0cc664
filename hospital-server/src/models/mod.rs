//! Domain models
//!
//! Row projections are typed structs so that only the documented columns
//! are ever serialized. Path input is validated when a `FilterValue` is built.

pub mod validation;
pub mod filter;
pub mod patient;
pub mod provider;

pub use validation::ValidationError;
pub use filter::FilterValue;
pub use patient::Patient;
pub use provider::Provider;
