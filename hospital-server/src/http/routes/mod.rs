//! Route handlers organized by resource

pub mod root;
pub mod patients;
pub mod providers;
