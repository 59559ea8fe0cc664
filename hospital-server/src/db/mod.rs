//! Database layer - single connection and store access
//!
//! # Design Principles
//!
//! - Exactly one MySQL connection, opened at startup and held for the process lifetime
//! - Handlers only see the `HospitalStore` trait, never the connection
//! - Every filter is a bound parameter, never interpolated into SQL
//! - SELECT lists name the projected columns only

pub mod connection;
pub mod mysql;
pub mod store;

#[cfg(test)]
pub(crate) mod memory;

pub use connection::{connect, DbConfig};
pub use mysql::MySqlStore;
pub use store::{DbError, HospitalStore};
