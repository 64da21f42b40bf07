//! Voltmarket, a marketplace backend for second-hand electric vehicles.
//!
//! The crate is split into wire-level DTOs under [`model`] and the HTTP
//! backend under [`server`].

pub mod model;
pub mod server;
