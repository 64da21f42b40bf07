//! Server application core modules.
//!
//! Everything behind the HTTP surface of the Voltmarket API: configuration,
//! routing, request controllers, domain services, database repositories, and
//! the mapping between entities and wire types. Listings, accounts, fee
//! settings, and contracts each get a controller/service/repository column
//! through these modules.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
