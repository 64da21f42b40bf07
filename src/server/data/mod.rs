//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the
//! application. Repositories provide an abstraction layer over database
//! operations, organizing data access by domain (accounts, listings, fee
//! settings, and contracts). Each repository is generic over
//! [`sea_orm::ConnectionTrait`] so services can run the same queries against
//! the shared connection or inside a transaction.

pub mod account;
pub mod contract;
pub mod post;
pub mod settings;
