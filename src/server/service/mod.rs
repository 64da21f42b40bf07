//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that implements the marketplace
//! rules on top of the repositories: signup validation and password hashing,
//! the listing lifecycle state machine, the verification workflow, fee tier
//! administration and resolution, and the deposit contract settlement path.
//! Services borrow the shared database connection and open a transaction
//! whenever an operation writes more than one row.

pub mod account;
pub mod contract;
pub mod post;
pub mod settings;
