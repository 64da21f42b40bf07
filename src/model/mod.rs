//! Wire-level data transfer objects.
//!
//! These are the JSON shapes exchanged with API clients, kept separate from
//! the database entities. Post-level fields are camelCase on the wire while
//! the vehicle detail blocks keep snake_case field names.

pub mod account;
pub mod api;
pub mod contract;
pub mod post;
pub mod settings;
