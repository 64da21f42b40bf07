//! HTTP controller endpoints for the Voltmarket web API.
//!
//! This module contains Axum handlers for accounts, listings, marketplace
//! settings, and deposit contracts. Controllers handle HTTP requests, hand
//! the work to the matching service, and map results to HTTP responses. Every
//! endpoint is annotated with utoipa for OpenAPI documentation.

pub mod account;
pub mod contract;
pub mod post;
pub mod settings;
