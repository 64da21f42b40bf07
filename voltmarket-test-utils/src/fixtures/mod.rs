//! Test fixture modules for database record creation.
//!
//! This module contains fixture utilities for creating test data during test
//! execution. Each submodule provides specialized fixtures for one area of
//! the system:
//!
//! - `account` - Marketplace accounts (sellers, buyers, admins)
//! - `post` - Listings with detail blocks, images, and verification records
//! - `settings` - Fee tiers and the refund policy

pub mod account;
pub mod post;
pub mod settings;
