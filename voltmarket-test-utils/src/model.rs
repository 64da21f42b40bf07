//! Database model type aliases for test utilities.
//!
//! This module provides convenient type aliases for SeaORM database entity
//! models used throughout the test utilities. These aliases match those in
//! the main voltmarket crate to ensure consistency across tests.

/// Type alias for a marketplace account database model.
pub type AccountModel = entity::account::Model;

/// Type alias for a listing database model.
pub type PostModel = entity::post::Model;

/// Type alias for the car detail block of a listing.
pub type CarDetailsModel = entity::post_car_details::Model;

/// Type alias for the bike detail block of a listing.
pub type BikeDetailsModel = entity::post_bike_details::Model;

/// Type alias for a listing image record.
pub type PostImageModel = entity::post_image::Model;

/// Type alias for a listing verification record.
pub type VerificationModel = entity::post_verification::Model;

/// Type alias for a fee tier database model.
pub type FeeTierModel = entity::fee_tier::Model;

/// Type alias for the refund policy database model.
pub type RefundPolicyModel = entity::refund_policy::Model;

/// Type alias for a deposit contract database model.
pub type ContractModel = entity::contract::Model;
