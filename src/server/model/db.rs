//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity
//! models used throughout the application. These aliases simplify type
//! signatures and provide a single point of reference for database model
//! types, making it easier to work with entities without importing from the
//! generated `entity` crate directly.

/// Type alias for a marketplace account database model.
///
/// Represents a registered user of the marketplace. Accounts sign up with
/// exactly one of email or phone and own listings as sellers; the stored
/// password hash never leaves the server.
///
/// # Fields (from `entity::account::Model`)
/// - `id` - Primary key, unique account identifier
/// - `full_name` - Display name given at signup
/// - `email` - Email address (nullable, unique when present)
/// - `phone` - Phone number (nullable, unique when present)
/// - `password_hash` - Argon2 hash of the signup password
/// - `avatar_url` - Optional profile image URL
/// - `role` - MEMBER or ADMIN
/// - `status` - ACTIVE or SUSPENDED
/// - `created_at` / `updated_at` - Record timestamps
pub type AccountModel = entity::account::Model;

/// Type alias for a listing database model.
///
/// Represents a second-hand EV listing. The row carries the scalar listing
/// fields and lifecycle state; type-specific details, images, and the
/// verification record live in child tables keyed by the post id.
///
/// # Fields (from `entity::post::Model`)
/// - `id` - Primary key, unique listing identifier
/// - `seller_id` - Foreign key to the owning account
/// - `post_type` - EV_CAR, EV_BIKE, or the reserved EV_BATTERY
/// - `title` / `description` - Listing copy
/// - `ward_code`, `province_name_cached`, `district_name_cached`,
///   `ward_name_cached`, `address_text_cached` - Denormalized address fields
/// - `price` - Asking price in the smallest currency unit
/// - `is_negotiable` - Whether the price is open to negotiation
/// - `status` - DRAFT, PENDING_REVIEW, PUBLISHED, REJECTED, or SOLD
/// - `rejected_reason` - Review rejection reason (nullable)
/// - `submitted_at` / `reviewed_at` - Lifecycle timestamps (nullable)
/// - `created_at` / `updated_at` - Record timestamps
pub type PostModel = entity::post::Model;

/// Type alias for the car detail block of a listing.
///
/// One row per EV_CAR post, keyed by the post id. Measurements that need
/// sub-unit precision (battery capacity, charge power, battery health) are
/// stored as decimals.
pub type CarDetailsModel = entity::post_car_details::Model;

/// Type alias for the bike detail block of a listing.
///
/// One row per EV_BIKE post, keyed by the post id. Mirrors the car block but
/// swaps body style for bike style and DC charge power for motor power.
pub type BikeDetailsModel = entity::post_bike_details::Model;

/// Type alias for a listing image record.
///
/// Stores the image URL and its sort order; the image with the lowest sort
/// order is the listing's cover.
pub type PostImageModel = entity::post_image::Model;

/// Type alias for a listing verification record.
///
/// Zero or one per post. Absence of the row means verification was never
/// requested.
pub type VerificationModel = entity::post_verification::Model;

/// Type alias for a fee tier database model.
///
/// A commission bracket `[min_price, max_price)` with its deposit rate; a
/// null `max_price` leaves the bracket unbounded upwards.
pub type FeeTierModel = entity::fee_tier::Model;

/// Type alias for the refund policy database model.
///
/// Singleton administrative record holding the deposit refund percent and
/// cancellation window.
pub type RefundPolicyModel = entity::refund_policy::Model;

/// Type alias for a deposit contract database model.
///
/// Links a listing, buyer, and seller, and freezes the assembled listing
/// JSON as an audit snapshot at creation time.
///
/// # Fields (from `entity::contract::Model`)
/// - `id` - Primary key, unique contract identifier
/// - `listing_id` - Identifier of the listing the contract was created from
/// - `buyer_id` / `seller_id` - Foreign keys to the two account parties
/// - `file_path` - Generated contract document path (nullable)
/// - `listing_snapshot` - Assembled listing JSON frozen at creation
/// - `fee_rate` - Deposit rate applied from the resolved fee tier
/// - `deposit_amount` - Computed deposit in the smallest currency unit
/// - `confirmed_at` - Confirmation timestamp, set exactly once (nullable)
/// - `hash` - SHA-256 integrity hash over the snapshot (nullable)
/// - `signature_placeholder` - Reserved for a future digital signature
/// - `created_at` / `updated_at` - Record timestamps
pub type ContractModel = entity::contract::Model;
