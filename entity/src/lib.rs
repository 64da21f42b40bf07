//! Database entities shared by the server, migrations, and test fixtures.

pub mod prelude;

pub mod account;
pub mod contract;
pub mod fee_tier;
pub mod post;
pub mod post_bike_details;
pub mod post_car_details;
pub mod post_image;
pub mod post_verification;
pub mod refund_policy;
pub mod sea_orm_active_enums;
