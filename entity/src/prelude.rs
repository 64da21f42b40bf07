pub use super::account::Entity as Account;
pub use super::contract::Entity as Contract;
pub use super::fee_tier::Entity as FeeTier;
pub use super::post::Entity as Post;
pub use super::post_bike_details::Entity as PostBikeDetails;
pub use super::post_car_details::Entity as PostCarDetails;
pub use super::post_image::Entity as PostImage;
pub use super::post_verification::Entity as PostVerification;
pub use super::refund_policy::Entity as RefundPolicy;
