pub use sea_orm_migration::prelude::*;

mod m20260301_000001_account;
mod m20260301_000002_post;
mod m20260301_000003_post_car_details;
mod m20260301_000004_post_bike_details;
mod m20260301_000005_post_image;
mod m20260301_000006_post_verification;
mod m20260301_000007_fee_tier;
mod m20260301_000008_refund_policy;
mod m20260301_000009_contract;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_account::Migration),
            Box::new(m20260301_000002_post::Migration),
            Box::new(m20260301_000003_post_car_details::Migration),
            Box::new(m20260301_000004_post_bike_details::Migration),
            Box::new(m20260301_000005_post_image::Migration),
            Box::new(m20260301_000006_post_verification::Migration),
            Box::new(m20260301_000007_fee_tier::Migration),
            Box::new(m20260301_000008_refund_policy::Migration),
            Box::new(m20260301_000009_contract::Migration),
        ]
    }
}
