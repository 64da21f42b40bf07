//! Listing response assembly.
//!
//! Pure transforms from loaded rows to the wire representation. An aggregate
//! relation that was not loaded is simply omitted from the response; nothing
//! here touches the database. The verification fields are always present and
//! come from [`map_verification_status`].

use entity::sea_orm_active_enums::VerificationStatus;

use crate::{
    model::post::{
        BikeDetailsDto, CarDetailsDto, PostDto, PostImageDto, VerificationDisplayStatus,
    },
    server::{
        model::{
            db::{BikeDetailsModel, CarDetailsModel, PostImageModel, VerificationModel},
            post::PostAggregate,
        },
        service::account::AccountService,
    },
};

/// Derives the client-facing verification state of a listing.
///
/// A listing with no stored record never requested verification; the
/// rejection reason is only surfaced while the request stands rejected.
pub fn map_verification_status(
    verification: Option<&VerificationModel>,
) -> (VerificationDisplayStatus, Option<String>) {
    match verification {
        None => (VerificationDisplayStatus::NotRequested, None),
        Some(record) => match record.status {
            VerificationStatus::Pending => (VerificationDisplayStatus::Pending, None),
            VerificationStatus::Verified => (VerificationDisplayStatus::Verified, None),
            VerificationStatus::Rejected => (
                VerificationDisplayStatus::Rejected,
                record.rejected_reason.clone(),
            ),
        },
    }
}

/// Assembles one aggregate into the full listing response.
///
/// Scalar fields are copied verbatim. Whether a block appears depends only on
/// the loaded relation, never on `post_type`; at most one detail block can be
/// present because a stored post only ever has one.
pub fn assemble(aggregate: PostAggregate) -> PostDto {
    let (verification_status, verification_rejected_reason) =
        map_verification_status(aggregate.verification.as_ref());

    let post = aggregate.post;

    PostDto {
        id: post.id,
        seller_id: post.seller_id,
        post_type: post.post_type,
        title: post.title,
        description: post.description,
        ward_code: post.ward_code,
        province_name_cached: post.province_name_cached,
        district_name_cached: post.district_name_cached,
        ward_name_cached: post.ward_name_cached,
        address_text_cached: post.address_text_cached,
        price: post.price,
        is_negotiable: post.is_negotiable,
        status: post.status,
        rejected_reason: post.rejected_reason,
        submitted_at: post.submitted_at,
        reviewed_at: post.reviewed_at,
        verification_status,
        verification_rejected_reason,
        created_at: post.created_at,
        updated_at: post.updated_at,
        seller: aggregate.seller.map(AccountService::safe_view),
        car_details: aggregate.car_details.map(car_details_dto),
        bike_details: aggregate.bike_details.map(bike_details_dto),
        images: aggregate
            .images
            .map(|images| images.into_iter().map(image_dto).collect()),
    }
}

/// Assembles a batch, one response per aggregate in input order.
pub fn assemble_many(aggregates: Vec<PostAggregate>) -> Vec<PostDto> {
    aggregates.into_iter().map(assemble).collect()
}

fn car_details_dto(details: CarDetailsModel) -> CarDetailsDto {
    CarDetailsDto {
        brand_id: details.brand_id,
        model_id: details.model_id,
        manufacture_year: details.manufacture_year,
        body_style: details.body_style,
        origin: details.origin,
        color: details.color,
        seats: details.seats,
        license_plate: details.license_plate,
        owners_count: details.owners_count,
        odo_km: details.odo_km,
        battery_capacity_kwh: details.battery_capacity_kwh,
        range_km: details.range_km,
        charge_ac_kw: details.charge_ac_kw,
        charge_dc_kw: details.charge_dc_kw,
        battery_health_pct: details.battery_health_pct,
    }
}

fn bike_details_dto(details: BikeDetailsModel) -> BikeDetailsDto {
    BikeDetailsDto {
        brand_id: details.brand_id,
        model_id: details.model_id,
        manufacture_year: details.manufacture_year,
        bike_style: details.bike_style,
        origin: details.origin,
        color: details.color,
        license_plate: details.license_plate,
        owners_count: details.owners_count,
        odo_km: details.odo_km,
        battery_capacity_kwh: details.battery_capacity_kwh,
        range_km: details.range_km,
        motor_power_kw: details.motor_power_kw,
        charge_ac_kw: details.charge_ac_kw,
        battery_health_pct: details.battery_health_pct,
    }
}

fn image_dto(image: PostImageModel) -> PostImageDto {
    PostImageDto {
        id: image.id,
        url: image.url,
        sort_order: image.sort_order,
    }
}
