//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Constructs an Axum router with the account, listing, settings, and contract
/// endpoints registered. Each endpoint is annotated with OpenAPI specifications
/// via utoipa, which are collected into a unified OpenAPI document. The router
/// includes Swagger UI at `/api/docs` for interactive API exploration.
///
/// # Registered Endpoints
/// - `POST /api/accounts` - Sign up a marketplace account
/// - `GET /api/accounts/{id}` - Get an account
/// - `POST /api/posts` - Create a listing
/// - `GET /api/posts` - List listings with filters
/// - `GET /api/posts/{id}` - Get a listing
/// - `PATCH /api/posts/{id}` - Edit a listing
/// - `DELETE /api/posts/{id}` - Delete a listing
/// - `POST /api/posts/{id}/submit` - Submit a listing for review
/// - `POST /api/posts/{id}/approve` - Approve a listing under review
/// - `POST /api/posts/{id}/reject` - Reject a listing under review
/// - `POST /api/posts/{id}/mark-sold` - Mark a published listing sold
/// - `POST /api/posts/{id}/verification` - Request vehicle verification
/// - `POST /api/posts/{id}/verification/resolve` - Resolve a verification request
/// - `GET /api/settings/fee-tiers` - List fee tiers
/// - `POST /api/settings/fee-tiers` - Create a fee tier
/// - `PATCH /api/settings/fee-tiers/{id}` - Update a fee tier
/// - `DELETE /api/settings/fee-tiers/{id}` - Delete a fee tier
/// - `GET /api/settings/refund-policy` - Get the refund policy
/// - `PUT /api/settings/refund-policy` - Save the refund policy
/// - `POST /api/contracts` - Create a deposit contract
/// - `GET /api/contracts/{id}` - Get a contract
/// - `POST /api/contracts/{id}/confirm` - Confirm a contract
///
/// # OpenAPI Documentation
/// The OpenAPI specification is available at `/api/docs/openapi.json`, and
/// interactive documentation is served at `/api/docs`.
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be merged
/// into the main application router.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db };
/// let router = routes().with_state(app_state);
/// // Router is now ready to serve HTTP requests
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Voltmarket", description = "Voltmarket API"), tags(
        (name = controller::account::ACCOUNT_TAG, description = "Marketplace account API routes"),
        (name = controller::post::POST_TAG, description = "Listing and verification API routes"),
        (name = controller::settings::SETTINGS_TAG, description = "Fee tier and refund policy API routes"),
        (name = controller::contract::CONTRACT_TAG, description = "Deposit contract API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::account::create_account))
        .routes(routes!(controller::account::get_account))
        .routes(routes!(controller::post::create_post))
        .routes(routes!(controller::post::list_posts))
        .routes(routes!(controller::post::get_post))
        .routes(routes!(controller::post::update_post))
        .routes(routes!(controller::post::delete_post))
        .routes(routes!(controller::post::submit_post))
        .routes(routes!(controller::post::approve_post))
        .routes(routes!(controller::post::reject_post))
        .routes(routes!(controller::post::mark_post_sold))
        .routes(routes!(controller::post::request_verification))
        .routes(routes!(controller::post::resolve_verification))
        .routes(routes!(controller::settings::list_fee_tiers))
        .routes(routes!(controller::settings::create_fee_tier))
        .routes(routes!(controller::settings::update_fee_tier))
        .routes(routes!(controller::settings::delete_fee_tier))
        .routes(routes!(controller::settings::get_refund_policy))
        .routes(routes!(controller::settings::save_refund_policy))
        .routes(routes!(controller::contract::create_contract))
        .routes(routes!(controller::contract::get_contract))
        .routes(routes!(controller::contract::confirm_contract))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
