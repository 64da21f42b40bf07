use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        post::{
            CreatePostDto, PostDto, PostListQuery, RejectPostDto, ResolveVerificationDto,
            UpdatePostDto,
        },
    },
    server::{error::Error, model::app::AppState, service::post::PostService},
};

pub static POST_TAG: &str = "post";

/// Create a listing
///
/// Creates a DRAFT listing owned by the seller, with the detail block
/// matching its type and the ordered image URLs.
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = POST_TAG,
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Listing created as a draft", body = PostDto),
        (status = 400, description = "Invalid listing payload", body = ValidationErrorDto),
        (status = 404, description = "Seller account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    Json(dto): Json<CreatePostDto>,
) -> Result<impl IntoResponse, Error> {
    let post_service = PostService::new(&state.db);

    let post = post_service.create_post(dto).await?;

    Ok((StatusCode::CREATED, Json(post)))
}

/// List listings
///
/// Returns assembled listings newest first, filtered by any combination of
/// status, type, and seller.
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = POST_TAG,
    params(PostListQuery),
    responses(
        (status = 200, description = "Success when listing posts", body = Vec<PostDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<PostListQuery>,
) -> Result<impl IntoResponse, Error> {
    let post_service = PostService::new(&state.db);

    let posts = post_service.list_posts(&query).await?;

    Ok((StatusCode::OK, Json(posts)))
}

/// Get a listing by ID
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Success when retrieving the listing", body = PostDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let post_service = PostService::new(&state.db);

    let post = post_service.get_post(post_id).await?;

    Ok((StatusCode::OK, Json(post)))
}

/// Edit a listing
///
/// Applies a partial edit to a DRAFT or REJECTED listing; editing a REJECTED
/// listing returns it to DRAFT for another review cycle.
#[utoipa::path(
    patch,
    path = "/api/posts/{id}",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Listing updated", body = PostDto),
        (status = 400, description = "Invalid edit payload", body = ValidationErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 409, description = "Listing status does not permit edits", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_post(
    State(state): State<AppState>,
    Path(post_id): Path<i32>,
    Json(dto): Json<UpdatePostDto>,
) -> Result<impl IntoResponse, Error> {
    let post_service = PostService::new(&state.db);

    let post = post_service.update_post(post_id, dto).await?;

    Ok((StatusCode::OK, Json(post)))
}

/// Delete a listing
///
/// Removes the listing together with its detail block, images, and
/// verification record.
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    responses(
        (status = 204, description = "Listing deleted"),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let post_service = PostService::new(&state.db);

    post_service.delete_post(post_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Submit a listing for review
#[utoipa::path(
    post,
    path = "/api/posts/{id}/submit",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Listing submitted for review", body = PostDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 409, description = "Listing is not a draft", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_post(
    State(state): State<AppState>,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let post_service = PostService::new(&state.db);

    let post = post_service.submit_post(post_id).await?;

    Ok((StatusCode::OK, Json(post)))
}

/// Approve a listing under review
#[utoipa::path(
    post,
    path = "/api/posts/{id}/approve",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Listing published", body = PostDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 409, description = "Listing is not under review", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_post(
    State(state): State<AppState>,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let post_service = PostService::new(&state.db);

    let post = post_service.approve_post(post_id).await?;

    Ok((StatusCode::OK, Json(post)))
}

/// Reject a listing under review
///
/// The reason is stored on the listing for the seller to act on.
#[utoipa::path(
    post,
    path = "/api/posts/{id}/reject",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    request_body = RejectPostDto,
    responses(
        (status = 200, description = "Listing rejected", body = PostDto),
        (status = 400, description = "Missing rejection reason", body = ValidationErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 409, description = "Listing is not under review", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_post(
    State(state): State<AppState>,
    Path(post_id): Path<i32>,
    Json(dto): Json<RejectPostDto>,
) -> Result<impl IntoResponse, Error> {
    let post_service = PostService::new(&state.db);

    let post = post_service.reject_post(post_id, dto.reason).await?;

    Ok((StatusCode::OK, Json(post)))
}

/// Mark a published listing as sold
#[utoipa::path(
    post,
    path = "/api/posts/{id}/mark-sold",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Listing marked sold", body = PostDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 409, description = "Listing is not published", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_post_sold(
    State(state): State<AppState>,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let post_service = PostService::new(&state.db);

    let post = post_service.mark_post_sold(post_id).await?;

    Ok((StatusCode::OK, Json(post)))
}

/// Request vehicle verification for a listing
///
/// Opens a pending verification request; a previously rejected request is
/// reopened with its reason cleared.
#[utoipa::path(
    post,
    path = "/api/posts/{id}/verification",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Verification requested", body = PostDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 409, description = "Listing status does not allow verification, or a request already stands", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_verification(
    State(state): State<AppState>,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let post_service = PostService::new(&state.db);

    let post = post_service.request_verification(post_id).await?;

    Ok((StatusCode::OK, Json(post)))
}

/// Resolve a pending verification request
///
/// Approval marks the vehicle VERIFIED; a rejection must carry a reason.
#[utoipa::path(
    post,
    path = "/api/posts/{id}/verification/resolve",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    request_body = ResolveVerificationDto,
    responses(
        (status = 200, description = "Verification request resolved", body = PostDto),
        (status = 400, description = "Missing rejection reason", body = ValidationErrorDto),
        (status = 404, description = "Listing or verification request not found", body = ErrorDto),
        (status = 409, description = "Request already resolved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resolve_verification(
    State(state): State<AppState>,
    Path(post_id): Path<i32>,
    Json(dto): Json<ResolveVerificationDto>,
) -> Result<impl IntoResponse, Error> {
    let post_service = PostService::new(&state.db);

    let post = post_service.resolve_verification(post_id, dto).await?;

    Ok((StatusCode::OK, Json(post)))
}
