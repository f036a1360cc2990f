//! Room API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    Extension, Json,
};

use super::dto::{RoomPatchRequest, RoomRequest, RoomResponse, RoomSearchParams};
use crate::interfaces::http::common::{
    created, error_response, ok, ApiResponse, ApiResult, ValidatedJson,
};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::modules::hotels::CatalogState;

#[utoipa::path(
    get,
    path = "/api/v1/rooms",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All rooms", body = ApiResponse<Vec<RoomResponse>>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_rooms(
    State(state): State<CatalogState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Json<ApiResponse<Vec<RoomResponse>>>> {
    let rooms = state
        .catalog
        .list_rooms(&user)
        .await
        .map_err(error_response)?;
    Ok(ok(rooms.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/rooms/{id}",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room", body = ApiResponse<RoomResponse>),
        (status = 404, description = "Room not found")
    )
)]
pub async fn get_room(
    State(state): State<CatalogState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ApiResponse<RoomResponse>>> {
    let room = state
        .catalog
        .get_room(&user, id)
        .await
        .map_err(error_response)?;
    Ok(ok(room.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/rooms",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    request_body = RoomRequest,
    responses(
        (status = 201, description = "Room created", body = ApiResponse<RoomResponse>),
        (status = 400, description = "Validation error or unknown hotel"),
        (status = 403, description = "Superuser required")
    )
)]
pub async fn create_room(
    State(state): State<CatalogState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<RoomRequest>,
) -> ApiResult<Response> {
    let room = state
        .catalog
        .create_room(&user, request.into())
        .await
        .map_err(error_response)?;
    Ok(created(
        format!("/api/v1/rooms/{}", room.id),
        RoomResponse::from(room),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/rooms/{id}",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Room ID")),
    request_body = RoomRequest,
    responses(
        (status = 200, description = "Room replaced", body = ApiResponse<RoomResponse>),
        (status = 403, description = "Superuser required"),
        (status = 404, description = "Room not found")
    )
)]
pub async fn update_room(
    State(state): State<CatalogState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<RoomRequest>,
) -> ApiResult<Json<ApiResponse<RoomResponse>>> {
    let room = state
        .catalog
        .update_room(&user, id, request.into())
        .await
        .map_err(error_response)?;
    Ok(ok(room.into()))
}

#[utoipa::path(
    patch,
    path = "/api/v1/rooms/{id}",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Room ID")),
    request_body = RoomPatchRequest,
    responses(
        (status = 200, description = "Room updated", body = ApiResponse<RoomResponse>),
        (status = 403, description = "Superuser required"),
        (status = 404, description = "Room not found")
    )
)]
pub async fn patch_room(
    State(state): State<CatalogState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<RoomPatchRequest>,
) -> ApiResult<Json<ApiResponse<RoomResponse>>> {
    let room = state
        .catalog
        .patch_room(&user, id, request.into())
        .await
        .map_err(error_response)?;
    Ok(ok(room.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/rooms/{id}",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 204, description = "Room deleted"),
        (status = 403, description = "Superuser required"),
        (status = 404, description = "Room not found")
    )
)]
pub async fn delete_room(
    State(state): State<CatalogState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    state
        .catalog
        .delete_room(&user, id)
        .await
        .map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/hotel-rooms",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    params(RoomSearchParams),
    responses(
        (status = 200, description = "Rooms matching every given constraint", body = ApiResponse<Vec<RoomResponse>>),
        (status = 400, description = "Malformed date or capacity")
    )
)]
pub async fn search_rooms(
    State(state): State<CatalogState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(params): Query<RoomSearchParams>,
) -> ApiResult<Json<ApiResponse<Vec<RoomResponse>>>> {
    let filter = params.into_filter().map_err(error_response)?;
    let rooms = state
        .catalog
        .search_rooms(&user, &filter)
        .await
        .map_err(error_response)?;
    Ok(ok(rooms.into_iter().map(Into::into).collect()))
}
