//! Member (user) endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        borrow::MemberHistory,
        member::{CreateMember, Member, MemberQuery, UpdateMember},
    },
};

use super::{DataResponse, ListResponse, MessageResponse};

/// List members with optional filters
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    params(
        ("name" = Option<String>, Query, description = "Substring match on name"),
        ("membershipType" = Option<String>, Query, description = "Exact membership type, case-insensitive"),
        ("active" = Option<bool>, Query, description = "Filter by activity status")
    ),
    responses(
        (status = 200, description = "List of members", body = ListResponse<Member>)
    )
)]
pub async fn list_members(
    State(state): State<crate::AppState>,
    Query(query): Query<MemberQuery>,
) -> Json<ListResponse<Member>> {
    let members = state.services.members.list_members(&query).await;
    Json(ListResponse::new(members))
}

/// Get member details by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member details", body = DataResponse<Member>),
        (status = 404, description = "Member not found")
    )
)]
pub async fn get_member(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<DataResponse<Member>>> {
    let member = state.services.members.get_member(id).await?;
    Ok(Json(DataResponse::new(member)))
}

/// Get a member's full borrowing history
#[utoipa::path(
    get,
    path = "/api/users/{id}/history",
    tag = "users",
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member with borrowing history", body = DataResponse<MemberHistory>),
        (status = 404, description = "Member not found")
    )
)]
pub async fn get_member_history(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<DataResponse<MemberHistory>>> {
    let history = state.services.members.member_history(id).await?;
    Ok(Json(DataResponse::new(history)))
}

/// Register a new member
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = CreateMember,
    responses(
        (status = 201, description = "Member registered", body = MessageResponse<Member>),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_member(
    State(state): State<crate::AppState>,
    Json(member): Json<CreateMember>,
) -> AppResult<(StatusCode, Json<MessageResponse<Member>>)> {
    member
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = state.services.members.create_member(member).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Member registered successfully", created)),
    ))
}

/// Update a member's profile or subscription
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "users",
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    request_body = UpdateMember,
    responses(
        (status = 200, description = "Member updated", body = MessageResponse<Member>),
        (status = 404, description = "Member not found")
    )
)]
pub async fn update_member(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(changes): Json<UpdateMember>,
) -> AppResult<Json<MessageResponse<Member>>> {
    changes
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = state.services.members.update_member(id, changes).await?;
    Ok(Json(MessageResponse::new("Member updated successfully", updated)))
}
