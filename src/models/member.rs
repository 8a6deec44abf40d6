//! Member model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Library member
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub membership_type: String,
    /// Assigned at creation, immutable thereafter
    pub join_date: NaiveDate,
    /// Gate for borrowing
    pub active: bool,
}

impl Member {
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Create member request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMember {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub phone: Option<String>,
    /// Defaults to "standard"
    pub membership_type: Option<String>,
}

/// Update member request (profile and subscription). The join date is not
/// updatable.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMember {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub membership_type: Option<String>,
    pub active: Option<bool>,
}

/// Member query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberQuery {
    /// Substring match on name, case-insensitive
    pub name: Option<String>,
    /// Exact membership type match, case-insensitive
    pub membership_type: Option<String>,
    /// Activity filter
    pub active: Option<bool>,
}
