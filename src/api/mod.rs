//! API handlers for Libris REST endpoints

pub mod books;
pub mod borrow;
pub mod health;
pub mod members;
pub mod openapi;

use serde::Serialize;
use utoipa::ToSchema;

/// List response envelope
#[derive(Serialize, ToSchema)]
pub struct ListResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    pub success: bool,
    /// Number of records in `data`
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> ListResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// Single-record response envelope
#[derive(Serialize, ToSchema)]
pub struct DataResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Mutation response envelope
#[derive(Serialize, ToSchema)]
pub struct MessageResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> MessageResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}
