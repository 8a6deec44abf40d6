//! Book model and related types

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Catalog book entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub genre: String,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub published_year: Option<i32>,
    /// False exactly while one open borrow record references this book.
    /// Only the lending engine writes this flag.
    pub available: bool,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author must not be empty"))]
    pub author: String,
    #[validate(length(min = 1, message = "Genre must not be empty"))]
    pub genre: String,
    pub isbn: Option<String>,
    pub published_year: Option<i32>,
}

/// Update book request. Availability is deliberately absent: that flag
/// belongs to the lending engine.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBook {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Author must not be empty"))]
    pub author: Option<String>,
    #[validate(length(min = 1, message = "Genre must not be empty"))]
    pub genre: Option<String>,
    pub isbn: Option<String>,
    pub published_year: Option<i32>,
}

/// Book query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct BookQuery {
    /// Substring match on title or author, case-insensitive
    pub search: Option<String>,
    /// Exact genre match, case-insensitive
    pub genre: Option<String>,
    /// Availability filter
    pub available: Option<bool>,
}
