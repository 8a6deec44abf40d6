//! Root index, health check and fallback endpoints

use axum::{
    http::{StatusCode, Uri},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
    /// Server time, RFC 3339
    pub timestamp: String,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// API index listing the available endpoints
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "API index")
    )
)]
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "Library Lending API",
        "endpoints": {
            "books": {
                "GET /api/books": "Get all books",
                "GET /api/books/:id": "Get specific book details",
                "POST /api/books": "Add new book",
                "PUT /api/books/:id": "Update book",
                "DELETE /api/books/:id": "Delete book"
            },
            "users": {
                "GET /api/users": "Get all members",
                "GET /api/users/:id": "Get specific member details",
                "GET /api/users/:id/history": "Get member borrowing history",
                "POST /api/users": "Register new member",
                "PUT /api/users/:id": "Update member profile or subscription"
            },
            "borrow": {
                "POST /api/borrow/borrow": "Borrow a book",
                "POST /api/borrow/return": "Return a book",
                "GET /api/borrow/history": "Get all borrowing history"
            }
        }
    }))
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": "Route not found",
            "requested_url": uri.to_string(),
            "available_routes": [
                "GET /",
                "GET /health",
                "GET /api/books",
                "GET /api/books/:id",
                "GET /api/users",
                "GET /api/users/:id",
                "GET /api/users/:id/history",
                "GET /api/borrow/history"
            ]
        })),
    )
}
