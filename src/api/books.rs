//! Book catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookQuery, CreateBook, UpdateBook},
};

use super::{DataResponse, ListResponse, MessageResponse};

/// List books with optional filters
#[utoipa::path(
    get,
    path = "/api/books",
    tag = "books",
    params(
        ("search" = Option<String>, Query, description = "Substring match on title or author"),
        ("genre" = Option<String>, Query, description = "Exact genre match, case-insensitive"),
        ("available" = Option<bool>, Query, description = "Filter by availability")
    ),
    responses(
        (status = 200, description = "List of books", body = ListResponse<Book>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> Json<ListResponse<Book>> {
    let books = state.services.catalog.list_books(&query).await;
    Json(ListResponse::new(books))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = DataResponse<Book>),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<DataResponse<Book>>> {
    let book = state.services.catalog.get_book(id).await?;
    Ok(Json(DataResponse::new(book)))
}

/// Add a new book to the catalog
#[utoipa::path(
    post,
    path = "/api/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = MessageResponse<Book>),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(book): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<MessageResponse<Book>>)> {
    book.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = state.services.catalog.create_book(book).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Book added successfully", created)),
    ))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/api/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse<Book>),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(changes): Json<UpdateBook>,
) -> AppResult<Json<MessageResponse<Book>>> {
    changes
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = state.services.catalog.update_book(id, changes).await?;
    Ok(Json(MessageResponse::new("Book updated successfully", updated)))
}

/// Delete a book from the catalog
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse<Book>),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse<Book>>> {
    let removed = state.services.catalog.delete_book(id).await?;
    Ok(Json(MessageResponse::new("Book deleted successfully", removed)))
}
