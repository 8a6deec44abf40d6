//! Lending endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::borrow::{BorrowRecord, BorrowRequest, IdValue, LoanReceipt, ReturnReceipt},
};

use super::{ListResponse, MessageResponse};

/// Borrow a book
#[utoipa::path(
    post,
    path = "/api/borrow/borrow",
    tag = "borrow",
    request_body = BorrowRequest,
    responses(
        (status = 200, description = "Book borrowed", body = MessageResponse<LoanReceipt>),
        (status = 400, description = "Missing ids, inactive member or unavailable book"),
        (status = 404, description = "Member or book not found")
    )
)]
pub async fn borrow_book(
    State(state): State<crate::AppState>,
    Json(request): Json<BorrowRequest>,
) -> AppResult<Json<MessageResponse<LoanReceipt>>> {
    let user_id = request.user_id.as_ref().and_then(IdValue::as_id);
    let book_id = request.book_id.as_ref().and_then(IdValue::as_id);

    let receipt = state.services.lending.borrow(user_id, book_id).await?;
    Ok(Json(MessageResponse::new("Book borrowed successfully", receipt)))
}

/// Return a borrowed book
#[utoipa::path(
    post,
    path = "/api/borrow/return",
    tag = "borrow",
    request_body = BorrowRequest,
    responses(
        (status = 200, description = "Book returned", body = MessageResponse<ReturnReceipt>),
        (status = 400, description = "Missing ids"),
        (status = 404, description = "Book not found or no active borrowing record")
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    Json(request): Json<BorrowRequest>,
) -> AppResult<Json<MessageResponse<ReturnReceipt>>> {
    let user_id = request.user_id.as_ref().and_then(IdValue::as_id);
    let book_id = request.book_id.as_ref().and_then(IdValue::as_id);

    let receipt = state.services.lending.return_book(user_id, book_id).await?;
    Ok(Json(MessageResponse::new("Book returned successfully", receipt)))
}

/// Get the full borrowing history
#[utoipa::path(
    get,
    path = "/api/borrow/history",
    tag = "borrow",
    responses(
        (status = 200, description = "All borrowing records", body = ListResponse<BorrowRecord>)
    )
)]
pub async fn get_history(
    State(state): State<crate::AppState>,
) -> Json<ListResponse<BorrowRecord>> {
    let history = state.services.lending.history().await;
    Json(ListResponse::new(history))
}
