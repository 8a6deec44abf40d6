//! Borrow record model and lending request/receipt types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::book::Book;
use super::member::Member;

/// Lifecycle state of a borrow record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BorrowStatus {
    Borrowed,
    Returned,
}

/// One lending event in the history ledger
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRecord {
    pub id: i32,
    pub user_id: i32,
    pub book_id: i32,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
    /// Null until the record is closed
    pub return_date: Option<NaiveDate>,
    pub status: BorrowStatus,
}

impl BorrowRecord {
    pub fn is_open(&self) -> bool {
        self.status == BorrowStatus::Borrowed
    }
}

/// Id field of a borrow/return request body. Clients send either a JSON
/// number or a numeric string here; both are accepted.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum IdValue {
    Number(i64),
    Text(String),
}

impl IdValue {
    /// Parse into a positive record id, `None` when malformed
    pub fn as_id(&self) -> Option<i32> {
        let id = match self {
            IdValue::Number(n) => i32::try_from(*n).ok()?,
            IdValue::Text(s) => s.trim().parse().ok()?,
        };
        (id > 0).then_some(id)
    }
}

/// Borrow or return request body
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRequest {
    #[serde(default)]
    pub user_id: Option<IdValue>,
    #[serde(default)]
    pub book_id: Option<IdValue>,
}

/// Result of a successful borrow
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoanReceipt {
    pub record: BorrowRecord,
    pub book: Book,
    pub user: Member,
}

/// Result of a successful return
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReturnReceipt {
    pub record: BorrowRecord,
    pub book: Book,
}

/// A member together with their full borrowing history
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberHistory {
    pub user: Member,
    pub borrowing_history: Vec<BorrowRecord>,
}
