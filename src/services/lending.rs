//! Lending transaction engine
//!
//! Orchestrates the book catalog, member directory and borrow ledger so that
//! borrowing and returning mutate availability and history together. The
//! invariant maintained here: a book is unavailable exactly while one open
//! record in the ledger references it, and this service is the only writer
//! allowed to break and restore that pairing.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};
use tokio::sync::Mutex;

use crate::{
    config::LendingConfig,
    error::{AppError, AppResult},
    models::borrow::{BorrowRecord, LoanReceipt, ReturnReceipt},
    repository::Repository,
};

/// Due date for a loan starting on the given day. Whole calendar days, no
/// business-day logic.
pub fn due_date(borrow_date: NaiveDate, period_days: i64) -> NaiveDate {
    borrow_date + Duration::days(period_days)
}

#[derive(Clone)]
pub struct LendingService {
    repository: Repository,
    loan_period_days: i64,
    /// Serializes whole borrow/return transactions. The per-collection locks
    /// protect individual file writes; this one protects the check-then-act
    /// span across both collections.
    tx: Arc<Mutex<()>>,
}

impl LendingService {
    pub fn new(repository: Repository, settings: &LendingConfig) -> Self {
        Self {
            repository,
            loan_period_days: settings.loan_period_days,
            tx: Arc::new(Mutex::new(())),
        }
    }

    /// Borrow a book for a member.
    ///
    /// Preconditions are checked in order and fail before any mutation: ids
    /// present, member exists, member active, book exists, book available.
    /// On success the book is flipped unavailable and an open record is
    /// appended to the ledger.
    pub async fn borrow(
        &self,
        user_id: Option<i32>,
        book_id: Option<i32>,
    ) -> AppResult<LoanReceipt> {
        let (user_id, book_id) = required_ids(user_id, book_id)?;

        let _tx = self.tx.lock().await;

        let user = self
            .repository
            .members
            .find_by_id(user_id)
            .await
            .ok_or(AppError::MemberNotFound(user_id))?;
        if !user.is_active() {
            return Err(AppError::MemberInactive(user_id));
        }

        let book = self
            .repository
            .books
            .find_by_id(book_id)
            .await
            .ok_or(AppError::BookNotFound(book_id))?;
        if !book.available {
            return Err(AppError::BookUnavailable(book_id));
        }

        let book = self.repository.books.set_availability(book_id, false).await?;

        let borrow_date = Utc::now().date_naive();
        let record = self
            .repository
            .ledger
            .create(
                user_id,
                book_id,
                borrow_date,
                due_date(borrow_date, self.loan_period_days),
            )
            .await
            .map_err(|e| flag_partial_failure("borrow", book_id, e))?;

        tracing::info!(user_id, book_id, record_id = record.id, "book borrowed");

        Ok(LoanReceipt { record, book, user })
    }

    /// Return a borrowed book.
    ///
    /// Requires an open ledger record matching both ids; the first match in
    /// ledger order is closed. On success the book is flipped available and
    /// the record gets its return date, borrow and due dates untouched.
    pub async fn return_book(
        &self,
        user_id: Option<i32>,
        book_id: Option<i32>,
    ) -> AppResult<ReturnReceipt> {
        let (user_id, book_id) = required_ids(user_id, book_id)?;

        let _tx = self.tx.lock().await;

        self.repository
            .books
            .find_by_id(book_id)
            .await
            .ok_or(AppError::BookNotFound(book_id))?;

        let open = self
            .repository
            .ledger
            .find_open(user_id, book_id)
            .await
            .ok_or(AppError::NoOpenBorrow { user_id, book_id })?;

        let book = self.repository.books.set_availability(book_id, true).await?;

        let record = self
            .repository
            .ledger
            .close(open.id, Utc::now().date_naive())
            .await
            .map_err(|e| flag_partial_failure("return", book_id, e))?;

        tracing::info!(user_id, book_id, record_id = record.id, "book returned");

        Ok(ReturnReceipt { record, book })
    }

    /// Full lending history, open and closed records alike
    pub async fn history(&self) -> Vec<BorrowRecord> {
        self.repository.ledger.list_all().await
    }
}

fn required_ids(user_id: Option<i32>, book_id: Option<i32>) -> AppResult<(i32, i32)> {
    match (user_id, book_id) {
        (Some(user_id), Some(book_id)) => Ok((user_id, book_id)),
        _ => Err(AppError::Validation(
            "User ID and Book ID are required".to_string(),
        )),
    }
}

/// The catalog write has already landed when the ledger write fails; there is
/// no rollback, so the two collections disagree about this book until the
/// next successful lending operation on it. Make that loud.
fn flag_partial_failure(op: &str, book_id: i32, err: AppError) -> AppError {
    tracing::error!(
        op,
        book_id,
        error = %err,
        "ledger write failed after the catalog was updated; books and history are inconsistent for this book"
    );
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn due_date_is_thirty_days_out() {
        assert_eq!(due_date(date(2024, 1, 15), 30), date(2024, 2, 14));
    }

    #[test]
    fn due_date_crosses_month_and_year_boundaries() {
        assert_eq!(due_date(date(2024, 12, 15), 30), date(2025, 1, 14));
        // 2024 is a leap year
        assert_eq!(due_date(date(2024, 2, 10), 30), date(2024, 3, 11));
        assert_eq!(due_date(date(2023, 2, 10), 30), date(2023, 3, 12));
    }

    #[test]
    fn missing_ids_are_rejected() {
        assert!(required_ids(None, Some(1)).is_err());
        assert!(required_ids(Some(1), None).is_err());
        assert!(required_ids(None, None).is_err());
        assert_eq!(required_ids(Some(2), Some(3)).unwrap(), (2, 3));
    }
}
