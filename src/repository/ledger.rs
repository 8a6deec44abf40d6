//! Borrow ledger repository over the history collection

use chrono::NaiveDate;

use crate::{
    error::{AppError, AppResult},
    models::borrow::{BorrowRecord, BorrowStatus},
    store::{next_id, Collection, Identified, JsonStore},
};

impl Identified for BorrowRecord {
    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Clone)]
pub struct BorrowLedger {
    collection: Collection<BorrowRecord>,
}

impl BorrowLedger {
    pub fn new(store: &JsonStore) -> Self {
        Self {
            collection: store.collection("history"),
        }
    }

    pub async fn list_all(&self) -> Vec<BorrowRecord> {
        self.collection.load().await
    }

    /// All records for one member, open and closed
    pub async fn for_member(&self, user_id: i32) -> Vec<BorrowRecord> {
        self.collection
            .load()
            .await
            .into_iter()
            .filter(|r| r.user_id == user_id)
            .collect()
    }

    /// First open record matching both ids, in ledger order. At most one
    /// should exist; a corrupted ledger with more still yields the first.
    pub async fn find_open(&self, user_id: i32, book_id: i32) -> Option<BorrowRecord> {
        self.collection
            .load()
            .await
            .into_iter()
            .find(|r| r.user_id == user_id && r.book_id == book_id && r.is_open())
    }

    /// Append a new open record, allocating its id from the ledger
    pub async fn create(
        &self,
        user_id: i32,
        book_id: i32,
        borrow_date: NaiveDate,
        due_date: NaiveDate,
    ) -> AppResult<BorrowRecord> {
        let _guard = self.collection.lock().await;
        let mut records = self.collection.load().await;

        let record = BorrowRecord {
            id: next_id(&records),
            user_id,
            book_id,
            borrow_date,
            due_date,
            return_date: None,
            status: BorrowStatus::Borrowed,
        };

        records.push(record.clone());
        self.collection.save(&records).await?;
        Ok(record)
    }

    /// Close a record in place: set the return date and mark it returned.
    /// Borrow and due dates are left untouched.
    pub async fn close(&self, record_id: i32, return_date: NaiveDate) -> AppResult<BorrowRecord> {
        let _guard = self.collection.lock().await;
        let mut records = self.collection.load().await;

        let record = records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or_else(|| AppError::RecordNotFound(format!("borrow record {}", record_id)))?;

        record.return_date = Some(return_date);
        record.status = BorrowStatus::Returned;

        let closed = record.clone();
        self.collection.save(&records).await?;
        Ok(closed)
    }
}
