//! Repository layer: typed views over the collection store

pub mod books;
pub mod ledger;
pub mod members;

use crate::store::JsonStore;

pub use books::BookCatalog;
pub use ledger::BorrowLedger;
pub use members::MemberDirectory;

/// Main repository struct holding all collection views
#[derive(Clone)]
pub struct Repository {
    pub books: BookCatalog,
    pub members: MemberDirectory,
    pub ledger: BorrowLedger,
}

impl Repository {
    /// Create a new repository backed by the given store
    pub fn new(store: &JsonStore) -> Self {
        Self {
            books: BookCatalog::new(store),
            members: MemberDirectory::new(store),
            ledger: BorrowLedger::new(store),
        }
    }
}
