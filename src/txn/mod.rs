//! Transaction identity, row locking and commit/abort.

pub mod errors;
pub mod ids;
pub mod lock_manager;
pub mod manager;

pub use errors::{TxnError, TxnResult};
pub use ids::TransactionId;
pub use lock_manager::LockManager;
pub use manager::TransactionManager;
