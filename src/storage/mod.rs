pub mod buffer;
pub mod errors;
pub mod heap;
pub mod page;
pub mod service;

pub use buffer::BufferPool;
pub use errors::{StorageError, StorageResult};
pub use service::StorageService;
