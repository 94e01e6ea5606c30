pub mod config;
pub mod debugger;

pub mod exec;
pub mod storage;
pub mod txn;
pub mod types;
