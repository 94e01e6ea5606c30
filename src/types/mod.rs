//! Core type contracts for the execution engine.
//!
//! - No business logic
//! - No IO
//! - No dependencies on other modules except `storage::page` ids
//!
//! Changes must be additive only.

pub mod datatype;
pub mod row;
pub mod schema;
pub mod value;

pub use datatype::DataType;
pub use row::Row;
pub use schema::{Column, Schema};
pub use value::Value;
