//! Core types shared by the table engine, the backends and the server

pub mod error;
pub mod field;
pub mod query;
pub mod record;
pub mod validation;

pub use error::{ApiError, ConfigError, ConsoleError, ConsoleResult, QueryError, ValidationError};
pub use field::{FieldFormat, FieldValue};
pub use query::{PaginationMeta, SortDirection, SortSpec};
pub use record::{FieldPath, Record, Row};
