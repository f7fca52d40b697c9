//! Resource stores
//!
//! Screens talk to a [`ResourceStore`] and never to HTTP directly. The REST
//! client is the production store; [`InMemoryResourceStore`] backs tests and
//! offline work.

pub mod in_memory;

pub use in_memory::InMemoryResourceStore;

use crate::core::error::ApiError;
use crate::entities::{Operation, Resource};
use async_trait::async_trait;

/// CRUD access to one resource collection
///
/// Every method fails with [`ApiError::Unsupported`] when the operation is
/// not in `T::OPERATIONS`.
#[async_trait]
pub trait ResourceStore<T: Resource>: Send + Sync {
    /// List every record of the collection
    async fn list(&self) -> Result<Vec<T>, ApiError>;

    /// Get one record by id
    async fn get(&self, id: i64) -> Result<T, ApiError>;

    /// Create a record and return it as stored
    async fn create(&self, payload: &T::Payload) -> Result<T, ApiError>;

    /// Replace the fields of an existing record
    async fn update(&self, id: i64, payload: &T::Payload) -> Result<T, ApiError>;

    /// Delete a record
    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}

/// Reject an operation the backend does not expose for `T`
pub fn ensure_supported<T: Resource>(operation: Operation) -> Result<(), ApiError> {
    if T::supports(operation) {
        Ok(())
    } else {
        Err(ApiError::Unsupported {
            resource: T::PATH,
            operation: operation.as_str(),
        })
    }
}
