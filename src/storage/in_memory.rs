//! In-memory implementation of ResourceStore for testing and development

use super::{ResourceStore, ensure_supported};
use crate::core::error::ApiError;
use crate::entities::{Operation, Resource};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

#[derive(Debug)]
struct Collection<T> {
    records: BTreeMap<i64, T>,
    next_id: i64,
}

/// In-memory resource store
///
/// Ids are assigned sequentially from 1 and listing returns records in id
/// order. Clones share the same collection. Uses RwLock for thread-safe
/// access.
#[derive(Debug)]
pub struct InMemoryResourceStore<T> {
    inner: Arc<RwLock<Collection<T>>>,
}

impl<T> Clone for InMemoryResourceStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Resource> InMemoryResourceStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Collection {
                records: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    /// Create a store pre-filled with records
    ///
    /// Records that already carry an id keep it; the others get the next
    /// free one. Seeding bypasses `T::OPERATIONS`.
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        let mut records_by_id = BTreeMap::new();
        let mut pending = Vec::new();
        for record in records {
            match record.id() {
                Some(id) => {
                    records_by_id.insert(id, record);
                }
                None => pending.push(record),
            }
        }

        let mut next_id = records_by_id.keys().next_back().map_or(1, |max| max + 1);
        for record in pending {
            let stored = T::from_payload(next_id, &record.to_payload());
            records_by_id.insert(next_id, stored);
            next_id += 1;
        }

        Self {
            inner: Arc::new(RwLock::new(Collection {
                records: records_by_id,
                next_id,
            })),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|c| c.records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Resource> Default for InMemoryResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_error(e: impl std::fmt::Display) -> ApiError {
    ApiError::Unavailable {
        message: format!("Failed to acquire store lock: {}", e),
    }
}

#[async_trait]
impl<T: Resource> ResourceStore<T> for InMemoryResourceStore<T> {
    async fn list(&self) -> Result<Vec<T>, ApiError> {
        ensure_supported::<T>(Operation::List)?;
        let collection = self.inner.read().map_err(lock_error)?;

        Ok(collection.records.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<T, ApiError> {
        ensure_supported::<T>(Operation::Get)?;
        let collection = self.inner.read().map_err(lock_error)?;

        collection
            .records
            .get(&id)
            .cloned()
            .ok_or(ApiError::NotFound {
                resource: T::SINGULAR,
                id,
            })
    }

    async fn create(&self, payload: &T::Payload) -> Result<T, ApiError> {
        ensure_supported::<T>(Operation::Create)?;
        let mut collection = self.inner.write().map_err(lock_error)?;

        let id = collection.next_id;
        collection.next_id += 1;
        let record = T::from_payload(id, payload);
        collection.records.insert(id, record.clone());

        tracing::debug!(resource = T::PATH, id, "record created");
        Ok(record)
    }

    async fn update(&self, id: i64, payload: &T::Payload) -> Result<T, ApiError> {
        ensure_supported::<T>(Operation::Update)?;
        let mut collection = self.inner.write().map_err(lock_error)?;

        let slot = collection.records.get_mut(&id).ok_or(ApiError::NotFound {
            resource: T::SINGULAR,
            id,
        })?;
        *slot = T::from_payload(id, payload);

        tracing::debug!(resource = T::PATH, id, "record updated");
        Ok(slot.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        ensure_supported::<T>(Operation::Delete)?;
        let mut collection = self.inner.write().map_err(lock_error)?;

        collection.records.remove(&id).ok_or(ApiError::NotFound {
            resource: T::SINGULAR,
            id,
        })?;

        tracing::debug!(resource = T::PATH, id, "record deleted");
        Ok(())
    }
}
