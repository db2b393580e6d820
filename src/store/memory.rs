//! In-memory store backend
//!
//! Mirrors the observable behavior of the Mongo backend: documents
//! gain an `_id` on insert and come back as plain JSON values in
//! insertion order. Backs the test suite.

use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::member::Member;

use super::{Filter, MemberStore, StoreError, StoreResult};

/// A `MemberStore` holding documents in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemberStore for MemoryStore {
    async fn find(&self, filter: &Filter) -> StoreResult<Vec<Value>> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Internal("record lock poisoned".to_string()))?;

        Ok(records
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect())
    }

    async fn find_one(&self, filter: &Filter) -> StoreResult<Option<Value>> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Internal("record lock poisoned".to_string()))?;

        Ok(records.iter().find(|record| filter.matches(record)).cloned())
    }

    async fn insert(&self, member: &Member) -> StoreResult<()> {
        let mut record =
            serde_json::to_value(member).map_err(|e| StoreError::Encode(e.to_string()))?;
        if let Some(fields) = record.as_object_mut() {
            fields.insert("_id".to_string(), Value::String(Uuid::new_v4().to_string()));
        }

        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Internal("record lock poisoned".to_string()))?;
        records.push(record);
        Ok(())
    }
}
