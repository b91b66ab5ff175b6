//! Document store: schemaless JSON documents grouped into collections.
//!
//! DESIGN
//! ======
//! The booking pages append documents to named collections and read them
//! back by identifier; nothing queries inside a document. `DocumentStore`
//! captures exactly that surface so handlers can run against Postgres in
//! production and an in-process map in tests or when no database is
//! configured.
//!
//! Identifiers are server-generated UUID v4 values. The store never inspects
//! or rewrites document bodies beyond requiring a JSON object.

use std::collections::HashMap;

use serde_json::Value;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("document must be a JSON object")]
    NotAnObject,
}

/// Append-and-fetch access to document collections.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Store `data` in `collection` and return the generated identifier.
    async fn add_doc(&self, collection: &str, data: Value) -> Result<Uuid, StoreError>;

    /// Fetch one document, `None` if `id` is not in `collection`.
    async fn get_doc(&self, collection: &str, id: Uuid) -> Result<Option<Value>, StoreError>;

    /// Short backend label for startup logs.
    fn backend(&self) -> &'static str;
}

// =============================================================================
// POSTGRES
// =============================================================================

/// Documents stored as `jsonb` rows of the `documents` table.
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl DocumentStore for PgDocumentStore {
    async fn add_doc(&self, collection: &str, data: Value) -> Result<Uuid, StoreError> {
        if !data.is_object() {
            return Err(StoreError::NotAnObject);
        }
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO documents (id, collection, data) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(collection)
            .bind(data)
            .execute(&self.pool)
            .await?;
        Ok(id)
    }

    async fn get_doc(&self, collection: &str, id: Uuid) -> Result<Option<Value>, StoreError> {
        let row = sqlx::query_as::<_, (Value,)>("SELECT data FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|(data,)| data))
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

// =============================================================================
// IN-MEMORY
// =============================================================================

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, HashMap<Uuid, Value>>>,
}

impl MemoryDocumentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in `collection`.
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, HashMap::len)
    }
}

#[async_trait::async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn add_doc(&self, collection: &str, data: Value) -> Result<Uuid, StoreError> {
        if !data.is_object() {
            return Err(StoreError::NotAnObject);
        }
        let id = Uuid::new_v4();
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_owned())
            .or_default()
            .insert(id, data);
        Ok(id)
    }

    async fn get_doc(&self, collection: &str, id: Uuid) -> Result<Option<Value>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).and_then(|docs| docs.get(&id)).cloned())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
#[path = "documents_test.rs"]
mod tests;
