use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::forms::{Entity, Record};

use super::Result;

/// A stored row as a flat column to value mapping, including `id`.
pub type Row = Map<String, Value>;

/// Storage gateway for submitted forms.
#[async_trait]
pub trait FormRepository: Send + Sync {
    /// Creates the tables for every entity if they do not exist yet.
    async fn ensure_schema(&self) -> Result<()>;

    /// Inserts a record and returns the id assigned by the store.
    async fn insert(&self, record: &Record) -> Result<i64>;

    /// Returns every row of the entity's table in natural scan order.
    async fn select_all(&self, entity: Entity) -> Result<Vec<Row>>;
}
