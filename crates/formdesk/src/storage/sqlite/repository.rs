//! SQLite repository implementation.
//!
//! Implements the `FormRepository` trait from `formdesk_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use formdesk_core::forms::{Entity, Record};
use formdesk_core::storage::{FormRepository, RepositoryError, Result, Row};

use super::conversions::row_to_json;
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Owns the single connection for the process lifetime. Calls are executed
/// one at a time on the connection's background thread.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens a file-based database, creating the file if it doesn't exist.
    ///
    /// The schema is not created here; call [`FormRepository::ensure_schema`].
    pub async fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        tracing::info!(path, "Connected to the SQLite database");

        Ok(Self { conn })
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Ok(Self { conn })
    }
}

#[async_trait]
impl FormRepository for SqliteRepository {
    async fn ensure_schema(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn insert(&self, record: &Record) -> Result<i64> {
        let entity = record.entity;
        let sql = schema::insert_statement(entity);
        let values = record.values.clone();

        self.conn
            .call(move |conn| {
                conn.execute(sql, rusqlite::params_from_iter(values.iter()))
                    .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, entity.table()))
    }

    async fn select_all(&self, entity: Entity) -> Result<Vec<Row>> {
        let sql = schema::select_all_statement(entity);

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(sql).map_err(wrap_err)?;
                let columns: Vec<String> = stmt
                    .column_names()
                    .into_iter()
                    .map(String::from)
                    .collect();
                let rows = stmt
                    .query_map([], |row| row_to_json(row, &columns))
                    .map_err(wrap_err)?;

                let mut results = Vec::new();
                for row_result in rows {
                    results.push(row_result.map_err(wrap_err)?);
                }
                Ok(results)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, entity.table()))
    }
}

#[cfg(test)]
mod tests {
    use formdesk_core::forms::Submission;
    use serde_json::Value;

    use super::*;

    async fn repository() -> SqliteRepository {
        let repo = SqliteRepository::open_in_memory().await.unwrap();
        repo.ensure_schema().await.unwrap();
        repo
    }

    fn chatbot(name: &str) -> Record {
        Submission::new()
            .with("name", name)
            .with("email", "a@x.com")
            .with("phone", "123")
            .with("timestamp", "2024-01-01T00:00:00Z")
            .into_record(Entity::ChatbotDetail)
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let repo = repository().await;

        repo.ensure_schema().await.unwrap();

        for entity in Entity::ALL {
            assert!(repo.select_all(entity).await.unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = repository().await;

        let first = repo.insert(&chatbot("A")).await.unwrap();
        let second = repo.insert(&chatbot("A")).await.unwrap();

        assert_eq!(first, 1);
        assert!(second > first);
        assert_eq!(repo.select_all(Entity::ChatbotDetail).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_select_all_round_trips_fields() {
        let repo = repository().await;
        let record = chatbot("Ada");

        let id = repo.insert(&record).await.unwrap();
        let rows = repo.select_all(Entity::ChatbotDetail).await.unwrap();

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.get("id"), Some(&Value::from(id)));
        for (column, value) in record.fields() {
            assert_eq!(row.get(column).and_then(Value::as_str), value);
        }
    }

    #[tokio::test]
    async fn test_optional_columns_read_back_as_null() {
        let repo = repository().await;
        let record = Submission::new()
            .with("name", "A")
            .with("email", "a@x.com")
            .with("serviceType", "repair")
            .with("purchaseDate", "2024-02-03")
            .into_record(Entity::ServiceRequest);

        repo.insert(&record).await.unwrap();
        let rows = repo.select_all(Entity::ServiceRequest).await.unwrap();

        assert_eq!(rows[0].get("phone"), Some(&Value::Null));
        assert_eq!(rows[0].get("message"), Some(&Value::Null));
    }

    #[tokio::test]
    async fn test_tables_are_independent() {
        let repo = repository().await;

        repo.insert(&chatbot("A")).await.unwrap();

        assert!(repo.select_all(Entity::ServiceRequest).await.unwrap().is_empty());
        assert!(repo.select_all(Entity::JobApplication).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_not_null_violation_is_reported() {
        let repo = repository().await;
        let record = Submission::new()
            .with("name", "A")
            .into_record(Entity::ChatbotDetail);

        let result = repo.insert(&record).await;

        assert!(matches!(
            result,
            Err(RepositoryError::ConstraintViolation {
                table: "chatbot_details",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_operations_fail_without_schema() {
        let repo = SqliteRepository::open_in_memory().await.unwrap();

        assert!(matches!(
            repo.insert(&chatbot("A")).await,
            Err(RepositoryError::QueryFailed(_))
        ));
        assert!(matches!(
            repo.select_all(Entity::ChatbotDetail).await,
            Err(RepositoryError::QueryFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_file_database_persists_across_connections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("forms.db");
        let path = path.to_str().unwrap();

        {
            let repo = SqliteRepository::open(path).await.unwrap();
            repo.ensure_schema().await.unwrap();
            repo.insert(&chatbot("A")).await.unwrap();
        }

        let repo = SqliteRepository::open(path).await.unwrap();
        repo.ensure_schema().await.unwrap();
        let id = repo.insert(&chatbot("B")).await.unwrap();

        assert_eq!(id, 2);
        assert_eq!(repo.select_all(Entity::ChatbotDetail).await.unwrap().len(), 2);
    }
}
