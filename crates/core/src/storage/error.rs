use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Constraint violated on {table}: {detail}")]
    ConstraintViolation { table: &'static str, detail: String },
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("unable to open file".to_string());
        assert_eq!(error.to_string(), "Connection failed: unable to open file");
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("no such table: chatbot_details".to_string());
        assert_eq!(
            error.to_string(),
            "Query failed: no such table: chatbot_details"
        );
    }

    #[test]
    fn test_repository_error_constraint_violation_display() {
        let error = RepositoryError::ConstraintViolation {
            table: "service_requests",
            detail: "NOT NULL constraint failed: service_requests.name".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Constraint violated on service_requests: NOT NULL constraint failed: service_requests.name"
        );
    }

    #[test]
    fn test_repository_error_invalid_data_display() {
        let error = RepositoryError::InvalidData("non-finite real".to_string());
        assert_eq!(error.to_string(), "Invalid data: non-finite real");
    }
}
