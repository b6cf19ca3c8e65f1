use thiserror::Error;

/// Errors raised while validating a submission.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Malformed submission: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_display() {
        let error = ValidationError::MissingFields(vec!["serviceType", "purchaseDate"]);
        assert_eq!(
            error.to_string(),
            "Missing required fields: serviceType, purchaseDate"
        );
    }

    #[test]
    fn test_malformed_display() {
        let error = ValidationError::Malformed("expected an object".to_string());
        assert_eq!(error.to_string(), "Malformed submission: expected an object");
    }
}
