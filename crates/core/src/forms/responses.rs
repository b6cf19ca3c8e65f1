//! JSON response payloads shared by every form endpoint.

use serde::{Deserialize, Serialize};

use crate::storage::Row;

/// `{success, message}` body returned by submissions and by every failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// `{success: true, data}` body returned by the list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse {
    pub success: bool,
    pub data: Vec<Row>,
}

impl ListResponse {
    pub fn new(data: Vec<Row>) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_message_response_shape() {
        let value = serde_json::to_value(MessageResponse::failure("nope")).unwrap();
        assert_eq!(value, json!({ "success": false, "message": "nope" }));
    }

    #[test]
    fn test_list_response_shape() {
        let mut row = Row::new();
        row.insert("id".to_string(), json!(1));

        let value = serde_json::to_value(ListResponse::new(vec![row])).unwrap();

        assert_eq!(value, json!({ "success": true, "data": [{ "id": 1 }] }));
    }
}
