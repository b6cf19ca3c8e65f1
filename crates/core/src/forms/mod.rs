mod entity;
mod error;
mod responses;
mod submission;
mod validation;

pub use entity::{Entity, MISSING_FIELDS_MESSAGE, UPLOAD_TOO_LARGE_MESSAGE};
pub use error::ValidationError;
pub use responses::{ListResponse, MessageResponse};
pub use submission::{Record, Submission};
pub use validation::{missing_fields, validate_submission};
