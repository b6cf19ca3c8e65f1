pub mod chatbot_details;
pub mod error;
mod forms;
pub mod health;
pub mod job_applications;
pub mod service_requests;

pub use error::ApiError;
