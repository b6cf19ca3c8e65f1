use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the independently persisted form kinds.
///
/// Each variant carries its table name, column layout, required fields and
/// the user-facing messages for every outcome of a submission or listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entity {
    ServiceRequest,
    JobApplication,
    ChatbotDetail,
}

/// Message returned for every rejected submission, whatever field is missing.
pub const MISSING_FIELDS_MESSAGE: &str = "All required fields must be filled.";

/// Message returned when an upload exceeds the request body limit.
pub const UPLOAD_TOO_LARGE_MESSAGE: &str = "Uploaded file is too large.";

impl Entity {
    pub const ALL: [Entity; 3] = [
        Entity::ServiceRequest,
        Entity::JobApplication,
        Entity::ChatbotDetail,
    ];

    /// Name of the table backing this entity.
    pub fn table(&self) -> &'static str {
        match self {
            Entity::ServiceRequest => "service_requests",
            Entity::JobApplication => "job_applications",
            Entity::ChatbotDetail => "chatbot_details",
        }
    }

    /// Stored columns in insert order, excluding the store-assigned `id`.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Entity::ServiceRequest => &[
                "name",
                "email",
                "phone",
                "serviceType",
                "message",
                "purchaseDate",
            ],
            Entity::JobApplication => &[
                "firstName",
                "lastName",
                "email",
                "phone",
                "currentLocation",
                "preferredLocation",
                "totalExperience",
                "currentSalary",
                "expectedSalary",
                "noticePeriod",
                "linkedin",
                "resume",
                "jobId",
                "jobDescription",
            ],
            Entity::ChatbotDetail => &["name", "email", "phone", "timestamp"],
        }
    }

    /// Textual fields that must be present and non-empty on submission.
    ///
    /// The attachment field, if any, is checked separately (see
    /// [`Entity::attachment_field`]).
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            Entity::ServiceRequest => &["name", "email", "serviceType", "purchaseDate"],
            Entity::JobApplication => &[
                "firstName",
                "lastName",
                "email",
                "phone",
                "currentLocation",
                "preferredLocation",
                "totalExperience",
                "currentSalary",
                "expectedSalary",
                "noticePeriod",
                "linkedin",
                "jobId",
                "jobDescription",
            ],
            Entity::ChatbotDetail => &["name", "email", "phone", "timestamp"],
        }
    }

    /// Column holding the stored path of a required file attachment.
    pub fn attachment_field(&self) -> Option<&'static str> {
        match self {
            Entity::JobApplication => Some("resume"),
            Entity::ServiceRequest | Entity::ChatbotDetail => None,
        }
    }

    pub fn created_message(&self) -> &'static str {
        match self {
            Entity::ServiceRequest => "Service request submitted successfully!",
            Entity::JobApplication => "Job applications submitted successfully!",
            Entity::ChatbotDetail => "Details saved successfully!",
        }
    }

    pub fn save_failed_message(&self) -> &'static str {
        match self {
            Entity::ServiceRequest => "Failed to save the service request.",
            Entity::JobApplication => "Failed to save the job application.",
            Entity::ChatbotDetail => "Failed to save chatbot details.",
        }
    }

    pub fn fetch_failed_message(&self) -> &'static str {
        match self {
            Entity::ServiceRequest => "Failed to fetch service requests.",
            Entity::JobApplication => "Failed to fetch job applications.",
            Entity::ChatbotDetail => "Failed to fetch chatbot details.",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Entity::ServiceRequest => "service request",
            Entity::JobApplication => "job application",
            Entity::ChatbotDetail => "chatbot detail",
        };
        f.write_str(label)
    }
}
