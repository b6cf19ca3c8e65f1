//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

use formdesk_core::forms::Entity;

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Service requests table
CREATE TABLE IF NOT EXISTS service_requests (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT,
    serviceType TEXT NOT NULL,
    message TEXT,
    purchaseDate TEXT NOT NULL
);

-- Job applications table
CREATE TABLE IF NOT EXISTS job_applications (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    firstName TEXT NOT NULL,
    lastName TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL,
    currentLocation TEXT NOT NULL,
    preferredLocation TEXT NOT NULL,
    totalExperience TEXT NOT NULL,
    currentSalary TEXT NOT NULL,
    expectedSalary TEXT NOT NULL,
    noticePeriod TEXT NOT NULL,
    linkedin TEXT NOT NULL,
    resume TEXT NOT NULL,
    jobId TEXT NOT NULL,
    jobDescription TEXT NOT NULL
);

-- Chatbot contact details table
CREATE TABLE IF NOT EXISTS chatbot_details (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL,
    timestamp TEXT NOT NULL
);
"#;

// Service request queries
pub const INSERT_SERVICE_REQUEST: &str = r#"
INSERT INTO service_requests (name, email, phone, serviceType, message, purchaseDate)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
"#;

pub const SELECT_SERVICE_REQUESTS: &str = "SELECT * FROM service_requests";

// Job application queries
pub const INSERT_JOB_APPLICATION: &str = r#"
INSERT INTO job_applications (firstName, lastName, email, phone, currentLocation, preferredLocation,
    totalExperience, currentSalary, expectedSalary, noticePeriod, linkedin, resume, jobId, jobDescription)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
"#;

pub const SELECT_JOB_APPLICATIONS: &str = "SELECT * FROM job_applications";

// Chatbot detail queries
pub const INSERT_CHATBOT_DETAIL: &str = r#"
INSERT INTO chatbot_details (name, email, phone, timestamp)
VALUES (?1, ?2, ?3, ?4)
"#;

pub const SELECT_CHATBOT_DETAILS: &str = "SELECT * FROM chatbot_details";

/// Insert statement for an entity; parameters follow [`Entity::columns`].
pub fn insert_statement(entity: Entity) -> &'static str {
    match entity {
        Entity::ServiceRequest => INSERT_SERVICE_REQUEST,
        Entity::JobApplication => INSERT_JOB_APPLICATION,
        Entity::ChatbotDetail => INSERT_CHATBOT_DETAIL,
    }
}

/// Full-table scan for an entity.
pub fn select_all_statement(entity: Entity) -> &'static str {
    match entity {
        Entity::ServiceRequest => SELECT_SERVICE_REQUESTS,
        Entity::JobApplication => SELECT_JOB_APPLICATIONS,
        Entity::ChatbotDetail => SELECT_CHATBOT_DETAILS,
    }
}
