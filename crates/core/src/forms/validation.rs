//! Required-field validation.
//!
//! Pure functions: the caller learns only pass or fail through the HTTP
//! surface, while the error value keeps the missing names for logging.

use super::{Entity, Submission, ValidationError};

/// Names from `required` that are absent or falsy in the submission.
pub fn missing_fields(submission: &Submission, required: &[&'static str]) -> Vec<&'static str> {
    required
        .iter()
        .copied()
        .filter(|name| !submission.is_filled(name))
        .collect()
}

/// Validates a submission against an entity's requirements.
///
/// For entities with an attachment field, `has_attachment` tells whether a
/// file was received; its absence counts as a missing field.
pub fn validate_submission(
    entity: Entity,
    submission: &Submission,
    has_attachment: bool,
) -> Result<(), ValidationError> {
    let mut missing = missing_fields(submission, entity.required_fields());

    if let Some(field) = entity.attachment_field() {
        if !has_attachment {
            missing.push(field);
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chatbot() -> Submission {
        Submission::new()
            .with("name", "A")
            .with("email", "a@x.com")
            .with("phone", "123")
            .with("timestamp", "2024-01-01T00:00:00Z")
    }

    fn job_application() -> Submission {
        Entity::JobApplication
            .required_fields()
            .iter()
            .fold(Submission::new(), |s, field| s.with(*field, "value"))
    }

    #[test]
    fn test_complete_submission_passes() {
        assert_eq!(validate_submission(Entity::ChatbotDetail, &chatbot(), false), Ok(()));
    }

    #[test]
    fn test_missing_fields_lists_blank_and_absent_names() {
        let s = Submission::new().with("name", "A").with("email", "");

        assert_eq!(missing_fields(&s, &["name", "email", "phone"]), vec!["email", "phone"]);
    }

    #[test]
    fn test_each_missing_field_fails() {
        for field in Entity::ChatbotDetail.required_fields() {
            let mut s = chatbot();
            s.insert(*field, "");

            let result = validate_submission(Entity::ChatbotDetail, &s, false);

            assert_eq!(result, Err(ValidationError::MissingFields(vec![*field])));
        }
    }

    #[test]
    fn test_reports_all_missing_fields_in_declared_order() {
        let s = Submission::new().with("name", "A").with("email", "a@x.com");

        let result = validate_submission(Entity::ServiceRequest, &s, false);

        assert_eq!(
            result,
            Err(ValidationError::MissingFields(vec!["serviceType", "purchaseDate"]))
        );
    }

    #[test]
    fn test_optional_fields_are_not_required() {
        let s = Submission::new()
            .with("name", "A")
            .with("email", "a@x.com")
            .with("serviceType", "install")
            .with("purchaseDate", "2024-01-01");

        assert_eq!(validate_submission(Entity::ServiceRequest, &s, false), Ok(()));
    }

    #[test]
    fn test_missing_attachment_fails_job_application() {
        let result = validate_submission(Entity::JobApplication, &job_application(), false);

        assert_eq!(result, Err(ValidationError::MissingFields(vec!["resume"])));
    }

    #[test]
    fn test_job_application_with_attachment_passes() {
        assert_eq!(
            validate_submission(Entity::JobApplication, &job_application(), true),
            Ok(())
        );
    }

    #[test]
    fn test_attachment_flag_ignored_without_attachment_field() {
        assert_eq!(validate_submission(Entity::ChatbotDetail, &chatbot(), true), Ok(()));
    }
}
