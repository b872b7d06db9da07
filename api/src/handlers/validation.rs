//! Structural request validation
//!
//! Rejections name the request type and field so clients see which part
//! of the body was wrong, e.g.
//! `Key: 'UserRequestBody.Name' Error:Field validation for 'Name' failed on the 'required' tag`.

use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::domain::entities::is_valid_email;
use crate::domain::validation::ValidationErrors;

/// Implemented by every request body
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Decode a JSON body, returning the raw decoder message on failure
pub fn decode<T: DeserializeOwned>(body: &Bytes) -> Result<T, String> {
    serde_json::from_slice(body).map_err(|e| e.to_string())
}

pub struct RequestValidator {
    type_name: &'static str,
    errors: ValidationErrors,
}

impl RequestValidator {
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            errors: ValidationErrors::new(),
        }
    }

    fn fail(&mut self, field: &str, tag: &str) {
        self.errors.push(format!(
            "Key: '{}.{}' Error:Field validation for '{}' failed on the '{}' tag",
            self.type_name, field, field, tag
        ));
    }

    pub fn required(mut self, field: &str, value: &str) -> Self {
        if value.is_empty() {
            self.fail(field, "required");
        }
        self
    }

    /// `required` then `email`; only the first failing rule is reported
    pub fn required_email(mut self, field: &str, value: &str) -> Self {
        if value.is_empty() {
            self.fail(field, "required");
        } else if !is_valid_email(value) {
            self.fail(field, "email");
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        self.errors.into_result(|| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn required_failure_names_type_field_and_tag() {
        let err = RequestValidator::new("UserRequestBody")
            .required("Name", "")
            .finish()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Key: 'UserRequestBody.Name' Error:Field validation for 'Name' failed on the 'required' tag"
        );
    }

    #[test]
    fn each_violation_gets_its_own_line() {
        let err = RequestValidator::new("UserRequestBody")
            .required("Name", "")
            .required_email("Email", "nope")
            .finish()
            .unwrap_err();

        let lines: Vec<&str> = err.messages().iter().map(String::as_str).collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("failed on the 'email' tag"));
    }

    #[test]
    fn empty_email_only_fails_required() {
        let err = RequestValidator::new("LoginRequestBody")
            .required_email("Email", "")
            .finish()
            .unwrap_err();

        assert_eq!(err.messages().len(), 1);
        assert!(err.messages()[0].ends_with("'required' tag"));
    }

    #[test]
    fn passing_fields_finish_ok() {
        assert!(RequestValidator::new("UserRequestBody")
            .required("Name", "natori")
            .required_email("Email", "test@example.com")
            .finish()
            .is_ok());
    }

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[allow(dead_code)]
        name: String,
    }

    #[test]
    fn decode_reports_raw_message() {
        let err = decode::<Probe>(&Bytes::from_static(b"{\"name\": 1}")).unwrap_err();

        assert!(err.contains("invalid type"));
    }
}
