use super::models::CreateUserRequest;
use crate::common::{ValidationResult, Validator};

impl Validator<CreateUserRequest> for CreateUserRequest {
    fn validate(&self, data: &CreateUserRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        let has_email = data.email.as_deref().is_some_and(|e| !e.trim().is_empty());
        let has_phone = data.phone.as_deref().is_some_and(|p| !p.trim().is_empty());

        if !has_email && !has_phone {
            result.add_error("email", "enter email or phone number");
        }

        // An email account must be able to log in, so it needs a password
        if has_email && data.password.as_deref().unwrap_or("").is_empty() {
            result.add_error("password", "password cannot be null");
        }

        if let Some(email) = &data.email {
            if !email.is_empty() && !email.contains('@') {
                result.add_error("email", "email must be a valid address");
            }
        }

        result
    }
}
