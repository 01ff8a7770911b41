use super::models::CreateCategoryRequest;
use crate::common::{ValidationResult, Validator};

impl Validator<CreateCategoryRequest> for CreateCategoryRequest {
    fn validate(&self, data: &CreateCategoryRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.name.trim().is_empty() {
            result.add_error("name", "Category name is required");
        }

        if data.name.len() > 255 {
            result.add_error("name", "Category name must not exceed 255 characters");
        }

        result
    }
}
