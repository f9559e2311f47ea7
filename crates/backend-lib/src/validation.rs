// ============================
// catalog-backend/src/validation.rs
// ============================
//! Request field validation.

use std::sync::LazyLock;

use regex::Regex;

use catalog_common::{LoginRequest, ProductRequest, RegisterRequest};

use crate::error::AppError;

// Common validation constants
const MIN_USERNAME_LENGTH: usize = 3;
const MAX_USERNAME_LENGTH: usize = 50;
const MAX_PASSWORD_LENGTH: usize = 128;
const MAX_EMAIL_LENGTH: usize = 254; // RFC 5321 SMTP limit
const MAX_PRODUCT_NAME_LENGTH: usize = 100;
const MAX_DESCRIPTION_LENGTH: usize = 500;
const MAX_CATEGORY_LENGTH: usize = 50;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

/// Validate a registration request.
pub fn validate_register(request: &RegisterRequest, min_password: usize) -> Result<(), AppError> {
    validate_username(&request.username)?;
    validate_password(&request.password, min_password)?;
    validate_email(&request.email)?;
    Ok(())
}

/// Validate a login request.
pub fn validate_login(request: &LoginRequest) -> Result<(), AppError> {
    if request.username.trim().is_empty() {
        return Err(AppError::Validation("username: must not be blank".to_string()));
    }
    if request.password.is_empty() {
        return Err(AppError::Validation("password: must not be blank".to_string()));
    }
    Ok(())
}

/// Validate a product create/update request.
pub fn validate_product(request: &ProductRequest) -> Result<(), AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("name: must not be blank".to_string()));
    }
    if request.name.len() > MAX_PRODUCT_NAME_LENGTH {
        return Err(AppError::Validation(format!(
            "name: must be at most {MAX_PRODUCT_NAME_LENGTH} characters"
        )));
    }
    if let Some(description) = &request.description {
        if description.len() > MAX_DESCRIPTION_LENGTH {
            return Err(AppError::Validation(format!(
                "description: must be at most {MAX_DESCRIPTION_LENGTH} characters"
            )));
        }
    }
    if !(request.price > 0.0) {
        return Err(AppError::Validation(
            "price: must be greater than zero".to_string(),
        ));
    }
    if let Some(category) = &request.category {
        if category.len() > MAX_CATEGORY_LENGTH {
            return Err(AppError::Validation(format!(
                "category: must be at most {MAX_CATEGORY_LENGTH} characters"
            )));
        }
    }
    Ok(())
}

fn validate_username(username: &str) -> Result<(), AppError> {
    if username.trim().is_empty() {
        return Err(AppError::Validation("username: must not be blank".to_string()));
    }
    if username.len() < MIN_USERNAME_LENGTH || username.len() > MAX_USERNAME_LENGTH {
        return Err(AppError::Validation(format!(
            "username: must be between {MIN_USERNAME_LENGTH} and {MAX_USERNAME_LENGTH} characters"
        )));
    }
    Ok(())
}

fn validate_password(password: &str, min_length: usize) -> Result<(), AppError> {
    if password.trim().is_empty() {
        return Err(AppError::Validation("password: must not be blank".to_string()));
    }
    if password.len() < min_length {
        return Err(AppError::Validation(format!(
            "password: must be at least {min_length} characters"
        )));
    }
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(AppError::Validation(format!(
            "password: must be at most {MAX_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), AppError> {
    if email.trim().is_empty() {
        return Err(AppError::Validation("email: must not be blank".to_string()));
    }
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(AppError::Validation(format!(
            "email: must be at most {MAX_EMAIL_LENGTH} characters"
        )));
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(AppError::Validation("email: must be a valid address".to_string()));
    }
    Ok(())
}
