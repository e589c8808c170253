//! Form input validation
//!
//! Each form validates into the request body it submits. Validation failures
//! are reported as [`ClientError::Validation`] before any request is made.

use super::error::ClientError;
use crate::types::{
    CreateTaskRequest, LoginRequest, RegisterRequest, TaskStatus, UpdateTaskRequest,
};

pub const MISSING_FIELDS: &str = "Please fill in all fields";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const MISSING_TITLE: &str = "Task title is required";

/// Login form input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, ClientError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(ClientError::Validation(MISSING_FIELDS.into()));
        }

        Ok(LoginRequest {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

/// Registration form input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password1: String,
    pub password2: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, ClientError> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty()
            || email.is_empty()
            || self.password1.is_empty()
            || self.password2.is_empty()
        {
            return Err(ClientError::Validation(MISSING_FIELDS.into()));
        }
        if self.password1 != self.password2 {
            return Err(ClientError::Validation(PASSWORD_MISMATCH.into()));
        }

        Ok(RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password1: self.password1.clone(),
            password2: self.password2.clone(),
        })
    }
}

/// Task create/edit form input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
}

impl TaskForm {
    fn title(&self) -> Result<String, ClientError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ClientError::Validation(MISSING_TITLE.into()));
        }
        Ok(title.to_string())
    }

    pub fn validate_create(&self) -> Result<CreateTaskRequest, ClientError> {
        Ok(CreateTaskRequest {
            title: self.title()?,
            description: self.description.trim().to_string(),
        })
    }

    pub fn validate_update(&self, status: TaskStatus) -> Result<UpdateTaskRequest, ClientError> {
        Ok(UpdateTaskRequest {
            title: Some(self.title()?),
            description: Some(self.description.trim().to_string()),
            status: Some(status),
        })
    }
}
