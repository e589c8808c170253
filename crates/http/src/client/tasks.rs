//! Task API client methods

use super::{AuthGateway, decode_json, error::ClientError, forms::TaskForm, gateway::ApiRequest};
use crate::config::ApiConfig;
use crate::types::{Task, TaskEnvelope, TaskListResponse, TaskStatus, UpdateTaskRequest};
use reqwest::StatusCode;

/// Task endpoints, all authenticated through the gateway
#[derive(Clone)]
pub struct TaskApi {
    gateway: AuthGateway,
}

impl TaskApi {
    pub fn new(gateway: AuthGateway) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &AuthGateway {
        &self.gateway
    }

    /// List the user's tasks
    pub async fn list(&self) -> Result<Vec<Task>, ClientError> {
        let response: TaskListResponse = self
            .gateway
            .execute(&ApiRequest::get(ApiConfig::TASKS_PATH), "Failed to load tasks")
            .await?;
        Ok(response.tasks)
    }

    /// Create a task from form input
    ///
    /// Any 2xx means the task exists. The created task is returned when the
    /// body describes one; an unreadable body does not fail the call.
    pub async fn create(&self, form: &TaskForm) -> Result<Option<Task>, ClientError> {
        let body = form.validate_create()?;
        let request = ApiRequest::post(ApiConfig::TASKS_PATH).json(&body)?;
        let response = self.gateway.send(&request).await?;

        if !response.status().is_success() {
            return Err(ClientError::from_response(response, "Failed to create task").await);
        }

        match decode_json::<TaskEnvelope>(response).await {
            Ok(task) => Ok(Some(task.into())),
            Err(e) => {
                debug!("Created task body not decoded: {e}");
                Ok(None)
            }
        }
    }

    /// Change only the status of a task
    pub async fn update_status(&self, id: i64, status: TaskStatus) -> Result<(), ClientError> {
        self.update(
            id,
            &UpdateTaskRequest {
                status: Some(status),
                ..Default::default()
            },
        )
        .await
    }

    /// Save an edited task
    pub async fn save(
        &self,
        id: i64,
        form: &TaskForm,
        status: TaskStatus,
    ) -> Result<(), ClientError> {
        let body = form.validate_update(status)?;
        self.update(id, &body).await
    }

    async fn update(&self, id: i64, body: &UpdateTaskRequest) -> Result<(), ClientError> {
        let request = ApiRequest::put(ApiConfig::task_path(id)).json(body)?;
        let response = self.gateway.send(&request).await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ClientError::from_response(response, "Failed to update task").await)
        }
    }

    /// Delete a task; any 2xx (including 204 without a body) is success
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let request = ApiRequest::delete(ApiConfig::task_path(id));
        let response = self.gateway.send(&request).await?;
        let status = response.status();

        if status.is_success() || status == StatusCode::NO_CONTENT {
            Ok(())
        } else {
            Err(ClientError::from_response(response, "Failed to delete task").await)
        }
    }
}
