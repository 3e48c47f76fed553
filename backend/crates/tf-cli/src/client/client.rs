use crate::{CliClientResult, ClientError};

use reqwest::{Client as ReqwestClient, Method, header::AUTHORIZATION};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the tf-server REST API
pub struct Client {
    pub base_url: String,
    pub user_id: Option<String>,
    pub token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `user_id` - Optional user ID to include in X-User-Id header
    pub fn new(base_url: &str, user_id: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id: user_id.map(String::from),
            token: None,
            client: ReqwestClient::new(),
        }
    }

    /// Authenticate with a bearer token
    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = token.map(String::from);
        self
    }

    /// Build a request carrying the caller's identity
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref token) = self.token {
            req = req.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(ref user_id) = self.user_id {
            req = req.header("X-User-Id", user_id);
        }

        req
    }

    /// Send the request and decode the JSON body. An empty body reads as `null`.
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            if text.trim().is_empty() {
                return Ok(Value::Null);
            }
            return Ok(serde_json::from_str(&text)?);
        }

        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Err(ClientError::from_error_body(status, &body))
    }

    // =========================================================================
    // Project Operations
    // =========================================================================

    /// List the caller's projects
    pub async fn list_projects(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/v1/projects");
        self.execute(req).await
    }

    /// Get a project with its team and tasks
    pub async fn get_project(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &format!("/api/v1/projects/{}", id));
        self.execute(req).await
    }

    /// Get a project's board
    pub async fn get_board(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &format!("/api/v1/projects/{}/board", id));
        self.execute(req).await
    }

    /// Create a new project
    pub async fn create_project(
        &self,
        name: &str,
        description: Option<&str>,
        status: Option<&str>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct CreateRequest<'a> {
            name: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            status: Option<&'a str>,
        }

        let body = CreateRequest {
            name,
            description,
            status,
        };
        let req = self.request(Method::POST, "/api/v1/projects").json(&body);
        self.execute(req).await
    }

    /// Delete a project
    pub async fn delete_project(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/api/v1/projects/{}", id));
        self.execute(req).await
    }

    /// Add a user to a project's team
    pub async fn add_member(&self, project_id: &str, user_id: &str) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct AddMemberRequest<'a> {
            user_id: &'a str,
        }

        let req = self
            .request(
                Method::POST,
                &format!("/api/v1/projects/{}/members", project_id),
            )
            .json(&AddMemberRequest { user_id });
        self.execute(req).await
    }

    // =========================================================================
    // Task Operations
    // =========================================================================

    /// List tasks across the caller's projects
    pub async fn list_tasks(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/v1/tasks");
        self.execute(req).await
    }

    /// Get a task by ID
    pub async fn get_task(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &format!("/api/v1/tasks/{}", id));
        self.execute(req).await
    }

    /// Create a task at the end of a column
    pub async fn create_task(
        &self,
        project_id: &str,
        column_id: &str,
        title: &str,
        description: Option<&str>,
        priority: Option<&str>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct CreateTaskRequest<'a> {
            project_id: &'a str,
            column_id: &'a str,
            title: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            priority: Option<&'a str>,
        }

        let body = CreateTaskRequest {
            project_id,
            column_id,
            title,
            description,
            priority,
        };
        let req = self.request(Method::POST, "/api/v1/tasks").json(&body);
        self.execute(req).await
    }

    /// Update a task; `None` fields are left unchanged
    pub async fn update_task(
        &self,
        id: &str,
        title: Option<&str>,
        description: Option<&str>,
        priority: Option<&str>,
        assignee_id: Option<&str>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct UpdateTaskRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            title: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            priority: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            assignee_id: Option<&'a str>,
        }

        let body = UpdateTaskRequest {
            title,
            description,
            priority,
            assignee_id,
        };
        let req = self
            .request(Method::PUT, &format!("/api/v1/tasks/{}", id))
            .json(&body);
        self.execute(req).await
    }

    /// Move a task to the column matching `status`
    pub async fn set_task_status(&self, id: &str, status: &str) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct SetStatusRequest<'a> {
            status: &'a str,
        }

        let req = self
            .request(Method::PUT, &format!("/api/v1/tasks/{}/status", id))
            .json(&SetStatusRequest { status });
        self.execute(req).await
    }

    /// Delete a task
    pub async fn delete_task(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/api/v1/tasks/{}", id));
        self.execute(req).await
    }

    // =========================================================================
    // Board Ordering
    // =========================================================================

    /// Place a task at `destination_index` of a column
    pub async fn move_task(
        &self,
        task_id: &str,
        source_column_id: &str,
        destination_column_id: &str,
        destination_index: i64,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct MoveTaskRequest<'a> {
            task_id: &'a str,
            source_column_id: &'a str,
            destination_column_id: &'a str,
            destination_index: i64,
        }

        let body = MoveTaskRequest {
            task_id,
            source_column_id,
            destination_column_id,
            destination_index,
        };
        let req = self
            .request(Method::PUT, "/api/v1/columns/move-task")
            .json(&body);
        self.execute(req).await
    }
}
