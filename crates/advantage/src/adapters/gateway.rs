//! HTTP Gateway Adapter
//!
//! Implements the resource ports against the path-prefixed REST
//! gateway: `/employee/...` for the employee microservice (which also
//! owns projects), `/auth/...` for the auth microservice. JSON only.

use std::collections::BTreeSet;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use tracing::debug;

use crate::domain::{Employee, GatewayError, NewEmployee, NewProject, Project, User};
use crate::ports::{AuthResource, ProjectResource, Resource};

/// Typed client for the remote data gateway
#[derive(Debug, Clone)]
pub struct Gateway {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    pass: &'a str,
}

#[derive(Debug, Serialize)]
struct TeamUpdateRequest<'a> {
    #[serde(rename = "teamIds")]
    team_ids: &'a BTreeSet<String>,
}

impl Gateway {
    /// Create a gateway client rooted at `base_url`
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Shared HTTP client, for callers issuing requests outside the
    /// resource ports (the stress runner)
    pub fn http_client(&self) -> Client {
        self.client.clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn item_url(&self, collection: &str, id: &str) -> String {
        format!("{}{}/{}", self.base_url, collection, urlencoding::encode(id))
    }
}

/// Reject non-2xx responses, capturing the status and body.
async fn ok_or_status(resp: Response) -> Result<Response, GatewayError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(GatewayError::Status { status, body });
    }
    Ok(resp)
}

#[async_trait]
impl Resource<Employee> for Gateway {
    async fn list(&self) -> Result<Vec<Employee>, GatewayError> {
        debug!("listing employees");
        let resp = self
            .client
            .get(self.url("/employee/employees"))
            .send()
            .await
            .map_err(GatewayError::Transport)?;

        ok_or_status(resp).await?.json().await.map_err(GatewayError::Decode)
    }

    async fn create(&self, draft: &NewEmployee) -> Result<Employee, GatewayError> {
        debug!(name = %draft.name, "creating employee");
        let resp = self
            .client
            .post(self.url("/employee/employees"))
            .json(draft)
            .send()
            .await
            .map_err(GatewayError::Transport)?;

        ok_or_status(resp).await?.json().await.map_err(GatewayError::Decode)
    }

    async fn update(&self, record: &Employee) -> Result<(), GatewayError> {
        debug!(id = %record.id, "updating employee");
        let resp = self
            .client
            .put(self.item_url("/employee/employees", &record.id))
            .json(record)
            .send()
            .await
            .map_err(GatewayError::Transport)?;

        ok_or_status(resp).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), GatewayError> {
        debug!(id = %id, "deleting employee");
        let resp = self
            .client
            .delete(self.item_url("/employee/employees", id))
            .send()
            .await
            .map_err(GatewayError::Transport)?;

        ok_or_status(resp).await?;
        Ok(())
    }
}

#[async_trait]
impl Resource<Project> for Gateway {
    async fn list(&self) -> Result<Vec<Project>, GatewayError> {
        debug!("listing projects");
        let resp = self
            .client
            .get(self.url("/employee/projects"))
            .send()
            .await
            .map_err(GatewayError::Transport)?;

        ok_or_status(resp).await?.json().await.map_err(GatewayError::Decode)
    }

    async fn create(&self, draft: &NewProject) -> Result<Project, GatewayError> {
        debug!(name = %draft.name, "creating project");
        let resp = self
            .client
            .post(self.url("/employee/projects"))
            .json(draft)
            .send()
            .await
            .map_err(GatewayError::Transport)?;

        ok_or_status(resp).await?.json().await.map_err(GatewayError::Decode)
    }

    async fn update(&self, record: &Project) -> Result<(), GatewayError> {
        debug!(id = %record.id, "updating project");
        let resp = self
            .client
            .put(self.item_url("/employee/projects", &record.id))
            .json(record)
            .send()
            .await
            .map_err(GatewayError::Transport)?;

        ok_or_status(resp).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), GatewayError> {
        debug!(id = %id, "deleting project");
        let resp = self
            .client
            .delete(self.item_url("/employee/projects", id))
            .send()
            .await
            .map_err(GatewayError::Transport)?;

        ok_or_status(resp).await?;
        Ok(())
    }
}

#[async_trait]
impl ProjectResource for Gateway {
    async fn update_team(
        &self,
        project_id: &str,
        team_ids: &BTreeSet<String>,
    ) -> Result<(), GatewayError> {
        debug!(id = %project_id, members = team_ids.len(), "reassigning project team");
        let url = format!(
            "{}/team",
            self.item_url("/employee/projects", project_id)
        );
        let resp = self
            .client
            .put(url)
            .json(&TeamUpdateRequest { team_ids })
            .send()
            .await
            .map_err(GatewayError::Transport)?;

        ok_or_status(resp).await?;
        Ok(())
    }
}

#[async_trait]
impl AuthResource for Gateway {
    async fn login(&self, email: &str, pass: &str) -> Result<User, GatewayError> {
        debug!(email = %email, "logging in");
        let resp = self
            .client
            .post(self.url("/auth/login"))
            .json(&LoginRequest { email, pass })
            .send()
            .await
            .map_err(GatewayError::Transport)?;

        ok_or_status(resp).await?.json().await.map_err(GatewayError::Decode)
    }

    async fn logout(&self) -> Result<(), GatewayError> {
        debug!("logging out");
        let resp = self
            .client
            .post(self.url("/auth/logout"))
            .send()
            .await
            .map_err(GatewayError::Transport)?;

        ok_or_status(resp).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let gateway = Gateway::new("http://localhost:8080/");
        assert_eq!(gateway.base_url(), "http://localhost:8080");
        assert_eq!(gateway.url("/auth/login"), "http://localhost:8080/auth/login");
    }

    #[test]
    fn item_paths_encode_identifiers() {
        let gateway = Gateway::new("http://localhost:8080");
        assert_eq!(
            gateway.item_url("/employee/employees", "a b/c"),
            "http://localhost:8080/employee/employees/a%20b%2Fc"
        );
    }

    #[test]
    fn team_update_body_uses_team_ids_key() {
        let team: BTreeSet<String> = ["1".to_string(), "2".to_string()].into();
        let body = serde_json::to_value(TeamUpdateRequest { team_ids: &team }).unwrap();
        assert_eq!(body, serde_json::json!({ "teamIds": ["1", "2"] }));
    }
}
