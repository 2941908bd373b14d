// dataforge-core/src/infrastructure/tableau.rs
//
// REST adapter for the publishing port. Speaks the Tableau Server API:
// PAT sign-in, project lookup/creation, workbook upload (overwrite),
// sign-out. It only ever sees a packaged workbook path, never the
// generated tables.

use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart;
use serde_json::{Value as Json, json};
use tracing::{info, warn};

use crate::error::DataforgeError;
use crate::infrastructure::error::PublishError;
use crate::ports::publisher::{PublishRequest, PublishedWorkbook, WorkbookPublisher};

const API_VERSION: &str = "3.22";

pub struct TableauPublisher {
    client: reqwest::Client,
    server_url: String,
    token_name: String,
    token_secret: String,
}

struct Session {
    token: String,
    site_id: String,
}

impl TableauPublisher {
    pub fn new(
        server_url: impl Into<String>,
        token_name: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Result<Self, PublishError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            server_url: server_url.into().trim_end_matches('/').to_string(),
            token_name: token_name.into(),
            token_secret: token_secret.into(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}/{}", self.server_url, API_VERSION, path)
    }

    async fn sign_in(&self, site_id: Option<&str>) -> Result<Session, PublishError> {
        let body = json!({
            "credentials": {
                "personalAccessTokenName": self.token_name,
                "personalAccessTokenSecret": self.token_secret,
                "site": { "contentUrl": site_id.unwrap_or("") }
            }
        });

        let response = self
            .client
            .post(self.endpoint("auth/signin"))
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PublishError::Authentication(format!(
                "sign-in rejected with status {}",
                response.status()
            )));
        }

        let payload: Json = response.json().await?;
        let credentials = &payload["credentials"];
        let token = credentials["token"]
            .as_str()
            .ok_or_else(|| PublishError::Authentication("no token in response".to_string()))?
            .to_string();
        let site = credentials["site"]["id"]
            .as_str()
            .ok_or_else(|| PublishError::Authentication("no site id in response".to_string()))?
            .to_string();

        info!(server = %self.server_url, "Signed in");
        Ok(Session {
            token,
            site_id: site,
        })
    }

    async fn sign_out(&self, session: &Session) {
        // Best effort; an expired token on the way out is harmless.
        let result = self
            .client
            .post(self.endpoint("auth/signout"))
            .header("X-Tableau-Auth", &session.token)
            .send()
            .await;
        if let Err(e) = result {
            warn!(error = %e, "Sign-out failed");
        }
    }

    /// Finds the project by exact name, creating it when absent.
    async fn resolve_project(
        &self,
        session: &Session,
        project_name: &str,
    ) -> Result<String, PublishError> {
        let url = self.endpoint(&format!("sites/{}/projects", session.site_id));
        let response = self
            .client
            .get(&url)
            .query(&[("filter", format!("name:eq:{project_name}"))])
            .header("Accept", "application/json")
            .header("X-Tableau-Auth", &session.token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PublishError::ProjectResolution(format!(
                "project listing failed with status {}",
                response.status()
            )));
        }

        let payload: Json = response.json().await?;
        if let Some(id) = payload["projects"]["project"]
            .as_array()
            .and_then(|projects| projects.first())
            .and_then(|project| project["id"].as_str())
        {
            return Ok(id.to_string());
        }

        info!(project = %project_name, "Project not found, creating");
        let response = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .header("X-Tableau-Auth", &session.token)
            .json(&json!({ "project": { "name": project_name } }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PublishError::ProjectResolution(format!(
                "project creation failed with status {}",
                response.status()
            )));
        }

        let payload: Json = response.json().await?;
        payload["project"]["id"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                PublishError::ProjectResolution("no project id in creation response".to_string())
            })
    }

    async fn upload_workbook(
        &self,
        session: &Session,
        project_id: &str,
        workbook_path: &Path,
    ) -> Result<PublishedWorkbook, PublishError> {
        let name = workbook_name(workbook_path);
        let bytes = tokio::fs::read(workbook_path).await.map_err(|e| {
            PublishError::Upload(format!("cannot read workbook {workbook_path:?}: {e}"))
        })?;

        let payload = publish_payload(&name, project_id);
        let form = multipart::Form::new()
            .part(
                "request_payload",
                multipart::Part::text(payload).mime_str("text/xml")?,
            )
            .part(
                "tableau_workbook",
                multipart::Part::bytes(bytes)
                    .file_name(file_name(workbook_path))
                    .mime_str("application/octet-stream")?,
            );

        let url = self.endpoint(&format!("sites/{}/workbooks", session.site_id));
        let response = self
            .client
            .post(&url)
            .query(&[("workbookType", "twbx"), ("overwrite", "true")])
            .header("Accept", "application/json")
            .header("X-Tableau-Auth", &session.token)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PublishError::Upload(format!(
                "upload rejected with status {}",
                response.status()
            )));
        }

        let payload: Json = response.json().await?;
        let workbook = &payload["workbook"];
        let id = workbook["id"]
            .as_str()
            .ok_or_else(|| PublishError::Upload("no workbook id in response".to_string()))?
            .to_string();
        let name = workbook["name"].as_str().unwrap_or(&name).to_string();
        let url = format!("{}/#/workbooks/{}", self.server_url, id);

        Ok(PublishedWorkbook { id, name, url })
    }
}

#[async_trait]
impl WorkbookPublisher for TableauPublisher {
    async fn publish(
        &self,
        request: &PublishRequest,
    ) -> Result<PublishedWorkbook, DataforgeError> {
        let session = self.sign_in(request.site_id.as_deref()).await?;

        let outcome = async {
            let project_id = self.resolve_project(&session, &request.project_name).await?;
            info!(project = %request.project_name, "Publishing workbook");
            self.upload_workbook(&session, &project_id, &request.workbook_path)
                .await
        }
        .await;

        // Sign out whether or not the upload succeeded.
        self.sign_out(&session).await;

        outcome.map_err(DataforgeError::from)
    }
}

fn workbook_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "workbook".to_string())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "workbook.twbx".to_string())
}

fn publish_payload(workbook_name: &str, project_id: &str) -> String {
    format!(
        r#"<tsRequest><workbook name="{workbook_name}"><project id="{project_id}"/></workbook></tsRequest>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workbook_name_strips_extension() {
        let path = Path::new("/tmp/enterprise_dashboard.twbx");
        assert_eq!(workbook_name(path), "enterprise_dashboard");
        assert_eq!(file_name(path), "enterprise_dashboard.twbx");
    }

    #[test]
    fn test_publish_payload_shape() {
        let xml = publish_payload("dash", "p-123");
        assert_eq!(
            xml,
            r#"<tsRequest><workbook name="dash"><project id="p-123"/></workbook></tsRequest>"#
        );
    }

    #[test]
    fn test_endpoint_handles_trailing_slash() {
        let publisher =
            TableauPublisher::new("https://bi.example.com/", "token", "secret").unwrap();
        assert_eq!(
            publisher.endpoint("auth/signin"),
            "https://bi.example.com/api/3.22/auth/signin"
        );
    }
}
