use super::http::{self, RemoteService};
use crate::models::{ApiResponse, Application, ApplicationDraft};
use crate::types::{ClientError, ClientResult};
use reqwest::Method;
use tracing::{info, warn};

/// Job application endpoints. Both calls need a bearer token.
#[derive(Debug, Clone)]
pub struct ApplicationClient {
    service: RemoteService,
}

impl ApplicationClient {
    pub fn new(service: RemoteService) -> Self {
        Self { service }
    }

    pub async fn apply(
        &self,
        job_id: &str,
        draft: &ApplicationDraft,
    ) -> ClientResult<ApiResponse<Application>> {
        if job_id.trim().is_empty() {
            return Err(ClientError::InvalidRequest("job id must not be empty".to_string()));
        }

        let url = self.service.segment_url("/applications", job_id)?;
        let request = self.service.authorized_url(Method::POST, url).json(draft);
        let response = http::send(request).await?;

        if !response.status().is_success() {
            let err = http::rejection(response, "Failed to submit application").await;
            warn!(job_id = %job_id, error = %err, "Application rejected");
            return Err(err);
        }

        let application: Application = http::decode(response).await?;
        info!(job_id = %job_id, "Application submitted");
        Ok(ApiResponse::ok(application, "Application submitted successfully"))
    }

    pub async fn my_applications(&self) -> ClientResult<ApiResponse<Vec<Application>>> {
        let response = http::send(
            self.service
                .authorized(Method::GET, "/applications/my-applications"),
        )
        .await?;

        if !response.status().is_success() {
            return Err(http::rejection(response, "Failed to fetch applications").await);
        }

        let applications: Vec<Application> = http::decode(response).await?;
        let total = applications.len();
        Ok(ApiResponse::ok(applications, "Applications retrieved successfully").with_total(total))
    }
}
