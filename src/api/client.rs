//! Job Service Client
//!
//! reqwest implementation of [`JobApi`] against the `/jobs` endpoints.
//! Every call is exactly one round trip; nothing is retried or cached.

use super::http::{self, RemoteService};
use super::provider::JobApi;
use crate::models::{ApiResponse, Job, JobDraft};
use crate::types::{ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Method, StatusCode, Url};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct JobServiceClient {
    service: RemoteService,
}

impl JobServiceClient {
    pub fn new(service: RemoteService) -> Self {
        Self { service }
    }

    /// `/jobs/{id}` with the id as a single encoded segment
    fn job_url(&self, id: &str) -> ClientResult<Url> {
        self.service.segment_url("/jobs", id)
    }

    fn require_id(id: &str) -> ClientResult<()> {
        if id.trim().is_empty() {
            return Err(ClientError::InvalidRequest("job id must not be empty".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl JobApi for JobServiceClient {
    async fn list_jobs(&self) -> ClientResult<ApiResponse<Vec<Job>>> {
        let response = http::send(self.service.request(Method::GET, "/jobs")).await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Listing fetch rejected");
            return Err(http::status_error(status));
        }

        let jobs: Vec<Job> = http::decode(response).await?;
        let total = jobs.len();
        info!(count = total, "Jobs fetched");
        Ok(ApiResponse::ok(jobs, format!("Found {} jobs", total)).with_total(total))
    }

    async fn get_job(&self, id: &str) -> ClientResult<ApiResponse<Job>> {
        Self::require_id(id)?;

        let response = http::send(self.service.request_url(Method::GET, self.job_url(id)?)).await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            warn!(job_id = %id, "Job not found");
            return Err(ClientError::NotFound(id.to_string()));
        }
        if !status.is_success() {
            warn!(job_id = %id, %status, "Job fetch rejected");
            return Err(http::status_error(status));
        }

        let job: Job = http::decode(response).await?;
        Ok(ApiResponse::ok(job, "Job details retrieved successfully"))
    }

    async fn create_job(&self, draft: &JobDraft) -> ClientResult<ApiResponse<Job>> {
        let request = self.service.request(Method::POST, "/jobs").json(draft);
        let response = http::send(request).await?;

        if !response.status().is_success() {
            let err = http::rejection(response, "Failed to create job posting").await;
            warn!(error = %err, "Job creation rejected");
            return Err(err);
        }

        let job: Job = http::decode(response).await?;
        info!(job_id = %job.id, title = %job.title, "Job created");
        Ok(ApiResponse::ok(job, "Job posted successfully!"))
    }

    async fn update_job(&self, id: &str, draft: &JobDraft) -> ClientResult<ApiResponse<Job>> {
        Self::require_id(id)?;

        let request = self.service.request_url(Method::PUT, self.job_url(id)?).json(draft);
        let response = http::send(request).await?;

        if !response.status().is_success() {
            let err = http::rejection(response, "Failed to update job posting").await;
            warn!(job_id = %id, error = %err, "Job update rejected");
            return Err(err);
        }

        let job: Job = http::decode(response).await?;
        info!(job_id = %id, "Job updated");
        Ok(ApiResponse::ok(job, "Job updated successfully"))
    }

    async fn delete_job(&self, id: &str) -> ClientResult<ApiResponse<()>> {
        Self::require_id(id)?;

        let response = http::send(self.service.request_url(Method::DELETE, self.job_url(id)?)).await?;

        if !response.status().is_success() {
            let err = http::rejection(response, "Failed to delete job posting").await;
            warn!(job_id = %id, error = %err, "Job deletion rejected");
            return Err(err);
        }

        info!(job_id = %id, "Job deleted");
        Ok(ApiResponse::ack("Job deleted successfully"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::JobFilter;
    use crate::models::JobType;
    use mockito::{Matcher, Server};

    const JOBS: &str = r#"[
        {"_id": "a1", "title": "Backend Engineer", "company": "Acme", "location": "Remote",
         "type": "Full-time", "salary": "12 - 18", "description": "APIs", "skills": "Rust, SQL",
         "createdAt": "2025-02-01T00:00:00Z"},
        {"_id": "b2", "title": "Designer", "company": "Acme", "location": "Pune",
         "type": "Part-time", "description": "Figma", "createdAt": "2025-03-01T00:00:00Z"},
        {"_id": "c3", "title": "Data Analyst", "company": "Initech", "location": "Pune",
         "type": "Contract", "description": "Dashboards"}
    ]"#;

    fn client(server: &Server) -> JobServiceClient {
        JobServiceClient::new(RemoteService::new(format!("{}/api", server.url())))
    }

    #[tokio::test]
    async fn test_list_jobs_envelope() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/jobs")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(JOBS)
            .create_async()
            .await;

        let response = client(&server).list_jobs().await.unwrap();
        mock.assert_async().await;

        assert!(response.success);
        assert_eq!(response.total, Some(3));
        assert_eq!(response.message, "Found 3 jobs");
        let jobs = response.data.unwrap();
        assert_eq!(jobs[1].job_type, JobType::PartTime);
    }

    #[tokio::test]
    async fn test_list_jobs_http_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/jobs")
            .with_status(500)
            .create_async()
            .await;

        let err = client(&server).list_jobs().await.unwrap_err();
        assert_eq!(err, ClientError::Http { status: 500, message: None });
    }

    #[tokio::test]
    async fn test_list_jobs_network_error() {
        // nothing listens on port 9 of the loopback interface
        let client = JobServiceClient::new(RemoteService::new("http://127.0.0.1:9/api"));
        let err = client.list_jobs().await.unwrap_err();
        assert!(matches!(err, ClientError::Network(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_filtered_listing_sends_no_query() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/jobs")
            .match_query(Matcher::Missing)
            .with_status(200)
            .with_body(JOBS)
            .expect(1)
            .create_async()
            .await;

        let filter = JobFilter::new().with_location("Pune").with_job_type("Contract");
        let response = client(&server).list_jobs_filtered(&filter).await.unwrap();
        mock.assert_async().await;

        assert_eq!(response.total, Some(1));
        assert_eq!(response.message, "Found 1 jobs");
        assert_eq!(response.data.unwrap()[0].id, "c3");
    }

    #[tokio::test]
    async fn test_get_job_not_found() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/jobs/missing")
            .with_status(404)
            .with_body(r#"{"message":"Job not found"}"#)
            .create_async()
            .await;

        let err = client(&server).get_job("missing").await.unwrap_err();
        assert_eq!(err, ClientError::NotFound("missing".to_string()));
    }

    #[tokio::test]
    async fn test_job_ids_are_single_path_segments() {
        let mut server = Server::new_async().await;
        let nested = server
            .mock("GET", "/api/jobs/a/b")
            .expect(0)
            .create_async()
            .await;
        let encoded = server
            .mock("GET", "/api/jobs/a%2Fb")
            .with_status(404)
            .create_async()
            .await;
        let deleted = server
            .mock("DELETE", "/api/jobs/a%3Fx")
            .match_query(Matcher::Missing)
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;
        let other = server
            .mock("DELETE", "/api/jobs/a")
            .expect(0)
            .create_async()
            .await;

        let client = client(&server);
        let err = client.get_job("a/b").await.unwrap_err();
        assert_eq!(err, ClientError::NotFound("a/b".to_string()));
        client.delete_job("a?x").await.unwrap();

        nested.assert_async().await;
        encoded.assert_async().await;
        deleted.assert_async().await;
        other.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_job_rejects_empty_id_without_request() {
        let mut server = Server::new_async().await;
        let mock = server.mock("GET", Matcher::Any).expect(0).create_async().await;

        let err = client(&server).get_job("  ").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_job_posts_draft() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/jobs")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "title": "Backend Engineer",
                "type": "Full-time",
                "salary": "6 - 7"
            })))
            .with_status(201)
            .with_body(
                r#"{"_id":"n1","title":"Backend Engineer","company":"Acme","location":"Remote",
                    "type":"Full-time","salary":"6 - 7","description":"APIs"}"#,
            )
            .create_async()
            .await;

        let draft = JobDraft {
            title: "Backend Engineer".into(),
            company: "Acme".into(),
            location: "Remote".into(),
            salary: "6 - 7".into(),
            description: "APIs".into(),
            ..Default::default()
        };
        let response = client(&server).create_job(&draft).await.unwrap();
        mock.assert_async().await;

        assert_eq!(response.message, "Job posted successfully!");
        assert_eq!(response.data.unwrap().id, "n1");
    }

    #[tokio::test]
    async fn test_create_job_validation_message_from_server() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/jobs")
            .with_status(400)
            .with_body(r#"{"message":"Salary must be numeric"}"#)
            .create_async()
            .await;

        let err = client(&server).create_job(&JobDraft::default()).await.unwrap_err();
        assert_eq!(
            err,
            ClientError::Validation {
                status: 400,
                message: "Salary must be numeric".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_create_job_validation_fallback_message() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/jobs")
            .with_status(422)
            .with_body("not json")
            .create_async()
            .await;

        let err = client(&server).create_job(&JobDraft::default()).await.unwrap_err();
        assert_eq!(err.user_message("unused"), "Failed to create job posting");
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let mut server = Server::new_async().await;
        let put = server
            .mock("PUT", "/api/jobs/a1")
            .with_status(200)
            .with_body(
                r#"{"_id":"a1","title":"Staff Engineer","company":"Acme","location":"Remote",
                    "type":"Full-time","description":"APIs"}"#,
            )
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", "/api/jobs/a1")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = client(&server);
        let updated = client.update_job("a1", &JobDraft::default()).await.unwrap();
        assert_eq!(updated.data.unwrap().title, "Staff Engineer");

        let ack = client.delete_job("a1").await.unwrap();
        assert!(ack.success);
        assert!(ack.data.is_none());
        assert_eq!(ack.message, "Job deleted successfully");

        put.assert_async().await;
        delete.assert_async().await;
    }

    #[tokio::test]
    async fn test_stats_use_single_listing_fetch() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/jobs")
            .with_status(200)
            .with_body(JOBS)
            .expect(1)
            .create_async()
            .await;

        let stats = client(&server).get_job_stats().await.unwrap().data.unwrap();
        mock.assert_async().await;

        assert_eq!(stats.total_jobs, 3);
        assert_eq!(stats.locations, vec!["Remote", "Pune"]);
        assert_eq!(stats.companies, vec!["Acme", "Initech"]);
        let recent: Vec<_> = stats.recent_jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(recent, vec!["b2", "a1", "c3"]);
    }
}
