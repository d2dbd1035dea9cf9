//! Detail State Machine
//!
//! Fetch lifecycle of a single job keyed by the id taken from the route.

use super::lifecycle::{Generation, Lifecycle, RequestTracker};
use crate::api::JobApi;
use crate::models::{ApiResponse, Job};
use crate::types::ClientResult;
use tracing::{debug, warn};

/// Fixed message shown for every detail fetch failure
pub const DETAIL_ERROR: &str = "Job not found or failed to load";

/// What the detail screen should render
#[derive(Debug, PartialEq)]
pub enum DetailView<'a> {
    Idle,
    Loading,
    Failed(&'a str),
    Found(&'a Job),
    /// Successful fetch without a job. Not produced by the current client.
    NotFound,
}

#[derive(Debug, Default)]
pub struct DetailState {
    id: Option<String>,
    job: Option<Job>,
    lifecycle: Lifecycle,
    error_message: Option<String>,
    tracker: RequestTracker,
}

impl DetailState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn job(&self) -> Option<&Job> {
        self.job.as_ref()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// React to a new id. Empty ids leave the machine idle and return `None`.
    pub fn load(&mut self, id: &str) -> Option<Generation> {
        if id.trim().is_empty() {
            self.tracker.invalidate();
            self.id = None;
            self.job = None;
            self.error_message = None;
            self.lifecycle = Lifecycle::Idle;
            return None;
        }

        self.id = Some(id.to_string());
        self.job = None;
        self.error_message = None;
        self.lifecycle = Lifecycle::Pending;
        Some(self.tracker.issue())
    }

    /// Apply a fetch result. Returns false when the result was stale.
    pub fn finish_load(&mut self, generation: Generation, result: ClientResult<ApiResponse<Job>>) -> bool {
        if !self.tracker.is_current(generation) {
            debug!(generation = generation.value(), "Dropping stale job detail");
            return false;
        }

        match result {
            Ok(response) => {
                self.job = response.data;
                self.error_message = None;
                self.lifecycle = Lifecycle::Success;
            }
            Err(e) => {
                warn!(job_id = ?self.id, error = %e, "Error fetching job details");
                self.job = None;
                self.error_message = Some(DETAIL_ERROR.to_string());
                self.lifecycle = Lifecycle::Failed;
            }
        }
        true
    }

    /// Load `id` and apply the result in one step
    pub async fn fetch(&mut self, api: &dyn JobApi, id: &str) {
        if let Some(generation) = self.load(id) {
            let result = api.get_job(id).await;
            self.finish_load(generation, result);
        }
    }

    pub fn view(&self) -> DetailView<'_> {
        match self.lifecycle {
            Lifecycle::Idle => DetailView::Idle,
            Lifecycle::Pending => DetailView::Loading,
            Lifecycle::Failed => DetailView::Failed(self.error_message.as_deref().unwrap_or(DETAIL_ERROR)),
            Lifecycle::Success => match &self.job {
                Some(job) => DetailView::Found(job),
                None => DetailView::NotFound,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::tests::job;
    use crate::models::JobType;
    use crate::state::listing::tests::FakeApi;
    use crate::types::ClientError;

    #[tokio::test]
    async fn known_id_loads_job() {
        let api = FakeApi::with_jobs(vec![job("a1", "Backend Engineer", "Acme", "Remote", JobType::FullTime)]);
        let mut detail = DetailState::new();
        detail.fetch(&api, "a1").await;

        assert_eq!(detail.lifecycle(), Lifecycle::Success);
        match detail.view() {
            DetailView::Found(job) => assert_eq!(job.title, "Backend Engineer"),
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[tokio::test]
    async fn unknown_id_fails_with_fixed_message() {
        let api = FakeApi::default();
        let mut detail = DetailState::new();
        detail.fetch(&api, "does-not-exist").await;

        assert_eq!(detail.lifecycle(), Lifecycle::Failed);
        assert_eq!(detail.error_message(), Some("Job not found or failed to load"));
        assert_eq!(detail.view(), DetailView::Failed(DETAIL_ERROR));
        assert!(detail.job().is_none());
    }

    #[tokio::test]
    async fn empty_id_stays_idle_without_request() {
        let api = FakeApi::default();
        let mut detail = DetailState::new();
        detail.fetch(&api, "").await;

        assert_eq!(detail.lifecycle(), Lifecycle::Idle);
        assert_eq!(detail.view(), DetailView::Idle);
        assert_eq!(api.calls(), 0);
    }

    #[test]
    fn pending_until_completion() {
        let mut detail = DetailState::new();
        let gen = detail.load("a1").unwrap();
        assert_eq!(detail.view(), DetailView::Loading);

        detail.finish_load(gen, Err(ClientError::Network("timeout".into())));
        assert_eq!(detail.lifecycle(), Lifecycle::Failed);
    }

    #[test]
    fn success_without_job_renders_not_found() {
        let mut detail = DetailState::new();
        let gen = detail.load("a1").unwrap();
        detail.finish_load(
            gen,
            Ok(ApiResponse {
                success: true,
                data: None,
                message: String::new(),
                total: None,
            }),
        );
        assert_eq!(detail.view(), DetailView::NotFound);
    }

    #[test]
    fn navigating_away_discards_late_response() {
        let mut detail = DetailState::new();
        let first = detail.load("a1").unwrap();
        let second = detail.load("b2").unwrap();

        assert!(!detail.finish_load(first, Ok(ApiResponse::ok(job("a1", "Old", "X", "Y", JobType::FullTime), "ok"))));
        assert_eq!(detail.view(), DetailView::Loading);

        assert!(detail.finish_load(second, Ok(ApiResponse::ok(job("b2", "New", "X", "Y", JobType::FullTime), "ok"))));
        assert_eq!(detail.job().map(|j| j.id.as_str()), Some("b2"));
    }

    #[tokio::test]
    async fn service_404_through_real_client() {
        use crate::api::{JobServiceClient, RemoteService};

        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/jobs/ghost")
            .with_status(404)
            .create_async()
            .await;
        let client = JobServiceClient::new(RemoteService::new(format!("{}/api", server.url())));

        let mut detail = DetailState::new();
        detail.fetch(&client, "ghost").await;
        assert_eq!(detail.lifecycle(), Lifecycle::Failed);
        assert_eq!(detail.error_message(), Some(DETAIL_ERROR));
    }
}
