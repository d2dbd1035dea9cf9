//! Listing State Machine
//!
//! Owns the fetched collection, the active filter and the visible subset.
//! The collection is fetched once per mount; filter edits only rescan it.

use super::lifecycle::{Generation, Lifecycle, RequestTracker};
use crate::api::JobApi;
use crate::filter::JobFilter;
use crate::models::{ApiResponse, Job};
use crate::types::ClientResult;
use tracing::{debug, info, warn};

/// Shown in place of the list when the fetch failed
pub const LISTING_ERROR: &str = "Failed to fetch jobs";

#[derive(Debug, Default)]
pub struct ListingState {
    jobs: Vec<Job>,
    filter: JobFilter,
    visible: Vec<Job>,
    lifecycle: Lifecycle,
    tracker: RequestTracker,
}

impl ListingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn visible(&self) -> &[Job] {
        &self.visible
    }

    pub fn filter(&self) -> &JobFilter {
        &self.filter
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Start a fetch. The returned generation must accompany the result.
    pub fn begin_fetch(&mut self) -> Generation {
        self.lifecycle = Lifecycle::Pending;
        self.tracker.issue()
    }

    /// Apply a fetch result. Returns false when the result was stale.
    pub fn finish_fetch(
        &mut self,
        generation: Generation,
        result: ClientResult<ApiResponse<Vec<Job>>>,
    ) -> bool {
        if !self.tracker.is_current(generation) {
            debug!(generation = generation.value(), "Dropping stale listing result");
            return false;
        }

        match result {
            Ok(response) => {
                self.jobs = response.data.unwrap_or_default();
                self.lifecycle = Lifecycle::Success;
                info!(count = self.jobs.len(), "Listing loaded");
            }
            Err(e) => {
                warn!(error = %e, "Error fetching jobs");
                // never show stale data after a failure
                self.jobs.clear();
                self.lifecycle = Lifecycle::Failed;
            }
        }
        self.recompute();
        true
    }

    /// Fetch and apply in one step
    pub async fn refresh(&mut self, api: &dyn JobApi) {
        let generation = self.begin_fetch();
        let result = api.list_jobs().await;
        self.finish_fetch(generation, result);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.recompute();
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.filter.location = location.into();
        self.recompute();
    }

    pub fn set_job_type(&mut self, job_type: impl Into<String>) {
        self.filter.job_type = job_type.into();
        self.recompute();
    }

    pub fn set_filter(&mut self, filter: JobFilter) {
        self.filter = filter;
        self.recompute();
    }

    /// Id of the visible job at `index`, for navigation
    pub fn select(&self, index: usize) -> Option<&str> {
        self.visible.get(index).map(|job| job.id.as_str())
    }

    fn recompute(&mut self) {
        self.visible = self.filter.apply(&self.jobs);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::filter::tests::job;
    use crate::models::{JobDraft, JobType};
    use crate::types::ClientError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// In-memory [`JobApi`] that counts calls
    #[derive(Default)]
    pub(crate) struct FakeApi {
        pub jobs: Vec<Job>,
        pub fail_list: Option<ClientError>,
        pub create_result: Mutex<Option<ClientResult<ApiResponse<Job>>>>,
        pub calls: AtomicUsize,
    }

    impl FakeApi {
        pub fn with_jobs(jobs: Vec<Job>) -> Self {
            Self { jobs, ..Default::default() }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl JobApi for FakeApi {
        async fn list_jobs(&self) -> ClientResult<ApiResponse<Vec<Job>>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.fail_list {
                Some(e) => Err(e.clone()),
                None => Ok(ApiResponse::ok(self.jobs.clone(), "ok")),
            }
        }

        async fn get_job(&self, id: &str) -> ClientResult<ApiResponse<Job>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.jobs
                .iter()
                .find(|j| j.id == id)
                .cloned()
                .map(|j| ApiResponse::ok(j, "ok"))
                .ok_or_else(|| ClientError::NotFound(id.to_string()))
        }

        async fn create_job(&self, draft: &JobDraft) -> ClientResult<ApiResponse<Job>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(result) = self.create_result.lock().unwrap().take() {
                return result;
            }
            let mut created = job("new", &draft.title, &draft.company, &draft.location, draft.job_type.clone());
            created.description = draft.description.clone();
            Ok(ApiResponse::ok(created, "Job posted successfully!"))
        }

        async fn update_job(&self, id: &str, _draft: &JobDraft) -> ClientResult<ApiResponse<Job>> {
            self.get_job(id).await
        }

        async fn delete_job(&self, _id: &str) -> ClientResult<ApiResponse<()>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ApiResponse::ack("Job deleted successfully"))
        }
    }

    fn scenario_jobs() -> Vec<Job> {
        vec![
            job("1", "Backend Engineer", "Acme", "Remote", JobType::FullTime),
            job("2", "Designer", "Acme", "Pune", JobType::PartTime),
        ]
    }

    #[tokio::test]
    async fn mount_shows_all_jobs() {
        let api = FakeApi::with_jobs(scenario_jobs());
        let mut listing = ListingState::new();
        assert_eq!(listing.lifecycle(), Lifecycle::Idle);

        listing.refresh(&api).await;

        assert_eq!(listing.lifecycle(), Lifecycle::Success);
        assert_eq!(listing.visible(), listing.jobs());
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn filter_changes_do_not_refetch() {
        let api = FakeApi::with_jobs(scenario_jobs());
        let mut listing = ListingState::new();
        listing.refresh(&api).await;

        listing.set_search("backend");
        assert_eq!(listing.visible().len(), 1);
        assert_eq!(listing.visible()[0].title, "Backend Engineer");

        listing.set_search("");
        listing.set_location("Pune");
        listing.set_job_type("");
        assert_eq!(listing.select(0), Some("2"));
        assert_eq!(listing.visible().len(), 1);

        assert_eq!(api.calls(), 1);
        assert_eq!(listing.jobs().len(), 2);
    }

    #[tokio::test]
    async fn server_error_clears_everything() {
        let api = FakeApi {
            jobs: scenario_jobs(),
            fail_list: Some(ClientError::Http { status: 500, message: None }),
            ..Default::default()
        };
        let mut listing = ListingState::new();
        listing.refresh(&api).await;

        assert_eq!(listing.lifecycle(), Lifecycle::Failed);
        assert!(listing.jobs().is_empty());
        assert!(listing.visible().is_empty());
    }

    #[test]
    fn failure_after_success_drops_stale_rows() {
        let mut listing = ListingState::new();
        let gen = listing.begin_fetch();
        listing.finish_fetch(gen, Ok(ApiResponse::ok(scenario_jobs(), "ok")));
        assert_eq!(listing.visible().len(), 2);

        let gen = listing.begin_fetch();
        assert_eq!(listing.lifecycle(), Lifecycle::Pending);
        listing.finish_fetch(gen, Err(ClientError::Network("reset".into())));
        assert!(listing.visible().is_empty());
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut listing = ListingState::new();
        let old = listing.begin_fetch();
        let new = listing.begin_fetch();

        assert!(listing.finish_fetch(new, Ok(ApiResponse::ok(scenario_jobs(), "ok"))));
        assert!(!listing.finish_fetch(old, Err(ClientError::Network("late".into()))));

        assert_eq!(listing.lifecycle(), Lifecycle::Success);
        assert_eq!(listing.jobs().len(), 2);
    }

    #[test]
    fn filter_survives_refetch() {
        let mut listing = ListingState::new();
        listing.set_location("Pune");
        let gen = listing.begin_fetch();
        listing.finish_fetch(gen, Ok(ApiResponse::ok(scenario_jobs(), "ok")));
        assert_eq!(listing.visible().len(), 1);
        assert_eq!(listing.select(1), None);
    }

    #[tokio::test]
    async fn http_500_from_service_fails_listing() {
        use crate::api::{JobServiceClient, RemoteService};

        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/jobs")
            .with_status(500)
            .create_async()
            .await;
        let client = JobServiceClient::new(RemoteService::new(format!("{}/api", server.url())));

        let mut listing = ListingState::new();
        listing.refresh(&client).await;

        assert_eq!(listing.lifecycle(), Lifecycle::Failed);
        assert!(listing.jobs().is_empty());
        assert!(listing.visible().is_empty());
    }
}
