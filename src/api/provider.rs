use crate::filter::JobFilter;
use crate::models::{ApiResponse, Job, JobDraft, JobStats};
use crate::types::ClientResult;
use async_trait::async_trait;
use std::collections::HashSet;

/// Number of postings reported as recent by [`JobApi::get_job_stats`]
pub const RECENT_JOBS: usize = 5;

/// Operations on the remote job collection.
///
/// The state machines and the TUI only see this trait, so tests can drive
/// them with in-memory fakes.
#[async_trait]
pub trait JobApi: Send + Sync {
    async fn list_jobs(&self) -> ClientResult<ApiResponse<Vec<Job>>>;

    async fn get_job(&self, id: &str) -> ClientResult<ApiResponse<Job>>;

    async fn create_job(&self, draft: &JobDraft) -> ClientResult<ApiResponse<Job>>;

    async fn update_job(&self, id: &str, draft: &JobDraft) -> ClientResult<ApiResponse<Job>>;

    async fn delete_job(&self, id: &str) -> ClientResult<ApiResponse<()>>;

    /// Full listing narrowed with the client-side predicate
    async fn list_jobs_filtered(&self, filter: &JobFilter) -> ClientResult<ApiResponse<Vec<Job>>> {
        let jobs = self.list_jobs().await?.data.unwrap_or_default();
        let visible = filter.apply(&jobs);
        let total = visible.len();
        Ok(ApiResponse::ok(visible, format!("Found {} jobs", total)).with_total(total))
    }

    /// Aggregates computed from one listing fetch
    async fn get_job_stats(&self) -> ClientResult<ApiResponse<JobStats>> {
        let jobs = self.list_jobs().await?.data.unwrap_or_default();
        Ok(ApiResponse::ok(
            summarize(jobs),
            "Statistics retrieved successfully",
        ))
    }
}

/// Distinct values of `key` in first-seen order
fn distinct<'a>(jobs: &'a [Job], key: impl Fn(&'a Job) -> &'a str) -> Vec<String> {
    let mut seen = HashSet::new();
    jobs.iter()
        .map(key)
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

/// Build [`JobStats`] from a listing.
///
/// Recent postings are ordered newest first by `created_at`; postings
/// without a timestamp sort last and keep their collection order.
pub fn summarize(jobs: Vec<Job>) -> JobStats {
    let locations = distinct(&jobs, |j| j.location.as_str());
    let companies = distinct(&jobs, |j| j.company.as_str());
    let total_jobs = jobs.len();

    let mut recent = jobs;
    // sort_by is stable, so ties keep service order
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent.truncate(RECENT_JOBS);

    JobStats {
        total_jobs,
        locations,
        companies,
        recent_jobs: recent,
    }
}
