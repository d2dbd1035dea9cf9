//! Client-side job filtering
//!
//! The listing is always fetched in full and narrowed locally. The same
//! predicate backs the listing view and [`JobApi::list_jobs_filtered`].
//!
//! [`JobApi::list_jobs_filtered`]: crate::api::JobApi::list_jobs_filtered

use crate::models::Job;

/// Location value meaning "no location constraint"
pub const ALL_LOCATIONS: &str = "All Locations";

/// Job type value meaning "no job type constraint"
pub const ALL_JOB_TYPES: &str = "All Job Types";

/// Options offered by the location selector
pub const LOCATIONS: [&str; 14] = [
    ALL_LOCATIONS,
    "Remote",
    "Noida",
    "Gurugram",
    "Hyderabad",
    "Bengaluru",
    "Chennai",
    "Mumbai",
    "Delhi",
    "Kolkata",
    "Pune",
    "Jaipur",
    "Ahmedabad",
    "Chandigarh",
];

/// Options offered by the job type selector
pub const JOB_TYPES: [&str; 7] = [
    ALL_JOB_TYPES,
    "Full-time",
    "Part-time",
    "Contract",
    "Internship",
    "Freelance",
    "Remote",
];

/// Active search text and selector values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub search: String,
    pub location: String,
    pub job_type: String,
}

impl JobFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_job_type(mut self, job_type: impl Into<String>) -> Self {
        self.job_type = job_type.into();
        self
    }

    /// True when no constraint is active
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && !self.constrains_location() && !self.constrains_job_type()
    }

    fn constrains_location(&self) -> bool {
        !self.location.is_empty() && self.location != ALL_LOCATIONS
    }

    fn constrains_job_type(&self) -> bool {
        !self.job_type.is_empty() && self.job_type != ALL_JOB_TYPES
    }

    /// Whether a single job passes every active constraint
    pub fn matches(&self, job: &Job) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let hit = job.title.to_lowercase().contains(&needle)
                || job.company.to_lowercase().contains(&needle)
                || job.description.to_lowercase().contains(&needle)
                || job
                    .skills
                    .as_deref()
                    .map(|s| s.to_lowercase().contains(&needle))
                    .unwrap_or(false);
            if !hit {
                return false;
            }
        }

        if self.constrains_location() && job.location != self.location {
            return false;
        }

        if self.constrains_job_type() && job.job_type.as_str() != self.job_type {
            return false;
        }

        true
    }

    /// Visible subset of `jobs`, in collection order
    pub fn apply(&self, jobs: &[Job]) -> Vec<Job> {
        jobs.iter().filter(|job| self.matches(job)).cloned().collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::JobType;

    pub(crate) fn job(id: &str, title: &str, company: &str, location: &str, job_type: JobType) -> Job {
        Job {
            id: id.to_string(),
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            job_type,
            salary: Some("10 - 12".to_string()),
            description: format!("{} role at {}", title, company),
            skills: None,
            education: None,
            created_at: None,
        }
    }

    fn sample() -> Vec<Job> {
        let mut rust = job("3", "Platform Engineer", "Initech", "Pune", JobType::Contract);
        rust.skills = Some("Rust, Kubernetes".to_string());
        vec![
            job("1", "Backend Engineer", "Acme", "Remote", JobType::FullTime),
            job("2", "Designer", "Acme", "Pune", JobType::FullTime),
            rust,
        ]
    }

    #[test]
    fn empty_and_sentinel_filters_show_everything() {
        let jobs = sample();
        assert_eq!(JobFilter::new().apply(&jobs), jobs);

        let sentinel = JobFilter::new()
            .with_location(ALL_LOCATIONS)
            .with_job_type(ALL_JOB_TYPES);
        assert!(sentinel.is_empty());
        assert_eq!(sentinel.apply(&jobs), jobs);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let jobs = sample();
        let visible = JobFilter::new().with_search("backend").apply(&jobs);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Backend Engineer");
    }

    #[test]
    fn search_covers_company_description_and_skills() {
        let jobs = sample();
        assert_eq!(JobFilter::new().with_search("ACME").apply(&jobs).len(), 2);
        assert_eq!(JobFilter::new().with_search("role at initech").apply(&jobs).len(), 1);
        let by_skill = JobFilter::new().with_search("kubernetes").apply(&jobs);
        assert_eq!(by_skill.len(), 1);
        assert_eq!(by_skill[0].id, "3");
    }

    #[test]
    fn location_only_ignores_type() {
        let jobs = sample();
        let visible = JobFilter::new().with_location("Pune").with_job_type("").apply(&jobs);
        let ids: Vec<_> = visible.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn location_and_type_match_exactly() {
        let jobs = sample();
        let visible = JobFilter::new()
            .with_location("Pune")
            .with_job_type("Contract")
            .apply(&jobs);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "3");

        // exact match, no case folding on selectors
        assert!(JobFilter::new().with_location("pune").apply(&jobs).is_empty());
    }

    #[test]
    fn filtering_is_a_pure_idempotent_subset() {
        let jobs = sample();
        let before = jobs.clone();
        let filter = JobFilter::new().with_search("e").with_location("Pune");

        let once = filter.apply(&jobs);
        let twice = filter.apply(&once);

        assert_eq!(once, twice);
        assert_eq!(jobs, before);
        assert!(once.iter().all(|j| jobs.contains(j)));
    }
}
