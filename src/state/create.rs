//! Create-Submission State Machine
//!
//! Form fields, per-field validation errors, the submit lifecycle and the
//! timed "job posted" banner.

use super::lifecycle::{Generation, Lifecycle, RequestTracker};
use crate::api::JobApi;
use crate::models::{ApiResponse, Job, JobDraft};
use crate::types::ClientResult;
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::task::AbortHandle;
use tracing::{debug, info, warn};
use validator::Validate;

/// Shown when a rejected submission carries no server message
pub const SUBMIT_FALLBACK: &str = "Failed to create job post. Please try again.";

/// How long the success banner stays visible
pub const BANNER_WINDOW: Duration = Duration::from_secs(5);

/// Choices offered for the optional education field
pub const EDUCATION_LEVELS: [&str; 6] = [
    "High School",
    "Associate Degree",
    "Bachelor's Degree",
    "Master's Degree",
    "PhD",
    "No Degree Required",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Title,
    Company,
    Location,
    JobType,
    Salary,
    Education,
    Description,
    Skills,
}

impl FormField {
    /// Form order
    pub const ALL: [FormField; 8] = [
        FormField::Title,
        FormField::Company,
        FormField::Location,
        FormField::JobType,
        FormField::Salary,
        FormField::Education,
        FormField::Description,
        FormField::Skills,
    ];

    /// Wire name of the field
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Company => "company",
            FormField::Location => "location",
            FormField::JobType => "type",
            FormField::Salary => "salary",
            FormField::Education => "education",
            FormField::Description => "description",
            FormField::Skills => "skills",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Job Title *",
            FormField::Company => "Company Name *",
            FormField::Location => "Location *",
            FormField::JobType => "Job Type *",
            FormField::Salary => "Salary (LPA) *",
            FormField::Education => "Education Required",
            FormField::Description => "Job Description *",
            FormField::Skills => "Required Skills",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, FormField::Education | FormField::Skills)
    }

    /// Picked from a fixed list instead of typed
    pub fn is_choice(&self) -> bool {
        matches!(self, FormField::JobType | FormField::Education)
    }
}

/// Check required fields on a trimmed copy of `draft`.
///
/// Returns one message per failing field; empty when the draft is valid.
pub fn validate_draft(draft: &JobDraft) -> BTreeMap<FormField, String> {
    let mut errors = BTreeMap::new();
    let Err(report) = draft.trimmed().validate() else {
        return errors;
    };

    for (name, field_errors) in report.field_errors() {
        let Some(field) = FormField::from_name(&*name) else {
            continue;
        };
        if let Some(message) = field_errors.iter().find_map(|e| e.message.as_ref()) {
            errors.insert(field, message.to_string());
        }
    }
    errors
}

#[derive(Debug)]
pub struct CreateJobForm {
    draft: JobDraft,
    field_errors: BTreeMap<FormField, String>,
    lifecycle: Lifecycle,
    submit_error: Option<String>,
    created: Option<Job>,
    banner: Option<u64>,
    banner_seq: u64,
    banner_window: Duration,
    timer: Option<AbortHandle>,
    tracker: RequestTracker,
}

impl Default for CreateJobForm {
    fn default() -> Self {
        Self::new(BANNER_WINDOW)
    }
}

impl CreateJobForm {
    pub fn new(banner_window: Duration) -> Self {
        Self {
            draft: JobDraft::default(),
            field_errors: BTreeMap::new(),
            lifecycle: Lifecycle::Idle,
            submit_error: None,
            created: None,
            banner: None,
            banner_seq: 0,
            banner_window,
            timer: None,
            tracker: RequestTracker::new(),
        }
    }

    pub fn draft(&self) -> &JobDraft {
        &self.draft
    }

    pub fn field_errors(&self) -> &BTreeMap<FormField, String> {
        &self.field_errors
    }

    pub fn field_error(&self, field: FormField) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Job returned by the last successful submission
    pub fn created(&self) -> Option<&Job> {
        self.created.as_ref()
    }

    pub fn banner_visible(&self) -> bool {
        self.banner.is_some()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.draft.title,
            FormField::Company => &self.draft.company,
            FormField::Location => &self.draft.location,
            FormField::JobType => self.draft.job_type.as_str(),
            FormField::Salary => &self.draft.salary,
            FormField::Education => &self.draft.education,
            FormField::Description => &self.draft.description,
            FormField::Skills => &self.draft.skills,
        }
    }

    /// Replace a field value. Any error on that field is cleared, the rest
    /// wait for the next submit attempt.
    pub fn edit(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Title => self.draft.title = value,
            FormField::Company => self.draft.company = value,
            FormField::Location => self.draft.location = value,
            FormField::JobType => self.draft.job_type = value.into(),
            FormField::Salary => self.draft.salary = value,
            FormField::Education => self.draft.education = value,
            FormField::Description => self.draft.description = value,
            FormField::Skills => self.draft.skills = value,
        }
        self.field_errors.remove(&field);
    }

    pub fn cycle_job_type(&mut self) {
        let next = self.draft.job_type.next_postable();
        self.draft.job_type = next;
        self.field_errors.remove(&FormField::JobType);
    }

    /// Step through [`EDUCATION_LEVELS`]; past the last one the field is
    /// left empty again.
    pub fn cycle_education(&mut self) {
        let current = EDUCATION_LEVELS
            .iter()
            .position(|level| *level == self.draft.education);
        self.draft.education = match current {
            None => EDUCATION_LEVELS[0].to_string(),
            Some(i) if i + 1 < EDUCATION_LEVELS.len() => EDUCATION_LEVELS[i + 1].to_string(),
            Some(_) => String::new(),
        };
        self.field_errors.remove(&FormField::Education);
    }

    /// Advance a choice field; typed fields are left alone
    pub fn cycle(&mut self, field: FormField) {
        match field {
            FormField::JobType => self.cycle_job_type(),
            FormField::Education => self.cycle_education(),
            _ => {}
        }
    }

    /// Validate and start a submission.
    ///
    /// Returns the generation and the trimmed draft to send, or `None` when
    /// validation failed or a submission is already pending. A failed
    /// validation leaves the lifecycle untouched.
    pub fn begin_submit(&mut self) -> Option<(Generation, JobDraft)> {
        if self.lifecycle.is_pending() {
            debug!("Submit ignored, already pending");
            return None;
        }

        let errors = validate_draft(&self.draft);
        if !errors.is_empty() {
            debug!(fields = errors.len(), "Job draft failed validation");
            self.field_errors = errors;
            return None;
        }

        self.field_errors.clear();
        self.submit_error = None;
        self.lifecycle = Lifecycle::Pending;
        Some((self.tracker.issue(), self.draft.trimmed()))
    }

    /// Apply a submission result. Returns false when the result was stale.
    ///
    /// On success the banner is shown and `on_expire` is scheduled with the
    /// banner token once the window elapses; hand that token back to
    /// [`expire_banner`](Self::expire_banner).
    pub fn finish_submit<F>(
        &mut self,
        generation: Generation,
        result: ClientResult<ApiResponse<Job>>,
        on_expire: F,
    ) -> bool
    where
        F: FnOnce(u64) + Send + 'static,
    {
        if !self.tracker.is_current(generation) {
            debug!(generation = generation.value(), "Dropping stale submit result");
            return false;
        }

        match result {
            Ok(response) => {
                info!(job_id = ?response.data.as_ref().map(|j| &j.id), "{}", response.message);
                self.created = response.data;
                self.draft = JobDraft::default();
                self.field_errors.clear();
                self.lifecycle = Lifecycle::Success;
                self.show_banner(on_expire);
            }
            Err(e) => {
                warn!(error = %e, "Error creating job");
                self.submit_error = Some(e.user_message(SUBMIT_FALLBACK));
                self.lifecycle = Lifecycle::Failed;
            }
        }
        true
    }

    /// Validate, send and apply in one step. Returns false when nothing was sent.
    pub async fn submit<F>(&mut self, api: &dyn JobApi, on_expire: F) -> bool
    where
        F: FnOnce(u64) + Send + 'static,
    {
        let Some((generation, draft)) = self.begin_submit() else {
            return false;
        };
        let result = api.create_job(&draft).await;
        self.finish_submit(generation, result, on_expire);
        true
    }

    /// Hide the banner if `token` still names the one on screen
    pub fn expire_banner(&mut self, token: u64) -> bool {
        if self.banner == Some(token) {
            self.banner = None;
            self.timer = None;
            true
        } else {
            false
        }
    }

    /// Clear fields, errors and the banner.
    ///
    /// A submission still in flight is not cancelled but its result will be
    /// ignored, and the form returns to idle.
    pub fn reset(&mut self) {
        self.cancel_timer();
        self.banner = None;
        self.draft = JobDraft::default();
        self.field_errors.clear();
        self.submit_error = None;
        if self.lifecycle.is_pending() {
            self.tracker.invalidate();
        }
        self.lifecycle = Lifecycle::Idle;
    }

    fn show_banner<F>(&mut self, on_expire: F)
    where
        F: FnOnce(u64) + Send + 'static,
    {
        self.cancel_timer();
        self.banner_seq += 1;
        let token = self.banner_seq;
        self.banner = Some(token);

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!(token, "No async runtime, banner stays until expired by hand");
            return;
        };
        let deadline = tokio::time::Instant::now() + self.banner_window;
        let handle = runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            on_expire(token);
        });
        self.timer = Some(handle.abort_handle());
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for CreateJobForm {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
