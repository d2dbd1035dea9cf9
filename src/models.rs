use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// Documents exchanged with the job board service.
// The service owns the schema; fields we don't use are ignored on decode.

/// Employment type of a posting.
///
/// Serialized as the display string (`"Full-time"`, ...). Strings the
/// service sends that we don't know about are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Internship,
    Freelance,
    Remote,
    Other(String),
}

impl JobType {
    /// Types offered when posting a job.
    pub const POSTABLE: [JobType; 5] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Internship,
        JobType::Freelance,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
            JobType::Freelance => "Freelance",
            JobType::Remote => "Remote",
            JobType::Other(s) => s.as_str(),
        }
    }

    /// Next postable type, wrapping around. Used by the form selector.
    pub fn next_postable(&self) -> JobType {
        let idx = Self::POSTABLE.iter().position(|t| t == self);
        match idx {
            Some(i) => Self::POSTABLE[(i + 1) % Self::POSTABLE.len()].clone(),
            None => JobType::FullTime,
        }
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for JobType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Full-time" => JobType::FullTime,
            "Part-time" => JobType::PartTime,
            "Contract" => JobType::Contract,
            "Internship" => JobType::Internship,
            "Freelance" => JobType::Freelance,
            "Remote" => JobType::Remote,
            _ => JobType::Other(s),
        }
    }
}

impl From<&str> for JobType {
    fn from(s: &str) -> Self {
        JobType::from(s.to_string())
    }
}

impl From<JobType> for String {
    fn from(t: JobType) -> Self {
        match t {
            JobType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

/// A job posting as returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type", default)]
    pub job_type: JobType,
    #[serde(default)]
    pub salary: Option<String>,
    pub description: String,
    /// Comma separated skill tags, stored as entered
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Fields of a job that has not been created yet.
///
/// Validation rules apply to a trimmed copy, see
/// [`crate::state::create::validate_draft`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    #[validate(length(min = 1, message = "Job title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Company name is required"))]
    pub company: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    #[validate(length(min = 1, message = "Salary information is required"))]
    pub salary: String,
    #[validate(length(min = 1, message = "Job description is required"))]
    pub description: String,
    pub skills: String,
    pub education: String,
}

impl JobDraft {
    /// Copy with surrounding whitespace removed from every text field.
    pub fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: self.location.trim().to_string(),
            job_type: self.job_type.clone(),
            salary: self.salary.trim().to_string(),
            description: self.description.trim().to_string(),
            skills: self.skills.trim().to_string(),
            education: self.education.trim().to_string(),
        }
    }
}

impl From<&Job> for JobDraft {
    fn from(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            job_type: job.job_type.clone(),
            salary: job.salary.clone().unwrap_or_default(),
            description: job.description.clone(),
            skills: job.skills.clone().unwrap_or_default(),
            education: job.education.clone().unwrap_or_default(),
        }
    }
}

/// Uniform result envelope returned by every client operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
            total: None,
        }
    }

    /// Successful response that carries no document (e.g. a delete ack)
    pub fn ack(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: message.into(),
            total: None,
        }
    }

    pub fn with_total(mut self, total: usize) -> Self {
        self.total = Some(total);
        self
    }
}

/// Aggregates derived from one listing fetch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobStats {
    pub total_jobs: usize,
    pub locations: Vec<String>,
    pub companies: Vec<String>,
    pub recent_jobs: Vec<Job>,
}

/// Error body shape used by the service for rejections
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

// === Auth ===

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Token payload returned by login and registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    #[serde(default)]
    pub user: Option<serde_json::Value>,
}

// === Applications ===

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: Option<String>,
    /// Either the job id or the populated job document
    #[serde(default)]
    pub job: Option<serde_json::Value>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

// === Companies ===

/// One row of the `/companies` collection
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyRecord {
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySummary {
    pub name: String,
    pub location: String,
    pub job_count: usize,
}
