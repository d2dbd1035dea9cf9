//! Command line interface
//!
//! Without a subcommand the terminal UI starts. Every other subcommand runs
//! one request and prints plain text.

use crate::api::{ApplicationClient, AuthClient, CompanyClient, JobApi, JobServiceClient, RemoteService};
use crate::config::Config;
use crate::filter::JobFilter;
use crate::format::{long_date, relative_age, salary_label, skill_tags};
use crate::models::{ApplicationDraft, AuthSession, Credentials, Job, JobDraft, Registration};
use crate::navigation::Route;
use crate::settings::{Session, SessionStore, TokenCredentials};
use crate::state::{validate_draft, DetailState, DetailView, Lifecycle, ListingState, LISTING_ERROR, SUBMIT_FALLBACK};
use crate::tui::theme::company_icon;
use crate::utils::LogTarget;
use anyhow::{anyhow, bail, Context as _, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "jobboard", version)]
#[command(about = "Browse, filter and post jobs on the job board service", long_about = None)]
pub struct Cli {
    /// Service base URL (overrides JOBBOARD_API_URL)
    #[arg(long = "api-url", global = true)]
    pub api_url: Option<String>,

    /// Bearer token (overrides the saved session and JOBBOARD_TOKEN)
    #[arg(long = "token", global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the terminal UI (default)
    Tui {
        /// Initial screen: /, /create-job or /job/<id>
        #[arg(long, default_value = "/")]
        route: String,
    },
    /// List jobs, optionally filtered
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long = "job-type")]
        job_type: Option<String>,
    },
    /// Show one job
    Show { id: String },
    /// Totals, locations, companies and the newest postings
    Stats,
    /// Post a new job
    Post(PostArgs),
    /// Log in and save the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "JOBBOARD_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and save the session
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "JOBBOARD_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the saved session
    Logout,
    /// Show the profile behind the current token
    Profile,
    /// Apply to a job
    Apply {
        job_id: String,
        #[arg(long = "cover-letter")]
        cover_letter: Option<String>,
        #[arg(long = "resume-url")]
        resume_url: Option<String>,
    },
    /// Applications of the logged in user
    Applications,
    /// Companies with their number of postings
    Companies,
    /// Raw details of one company
    Company { name: String },
}

#[derive(Args, Debug, Clone)]
pub struct PostArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub company: String,
    #[arg(long)]
    pub location: String,
    #[arg(long = "type", default_value = "Full-time")]
    pub job_type: String,
    #[arg(long)]
    pub salary: String,
    #[arg(long)]
    pub description: String,
    /// Comma separated
    #[arg(long, default_value = "")]
    pub skills: String,
    #[arg(long, default_value = "")]
    pub education: String,
}

impl From<PostArgs> for JobDraft {
    fn from(args: PostArgs) -> Self {
        Self {
            title: args.title,
            company: args.company,
            location: args.location,
            job_type: args.job_type.into(),
            salary: args.salary,
            description: args.description,
            skills: args.skills,
            education: args.education,
        }
    }
}

impl Cli {
    /// The TUI owns the terminal, so it logs to a file
    pub fn log_target(&self) -> LogTarget {
        match self.command {
            None | Some(Command::Tui { .. }) => LogTarget::File,
            Some(_) => LogTarget::Stderr,
        }
    }
}

/// Shared clients and the session they authenticate with
pub struct Context {
    pub config: Config,
    pub credentials: TokenCredentials,
    pub store: SessionStore,
    pub service: RemoteService,
    /// Email of the loaded session, if any
    pub account: Option<String>,
}

impl Context {
    /// Load the saved session and build the HTTP service.
    ///
    /// A token from the environment or command line wins over the saved one.
    pub async fn new(config: Config) -> Result<Self> {
        let store = SessionStore::new(&config.storage.data_dir);
        let session = match store.load().await {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable session");
                None
            }
        };

        let account = session.as_ref().and_then(|s| s.email.clone());
        let token = config
            .api
            .token
            .clone()
            .or_else(|| session.map(|s| s.token));
        let credentials = TokenCredentials::new(token);
        let service = RemoteService::from_config(&config.api, Arc::new(credentials.clone()))
            .context("Failed to build HTTP client")?;

        Ok(Self {
            config,
            credentials,
            store,
            service,
            account,
        })
    }

    pub fn jobs(&self) -> JobServiceClient {
        JobServiceClient::new(self.service.clone())
    }

    async fn remember(&mut self, session: AuthSession, email: &str) -> Result<()> {
        self.store
            .save(&Session::new(session.token.clone(), Some(email.to_string())))
            .await?;
        self.credentials.set(Some(session.token));
        self.account = Some(email.to_string());
        Ok(())
    }
}

/// Run a one-shot subcommand. `Tui` and `None` are handled by the binary.
pub async fn run(command: Command, ctx: &mut Context) -> Result<()> {
    match command {
        Command::Tui { .. } => bail!("the terminal UI is started by the binary"),
        Command::List {
            search,
            location,
            job_type,
        } => {
            let filter = JobFilter::new()
                .with_search(search.unwrap_or_default())
                .with_location(location.unwrap_or_default())
                .with_job_type(job_type.unwrap_or_default());
            list(&ctx.jobs(), filter).await
        }
        Command::Show { id } => show(&ctx.jobs(), &id).await,
        Command::Stats => stats(&ctx.jobs()).await,
        Command::Post(args) => post(&ctx.jobs(), args.into()).await,
        Command::Login { email, password } => {
            let auth = AuthClient::new(ctx.service.clone());
            let response = auth
                .login(&Credentials {
                    email: email.clone(),
                    password,
                })
                .await
                .map_err(|e| anyhow!(e.user_message("Failed to authenticate")))?;
            let session = response.data.ok_or_else(|| anyhow!("Login returned no token"))?;
            ctx.remember(session, &email).await?;
            println!("Logged in as {}", email);
            Ok(())
        }
        Command::Register {
            name,
            email,
            password,
        } => {
            let auth = AuthClient::new(ctx.service.clone());
            let response = auth
                .register(&Registration {
                    name,
                    email: email.clone(),
                    password,
                })
                .await
                .map_err(|e| anyhow!(e.user_message("Failed to register user")))?;
            let session = response
                .data
                .ok_or_else(|| anyhow!("Registration returned no token"))?;
            ctx.remember(session, &email).await?;
            println!("Registered and logged in as {}", email);
            Ok(())
        }
        Command::Logout => {
            ctx.store.clear().await?;
            ctx.credentials.set(None);
            ctx.account = None;
            println!("Logged out");
            Ok(())
        }
        Command::Profile => {
            let auth = AuthClient::new(ctx.service.clone());
            let response = auth
                .user_profile()
                .await
                .map_err(|e| anyhow!(e.user_message("Failed to fetch user profile")))?;
            let profile = response.data.unwrap_or_default();
            println!("{}", serde_json::to_string_pretty(&profile)?);
            Ok(())
        }
        Command::Apply {
            job_id,
            cover_letter,
            resume_url,
        } => {
            let client = ApplicationClient::new(ctx.service.clone());
            let draft = ApplicationDraft {
                cover_letter,
                resume_url,
            };
            let response = client
                .apply(&job_id, &draft)
                .await
                .map_err(|e| anyhow!(e.user_message("Failed to submit application")))?;
            println!("{}", response.message);
            Ok(())
        }
        Command::Applications => {
            let client = ApplicationClient::new(ctx.service.clone());
            let response = client
                .my_applications()
                .await
                .map_err(|e| anyhow!(e.user_message("Failed to fetch applications")))?;
            let applications = response.data.unwrap_or_default();
            println!("{} applications", applications.len());
            for application in applications {
                let job = match &application.job {
                    Some(serde_json::Value::Object(doc)) => doc
                        .get("title")
                        .and_then(|t| t.as_str())
                        .unwrap_or("-")
                        .to_string(),
                    Some(serde_json::Value::String(id)) => id.clone(),
                    _ => "-".to_string(),
                };
                let status = application.status.as_deref().unwrap_or("pending");
                match application.created_at {
                    Some(at) => println!("  {:<40} {:<12} {}", job, status, long_date(at)),
                    None => println!("  {:<40} {}", job, status),
                }
            }
            Ok(())
        }
        Command::Companies => {
            let client = CompanyClient::new(ctx.service.clone());
            let response = client.list_companies().await?;
            for company in response.data.unwrap_or_default() {
                println!(
                    "{} {:<30} {:<15} {} jobs",
                    company_icon(&company.name),
                    company.name,
                    company.location,
                    company.job_count
                );
            }
            Ok(())
        }
        Command::Company { name } => {
            let client = CompanyClient::new(ctx.service.clone());
            let response = client.company_details(&name).await?;
            let details = response.data.unwrap_or_default();
            println!("{}", serde_json::to_string_pretty(&details)?);
            Ok(())
        }
    }
}

/// Parse the `--route` argument of the `tui` subcommand
pub fn parse_route(path: &str) -> Result<Route> {
    Route::parse(path).ok_or_else(|| anyhow!("unknown route: {}", path))
}

async fn list(api: &dyn JobApi, filter: JobFilter) -> Result<()> {
    let mut listing = ListingState::new();
    listing.set_filter(filter);
    listing.refresh(api).await;

    if listing.lifecycle() == Lifecycle::Failed {
        bail!(LISTING_ERROR);
    }

    let visible = listing.visible();
    println!("{} jobs found", visible.len());
    for job in visible {
        print_summary(job);
    }
    Ok(())
}

async fn show(api: &dyn JobApi, id: &str) -> Result<()> {
    let mut detail = DetailState::new();
    detail.fetch(api, id).await;

    match detail.view() {
        DetailView::Found(job) => {
            print_detail(job);
            Ok(())
        }
        DetailView::Failed(message) => bail!("{}", message),
        DetailView::NotFound => bail!("Job not found"),
        DetailView::Idle | DetailView::Loading => bail!("No job id given"),
    }
}

async fn stats(api: &dyn JobApi) -> Result<()> {
    let response = api.get_job_stats().await.map_err(|e| {
        warn!(error = %e, "Error fetching job stats");
        anyhow!(LISTING_ERROR)
    })?;
    let Some(stats) = response.data else {
        bail!(LISTING_ERROR);
    };

    println!("Total jobs: {}", stats.total_jobs);
    println!("Locations:  {}", stats.locations.join(", "));
    println!("Companies:  {}", stats.companies.join(", "));
    println!("Recent:");
    for job in &stats.recent_jobs {
        print_summary(job);
    }
    Ok(())
}

async fn post(api: &dyn JobApi, draft: JobDraft) -> Result<()> {
    let errors = validate_draft(&draft);
    if !errors.is_empty() {
        for (field, message) in &errors {
            eprintln!("{}: {}", field.name(), message);
        }
        bail!("job draft is incomplete");
    }

    let response = api
        .create_job(&draft.trimmed())
        .await
        .map_err(|e| anyhow!(e.user_message(SUBMIT_FALLBACK)))?;
    if let Some(job) = &response.data {
        info!(job_id = %job.id, "Job posted");
        println!("{} ({})", response.message, job.id);
    } else {
        println!("{}", response.message);
    }
    Ok(())
}

fn print_summary(job: &Job) {
    let mut line = format!(
        "{} {}  [{}]  {} · {} · {}",
        company_icon(&job.company),
        job.id,
        job.job_type,
        job.title,
        job.company,
        job.location
    );
    if let Some(salary) = job.salary.as_deref().filter(|s| !s.is_empty()) {
        line.push_str(&format!(" · {}", salary_label(salary)));
    }
    if let Some(created) = job.created_at {
        line.push_str(&format!(" · {}", relative_age(created, Utc::now())));
    }
    println!("{}", line);
}

fn print_detail(job: &Job) {
    println!("{} {}", company_icon(&job.company), job.title);
    println!("{} · {} · {}", job.company, job.location, job.job_type);
    if let Some(salary) = job.salary.as_deref().filter(|s| !s.is_empty()) {
        println!("Salary: {}", salary_label(salary));
    }
    if let Some(created) = job.created_at {
        println!("Posted: {}", long_date(created));
    }
    println!();
    println!("{}", job.description);
    if let Some(skills) = job.skills.as_deref() {
        let tags = skill_tags(skills);
        if !tags.is_empty() {
            println!();
            println!("Skills: {}", tags.join(", "));
        }
    }
    if let Some(education) = job.education.as_deref().filter(|e| !e.is_empty()) {
        println!("Education: {}", education);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiConfig, StorageConfig, UiConfig};
    use crate::models::JobType;
    use crate::state::listing::tests::FakeApi;
    use std::path::Path;

    fn config(base_url: &str, data_dir: &Path) -> Config {
        Config {
            api: ApiConfig {
                base_url: base_url.to_string(),
                timeout_secs: 5,
                token: None,
            },
            storage: StorageConfig {
                data_dir: data_dir.to_path_buf(),
                log_dir: data_dir.join("logs"),
            },
            ui: UiConfig { banner_secs: 5, tick_rate_ms: 100 },
        }
    }

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["jobboard"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_target(), LogTarget::File);
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from([
            "jobboard",
            "list",
            "--location",
            "Pune",
            "--api-url",
            "http://localhost:5000/api",
        ])
        .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:5000/api"));
        assert_eq!(cli.log_target(), LogTarget::Stderr);
        match cli.command {
            Some(Command::List { location, .. }) => assert_eq!(location.as_deref(), Some("Pune")),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn post_args_become_draft() {
        let cli = Cli::try_parse_from([
            "jobboard", "post", "--title", "Designer", "--company", "Acme", "--location", "Pune",
            "--salary", "8 - 10", "--description", "Design things", "--type", "Contract",
        ])
        .unwrap();
        let Some(Command::Post(args)) = cli.command else {
            panic!("expected post");
        };
        let draft = JobDraft::from(args);
        assert_eq!(draft.job_type, JobType::Contract);
        assert!(draft.skills.is_empty());
        assert!(validate_draft(&draft).is_empty());
    }

    #[test]
    fn tui_route_must_be_known() {
        assert_eq!(parse_route("/job/42").unwrap(), Route::Job("42".into()));
        assert!(parse_route("/nope").is_err());
    }

    #[tokio::test]
    async fn post_refuses_incomplete_draft_without_calling_service() {
        let api = FakeApi::default();
        let draft = JobDraft {
            title: "Designer".into(),
            ..Default::default()
        };
        assert!(post(&api, draft).await.is_err());
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn show_reports_fixed_message_for_missing_job() {
        let api = FakeApi::default();
        let err = show(&api, "ghost").await.unwrap_err();
        assert_eq!(err.to_string(), "Job not found or failed to load");
    }

    #[tokio::test]
    async fn stats_failure_reports_listing_message() {
        let api = FakeApi {
            fail_list: Some(crate::types::ClientError::Http { status: 503, message: None }),
            ..Default::default()
        };
        let err = stats(&api).await.unwrap_err();
        assert_eq!(err.to_string(), LISTING_ERROR);
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn login_saves_session_and_sets_token() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/auth/login")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"token":"abc123","user":{"name":"Asha"}}"#)
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let mut ctx = Context::new(config(&format!("{}/api", server.url()), dir.path()))
            .await
            .unwrap();

        run(
            Command::Login {
                email: "asha@example.com".into(),
                password: "secret".into(),
            },
            &mut ctx,
        )
        .await
        .unwrap();

        let saved = ctx.store.load().await.unwrap().unwrap();
        assert_eq!(saved.token, "abc123");
        assert_eq!(ctx.account.as_deref(), Some("asha@example.com"));

        // a fresh context picks the saved session up
        let ctx = Context::new(config(&format!("{}/api", server.url()), dir.path()))
            .await
            .unwrap();
        assert_eq!(ctx.account.as_deref(), Some("asha@example.com"));

        let mut ctx = ctx;
        run(Command::Logout, &mut ctx).await.unwrap();
        assert!(ctx.store.load().await.unwrap().is_none());
    }
}
