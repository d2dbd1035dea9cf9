// Job Board - terminal client for a remote job listing service

pub mod api;
pub mod cli;       // Command line subcommands
pub mod config;
pub mod filter;
pub mod format;
pub mod models;
pub mod navigation;
pub mod settings;  // Saved session and bearer token handling
pub mod state;     // Listing, detail and create-submission state machines
pub mod tui;       // Terminal User Interface
pub mod types;
pub mod utils;

// Re-exports for convenience
pub use api::{JobApi, JobServiceClient, RemoteService};
pub use config::Config;
pub use filter::JobFilter;
pub use models::{ApiResponse, Job, JobDraft, JobStats, JobType};
pub use navigation::Route;
pub use types::{ClientError, ClientResult};
