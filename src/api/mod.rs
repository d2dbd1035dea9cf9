//! Remote Service Clients
//!
//! Thin wrappers over the job board REST API (`/api` base path):
//!
//! - [`JobServiceClient`] - `/jobs` collection, behind the [`JobApi`] trait
//! - [`AuthClient`] - `/auth/login`, `/auth/register`, `/users/profile`
//! - [`ApplicationClient`] - `/applications/...` (bearer token)
//! - [`CompanyClient`] - `/companies`, `/companies/details/{name}`
//!
//! Every operation returns an [`ApiResponse`](crate::models::ApiResponse)
//! envelope or a [`ClientError`](crate::types::ClientError).

pub mod applications;
pub mod auth;
pub mod client;
pub mod companies;
pub mod http;
pub mod provider;

pub use applications::ApplicationClient;
pub use auth::AuthClient;
pub use client::JobServiceClient;
pub use companies::CompanyClient;
pub use http::RemoteService;
pub use provider::{summarize, JobApi, RECENT_JOBS};
