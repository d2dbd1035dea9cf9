//! UI State Machines
//!
//! One machine per screen. Each owns its state exclusively and guards its
//! async completions with a [`RequestTracker`] so the newest request wins.

pub mod create;
pub mod detail;
pub mod lifecycle;
pub mod listing;

pub use create::{validate_draft, CreateJobForm, FormField, BANNER_WINDOW, EDUCATION_LEVELS, SUBMIT_FALLBACK};
pub use detail::{DetailState, DetailView, DETAIL_ERROR};
pub use lifecycle::{Generation, Lifecycle, RequestTracker};
pub use listing::{ListingState, LISTING_ERROR};
