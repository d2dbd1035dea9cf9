//! TUI Widgets
//!
//! One renderer per screen plus the shared lifecycle indicator.

mod job_detail;
mod job_form;
mod job_list;
mod status;

pub use job_detail::render_job_detail;
pub use job_form::render_job_form;
pub use job_list::render_job_list;
pub use status::{lifecycle_span, render_message};
