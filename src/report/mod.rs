//! Everything between the raw API and the final HTML page:
//!  - [organization] finds the organization the report is built for.
//!  - [fetch] requests the team report for a [fetch::DateWindow].
//!  - [aggregate] reshapes the report into per user, per project durations.
//!  - [render] turns the aggregation into an HTML table.

pub mod aggregate;
pub mod fetch;
pub mod organization;
pub mod render;

use thiserror::Error;

use crate::api::ApiError;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Organization '{name}' was not found")]
    OrganizationNotFound { name: String },
    #[error("Organization name '{name}' matches {count} organizations")]
    AmbiguousOrganization { name: String, count: usize },
}
