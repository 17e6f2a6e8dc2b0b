//! Builds a table of the time members of an organization tracked on each project and saves it
//! as a plain HTML page. The data is pulled from a time tracking REST API.
//!

pub mod api;
pub mod cli;
pub mod config;
pub mod report;
pub mod utils;
