use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

use crate::{
    api::ApiClient,
    report::{
        aggregate::aggregate,
        fetch::{fetch_team_report, DateWindow},
        organization::{organization_members, resolve_organization_id},
        render::{DurationFormat, ReportRenderer, ReportTable},
    },
    utils::clock::Clock,
};

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub organization: String,
    /// `None` reports on yesterday.
    pub day: Option<NaiveDate>,
    pub output: PathBuf,
    pub filter_members: bool,
    pub format: DurationFormat,
}

/// Builds the whole report and writes it to `options.output`. Nothing is written unless every
/// step succeeded.
pub async fn make_report(
    client: &impl ApiClient,
    options: &ReportOptions,
    clock: &impl Clock,
) -> Result<()> {
    let organization_id = resolve_organization_id(client, &options.organization).await?;

    let members = if options.filter_members {
        organization_members(client, organization_id).await?
    } else {
        vec![]
    };

    let window = DateWindow::for_day_or_yesterday(options.day, clock);
    let report = fetch_team_report(client, organization_id, window, &members).await?;

    let (tracking, projects) = aggregate(&report);
    let table = ReportTable::build(&tracking, &projects, options.format);
    let html = ReportRenderer::with_default_template()?.render(&table)?;

    tokio::fs::write(&options.output, html)
        .await
        .with_context(|| format!("Failed to write report to {:?}", options.output))?;
    info!("Report written to {:?}", options.output);
    Ok(())
}
