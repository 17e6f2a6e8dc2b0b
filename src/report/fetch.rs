use chrono::NaiveDate;
use tracing::info;

use crate::{
    api::{
        entities::{Member, TeamReportRaw},
        ApiClient, Params,
    },
    utils::{clock::Clock, time::date_to_param},
};

use super::ReportError;

const TEAM_REPORT_ENDPOINT: &str = "custom/by_member/team";

/// Range of days a report covers. `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn for_day(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day.succ_opt().expect("End of time should never happen"),
        }
    }

    pub fn yesterday(clock: &impl Clock) -> Self {
        let today = clock.today();
        Self {
            start: today.pred_opt().expect("Beginning of time should never happen"),
            end: today,
        }
    }

    /// Explicit day when given, yesterday otherwise.
    pub fn for_day_or_yesterday(day: Option<NaiveDate>, clock: &impl Clock) -> Self {
        day.map_or_else(|| Self::yesterday(clock), Self::for_day)
    }
}

fn team_report_params(organization_id: u64, window: DateWindow, members: &[Member]) -> Params {
    let users = members
        .iter()
        .map(|member| member.id.to_string())
        .collect::<Vec<_>>()
        .join(",");

    vec![
        ("start_date".into(), date_to_param(window.start)),
        ("end_date".into(), date_to_param(window.end)),
        ("organizations".into(), organization_id.to_string()),
        ("users".into(), users),
        ("show_tasks".into(), true.to_string()),
        ("show_activity".into(), true.to_string()),
    ]
}

/// Requests the per member report of an organization. An empty `members` slice means the whole
/// organization.
pub async fn fetch_team_report(
    client: &impl ApiClient,
    organization_id: u64,
    window: DateWindow,
    members: &[Member],
) -> Result<TeamReportRaw, ReportError> {
    info!(
        "Fetching report for organization {organization_id} from {} to {}",
        window.start, window.end
    );
    let body = client
        .get(
            TEAM_REPORT_ENDPOINT,
            team_report_params(organization_id, window, members),
        )
        .await?;
    Ok(serde_json::from_value(body)?)
}
