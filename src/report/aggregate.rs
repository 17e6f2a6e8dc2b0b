use indexmap::IndexMap;
use tracing::debug;

use crate::api::entities::TeamReportRaw;

/// Durations a single user tracked, keyed by project id.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingEntry {
    pub user_id: u64,
    pub name: String,
    pub projects: IndexMap<u64, f64>,
}

/// Users in the order they first appeared in the report.
pub type Tracking = IndexMap<u64, TrackingEntry>;

/// Project names in the order projects first appeared in the report.
pub type ProjectIndex = IndexMap<u64, String>;

/// Reshapes a team report into per user durations plus the list of projects they touched.
///
/// Users are kept only when the durations of their dates add up to something. The value shown
/// for a project is the one from the last date it appears in, durations of earlier dates are
/// replaced rather than added.
pub fn aggregate(report: &TeamReportRaw) -> (Tracking, ProjectIndex) {
    let mut tracking = Tracking::new();
    let mut all_projects = ProjectIndex::new();

    for organization in &report.organizations {
        for user in &organization.users {
            let total_duration: f64 = user.dates.iter().map(|date| date.duration).sum();
            if total_duration == 0.0 {
                continue;
            }

            let mut projects = IndexMap::new();
            for date in &user.dates {
                for project in &date.projects {
                    all_projects.insert(project.id, project.name.clone());
                    projects.insert(project.id, project.duration);
                }
            }

            tracking.insert(
                user.id,
                TrackingEntry {
                    user_id: user.id,
                    name: user.name.clone(),
                    projects,
                },
            );
        }
    }

    debug!(
        "Aggregated {} users across {} projects",
        tracking.len(),
        all_projects.len()
    );
    (tracking, all_projects)
}
