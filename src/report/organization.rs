use tracing::{debug, info};

use crate::api::{
    entities::{Member, MemberList, OrganizationList},
    ApiClient,
};

use super::ReportError;

/// Finds id of the organization named exactly `name`. Anything other than a single match is
/// treated as an error, since the report would otherwise be built for the wrong people.
pub async fn resolve_organization_id(
    client: &impl ApiClient,
    name: &str,
) -> Result<u64, ReportError> {
    let body = client.get("organizations", vec![]).await?;
    let organizations = serde_json::from_value::<OrganizationList>(body)?.organizations;

    let matching = organizations
        .into_iter()
        .filter(|organization| organization.name == name)
        .collect::<Vec<_>>();

    match matching.as_slice() {
        [organization] => {
            info!("Resolved organization '{name}' to {}", organization.id);
            Ok(organization.id)
        }
        [] => Err(ReportError::OrganizationNotFound { name: name.into() }),
        _ => Err(ReportError::AmbiguousOrganization {
            name: name.into(),
            count: matching.len(),
        }),
    }
}

/// Lists members of an organization. A body without `users` means there are no members.
pub async fn organization_members(
    client: &impl ApiClient,
    organization_id: u64,
) -> Result<Vec<Member>, ReportError> {
    let body = client
        .get(&format!("organizations/{organization_id}/members"), vec![])
        .await?;
    let members = serde_json::from_value::<MemberList>(body)?.users;
    debug!("Organization {organization_id} has {} members", members.len());
    Ok(members)
}
