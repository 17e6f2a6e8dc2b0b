//! Shapes of the JSON bodies returned by the API. Only the fields the report needs are
//! declared, everything else is ignored during deserialization.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Organization {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrganizationList {
    pub organizations: Vec<Organization>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Member {
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemberList {
    #[serde(default)]
    pub users: Vec<Member>,
}

/// Body of `custom/by_member/team`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamReportRaw {
    #[serde(default)]
    pub organizations: Vec<ReportOrganization>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportOrganization {
    #[serde(default)]
    pub users: Vec<ReportUser>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportUser {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub dates: Vec<ReportDate>,
}

/// Durations are in seconds. The API may send them as whole or fractional numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportDate {
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub projects: Vec<ReportProject>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportProject {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub duration: f64,
}
