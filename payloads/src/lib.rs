//! Shared API vocabulary for JobDeck: entity types, request/response
//! payloads, client-side validation, and the HTTP client used by the UI.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};

/// Locations offered by the posting form and the listing filter. Kept
/// client-side; the server stores whatever string it is given.
pub const LOCATIONS: [&str; 12] = [
    "Remote",
    "Austin, TX",
    "Boston, MA",
    "Chicago, IL",
    "Denver, CO",
    "London, UK",
    "New York, NY",
    "Portland, OR",
    "San Francisco, CA",
    "Seattle, WA",
    "Toronto, ON",
    "Berlin, DE",
];

/// Maximum accepted company logo upload, in bytes.
pub const MAX_LOGO_SIZE: usize = 1_048_576; // 1 MiB

/// Maximum accepted resume upload, in bytes.
pub const MAX_RESUME_SIZE: usize = 5 * 1_048_576; // 5 MiB

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct UserId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct CompanyId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct JobId(pub Uuid);

// Jobs appear in route paths, so their id parses from a path segment.
impl std::str::FromStr for JobId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(JobId(Uuid::parse_str(s)?))
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct ApplicationId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct SavedJobId(pub Uuid);

/// The role a user picked during onboarding. Stored by the identity
/// provider; a user without a role is routed to onboarding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[display("Candidate")]
    Candidate,
    #[display("Recruiter")]
    Recruiter,
}

/// Hiring pipeline stage of an application, set by the recruiter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[display("Applied")]
    Applied,
    #[display("Interviewing")]
    Interviewing,
    #[display("Hired")]
    Hired,
    #[display("Rejected")]
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Interviewing,
        ApplicationStatus::Hired,
        ApplicationStatus::Rejected,
    ];

    /// Wire value, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Interviewing => "interviewing",
            ApplicationStatus::Hired => "hired",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "applied" => Some(ApplicationStatus::Applied),
            "interviewing" => Some(ApplicationStatus::Interviewing),
            "hired" => Some(ApplicationStatus::Hired),
            "rejected" => Some(ApplicationStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    #[display("Intermediate")]
    Intermediate,
    #[display("Graduate")]
    Graduate,
    #[display("Post Graduate")]
    PostGraduate,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 3] = [
        EducationLevel::Intermediate,
        EducationLevel::Graduate,
        EducationLevel::PostGraduate,
    ];

    /// Wire value, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::Intermediate => "intermediate",
            EducationLevel::Graduate => "graduate",
            EducationLevel::PostGraduate => "post_graduate",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "intermediate" => Some(EducationLevel::Intermediate),
            "graduate" => Some(EducationLevel::Graduate),
            "post_graduate" => Some(EducationLevel::PostGraduate),
            _ => None,
        }
    }
}

/// A job posting as sent to the API on creation. Server-assigned fields
/// (id, timestamps, joins) come back in [`responses::Job`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub company_id: CompanyId,
    pub recruiter_id: UserId,
    pub title: String,
    /// One-line summary shown on cards and at the top of the detail page.
    pub description: String,
    /// Markdown. Rendered with raw HTML disabled.
    pub requirements: String,
    pub location: String,
    pub is_open: bool,
}
