use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    ApplicationId, ApplicationStatus, CompanyId, EducationLevel, JobId,
    SavedJobId, UserId, UserRole,
};

/// The current user, as reported by the identity provider.
///
/// `role` is `None` until the user completes onboarding; the frontend
/// routes such users to the role-selection page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: UserId,
    pub full_name: String,
    pub email: String,
    pub role: Option<UserRole>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub created_at: Timestamp,
}

/// A job posting joined with everything a card or detail header renders:
/// the company, the current user's saved flag, and the applicant count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub job_id: JobId,
    pub job_details: crate::Job,
    pub company: Company,
    /// Whether the current user has saved this job.
    pub saved_by_user: bool,
    pub application_count: usize,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl std::ops::Deref for Job {
    type Target = crate::Job;

    fn deref(&self) -> &Self::Target {
        &self.job_details
    }
}

/// Job detail page payload. `applications` is populated only when the
/// requesting user is the posting recruiter; `already_applied` only when
/// the requesting user is a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetail {
    pub job: Job,
    pub applications: Vec<Application>,
    pub already_applied: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub application_id: ApplicationId,
    pub job_id: JobId,
    pub candidate_name: String,
    pub experience_years: u32,
    pub skills: String,
    pub education: EducationLevel,
    pub status: ApplicationStatus,
    pub created_at: Timestamp,
}

/// A candidate's application joined with the job it targets, for the
/// "my applications" view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationWithJob {
    pub application: Application,
    pub job_title: String,
    pub company_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedJob {
    pub saved_job_id: SavedJobId,
    pub job: Job,
    pub created_at: Timestamp,
}

/// Outcome of a save/unsave toggle: the job's new saved state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedJobToggle {
    pub saved: bool,
}
