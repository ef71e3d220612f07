use serde::{Deserialize, Serialize};

use crate::{
    ApplicationId, ApplicationStatus, CompanyId, EducationLevel, JobId,
    UserRole,
};

pub const JOB_TITLE_MAX_LEN: usize = 120;
pub const COMPANY_NAME_MAX_LEN: usize = 255;
pub const SKILLS_MAX_LEN: usize = 500;
pub const EXPERIENCE_MAX_YEARS: u32 = 50;

/// Resume uploads accepted by the application form.
pub const ALLOWED_RESUME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Logo uploads accepted by the company form.
pub const ALLOWED_LOGO_TYPES: [&str; 2] = ["image/png", "image/jpeg"];

/// Validation result for a job posting form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobValidation {
    Valid,
    TitleMissing,
    TitleTooLong,
    DescriptionMissing,
    RequirementsMissing,
    LocationMissing,
    CompanyMissing,
}

impl JobValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::TitleMissing => Some("Title is required"),
            Self::TitleTooLong => {
                Some("Title must be at most 120 characters")
            }
            Self::DescriptionMissing => Some("Description is required"),
            Self::RequirementsMissing => Some("Requirements are required"),
            Self::LocationMissing => Some("Select a location"),
            Self::CompanyMissing => Some("Select or add a company"),
        }
    }
}

/// Validate a job posting before submission. The same checks run
/// server-side; these exist so the form can surface problems inline.
pub fn validate_job(
    title: &str,
    description: &str,
    requirements: &str,
    location: &str,
    company_id: Option<CompanyId>,
) -> JobValidation {
    if title.trim().is_empty() {
        return JobValidation::TitleMissing;
    }
    if title.len() > JOB_TITLE_MAX_LEN {
        return JobValidation::TitleTooLong;
    }
    if description.trim().is_empty() {
        return JobValidation::DescriptionMissing;
    }
    if requirements.trim().is_empty() {
        return JobValidation::RequirementsMissing;
    }
    if location.trim().is_empty() {
        return JobValidation::LocationMissing;
    }
    if company_id.is_none() {
        return JobValidation::CompanyMissing;
    }
    JobValidation::Valid
}

/// Validation result for an application form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationValidation {
    Valid,
    ExperienceMissing,
    ExperienceTooLarge,
    SkillsMissing,
    EducationMissing,
    ResumeMissing,
    ResumeWrongType,
    ResumeTooLarge,
}

impl ApplicationValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::ExperienceMissing => {
                Some("Enter your years of experience")
            }
            Self::ExperienceTooLarge => {
                Some("Experience must be at most 50 years")
            }
            Self::SkillsMissing => Some("Skills are required"),
            Self::EducationMissing => Some("Select an education level"),
            Self::ResumeMissing => Some("Attach a resume"),
            Self::ResumeWrongType => {
                Some("Only PDF or Word documents are allowed")
            }
            Self::ResumeTooLarge => Some("Resume must be at most 5MB"),
        }
    }
}

pub fn validate_application(
    experience_years: Option<u32>,
    skills: &str,
    education: Option<EducationLevel>,
    resume_type: Option<&str>,
    resume_size: Option<usize>,
) -> ApplicationValidation {
    let Some(years) = experience_years else {
        return ApplicationValidation::ExperienceMissing;
    };
    if years > EXPERIENCE_MAX_YEARS {
        return ApplicationValidation::ExperienceTooLarge;
    }
    if skills.trim().is_empty() {
        return ApplicationValidation::SkillsMissing;
    }
    if education.is_none() {
        return ApplicationValidation::EducationMissing;
    }
    let (Some(mime), Some(size)) = (resume_type, resume_size) else {
        return ApplicationValidation::ResumeMissing;
    };
    if !ALLOWED_RESUME_TYPES.contains(&mime) {
        return ApplicationValidation::ResumeWrongType;
    }
    if size > crate::MAX_RESUME_SIZE {
        return ApplicationValidation::ResumeTooLarge;
    }
    ApplicationValidation::Valid
}

/// Validation result for the add-company form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyValidation {
    Valid,
    NameMissing,
    NameTooLong,
    LogoMissing,
    LogoWrongType,
    LogoTooLarge,
}

impl CompanyValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::NameMissing => Some("Company name is required"),
            Self::NameTooLong => {
                Some("Company name must be at most 255 characters")
            }
            Self::LogoMissing => Some("Attach a logo"),
            Self::LogoWrongType => Some("Only PNG or JPEG images are allowed"),
            Self::LogoTooLarge => Some("Logo must be at most 1MB"),
        }
    }
}

pub fn validate_company(
    name: &str,
    logo_type: Option<&str>,
    logo_size: Option<usize>,
) -> CompanyValidation {
    if name.trim().is_empty() {
        return CompanyValidation::NameMissing;
    }
    if name.len() > COMPANY_NAME_MAX_LEN {
        return CompanyValidation::NameTooLong;
    }
    let (Some(mime), Some(size)) = (logo_type, logo_size) else {
        return CompanyValidation::LogoMissing;
    };
    if !ALLOWED_LOGO_TYPES.contains(&mime) {
        return CompanyValidation::LogoWrongType;
    }
    if size > crate::MAX_LOGO_SIZE {
        return CompanyValidation::LogoTooLarge;
    }
    CompanyValidation::Valid
}

/// Filters applied to the job listing. All fields optional; the server
/// treats a missing field as "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFilters {
    pub search_query: Option<String>,
    pub location: Option<String>,
    pub company_id: Option<CompanyId>,
}

impl JobFilters {
    pub fn is_empty(&self) -> bool {
        self.search_query.is_none()
            && self.location.is_none()
            && self.company_id.is_none()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateRole {
    pub role: UserRole,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateHiringStatus {
    pub job_id: JobId,
    pub is_open: bool,
}

/// Toggles the saved state of a job for the current user. `currently_saved`
/// tells the server which direction the toggle goes, so a stale click
/// cannot double-save.
#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleSavedJob {
    pub job_id: JobId,
    pub currently_saved: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApplyToJob {
    pub job_id: JobId,
    pub candidate_name: String,
    pub experience_years: u32,
    pub skills: String,
    pub education: EducationLevel,
    pub resume_filename: String,
    pub resume_data: Vec<u8>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateApplicationStatus {
    pub application_id: ApplicationId,
    pub status: ApplicationStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateCompany {
    pub name: String,
    pub logo_data: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_validation_requires_each_field() {
        let company = Some(CompanyId(uuid::Uuid::new_v4()));
        assert_eq!(
            validate_job("", "d", "r", "l", company),
            JobValidation::TitleMissing
        );
        assert_eq!(
            validate_job("t", " ", "r", "l", company),
            JobValidation::DescriptionMissing
        );
        assert_eq!(
            validate_job("t", "d", "", "l", company),
            JobValidation::RequirementsMissing
        );
        assert_eq!(
            validate_job("t", "d", "r", "", company),
            JobValidation::LocationMissing
        );
        assert_eq!(
            validate_job("t", "d", "r", "l", None),
            JobValidation::CompanyMissing
        );
        assert!(validate_job("t", "d", "r", "l", company).is_valid());
    }

    #[test]
    fn job_title_length_is_bounded() {
        let long = "x".repeat(JOB_TITLE_MAX_LEN + 1);
        assert_eq!(
            validate_job(&long, "d", "r", "l", None),
            JobValidation::TitleTooLong
        );
    }

    #[test]
    fn application_validation_checks_resume_type_and_size() {
        let ok = validate_application(
            Some(3),
            "Rust, SQL",
            Some(EducationLevel::Graduate),
            Some("application/pdf"),
            Some(10_000),
        );
        assert!(ok.is_valid());

        assert_eq!(
            validate_application(
                Some(3),
                "Rust",
                Some(EducationLevel::Graduate),
                Some("image/png"),
                Some(10_000),
            ),
            ApplicationValidation::ResumeWrongType
        );
        assert_eq!(
            validate_application(
                Some(3),
                "Rust",
                Some(EducationLevel::Graduate),
                Some("application/pdf"),
                Some(crate::MAX_RESUME_SIZE + 1),
            ),
            ApplicationValidation::ResumeTooLarge
        );
        assert_eq!(
            validate_application(
                Some(60),
                "Rust",
                Some(EducationLevel::Graduate),
                Some("application/pdf"),
                Some(10_000),
            ),
            ApplicationValidation::ExperienceTooLarge
        );
        assert_eq!(
            validate_application(None, "Rust", None, None, None),
            ApplicationValidation::ExperienceMissing
        );
    }

    #[test]
    fn company_validation_checks_logo() {
        assert_eq!(
            validate_company("", None, None),
            CompanyValidation::NameMissing
        );
        assert_eq!(
            validate_company("Acme", None, None),
            CompanyValidation::LogoMissing
        );
        assert_eq!(
            validate_company("Acme", Some("image/gif"), Some(10)),
            CompanyValidation::LogoWrongType
        );
        assert_eq!(
            validate_company(
                "Acme",
                Some("image/png"),
                Some(crate::MAX_LOGO_SIZE + 1)
            ),
            CompanyValidation::LogoTooLarge
        );
        assert!(
            validate_company("Acme", Some("image/png"), Some(10)).is_valid()
        );
    }
}
