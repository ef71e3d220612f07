use reqwest::StatusCode;
use serde::Serialize;

use crate::{ApplicationId, CompanyId, JobId, requests, responses};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the data API and the identity
/// provider's session endpoints.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_post(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Session endpoints, proxied to the identity provider.
impl APIClient {
    /// Check if the user has a valid session.
    pub async fn session_check(&self) -> Result<bool, ClientError> {
        let response = self.empty_post("session_check").await?;
        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::UNAUTHORIZED => Ok(false),
            _ => Err(ClientError::APIError(
                response.status(),
                response.text().await?,
            )),
        }
    }

    /// Get the current user's profile, including their onboarded role.
    pub async fn session_profile(
        &self,
    ) -> Result<responses::UserProfile, ClientError> {
        let response = self.empty_get("session_profile").await?;
        ok_body(response).await
    }

    /// Store the role picked during onboarding and return the updated
    /// profile.
    pub async fn update_role(
        &self,
        details: &requests::UpdateRole,
    ) -> Result<responses::UserProfile, ClientError> {
        let response = self.post("update_role", details).await?;
        ok_body(response).await
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        let response = self.empty_post("logout").await?;
        ok_empty(response).await
    }

    /// URL of the identity provider's hosted sign-in page.
    pub fn sign_in_url(&self) -> String {
        format!("{}/api/sign_in", self.address)
    }
}

/// Methods on the data API
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.empty_get("health_check").await?;
        ok_empty(response).await
    }

    /// List jobs matching the given filters, joined with company and
    /// saved-state for the current user.
    pub async fn list_jobs(
        &self,
        filters: &requests::JobFilters,
    ) -> Result<Vec<responses::Job>, ClientError> {
        let response = self.post("jobs", filters).await?;
        ok_body(response).await
    }

    pub async fn get_job(
        &self,
        job_id: &JobId,
    ) -> Result<responses::JobDetail, ClientError> {
        let response = self.post("get_job", job_id).await?;
        ok_body(response).await
    }

    pub async fn create_job(
        &self,
        job: &crate::Job,
    ) -> Result<JobId, ClientError> {
        let response = self.post("create_job", job).await?;
        ok_body(response).await
    }

    pub async fn delete_job(&self, job_id: &JobId) -> Result<(), ClientError> {
        let response = self.post("delete_job", job_id).await?;
        ok_empty(response).await
    }

    /// Open or close hiring on a job (posting recruiter only).
    pub async fn update_hiring_status(
        &self,
        details: &requests::UpdateHiringStatus,
    ) -> Result<(), ClientError> {
        let response = self.post("update_hiring_status", details).await?;
        ok_empty(response).await
    }

    /// Jobs posted by the current recruiter.
    pub async fn list_my_jobs(
        &self,
    ) -> Result<Vec<responses::Job>, ClientError> {
        let response = self.empty_get("my_jobs").await?;
        ok_body(response).await
    }

    pub async fn list_companies(
        &self,
    ) -> Result<Vec<responses::Company>, ClientError> {
        let response = self.empty_get("companies").await?;
        ok_body(response).await
    }

    pub async fn create_company(
        &self,
        details: &requests::CreateCompany,
    ) -> Result<CompanyId, ClientError> {
        let response = self.post("create_company", details).await?;
        ok_body(response).await
    }

    /// Returns the URL for fetching a company's logo bytes.
    /// Use this for `<img src>` attributes in the UI.
    pub fn company_logo_url(&self, company_id: &CompanyId) -> String {
        format!("{}/api/logos/{}", self.address, company_id.0)
    }

    /// The current candidate's saved jobs.
    pub async fn list_saved_jobs(
        &self,
    ) -> Result<Vec<responses::SavedJob>, ClientError> {
        let response = self.empty_get("saved_jobs").await?;
        ok_body(response).await
    }

    /// Save or unsave a job, returning the new saved state.
    pub async fn toggle_saved_job(
        &self,
        details: &requests::ToggleSavedJob,
    ) -> Result<responses::SavedJobToggle, ClientError> {
        let response = self.post("toggle_saved_job", details).await?;
        ok_body(response).await
    }

    pub async fn apply_to_job(
        &self,
        details: &requests::ApplyToJob,
    ) -> Result<ApplicationId, ClientError> {
        let response = self.post("apply_to_job", details).await?;
        ok_body(response).await
    }

    /// The current candidate's applications, joined with job titles.
    pub async fn list_my_applications(
        &self,
    ) -> Result<Vec<responses::ApplicationWithJob>, ClientError> {
        let response = self.empty_get("my_applications").await?;
        ok_body(response).await
    }

    /// Move an application through the hiring pipeline (posting recruiter
    /// only).
    pub async fn update_application_status(
        &self,
        details: &requests::UpdateApplicationStatus,
    ) -> Result<(), ClientError> {
        let response = self.post("update_application_status", details).await?;
        ok_empty(response).await
    }

    /// Returns the URL for downloading an application's resume.
    pub fn resume_url(&self, application_id: &ApplicationId) -> String {
        format!("{}/api/resumes/{}", self.address, application_id.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
