pub mod add_company_modal;
pub mod application_card;
pub mod apply_job_form;
pub mod dark_mode_toggle;
pub mod file_upload;
pub mod job_card;
pub mod layout;
pub mod markdown_text;
pub mod modal;
pub mod require_auth;
pub mod toast_container;

pub use add_company_modal::AddCompanyModal;
pub use application_card::ApplicationCard;
pub use apply_job_form::ApplyJobForm;
pub use dark_mode_toggle::DarkModeToggle;
pub use file_upload::FileUploadInput;
pub use job_card::JobCard;
pub use markdown_text::MarkdownText;
pub use modal::Modal;
pub use require_auth::RequireAuth;
pub use toast_container::ToastContainer;
