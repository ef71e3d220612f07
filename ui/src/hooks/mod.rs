pub mod async_op;
pub mod use_async;
pub mod use_companies;
pub mod use_job;
pub mod use_jobs;
pub mod use_logout;
pub mod use_my_applications;
pub mod use_my_jobs;
pub mod use_saved_jobs;
pub mod use_session;
pub mod use_title;

pub use use_async::{UseAsyncHandle, use_async, use_async_with};
pub use use_companies::use_companies;
pub use use_job::use_job;
pub use use_jobs::use_jobs;
pub use use_logout::use_logout;
pub use use_my_applications::use_my_applications;
pub use use_my_jobs::use_my_jobs;
pub use use_saved_jobs::use_saved_jobs;
pub use use_session::use_session;
pub use use_title::use_title;
