use payloads::{APIClient, JobId};
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
mod logs;
mod pages;
mod state;
mod utils;

pub use state::{AuthState, State};

use components::layout::MainLayout;
use contexts::toast::ToastProvider;
use hooks::use_session;
use pages::{
    JobDetailPage, JobListingPage, LandingPage, MyJobsPage, NotFoundPage,
    OnboardingPage, PostJobPage, SavedJobsPage,
};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            // Fallback to same origin (current setup)
            let window = web_sys::window().unwrap();
            let location = window.location();
            location.origin().unwrap()
        });

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <ToastProvider>
                <AppContent />
            </ToastProvider>
        </BrowserRouter>
    }
}

/// Lives under the router and the toast provider so pages can use both;
/// resolves the session once on startup.
#[function_component]
fn AppContent() -> Html {
    use_session();

    html! {
        <MainLayout>
            <Switch<Route> render={switch} />
        </MainLayout>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/onboarding")]
    Onboarding,
    #[at("/jobs")]
    Jobs,
    #[at("/jobs/:id")]
    JobDetail { id: JobId },
    #[at("/post-job")]
    PostJob,
    #[at("/saved-jobs")]
    SavedJobs,
    #[at("/my-jobs")]
    MyJobs,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <LandingPage /> },
        Route::Onboarding => html! { <OnboardingPage /> },
        Route::Jobs => html! { <JobListingPage /> },
        Route::JobDetail { id } => html! { <JobDetailPage id={id} /> },
        Route::PostJob => html! { <PostJobPage /> },
        Route::SavedJobs => html! { <SavedJobsPage /> },
        Route::MyJobs => html! { <MyJobsPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
