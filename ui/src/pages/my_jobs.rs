use payloads::{UserRole, responses};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    Route,
    components::{ApplicationCard, JobCard, RequireAuth},
    hooks::{use_my_applications, use_my_jobs, use_title},
};

/// Candidates see their applications here; recruiters see their
/// postings.
#[function_component]
pub fn MyJobsPage() -> Html {
    let render_content =
        Callback::from(move |profile: responses::UserProfile| {
            match profile.role {
                Some(UserRole::Candidate) => {
                    html! { <MyApplications /> }
                }
                Some(UserRole::Recruiter) => html! { <MyPostedJobs /> },
                None => {
                    html! { <Redirect<Route> to={Route::Onboarding} /> }
                }
            }
        });

    html! {
        <RequireAuth render={render_content} />
    }
}

#[function_component]
fn MyApplications() -> Html {
    use_title("My Applications - JobDeck".to_string());
    let applications = use_my_applications();

    html! {
        <div>
            <h1 class="text-3xl font-bold text-center text-neutral-900
                       dark:text-neutral-100 mb-8">
                {"My Applications"}
            </h1>

            {applications.render(
                "applications",
                |applications, is_loading, error| html! {
                    <div>
                        if is_loading {
                            <p class="text-sm text-neutral-500
                                      dark:text-neutral-400 mb-4">
                                {"Refreshing..."}
                            </p>
                        }
                        if let Some(error) = error {
                            <div class="mb-4 p-3 rounded-md bg-red-50
                                        dark:bg-red-900/20 border
                                        border-red-200
                                        dark:border-red-800">
                                <p class="text-sm text-red-700
                                          dark:text-red-400">
                                    {error}
                                </p>
                            </div>
                        }
                        if applications.is_empty() {
                            <p class="text-center py-12 text-neutral-600
                                      dark:text-neutral-400">
                                {"No applications yet"}
                            </p>
                        } else {
                            <div class="space-y-4">
                                {for applications.iter().map(|entry| {
                                    let title = format!(
                                        "{} at {}",
                                        entry.job_title,
                                        entry.company_name
                                    );
                                    html! {
                                        <ApplicationCard
                                            key={entry
                                                .application
                                                .application_id
                                                .to_string()}
                                            application={entry
                                                .application
                                                .clone()}
                                            is_candidate={true}
                                            title={title}
                                        />
                                    }
                                })}
                            </div>
                        }
                    </div>
                },
            )}
        </div>
    }
}

#[function_component]
fn MyPostedJobs() -> Html {
    use_title("My Jobs - JobDeck".to_string());
    let my_jobs = use_my_jobs();

    let refresh = {
        let my_jobs = my_jobs.clone();
        Callback::from(move |_| my_jobs.trigger(()))
    };

    html! {
        <div>
            <h1 class="text-3xl font-bold text-center text-neutral-900
                       dark:text-neutral-100 mb-8">
                {"My Jobs"}
            </h1>

            {my_jobs.render("jobs", |jobs, is_loading, error| html! {
                <div>
                    if is_loading {
                        <p class="text-sm text-neutral-500
                                  dark:text-neutral-400 mb-4">
                            {"Refreshing..."}
                        </p>
                    }
                    if let Some(error) = error {
                        <div class="mb-4 p-3 rounded-md bg-red-50
                                    dark:bg-red-900/20 border
                                    border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700
                                      dark:text-red-400">
                                {error}
                            </p>
                        </div>
                    }
                    if jobs.is_empty() {
                        <p class="text-center py-12 text-neutral-600
                                  dark:text-neutral-400">
                            {"You have not posted any jobs yet"}
                        </p>
                    } else {
                        <div class="grid grid-cols-1 md:grid-cols-2
                                    gap-6">
                            {for jobs.iter().map(|job| html! {
                                <JobCard
                                    key={job.job_id.to_string()}
                                    job={job.clone()}
                                    is_my_job={true}
                                    on_changed={refresh.clone()}
                                />
                            })}
                        </div>
                    }
                </div>
            })}
        </div>
    }
}
