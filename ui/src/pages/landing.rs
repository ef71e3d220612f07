use payloads::requests;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::{
    Route, State,
    components::JobCard,
    get_api_client,
    hooks::{use_companies, use_jobs, use_title},
};

#[function_component]
pub fn LandingPage() -> Html {
    use_title("JobDeck".to_string());

    let (state, _) = use_store::<State>();
    let companies = use_companies();
    // Unfiltered listing; the landing page shows a small teaser of it.
    let jobs = use_jobs(requests::JobFilters::default());

    let refresh_jobs = {
        let jobs = jobs.clone();
        Callback::from(move |_| jobs.trigger(()))
    };

    let api_client = get_api_client();

    let company_strip = companies.data().filter(|list| !list.is_empty());
    let job_teaser = jobs.data().filter(|list| !list.is_empty());

    html! {
        <div>
            <section class="text-center py-16">
                <h1 class="text-4xl md:text-5xl font-bold text-neutral-900
                           dark:text-neutral-100 mb-4">
                    {"Find your next role, or your next hire"}
                </h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-400
                          mb-8 max-w-2xl mx-auto">
                    {"Browse openings, save the interesting ones, and \
                      apply with your resume. Recruiters post jobs and \
                      triage applications in one place."}
                </p>
                <div class="flex justify-center gap-4">
                    <Link<Route>
                        to={Route::Jobs}
                        classes={classes!(
                            "py-2", "px-6", "rounded-md", "text-sm",
                            "font-medium", "text-white", "bg-neutral-900",
                            "hover:bg-neutral-800", "dark:bg-neutral-100",
                            "dark:text-neutral-900",
                            "dark:hover:bg-neutral-200",
                            "transition-colors", "duration-200"
                        )}
                    >
                        {"Find Jobs"}
                    </Link<Route>>
                    if state.is_recruiter() {
                        <Link<Route>
                            to={Route::PostJob}
                            classes={classes!(
                                "py-2", "px-6", "rounded-md", "text-sm",
                                "font-medium", "border",
                                "border-neutral-300",
                                "dark:border-neutral-600",
                                "text-neutral-700",
                                "dark:text-neutral-300",
                                "hover:bg-neutral-100",
                                "dark:hover:bg-neutral-700",
                                "transition-colors", "duration-200"
                            )}
                        >
                            {"Post a Job"}
                        </Link<Route>>
                    }
                </div>
            </section>

            if let Some(companies) = company_strip {
                <section class="py-8">
                    <h2 class="text-sm font-medium uppercase tracking-wide
                               text-center text-neutral-500
                               dark:text-neutral-400 mb-6">
                        {"Hiring now"}
                    </h2>
                    <div class="flex flex-wrap justify-center items-center
                                gap-8">
                        {for companies.iter().map(|company| html! {
                            <img
                                key={company.id.to_string()}
                                src={api_client
                                    .company_logo_url(&company.id)}
                                alt={company.name.clone()}
                                title={company.name.clone()}
                                class="h-10 object-contain opacity-70
                                       hover:opacity-100
                                       transition-opacity"
                            />
                        })}
                    </div>
                </section>
            }

            if let Some(jobs) = job_teaser {
                <section class="py-8">
                    <h2 class="text-2xl font-semibold text-neutral-900
                               dark:text-neutral-100 mb-6">
                        {"Recent openings"}
                    </h2>
                    <div class="grid grid-cols-1 md:grid-cols-2
                                lg:grid-cols-3 gap-6">
                        {for jobs.iter().take(6).map(|job| html! {
                            <JobCard
                                key={job.job_id.to_string()}
                                job={job.clone()}
                                on_changed={refresh_jobs.clone()}
                            />
                        })}
                    </div>
                </section>
            }
        </div>
    }
}
