use yew::prelude::*;

use crate::{
    components::{JobCard, RequireAuth},
    hooks::{use_saved_jobs, use_title},
};

#[function_component]
pub fn SavedJobsPage() -> Html {
    use_title("Saved Jobs - JobDeck".to_string());

    html! {
        <RequireAuth>
            <SavedJobs />
        </RequireAuth>
    }
}

#[function_component]
fn SavedJobs() -> Html {
    let saved_jobs = use_saved_jobs();

    let refresh = {
        let saved_jobs = saved_jobs.clone();
        Callback::from(move |_| saved_jobs.trigger(()))
    };

    html! {
        <div>
            <h1 class="text-3xl font-bold text-center text-neutral-900
                       dark:text-neutral-100 mb-8">
                {"Saved Jobs"}
            </h1>

            {saved_jobs.render("saved jobs", |saved, is_loading, error| {
                html! {
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
                        if saved.is_empty() {
                            <p class="text-center py-12 text-neutral-600
                                      dark:text-neutral-400">
                                {"No saved jobs yet"}
                            </p>
                        } else {
                            <div class="grid grid-cols-1 md:grid-cols-2
                                        gap-6">
                                {for saved.iter().map(|entry| html! {
                                    <JobCard
                                        key={entry
                                            .saved_job_id
                                            .to_string()}
                                        job={entry.job.clone()}
                                        on_changed={refresh.clone()}
                                    />
                                })}
                            </div>
                        }
                    </div>
                }
            })}
        </div>
    }
}
