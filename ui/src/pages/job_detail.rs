use payloads::{JobId, requests, responses};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::{
    components::{ApplicationCard, ApplyJobForm, MarkdownText, RequireAuth},
    contexts::toast::use_toast,
    get_api_client,
    hooks::{use_async_with, use_job, use_title},
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: JobId,
}

#[function_component]
pub fn JobDetailPage(props: &Props) -> Html {
    let id = props.id;
    let render_content =
        Callback::from(move |profile: responses::UserProfile| {
            html! { <JobDetail job_id={id} profile={profile} /> }
        });

    html! {
        <RequireAuth render={render_content} />
    }
}

#[derive(Properties, PartialEq)]
struct JobDetailProps {
    job_id: JobId,
    profile: responses::UserProfile,
}

#[function_component]
fn JobDetail(props: &JobDetailProps) -> Html {
    let toast = use_toast();
    let job_hook = use_job(props.job_id);
    let show_apply_form = use_state(|| false);

    use_title(
        job_hook
            .data()
            .map(|detail| format!("{} - JobDeck", detail.job.title))
            .unwrap_or_else(|| "Job - JobDeck".to_string()),
    );

    // Fixed option: which job. Per-call argument: the new hiring state.
    let hiring_status =
        use_async_with(props.job_id, |job_id, is_open: bool| async move {
            let api_client = get_api_client();
            api_client
                .update_hiring_status(&requests::UpdateHiringStatus {
                    job_id,
                    is_open,
                })
                .await
                .map_err(|e| e.to_string())
        });

    let on_status_change = {
        let hiring_status = hiring_status.clone();
        let job_hook = job_hook.clone();
        let toast = toast.clone();

        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let is_open = select.value() == "open";

            let fut = hiring_status.run(is_open);
            let job_hook = job_hook.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                match fut.await {
                    Ok(()) => job_hook.trigger(()),
                    Err(e) => toast.error(e),
                }
            });
        })
    };

    let open_apply_form = {
        let show_apply_form = show_apply_form.clone();
        Callback::from(move |_: MouseEvent| show_apply_form.set(true))
    };

    let close_apply_form = {
        let show_apply_form = show_apply_form.clone();
        Callback::from(move |()| show_apply_form.set(false))
    };

    let refetch_job = {
        let job_hook = job_hook.clone();
        Callback::from(move |()| job_hook.trigger(()))
    };

    let profile = props.profile.clone();

    job_hook.render("job", |detail, is_loading, error| {
        let job = &detail.job;
        let is_owner = job.recruiter_id == profile.user_id;
        let api_client = get_api_client();
        let logo_url = api_client.company_logo_url(&job.company.id);

        html! {
            <div class="max-w-4xl mx-auto">
                if is_loading {
                    <p class="text-sm text-neutral-500
                              dark:text-neutral-400 mb-4">
                        {"Refreshing..."}
                    </p>
                }
                if let Some(error) = error {
                    <div class="mb-4 p-3 rounded-md bg-red-50
                                dark:bg-red-900/20 border border-red-200
                                dark:border-red-800">
                        <p class="text-sm text-red-700 dark:text-red-400">
                            {error}
                        </p>
                    </div>
                }

                <div class="bg-white dark:bg-neutral-800 border
                            border-neutral-200 dark:border-neutral-700
                            rounded-lg shadow-md p-6 mb-8">
                    <div class="flex flex-col-reverse md:flex-row
                                justify-between items-center mb-6">
                        <h1 class="text-3xl font-bold text-neutral-900
                                   dark:text-neutral-100">
                            {&job.title}
                        </h1>
                        <img
                            src={logo_url}
                            alt={job.company.name.clone()}
                            class="h-16 object-contain"
                        />
                    </div>

                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4
                                text-sm text-neutral-600
                                dark:text-neutral-400 pb-4">
                        <span>{&job.location}</span>
                        <span>
                            {format!(
                                "{} applicants", job.application_count
                            )}
                        </span>
                        <span>
                            {if job.is_open { "Open" } else { "Closed" }}
                        </span>
                        <span>{&job.company.name}</span>
                    </div>

                    if is_owner {
                        <div class="pt-4 border-t border-neutral-200
                                    dark:border-neutral-700">
                            <label
                                for="hiring-status"
                                class="block text-sm font-medium
                                       text-neutral-700
                                       dark:text-neutral-300 mb-1"
                            >
                                {"Hiring Status"}
                            </label>
                            <select
                                id="hiring-status"
                                onchange={on_status_change.clone()}
                                disabled={hiring_status.loading()}
                                class="w-full px-3 py-2 border
                                       border-neutral-300
                                       dark:border-neutral-600 rounded-md
                                       bg-white dark:bg-neutral-700
                                       text-neutral-900
                                       dark:text-neutral-100 text-sm"
                            >
                                <option
                                    value="open"
                                    selected={job.is_open}
                                >
                                    {"Open"}
                                </option>
                                <option
                                    value="closed"
                                    selected={!job.is_open}
                                >
                                    {"Closed"}
                                </option>
                            </select>
                            if let Some(error) = hiring_status.error() {
                                <p class="text-sm text-red-700
                                          dark:text-red-400 mt-1">
                                    {error}
                                </p>
                            }
                        </div>
                    }
                </div>

                <section class="mb-8">
                    <h2 class="text-xl font-semibold text-neutral-900
                               dark:text-neutral-100 mb-3">
                        {"About the Job"}
                    </h2>
                    <p class="text-neutral-700 dark:text-neutral-300">
                        {&job.description}
                    </p>
                </section>

                <section class="mb-8">
                    <h2 class="text-xl font-semibold text-neutral-900
                               dark:text-neutral-100 mb-3">
                        {"What we are looking for"}
                    </h2>
                    <MarkdownText text={job.requirements.clone()} />
                </section>

                if !is_owner {
                    <div class="flex justify-center mb-8">
                        <button
                            onclick={open_apply_form.clone()}
                            disabled={
                                !job.is_open || detail.already_applied
                            }
                            class="py-2 px-8 rounded-md text-sm
                                   font-medium text-white bg-neutral-900
                                   hover:bg-neutral-800
                                   dark:bg-neutral-100
                                   dark:text-neutral-900
                                   dark:hover:bg-neutral-200
                                   disabled:opacity-50
                                   transition-colors duration-200"
                        >
                            {if !job.is_open {
                                "Hiring Closed"
                            } else if detail.already_applied {
                                "Applied"
                            } else {
                                "Apply Now"
                            }}
                        </button>
                    </div>
                    if *show_apply_form {
                        <ApplyJobForm
                            job={job.clone()}
                            candidate_name={profile.full_name.clone()}
                            on_applied={refetch_job.clone()}
                            on_close={close_apply_form.clone()}
                        />
                    }
                }

                if is_owner && !detail.applications.is_empty() {
                    <section>
                        <h2 class="text-xl font-semibold text-neutral-900
                                   dark:text-neutral-100 mb-3">
                            {"Applications"}
                        </h2>
                        <div class="space-y-4">
                            {for detail.applications.iter().map(
                                |application| html! {
                                    <ApplicationCard
                                        key={application
                                            .application_id
                                            .to_string()}
                                        application={application.clone()}
                                    />
                                }
                            )}
                        </div>
                    </section>
                }
            </div>
        }
    })
}
