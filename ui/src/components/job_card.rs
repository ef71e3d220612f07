use payloads::{requests, responses};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    Route,
    contexts::toast::use_toast,
    get_api_client,
    hooks::use_async_with,
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub job: responses::Job,
    /// True on the recruiter's own listing, replacing the save toggle
    /// with a delete action.
    #[prop_or(false)]
    pub is_my_job: bool,
    /// Fired after a save toggle or delete lands, so the owning list can
    /// refresh.
    #[prop_or_default]
    pub on_changed: Callback<()>,
}

#[function_component]
pub fn JobCard(props: &Props) -> Html {
    let toast = use_toast();
    let job = &props.job;
    let job_id = job.job_id;

    let saved = use_state(|| job.saved_by_user);
    {
        // A refetched list may carry a newer saved flag than our local
        // toggle state.
        let saved = saved.clone();
        use_effect_with(job.saved_by_user, move |saved_by_user| {
            saved.set(*saved_by_user);
        });
    }

    // Fixed option: which job. Per-call argument: the current saved state,
    // so the server knows which direction the toggle goes.
    let toggle_save =
        use_async_with(job_id, |job_id, currently_saved: bool| async move {
            let api_client = get_api_client();
            api_client
                .toggle_saved_job(&requests::ToggleSavedJob {
                    job_id,
                    currently_saved,
                })
                .await
                .map_err(|e| e.to_string())
        });

    let delete_job = use_async_with(job_id, |job_id, ()| async move {
        let api_client = get_api_client();
        api_client
            .delete_job(&job_id)
            .await
            .map_err(|e| e.to_string())
    });

    let on_save_click = {
        let toggle_save = toggle_save.clone();
        let saved = saved.clone();
        let on_changed = props.on_changed.clone();
        let toast = toast.clone();

        Callback::from(move |_: MouseEvent| {
            let fut = toggle_save.run(*saved);
            let saved = saved.clone();
            let on_changed = on_changed.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                match fut.await {
                    Ok(result) => {
                        saved.set(result.saved);
                        on_changed.emit(());
                    }
                    Err(e) => toast.error(e),
                }
            });
        })
    };

    let on_delete_click = {
        let delete_job = delete_job.clone();
        let on_changed = props.on_changed.clone();
        let toast = toast.clone();

        Callback::from(move |_: MouseEvent| {
            let fut = delete_job.run(());
            let on_changed = on_changed.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                match fut.await {
                    Ok(()) => on_changed.emit(()),
                    Err(e) => toast.error(e),
                }
            });
        })
    };

    let api_client = get_api_client();
    let logo_url = api_client.company_logo_url(&job.company.id);

    // First sentence of the description is the card teaser.
    let teaser = match job.description.split_once('.') {
        Some((first, _)) => format!("{first}."),
        None => job.description.clone(),
    };

    html! {
        <div class="flex flex-col justify-between bg-white
                    dark:bg-neutral-800 border border-neutral-200
                    dark:border-neutral-700 rounded-lg shadow-md
                    hover:shadow-lg transition-shadow duration-200 p-5">
            <div>
                <div class="flex justify-between items-start mb-3">
                    <div class="flex items-center space-x-3">
                        <img
                            src={logo_url}
                            alt={job.company.name.clone()}
                            class="h-8 w-8 rounded object-contain"
                        />
                        <div>
                            <h3 class="text-lg font-semibold
                                       text-neutral-900
                                       dark:text-neutral-100">
                                {&job.title}
                            </h3>
                            <p class="text-sm text-neutral-500
                                      dark:text-neutral-400">
                                {&job.company.name}
                            </p>
                        </div>
                    </div>
                    if props.is_my_job {
                        <button
                            onclick={on_delete_click}
                            disabled={delete_job.loading()}
                            title="Delete job"
                            class="text-red-500 hover:text-red-400
                                   disabled:opacity-50 text-sm"
                        >
                            if delete_job.loading() {
                                {"Deleting..."}
                            } else {
                                {"Delete"}
                            }
                        </button>
                    } else {
                        <button
                            onclick={on_save_click}
                            disabled={toggle_save.loading()}
                            title={if *saved {
                                "Remove from saved jobs"
                            } else {
                                "Save job"
                            }}
                            class="text-xl disabled:opacity-50"
                        >
                            {if *saved {
                                "\u{2764}\u{fe0f}"
                            } else {
                                "\u{1f90d}"
                            }}
                        </button>
                    }
                </div>
                <div class="flex flex-wrap gap-2 mb-3">
                    <span class="inline-flex items-center px-2 py-1
                                 rounded-full text-xs font-medium
                                 bg-neutral-100 dark:bg-neutral-700
                                 text-neutral-700 dark:text-neutral-300">
                        {&job.location}
                    </span>
                    if !job.is_open {
                        <span class="inline-flex items-center px-2 py-1
                                     rounded-full text-xs font-medium
                                     bg-red-100 dark:bg-red-900/30
                                     text-red-700 dark:text-red-400">
                            {"Closed"}
                        </span>
                    }
                </div>
                <p class="text-sm text-neutral-600 dark:text-neutral-400
                          mb-4">
                    {teaser}
                </p>
            </div>
            <div class="pt-3 border-t border-neutral-200
                        dark:border-neutral-700">
                <Link<Route>
                    to={Route::JobDetail { id: job_id }}
                    classes={classes!(
                        "block", "w-full", "text-center", "py-2", "px-4",
                        "rounded-md", "text-sm", "font-medium",
                        "text-white", "bg-neutral-900",
                        "hover:bg-neutral-800", "dark:bg-neutral-100",
                        "dark:text-neutral-900",
                        "dark:hover:bg-neutral-200",
                        "transition-colors", "duration-200"
                    )}
                >
                    {"More Details"}
                </Link<Route>>
            </div>
        </div>
    }
}
