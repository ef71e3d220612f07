use payloads::{ApplicationStatus, requests, responses};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::{
    contexts::toast::use_toast,
    get_api_client,
    hooks::use_async_with,
    utils::time::format_timestamp,
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub application: responses::Application,
    /// Candidates see a read-only status badge; recruiters get the
    /// triage select.
    #[prop_or(false)]
    pub is_candidate: bool,
    /// Title line override for the candidate view ("Job at Company").
    #[prop_or_default]
    pub title: Option<String>,
}

fn status_badge_class(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Applied => {
            "bg-blue-100 dark:bg-blue-900/30 text-blue-700 \
             dark:text-blue-400"
        }
        ApplicationStatus::Interviewing => {
            "bg-yellow-100 dark:bg-yellow-900/30 text-yellow-700 \
             dark:text-yellow-400"
        }
        ApplicationStatus::Hired => {
            "bg-green-100 dark:bg-green-900/30 text-green-700 \
             dark:text-green-400"
        }
        ApplicationStatus::Rejected => {
            "bg-red-100 dark:bg-red-900/30 text-red-700 dark:text-red-400"
        }
    }
}

#[function_component]
pub fn ApplicationCard(props: &Props) -> Html {
    let toast = use_toast();
    let application = &props.application;
    let application_id = application.application_id;

    let status = use_state(|| application.status);

    // Fixed option: which application. Per-call argument: the new stage.
    let update_status = use_async_with(
        application_id,
        |application_id, new_status: ApplicationStatus| async move {
            let api_client = get_api_client();
            api_client
                .update_application_status(
                    &requests::UpdateApplicationStatus {
                        application_id,
                        status: new_status,
                    },
                )
                .await
                .map_err(|e| e.to_string())?;
            Ok(new_status)
        },
    );

    let on_status_change = {
        let update_status = update_status.clone();
        let status = status.clone();
        let toast = toast.clone();

        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let Some(new_status) =
                ApplicationStatus::parse(&select.value())
            else {
                return;
            };

            let fut = update_status.run(new_status);
            let status = status.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                match fut.await {
                    Ok(applied) => status.set(applied),
                    Err(e) => toast.error(e),
                }
            });
        })
    };

    let api_client = get_api_client();
    let resume_href = api_client.resume_url(&application_id);

    let heading = props
        .title
        .clone()
        .unwrap_or_else(|| application.candidate_name.clone());

    html! {
        <div class="bg-white dark:bg-neutral-800 border border-neutral-200
                    dark:border-neutral-700 rounded-lg shadow-md p-5">
            <div class="flex justify-between items-start mb-4">
                <h3 class="text-lg font-semibold text-neutral-900
                           dark:text-neutral-100">
                    {heading}
                </h3>
                <a
                    href={resume_href}
                    target="_blank"
                    title="Download resume"
                    class="py-1.5 px-3 rounded-md text-sm font-medium
                           border border-neutral-300
                           dark:border-neutral-600 text-neutral-700
                           dark:text-neutral-300 hover:bg-neutral-100
                           dark:hover:bg-neutral-700
                           transition-colors duration-200"
                >
                    {"Resume"}
                </a>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-3 text-sm
                        text-neutral-600 dark:text-neutral-400 mb-4">
                <span>
                    {format!(
                        "{} years experience", application.experience_years
                    )}
                </span>
                <span>{application.education.to_string()}</span>
                <span>{&application.skills}</span>
            </div>
            <div class="flex flex-col sm:flex-row justify-between
                        items-start sm:items-center gap-3 pt-3 border-t
                        border-neutral-200 dark:border-neutral-700">
                <span class="text-sm text-neutral-500
                             dark:text-neutral-400">
                    {format_timestamp(application.created_at)}
                </span>
                if props.is_candidate {
                    <span
                        class={classes!(
                            "inline-flex", "items-center", "px-3", "py-1",
                            "rounded-full", "text-sm", "font-medium",
                            status_badge_class(*status)
                        )}
                    >
                        {(*status).to_string()}
                    </span>
                } else {
                    <div class="flex items-center gap-2">
                        if update_status.loading() {
                            <span class="text-sm text-neutral-500
                                         dark:text-neutral-400">
                                {"Updating..."}
                            </span>
                        }
                        <select
                            onchange={on_status_change}
                            disabled={update_status.loading()}
                            class="px-3 py-1.5 border border-neutral-300
                                   dark:border-neutral-600 rounded-md
                                   text-sm bg-white dark:bg-neutral-700
                                   text-neutral-900
                                   dark:text-neutral-100"
                        >
                            {for ApplicationStatus::ALL.iter().map(|s| {
                                html! {
                                    <option
                                        value={s.as_str()}
                                        selected={s == &*status}
                                    >
                                        {s.to_string()}
                                    </option>
                                }
                            })}
                        </select>
                    </div>
                }
            </div>
        </div>
    }
}
