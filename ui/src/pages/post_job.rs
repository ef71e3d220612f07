use payloads::{
    CompanyId, Job, LOCATIONS, UserRole, requests, responses,
};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    Route,
    components::{AddCompanyModal, RequireAuth},
    get_api_client,
    hooks::{use_async, use_companies, use_title},
};

#[function_component]
pub fn PostJobPage() -> Html {
    use_title("Post a Job - JobDeck".to_string());

    let render_content =
        Callback::from(move |profile: responses::UserProfile| {
            match profile.role {
                Some(UserRole::Recruiter) => {
                    html! { <PostJobForm profile={profile} /> }
                }
                // Candidates have no business here; users without a role
                // still need to pick one.
                Some(UserRole::Candidate) => {
                    html! { <Redirect<Route> to={Route::Jobs} /> }
                }
                None => {
                    html! { <Redirect<Route> to={Route::Onboarding} /> }
                }
            }
        });

    html! {
        <RequireAuth render={render_content} />
    }
}

#[derive(Properties, PartialEq)]
struct PostJobFormProps {
    profile: responses::UserProfile,
}

#[function_component]
fn PostJobForm(props: &PostJobFormProps) -> Html {
    let navigator = use_navigator().unwrap();
    let companies = use_companies();

    let title_ref = use_node_ref();
    let description_ref = use_node_ref();
    let requirements_ref = use_node_ref();
    let location = use_state(|| None::<String>);
    let company_id = use_state(|| None::<CompanyId>);
    let validation_error = use_state(|| None::<&'static str>);
    let show_company_modal = use_state(|| false);

    let create_job = use_async(|job: Job| async move {
        let api_client = get_api_client();
        api_client.create_job(&job).await.map_err(|e| e.to_string())
    });

    let on_location_change = {
        let location = location.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            location.set(if value.is_empty() { None } else { Some(value) });
        })
    };

    let on_company_change = {
        let company_id = company_id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            company_id
                .set(value.parse::<uuid::Uuid>().ok().map(CompanyId));
        })
    };

    let open_company_modal = {
        let show_company_modal = show_company_modal.clone();
        Callback::from(move |_: MouseEvent| show_company_modal.set(true))
    };

    let close_company_modal = {
        let show_company_modal = show_company_modal.clone();
        Callback::from(move |()| show_company_modal.set(false))
    };

    let refetch_companies = {
        let companies = companies.clone();
        Callback::from(move |()| companies.trigger(()))
    };

    let on_submit = {
        let title_ref = title_ref.clone();
        let description_ref = description_ref.clone();
        let requirements_ref = requirements_ref.clone();
        let location = location.clone();
        let company_id = company_id.clone();
        let validation_error = validation_error.clone();
        let create_job = create_job.clone();
        let navigator = navigator.clone();
        let recruiter_id = props.profile.user_id;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let title_input = title_ref.cast::<HtmlInputElement>().unwrap();
            let title = title_input.value().trim().to_string();

            let description_input =
                description_ref.cast::<HtmlTextAreaElement>().unwrap();
            let description = description_input.value().trim().to_string();

            let requirements_input =
                requirements_ref.cast::<HtmlTextAreaElement>().unwrap();
            let requirements = requirements_input.value().trim().to_string();

            let location_value =
                (*location).clone().unwrap_or_default();

            let check = requests::validate_job(
                &title,
                &description,
                &requirements,
                &location_value,
                *company_id,
            );
            if let Some(message) = check.error_message() {
                validation_error.set(Some(message));
                return;
            }
            validation_error.set(None);

            let job = Job {
                // Checked by the validator above.
                company_id: (*company_id).unwrap(),
                recruiter_id,
                title,
                description,
                requirements,
                location: location_value,
                is_open: true,
            };

            let fut = create_job.run(job);
            let navigator = navigator.clone();

            yew::platform::spawn_local(async move {
                // Failure stays on the form via the wrapper's error
                // field; only success navigates away.
                if fut.await.is_ok() {
                    navigator.push(&Route::Jobs);
                }
            });
        })
    };

    let input_class = "w-full px-3 py-2 border border-neutral-300 \
                       dark:border-neutral-600 rounded-md shadow-sm \
                       bg-white dark:bg-neutral-700 text-neutral-900 \
                       dark:text-neutral-100 focus:outline-none \
                       focus:ring-2 focus:ring-neutral-500";

    html! {
        <div class="max-w-2xl mx-auto">
            <div class="bg-white dark:bg-neutral-800 border
                        border-neutral-200 dark:border-neutral-700
                        rounded-lg shadow-md p-8">
                <div class="mb-8 text-center">
                    <h1 class="text-2xl font-bold text-neutral-900
                               dark:text-neutral-100 mb-2">
                        {"Post a New Job"}
                    </h1>
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Describe the role to start receiving \
                          applications."}
                    </p>
                </div>

                <form onsubmit={on_submit} class="space-y-5">
                    if let Some(message) = *validation_error {
                        <div class="p-3 rounded-md bg-red-50
                                    dark:bg-red-900/20 border
                                    border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700
                                      dark:text-red-400">
                                {message}
                            </p>
                        </div>
                    }
                    if let Some(error) = create_job.error() {
                        <div class="p-3 rounded-md bg-red-50
                                    dark:bg-red-900/20 border
                                    border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700
                                      dark:text-red-400">
                                {error}
                            </p>
                        </div>
                    }

                    <div>
                        <label
                            for="job-title"
                            class="block text-sm font-medium
                                   text-neutral-700 dark:text-neutral-300
                                   mb-1"
                        >
                            {"Job Title"}
                        </label>
                        <input
                            ref={title_ref}
                            type="text"
                            id="job-title"
                            placeholder="e.g. Senior Software Engineer"
                            class={input_class}
                        />
                    </div>

                    <div>
                        <label
                            for="job-description"
                            class="block text-sm font-medium
                                   text-neutral-700 dark:text-neutral-300
                                   mb-1"
                        >
                            {"Job Description"}
                        </label>
                        <textarea
                            ref={description_ref}
                            id="job-description"
                            rows="3"
                            placeholder="Describe the role and \
                                         responsibilities"
                            class={input_class}
                        />
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div>
                            <label
                                for="job-location"
                                class="block text-sm font-medium
                                       text-neutral-700
                                       dark:text-neutral-300 mb-1"
                            >
                                {"Location"}
                            </label>
                            <select
                                id="job-location"
                                onchange={on_location_change}
                                class={input_class}
                            >
                                <option
                                    value=""
                                    selected={location.is_none()}
                                >
                                    {"Select location"}
                                </option>
                                {for LOCATIONS.iter().map(|name| {
                                    let selected =
                                        location.as_deref() == Some(*name);
                                    html! {
                                        <option value={*name} selected={selected}>
                                            {*name}
                                        </option>
                                    }
                                })}
                            </select>
                        </div>
                        <div>
                            <label
                                for="job-company"
                                class="block text-sm font-medium
                                       text-neutral-700
                                       dark:text-neutral-300 mb-1"
                            >
                                {"Company"}
                            </label>
                            <select
                                id="job-company"
                                onchange={on_company_change}
                                class={input_class}
                            >
                                <option
                                    value=""
                                    selected={company_id.is_none()}
                                >
                                    {"Select company"}
                                </option>
                                {for companies
                                    .data()
                                    .into_iter()
                                    .flatten()
                                    .map(|company| {
                                        let selected = *company_id
                                            == Some(company.id);
                                        html! {
                                            <option
                                                value={company
                                                    .id
                                                    .to_string()}
                                                selected={selected}
                                            >
                                                {&company.name}
                                            </option>
                                        }
                                    })}
                            </select>
                        </div>
                    </div>

                    <div class="flex justify-end">
                        <button
                            type="button"
                            onclick={open_company_modal}
                            class="py-1.5 px-4 border border-neutral-300
                                   dark:border-neutral-600 rounded-md
                                   text-sm font-medium text-neutral-700
                                   dark:text-neutral-300
                                   hover:bg-neutral-100
                                   dark:hover:bg-neutral-700
                                   transition-colors duration-200"
                        >
                            {"Add a New Company"}
                        </button>
                    </div>

                    <div>
                        <label
                            for="job-requirements"
                            class="block text-sm font-medium
                                   text-neutral-700 dark:text-neutral-300
                                   mb-1"
                        >
                            {"Requirements (markdown)"}
                        </label>
                        <textarea
                            ref={requirements_ref}
                            id="job-requirements"
                            rows="8"
                            placeholder="- 3+ years with Rust\n- ..."
                            class={input_class}
                        />
                    </div>

                    <button
                        type="submit"
                        disabled={create_job.loading()}
                        class="w-full py-2 px-4 rounded-md text-sm
                               font-medium text-white bg-neutral-900
                               hover:bg-neutral-800 dark:bg-neutral-100
                               dark:text-neutral-900
                               dark:hover:bg-neutral-200
                               disabled:opacity-50
                               transition-colors duration-200"
                    >
                        if create_job.loading() {
                            {"Posting..."}
                        } else {
                            {"Post Job"}
                        }
                    </button>
                </form>
            </div>

            if *show_company_modal {
                <AddCompanyModal
                    on_created={refetch_companies}
                    on_close={close_company_modal}
                />
            }
        </div>
    }
}
