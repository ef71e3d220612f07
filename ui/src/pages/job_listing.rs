use payloads::{CompanyId, LOCATIONS, requests};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::{
    components::{JobCard, RequireAuth},
    hooks::{use_companies, use_jobs, use_title},
};

#[function_component]
pub fn JobListingPage() -> Html {
    use_title("Jobs - JobDeck".to_string());

    html! {
        <RequireAuth>
            <JobListing />
        </RequireAuth>
    }
}

#[function_component]
fn JobListing() -> Html {
    let search_query = use_state(|| None::<String>);
    let location = use_state(|| None::<String>);
    let company_id = use_state(|| None::<CompanyId>);

    let filters = requests::JobFilters {
        search_query: (*search_query).clone(),
        location: (*location).clone(),
        company_id: *company_id,
    };

    let jobs = use_jobs(filters);
    let companies = use_companies();

    let search_ref = use_node_ref();

    let on_search = {
        let search_ref = search_ref.clone();
        let search_query = search_query.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input = search_ref.cast::<HtmlInputElement>().unwrap();
            let query = input.value().trim().to_string();
            search_query.set(if query.is_empty() {
                None
            } else {
                Some(query)
            });
        })
    };

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

    let on_clear_filters = {
        let search_ref = search_ref.clone();
        let search_query = search_query.clone();
        let location = location.clone();
        let company_id = company_id.clone();

        Callback::from(move |_: MouseEvent| {
            if let Some(input) = search_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            search_query.set(None);
            location.set(None);
            company_id.set(None);
        })
    };

    let refresh_jobs = {
        let jobs = jobs.clone();
        Callback::from(move |_| jobs.trigger(()))
    };

    let select_class = "w-full px-3 py-2 border border-neutral-300 \
                        dark:border-neutral-600 rounded-md shadow-sm \
                        bg-white dark:bg-neutral-700 text-neutral-900 \
                        dark:text-neutral-100 focus:outline-none \
                        focus:ring-2 focus:ring-neutral-500";

    let active_company_name = (*company_id).and_then(|id| {
        companies
            .data()
            .and_then(|list| list.iter().find(|c| c.id == id))
            .map(|c| c.name.clone())
    });

    html! {
        <div>
            <h1 class="text-3xl font-bold text-center text-neutral-900
                       dark:text-neutral-100 mb-8">
                {"Latest Jobs"}
            </h1>

            <form onsubmit={on_search} class="flex gap-3 mb-6">
                <input
                    ref={search_ref}
                    type="text"
                    name="search-query"
                    placeholder="Search jobs by title..."
                    class="flex-1 px-4 py-2 border border-neutral-300
                           dark:border-neutral-600 rounded-md shadow-sm
                           bg-white dark:bg-neutral-700 text-neutral-900
                           dark:text-neutral-100 focus:outline-none
                           focus:ring-2 focus:ring-neutral-500"
                />
                <button
                    type="submit"
                    class="py-2 px-6 rounded-md text-sm font-medium
                           text-white bg-neutral-900 hover:bg-neutral-800
                           dark:bg-neutral-100 dark:text-neutral-900
                           dark:hover:bg-neutral-200
                           transition-colors duration-200"
                >
                    {"Search"}
                </button>
            </form>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4 items-end
                        mb-6">
                <div>
                    <label
                        for="location-filter"
                        class="block text-sm font-medium text-neutral-700
                               dark:text-neutral-300 mb-1"
                    >
                        {"Location"}
                    </label>
                    <select
                        id="location-filter"
                        onchange={on_location_change}
                        class={select_class}
                    >
                        <option value="" selected={location.is_none()}>
                            {"Filter by location"}
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
                        for="company-filter"
                        class="block text-sm font-medium text-neutral-700
                               dark:text-neutral-300 mb-1"
                    >
                        {"Company"}
                    </label>
                    <select
                        id="company-filter"
                        onchange={on_company_change}
                        class={select_class}
                    >
                        <option value="" selected={company_id.is_none()}>
                            {"Filter by company"}
                        </option>
                        {for companies.data().into_iter().flatten().map(
                            |company| {
                                let selected =
                                    *company_id == Some(company.id);
                                html! {
                                    <option
                                        value={company.id.to_string()}
                                        selected={selected}
                                    >
                                        {&company.name}
                                    </option>
                                }
                            }
                        )}
                    </select>
                </div>
                <button
                    onclick={on_clear_filters}
                    class="py-2 px-4 border border-neutral-300
                           dark:border-neutral-600 rounded-md text-sm
                           font-medium text-neutral-700
                           dark:text-neutral-300 hover:bg-neutral-100
                           dark:hover:bg-neutral-700
                           transition-colors duration-200"
                >
                    {"Clear Filters"}
                </button>
            </div>

            if search_query.is_some()
                || location.is_some()
                || company_id.is_some()
            {
                <div class="mb-6 p-3 rounded-md border border-neutral-200
                            dark:border-neutral-700 bg-neutral-50
                            dark:bg-neutral-800 text-sm
                            text-neutral-700 dark:text-neutral-300
                            flex flex-wrap items-center gap-2">
                    <span class="font-medium">{"Active filters:"}</span>
                    if let Some(query) = &*search_query {
                        <span class="px-2 py-0.5 rounded-full text-xs
                                     bg-neutral-200 dark:bg-neutral-700">
                            {query.clone()}
                        </span>
                    }
                    if let Some(name) = &*location {
                        <span class="px-2 py-0.5 rounded-full text-xs
                                     bg-neutral-200 dark:bg-neutral-700">
                            {name.clone()}
                        </span>
                    }
                    if let Some(name) = active_company_name {
                        <span class="px-2 py-0.5 rounded-full text-xs
                                     bg-neutral-200 dark:bg-neutral-700">
                            {name}
                        </span>
                    }
                </div>
            }

            {jobs.render("jobs", |jobs, is_loading, error| html! {
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
                            {"No jobs found"}
                        </p>
                    } else {
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            {for jobs.iter().map(|job| html! {
                                <JobCard
                                    key={job.job_id.to_string()}
                                    job={job.clone()}
                                    on_changed={refresh_jobs.clone()}
                                />
                            })}
                        </div>
                    }
                </div>
            })}
        </div>
    }
}
