use payloads::{UserRole, requests, responses};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::{
    AuthState, Route, State,
    components::RequireAuth,
    get_api_client,
    hooks::{use_async, use_title},
};

#[function_component]
pub fn OnboardingPage() -> Html {
    use_title("Welcome - JobDeck".to_string());

    let render_content =
        Callback::from(move |profile: responses::UserProfile| {
            match profile.role {
                // Already onboarded; straight to the role's home.
                Some(UserRole::Recruiter) => {
                    html! { <Redirect<Route> to={Route::PostJob} /> }
                }
                Some(UserRole::Candidate) => {
                    html! { <Redirect<Route> to={Route::Jobs} /> }
                }
                None => html! { <RoleSelection /> },
            }
        });

    html! {
        <RequireAuth render={render_content} />
    }
}

#[function_component]
fn RoleSelection() -> Html {
    let navigator = use_navigator().unwrap();
    let (_state, dispatch) = use_store::<State>();

    let update_role = use_async(|role: UserRole| async move {
        let api_client = get_api_client();
        api_client
            .update_role(&requests::UpdateRole { role })
            .await
            .map_err(|e| e.to_string())
    });

    let pick_role = {
        let update_role = update_role.clone();
        let navigator = navigator.clone();
        let dispatch = dispatch.clone();

        Callback::from(move |role: UserRole| {
            let fut = update_role.run(role);
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();

            yew::platform::spawn_local(async move {
                // The provider returns the updated profile; store it so
                // guards see the role without a second round trip.
                if let Ok(profile) = fut.await {
                    dispatch.reduce_mut(|state| {
                        state.auth_state = AuthState::SignedIn(profile);
                    });
                    navigator.push(&match role {
                        UserRole::Recruiter => Route::PostJob,
                        UserRole::Candidate => Route::Jobs,
                    });
                }
            });
        })
    };

    let pick_candidate = {
        let pick_role = pick_role.clone();
        Callback::from(move |_: MouseEvent| {
            pick_role.emit(UserRole::Candidate);
        })
    };

    let pick_recruiter = {
        let pick_role = pick_role.clone();
        Callback::from(move |_: MouseEvent| {
            pick_role.emit(UserRole::Recruiter);
        })
    };

    html! {
        <div class="max-w-4xl mx-auto py-12">
            <h1 class="text-3xl md:text-4xl font-bold text-center
                       text-neutral-900 dark:text-neutral-100 mb-4">
                {"Welcome to JobDeck"}
            </h1>
            <p class="text-lg text-center text-neutral-600
                      dark:text-neutral-400 mb-10">
                {"Are you looking for a job or hiring? Choose your path \
                  to get started."}
            </p>

            if let Some(error) = update_role.error() {
                <div class="mb-6 p-3 rounded-md bg-red-50
                            dark:bg-red-900/20 border border-red-200
                            dark:border-red-800">
                    <p class="text-sm text-red-700 dark:text-red-400">
                        {error}
                    </p>
                </div>
            }

            <div class="grid md:grid-cols-2 gap-8">
                <div class="bg-white dark:bg-neutral-800 border
                            border-neutral-200 dark:border-neutral-700
                            rounded-lg shadow-md p-6 flex flex-col">
                    <h2 class="text-xl font-semibold text-neutral-900
                               dark:text-neutral-100 mb-2">
                        {"Job Seeker"}
                    </h2>
                    <p class="text-neutral-600 dark:text-neutral-400
                              mb-4">
                        {"Find your next role and apply with your resume."}
                    </p>
                    <ul class="text-sm text-neutral-600
                               dark:text-neutral-400 space-y-1 mb-6
                               flex-1">
                        <li>{"Search and filter job listings"}</li>
                        <li>{"Save jobs for later"}</li>
                        <li>{"Track your application status"}</li>
                    </ul>
                    <button
                        onclick={pick_candidate}
                        disabled={update_role.loading()}
                        class="w-full py-2 px-4 rounded-md text-sm
                               font-medium text-white bg-neutral-900
                               hover:bg-neutral-800 dark:bg-neutral-100
                               dark:text-neutral-900
                               dark:hover:bg-neutral-200
                               disabled:opacity-50
                               transition-colors duration-200"
                    >
                        {"Get Started"}
                    </button>
                </div>

                <div class="bg-white dark:bg-neutral-800 border
                            border-neutral-200 dark:border-neutral-700
                            rounded-lg shadow-md p-6 flex flex-col">
                    <h2 class="text-xl font-semibold text-neutral-900
                               dark:text-neutral-100 mb-2">
                        {"Recruiter"}
                    </h2>
                    <p class="text-neutral-600 dark:text-neutral-400
                              mb-4">
                        {"Post openings and review applications."}
                    </p>
                    <ul class="text-sm text-neutral-600
                               dark:text-neutral-400 space-y-1 mb-6
                               flex-1">
                        <li>{"Post jobs with markdown requirements"}</li>
                        <li>{"Manage company records"}</li>
                        <li>{"Triage applicants through the pipeline"}</li>
                    </ul>
                    <button
                        onclick={pick_recruiter}
                        disabled={update_role.loading()}
                        class="w-full py-2 px-4 rounded-md text-sm
                               font-medium text-white bg-neutral-900
                               hover:bg-neutral-800 dark:bg-neutral-100
                               dark:text-neutral-900
                               dark:hover:bg-neutral-200
                               disabled:opacity-50
                               transition-colors duration-200"
                    >
                        {"Get Started"}
                    </button>
                </div>
            </div>
        </div>
    }
}
