use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::{
    AuthState, Route, State,
    components::DarkModeToggle,
    get_api_client,
    hooks::use_logout,
};

/// Top navigation: brand, role-aware links, theme toggle, session
/// controls.
#[function_component]
pub fn Header() -> Html {
    let (state, _) = use_store::<State>();
    let logout = use_logout();

    let on_logout = {
        let logout = logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };

    let nav_link_class = "text-sm font-medium text-neutral-600 \
                          dark:text-neutral-300 hover:text-neutral-900 \
                          dark:hover:text-neutral-100 transition-colors";

    let session_controls = match &state.auth_state {
        AuthState::Unknown => html! {},
        AuthState::SignedOut => {
            let api_client = get_api_client();
            html! {
                <a
                    href={api_client.sign_in_url()}
                    class="py-1.5 px-4 rounded-md text-sm font-medium
                           text-white bg-neutral-900 hover:bg-neutral-800
                           dark:bg-neutral-100 dark:text-neutral-900
                           dark:hover:bg-neutral-200
                           transition-colors duration-200"
                >
                    {"Sign In"}
                </a>
            }
        }
        AuthState::SignedIn(profile) => html! {
            <div class="flex items-center space-x-3">
                <span class="text-sm text-neutral-600
                             dark:text-neutral-400 hidden sm:inline">
                    {&profile.full_name}
                </span>
                <button
                    onclick={on_logout}
                    class="py-1.5 px-4 rounded-md text-sm font-medium
                           border border-neutral-300
                           dark:border-neutral-600 text-neutral-700
                           dark:text-neutral-300 hover:bg-neutral-100
                           dark:hover:bg-neutral-700
                           transition-colors duration-200"
                >
                    {"Sign Out"}
                </button>
            </div>
        },
    };

    html! {
        <header class="bg-white dark:bg-neutral-800 border-b
                       border-neutral-200 dark:border-neutral-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center space-x-8">
                        <Link<Route> to={Route::Home}>
                            <h1 class="text-xl font-semibold
                                       text-neutral-900 dark:text-white">
                                {"JobDeck"}
                            </h1>
                        </Link<Route>>
                        <nav class="hidden md:flex items-center space-x-6">
                            <Link<Route>
                                to={Route::Jobs}
                                classes={classes!(nav_link_class)}
                            >
                                {"Jobs"}
                            </Link<Route>>
                            if state.is_candidate() {
                                <Link<Route>
                                    to={Route::SavedJobs}
                                    classes={classes!(nav_link_class)}
                                >
                                    {"Saved"}
                                </Link<Route>>
                                <Link<Route>
                                    to={Route::MyJobs}
                                    classes={classes!(nav_link_class)}
                                >
                                    {"My Applications"}
                                </Link<Route>>
                            }
                            if state.is_recruiter() {
                                <Link<Route>
                                    to={Route::PostJob}
                                    classes={classes!(nav_link_class)}
                                >
                                    {"Post a Job"}
                                </Link<Route>>
                                <Link<Route>
                                    to={Route::MyJobs}
                                    classes={classes!(nav_link_class)}
                                >
                                    {"My Jobs"}
                                </Link<Route>>
                            }
                        </nav>
                    </div>
                    <div class="flex items-center space-x-4">
                        <DarkModeToggle />
                        {session_controls}
                    </div>
                </div>
            </div>
        </header>
    }
}
