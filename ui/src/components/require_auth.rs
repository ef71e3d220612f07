use payloads::responses::UserProfile;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{AuthState, State, get_api_client};

/// Renders its children only when the user is signed in.
///
/// While the session is unresolved a placeholder is shown; signed-out
/// users get a prompt linking to the identity provider's hosted sign-in.
/// The render prop receives the profile for children that need it.
#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub render: Option<Callback<UserProfile, Html>>,
}

#[function_component]
pub fn RequireAuth(props: &RequireAuthProps) -> Html {
    let (state, _) = use_store::<State>();

    let profile = match &state.auth_state {
        AuthState::Unknown => {
            return html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Checking your session..."}
                    </p>
                </div>
            };
        }
        AuthState::SignedOut => return sign_in_prompt(),
        AuthState::SignedIn(profile) => profile.clone(),
    };

    if let Some(render) = &props.render {
        return render.emit(profile);
    }

    html! {
        <>
            {for props.children.iter()}
        </>
    }
}

fn sign_in_prompt() -> Html {
    let api_client = get_api_client();
    html! {
        <div class="max-w-md mx-auto text-center py-16">
            <h2 class="text-xl font-semibold text-neutral-900
                       dark:text-neutral-100 mb-2">
                {"Sign in required"}
            </h2>
            <p class="text-neutral-600 dark:text-neutral-400 mb-6">
                {"Sign in to browse jobs, save postings, and apply."}
            </p>
            <a
                href={api_client.sign_in_url()}
                class="inline-block py-2 px-6 rounded-md text-sm
                       font-medium text-white bg-neutral-900
                       hover:bg-neutral-800 dark:bg-neutral-100
                       dark:text-neutral-900 dark:hover:bg-neutral-200
                       transition-colors duration-200"
            >
                {"Sign In"}
            </a>
        </div>
    }
}
