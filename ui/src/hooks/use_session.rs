use yew::prelude::*;
use yewdux::prelude::*;

use crate::{AuthState, State, get_api_client};

/// Resolves the identity provider session once at app startup and stores
/// the result in the global [`State`]. Components read the session from
/// the store; nothing else writes `auth_state` except the logout and
/// onboarding flows.
#[hook]
pub fn use_session() {
    let (_state, dispatch) = use_store::<State>();

    use_effect_with((), {
        let dispatch = dispatch.clone();
        move |_| {
            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                match api_client.session_check().await {
                    Ok(true) => match api_client.session_profile().await {
                        Ok(profile) => {
                            dispatch.reduce_mut(|state| {
                                state.auth_state =
                                    AuthState::SignedIn(profile);
                            });
                        }
                        Err(e) => {
                            tracing::warn!("session profile fetch failed: {e}");
                            dispatch.reduce_mut(|state| state.sign_out());
                        }
                    },
                    Ok(false) => {
                        dispatch.reduce_mut(|state| state.sign_out());
                    }
                    Err(_) => {
                        // Network error or other issue, assume signed out
                        dispatch.reduce_mut(|state| state.sign_out());
                    }
                }
            });
        }
    });
}
