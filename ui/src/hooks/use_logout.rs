use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::{Route, State, get_api_client};

/// Callback that ends the provider session, clears session state, and
/// returns to the landing page.
#[hook]
pub fn use_logout() -> Callback<()> {
    let (_state, dispatch) = use_store::<State>();
    let navigator = use_navigator().expect("inside a router");

    use_callback((), move |_, _| {
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();

        yew::platform::spawn_local(async move {
            let api_client = get_api_client();
            if let Err(e) = api_client.logout().await {
                // The local session is cleared regardless; the provider
                // cookie will lapse on its own.
                tracing::warn!("logout request failed: {e}");
            }
            dispatch.reduce_mut(|state| state.sign_out());
            navigator.push(&Route::Home);
        });
    })
}
