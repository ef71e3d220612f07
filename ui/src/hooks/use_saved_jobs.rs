use payloads::responses;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, get_api_client};

use super::{UseAsyncHandle, use_async};

/// The signed-in candidate's saved jobs. Retrigger after a save toggle to
/// keep the list current.
#[hook]
pub fn use_saved_jobs() -> UseAsyncHandle<Vec<responses::SavedJob>, ()> {
    let (state, _) = use_store::<State>();

    let saved = use_async(|()| async move {
        let api_client = get_api_client();
        api_client
            .list_saved_jobs()
            .await
            .map_err(|e| e.to_string())
    });

    {
        let saved = saved.clone();
        let signed_in = state.is_signed_in();
        use_effect_with(signed_in, move |signed_in| {
            if *signed_in {
                saved.trigger(());
            }
        });
    }

    saved
}
