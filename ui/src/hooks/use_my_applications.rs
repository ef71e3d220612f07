use payloads::responses;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, get_api_client};

use super::{UseAsyncHandle, use_async};

/// The signed-in candidate's applications, joined with job titles.
#[hook]
pub fn use_my_applications()
-> UseAsyncHandle<Vec<responses::ApplicationWithJob>, ()> {
    let (state, _) = use_store::<State>();

    let applications = use_async(|()| async move {
        let api_client = get_api_client();
        api_client
            .list_my_applications()
            .await
            .map_err(|e| e.to_string())
    });

    {
        let applications = applications.clone();
        let is_candidate = state.is_candidate();
        use_effect_with(is_candidate, move |is_candidate| {
            if *is_candidate {
                applications.trigger(());
            }
        });
    }

    applications
}
