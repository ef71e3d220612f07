use payloads::responses;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, get_api_client};

use super::{UseAsyncHandle, use_async};

/// Jobs posted by the signed-in recruiter.
#[hook]
pub fn use_my_jobs() -> UseAsyncHandle<Vec<responses::Job>, ()> {
    let (state, _) = use_store::<State>();

    let my_jobs = use_async(|()| async move {
        let api_client = get_api_client();
        api_client.list_my_jobs().await.map_err(|e| e.to_string())
    });

    {
        let my_jobs = my_jobs.clone();
        let is_recruiter = state.is_recruiter();
        use_effect_with(is_recruiter, move |is_recruiter| {
            if *is_recruiter {
                my_jobs.trigger(());
            }
        });
    }

    my_jobs
}
