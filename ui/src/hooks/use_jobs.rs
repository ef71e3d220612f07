use payloads::{requests, responses};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, get_api_client};

use super::{UseAsyncHandle, use_async_with};

/// Jobs matching the given filters. Fetches once the session is resolved
/// and refetches whenever the filters change; the filters are the fixed
/// options of the wrapped call, re-read at trigger time.
#[hook]
pub fn use_jobs(
    filters: requests::JobFilters,
) -> UseAsyncHandle<Vec<responses::Job>, ()> {
    let (state, _) = use_store::<State>();

    let jobs = use_async_with(filters.clone(), |filters, ()| async move {
        let api_client = get_api_client();
        api_client
            .list_jobs(&filters)
            .await
            .map_err(|e| e.to_string())
    });

    {
        let jobs = jobs.clone();
        let session_resolved = state.session_resolved();
        use_effect_with(
            (session_resolved, filters),
            move |(session_resolved, _)| {
                if *session_resolved {
                    jobs.trigger(());
                }
            },
        );
    }

    jobs
}
