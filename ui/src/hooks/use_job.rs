use payloads::{JobId, responses};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, get_api_client};

use super::{UseAsyncHandle, use_async_with};

/// A single job with everything the detail page renders: company,
/// applications visible to the posting recruiter, and whether the current
/// user already applied.
#[hook]
pub fn use_job(job_id: JobId) -> UseAsyncHandle<responses::JobDetail, ()> {
    let (state, _) = use_store::<State>();

    let job = use_async_with(job_id, |job_id, ()| async move {
        let api_client = get_api_client();
        api_client.get_job(&job_id).await.map_err(|e| e.to_string())
    });

    {
        let job = job.clone();
        let session_resolved = state.session_resolved();
        use_effect_with(
            (session_resolved, job_id),
            move |(session_resolved, _)| {
                if *session_resolved {
                    job.trigger(());
                }
            },
        );
    }

    job
}
