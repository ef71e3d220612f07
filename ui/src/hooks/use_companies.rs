use payloads::responses;
use yew::prelude::*;

use crate::get_api_client;

use super::{UseAsyncHandle, use_async};

/// All companies, for filter dropdowns and the post-job form. Fetched on
/// mount; retrigger after creating a company.
#[hook]
pub fn use_companies() -> UseAsyncHandle<Vec<responses::Company>, ()> {
    let companies = use_async(|()| async move {
        let api_client = get_api_client();
        api_client.list_companies().await.map_err(|e| e.to_string())
    });

    {
        let companies = companies.clone();
        use_effect_with((), move |_| {
            companies.trigger(());
        });
    }

    companies
}
