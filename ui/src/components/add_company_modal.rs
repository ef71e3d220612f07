use payloads::requests;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{
    components::{FileUploadInput, Modal, file_upload::PendingFile},
    contexts::toast::use_toast,
    get_api_client,
    hooks::use_async,
};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Fired after a successful create so the company list can refresh.
    pub on_created: Callback<()>,
    pub on_close: Callback<()>,
}

/// Modal for recruiters to register a company (name + logo) inline from
/// the post-job form.
#[function_component]
pub fn AddCompanyModal(props: &Props) -> Html {
    let toast = use_toast();

    let name_ref = use_node_ref();
    let logo = use_state(|| None::<PendingFile>);
    let validation_error = use_state(|| None::<&'static str>);

    let create = use_async(|details: requests::CreateCompany| async move {
        let api_client = get_api_client();
        api_client
            .create_company(&details)
            .await
            .map_err(|e| e.to_string())
    });

    let on_logo = {
        let logo = logo.clone();
        Callback::from(move |file: PendingFile| logo.set(Some(file)))
    };

    let on_submit = {
        let name_ref = name_ref.clone();
        let logo = logo.clone();
        let validation_error = validation_error.clone();
        let create = create.clone();
        let toast = toast.clone();
        let on_created = props.on_created.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let name_input = name_ref.cast::<HtmlInputElement>().unwrap();
            let name = name_input.value().trim().to_string();

            let file = (*logo).clone();
            let check = requests::validate_company(
                &name,
                file.as_ref().map(|f| f.mime_type.as_str()),
                file.as_ref().map(|f| f.size),
            );
            if let Some(message) = check.error_message() {
                validation_error.set(Some(message));
                return;
            }
            validation_error.set(None);

            // Checked by the validator above.
            let file = file.unwrap();
            let details = requests::CreateCompany {
                name,
                logo_data: file.data,
            };

            let fut = create.run(details);
            let toast = toast.clone();
            let on_created = on_created.clone();
            let on_close = on_close.clone();

            yew::platform::spawn_local(async move {
                if fut.await.is_ok() {
                    toast.success("Company added");
                    on_created.emit(());
                    on_close.emit(());
                }
            });
        })
    };

    html! {
        <Modal on_close={props.on_close.clone()}>
            <div class="mb-6">
                <h2 class="text-xl font-bold text-neutral-900
                           dark:text-neutral-100">
                    {"Add a New Company"}
                </h2>
            </div>

            <form onsubmit={on_submit} class="space-y-4">
                if let Some(message) = *validation_error {
                    <div class="p-3 rounded-md bg-red-50
                                dark:bg-red-900/20 border border-red-200
                                dark:border-red-800">
                        <p class="text-sm text-red-700 dark:text-red-400">
                            {message}
                        </p>
                    </div>
                }
                if let Some(error) = create.error() {
                    <div class="p-3 rounded-md bg-red-50
                                dark:bg-red-900/20 border border-red-200
                                dark:border-red-800">
                        <p class="text-sm text-red-700 dark:text-red-400">
                            {error}
                        </p>
                    </div>
                }

                <div>
                    <label
                        for="company-name"
                        class="block text-sm font-medium text-neutral-700
                               dark:text-neutral-300 mb-1"
                    >
                        {"Company Name"}
                    </label>
                    <input
                        ref={name_ref}
                        type="text"
                        id="company-name"
                        placeholder="Company name"
                        class="w-full px-3 py-2 border border-neutral-300
                               dark:border-neutral-600 rounded-md shadow-sm
                               bg-white dark:bg-neutral-700
                               text-neutral-900 dark:text-neutral-100
                               focus:outline-none focus:ring-2
                               focus:ring-neutral-500"
                    />
                </div>

                <div>
                    <span class="block text-sm font-medium
                                 text-neutral-700 dark:text-neutral-300
                                 mb-1">
                        {"Logo (PNG or JPEG)"}
                    </span>
                    <FileUploadInput
                        accept="image/png,image/jpeg"
                        on_file={on_logo}
                        disabled={create.loading()}
                    />
                    if let Some(file) = &*logo {
                        <img
                            src={file.preview_url()}
                            alt="Logo preview"
                            class="h-12 mt-2 rounded object-contain"
                        />
                    }
                </div>

                <div class="flex space-x-3 pt-4 border-t
                            border-neutral-200 dark:border-neutral-700">
                    <button
                        type="button"
                        onclick={props.on_close.clone().reform(|_| ())}
                        disabled={create.loading()}
                        class="flex-1 py-2 px-4 border border-neutral-300
                               dark:border-neutral-600 rounded-md text-sm
                               font-medium text-neutral-700
                               dark:text-neutral-300 bg-white
                               dark:bg-neutral-700 hover:bg-neutral-50
                               dark:hover:bg-neutral-600
                               disabled:opacity-50
                               transition-colors duration-200"
                    >
                        {"Cancel"}
                    </button>
                    <button
                        type="submit"
                        disabled={create.loading()}
                        class="flex-1 py-2 px-4 rounded-md text-sm
                               font-medium text-white bg-neutral-900
                               hover:bg-neutral-800 dark:bg-neutral-100
                               dark:text-neutral-900
                               dark:hover:bg-neutral-200
                               disabled:opacity-50
                               transition-colors duration-200"
                    >
                        if create.loading() {
                            {"Adding..."}
                        } else {
                            {"Add Company"}
                        }
                    </button>
                </div>
            </form>
        </Modal>
    }
}
