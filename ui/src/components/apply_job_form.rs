use payloads::{EducationLevel, requests, responses};
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
    pub job: responses::Job,
    /// The signed-in candidate's display name, sent with the application.
    pub candidate_name: String,
    /// Fired after a successful submission so the detail page can
    /// refetch (applicant count, applied flag).
    pub on_applied: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn ApplyJobForm(props: &Props) -> Html {
    let toast = use_toast();

    let experience_ref = use_node_ref();
    let skills_ref = use_node_ref();
    let education = use_state(|| None::<EducationLevel>);
    let resume = use_state(|| None::<PendingFile>);
    let validation_error = use_state(|| None::<&'static str>);

    let apply = use_async(|details: requests::ApplyToJob| async move {
        let api_client = get_api_client();
        api_client
            .apply_to_job(&details)
            .await
            .map_err(|e| e.to_string())
    });

    let on_education_change = {
        let education = education.clone();
        Callback::from(move |level: EducationLevel| {
            education.set(Some(level));
        })
    };

    let on_resume = {
        let resume = resume.clone();
        Callback::from(move |file: PendingFile| resume.set(Some(file)))
    };

    let on_submit = {
        let experience_ref = experience_ref.clone();
        let skills_ref = skills_ref.clone();
        let education = education.clone();
        let resume = resume.clone();
        let validation_error = validation_error.clone();
        let apply = apply.clone();
        let toast = toast.clone();
        let on_applied = props.on_applied.clone();
        let on_close = props.on_close.clone();
        let job_id = props.job.job_id;
        let candidate_name = props.candidate_name.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let experience_input =
                experience_ref.cast::<HtmlInputElement>().unwrap();
            let experience_years =
                experience_input.value().trim().parse::<u32>().ok();

            let skills_input = skills_ref.cast::<HtmlInputElement>().unwrap();
            let skills = skills_input.value().trim().to_string();

            let file = (*resume).clone();
            let check = requests::validate_application(
                experience_years,
                &skills,
                *education,
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
            let details = requests::ApplyToJob {
                job_id,
                candidate_name: candidate_name.clone(),
                experience_years: experience_years.unwrap(),
                skills,
                education: (*education).unwrap(),
                resume_filename: file.filename,
                resume_data: file.data,
            };

            let fut = apply.run(details);
            let toast = toast.clone();
            let on_applied = on_applied.clone();
            let on_close = on_close.clone();

            yew::platform::spawn_local(async move {
                // Failure stays on the form via the wrapper's error field;
                // only success closes the modal.
                if fut.await.is_ok() {
                    toast.success("Application submitted");
                    on_applied.emit(());
                    on_close.emit(());
                }
            });
        })
    };

    let input_class = "w-full px-3 py-2 border border-neutral-300 \
                       dark:border-neutral-600 rounded-md shadow-sm \
                       bg-white dark:bg-neutral-700 text-neutral-900 \
                       dark:text-neutral-100 focus:outline-none \
                       focus:ring-2 focus:ring-neutral-500";

    html! {
        <Modal on_close={props.on_close.clone()} max_width="max-w-lg">
            <div class="mb-6">
                <h2 class="text-xl font-bold text-neutral-900
                           dark:text-neutral-100">
                    {format!(
                        "Apply for {} at {}",
                        props.job.title, props.job.company.name
                    )}
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
                if let Some(error) = apply.error() {
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
                        for="experience"
                        class="block text-sm font-medium text-neutral-700
                               dark:text-neutral-300 mb-1"
                    >
                        {"Years of Experience"}
                    </label>
                    <input
                        ref={experience_ref}
                        type="number"
                        id="experience"
                        min="0"
                        placeholder="e.g. 2"
                        class={input_class}
                    />
                </div>

                <div>
                    <label
                        for="skills"
                        class="block text-sm font-medium text-neutral-700
                               dark:text-neutral-300 mb-1"
                    >
                        {"Skills"}
                    </label>
                    <input
                        ref={skills_ref}
                        type="text"
                        id="skills"
                        placeholder="e.g. Rust, SQL, Kubernetes"
                        class={input_class}
                    />
                </div>

                <div>
                    <span class="block text-sm font-medium
                                 text-neutral-700 dark:text-neutral-300
                                 mb-1">
                        {"Education Level"}
                    </span>
                    <div class="flex flex-col sm:flex-row gap-3">
                        {for EducationLevel::ALL.iter().map(|level| {
                            let level = *level;
                            let on_education_change =
                                on_education_change.clone();
                            let onchange = Callback::from(move |_: Event| {
                                on_education_change.emit(level);
                            });
                            html! {
                                <label class="flex items-center space-x-2
                                              text-sm text-neutral-700
                                              dark:text-neutral-300">
                                    <input
                                        type="radio"
                                        name="education"
                                        value={level.as_str()}
                                        checked={*education == Some(level)}
                                        {onchange}
                                    />
                                    <span>{level.to_string()}</span>
                                </label>
                            }
                        })}
                    </div>
                </div>

                <div>
                    <span class="block text-sm font-medium
                                 text-neutral-700 dark:text-neutral-300
                                 mb-1">
                        {"Resume (PDF or Word)"}
                    </span>
                    <FileUploadInput
                        accept=".pdf,.doc,.docx"
                        on_file={on_resume}
                        disabled={apply.loading()}
                    />
                    if let Some(file) = &*resume {
                        <p class="text-xs text-neutral-500
                                  dark:text-neutral-400 mt-1">
                            {&file.filename}
                        </p>
                    }
                </div>

                <div class="flex space-x-3 pt-4 border-t
                            border-neutral-200 dark:border-neutral-700">
                    <button
                        type="button"
                        onclick={props.on_close.clone().reform(|_| ())}
                        disabled={apply.loading()}
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
                        disabled={apply.loading()}
                        class="flex-1 py-2 px-4 rounded-md text-sm
                               font-medium text-white bg-neutral-900
                               hover:bg-neutral-800 dark:bg-neutral-100
                               dark:text-neutral-900
                               dark:hover:bg-neutral-200
                               disabled:opacity-50
                               transition-colors duration-200"
                    >
                        if apply.loading() {
                            {"Applying..."}
                        } else {
                            {"Submit Application"}
                        }
                    </button>
                </div>
            </form>
        </Modal>
    }
}
