use base64::{Engine as _, engine::general_purpose};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, FileReader, HtmlInputElement};
use yew::prelude::*;

/// A file read into memory, ready for validation and upload.
#[derive(Clone, PartialEq)]
pub struct PendingFile {
    pub filename: String,
    pub mime_type: String,
    pub size: usize,
    pub data: Vec<u8>,
}

impl PendingFile {
    /// Data URL for previewing image uploads inline.
    pub fn preview_url(&self) -> String {
        let encoded = general_purpose::STANDARD.encode(&self.data);
        format!("data:{};base64,{}", self.mime_type, encoded)
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    /// `accept` attribute passed to the input (e.g. ".pdf,.doc,.docx").
    pub accept: AttrValue,
    /// Fired once the selected file has been read into memory.
    pub on_file: Callback<PendingFile>,
    #[prop_or_default]
    pub disabled: bool,
}

/// File input that reads the selection into memory via `FileReader` and
/// hands the bytes to the parent. Validation (type, size) stays with the
/// form that knows its limits.
#[function_component]
pub fn FileUploadInput(props: &Props) -> Html {
    let on_change = {
        let on_file = props.on_file.clone();

        Callback::from(move |e: Event| {
            let on_file = on_file.clone();

            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0))
            else {
                return;
            };

            let filename = file.name();
            let mime_type = file.type_();
            let size = file.size() as usize;

            let reader = FileReader::new().unwrap();
            let reader_clone = reader.clone();

            let onload = Closure::wrap(Box::new(move |_: Event| {
                let result = reader_clone.result().unwrap();
                let array = js_sys::Uint8Array::new(&result);
                on_file.emit(PendingFile {
                    filename: filename.clone(),
                    mime_type: mime_type.clone(),
                    size,
                    data: array.to_vec(),
                });
            }) as Box<dyn FnMut(_)>);

            reader.set_onload(Some(onload.as_ref().unchecked_ref()));
            reader.read_as_array_buffer(&file).unwrap();
            onload.forget();
        })
    };

    html! {
        <input
            type="file"
            accept={props.accept.clone()}
            disabled={props.disabled}
            onchange={on_change}
            class="block w-full text-sm text-neutral-600
                   dark:text-neutral-400
                   file:mr-3 file:py-1.5 file:px-3 file:rounded-md
                   file:border-0 file:text-sm file:font-medium
                   file:bg-neutral-100 dark:file:bg-neutral-700
                   file:text-neutral-700 dark:file:text-neutral-300
                   hover:file:bg-neutral-200 dark:hover:file:bg-neutral-600"
        />
    }
}
