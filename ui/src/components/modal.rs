use wasm_bindgen::JsCast;
use yew::prelude::*;

/// A reusable modal with backdrop-click close. Apply and add-company
/// flows render their forms inside one of these.
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub children: Html,
    /// Called when the user clicks the backdrop or closes the modal.
    pub on_close: Callback<()>,
    /// Maximum width class (default: "max-w-md")
    #[prop_or_else(|| AttrValue::from("max-w-md"))]
    pub max_width: AttrValue,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();

        Callback::from(move |e: MouseEvent| {
            if let Some(backdrop_element) =
                backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>()
                    == Some(&backdrop_element)
            {
                on_close.emit(());
            }
        })
    };

    html! {
        <div
            ref={backdrop_ref.clone()}
            onclick={on_backdrop_click}
            class="fixed inset-0 bg-black bg-opacity-50 z-40 flex
                   items-center justify-center p-4"
        >
            <div
                class={format!(
                    "bg-white dark:bg-neutral-800 rounded-lg shadow-xl \
                     w-full p-6 max-h-[90vh] overflow-y-auto {}",
                    props.max_width
                )}
            >
                {props.children.clone()}
            </div>
        </div>
    }
}
