use yew::prelude::*;

/// Sets the document title while the page is mounted.
#[hook]
pub fn use_title(title: String) {
    use_effect_with(title, |title| {
        if let Some(document) =
            web_sys::window().and_then(|window| window.document())
        {
            document.set_title(title);
        }
    });
}
