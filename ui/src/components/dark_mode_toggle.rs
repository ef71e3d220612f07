use web_sys::window;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, state::ThemeMode};

const THEME_STORAGE_KEY: &str = "theme";

fn stored_theme() -> ThemeMode {
    if let Ok(Some(storage)) = window().unwrap().local_storage()
        && let Ok(Some(value)) = storage.get_item(THEME_STORAGE_KEY)
    {
        return match value.as_str() {
            "light" => ThemeMode::Light,
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::System,
        };
    }
    ThemeMode::System
}

fn store_theme(mode: &ThemeMode) {
    if let Ok(Some(storage)) = window().unwrap().local_storage() {
        let value = match mode {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => {
                let _ = storage.remove_item(THEME_STORAGE_KEY);
                return;
            }
        };
        let _ = storage.set_item(THEME_STORAGE_KEY, value);
    }
}

fn system_prefers_dark() -> bool {
    window()
        .unwrap()
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Header button that flips between light and dark. The effective theme
/// lives in the global [`State`]; the layout applies the `dark` class.
#[function_component]
pub fn DarkModeToggle() -> Html {
    let (state, dispatch) = use_store::<State>();

    // Pick up the stored preference and the system setting once.
    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            let prefers_dark = system_prefers_dark();
            let mode = stored_theme();
            dispatch.reduce_mut(|state| {
                state.theme_mode = mode;
                state.system_prefers_dark = prefers_dark;
            });
        });
    }

    let dark = state.is_dark_mode();

    let on_toggle = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(|state| {
                let next = if state.is_dark_mode() {
                    ThemeMode::Light
                } else {
                    ThemeMode::Dark
                };
                store_theme(&next);
                state.theme_mode = next;
            });
        })
    };

    let title = if dark {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    };

    html! {
        <button
            class="p-2 rounded-lg hover:bg-neutral-200
                   dark:hover:bg-neutral-700 transition-colors"
            onclick={on_toggle}
            title={title}
            aria-label={title}
        >
            <span class="text-xl">
                {if dark { "\u{2600}\u{fe0f}" } else { "\u{1f319}" }}
            </span>
        </button>
    }
}
