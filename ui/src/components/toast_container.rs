use yew::prelude::*;

use crate::contexts::toast::{Toast, ToastContext, ToastKind};

/// Fixed-position stack of active toasts. Mounted once in the main layout.
#[function_component]
pub fn ToastContainer() -> Html {
    let context = use_context::<ToastContext>()
        .expect("ToastContainer must be used within a ToastProvider");

    if context.toasts.is_empty() {
        return html! {};
    }

    html! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80">
            {for context.toasts.iter().map(|toast| {
                let context = context.clone();
                let id = toast.id;
                let on_close = Callback::from(move |_: MouseEvent| {
                    context.dispatch(
                        crate::contexts::toast::ToastAction::Remove(id),
                    );
                });
                html! { <ToastItem toast={toast.clone()} {on_close} /> }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_close: Callback<MouseEvent>,
}

#[function_component]
fn ToastItem(props: &ToastItemProps) -> Html {
    let (border, text) = match props.toast.kind {
        ToastKind::Success => (
            "border-green-300 dark:border-green-700",
            "text-green-800 dark:text-green-300",
        ),
        ToastKind::Error => (
            "border-red-300 dark:border-red-700",
            "text-red-800 dark:text-red-300",
        ),
    };

    html! {
        <div
            class={classes!(
                "flex", "items-start", "justify-between", "gap-2",
                "p-3", "rounded-md", "shadow-lg", "border",
                "bg-white", "dark:bg-neutral-800",
                border
            )}
        >
            <p class={classes!("text-sm", text)}>
                {&props.toast.message}
            </p>
            <button
                onclick={props.on_close.clone()}
                class="text-neutral-400 hover:text-neutral-600
                       dark:hover:text-neutral-200"
                aria-label="Dismiss"
            >
                {"\u{00d7}"}
            </button>
        </div>
    }
}
