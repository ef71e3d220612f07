use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn NotFoundPage() -> Html {
    html! {
        <div class="text-center py-16">
            <h1 class="text-4xl font-bold text-neutral-900
                       dark:text-neutral-100 mb-2">
                {"404"}
            </h1>
            <p class="text-neutral-600 dark:text-neutral-400 mb-6">
                {"Page not found"}
            </p>
            <Link<Route>
                to={Route::Home}
                classes={classes!(
                    "text-sm", "font-medium", "underline",
                    "text-neutral-700", "dark:text-neutral-300"
                )}
            >
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}
