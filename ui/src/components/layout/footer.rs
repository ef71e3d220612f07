use yew::prelude::*;

#[function_component]
pub fn Footer() -> Html {
    html! {
        <footer class="border-t border-neutral-200 dark:border-neutral-700
                       mt-16">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6">
                <p class="text-sm text-center text-neutral-500
                          dark:text-neutral-400">
                    {"JobDeck"}
                </p>
            </div>
        </footer>
    }
}
