use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;
use crate::components::ToastContainer;
use crate::components::layout::{Footer, Header};

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    pub children: Children,
}

#[function_component]
pub fn MainLayout(props: &MainLayoutProps) -> Html {
    let (state, _) = use_store::<State>();
    let dark_class = if state.is_dark_mode() { "dark" } else { "" };

    html! {
        <div class={classes!(dark_class)}>
            <div class="min-h-screen bg-white dark:bg-neutral-900
                        text-neutral-900 dark:text-neutral-100
                        transition-colors flex flex-col">
                <Header />
                <main class="max-w-7xl w-full mx-auto px-4 sm:px-6 lg:px-8
                             py-8 flex-1">
                    {for props.children.iter()}
                </main>
                <Footer />
                <ToastContainer />
            </div>
        </div>
    }
}
