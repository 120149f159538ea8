//! Page header with optional back link and the page title.

use leptos::prelude::*;
use leptos_router::components::A;
use lib_core::config::core_config;
use lib_core::route::{with_base, Route};

use crate::utils::document;

/// Renders the title and mirrors it into `document.title`.
#[component]
pub fn Header(#[prop(into)] title: Signal<String>, #[prop(optional)] back: bool) -> impl IntoView {
    Effect::new(move |_| document::set_title(&title.get()));

    let home = with_base(&core_config().base_path, &Route::Coins.path());

    view! {
        <header class="header">
            <div class="side">
                {back.then(|| view! {
                    <A href=home>
                        <span class="back-btn">"←"</span>
                    </A>
                })}
            </div>
            <h1 class="title">{move || title.get()}</h1>
            <div class="side"></div>
        </header>
    }
}
