use leptos::prelude::*;
use lib_core::view::LOADING_TEXT;

#[component]
pub fn Loader() -> impl IntoView {
    view! { <span class="loader">{LOADING_TEXT}</span> }
}
