//! Search Box Component
//!
//! Substring filter input wired to a page's query signal.

use leptos::*;

/// Search input; pages debounce nothing, the filter is cheap
#[component]
pub fn SearchBox(
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    #[prop(default = "Search...")]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <input
            type="text"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| set_value.set(event_target_value(&ev))
            class="w-full md:w-72 bg-gray-700 rounded-lg px-4 py-2
                   border border-gray-600 focus:border-primary-500 focus:outline-none"
        />
    }
}
