//! Tab Button Component
//!
//! Section toggle used by pages that host more than one collection.

use leptos::*;

/// One tab in a section toggle row
#[component]
pub fn TabButton(
    label: &'static str,
    #[prop(into)]
    active: Signal<bool>,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=on_click
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if active.get() {
                    format!("{} bg-gray-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-400 hover:text-white", base)
                }
            }
        >
            {label}
        </button>
    }
}
