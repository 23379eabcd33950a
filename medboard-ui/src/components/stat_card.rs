//! Stat Card Component
//!
//! Dashboard tile showing one figure.

use leptos::*;

/// One dashboard stat tile
#[component]
pub fn StatCard(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    #[prop(default = "")]
    icon: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-5 border border-gray-700">
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{label}</span>
                <span class="text-xl">{icon}</span>
            </div>
            <div class="text-3xl font-bold mt-2">{move || value.get()}</div>
        </div>
    }
}
