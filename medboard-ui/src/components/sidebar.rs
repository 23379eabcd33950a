//! Sidebar Component
//!
//! Per-role navigation rail rendered by the layout shells.

use leptos::*;
use leptos_router::*;

/// Navigation sidebar with a brand header and the role's links
#[component]
pub fn Sidebar(
    #[prop(into)]
    title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <aside class="w-60 shrink-0 bg-gray-800 border-r border-gray-700 min-h-screen">
            <div class="px-5 py-5 border-b border-gray-700">
                <A href="/" class="flex items-center space-x-2">
                    <span class="text-2xl">"🏥"</span>
                    <span class="text-lg font-bold text-white">"Medboard"</span>
                </A>
                <div class="text-xs text-gray-400 mt-1 uppercase tracking-wide">{title}</div>
            </div>
            <nav class="p-3 space-y-1">
                {children()}
            </nav>
        </aside>
    }
}

/// Individual sidebar link
#[component]
pub fn SidebarLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="block px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
