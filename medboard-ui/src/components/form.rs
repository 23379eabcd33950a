//! Form Field Components
//!
//! Labeled inputs bound to string signals. Every add/edit modal binds its
//! fields through these; numeric fields stay strings until submit, the
//! same way the original forms kept raw input text.

use leptos::*;

/// Labeled text input
#[component]
pub fn TextField(
    label: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    #[prop(default = "")]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}

/// Labeled numeric input; the bound signal stays a string and pages parse
/// on submit
#[component]
pub fn NumberField(
    label: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    #[prop(default = "")]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type="number"
                step="any"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}

/// Labeled date input (yyyy-mm-dd, the API's wire format)
#[component]
pub fn DateField(
    label: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type="date"
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}

/// Labeled select with static options as (value, label) pairs
#[component]
pub fn SelectField(
    label: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <select
                on:change=move |ev| set_value.set(event_target_value(&ev))
                prop:value=move || value.get()
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            >
                {options.into_iter().map(|(option_value, option_label)| view! {
                    <option value=option_value>{option_label}</option>
                }).collect_view()}
            </select>
        </div>
    }
}

/// Cancel/submit footer shared by every modal form
#[component]
pub fn SubmitRow(
    submitting: ReadSignal<bool>,
    on_cancel: impl Fn() + 'static + Clone,
    #[prop(default = "Save")]
    label: &'static str,
    #[prop(default = "Saving...")]
    busy_label: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex space-x-3 pt-4">
            <button
                type="button"
                on:click=move |_| on_cancel()
                class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
            >
                "Cancel"
            </button>
            <button
                type="submit"
                disabled=move || submitting.get()
                class="flex-1 px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       rounded-lg font-medium transition-colors"
            >
                {move || if submitting.get() { busy_label } else { label }}
            </button>
        </div>
    }
}

/// Labeled multi-line text input
#[component]
pub fn TextAreaField(
    label: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    #[prop(default = "")]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <textarea
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                rows="3"
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}
