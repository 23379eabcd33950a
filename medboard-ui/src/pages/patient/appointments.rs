//! Patient Appointments Page
//!
//! Book a consultation and see the appointment list. Patients can only
//! add; changes go through the front desk.

use leptos::*;

use crate::api;
use crate::api::types::Appointment;
use crate::components::SearchBox;
use crate::pages::doctor::appointments::{AppointmentForm, StatusBadge};
use crate::state::global::GlobalState;

/// Patient appointment page
#[component]
pub fn Appointments() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let records = create_rw_signal(Vec::<Appointment>::new());
    let (query, set_query) = create_signal(String::new());
    let (show_form, set_show_form) = create_signal(false);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<Appointment>("patient", "appointments", "").await {
                Ok(items) => records.set(items),
                Err(e) => state.show_error(&e),
            }
        });
    });

    let filtered = move || {
        let needle = query.get().to_lowercase();
        records
            .get()
            .into_iter()
            .filter(|a| {
                needle.is_empty()
                    || format!("{} {}", a.doctor, a.reason).to_lowercase().contains(&needle)
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Appointments"</h1>
                    <p class="text-gray-400 mt-1">"Book and track consultations"</p>
                </div>
                <button
                    on:click=move |_| set_show_form.set(true)
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "+ Book Appointment"
                </button>
            </div>

            <SearchBox value=query set_value=set_query placeholder="Search by doctor or reason..." />

            {move || {
                if show_form.get() {
                    let on_close = move || set_show_form.set(false);
                    view! {
                        <AppointmentForm
                            existing=None
                            records=records
                            section="patient"
                            on_close=on_close
                        />
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            <div class="bg-gray-800 rounded-xl border border-gray-700 overflow-x-auto">
                <table class="w-full text-sm text-left">
                    <thead class="text-gray-400 border-b border-gray-700">
                        <tr>
                            <th class="py-3 px-4">"Patient"</th>
                            <th class="py-3 px-4">"Doctor"</th>
                            <th class="py-3 px-4">"Date"</th>
                            <th class="py-3 px-4">"Time"</th>
                            <th class="py-3 px-4">"Reason"</th>
                            <th class="py-3 px-4">"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = filtered();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="6" class="text-center text-gray-400 py-10">
                                            "No appointments yet."
                                        </td>
                                    </tr>
                                }.into_view()
                            } else {
                                rows.into_iter().map(|appointment| view! {
                                    <tr class="border-b border-gray-700/50 hover:bg-gray-700/30">
                                        <td class="py-3 px-4 font-medium">{appointment.patient}</td>
                                        <td class="py-3 px-4">{appointment.doctor}</td>
                                        <td class="py-3 px-4 text-gray-400">{appointment.date}</td>
                                        <td class="py-3 px-4">{appointment.time}</td>
                                        <td class="py-3 px-4 text-gray-400">{appointment.reason}</td>
                                        <td class="py-3 px-4">
                                            <StatusBadge status=appointment.status />
                                        </td>
                                    </tr>
                                }).collect_view()
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
