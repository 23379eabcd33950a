//! Patient Dashboard Page
//!
//! Stats plus the notice board entries addressed to patients.

use leptos::*;

use crate::api;
use crate::api::types::{Notice, PatientDashboard};
use crate::components::StatCard;
use crate::state::global::GlobalState;

/// Patient overview page
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let stats = create_rw_signal(PatientDashboard::default());
    let notices = create_rw_signal(Vec::<Notice>::new());

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_patient_dashboard().await {
                Ok(dashboard) => stats.set(dashboard),
                Err(e) => state.show_error(&e),
            }
            match api::fetch_list::<Notice>("patient", "notices", "").await {
                Ok(items) => notices.set(
                    items
                        .into_iter()
                        .filter(|n| n.audience == "all" || n.audience == "patients")
                        .collect(),
                ),
                Err(e) => state.show_error(&e),
            }
        });
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Your care at a glance"</p>
            </div>

            <div class="grid md:grid-cols-2 lg:grid-cols-5 gap-4">
                <StatCard
                    label="Appointments"
                    value=Signal::derive(move || stats.get().appointments.to_string())
                    icon="📅"
                />
                <StatCard
                    label="Prescriptions"
                    value=Signal::derive(move || stats.get().prescriptions.to_string())
                    icon="💊"
                />
                <StatCard
                    label="Lab Reports"
                    value=Signal::derive(move || stats.get().lab_reports.to_string())
                    icon="🧪"
                />
                <StatCard
                    label="Invoices"
                    value=Signal::derive(move || stats.get().invoices.to_string())
                    icon="🧾"
                />
                <StatCard
                    label="Amount Due"
                    value=Signal::derive(move || format!("{:.2}", stats.get().amount_due))
                    icon="💰"
                />
            </div>

            // Notice board
            <section>
                <h2 class="text-xl font-semibold mb-4">"Notices"</h2>
                <div class="space-y-3">
                    {move || {
                        let rows = notices.get();
                        if rows.is_empty() {
                            view! {
                                <p class="text-gray-400">"No notices right now."</p>
                            }.into_view()
                        } else {
                            rows.into_iter().map(|notice| view! {
                                <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
                                    <div class="flex items-center justify-between">
                                        <h3 class="font-semibold">{notice.title}</h3>
                                        <span class="text-gray-500 text-sm">{notice.date}</span>
                                    </div>
                                    <p class="text-gray-400 text-sm mt-1">{notice.body}</p>
                                </div>
                            }).collect_view()
                        }
                    }}
                </div>
            </section>
        </div>
    }
}
