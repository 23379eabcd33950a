//! Doctor Dashboard Page

use leptos::*;

use crate::api;
use crate::api::types::DoctorDashboard;
use crate::components::StatCard;
use crate::state::global::GlobalState;

/// Doctor overview page
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let stats = create_rw_signal(DoctorDashboard::default());

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_doctor_dashboard().await {
                Ok(dashboard) => stats.set(dashboard),
                Err(e) => state.show_error(&e),
            }
        });
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Your day at a glance"</p>
            </div>

            <div class="grid md:grid-cols-2 lg:grid-cols-5 gap-4">
                <StatCard
                    label="Appointments"
                    value=Signal::derive(move || stats.get().appointments.to_string())
                    icon="📅"
                />
                <StatCard
                    label="Scheduled"
                    value=Signal::derive(move || stats.get().scheduled_appointments.to_string())
                    icon="⏰"
                />
                <StatCard
                    label="Prescriptions"
                    value=Signal::derive(move || stats.get().prescriptions.to_string())
                    icon="💊"
                />
                <StatCard
                    label="Patients"
                    value=Signal::derive(move || stats.get().patients.to_string())
                    icon="🧑"
                />
                <StatCard
                    label="Pending Reports"
                    value=Signal::derive(move || stats.get().pending_reports.to_string())
                    icon="🧪"
                />
            </div>
        </div>
    }
}
