//! Admin Dashboard Page
//!
//! Collection counts and the income/expense/balance sums.

use leptos::*;

use crate::api;
use crate::api::types::AdminDashboard;
use crate::components::StatCard;
use crate::state::global::GlobalState;

/// Admin overview page
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let stats = create_rw_signal(AdminDashboard::default());

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_admin_dashboard().await {
                Ok(dashboard) => stats.set(dashboard),
                Err(e) => state.show_error(&e),
            }
        });
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Hospital at a glance"</p>
            </div>

            // Counts
            <div class="grid md:grid-cols-3 lg:grid-cols-6 gap-4">
                <StatCard label="Patients" value=Signal::derive(move || stats.get().patients.to_string()) icon="🧑" />
                <StatCard label="Doctors" value=Signal::derive(move || stats.get().doctors.to_string()) icon="🩺" />
                <StatCard label="Appointments" value=Signal::derive(move || stats.get().appointments.to_string()) icon="📅" />
                <StatCard label="Donors" value=Signal::derive(move || stats.get().donors.to_string()) icon="🩸" />
                <StatCard label="Medicines" value=Signal::derive(move || stats.get().medicines.to_string()) icon="💊" />
                <StatCard label="Enquiries" value=Signal::derive(move || stats.get().enquiries.to_string()) icon="✉" />
            </div>

            // Finance sums (plain sums over the transaction list)
            <section>
                <h2 class="text-xl font-semibold mb-4">"Finances"</h2>
                <div class="grid md:grid-cols-3 gap-4">
                    <StatCard
                        label="Income"
                        value=Signal::derive(move || format!("{:.2}", stats.get().income))
                        icon="📈"
                    />
                    <StatCard
                        label="Expense"
                        value=Signal::derive(move || format!("{:.2}", stats.get().expense))
                        icon="📉"
                    />
                    <StatCard
                        label="Balance"
                        value=Signal::derive(move || format!("{:.2}", stats.get().balance))
                        icon="🧾"
                    />
                </div>
            </section>
        </div>
    }
}
