//! Layout Shells
//!
//! One shell per audience role: persistent sidebar and top bar around an
//! outlet for the active page. The shells carry no guards; navigating to
//! any section works whether or not the login page was visited.

use leptos::*;
use leptos_router::*;

use crate::components::{Sidebar, SidebarLink};
use crate::state::global::GlobalState;

/// Admin section chrome
#[component]
pub fn AdminShell() -> impl IntoView {
    view! {
        <div class="flex min-h-screen bg-gray-900 text-white">
            <Sidebar title="Admin">
                <SidebarLink href="/admin/dashboard" label="Dashboard" />
                <SidebarLink href="/admin/doctors" label="Doctors" />
                <SidebarLink href="/admin/patients" label="Patients" />
                <SidebarLink href="/admin/blood-bank" label="Blood Bank" />
                <SidebarLink href="/admin/pharmacy" label="Pharmacy" />
                <SidebarLink href="/admin/pathology" label="Pathology" />
                <SidebarLink href="/admin/finance" label="Finances" />
                <SidebarLink href="/admin/communications" label="Communications" />
                <SidebarLink href="/admin/messaging" label="SMS & Mail" />
                <SidebarLink href="/admin/outreach" label="Outreach" />
                <SidebarLink href="/admin/users" label="Users" />
            </Sidebar>

            <div class="flex-1 flex flex-col">
                <TopBar section="Administration" />
                <main class="flex-1 px-6 py-6">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}

/// Doctor section chrome
#[component]
pub fn DoctorShell() -> impl IntoView {
    view! {
        <div class="flex min-h-screen bg-gray-900 text-white">
            <Sidebar title="Doctor">
                <SidebarLink href="/doctor/dashboard" label="Dashboard" />
                <SidebarLink href="/doctor/appointments" label="Appointments" />
                <SidebarLink href="/doctor/prescriptions" label="Prescriptions" />
                <SidebarLink href="/doctor/lab-reports" label="Lab Reports" />
            </Sidebar>

            <div class="flex-1 flex flex-col">
                <TopBar section="Doctor" />
                <main class="flex-1 px-6 py-6">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}

/// Patient section chrome
#[component]
pub fn PatientShell() -> impl IntoView {
    view! {
        <div class="flex min-h-screen bg-gray-900 text-white">
            <Sidebar title="Patient">
                <SidebarLink href="/patient/dashboard" label="Dashboard" />
                <SidebarLink href="/patient/appointments" label="Appointments" />
                <SidebarLink href="/patient/records" label="My Records" />
                <SidebarLink href="/patient/invoices" label="Invoices" />
            </Sidebar>

            <div class="flex-1 flex flex-col">
                <TopBar section="Patient" />
                <main class="flex-1 px-6 py-6">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}

/// Top bar: section label, session name, logout
#[component]
fn TopBar(section: &'static str) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let state_for_logout = state.clone();
    let on_logout = move |_| {
        state_for_logout.sign_out();
        navigate("/login", Default::default());
    };

    view! {
        <header class="h-14 bg-gray-800 border-b border-gray-700 flex items-center justify-between px-6">
            <span class="font-semibold">{section}</span>
            <div class="flex items-center space-x-4 text-sm">
                <span class="text-gray-400">
                    {move || {
                        state.session.get()
                            .map(|s| s.display_name)
                            .unwrap_or_else(|| "Guest".to_string())
                    }}
                </span>
                <button
                    on:click=on_logout
                    class="px-3 py-1.5 bg-gray-700 hover:bg-gray-600 rounded-lg transition-colors"
                >
                    "Log out"
                </button>
            </div>
        </header>
    }
}
