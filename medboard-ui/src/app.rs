//! App Root Component
//!
//! The routing shell: URL paths map to layout+page pairs for the three
//! audience roles plus the public marketing site. Index routes redirect to
//! a default child; there are no guards and no async loaders.

use leptos::*;
use leptos_router::*;

use crate::components::Toast;
use crate::layout::{AdminShell, DoctorShell, PatientShell};
use crate::pages;
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white">
                <Routes>
                    // Public site
                    <Route path="/" view=pages::Home />
                    <Route path="/login" view=pages::Login />

                    // Admin section
                    <Route path="/admin" view=AdminShell>
                        <Route path="" view=|| view! { <Redirect path="/admin/dashboard"/> } />
                        <Route path="dashboard" view=pages::admin::Dashboard />
                        <Route path="doctors" view=pages::admin::Doctors />
                        <Route path="patients" view=pages::admin::Patients />
                        <Route path="blood-bank" view=pages::admin::BloodBank />
                        <Route path="pharmacy" view=pages::admin::Pharmacy />
                        <Route path="pathology" view=pages::admin::Pathology />
                        <Route path="finance" view=pages::admin::Finance />
                        <Route path="communications" view=pages::admin::Communications />
                        <Route path="messaging" view=pages::admin::Messaging />
                        <Route path="outreach" view=pages::admin::Outreach />
                        <Route path="users" view=pages::admin::Users />
                    </Route>

                    // Doctor section
                    <Route path="/doctor" view=DoctorShell>
                        <Route path="" view=|| view! { <Redirect path="/doctor/dashboard"/> } />
                        <Route path="dashboard" view=pages::doctor::Dashboard />
                        <Route path="appointments" view=pages::doctor::Appointments />
                        <Route path="prescriptions" view=pages::doctor::Prescriptions />
                        <Route path="lab-reports" view=pages::doctor::LabReports />
                    </Route>

                    // Patient section
                    <Route path="/patient" view=PatientShell>
                        <Route path="" view=|| view! { <Redirect path="/patient/dashboard"/> } />
                        <Route path="dashboard" view=pages::patient::Dashboard />
                        <Route path="appointments" view=pages::patient::Appointments />
                        <Route path="records" view=pages::patient::Records />
                        <Route path="invoices" view=pages::patient::Invoices />
                    </Route>

                    <Route path="/*any" view=NotFound />
                </Routes>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back to the home page"
            </A>
        </div>
    }
}
