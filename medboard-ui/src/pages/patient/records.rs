//! Patient Records Page
//!
//! Read-only views of prescriptions, lab reports, and documents.

use leptos::*;

use crate::api;
use crate::api::types::{Document, LabReport, Prescription};
use crate::components::TabButton;
use crate::state::global::GlobalState;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Prescriptions,
    LabReports,
    Documents,
}

/// My-records page
#[component]
pub fn Records() -> impl IntoView {
    let (tab, set_tab) = create_signal(Tab::Prescriptions);

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"My Records"</h1>
                <p class="text-gray-400 mt-1">"Prescriptions, lab reports, and documents"</p>
            </div>

            <div class="flex space-x-2">
                <TabButton label="Prescriptions" active=Signal::derive(move || tab.get() == Tab::Prescriptions)
                    on_click=move |_| set_tab.set(Tab::Prescriptions) />
                <TabButton label="Lab Reports" active=Signal::derive(move || tab.get() == Tab::LabReports)
                    on_click=move |_| set_tab.set(Tab::LabReports) />
                <TabButton label="Documents" active=Signal::derive(move || tab.get() == Tab::Documents)
                    on_click=move |_| set_tab.set(Tab::Documents) />
            </div>

            {move || match tab.get() {
                Tab::Prescriptions => view! { <PrescriptionsList /> }.into_view(),
                Tab::LabReports => view! { <LabReportsList /> }.into_view(),
                Tab::Documents => view! { <DocumentsList /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn PrescriptionsList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let records = create_rw_signal(Vec::<Prescription>::new());

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<Prescription>("patient", "prescriptions", "").await {
                Ok(items) => records.set(items),
                Err(e) => state.show_error(&e),
            }
        });
    });

    view! {
        <div class="space-y-3">
            {move || {
                let rows = records.get();
                if rows.is_empty() {
                    view! { <p class="text-gray-400 text-center py-10">"No prescriptions on file."</p> }
                        .into_view()
                } else {
                    rows.into_iter().map(|prescription| view! {
                        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
                            <div class="flex items-center justify-between">
                                <div class="flex items-center space-x-2">
                                    <span class="font-semibold">{prescription.medication}</span>
                                    <span class="text-gray-400 text-sm">{prescription.dosage}</span>
                                </div>
                                <span class="text-gray-500 text-sm">{prescription.date}</span>
                            </div>
                            <p class="text-gray-400 text-sm mt-1">
                                "Prescribed by " {prescription.doctor}
                                {(!prescription.instructions.is_empty())
                                    .then(|| format!(" — {}", prescription.instructions))}
                            </p>
                        </div>
                    }).collect_view()
                }
            }}
        </div>
    }
}

#[component]
fn LabReportsList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let records = create_rw_signal(Vec::<LabReport>::new());

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<LabReport>("patient", "lab-reports", "").await {
                Ok(items) => records.set(items),
                Err(e) => state.show_error(&e),
            }
        });
    });

    view! {
        <div class="space-y-3">
            {move || {
                let rows = records.get();
                if rows.is_empty() {
                    view! { <p class="text-gray-400 text-center py-10">"No lab reports on file."</p> }
                        .into_view()
                } else {
                    rows.into_iter().map(|report| {
                        let status_class = if report.status == "completed" {
                            "bg-green-700 text-green-100"
                        } else {
                            "bg-yellow-700 text-yellow-100"
                        };
                        view! {
                            <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
                                <div class="flex items-center justify-between">
                                    <div class="flex items-center space-x-2">
                                        <span class="font-semibold">{report.test_name}</span>
                                        <span class=format!("{} text-xs px-2 py-0.5 rounded-full capitalize", status_class)>
                                            {report.status}
                                        </span>
                                    </div>
                                    <span class="text-gray-500 text-sm">{report.date}</span>
                                </div>
                                <p class="text-gray-400 text-sm mt-1">
                                    {if report.result.is_empty() {
                                        "Result pending".to_string()
                                    } else {
                                        report.result
                                    }}
                                </p>
                            </div>
                        }
                    }).collect_view()
                }
            }}
        </div>
    }
}

#[component]
fn DocumentsList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let records = create_rw_signal(Vec::<Document>::new());

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<Document>("patient", "documents", "").await {
                Ok(items) => records.set(items),
                Err(e) => state.show_error(&e),
            }
        });
    });

    view! {
        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
            {move || {
                let rows = records.get();
                if rows.is_empty() {
                    view! {
                        <div class="col-span-full text-center py-10">
                            <p class="text-gray-400">"No documents on file."</p>
                        </div>
                    }.into_view()
                } else {
                    rows.into_iter().map(|document| view! {
                        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
                            <div class="flex items-start justify-between">
                                <h3 class="font-semibold">{document.title}</h3>
                                <span class="bg-gray-700 text-xs px-2 py-0.5 rounded-full">
                                    {document.category}
                                </span>
                            </div>
                            <p class="text-gray-500 text-sm mt-2">{document.uploaded_on}</p>
                        </div>
                    }).collect_view()
                }
            }}
        </div>
    }
}
