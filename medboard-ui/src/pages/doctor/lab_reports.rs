//! Doctor Lab Reports Page
//!
//! Order tests and record results as they come back.

use leptos::*;

use crate::api;
use crate::api::types::LabReport;
use crate::components::{DateField, Modal, SearchBox, SelectField, SubmitRow, TextField};
use crate::pages::home::today;
use crate::state::global::GlobalState;

/// Lab reports page
#[component]
pub fn LabReports() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let records = create_rw_signal(Vec::<LabReport>::new());
    let (query, set_query) = create_signal(String::new());
    let (show_form, set_show_form) = create_signal(false);
    let (editing, set_editing) = create_signal(Option::<LabReport>::None);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<LabReport>("doctor", "lab-reports", "").await {
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
            .filter(|r| {
                needle.is_empty()
                    || format!("{} {}", r.patient, r.test_name).to_lowercase().contains(&needle)
            })
            .collect::<Vec<_>>()
    };

    let state_for_rows = state.clone();

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Lab Reports"</h1>
                    <p class="text-gray-400 mt-1">"Ordered tests and results"</p>
                </div>
                <button
                    on:click=move |_| {
                        set_editing.set(None);
                        set_show_form.set(true);
                    }
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "+ Order Test"
                </button>
            </div>

            <SearchBox value=query set_value=set_query placeholder="Search by patient or test..." />

            {move || {
                if show_form.get() {
                    let on_close = move || {
                        set_show_form.set(false);
                        set_editing.set(None);
                    };
                    view! { <ReportForm existing=editing.get() records=records on_close=on_close /> }
                        .into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            <div class="bg-gray-800 rounded-xl border border-gray-700 overflow-x-auto">
                <table class="w-full text-sm text-left">
                    <thead class="text-gray-400 border-b border-gray-700">
                        <tr>
                            <th class="py-3 px-4">"Patient"</th>
                            <th class="py-3 px-4">"Test"</th>
                            <th class="py-3 px-4">"Result"</th>
                            <th class="py-3 px-4">"Status"</th>
                            <th class="py-3 px-4">"Date"</th>
                            <th class="py-3 px-4 text-right">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = filtered();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="6" class="text-center text-gray-400 py-10">
                                            "No reports match."
                                        </td>
                                    </tr>
                                }.into_view()
                            } else {
                                rows.into_iter().map(|report| {
                                    let state = state_for_rows.clone();
                                    let id = report.id;
                                    let edit_copy = report.clone();
                                    let status_class = if report.status == "completed" {
                                        "bg-green-700 text-green-100"
                                    } else {
                                        "bg-yellow-700 text-yellow-100"
                                    };
                                    view! {
                                        <tr class="border-b border-gray-700/50 hover:bg-gray-700/30">
                                            <td class="py-3 px-4 font-medium">{report.patient.clone()}</td>
                                            <td class="py-3 px-4">{report.test_name.clone()}</td>
                                            <td class="py-3 px-4 text-gray-400">
                                                {if report.result.is_empty() {
                                                    "—".to_string()
                                                } else {
                                                    report.result.clone()
                                                }}
                                            </td>
                                            <td class="py-3 px-4">
                                                <span class=format!("{} text-xs px-2 py-0.5 rounded-full capitalize", status_class)>
                                                    {report.status.clone()}
                                                </span>
                                            </td>
                                            <td class="py-3 px-4 text-gray-400">{report.date.clone()}</td>
                                            <td class="py-3 px-4 text-right space-x-2">
                                                <button
                                                    on:click=move |_| {
                                                        set_editing.set(Some(edit_copy.clone()));
                                                        set_show_form.set(true);
                                                    }
                                                    class="px-3 py-1 bg-gray-700 hover:bg-gray-600 rounded text-xs transition-colors"
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    on:click=move |_| {
                                                        let state = state.clone();
                                                        spawn_local(async move {
                                                            match api::delete_record("doctor", "lab-reports", id).await {
                                                                Ok(()) => {
                                                                    records.update(|r| r.retain(|x| x.id != id));
                                                                    state.show_success("Report removed");
                                                                }
                                                                Err(e) => state.show_error(&e),
                                                            }
                                                        });
                                                    }
                                                    class="px-3 py-1 bg-red-700/70 hover:bg-red-700 rounded text-xs transition-colors"
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn ReportForm(
    existing: Option<LabReport>,
    records: RwSignal<Vec<LabReport>>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let is_edit = existing.is_some();
    let initial = existing.unwrap_or_default();
    let id = initial.id;

    let (patient, set_patient) = create_signal(initial.patient);
    let (test_name, set_test_name) = create_signal(initial.test_name);
    let (result, set_result) = create_signal(initial.result);
    let (status, set_status) = create_signal(if initial.status.is_empty() {
        "pending".to_string()
    } else {
        initial.status
    });
    let (date, set_date) = create_signal(if initial.date.is_empty() {
        today()
    } else {
        initial.date
    });
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if patient.get().trim().is_empty() || test_name.get().trim().is_empty() {
            state_for_submit.show_error("Patient and test name are required");
            return;
        }

        let record = LabReport {
            id,
            patient: patient.get(),
            test_name: test_name.get(),
            result: result.get(),
            status: status.get(),
            date: date.get(),
        };

        set_submitting.set(true);
        let state_clone = state_for_submit.clone();
        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            let saved = if is_edit {
                api::update_record::<LabReport, LabReport>("doctor", "lab-reports", id, &record)
                    .await
            } else {
                api::create_record::<LabReport, LabReport>("doctor", "lab-reports", &record).await
            };

            match saved {
                Ok(saved) => {
                    if is_edit {
                        records.update(|r| {
                            if let Some(slot) = r.iter_mut().find(|x| x.id == id) {
                                *slot = saved.clone();
                            }
                        });
                        state_clone.show_success("Report updated");
                    } else {
                        records.update(|r| r.push(saved));
                        state_clone.show_success("Test ordered");
                    }
                    on_close_inner();
                }
                Err(e) => state_clone.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    let title = if is_edit { "Edit Report" } else { "Order Test" };

    view! {
        <Modal title=title on_close=on_close.clone()>
            <form on:submit=on_submit class="space-y-4">
                <TextField label="Patient" value=patient set_value=set_patient />
                <TextField label="Test name" value=test_name set_value=set_test_name placeholder="e.g., Lipid Profile" />
                <TextField label="Result" value=result set_value=set_result placeholder="(empty while pending)" />
                <SelectField
                    label="Status"
                    value=status
                    set_value=set_status
                    options=vec![("pending", "Pending"), ("completed", "Completed")]
                />
                <DateField label="Date" value=date set_value=set_date />
                <SubmitRow submitting=submitting on_cancel=on_close />
            </form>
        </Modal>
    }
}
