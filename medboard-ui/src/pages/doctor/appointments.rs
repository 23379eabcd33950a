//! Doctor Appointments Page
//!
//! The appointment book: list, search, schedule, edit status, cancel.

use leptos::*;

use crate::api;
use crate::api::types::Appointment;
use crate::components::{DateField, Modal, SearchBox, SelectField, SubmitRow, TextField};
use crate::pages::home::today;
use crate::state::global::GlobalState;

/// Appointment book page
#[component]
pub fn Appointments() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let records = create_rw_signal(Vec::<Appointment>::new());
    let (query, set_query) = create_signal(String::new());
    let (show_form, set_show_form) = create_signal(false);
    let (editing, set_editing) = create_signal(Option::<Appointment>::None);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<Appointment>("doctor", "appointments", "").await {
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
                    || format!("{} {} {}", a.patient, a.doctor, a.reason)
                        .to_lowercase()
                        .contains(&needle)
            })
            .collect::<Vec<_>>()
    };

    let state_for_rows = state.clone();

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Appointments"</h1>
                    <p class="text-gray-400 mt-1">"Your appointment book"</p>
                </div>
                <button
                    on:click=move |_| {
                        set_editing.set(None);
                        set_show_form.set(true);
                    }
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "+ Schedule"
                </button>
            </div>

            <SearchBox value=query set_value=set_query placeholder="Search by patient or reason..." />

            {move || {
                if show_form.get() {
                    let on_close = move || {
                        set_show_form.set(false);
                        set_editing.set(None);
                    };
                    view! {
                        <AppointmentForm
                            existing=editing.get()
                            records=records
                            section="doctor"
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
                            <th class="py-3 px-4 text-right">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = filtered();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="7" class="text-center text-gray-400 py-10">
                                            "No appointments match."
                                        </td>
                                    </tr>
                                }.into_view()
                            } else {
                                rows.into_iter().map(|appointment| {
                                    let state = state_for_rows.clone();
                                    let id = appointment.id;
                                    let edit_copy = appointment.clone();
                                    view! {
                                        <tr class="border-b border-gray-700/50 hover:bg-gray-700/30">
                                            <td class="py-3 px-4 font-medium">{appointment.patient.clone()}</td>
                                            <td class="py-3 px-4">{appointment.doctor.clone()}</td>
                                            <td class="py-3 px-4 text-gray-400">{appointment.date.clone()}</td>
                                            <td class="py-3 px-4">{appointment.time.clone()}</td>
                                            <td class="py-3 px-4 text-gray-400">{appointment.reason.clone()}</td>
                                            <td class="py-3 px-4">
                                                <StatusBadge status=appointment.status.clone() />
                                            </td>
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
                                                            match api::delete_record("doctor", "appointments", id).await {
                                                                Ok(()) => {
                                                                    records.update(|r| r.retain(|a| a.id != id));
                                                                    state.show_success("Appointment removed");
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

/// Appointment status pill
#[component]
pub fn StatusBadge(status: String) -> impl IntoView {
    let color = match status.as_str() {
        "scheduled" => "bg-blue-700 text-blue-100",
        "completed" => "bg-green-700 text-green-100",
        "cancelled" => "bg-gray-600 text-gray-200",
        _ => "bg-gray-600 text-gray-200",
    };
    view! {
        <span class=format!("{} text-xs px-2 py-0.5 rounded-full capitalize", color)>
            {status}
        </span>
    }
}

/// Shared add/edit appointment modal; the patient section books through
/// the same component with its own API section
#[component]
pub fn AppointmentForm(
    existing: Option<Appointment>,
    records: RwSignal<Vec<Appointment>>,
    section: &'static str,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let is_edit = existing.is_some();
    let initial = existing.unwrap_or_default();
    let id = initial.id;

    let (patient, set_patient) = create_signal(initial.patient);
    let (doctor, set_doctor) = create_signal(initial.doctor);
    let (date, set_date) = create_signal(if initial.date.is_empty() {
        today()
    } else {
        initial.date
    });
    let (time, set_time) = create_signal(initial.time);
    let (reason, set_reason) = create_signal(initial.reason);
    let (status, set_status) = create_signal(if initial.status.is_empty() {
        "scheduled".to_string()
    } else {
        initial.status
    });
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if patient.get().trim().is_empty()
            || doctor.get().trim().is_empty()
            || time.get().trim().is_empty()
        {
            state_for_submit.show_error("Patient, doctor and time are required");
            return;
        }

        let record = Appointment {
            id,
            patient: patient.get(),
            doctor: doctor.get(),
            date: date.get(),
            time: time.get(),
            reason: reason.get(),
            status: status.get(),
        };

        set_submitting.set(true);
        let state_clone = state_for_submit.clone();
        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            let result = if is_edit {
                api::update_record::<Appointment, Appointment>(section, "appointments", id, &record)
                    .await
            } else {
                api::create_record::<Appointment, Appointment>(section, "appointments", &record)
                    .await
            };

            match result {
                Ok(saved) => {
                    if is_edit {
                        records.update(|r| {
                            if let Some(slot) = r.iter_mut().find(|a| a.id == id) {
                                *slot = saved.clone();
                            }
                        });
                        state_clone.show_success("Appointment updated");
                    } else {
                        records.update(|r| r.push(saved));
                        state_clone.show_success("Appointment scheduled");
                    }
                    on_close_inner();
                }
                Err(e) => state_clone.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    let title = if is_edit { "Edit Appointment" } else { "Schedule Appointment" };

    view! {
        <Modal
            title=title
            on_close=on_close.clone()
        >
            <form on:submit=on_submit class="space-y-4">
                <TextField label="Patient" value=patient set_value=set_patient />
                <TextField label="Doctor" value=doctor set_value=set_doctor />
                <DateField label="Date" value=date set_value=set_date />
                <TextField label="Time" value=time set_value=set_time placeholder="e.g., 10:30" />
                <TextField label="Reason" value=reason set_value=set_reason placeholder="(optional)" />
                <SelectField
                    label="Status"
                    value=status
                    set_value=set_status
                    options=vec![
                        ("scheduled", "Scheduled"),
                        ("completed", "Completed"),
                        ("cancelled", "Cancelled"),
                    ]
                />
                <SubmitRow submitting=submitting on_cancel=on_close />
            </form>
        </Modal>
    }
}
